//! League test utilities.
//!
//! Helpers for integration testing: scripted console input, captured output
//! splitting, an in-memory database, and player fixtures.

use std::io::Cursor;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Console input that answers each prompt with the next line.
pub fn script(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut input = String::new();
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    Cursor::new(input.into_bytes())
}

/// Console input from raw bytes, for input that is not valid UTF-8.
pub fn raw_script(bytes: &[u8]) -> Cursor<Vec<u8>> {
    Cursor::new(bytes.to_vec())
}

/// Split captured console output into lines.
///
/// Prompts written without a newline stay glued to the next line, exactly
/// as a user would see them.
pub fn output_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Whether any captured line contains `needle`.
pub fn contains_line(output: &[String], needle: &str) -> bool {
    output.iter().any(|line| line.contains(needle))
}

/// Single-connection in-memory SQLite pool.
///
/// Every connection to `sqlite::memory:` opens a fresh database, so the pool
/// is capped at one connection that never expires.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap_or_else(|e| panic!("failed to open in-memory database: {e}"))
}

/// Create a test player with default values.
pub fn test_player(nickname: &str) -> TestPlayer {
    TestPlayer {
        nickname: nickname.to_string(),
        first_name: None,
        last_name: None,
        email: None,
        age: None,
    }
}

/// A test player builder for creating fixtures.
#[derive(Debug, Clone)]
pub struct TestPlayer {
    pub nickname: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl TestPlayer {
    /// Set first and last name.
    pub fn named(mut self, first: &str, last: &str) -> Self {
        self.first_name = Some(first.to_string());
        self.last_name = Some(last.to_string());
        self
    }

    /// Set the email.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Set the age.
    pub fn aged(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    /// Answers for the create-player form, in field order:
    /// first name, last name, email, nickname, age.
    pub fn form_answers(&self) -> Vec<String> {
        vec![
            self.first_name.clone().unwrap_or_default(),
            self.last_name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.nickname.clone(),
            self.age.map(|a| a.to_string()).unwrap_or_default(),
        ]
    }

    /// Insert the player directly, returning its id.
    pub async fn insert(&self, pool: &SqlitePool) -> i64 {
        let now = 0_i64;
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO player (first_name, last_name, email, nickname, age, created) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.nickname)
        .bind(self.age)
        .bind(now)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("failed to insert test player '{}': {e}", self.nickname));
        row.0
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! [`TestLeague`] drives the REAL menu tree and components against a fresh
//! in-memory database, feeding scripted console input and returning what
//! the user would have seen.

#![allow(dead_code)]

use std::io::Cursor;

use sqlx::SqlitePool;

use league_kernel::{LineConsole, Navigator, components, db, menu};
use league_test_utils::{TestPlayer, memory_pool, output_lines, raw_script, script};

/// Test league wrapper around the real tree, registry, and schema.
pub struct TestLeague {
    pub db: SqlitePool,
}

impl TestLeague {
    /// Fresh database with migrations applied.
    pub async fn new() -> Self {
        let db = memory_pool().await;
        db::run_migrations(&db).await.expect("migrations should apply");
        Self { db }
    }

    /// Run the console until the script is exhausted; return output lines.
    pub async fn run(&self, input: &[&str]) -> Vec<String> {
        self.run_console(script(input)).await
    }

    /// Same as [`Self::run`] with raw, possibly undecodable, input bytes.
    pub async fn run_bytes(&self, input: &[u8]) -> Vec<String> {
        self.run_console(raw_script(input)).await
    }

    async fn run_console(&self, input: Cursor<Vec<u8>>) -> Vec<String> {
        let console = LineConsole::new(input, Vec::new());
        let root = menu::load_tree(None).expect("embedded menu should parse");
        let mut navigator = Navigator::new(root, components::registry(), self.db.clone(), console)
            .expect("navigator should build");

        navigator.run().await.expect("navigation should not fail");
        output_lines(&navigator.into_console().into_writer())
    }

    /// Insert a player fixture, returning its id.
    pub async fn add_player(&self, player: TestPlayer) -> i64 {
        player.insert(&self.db).await
    }
}

/// Menu positions of the embedded tree.
pub mod keys {
    pub const MAIN_MENU: &str = "0";
    pub const MANAGEMENT: &str = "1";
    pub const EXIT: &str = "2";

    pub const RECORD_GAME: &str = "0";
    pub const RANKING_TABLE: &str = "1";
    pub const LEAGUE_SEASONS: &str = "2";
    pub const MAIN_BACK: &str = "3";

    pub const CREATE_PLAYER: &str = "0";
    pub const PLAYER_LIST: &str = "1";
    pub const DELETE_PLAYER: &str = "2";
    pub const NEW_SEASON: &str = "3";
    pub const MANAGEMENT_BACK: &str = "4";
}

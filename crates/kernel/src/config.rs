//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default database: a file next to the working directory, created on demand.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://league.db?mode=rwc";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (default: sqlite://league.db?mode=rwc).
    pub database_url: String,

    /// Maximum database connections in pool (default: 1).
    pub database_max_connections: u32,

    /// Static menu tree file. When None, the embedded tree is used.
    pub menu_file: Option<PathBuf>,

    /// Clear the terminal before each dispatched action (default: true).
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: 1,
            menu_file: None,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "1".to_string())
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a valid u32")?;

        let menu_file = lookup("LEAGUE_MENU_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let clear_screen = match lookup("LEAGUE_CLEAR_SCREEN") {
            Some(v) => parse_flag(&v).context("LEAGUE_CLEAR_SCREEN must be true or false")?,
            None => true,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            menu_file,
            clear_screen,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

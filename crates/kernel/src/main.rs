//! League console.
//!
//! Text-menu front end for managing players, games, and rankings.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use league_kernel::{Config, LineConsole, Navigator, components, db, menu};

#[derive(Debug, Parser)]
#[command(name = "league", version, about = "Recreational league console")]
struct Cli {
    /// Static menu tree (TOML). Overrides LEAGUE_MENU_FILE.
    #[arg(long, global = true)]
    menu: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the interactive menu (default).
    Run,
    /// Apply database migrations and exit.
    Migrate,
    /// Validate the menu tree against the registered actions and print it.
    CheckMenu,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(menu_file) = cli.menu {
        config.menu_file = Some(menu_file);
    }

    // Configuration errors in the tree are fatal before anything is shown
    let root = menu::load_tree(config.menu_file.as_deref())?;
    let registry = components::registry();
    registry
        .validate(&root)
        .context("menu references an unknown action")?;

    match cli.command.unwrap_or(Command::Run) {
        Command::CheckMenu => {
            for line in menu::render_tree(&root) {
                println!("{line}");
            }
            println!("Menu OK ({} components).", registry.len());
        }
        Command::Migrate => {
            let pool = open_database(&config).await?;
            db::run_migrations(&pool).await?;
            println!("Database is up to date.");
        }
        Command::Run => {
            let pool = open_database(&config).await?;
            db::run_migrations(&pool).await?;
            info!(database = %config.database_url, "database ready");

            let console = LineConsole::stdio().with_clear_screen(config.clear_screen);
            let mut navigator = Navigator::new(root, registry, pool, console)?;
            navigator.run().await?;
        }
    }

    Ok(())
}

/// Connect and make sure the database answers before anything is shown.
async fn open_database(config: &Config) -> Result<db::Db> {
    let pool = db::create_pool(config).await?;
    if !db::check_health(&pool).await {
        bail!("database {} is not responding", config.database_url);
    }
    Ok(pool)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! SQLite Workbench - Desktop browser and editor for SQLite files
//!
//! A small single-window tool for inspecting and editing SQLite database
//! files: table browsing, record editing, ad-hoc SQL and file backups.

mod backup;
mod config;
mod db;
mod dialogs;
mod error;
mod shared;
mod sql;
mod storage;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use parking_lot::RwLock;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::AppConfig;
use crate::shared::SharedAppState;

/// SQLite Workbench - browse, edit and back up SQLite databases
#[derive(Parser, Debug)]
#[command(name = "sqlite-workbench")]
#[command(about = "Desktop browser and editor for SQLite database files")]
struct Args {
    /// Database file to open at startup
    database: Option<PathBuf>,

    /// Directory for automatic backups (overrides the configured one)
    #[arg(long)]
    backup_dir: Option<PathBuf>,

    /// Do not reopen the last database, even if configured to
    #[arg(long)]
    no_restore: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("SQLite Workbench starting...");

    // Load or create configuration
    let mut config = load_or_create_config();
    if let Some(dir) = args.backup_dir {
        config.backup.backup_dir = Some(dir);
    }

    // The file to open: command line first, then the remembered one.
    let initial = args.database.clone().or_else(|| {
        if config.general.restore_last_file && !args.no_restore {
            config.general.last_file.clone().filter(|p| p.exists())
        } else {
            None
        }
    });

    let shared_state = Arc::new(RwLock::new(SharedAppState::new(config)));

    if let Err(e) = ui::run_workbench(shared_state, initial) {
        tracing::error!("Workbench error: {}", e);
    }

    info!("SQLite Workbench shutdown complete");

    Ok(())
}

/// Load configuration from file or create default
fn load_or_create_config() -> AppConfig {
    if let Ok(config_dir) = storage::get_config_dir() {
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            if let Ok(config) = config::load_config(&config_path) {
                info!("Loaded configuration from {:?}", config_path);
                return config;
            }
        }
    }
    info!("Using default configuration");
    AppConfig::default()
}

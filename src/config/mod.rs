//! Application Configuration
//!
//! User settings and preferences stored in TOML format.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Backup settings
    #[serde(default)]
    pub backup: BackupConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Ask before dropping tables, deleting rows, restoring and importing
    pub confirm_destructive: bool,
    /// Reopen the last database file on startup
    pub restore_last_file: bool,
    /// Last opened database file
    pub last_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            confirm_destructive: true,
            restore_last_file: true,
            last_file: None,
        }
    }
}

/// Backup-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Take an automatic backup after state-changing operations
    pub auto_backup: bool,
    /// Backup directory, or None for `~/db_backups`
    pub backup_dir: Option<PathBuf>,
    /// Automatic copies retained per source file
    pub retain: usize,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            auto_backup: true,
            backup_dir: None,
            retain: crate::backup::MAX_AUTO_BACKUPS,
        }
    }
}

impl BackupConfig {
    /// The effective backup directory.
    pub fn dir(&self) -> PathBuf {
        if let Some(dir) = &self.backup_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .map(|dirs| dirs.home_dir().join("db_backups"))
            .unwrap_or_else(|| PathBuf::from("db_backups"))
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

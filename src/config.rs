//! Configuration management
//!
//! Handles loading and saving application settings: which catalog to open,
//! paging behaviour, layout overrides and logging.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/catalogtui/config.yaml`
//! - Linux: `~/.config/catalogtui/config.yaml`
//! - Windows: `%APPDATA%\catalogtui\config.yaml`

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of option values fetched per page
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Default distance from the end of the list that triggers the next page
pub const DEFAULT_ENDLESS_THRESHOLD: usize = 5;

/// Maximum number of remembered catalogs
const MAX_RECENT_CATALOGS: usize = 10;

/// Application configuration
///
/// Persisted as YAML in the user's config directory. Every field has a
/// default so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file opened when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Option values requested per page
    pub page_size: usize,
    /// Rows from the end of the list at which the next page is requested
    pub endless_threshold: usize,
    /// YAML file whose layouts replace the bundled ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layouts_path: Option<PathBuf>,
    /// Log filter directive (e.g. "info", "catalogtui=debug")
    pub log_level: String,
    /// Recently opened catalog files, newest first
    pub recent_catalogs: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            endless_threshold: DEFAULT_ENDLESS_THRESHOLD,
            layouts_path: None,
            log_level: "info".to_string(),
            recent_catalogs: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`
    ///
    /// # Returns
    /// The loaded configuration, or the defaults if the file doesn't exist
    ///
    /// # Errors
    /// Returns an error if the config file exists but is malformed or unreadable.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            serde_yaml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Saves the configuration to `path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/catalogtui/config.yaml` if platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "catalogtui") {
            Ok(proj_dirs.config_dir().join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/catalogtui/config.yaml"))
        }
    }

    /// Returns the directory log files are written to
    pub fn log_dir() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "catalogtui") {
            Ok(proj_dirs.data_local_dir().to_path_buf())
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".local/share/catalogtui"))
        }
    }

    /// Moves `path` to the front of the recent catalogs list
    ///
    /// Keeps only the 10 most recent entries.
    pub fn add_recent_catalog(&mut self, path: PathBuf) {
        self.recent_catalogs.retain(|existing| *existing != path);
        self.recent_catalogs.insert(0, path);
        self.recent_catalogs.truncate(MAX_RECENT_CATALOGS);
    }
}

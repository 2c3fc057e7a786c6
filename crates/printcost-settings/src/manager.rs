//! Settings manager
//!
//! Owns the active [`Config`] and the file it was loaded from. The default
//! location is `<platform config dir>/printcost/config.toml`.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "printcost";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Platform configuration directory for PrintCost
    pub fn config_directory() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Default configuration file path
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_directory()?.join(CONFIG_FILE))
    }

    /// Create the configuration directory if needed
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_directory()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Manager for the default configuration file
    pub fn open_default() -> SettingsResult<Self> {
        Self::open(Self::config_file_path()?)
    }

    /// Load `path`, or start from defaults when it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();

        let config = if path.exists() {
            info!("Loading settings from {}", path.display());
            Config::load_from_file(&path)?
        } else {
            debug!("No settings at {}, using defaults", path.display());
            Config::default()
        };

        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply a change; it is kept only if the result validates
    pub fn update<F>(&mut self, change: F) -> SettingsResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut candidate = self.config.clone();
        change(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Write the active configuration, creating parent directories
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(&self.path)?;
        info!("Settings saved to {}", self.path.display());
        Ok(())
    }

    /// Discard changes and return to defaults
    pub fn restore_defaults(&mut self) {
        self.config = Config::default();
    }
}

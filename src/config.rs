use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::platform::{AIRTEL_REPORT_FILE, JIOSAAVN_REPORT_FILE, WYNK_REPORT_FILE};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const CONFIG_PATH_ENV: &str = "ROYALTY_CONFIG";
pub const DATA_DIR_ENV: &str = "ROYALTY_DATA_DIR";
pub const STATIC_DIR_ENV: &str = "ROYALTY_STATIC_DIR";
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub server: ServerConfig,
}

/// Location of the three platform reports
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub airtel_file: String,
    pub jiosaavn_file: String,
    pub wynk_file: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            airtel_file: AIRTEL_REPORT_FILE.to_string(),
            jiosaavn_file: JIOSAAVN_REPORT_FILE.to_string(),
            wynk_file: WYNK_REPORT_FILE.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Defaults, then the config file (if any), then environment overrides.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            debug!(path = %config_path, "no config file, using defaults");
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            self.data.dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(STATIC_DIR_ENV) {
            self.server.static_dir = PathBuf::from(dir);
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| DashboardError::Config(format!("Invalid {PORT_ENV} value '{port}'")))?;
        }
        Ok(())
    }
}

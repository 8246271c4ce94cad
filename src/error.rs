use std::path::PathBuf;

use thiserror::Error;

use crate::platform::Platform;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Report for {platform} not found at {}", .path.display())]
    MissingReport { platform: Platform, path: PathBuf },

    #[error("Report for {platform} at {} has no header row", .path.display())]
    EmptyReport { platform: Platform, path: PathBuf },

    #[error("No normalizer registered for platform: {0}")]
    UnregisteredPlatform(Platform),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{read_report, RawTable, ReportSource};
use crate::config::DataConfig;
use crate::error::Result;
use crate::platform::Platform;

/// Reads platform reports from a data directory on every call.
///
/// Nothing is cached, so each dashboard request sees the files as they are
/// on disk at that moment.
#[derive(Debug, Clone)]
pub struct FsReportStore {
    dir: PathBuf,
    files: HashMap<Platform, String>,
}

impl FsReportStore {
    /// Store using the default report file names
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        let files = Platform::ALL
            .iter()
            .map(|p| (*p, p.default_report_file().to_string()))
            .collect();
        Self {
            dir: dir.into(),
            files,
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        let mut store = Self::new(config.dir.clone());
        store.files.insert(Platform::Airtel, config.airtel_file.clone());
        store.files.insert(Platform::JioSaavn, config.jiosaavn_file.clone());
        store.files.insert(Platform::Wynk, config.wynk_file.clone());
        store
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn report_path(&self, platform: Platform) -> PathBuf {
        let file = self
            .files
            .get(&platform)
            .map(String::as_str)
            .unwrap_or_else(|| platform.default_report_file());
        self.dir.join(file)
    }
}

impl ReportSource for FsReportStore {
    fn load(&self, platform: Platform) -> Result<RawTable> {
        read_report(platform, self.report_path(platform))
    }
}

//! Platform labels and report file names.
//!
//! The labels are what the dashboard shows and what every payload record
//! carries in its `platform` field.

use std::fmt;

pub const AIRTEL_LABEL: &str = "Airtel";
pub const JIOSAAVN_LABEL: &str = "JioSaavn";
pub const WYNK_LABEL: &str = "Wynk";

pub const AIRTEL_REPORT_FILE: &str = "airtel-report.csv";
pub const JIOSAAVN_REPORT_FILE: &str = "jiosaavn-report.csv";
pub const WYNK_REPORT_FILE: &str = "wynk-report.csv";

/// Streaming platforms that deliver royalty reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Airtel,
    JioSaavn,
    Wynk,
}

impl Platform {
    /// All platforms in report order
    pub const ALL: [Platform; 3] = [Platform::Airtel, Platform::JioSaavn, Platform::Wynk];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Airtel => AIRTEL_LABEL,
            Platform::JioSaavn => JIOSAAVN_LABEL,
            Platform::Wynk => WYNK_LABEL,
        }
    }

    pub fn default_report_file(self) -> &'static str {
        match self {
            Platform::Airtel => AIRTEL_REPORT_FILE,
            Platform::JioSaavn => JIOSAAVN_REPORT_FILE,
            Platform::Wynk => WYNK_REPORT_FILE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Pipeline ingestion: reading platform reports into raw tables

pub mod report_store;

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{DashboardError, Result};
use crate::platform::Platform;

pub use report_store::FsReportStore;

/// A report exactly as the platform delivered it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names from the header row, untouched.
    pub headers: Vec<String>,
    /// Data rows as string cells. Rows may be shorter than `headers`.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse comma-separated text with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // ragged exports still load; short rows read as blanks
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Cell at `row`/`col`, or `None` when the row is short.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Where the pipeline gets its platform reports from
pub trait ReportSource: Send + Sync {
    /// Load the raw report for one platform.
    ///
    /// A missing or unparseable report is an error; the pipeline does not
    /// continue with partial data.
    fn load(&self, platform: Platform) -> Result<RawTable>;
}

/// Read one report file from disk.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_report<P: AsRef<Path>>(platform: Platform, path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DashboardError::MissingReport {
            platform,
            path: path.to_path_buf(),
        },
        _ => DashboardError::Io(e),
    })?;

    let table = RawTable::from_reader(file)?;
    if table.headers.is_empty() {
        return Err(DashboardError::EmptyReport {
            platform,
            path: path.to_path_buf(),
        });
    }

    if table.is_empty() {
        warn!(platform = %platform, "report has a header row but no data rows");
    }
    debug!(
        platform = %platform,
        columns = table.headers.len(),
        rows = table.len(),
        "read report"
    );
    Ok(table)
}

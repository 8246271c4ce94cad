use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::metrics::PipelineMetrics;
use crate::pipeline::ingestion::RawTable;
use crate::platform::Platform;

pub mod normalizers;
pub mod registry;

pub use normalizers::{AirtelNormalizer, JioSaavnNormalizer, WynkNormalizer};
pub use registry::NormalizationRegistry;

/// Canonical column names, as they look after header normalization and
/// alias renaming.
pub mod columns {
    pub const SONG_NAME: &str = "song_name";
    pub const ARTIST_NAME: &str = "artist_name";
    pub const LANGUAGE: &str = "language";
    pub const INCOME: &str = "income";
    pub const ROYALTY: &str = "royalty";
    pub const ADMIN_EXP: &str = "admin_exp";
    pub const TOTAL_STREAMS: &str = "total_streams";
    pub const AD_SUPPORTED_STREAMS: &str = "ad_supported_streams";
    pub const SUBSCRIPTION_STREAMS: &str = "subscription_streams";
    pub const JIO_TRIAL_STREAMS: &str = "jio_trial_streams";
}

/// Language recorded for rows whose report carries none.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Trim, lowercase, and replace spaces with underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

/// Parse a cell as a number. Blank, non-numeric, NaN and infinite cells
/// yield `None`; callers substitute `0`.
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Value injected for a column the report does not carry at all
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Text(&'static str),
    Number(f64),
}

/// One entry of a platform's defaulting table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDefault {
    pub column: &'static str,
    pub value: DefaultValue,
}

impl ColumnDefault {
    pub const fn text(column: &'static str, value: &'static str) -> Self {
        Self {
            column,
            value: DefaultValue::Text(value),
        }
    }

    pub const fn number(column: &'static str, value: f64) -> Self {
        Self {
            column,
            value: DefaultValue::Number(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<DefaultValue> for Cell {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Text(s) => Cell::Text(s.to_string()),
            DefaultValue::Number(n) => Cell::Number(n),
        }
    }
}

/// A report being reshaped into canonical form.
///
/// Rows are padded to the header width so injected columns line up.
#[derive(Debug, Clone)]
pub struct ReportFrame {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl ReportFrame {
    /// Build a frame from a raw report, normalizing every column name.
    pub fn from_raw(raw: RawTable) -> Self {
        let headers: Vec<String> = raw.headers.iter().map(|h| normalize_column_name(h)).collect();
        let width = headers.len();
        let rows = raw
            .rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<Cell> = row.into_iter().take(width).map(Cell::Text).collect();
                cells.resize(width, Cell::Text(String::new()));
                cells
            })
            .collect();

        let mut frame = Self {
            headers,
            index: HashMap::new(),
            rows,
        };
        frame.reindex();
        frame
    }

    // First occurrence wins when two headers collapse onto the same name.
    fn reindex(&mut self) {
        self.index.clear();
        for (i, h) in self.headers.iter().enumerate() {
            self.index.entry(h.clone()).or_insert(i);
        }
    }

    /// Rename columns through an alias table of `(alias, canonical)` pairs.
    pub fn rename(&mut self, aliases: &[(&str, &str)]) {
        let mut changed = false;
        for header in self.headers.iter_mut() {
            if let Some((_, canonical)) = aliases.iter().find(|(alias, _)| *alias == header.as_str()) {
                *header = canonical.to_string();
                changed = true;
            }
        }
        if changed {
            self.reindex();
        }
    }

    /// Inject each absent column with its default value in every row.
    /// Columns the report already has are left untouched.
    pub fn fill_defaults(&mut self, defaults: &[ColumnDefault]) {
        for default in defaults {
            if self.has_column(default.column) {
                continue;
            }
            let cell = Cell::from(default.value);
            for row in self.rows.iter_mut() {
                row.push(cell.clone());
            }
            self.index.insert(default.column.to_string(), self.headers.len());
            self.headers.push(default.column.to_string());
            debug!(column = default.column, "injected default column");
        }
    }

    /// Turn every cell of the named columns into a number.
    ///
    /// Returns how many cells could not be parsed and became `0`.
    pub fn coerce_numeric_columns(&mut self, names: &[&str]) -> usize {
        let mut zeroed = 0;
        for name in names {
            let Some(&col) = self.index.get(*name) else {
                continue;
            };
            for row in self.rows.iter_mut() {
                if let Cell::Text(text) = &row[col] {
                    let value = coerce_numeric(text).unwrap_or_else(|| {
                        zeroed += 1;
                        0.0
                    });
                    row[col] = Cell::Number(value);
                }
            }
        }
        zeroed
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_set(&self) -> BTreeSet<String> {
        self.headers.iter().cloned().collect()
    }

    pub fn row(&self, row: usize) -> RowView<'_> {
        RowView { frame: self, row }
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        (0..self.rows.len()).map(move |row| self.row(row))
    }

    fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let col = *self.index.get(name)?;
        self.rows.get(row)?.get(col)
    }
}

/// Read access to one frame row by canonical column name
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    frame: &'a ReportFrame,
    row: usize,
}

impl<'a> RowView<'a> {
    /// Text of a cell; `None` if the column is absent or the cell is blank.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.frame.cell(self.row, name)? {
            Cell::Text(s) if s.is_empty() => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(n.to_string()),
        }
    }

    /// Numeric value of a cell; `None` only if the column is absent.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.frame.cell(self.row, name)? {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => Some(coerce_numeric(s).unwrap_or(0.0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirtelRow {
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub language: String,
    pub income: f64,
    pub royalty: f64,
    pub admin_exp: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JioSaavnRow {
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub language: Option<String>,
    pub income: Option<f64>,
    pub royalty: Option<f64>,
    pub admin_exp: Option<f64>,
    pub total_streams: Option<f64>,
    pub ad_supported_streams: Option<f64>,
    pub subscription_streams: Option<f64>,
    pub jio_trial_streams: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WynkRow {
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub language: Option<String>,
    pub income: Option<f64>,
    pub royalty: Option<f64>,
    pub admin_exp: Option<f64>,
    pub total_streams: Option<f64>,
}

/// A report row in canonical form, tagged by the platform it came from
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalRow {
    Airtel(AirtelRow),
    JioSaavn(JioSaavnRow),
    Wynk(WynkRow),
}

impl CanonicalRow {
    pub fn platform(&self) -> Platform {
        match self {
            CanonicalRow::Airtel(_) => Platform::Airtel,
            CanonicalRow::JioSaavn(_) => Platform::JioSaavn,
            CanonicalRow::Wynk(_) => Platform::Wynk,
        }
    }

    pub fn song_name(&self) -> Option<&str> {
        match self {
            CanonicalRow::Airtel(r) => r.song_name.as_deref(),
            CanonicalRow::JioSaavn(r) => r.song_name.as_deref(),
            CanonicalRow::Wynk(r) => r.song_name.as_deref(),
        }
    }

    pub fn artist_name(&self) -> Option<&str> {
        match self {
            CanonicalRow::Airtel(r) => r.artist_name.as_deref(),
            CanonicalRow::JioSaavn(r) => r.artist_name.as_deref(),
            CanonicalRow::Wynk(r) => r.artist_name.as_deref(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            CanonicalRow::Airtel(r) => Some(r.language.as_str()),
            CanonicalRow::JioSaavn(r) => r.language.as_deref(),
            CanonicalRow::Wynk(r) => r.language.as_deref(),
        }
    }

    pub fn income(&self) -> Option<f64> {
        match self {
            CanonicalRow::Airtel(r) => Some(r.income),
            CanonicalRow::JioSaavn(r) => r.income,
            CanonicalRow::Wynk(r) => r.income,
        }
    }

    pub fn royalty(&self) -> Option<f64> {
        match self {
            CanonicalRow::Airtel(r) => Some(r.royalty),
            CanonicalRow::JioSaavn(r) => r.royalty,
            CanonicalRow::Wynk(r) => r.royalty,
        }
    }

    pub fn admin_exp(&self) -> Option<f64> {
        match self {
            CanonicalRow::Airtel(r) => Some(r.admin_exp),
            CanonicalRow::JioSaavn(r) => r.admin_exp,
            CanonicalRow::Wynk(r) => r.admin_exp,
        }
    }

    /// Airtel reports never carry stream counts.
    pub fn total_streams(&self) -> Option<f64> {
        match self {
            CanonicalRow::Airtel(_) => None,
            CanonicalRow::JioSaavn(r) => r.total_streams,
            CanonicalRow::Wynk(r) => r.total_streams,
        }
    }

    /// Every numeric value the row carries.
    pub fn numeric_values(&self) -> Vec<f64> {
        match self {
            CanonicalRow::Airtel(r) => vec![r.income, r.royalty, r.admin_exp],
            CanonicalRow::JioSaavn(r) => [
                r.income,
                r.royalty,
                r.admin_exp,
                r.total_streams,
                r.ad_supported_streams,
                r.subscription_streams,
                r.jio_trial_streams,
            ]
            .into_iter()
            .flatten()
            .collect(),
            CanonicalRow::Wynk(r) => [r.income, r.royalty, r.admin_exp, r.total_streams]
                .into_iter()
                .flatten()
                .collect(),
        }
    }
}

/// One platform's report after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformTable {
    pub platform: Platform,
    /// Column names present after renaming and defaulting
    pub columns: BTreeSet<String>,
    pub rows: Vec<CanonicalRow>,
}

impl PlatformTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.has_column(n))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Per-platform reshaping of a raw report into canonical rows.
///
/// Platforms differ only in their declarative tables (aliases, defaults,
/// numeric columns) and in how a canonical row is assembled.
pub trait PlatformNormalizer: Send + Sync {
    fn platform(&self) -> Platform;

    /// `(alias, canonical)` column renames
    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Columns injected when the report lacks them
    fn defaults(&self) -> &'static [ColumnDefault] {
        &[]
    }

    /// Columns coerced to numbers
    fn numeric_columns(&self) -> &'static [&'static str];

    fn build_row(&self, row: RowView<'_>) -> CanonicalRow;

    fn name(&self) -> &str;

    /// Rename, default, coerce, then build typed rows.
    fn normalize(&self, raw: RawTable) -> PlatformTable {
        let platform = self.platform();
        let mut frame = ReportFrame::from_raw(raw);
        frame.rename(self.aliases());
        frame.fill_defaults(self.defaults());
        let zeroed = frame.coerce_numeric_columns(self.numeric_columns());

        let rows: Vec<CanonicalRow> = frame.rows().map(|row| self.build_row(row)).collect();

        if zeroed > 0 {
            debug!(platform = %platform, cells = zeroed, "non-numeric cells coerced to 0");
        }
        PipelineMetrics::record_report_normalized(platform, rows.len(), zeroed);

        PlatformTable {
            platform,
            columns: frame.column_set(),
            rows,
        }
    }
}

use crate::pipeline::processing::normalize::columns::{ADMIN_EXP, ARTIST_NAME, INCOME, LANGUAGE, ROYALTY, SONG_NAME};
use crate::pipeline::processing::normalize::{AirtelRow, CanonicalRow, ColumnDefault, PlatformNormalizer, RowView, UNKNOWN_LANGUAGE};
use crate::platform::Platform;

/// Airtel exports carry song, artist and income but rarely the royalty
/// breakdown, so every canonical column it may lack gets a default.
pub struct AirtelNormalizer;

const DEFAULTS: &[ColumnDefault] = &[
    ColumnDefault::number(INCOME, 0.0),
    ColumnDefault::text(LANGUAGE, UNKNOWN_LANGUAGE),
    ColumnDefault::number(ROYALTY, 0.0),
    ColumnDefault::number(ADMIN_EXP, 0.0),
];

const NUMERIC_COLUMNS: &[&str] = &[INCOME, ROYALTY, ADMIN_EXP];

impl AirtelNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AirtelNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformNormalizer for AirtelNormalizer {
    fn platform(&self) -> Platform {
        Platform::Airtel
    }

    fn defaults(&self) -> &'static [ColumnDefault] {
        DEFAULTS
    }

    fn numeric_columns(&self) -> &'static [&'static str] {
        NUMERIC_COLUMNS
    }

    fn build_row(&self, row: RowView<'_>) -> CanonicalRow {
        CanonicalRow::Airtel(AirtelRow {
            song_name: row.text(SONG_NAME),
            artist_name: row.text(ARTIST_NAME),
            language: row
                .text(LANGUAGE)
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            income: row.number(INCOME).unwrap_or(0.0),
            royalty: row.number(ROYALTY).unwrap_or(0.0),
            admin_exp: row.number(ADMIN_EXP).unwrap_or(0.0),
        })
    }

    fn name(&self) -> &str {
        "Airtel Report Normalizer"
    }
}

use crate::pipeline::processing::normalize::columns::{ADMIN_EXP, ARTIST_NAME, INCOME, LANGUAGE, ROYALTY, SONG_NAME, TOTAL_STREAMS};
use crate::pipeline::processing::normalize::{CanonicalRow, PlatformNormalizer, RowView, WynkRow};
use super::{ROYALTY_ALIAS, TOTAL_STREAMS_ALIAS};
use crate::platform::Platform;

/// Wynk exports are minimal but share JioSaavn's column aliases.
pub struct WynkNormalizer;

const ALIASES: &[(&str, &str)] = &[(ROYALTY_ALIAS, ROYALTY), (TOTAL_STREAMS_ALIAS, TOTAL_STREAMS)];

const NUMERIC_COLUMNS: &[&str] = &[TOTAL_STREAMS, INCOME, ADMIN_EXP, ROYALTY];

impl WynkNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WynkNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformNormalizer for WynkNormalizer {
    fn platform(&self) -> Platform {
        Platform::Wynk
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        ALIASES
    }

    fn numeric_columns(&self) -> &'static [&'static str] {
        NUMERIC_COLUMNS
    }

    fn build_row(&self, row: RowView<'_>) -> CanonicalRow {
        CanonicalRow::Wynk(WynkRow {
            song_name: row.text(SONG_NAME),
            artist_name: row.text(ARTIST_NAME),
            language: row.text(LANGUAGE),
            income: row.number(INCOME),
            royalty: row.number(ROYALTY),
            admin_exp: row.number(ADMIN_EXP),
            total_streams: row.number(TOTAL_STREAMS),
        })
    }

    fn name(&self) -> &str {
        "Wynk Report Normalizer"
    }
}

use crate::pipeline::processing::normalize::columns::{
    ADMIN_EXP, AD_SUPPORTED_STREAMS, ARTIST_NAME, INCOME, JIO_TRIAL_STREAMS, LANGUAGE, ROYALTY,
    SONG_NAME, SUBSCRIPTION_STREAMS, TOTAL_STREAMS,
};
use crate::pipeline::processing::normalize::{CanonicalRow, JioSaavnRow, PlatformNormalizer, RowView};
use super::{ROYALTY_ALIAS, TOTAL_STREAMS_ALIAS};
use crate::platform::Platform;

/// JioSaavn has the richest export: royalty and admin breakdown plus
/// stream counts split by subscription type.
pub struct JioSaavnNormalizer;

const ALIASES: &[(&str, &str)] = &[(ROYALTY_ALIAS, ROYALTY), (TOTAL_STREAMS_ALIAS, TOTAL_STREAMS)];

const NUMERIC_COLUMNS: &[&str] = &[
    AD_SUPPORTED_STREAMS,
    SUBSCRIPTION_STREAMS,
    JIO_TRIAL_STREAMS,
    TOTAL_STREAMS,
    INCOME,
    ADMIN_EXP,
    ROYALTY,
];

impl JioSaavnNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JioSaavnNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformNormalizer for JioSaavnNormalizer {
    fn platform(&self) -> Platform {
        Platform::JioSaavn
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        ALIASES
    }

    fn numeric_columns(&self) -> &'static [&'static str] {
        NUMERIC_COLUMNS
    }

    fn build_row(&self, row: RowView<'_>) -> CanonicalRow {
        CanonicalRow::JioSaavn(JioSaavnRow {
            song_name: row.text(SONG_NAME),
            artist_name: row.text(ARTIST_NAME),
            language: row.text(LANGUAGE),
            income: row.number(INCOME),
            royalty: row.number(ROYALTY),
            admin_exp: row.number(ADMIN_EXP),
            total_streams: row.number(TOTAL_STREAMS),
            ad_supported_streams: row.number(AD_SUPPORTED_STREAMS),
            subscription_streams: row.number(SUBSCRIPTION_STREAMS),
            jio_trial_streams: row.number(JIO_TRIAL_STREAMS),
        })
    }

    fn name(&self) -> &str {
        "JioSaavn Report Normalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ingestion::RawTable;

    #[test]
    fn test_aliases_and_stream_breakdown() {
        let csv = "Song Name,Language,Ad Supported Streams,Subscription Streams,Jio Trial Streams,Total,Income,Royality,Admin Exp\n\
                   Tum Hi Ho,Hindi,10,20,n/a,30,55.5,40,15.5\n";
        let table = JioSaavnNormalizer::new().normalize(RawTable::from_reader(csv.as_bytes()).unwrap());

        assert!(table.has_columns(&[ROYALTY, TOTAL_STREAMS]));
        assert!(!table.has_column("royality"));
        assert!(!table.has_column("total"));

        match &table.rows[0] {
            CanonicalRow::JioSaavn(row) => {
                assert_eq!(row.total_streams, Some(30.0));
                assert_eq!(row.royalty, Some(40.0));
                assert_eq!(row.admin_exp, Some(15.5));
                assert_eq!(row.ad_supported_streams, Some(10.0));
                assert_eq!(row.subscription_streams, Some(20.0));
                assert_eq!(row.jio_trial_streams, Some(0.0));
                assert_eq!(row.language.as_deref(), Some("Hindi"));
            }
            other => panic!("expected a JioSaavn row, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_columns_stay_absent() {
        let table = JioSaavnNormalizer::new()
            .normalize(RawTable::from_reader("Song Name,Income\nX,1\n".as_bytes()).unwrap());

        assert!(!table.has_column(ROYALTY));
        assert!(!table.has_column(LANGUAGE));
        assert_eq!(table.rows[0].royalty(), None);
        assert_eq!(table.rows[0].language(), None);
        assert_eq!(table.rows[0].income(), Some(1.0));
    }
}

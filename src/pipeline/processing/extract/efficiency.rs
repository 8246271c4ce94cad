use super::ReportSet;
use crate::pipeline::payload::StreamEfficiency;
use crate::pipeline::processing::normalize::columns::{INCOME, SONG_NAME, TOTAL_STREAMS};

/// Streams against income per song, from JioSaavn only.
///
/// JioSaavn is the one platform whose stream totals are reported per song
/// alongside income; other platforms are never included here even when
/// their reports carry the same columns.
pub fn streams_vs_income(reports: &ReportSet) -> Vec<StreamEfficiency> {
    let table = &reports.jiosaavn;
    if !table.has_columns(&[SONG_NAME, TOTAL_STREAMS, INCOME]) {
        return Vec::new();
    }

    table
        .rows
        .iter()
        .map(|row| StreamEfficiency {
            song: row.song_name().map(str::to_string),
            streams: row.total_streams().unwrap_or(0.0),
            income: row.income().unwrap_or(0.0),
        })
        .collect()
}

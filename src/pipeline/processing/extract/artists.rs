use super::ReportSet;
use crate::pipeline::payload::ArtistRevenue;
use crate::pipeline::processing::normalize::columns::{ARTIST_NAME, INCOME};
use crate::platform::Platform;

/// One entry per report row for every platform that names its artists.
pub fn artist_performance(reports: &ReportSet) -> Vec<ArtistRevenue> {
    reports
        .tables(&Platform::ALL)
        .filter(|table| table.has_columns(&[ARTIST_NAME, INCOME]))
        .flat_map(|table| {
            table.rows.iter().map(move |row| ArtistRevenue {
                artist: row.artist_name().map(str::to_string),
                platform: table.platform.label(),
                revenue: row.income().unwrap_or(0.0),
            })
        })
        .collect()
}

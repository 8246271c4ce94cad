use std::cmp::Ordering;

use super::ReportSet;
use crate::pipeline::payload::SongRevenue;
use crate::pipeline::processing::normalize::columns::{INCOME, SONG_NAME};
use crate::platform::Platform;

pub const TOP_SONGS_LIMIT: usize = 10;

/// Highest-earning songs across all platforms.
///
/// The sort is stable: equal revenues keep platform order, then row order.
/// `-0.0` and `0.0` compare equal.
pub fn top_songs(reports: &ReportSet) -> Vec<SongRevenue> {
    let mut songs: Vec<SongRevenue> = reports
        .tables(&Platform::ALL)
        .filter(|table| table.has_columns(&[SONG_NAME, INCOME]))
        .flat_map(|table| {
            table.rows.iter().map(move |row| SongRevenue {
                song: row.song_name().map(str::to_string),
                revenue: row.income().unwrap_or(0.0),
                platform: table.platform.label(),
            })
        })
        .collect();

    songs.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(Ordering::Equal));
    songs.truncate(TOP_SONGS_LIMIT);
    songs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::processing::extract::fixtures;

    #[test]
    fn test_sorted_descending_and_truncated() {
        let airtel: String = std::iter::once("Song Name,Income".to_string())
            .chain((1..=8).map(|i| format!("A{i},{i}")))
            .collect::<Vec<_>>()
            .join("\n");
        let reports = fixtures::reports(&airtel, "Song Name,Income\nJ1,100\nJ2,4.5\n", "Song Name,Income\nW1,50\n");

        let top = top_songs(&reports);
        assert_eq!(top.len(), TOP_SONGS_LIMIT);
        assert!(top.windows(2).all(|w| w[0].revenue >= w[1].revenue));
        assert_eq!(top[0].song.as_deref(), Some("J1"));
        assert_eq!(top[1].song.as_deref(), Some("W1"));
        assert_eq!(top[0].platform, "JioSaavn");
    }

    #[test]
    fn test_ties_keep_platform_then_row_order() {
        let reports = fixtures::reports(
            "Song Name,Income\nA1,5\nA2,5\n",
            "Song Name,Income\nJ1,5\n",
            "Song Name,Income\nW1,5\nW2,9\n",
        );

        let order: Vec<String> = top_songs(&reports)
            .into_iter()
            .filter_map(|s| s.song)
            .collect();
        assert_eq!(order, vec!["W2", "A1", "A2", "J1", "W1"]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let reports = fixtures::reports(
            "Song Name,Income\nA1,-0\n",
            "Song Name,Income\nJ1,0\n",
            "Song Name,Income\nW1,-0.00\nW2,0\n",
        );

        let order: Vec<String> = top_songs(&reports)
            .into_iter()
            .filter_map(|s| s.song)
            .collect();
        assert_eq!(order, vec!["A1", "J1", "W1", "W2"]);
    }

    #[test]
    fn test_non_numeric_income_ranks_as_zero() {
        let reports = fixtures::reports(
            "Song Name,Income\nX,100\nY,abc\n",
            "Song Name,Income\nJ,0.5\n",
            "Song Name\nW\n",
        );

        let top = top_songs(&reports);
        assert_eq!(
            top[0],
            SongRevenue { song: Some("X".to_string()), revenue: 100.0, platform: "Airtel" }
        );
        let y = top.iter().position(|s| s.song.as_deref() == Some("Y")).unwrap();
        let j = top.iter().position(|s| s.song.as_deref() == Some("J")).unwrap();
        assert!(j < y);
        assert_eq!(top[y].revenue, 0.0);
        // Wynk has no income column
        assert!(top.iter().all(|s| s.platform != "Wynk"));
    }
}

//! Dashboard metric extractors.
//!
//! Each extractor is a pure function over the normalized reports. A platform
//! whose report lacks a column an extractor needs is skipped by that
//! extractor only.

pub mod artists;
pub mod efficiency;
pub mod language;
pub mod revenue;
pub mod royalty;
pub mod top_songs;

pub use artists::artist_performance;
pub use efficiency::streams_vs_income;
pub use language::language_distribution;
pub use revenue::revenue_contribution;
pub use royalty::royalty_vs_admin;
pub use top_songs::{top_songs, TOP_SONGS_LIMIT};

use crate::pipeline::payload::DashboardPayload;
use crate::pipeline::processing::normalize::PlatformTable;
use crate::platform::Platform;

/// The three normalized reports of one pipeline run
#[derive(Debug, Clone)]
pub struct ReportSet {
    pub airtel: PlatformTable,
    pub jiosaavn: PlatformTable,
    pub wynk: PlatformTable,
}

impl ReportSet {
    pub fn get(&self, platform: Platform) -> &PlatformTable {
        match platform {
            Platform::Airtel => &self.airtel,
            Platform::JioSaavn => &self.jiosaavn,
            Platform::Wynk => &self.wynk,
        }
    }

    /// Tables for the given platforms, in the order given
    pub fn tables<'a>(&'a self, platforms: &'a [Platform]) -> impl Iterator<Item = &'a PlatformTable> + 'a {
        platforms.iter().map(move |p| self.get(*p))
    }
}

/// Run every extractor and assemble the payload.
pub fn extract_all(reports: &ReportSet) -> DashboardPayload {
    DashboardPayload {
        revenue_contribution: revenue_contribution(reports),
        top_songs: top_songs(reports),
        language_dist: language_distribution(reports),
        artist_perf: artist_performance(reports),
        efficiency: streams_vs_income(reports),
        royalty_admin: royalty_vs_admin(reports),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ReportSet;
    use crate::pipeline::ingestion::RawTable;
    use crate::pipeline::processing::normalize::{
        AirtelNormalizer, JioSaavnNormalizer, PlatformNormalizer, PlatformTable, WynkNormalizer,
    };

    fn raw(csv: &str) -> RawTable {
        RawTable::from_reader(csv.as_bytes()).expect("fixture csv")
    }

    pub fn airtel(csv: &str) -> PlatformTable {
        AirtelNormalizer::new().normalize(raw(csv))
    }

    pub fn jiosaavn(csv: &str) -> PlatformTable {
        JioSaavnNormalizer::new().normalize(raw(csv))
    }

    pub fn wynk(csv: &str) -> PlatformTable {
        WynkNormalizer::new().normalize(raw(csv))
    }

    pub fn reports(airtel_csv: &str, jiosaavn_csv: &str, wynk_csv: &str) -> ReportSet {
        ReportSet {
            airtel: airtel(airtel_csv),
            jiosaavn: jiosaavn(jiosaavn_csv),
            wynk: wynk(wynk_csv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_fills_every_panel() {
        let reports = fixtures::reports(
            "Song Name,Artist Name,Income\nX,A,100\n",
            "Song Name,Artist Name,Language,Total,Income,Royality,Admin Exp\nJ,B,Hindi,10,5,3,1\n",
            "Song Name,Artist Name,Language,Income,Royality,Admin Exp\nW,C,Punjabi,7,2,1\n",
        );
        let payload = extract_all(&reports);

        assert_eq!(payload.revenue_contribution.len(), 3);
        assert_eq!(payload.top_songs.len(), 3);
        assert_eq!(payload.language_dist.len(), 3);
        assert_eq!(payload.artist_perf.len(), 3);
        assert_eq!(payload.efficiency.len(), 1);
        assert_eq!(payload.royalty_admin.len(), 2);
    }

    #[test]
    fn test_missing_artist_column_only_affects_artist_panel() {
        let with_artists = fixtures::reports(
            "Song Name,Artist Name,Income\nX,A,100\n",
            "Song Name,Artist Name,Income\nJ,B,5\n",
            "Song Name,Artist Name,Income\nW,C,7\n",
        );
        let without_jio_artists = fixtures::reports(
            "Song Name,Artist Name,Income\nX,A,100\n",
            "Song Name,Income\nJ,5\n",
            "Song Name,Artist Name,Income\nW,C,7\n",
        );

        let full = extract_all(&with_artists);
        let partial = extract_all(&without_jio_artists);

        assert_eq!(partial.artist_perf.len(), 2);
        assert!(partial.artist_perf.iter().all(|a| a.platform != "JioSaavn"));
        assert_eq!(partial.revenue_contribution, full.revenue_contribution);
        assert_eq!(partial.top_songs, full.top_songs);
    }
}

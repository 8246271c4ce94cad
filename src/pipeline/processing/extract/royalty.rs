use super::ReportSet;
use crate::pipeline::payload::RoyaltyAdmin;
use crate::pipeline::processing::normalize::columns::{ADMIN_EXP, ROYALTY, SONG_NAME};
use crate::platform::Platform;

/// Platforms that report a royalty/admin-expense breakdown
pub const ROYALTY_PLATFORMS: [Platform; 2] = [Platform::JioSaavn, Platform::Wynk];

/// Royalty against admin expenses per song.
pub fn royalty_vs_admin(reports: &ReportSet) -> Vec<RoyaltyAdmin> {
    reports
        .tables(&ROYALTY_PLATFORMS)
        .filter(|table| table.has_columns(&[SONG_NAME, ROYALTY, ADMIN_EXP]))
        .flat_map(|table| {
            table.rows.iter().map(move |row| RoyaltyAdmin {
                song: row.song_name().map(str::to_string),
                platform: table.platform.label(),
                royalty: row.royalty().unwrap_or(0.0),
                admin: row.admin_exp().unwrap_or(0.0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::processing::extract::fixtures;

    #[test]
    fn test_jiosaavn_and_wynk_rows() {
        let reports = fixtures::reports(
            "Song Name,Royalty,Admin Exp\nA,99,1\n",
            "Song Name,Royality,Admin Exp\nJ,40,15.5\n",
            "Song Name,Royality,Admin Exp\nW,-,2\n",
        );

        assert_eq!(
            royalty_vs_admin(&reports),
            vec![
                RoyaltyAdmin { song: Some("J".to_string()), platform: "JioSaavn", royalty: 40.0, admin: 15.5 },
                RoyaltyAdmin { song: Some("W".to_string()), platform: "Wynk", royalty: 0.0, admin: 2.0 },
            ]
        );
    }

    #[test]
    fn test_platform_missing_admin_is_skipped() {
        let reports = fixtures::reports(
            "Song Name\nA\n",
            "Song Name,Royality\nJ,40\n",
            "Song Name,Royalty,Admin Exp\nW,3,2\n",
        );

        let rows = royalty_vs_admin(&reports);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].platform, "Wynk");
    }
}

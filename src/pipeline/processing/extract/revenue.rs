use super::ReportSet;
use crate::pipeline::payload::RevenueShare;
use crate::platform::Platform;

/// Total income per platform, one entry for every platform.
///
/// A report without an income column contributes `0.0`.
pub fn revenue_contribution(reports: &ReportSet) -> Vec<RevenueShare> {
    Platform::ALL
        .iter()
        .map(|platform| {
            let revenue = reports
                .get(*platform)
                .rows
                .iter()
                .filter_map(|row| row.income())
                .sum::<f64>();
            RevenueShare {
                platform: platform.label(),
                revenue,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::processing::extract::fixtures;

    #[test]
    fn test_sums_income_per_platform() {
        let reports = fixtures::reports(
            "Song Name,Income\nX,100\nY,abc\n",
            "Song Name,Income\nA,1.5\nB,2.5\n",
            "Song Name\nW\n",
        );

        assert_eq!(
            revenue_contribution(&reports),
            vec![
                RevenueShare { platform: "Airtel", revenue: 100.0 },
                RevenueShare { platform: "JioSaavn", revenue: 4.0 },
                RevenueShare { platform: "Wynk", revenue: 0.0 },
            ]
        );
    }

    #[test]
    fn test_empty_reports_still_yield_three_entries() {
        let reports = fixtures::reports("Income\n", "Income\n", "Income\n");
        let shares = revenue_contribution(&reports);

        assert_eq!(shares.len(), 3);
        assert!(shares.iter().all(|s| s.revenue == 0.0));
    }
}

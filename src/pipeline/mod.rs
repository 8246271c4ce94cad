// Data processing pipeline: report ingestion, normalization, metric extraction

pub mod ingestion;
pub mod payload;
pub mod processing;

use std::path::Path;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::DataConfig;
use crate::error::Result;
use crate::metrics::PipelineMetrics;
use crate::platform::Platform;
use ingestion::{FsReportStore, ReportSource};
use processing::{extract_all, sanitize_payload, NormalizationRegistry, ReportSet};

/// Run the whole pipeline over the reports in `data_dir`.
///
/// Stateless: every call re-reads the three reports.
pub fn aggregate_metrics<P: AsRef<Path>>(data_dir: P) -> Result<Value> {
    aggregate_from(&FsReportStore::new(data_dir.as_ref()))
}

/// Same as [`aggregate_metrics`] with configured report file names.
pub fn aggregate_with_config(config: &DataConfig) -> Result<Value> {
    aggregate_from(&FsReportStore::from_config(config))
}

/// Load, extract, assemble, and sanitize.
///
/// Any failure aborts the run; no partial payload is produced.
#[tracing::instrument(level = "info", skip(source))]
pub fn aggregate_from(source: &dyn ReportSource) -> Result<Value> {
    let start = Instant::now();
    let result = run(source);
    let elapsed = start.elapsed();

    match &result {
        Ok(_) => {
            info!(elapsed = ?elapsed, "dashboard metrics aggregated");
            PipelineMetrics::record_run_success(elapsed.as_secs_f64());
        }
        Err(e) => {
            debug!(error = %e, "aggregation failed");
            PipelineMetrics::record_run_error();
        }
    }
    result
}

fn run(source: &dyn ReportSource) -> Result<Value> {
    let registry = NormalizationRegistry::new();
    let reports = load_reports(source, &registry)?;

    let mut payload = extract_all(&reports).to_json()?;
    let replaced = sanitize_payload(&mut payload);
    if replaced > 0 {
        debug!(fields = replaced, "sanitized payload fields");
    }
    PipelineMetrics::record_fields_sanitized(replaced);

    Ok(payload)
}

/// Load and normalize all three reports.
pub fn load_reports(source: &dyn ReportSource, registry: &NormalizationRegistry) -> Result<ReportSet> {
    let load = |platform: Platform| -> Result<_> {
        let raw = source.load(platform)?;
        let table = registry.normalize(platform, raw)?;
        if table.is_empty() {
            debug!(platform = %platform, "report normalized with no rows");
        } else {
            debug!(platform = %platform, rows = table.len(), "report normalized");
        }
        Ok(table)
    };

    Ok(ReportSet {
        airtel: load(Platform::Airtel)?,
        jiosaavn: load(Platform::JioSaavn)?,
        wynk: load(Platform::Wynk)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::pipeline::ingestion::RawTable;
    use serde_json::json;
    use std::collections::HashMap;

    struct InMemorySource {
        reports: HashMap<Platform, &'static str>,
    }

    impl ReportSource for InMemorySource {
        fn load(&self, platform: Platform) -> Result<RawTable> {
            match self.reports.get(&platform) {
                Some(csv) => RawTable::from_reader(csv.as_bytes()),
                None => Err(DashboardError::MissingReport {
                    platform,
                    path: format!("memory://{platform}").into(),
                }),
            }
        }
    }

    fn source(reports: &[(Platform, &'static str)]) -> InMemorySource {
        InMemorySource {
            reports: reports.iter().cloned().collect(),
        }
    }

    #[test]
    fn test_blank_song_names_are_sanitized_to_zero() {
        let src = source(&[
            (Platform::Airtel, "Song Name,Income\n,5\n"),
            (Platform::JioSaavn, "Song Name,Income\n"),
            (Platform::Wynk, "Song Name,Income\n"),
        ]);

        let payload = aggregate_from(&src).unwrap();
        assert_eq!(
            payload["top_songs"],
            json!([{"song": 0, "revenue": 5.0, "platform": "Airtel"}])
        );
    }

    #[test]
    fn test_missing_report_fails_the_run() {
        let src = source(&[
            (Platform::Airtel, "Song Name,Income\nX,1\n"),
            (Platform::JioSaavn, "Song Name,Income\nJ,1\n"),
        ]);

        let err = aggregate_from(&src).unwrap_err();
        assert!(matches!(err, DashboardError::MissingReport { platform: Platform::Wynk, .. }));
    }

    #[test]
    fn test_unregistered_platform_fails_the_run() {
        let src = source(&[
            (Platform::Airtel, "Income\n"),
            (Platform::JioSaavn, "Income\n"),
            (Platform::Wynk, "Income\n"),
        ]);
        let err = load_reports(&src, &NormalizationRegistry::empty()).unwrap_err();
        assert!(matches!(err, DashboardError::UnregisteredPlatform(Platform::Airtel)));
    }
}

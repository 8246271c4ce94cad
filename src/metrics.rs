//! Pipeline metrics.
//!
//! Names live in [`MetricName`] so no metric is spelled out at a call site.
//! Recording is a no-op until [`init_metrics`] installs the Prometheus
//! recorder, so library code and tests can record freely.

use std::fmt;
use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

use crate::platform::Platform;

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    PipelineRunsSuccess,
    PipelineRunsError,
    PipelineDuration,
    ReportRowsLoaded,
    ReportCellsZeroed,
    PayloadFieldsSanitized,
    DashboardFallbacks,
}

impl MetricName {
    pub const ALL: [MetricName; 7] = [
        MetricName::PipelineRunsSuccess,
        MetricName::PipelineRunsError,
        MetricName::PipelineDuration,
        MetricName::ReportRowsLoaded,
        MetricName::ReportCellsZeroed,
        MetricName::PayloadFieldsSanitized,
        MetricName::DashboardFallbacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::PipelineRunsSuccess => "royalty_pipeline_runs_success_total",
            MetricName::PipelineRunsError => "royalty_pipeline_runs_error_total",
            MetricName::PipelineDuration => "royalty_pipeline_duration_seconds",
            MetricName::ReportRowsLoaded => "royalty_report_rows_loaded_total",
            MetricName::ReportCellsZeroed => "royalty_report_cells_zeroed_total",
            MetricName::PayloadFieldsSanitized => "royalty_payload_fields_sanitized_total",
            MetricName::DashboardFallbacks => "royalty_dashboard_fallbacks_total",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metrics recorded by the pipeline and the dashboard use case
pub struct PipelineMetrics;

impl PipelineMetrics {
    pub fn record_report_normalized(platform: Platform, rows: usize, zeroed_cells: usize) {
        ::metrics::counter!(MetricName::ReportRowsLoaded.as_str(), "platform" => platform.label())
            .increment(rows as u64);
        ::metrics::counter!(MetricName::ReportCellsZeroed.as_str(), "platform" => platform.label())
            .increment(zeroed_cells as u64);
    }

    pub fn record_run_success(duration_secs: f64) {
        ::metrics::counter!(MetricName::PipelineRunsSuccess.as_str()).increment(1);
        ::metrics::histogram!(MetricName::PipelineDuration.as_str()).record(duration_secs);
    }

    pub fn record_run_error() {
        ::metrics::counter!(MetricName::PipelineRunsError.as_str()).increment(1);
    }

    pub fn record_fields_sanitized(count: usize) {
        ::metrics::counter!(MetricName::PayloadFieldsSanitized.as_str()).increment(count as u64);
    }

    pub fn record_dashboard_fallback() {
        ::metrics::counter!(MetricName::DashboardFallbacks.as_str()).increment(1);
    }
}

/// Install the Prometheus recorder. Idempotent.
pub fn init_metrics() {
    if HANDLE.get().is_some() {
        return;
    }
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if HANDLE.set(handle).is_ok() {
                info!("Prometheus recorder installed");
            }
        }
        Err(e) => warn!("Prometheus recorder install failed (possibly already installed): {}", e),
    }
}

/// Prometheus text exposition, or an empty string before [`init_metrics`].
pub fn render_metrics() -> String {
    HANDLE.get().map(|h| h.render()).unwrap_or_default()
}

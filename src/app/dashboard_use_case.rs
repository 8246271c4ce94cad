use std::sync::Arc;

use serde_json::Value;
use tracing::error;

use crate::config::DataConfig;
use crate::metrics::PipelineMetrics;
use crate::pipeline::aggregate_from;
use crate::pipeline::ingestion::{FsReportStore, ReportSource};
use crate::pipeline::payload::fallback_payload;

/// Use case backing the dashboard API.
///
/// Never fails: a pipeline error becomes the empty fallback payload carrying
/// the error message, so the dashboard degrades instead of breaking.
#[derive(Clone)]
pub struct DashboardUseCase {
    source: Arc<dyn ReportSource>,
}

impl DashboardUseCase {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    /// Use case reading reports from the configured data directory
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(Arc::new(FsReportStore::from_config(config)))
    }

    /// Sanitized dashboard payload, or the fallback payload on failure
    pub fn fetch(&self) -> Value {
        match aggregate_from(self.source.as_ref()) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "dashboard pipeline failed, serving empty payload");
                PipelineMetrics::record_dashboard_fallback();
                fallback_payload(&e.to_string())
            }
        }
    }
}

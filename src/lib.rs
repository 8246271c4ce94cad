pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod platform;
pub mod server;

// Application layer: the dashboard use case served over HTTP and the CLI
pub mod app;

pub use error::{DashboardError, Result};
pub use pipeline::{aggregate_from, aggregate_metrics, aggregate_with_config};
pub use platform::Platform;

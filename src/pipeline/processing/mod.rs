// Pipeline processing: normalization, metric extraction, and sanitization

pub mod extract;
pub mod normalize;
pub mod sanitize;

// Re-export key types and functions
pub use extract::{extract_all, ReportSet};
pub use normalize::{NormalizationRegistry, PlatformTable};
pub use sanitize::sanitize_payload;

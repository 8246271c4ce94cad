// Individual normalizer implementations
pub mod airtel;
pub mod jiosaavn;
pub mod wynk;

// Re-export the main components
pub use airtel::AirtelNormalizer;
pub use jiosaavn::JioSaavnNormalizer;
pub use wynk::WynkNormalizer;

/// Misspelt royalty column shipped by JioSaavn and Wynk
pub const ROYALTY_ALIAS: &str = "royality";
/// Stream total column as shipped by JioSaavn and Wynk
pub const TOTAL_STREAMS_ALIAS: &str = "total";

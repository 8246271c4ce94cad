use super::normalizers::{AirtelNormalizer, JioSaavnNormalizer, WynkNormalizer};
use super::{PlatformNormalizer, PlatformTable};
use crate::error::{DashboardError, Result};
use crate::pipeline::ingestion::RawTable;
use crate::platform::Platform;

/// Registry of platform-specific normalization strategies.
///
/// Normalizers are kept in registration order, which is the order the
/// pipeline loads reports in.
pub struct NormalizationRegistry {
    normalizers: Vec<Box<dyn PlatformNormalizer>>,
}

impl NormalizationRegistry {
    /// Create a registry with the built-in normalizers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(AirtelNormalizer::new()));
        registry.register(Box::new(JioSaavnNormalizer::new()));
        registry.register(Box::new(WynkNormalizer::new()));
        registry
    }

    pub fn empty() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Register a normalizer, replacing any existing one for the same platform
    pub fn register(&mut self, normalizer: Box<dyn PlatformNormalizer>) {
        let platform = normalizer.platform();
        match self.normalizers.iter().position(|n| n.platform() == platform) {
            Some(i) => self.normalizers[i] = normalizer,
            None => self.normalizers.push(normalizer),
        }
    }

    pub fn get_normalizer(&self, platform: Platform) -> Option<&dyn PlatformNormalizer> {
        self.normalizers
            .iter()
            .find(|n| n.platform() == platform)
            .map(|n| n.as_ref())
    }

    /// Normalize a raw report with the platform's normalizer
    pub fn normalize(&self, platform: Platform, raw: RawTable) -> Result<PlatformTable> {
        let normalizer = self
            .get_normalizer(platform)
            .ok_or(DashboardError::UnregisteredPlatform(platform))?;
        Ok(normalizer.normalize(raw))
    }

    /// Registered platforms, in registration order
    pub fn platforms(&self) -> Vec<Platform> {
        self.normalizers.iter().map(|n| n.platform()).collect()
    }
}

impl Default for NormalizationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

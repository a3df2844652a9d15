//! Allocation limit configuration.
//!
//! A [`RegionConfig`] bounds how large a single root allocation may be.
//! Embedders that expose regions to untrusted scripts typically lower the
//! limit; the default matches the 1 GiB ceiling common to scripting-host
//! buffer implementations.

use serde::{Deserialize, Serialize};

/// Default cap on a single root allocation: 1 GiB.
pub const DEFAULT_MAX_ALLOCATION: usize = 1 << 30;

/// Tunables for root-region allocation.
///
/// # Examples
///
/// ```
/// use byteregion::{ByteRegion, RegionConfig};
///
/// let config = RegionConfig::new().with_max_allocation(4096);
/// let region = ByteRegion::allocate_with(&config, 1024).unwrap();
/// assert_eq!(region.len(), 1024);
///
/// assert!(ByteRegion::allocate_with(&config, 8192).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Largest allowed single allocation, in bytes.
    pub max_allocation: usize,
}

impl RegionConfig {
    /// Config with the default allocation limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_allocation: DEFAULT_MAX_ALLOCATION,
        }
    }

    /// Replace the allocation limit.
    #[must_use]
    pub const fn with_max_allocation(mut self, max_allocation: usize) -> Self {
        self.max_allocation = max_allocation;
        self
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(RegionConfig::default().max_allocation, DEFAULT_MAX_ALLOCATION);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: RegionConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, RegionConfig::default());
    }

    #[test]
    fn test_deserialize_override() {
        let config: RegionConfig =
            serde_json::from_str(r#"{"max_allocation": 64}"#).expect("deserialize");
        assert_eq!(config.max_allocation, 64);
    }
}

//! Supervisor configuration
//!
//! The configuration can be persisted to flash as postcard-serialized
//! binary data and validated on load.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magic number to identify valid configuration data
pub const CONFIG_MAGIC: u32 = 0x4653_4146; // "FSAF"

/// Current configuration data version
pub const CONFIG_VERSION: u8 = 1;

/// Default loop time budget (ms)
pub const DEFAULT_LOOP_TIMEOUT_MS: u32 = 3000;

/// Maximum serialized configuration size
pub const MAX_CONFIG_SIZE: usize = 16;

/// Configuration encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Invalid magic or version
    InvalidFormat,
}

/// Supervisor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SupervisorConfig {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Maximum time between successful feeds (ms)
    pub loop_timeout_ms: u32,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_LOOP_TIMEOUT_MS)
    }
}

impl SupervisorConfig {
    /// Create a configuration with the given loop budget
    pub const fn with_timeout(loop_timeout_ms: u32) -> Self {
        Self {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            loop_timeout_ms,
        }
    }

    /// Check magic and version
    pub const fn is_valid(&self) -> bool {
        self.magic == CONFIG_MAGIC && self.version == CONFIG_VERSION
    }

    /// Serialize into `buf`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn encode<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if !config.is_valid() {
            return Err(ConfigError::InvalidFormat);
        }

        Ok(config)
    }
}

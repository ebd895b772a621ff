//! Safe-mode failure reasons

use core::fmt;

/// Why the supervisor entered safe mode
///
/// Each variant has a stable numeric code so the reason can be stored or
/// sent over a link and decoded later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FailureReason {
    /// No failure recorded
    #[default]
    None = 0,
    /// `feed` was not called within the time budget
    LoopTimeout = 1,
    /// A health check failed or the application reported a fatal error
    CriticalError = 2,
    /// Safe mode was requested explicitly (button, remote command)
    Manual = 3,
}

/// Description reported for a code that maps to no known reason
pub const UNKNOWN_REASON: &str = "Unknown";

impl FailureReason {
    /// Numeric code of this reason
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric reason code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FailureReason::None),
            1 => Some(FailureReason::LoopTimeout),
            2 => Some(FailureReason::CriticalError),
            3 => Some(FailureReason::Manual),
            _ => None,
        }
    }

    /// Human-readable description
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureReason::None => "No fail",
            FailureReason::LoopTimeout => "Loop timeout",
            FailureReason::CriticalError => "Critical error",
            FailureReason::Manual => "Manual trigger",
        }
    }

    /// Description for a raw code, `"Unknown"` if it is not recognized
    pub const fn describe_code(code: u8) -> &'static str {
        match Self::from_code(code) {
            Some(reason) => reason.as_str(),
            None => UNKNOWN_REASON,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

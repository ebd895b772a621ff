//! Board-agnostic fail-safe supervisor for loop-driven firmware
//!
//! This crate contains the supervision logic, which does not depend on
//! specific hardware:
//!
//! - Collaborator traits (clock, health check, diagnostic sink)
//! - Supervisor state and failure reasons
//! - The supervisor itself, plus a mutex-guarded shared variant
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod safety;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::SupervisorConfig;
pub use safety::{FailSafeSupervisor, SharedSupervisor, SupervisorError};
pub use state::{FailureReason, SupervisorState};
pub use traits::{Clock, DiagnosticSink, HealthCheck, NullSink};

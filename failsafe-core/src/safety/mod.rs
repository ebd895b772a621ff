//! Liveness and health supervision
//!
//! Detects a stalled main loop or a failed health check and latches the
//! system into safe mode.

pub mod shared;
pub mod supervisor;

pub use shared::SharedSupervisor;
pub use supervisor::{
    FailSafeSupervisor, SupervisorError, DEFAULT_MAX_CHECKS, MAX_MESSAGE_LEN,
};

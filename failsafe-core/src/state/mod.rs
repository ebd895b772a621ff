//! Supervisor state
//!
//! Two states: `Normal` and a terminal `SafeMode` that carries the reason it
//! was entered. There is no transition out of safe mode.

pub mod machine;
pub mod reason;

pub use machine::SupervisorState;
pub use reason::FailureReason;

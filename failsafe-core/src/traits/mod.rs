//! Collaborator traits
//!
//! These traits define the interface between the supervisor and the
//! application or board that hosts it. None of them are implemented by the
//! supervisor itself.

pub mod clock;
pub mod diagnostic;
pub mod health;

pub use clock::Clock;
#[cfg(feature = "defmt")]
pub use diagnostic::DefmtSink;
pub use diagnostic::{DiagnosticSink, NullSink};
pub use health::HealthCheck;

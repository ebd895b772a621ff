//! Embassy async tasks
//!
//! Each task runs independently of the main loop and reaches the
//! supervisor through its shared handle or through `channels`.

pub mod heartbeat;
pub mod manual_trigger;

pub use heartbeat::heartbeat_task;
pub use manual_trigger::manual_trigger_task;

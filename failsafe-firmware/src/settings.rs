//! Settings compiled in from failsafe.toml
//!
//! `build.rs` validates the file and generates these constants:
//! `LOOP_TIMEOUT_MS`, `LOOP_PERIOD_MS`, `HEARTBEAT_PERIOD_MS`, `DEBOUNCE_MS`.

include!(concat!(env!("OUT_DIR"), "/settings.rs"));

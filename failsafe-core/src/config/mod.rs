//! Configuration types
//!
//! Board-agnostic supervisor settings, storable as postcard binary data.

pub mod types;

pub use types::*;

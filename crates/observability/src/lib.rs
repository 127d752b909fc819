//! Logging setup shared by binaries and tests that embed the catalog.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the embedding process through [`init`].

pub mod tracing;

pub use self::tracing::{init, init_with_default, DEFAULT_FILTER};

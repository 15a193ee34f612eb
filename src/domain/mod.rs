//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (validated, display-ready)
//! - `wire.rs` — Raw serde structs matching upstream responses
//! - `client.rs` — Sub-client with HTTP methods

pub mod market;
pub mod price_history;
pub mod recorder;

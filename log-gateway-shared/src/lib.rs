//! # Log Gateway Shared
//!
//! This crate defines the data structures shared across the log gateway crates.
//! It includes the `Log` document that is stored in the search backend.

pub mod types;

pub use types::log::{Log, LOG_ID_FIELD};

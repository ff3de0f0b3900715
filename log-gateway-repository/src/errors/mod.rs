//! Error types for the log gateway repository.
//!
//! This module provides a unified error type for all log index operations.

mod log_index_error;

pub use log_index_error::LogIndexError;

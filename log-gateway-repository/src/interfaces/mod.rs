//! Interface definitions for the log index provider.
//!
//! This module defines the abstract `LogIndexProvider` trait that lets the
//! service run against OpenSearch in production and an in-memory mock in tests.

mod log_index_provider;

pub use log_index_provider::LogIndexProvider;

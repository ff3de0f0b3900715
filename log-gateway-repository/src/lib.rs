//! # Log Gateway Repository
//!
//! This crate provides traits and implementations for storing log documents in
//! a search backend. It includes definitions for errors, interfaces, a concrete
//! implementation for OpenSearch, and the service that implements the gateway's
//! create, list and delete semantics.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod service;
pub mod types;

pub use config::BackendConfig;
pub use errors::LogIndexError;
pub use interfaces::LogIndexProvider;
pub use opensearch::OpenSearchProvider;
pub use service::LogIndexService;
pub use types::DeleteByQueryResult;

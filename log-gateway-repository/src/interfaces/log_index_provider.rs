//! Log index provider trait definition.
//!
//! This module defines the abstract interface for log index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use log_gateway_shared::Log;

use crate::errors::LogIndexError;
use crate::types::DeleteByQueryResult;

/// Abstracts the underlying search backend (OpenSearch, Elasticsearch, etc.).
///
/// Implementations are injected into `LogIndexService` so the gateway logic can
/// be exercised against an in-memory mock. All methods return
/// `Result<T, LogIndexError>` for consistent error handling.
///
/// # Index Initialization
///
/// Implementations should call `ensure_index_exists` during application startup to ensure
/// the index, its analyzers and its mappings exist before serving requests.
#[async_trait]
pub trait LogIndexProvider: Send + Sync {
    /// Ensure the log index exists, creating it with the configured analysis
    /// settings and mappings if necessary.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index is ready for use
    /// * `Err(LogIndexError)` - If the existence check or creation fails
    async fn ensure_index_exists(&self) -> Result<(), LogIndexError>;

    /// Index a document under its `id`, replacing any existing document with
    /// the same id (upsert).
    ///
    /// # Arguments
    ///
    /// * `log` - The document to store
    async fn index_document(&self, log: &Log) -> Result<(), LogIndexError>;

    /// Fetch a document by id.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Log))` - The stored document
    /// * `Ok(None)` - If no document with this id is visible
    /// * `Err(LogIndexError)` - If the backend call fails
    async fn get_document(&self, id: &str) -> Result<Option<Log>, LogIndexError>;

    /// Return every document matched by an unfiltered search.
    ///
    /// No page size is requested, so the backend's default hit cap applies.
    async fn search_documents(&self) -> Result<Vec<Log>, LogIndexError>;

    /// Delete every document whose `id` field matches exactly (term query).
    ///
    /// # Returns
    ///
    /// * `Ok(DeleteByQueryResult)` - Counts reported by the backend
    /// * `Err(LogIndexError)` - If the request itself fails
    async fn delete_by_id_query(&self, id: &str) -> Result<DeleteByQueryResult, LogIndexError>;
}

//! Log index service implementation.
//!
//! This module provides the service that implements the gateway operations on
//! top of a `LogIndexProvider`: create (index then re-fetch), list (unfiltered
//! search) and delete (existence check then delete-by-query).

use log_gateway_shared::Log;
use tracing::{debug, info, warn};

use crate::errors::LogIndexError;
use crate::interfaces::LogIndexProvider;

/// The main service for interacting with the log index.
///
/// Holds no mutable state of its own; every call goes straight to the provider,
/// so a single instance can be shared across concurrent requests.
///
/// # Example
///
/// ```no_run
/// use log_gateway_repository::{BackendConfig, LogIndexService, OpenSearchProvider};
/// use log_gateway_shared::Log;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BackendConfig::new("http://localhost:9200", "logs");
/// let provider = Box::new(OpenSearchProvider::new(&config)?);
/// let service = LogIndexService::new(provider);
///
/// let stored = service.create(Log::new("A1").with_field("message", "hello")).await?;
/// assert_eq!(stored.map(|log| log.id), Some("A1".to_string()));
///
/// service.delete("A1").await?;
/// # Ok(())
/// # }
/// ```
pub struct LogIndexService {
    provider: Box<dyn LogIndexProvider>,
}

impl LogIndexService {
    /// Create a new LogIndexService backed by the given provider.
    pub fn new(provider: Box<dyn LogIndexProvider>) -> Self {
        Self { provider }
    }

    /// Ensure the backing index exists. Called once at startup.
    pub async fn initialize(&self) -> Result<(), LogIndexError> {
        self.provider.ensure_index_exists().await
    }

    /// Index a log under its id, then fetch it back.
    ///
    /// The two steps are not atomic. If the backend has not made the document
    /// visible yet, the fetch returns `None` and so does this function.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Log))` - The document as stored by the backend
    /// * `Ok(None)` - If the document was indexed but is not visible yet
    /// * `Err(LogIndexError)` - If either backend call fails
    pub async fn create(&self, log: Log) -> Result<Option<Log>, LogIndexError> {
        self.provider.index_document(&log).await?;

        let stored = self.provider.get_document(&log.id).await?;
        if stored.is_none() {
            warn!(id = %log.id, "Indexed log not visible on re-fetch");
        }

        info!(id = %log.id, "Log created");
        Ok(stored)
    }

    /// Return every log the backend returns for an unfiltered search.
    ///
    /// Order is whatever the backend's default scoring produces.
    pub async fn list(&self) -> Result<Vec<Log>, LogIndexError> {
        let logs = self.provider.search_documents().await?;
        debug!(count = logs.len(), "Listed logs");
        Ok(logs)
    }

    /// Delete the log with the given id.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the log existed and the delete-by-query removed it without failures
    /// * `Err(LogIndexError::DocumentNotFound)` - If no log with this id exists; nothing is deleted
    /// * `Err(LogIndexError::DeleteError)` - If the delete-by-query reported failures or deleted nothing
    /// * `Err(LogIndexError)` - If any backend call fails
    pub async fn delete(&self, id: &str) -> Result<(), LogIndexError> {
        if self.provider.get_document(id).await?.is_none() {
            debug!(id = %id, "Delete requested for missing log");
            return Err(LogIndexError::document_not_found(id));
        }

        let result = self.provider.delete_by_id_query(id).await?;
        if result.has_failures() {
            return Err(LogIndexError::delete(format!(
                "Delete by query for id={} reported {} failure(s): {}",
                id,
                result.failures.len(),
                result.failures.join("; ")
            )));
        }

        // The get is realtime, the query is not: a match can still be missed
        if result.deleted == 0 {
            return Err(LogIndexError::delete(format!(
                "Delete by query for id={} matched {} and deleted no documents",
                id, result.total
            )));
        }

        info!(id = %id, deleted = result.deleted, "Log deleted");
        Ok(())
    }
}

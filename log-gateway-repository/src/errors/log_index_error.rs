//! Log index error types.
//!
//! This module defines the unified error type for all log index operations,
//! including both low-level backend errors and the not-found condition
//! raised by the service layer.

use thiserror::Error;

/// Unified errors from log index operations.
///
/// Used by the `LogIndexProvider` trait and `LogIndexService`. Everything except
/// `DocumentNotFound` describes a failure talking to the backend.
#[derive(Debug, Clone, Error)]
pub enum LogIndexError {
    /// Failed to establish connection to the search backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to index a document.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Failed to fetch a document by id.
    #[error("Get error: {0}")]
    GetError(String),

    /// Failed to run a search.
    #[error("Search error: {0}")]
    SearchError(String),

    /// Failed to delete documents.
    #[error("Delete error: {0}")]
    DeleteError(String),

    /// Failed to check for or create the index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to parse a response from the search backend.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No document with the given id.
    #[error("Document not found: id={0}")]
    DocumentNotFound(String),
}

impl LogIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a get error.
    pub fn get(msg: impl Into<String>) -> Self {
        Self::GetError(msg.into())
    }

    /// Create a search error.
    pub fn search(msg: impl Into<String>) -> Self {
        Self::SearchError(msg.into())
    }

    /// Create a delete error.
    pub fn delete(msg: impl Into<String>) -> Self {
        Self::DeleteError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a document not found error.
    pub fn document_not_found(id: &str) -> Self {
        Self::DocumentNotFound(id.to_string())
    }

    /// Whether this error reports a missing document rather than a backend failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DocumentNotFound(_))
    }
}

//! Request and response types for log index operations.

/// Outcome of a delete-by-query request as reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteByQueryResult {
    /// Number of documents the query matched.
    pub total: u64,
    /// Number of documents actually deleted.
    pub deleted: u64,
    /// Per-document failure descriptions returned by the backend.
    pub failures: Vec<String>,
}

impl DeleteByQueryResult {
    /// Whether the backend reported any failures for this request.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

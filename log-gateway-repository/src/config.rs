//! Configuration types for the search backend connection.

/// Default backend URL used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9200";

/// Default index name used when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "logs";

/// Connection settings for the search backend.
///
/// Both values are opaque strings read once at startup. The index name is the
/// default index for every document operation the gateway performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// The backend server URL (e.g., "http://localhost:9200").
    pub url: String,
    /// The default index for all log documents.
    pub default_index: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
            default_index: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

impl BackendConfig {
    /// Create a backend configuration.
    ///
    /// # Arguments
    ///
    /// * `url` - The backend server URL
    /// * `default_index` - The index name used for all operations
    pub fn new(url: impl Into<String>, default_index: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            default_index: default_index.into(),
        }
    }
}

//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `LogIndexProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use log_gateway_shared::{Log, LOG_ID_FIELD};
use opensearch::{
    http::response::Response,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::Refresh,
    DeleteByQueryParts, GetParts, IndexParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::config::BackendConfig;
use crate::errors::LogIndexError;
use crate::interfaces::LogIndexProvider;
use crate::opensearch::index_config::get_index_settings;
use crate::types::DeleteByQueryResult;

/// OpenSearch provider implementation.
///
/// Holds a single long-lived client that is shared by every request. The
/// underlying transport pools connections and is safe for concurrent use.
///
/// # Example
///
/// ```ignore
/// use log_gateway_repository::{BackendConfig, LogIndexProvider, OpenSearchProvider};
/// use log_gateway_shared::Log;
///
/// let config = BackendConfig::new("http://localhost:9200", "logs");
/// let provider = OpenSearchProvider::new(&config)?;
/// provider.ensure_index_exists().await?;
/// provider.index_document(&Log::new("A1")).await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    index: String,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider for the configured URL and index.
    ///
    /// No request is sent here; connectivity problems surface on first use.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(LogIndexError)` - If the URL is invalid or the transport cannot be built
    pub fn new(config: &BackendConfig) -> Result<Self, LogIndexError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| LogIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| LogIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %config.url,
            index = %config.default_index,
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            index: config.default_index.clone(),
        })
    }

    /// The index every operation targets.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Read the body of a failed response for error reporting.
    async fn failure_body(response: Response) -> String {
        response.text().await.unwrap_or_default()
    }

    /// Extract the document from a get-by-id response body.
    fn parse_get_response(body: Value) -> Result<Option<Log>, LogIndexError> {
        if !body["found"].as_bool().unwrap_or(false) {
            return Ok(None);
        }
        match body.get("_source") {
            Some(source) => serde_json::from_value(source.clone())
                .map(Some)
                .map_err(|e| LogIndexError::parse(e.to_string())),
            None => Ok(None),
        }
    }

    /// Extract every hit's `_source` from a search response body.
    fn parse_search_hits(body: Value) -> Result<Vec<Log>, LogIndexError> {
        let hits = body["hits"]["hits"]
            .as_array()
            .ok_or_else(|| LogIndexError::parse("Search response has no hits array"))?;

        hits.iter()
            .filter_map(|hit| hit.get("_source"))
            .map(|source| {
                serde_json::from_value(source.clone())
                    .map_err(|e| LogIndexError::parse(e.to_string()))
            })
            .collect()
    }

    /// Extract counts and failures from a delete-by-query response body.
    fn parse_delete_by_query(body: &Value) -> DeleteByQueryResult {
        let failures = body["failures"]
            .as_array()
            .map(|failures| failures.iter().map(|f| f.to_string()).collect())
            .unwrap_or_default();

        DeleteByQueryResult {
            total: body["total"].as_u64().unwrap_or(0),
            deleted: body["deleted"].as_u64().unwrap_or(0),
            failures,
        }
    }

    /// Build the exact-match query used for deletes.
    fn id_term_query(id: &str) -> Value {
        json!({
            "query": {
                "term": {
                    LOG_ID_FIELD: id
                }
            }
        })
    }
}

#[async_trait]
impl LogIndexProvider for OpenSearchProvider {
    async fn ensure_index_exists(&self) -> Result<(), LogIndexError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index.as_str()]))
            .send()
            .await
            .map_err(|e| LogIndexError::index_creation(e.to_string()))?;

        if response.status_code().is_success() {
            info!(index = %self.index, "Index already exists");
            return Ok(());
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.index))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| LogIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(status = %status, body = %error_body, "Index creation failed");
            return Err(LogIndexError::index_creation(format!(
                "Index creation failed with status {}: {}",
                status, error_body
            )));
        }

        info!(index = %self.index, "Created index with log analyzers and mappings");
        Ok(())
    }

    /// Index a document under its id.
    ///
    /// Uses `refresh=wait_for` so the document is searchable once this returns.
    async fn index_document(&self, log: &Log) -> Result<(), LogIndexError> {
        let response = self
            .client
            .index(IndexParts::IndexId(&self.index, &log.id))
            .body(log)
            .refresh(Refresh::WaitFor)
            .send()
            .await
            .map_err(|e| LogIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(LogIndexError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(id = %log.id, "Document indexed");
        Ok(())
    }

    async fn get_document(&self, id: &str) -> Result<Option<Log>, LogIndexError> {
        let response = self
            .client
            .get(GetParts::IndexId(&self.index, id))
            .send()
            .await
            .map_err(|e| LogIndexError::get(e.to_string()))?;

        let status = response.status_code();

        // 404 covers both a missing document and a missing index
        if status.as_u16() == 404 {
            debug!(id = %id, "Document not found");
            return Ok(None);
        }

        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(status = %status, body = %error_body, "Get request failed");
            return Err(LogIndexError::get(format!(
                "Get failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| LogIndexError::parse(e.to_string()))?;

        Self::parse_get_response(body)
    }

    async fn search_documents(&self) -> Result<Vec<Log>, LogIndexError> {
        let response = self
            .client
            .search(SearchParts::Index(&[self.index.as_str()]))
            .body(json!({
                "query": {
                    "match_all": {}
                }
            }))
            .send()
            .await
            .map_err(|e| LogIndexError::search(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(LogIndexError::search(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| LogIndexError::parse(e.to_string()))?;

        let logs = Self::parse_search_hits(body)?;
        debug!(count = logs.len(), "Search returned documents");
        Ok(logs)
    }

    async fn delete_by_id_query(&self, id: &str) -> Result<DeleteByQueryResult, LogIndexError> {
        let response = self
            .client
            .delete_by_query(DeleteByQueryParts::Index(&[self.index.as_str()]))
            .body(Self::id_term_query(id))
            .refresh(true)
            .send()
            .await
            .map_err(|e| LogIndexError::delete(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(status = %status, body = %error_body, "Delete by query request failed");
            return Err(LogIndexError::delete(format!(
                "Delete by query failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| LogIndexError::parse(e.to_string()))?;

        let result = Self::parse_delete_by_query(&body);
        debug!(
            id = %id,
            deleted = result.deleted,
            failures = result.failures.len(),
            "Delete by query completed"
        );
        Ok(result)
    }
}

//! Integration tests for the log gateway HTTP API.
//!
//! These tests use the real router, handlers and LogIndexService but replace the
//! OpenSearch provider with an in-memory mock.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use log_gateway::server::{create_app, state::AppState};
use log_gateway_repository::{
    DeleteByQueryResult, LogIndexError, LogIndexProvider, LogIndexService,
};
use log_gateway_shared::Log;
use serde_json::{json, Value};
use tower::ServiceExt;

// Mock Log Provider for testing
#[derive(Default)]
struct MockLogProvider {
    documents: Mutex<BTreeMap<String, Log>>,
    delete_calls: Mutex<Vec<String>>,
    unavailable: AtomicBool,
    hide_after_index: AtomicBool,
}

impl MockLogProvider {
    fn check_available(&self) -> Result<(), LogIndexError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LogIndexError::connection("Mock backend unreachable"));
        }
        Ok(())
    }

    fn delete_count(&self) -> usize {
        self.delete_calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LogIndexProvider for MockLogProvider {
    async fn ensure_index_exists(&self) -> Result<(), LogIndexError> {
        self.check_available()
    }

    async fn index_document(&self, log: &Log) -> Result<(), LogIndexError> {
        self.check_available()?;
        if self.hide_after_index.load(Ordering::SeqCst) {
            return Ok(());
        }
        self.documents
            .lock()
            .unwrap()
            .insert(log.id.clone(), log.clone());
        Ok(())
    }

    async fn get_document(&self, id: &str) -> Result<Option<Log>, LogIndexError> {
        self.check_available()?;
        Ok(self.documents.lock().unwrap().get(id).cloned())
    }

    async fn search_documents(&self) -> Result<Vec<Log>, LogIndexError> {
        self.check_available()?;
        Ok(self.documents.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id_query(&self, id: &str) -> Result<DeleteByQueryResult, LogIndexError> {
        self.check_available()?;
        self.delete_calls.lock().unwrap().push(id.to_string());
        let deleted = self.documents.lock().unwrap().remove(id).map_or(0, |_| 1);
        Ok(DeleteByQueryResult {
            total: deleted,
            deleted,
            failures: Vec::new(),
        })
    }
}

/// Provider wrapper so the test keeps a handle on the mock's state.
struct SharedProvider(Arc<MockLogProvider>);

#[async_trait::async_trait]
impl LogIndexProvider for SharedProvider {
    async fn ensure_index_exists(&self) -> Result<(), LogIndexError> {
        self.0.ensure_index_exists().await
    }

    async fn index_document(&self, log: &Log) -> Result<(), LogIndexError> {
        self.0.index_document(log).await
    }

    async fn get_document(&self, id: &str) -> Result<Option<Log>, LogIndexError> {
        self.0.get_document(id).await
    }

    async fn search_documents(&self) -> Result<Vec<Log>, LogIndexError> {
        self.0.search_documents().await
    }

    async fn delete_by_id_query(&self, id: &str) -> Result<DeleteByQueryResult, LogIndexError> {
        self.0.delete_by_id_query(id).await
    }
}

fn setup_test_app() -> (Router, Arc<MockLogProvider>) {
    let provider = Arc::new(MockLogProvider::default());
    let service = LogIndexService::new(Box::new(SharedProvider(provider.clone())));
    let app = create_app(AppState {
        service: Arc::new(service),
    });
    (app, provider)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&body).into_owned(),
        ))
    };
    (status, headers, json)
}

fn create_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/log")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/log")
        .body(Body::empty())
        .unwrap()
}

fn delete_request(id: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/api/log/{}", id))
        .body(Body::empty())
        .unwrap()
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|log| log["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_returns_created_document() {
    let (app, _provider) = setup_test_app();

    let (status, _, body) = send(
        &app,
        create_request(json!({ "id": "A1", "message": "disk almost full", "level": "warn" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "A1");
    assert_eq!(body["message"], "disk almost full");
    assert_eq!(body["level"], "warn");
}

#[tokio::test]
async fn test_create_with_existing_id_overwrites() {
    let (app, _provider) = setup_test_app();

    send(&app, create_request(json!({ "id": "A1", "message": "first" }))).await;
    let (status, _, body) =
        send(&app, create_request(json!({ "id": "A1", "message": "second" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "second");

    let (_, _, list) = send(&app, list_request()).await;
    assert_eq!(ids(&list), vec!["A1".to_string()]);
    assert_eq!(list[0]["message"], "second");
}

#[tokio::test]
async fn test_create_not_yet_visible_returns_created_with_null_body() {
    let (app, provider) = setup_test_app();
    provider.hide_after_index.store(true, Ordering::SeqCst);

    let (status, _, body) = send(&app, create_request(json!({ "id": "A1" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let (app, _provider) = setup_test_app();

    let (status, _, body) = send(&app, list_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_missing_returns_not_found_without_mutation() {
    let (app, provider) = setup_test_app();
    send(&app, create_request(json!({ "id": "B2" }))).await;

    let (status, _, body) = send(&app, delete_request("missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    assert_eq!(provider.delete_count(), 0);

    let (_, _, list) = send(&app, list_request()).await;
    assert_eq!(ids(&list), vec!["B2".to_string()]);
}

#[tokio::test]
async fn test_create_list_delete_scenario() {
    let (app, _provider) = setup_test_app();

    let (status, _, body) = send(&app, create_request(json!({ "id": "A1" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "A1");

    let (status, _, list) = send(&app, list_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list).iter().filter(|id| *id == "A1").count(), 1);

    let (status, _, _) = send(&app, delete_request("A1")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, _, list) = send(&app, list_request()).await;
    assert!(!ids(&list).contains(&"A1".to_string()));

    let (status, _, _) = send(&app, delete_request("A1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_backend_failure_maps_to_server_error() {
    let (app, provider) = setup_test_app();
    provider.unavailable.store(true, Ordering::SeqCst);

    let (status, _, body) = send(&app, create_request(json!({ "id": "A1" }))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("unreachable"));

    let (status, _, _) = send(&app, list_request()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, _) = send(&app, delete_request("A1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_responses_have_no_server_header() {
    let (app, _provider) = setup_test_app();

    let (_, headers, _) = send(&app, list_request()).await;
    assert!(headers.get(header::SERVER).is_none());

    let (_, headers, _) = send(&app, delete_request("missing")).await;
    assert!(headers.get(header::SERVER).is_none());
}

#[tokio::test]
async fn test_health_check() {
    let (app, _provider) = setup_test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Log gateway is running".to_string()));
}

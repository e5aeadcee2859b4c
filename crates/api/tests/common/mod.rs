//! Shared harness for the API integration tests.
//!
//! Requests run through the production router (`build_app_router`) with
//! `tower::ServiceExt::oneshot`; the database is replaced by an in-memory
//! [`NoteStore`].

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use notas_api::config::ServerConfig;
use notas_api::router::build_app_router;
use notas_api::state::AppState;
use notas_core::types::DbId;
use notas_db::models::note::{NewNote, Note};
use notas_db::NoteStore;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Holds notes in a vector and hands out ids the way `AUTO_INCREMENT` does:
/// increasing, never reused.
#[derive(Default)]
pub struct MemoryStore {
    notes: Mutex<Vec<Note>>,
    last_id: AtomicI64,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        let mut notes = self.notes.lock().unwrap().clone();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn create(&self, note: &NewNote) -> Result<DbId, sqlx::Error> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.notes.lock().unwrap().push(Note {
            id,
            title: note.title.clone(),
            body: note.body.clone(),
            created_at: chrono::Utc::now(),
        });
        Ok(id)
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        Ok(notes.len() < before)
    }
}

/// Every operation fails as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl NoteStore for FailingStore {
    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn create(&self, _note: &NewNote) -> Result<DbId, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Panics on every operation, to exercise panic recovery.
pub struct PanickingStore;

#[async_trait]
impl NoteStore for PanickingStore {
    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        panic!("list exploded")
    }

    async fn create(&self, _note: &NewNote) -> Result<DbId, sqlx::Error> {
        panic!("create exploded")
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        panic!("delete exploded")
    }
}

/// Sleeps well past any test timeout before answering.
pub struct SlowStore;

const SLOW_STORE_DELAY: std::time::Duration = std::time::Duration::from_secs(5);

#[async_trait]
impl NoteStore for SlowStore {
    async fn list(&self) -> Result<Vec<Note>, sqlx::Error> {
        tokio::time::sleep(SLOW_STORE_DELAY).await;
        Ok(Vec::new())
    }

    async fn create(&self, _note: &NewNote) -> Result<DbId, sqlx::Error> {
        tokio::time::sleep(SLOW_STORE_DELAY).await;
        Ok(1)
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        tokio::time::sleep(SLOW_STORE_DELAY).await;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Test configuration: defaults, plus a small body limit so the 413 path is
/// cheap to exercise.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::from_lookup(&|_: &str| None).unwrap();
    config.max_body_bytes = 1024;
    config
}

/// Build the full application router over `store`.
pub fn build_test_app(store: Arc<dyn NoteStore>) -> Router {
    build_test_app_with_config(store, &test_config())
}

pub fn build_test_app_with_config(store: Arc<dyn NoteStore>, config: &ServerConfig) -> Router {
    build_app_router(AppState { store }, config)
}

/// Router over a fresh in-memory store, returning the store for inspection.
pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (build_test_app(store.clone()), store)
}

/// Router whose store always fails.
pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", json.to_string()).await
}

pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Create a note through the API and return its id.
pub async fn create_note(app: &Router, titulo: &str, contenido: &str) -> i64 {
    let response = post_json(
        app,
        "/notas",
        serde_json::json!({ "titulo": titulo, "contenido": contenido }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// `GET /notas` as parsed JSON array.
pub async fn list_notes(app: &Router) -> Vec<serde_json::Value> {
    let response = get(app, "/notas").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

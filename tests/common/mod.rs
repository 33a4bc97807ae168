//! Shared fixtures: an in-memory `CategoryService` and request helpers for driving the router.

// Each test file is its own crate; not every helper is used by every file.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use category_api::{
    app_router, AppError, AppState, CategoryCreateRequest, CategoryResponse, CategoryService,
    CategoryUpdateRequest, RequestValidator,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const API_KEY: &str = "RAHASIA";

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, String>,
}

/// Map-backed service with the same validation and not-found rules as the PostgreSQL one.
#[derive(Default)]
pub struct InMemoryCategoryService {
    table: Mutex<Table>,
    calls: AtomicUsize,
}

impl InMemoryCategoryService {
    pub fn seed(&self, name: &str) -> i64 {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(id, name.to_string());
        id
    }

    pub fn stored_name(&self, id: i64) -> Option<String> {
        self.table.lock().unwrap().rows.get(&id).cloned()
    }

    /// Number of service calls made by handlers.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn not_found() -> AppError {
    AppError::NotFound("category not found".into())
}

#[async_trait]
impl CategoryService for InMemoryCategoryService {
    async fn create(&self, request: CategoryCreateRequest) -> Result<CategoryResponse, AppError> {
        self.touch();
        RequestValidator::validate(&request)?;
        let id = self.seed(&request.name);
        Ok(CategoryResponse { id, name: request.name })
    }

    async fn update(&self, id: i64, request: CategoryUpdateRequest) -> Result<CategoryResponse, AppError> {
        self.touch();
        RequestValidator::validate(&request)?;
        let mut table = self.table.lock().unwrap();
        let row = table.rows.get_mut(&id).ok_or_else(not_found)?;
        row.clone_from(&request.name);
        Ok(CategoryResponse { id, name: request.name })
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.touch();
        self.table
            .lock()
            .unwrap()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(not_found)
    }

    async fn find_by_id(&self, id: i64) -> Result<CategoryResponse, AppError> {
        self.touch();
        self.stored_name(id)
            .map(|name| CategoryResponse { id, name })
            .ok_or_else(not_found)
    }

    async fn find_all(&self) -> Result<Vec<CategoryResponse>, AppError> {
        self.touch();
        Ok(self
            .table
            .lock()
            .unwrap()
            .rows
            .iter()
            .map(|(id, name)| CategoryResponse { id: *id, name: name.clone() })
            .collect())
    }
}

pub fn app_with(service: Arc<dyn CategoryService>) -> Router {
    app_router(AppState::new(service, API_KEY))
}

/// Fresh in-memory service and a router wired to it.
pub fn setup() -> (Arc<InMemoryCategoryService>, Router) {
    let service = Arc::new(InMemoryCategoryService::default());
    let app = app_with(service.clone());
    (service, app)
}

pub fn request(method: Method, uri: &str, api_key: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-API-KEY", key);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Run one request through the router and decode the envelope.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

pub async fn call(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    send(app, request(method, uri, Some(API_KEY), body)).await
}

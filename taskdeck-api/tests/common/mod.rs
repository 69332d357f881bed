/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory store setup (no database required)
/// - Router and GraphQL schema construction
/// - Request/response helpers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use taskdeck_api::app::{build_router, AppState};
use taskdeck_api::config::Config;
use taskdeck_api::graphql::TaskDeckSchema;
use taskdeck_shared::store::memory::MemoryStore;
use taskdeck_shared::store::{TaskStore, UserStore};
use tower::Service as _;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub app: axum::Router,
    pub schema: TaskDeckSchema,
    pub users: Arc<dyn UserStore>,
    pub tasks: Arc<dyn TaskStore>,
}

impl TestContext {
    /// Creates a new test context backed by a fresh in-memory store
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let users: Arc<dyn UserStore> = store.clone();
        let tasks: Arc<dyn TaskStore> = store;

        let state = AppState::new(users.clone(), tasks.clone(), Config::default());
        let schema = state.schema.clone();
        let app = build_router(state);

        TestContext {
            app,
            schema,
            users,
            tasks,
        }
    }

    /// Issues a request against the router and decodes the JSON body
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

/// Helper to create a user via the REST API, returning its id
pub async fn create_test_user(ctx: &TestContext, name: &str, email: &str) -> Uuid {
    let (status, body) = ctx
        .request(
            "POST",
            "/add-user",
            Some(serde_json::json!({ "name": name, "email": email })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "user creation failed: {}", body);

    body["user"]["_id"]
        .as_str()
        .and_then(|id| id.parse().ok())
        .expect("created user has an id")
}

/// Helper to create a task via the REST API, returning its id
pub async fn create_test_task(ctx: &TestContext, name: &str) -> Uuid {
    let (status, body) = ctx
        .request("POST", "/add-task", Some(serde_json::json!({ "name": name })))
        .await;
    assert_eq!(status, StatusCode::CREATED, "task creation failed: {}", body);

    body["task"]["_id"]
        .as_str()
        .and_then(|id| id.parse().ok())
        .expect("created task has an id")
}

/// Integration tests for the REST API
///
/// These tests run the full router over the in-memory store and verify:
/// - CRUD flows for users and tasks
/// - Response envelopes (message + entity + full list)
/// - Status codes (201 on create, 400 on domain failures, 404 on missing ids)
/// - Merge-on-update semantics and task defaults

mod common;

use axum::http::StatusCode;
use common::TestContext;
use serde_json::json;
use uuid::Uuid;

/// Test the health endpoint reports a healthy storage layer
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let (status, body) = ctx.request("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

/// Test that we can create a user and read it back
#[tokio::test]
async fn test_create_and_get_user() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .request(
            "POST",
            "/add-user",
            Some(json!({ "name": "John", "email": "john@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User added");
    assert_eq!(body["user"]["name"], "John");
    assert_eq!(body["user"]["email"], "john@example.com");
    assert_eq!(body["users"].as_array().unwrap().len(), 1);

    let id = body["user"]["_id"].as_str().unwrap();
    let (status, body) = ctx.request("GET", &format!("/users/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "john@example.com");
}

/// Test that a duplicate email is rejected without creating a user
#[tokio::test]
async fn test_create_user_duplicate_email() {
    let ctx = TestContext::new();

    common::create_test_user(&ctx, "John", "john@example.com").await;

    let (status, body) = ctx
        .request(
            "POST",
            "/add-user",
            Some(json!({ "name": "Johnny", "email": "john@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));

    // The duplicate must not have been persisted
    let (_, body) = ctx.request("GET", "/users", None).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

/// Test that a malformed email is rejected
#[tokio::test]
async fn test_create_user_invalid_email() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .request(
            "POST",
            "/add-user",
            Some(json!({ "name": "John", "email": "not-an-email" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid email address"));
}

/// Test that fetching an unknown user is a 404
#[tokio::test]
async fn test_get_user_not_found() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .request("GET", &format!("/users/{}", Uuid::new_v4()), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("does not exist"));
}

/// Test merge-on-update: omitted fields keep their value
#[tokio::test]
async fn test_update_user_partial() {
    let ctx = TestContext::new();

    let id = common::create_test_user(&ctx, "John", "john@example.com").await;

    let (status, body) = ctx
        .request(
            "PATCH",
            &format!("/edit-user/{}", id),
            Some(json!({ "name": "Jane" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated");
    assert_eq!(body["user"]["name"], "Jane");
    assert_eq!(body["user"]["email"], "john@example.com");
}

/// Test that updating to another user's email is rejected
#[tokio::test]
async fn test_update_user_email_conflict() {
    let ctx = TestContext::new();

    common::create_test_user(&ctx, "John", "john@example.com").await;
    let id = common::create_test_user(&ctx, "Jane", "jane@example.com").await;

    let (status, body) = ctx
        .request(
            "PATCH",
            &format!("/edit-user/{}", id),
            Some(json!({ "email": "john@example.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

/// Test that a delete returns the removed user and the id is gone afterwards
#[tokio::test]
async fn test_delete_user() {
    let ctx = TestContext::new();

    let id = common::create_test_user(&ctx, "John", "john@example.com").await;

    let (status, body) = ctx
        .request("DELETE", &format!("/delete-user/{}", id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");
    assert_eq!(body["user"]["email"], "john@example.com");
    assert!(body["users"].as_array().unwrap().is_empty());

    let (status, _) = ctx.request("GET", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Test that deleting a missing user surfaces a 404, never a silent success
#[tokio::test]
async fn test_delete_user_not_found() {
    let ctx = TestContext::new();

    let (status, _) = ctx
        .request("DELETE", &format!("/delete-user/{}", Uuid::new_v4()), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Test task creation defaults: status TODO, no assignee
#[tokio::test]
async fn test_create_task_defaults() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .request("POST", "/add-task", Some(json!({ "name": "Write docs" })))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Task added");
    assert_eq!(body["task"]["name"], "Write docs");
    assert_eq!(body["task"]["status"], "TODO");
    assert!(body["task"]["user"].is_null());
    assert!(body["task"]["createdAt"].is_string());
    assert!(body["task"]["updatedAt"].is_string());
}

/// Test that a task referencing an unknown user is rejected before any write
#[tokio::test]
async fn test_create_task_unknown_user() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .request(
            "POST",
            "/add-task",
            Some(json!({ "name": "Orphan", "user": Uuid::new_v4() })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("does not exist"));

    // Nothing must have been persisted
    let (_, body) = ctx.request("GET", "/tasks", None).await;
    assert!(body["tasks"].as_array().unwrap().is_empty());
}

/// Test status updates leave the other fields intact
#[tokio::test]
async fn test_update_task_status() {
    let ctx = TestContext::new();

    let id = common::create_test_task(&ctx, "Write docs").await;

    let (status, body) = ctx
        .request(
            "PATCH",
            &format!("/edit-task/{}", id),
            Some(json!({ "status": "DONE" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task updated");
    assert_eq!(body["task"]["status"], "DONE");
    assert_eq!(body["task"]["name"], "Write docs");
}

/// Test assigning a task to an existing user via update
#[tokio::test]
async fn test_update_task_assignment() {
    let ctx = TestContext::new();

    let user_id = common::create_test_user(&ctx, "John", "john@example.com").await;
    let task_id = common::create_test_task(&ctx, "Write docs").await;

    let (status, body) = ctx
        .request(
            "PATCH",
            &format!("/edit-task/{}", task_id),
            Some(json!({ "user": user_id })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["user"], user_id.to_string());
    assert_eq!(body["task"]["status"], "TODO");
}

/// Test that updating a task to an unknown assignee leaves it untouched
#[tokio::test]
async fn test_update_task_unknown_user() {
    let ctx = TestContext::new();

    let task_id = common::create_test_task(&ctx, "Write docs").await;

    let (status, _) = ctx
        .request(
            "PATCH",
            &format!("/edit-task/{}", task_id),
            Some(json!({ "name": "Changed", "user": Uuid::new_v4() })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = ctx
        .request("GET", &format!("/tasks/{}", task_id), None)
        .await;
    assert_eq!(body["task"]["name"], "Write docs");
}

/// Test that a task delete returns the removed document
#[tokio::test]
async fn test_delete_task() {
    let ctx = TestContext::new();

    let id = common::create_test_task(&ctx, "Write docs").await;

    let (status, body) = ctx
        .request("DELETE", &format!("/delete-task/{}", id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted");
    assert_eq!(body["task"]["name"], "Write docs");
    assert!(body["tasks"].as_array().unwrap().is_empty());
}

/// Test that deleting a user leaves its tasks with a dangling reference
#[tokio::test]
async fn test_delete_user_keeps_assigned_tasks() {
    let ctx = TestContext::new();

    let user_id = common::create_test_user(&ctx, "John", "john@example.com").await;
    let task_id = common::create_test_task(&ctx, "Write docs").await;

    ctx.request(
        "PATCH",
        &format!("/edit-task/{}", task_id),
        Some(json!({ "user": user_id })),
    )
    .await;

    let (status, _) = ctx
        .request("DELETE", &format!("/delete-user/{}", user_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // The task survives and still carries the old reference
    let (status, body) = ctx
        .request("GET", &format!("/tasks/{}", task_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["user"], user_id.to_string());
}

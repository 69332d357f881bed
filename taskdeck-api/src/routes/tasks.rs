/// Task REST endpoints
///
/// CRUD over the task collection. Creation accepts an optional assignee;
/// the store rejects the write with 400 when the referenced user does not
/// exist, before anything is persisted.
///
/// # Endpoints
///
/// ```text
/// GET    /tasks
/// GET    /tasks/:taskId
/// POST   /add-task
/// PATCH  /edit-task/:taskId
/// DELETE /delete-task/:taskId
/// ```
///
/// # Example Request
///
/// ```json
/// {
///   "name": "Clean roomba",
///   "description": "do things"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Task added",
///   "task": { "_id": "…", "name": "Clean roomba", "status": "TODO", "user": null },
///   "tasks": [ … ]
/// }
/// ```

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskdeck_shared::models::task::{CreateTask, Task, TaskProgress, UpdateTask};
use uuid::Uuid;
use validator::Validate;

/// Create task request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status (TODO when unspecified)
    pub status: Option<TaskProgress>,

    /// Optional assignee; must reference an existing user
    pub user: Option<Uuid>,
}

/// Update task request; omitted fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New task name
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskProgress>,

    /// New assignee; must reference an existing user
    pub user: Option<Uuid>,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    /// All tasks
    pub tasks: Vec<Task>,
}

/// Single-task response
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    /// The requested task
    pub task: Task,
}

/// Mutation response: the affected task plus the resulting full list
#[derive(Debug, Serialize)]
pub struct TaskMutationResponse {
    /// Outcome description
    pub message: String,

    /// The affected task
    pub task: Task,

    /// All tasks after the mutation
    pub tasks: Vec<Task>,
}

/// `GET /tasks`
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<ListTasksResponse>> {
    let tasks = state.tasks.list_tasks().await?;
    Ok(Json(ListTasksResponse { tasks }))
}

/// `GET /tasks/:taskId`
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state.tasks.get_task(task_id).await?;
    Ok(Json(TaskResponse { task }))
}

/// `POST /add-task`
///
/// Returns 201 on success. When `user` is supplied and no such user
/// exists, returns 400 and no task is created.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskMutationResponse>)> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let task = state
        .tasks
        .create_task(CreateTask {
            name: request.name,
            description: request.description,
            status: request.status,
            user: request.user,
        })
        .await?;

    tracing::info!(task_id = %task.id, status = task.status.as_str(), "Task created");

    let tasks = state.tasks.list_tasks().await?;
    Ok((
        StatusCode::CREATED,
        Json(TaskMutationResponse {
            message: "Task added".to_string(),
            task,
            tasks,
        }),
    ))
}

/// `PATCH /edit-task/:taskId`
///
/// Merge-on-update: only supplied fields overwrite. The relational check
/// applies when `user` is supplied.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskMutationResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let task = state
        .tasks
        .update_task(
            task_id,
            UpdateTask {
                name: request.name,
                description: request.description,
                status: request.status,
                user: request.user,
            },
        )
        .await?;

    tracing::info!(task_id = %task_id, "Task updated");

    let tasks = state.tasks.list_tasks().await?;
    Ok(Json(TaskMutationResponse {
        message: "Task updated".to_string(),
        task,
        tasks,
    }))
}

/// `DELETE /delete-task/:taskId`
///
/// Failures are surfaced, never swallowed: a missing id is a 404.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<TaskMutationResponse>> {
    let task = state.tasks.delete_task(task_id).await?;

    tracing::info!(task_id = %task_id, "Task deleted");

    let tasks = state.tasks.list_tasks().await?;
    Ok(Json(TaskMutationResponse {
        message: "Task deleted".to_string(),
        task,
        tasks,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_request_validation() {
        let valid = CreateTaskRequest {
            name: "Clean roomba".to_string(),
            description: Some("do things".to_string()),
            status: None,
            user: None,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateTaskRequest {
            name: "".to_string(),
            description: None,
            status: None,
            user: None,
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_status_deserializes_from_wire_names() {
        let request: CreateTaskRequest =
            serde_json::from_str(r#"{"name":"t","status":"IN_PROGRESS"}"#).unwrap();
        assert_eq!(request.status, Some(TaskProgress::InProgress));

        let bad = serde_json::from_str::<CreateTaskRequest>(r#"{"name":"t","status":"STARTED"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_update_request_allows_partial_bodies() {
        let partial: UpdateTaskRequest = serde_json::from_str(r#"{"status":"DONE"}"#).unwrap();
        assert_eq!(partial.status, Some(TaskProgress::Done));
        assert!(partial.name.is_none());
        assert!(partial.user.is_none());
    }
}

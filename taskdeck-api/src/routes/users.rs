/// User REST endpoints
///
/// CRUD over the user collection. Mutating responses echo the full user
/// list alongside the affected entity, matching the documented envelope.
///
/// # Endpoints
///
/// ```text
/// GET    /users
/// GET    /users/:userId
/// POST   /add-user
/// PATCH  /edit-user/:userId
/// DELETE /delete-user/:userId
/// ```

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use taskdeck_shared::models::user::{CreateUser, UpdateUser, User};
use uuid::Uuid;
use validator::Validate;

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Email address (uniqueness and shape are checked by the store)
    pub email: String,
}

/// Update user request; omitted fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// New email address
    pub email: Option<String>,
}

/// List response
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    /// All users
    pub users: Vec<User>,
}

/// Single-user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// The requested user
    pub user: User,
}

/// Mutation response: the affected user plus the resulting full list
#[derive(Debug, Serialize)]
pub struct UserMutationResponse {
    /// Outcome description
    pub message: String,

    /// The affected user
    pub user: User,

    /// All users after the mutation
    pub users: Vec<User>,
}

/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<ListUsersResponse>> {
    let users = state.users.list_users().await?;
    Ok(Json(ListUsersResponse { users }))
}

/// `GET /users/:userId`
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.get_user(user_id).await?;
    Ok(Json(UserResponse { user }))
}

/// `POST /add-user`
///
/// Returns 201 on success, 400 with a message when the email is already
/// registered or malformed.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserMutationResponse>)> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state
        .users
        .create_user(CreateUser {
            name: request.name,
            email: request.email,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User created");

    let users = state.users.list_users().await?;
    Ok((
        StatusCode::CREATED,
        Json(UserMutationResponse {
            message: "User added".to_string(),
            user,
            users,
        }),
    ))
}

/// `PATCH /edit-user/:userId`
///
/// Merge-on-update: only supplied fields overwrite.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserMutationResponse>> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state
        .users
        .update_user(
            user_id,
            UpdateUser {
                name: request.name,
                email: request.email,
            },
        )
        .await?;

    tracing::info!(user_id = %user_id, "User updated");

    let users = state.users.list_users().await?;
    Ok(Json(UserMutationResponse {
        message: "User updated".to_string(),
        user,
        users,
    }))
}

/// `DELETE /delete-user/:userId`
///
/// Failures are surfaced, never swallowed: a missing id is a 404.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserMutationResponse>> {
    let user = state.users.delete_user(user_id).await?;

    tracing::info!(user_id = %user_id, "User deleted");

    let users = state.users.list_users().await?;
    Ok(Json(UserMutationResponse {
        message: "User deleted".to_string(),
        user,
        users,
    }))
}

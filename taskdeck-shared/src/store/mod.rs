/// Storage traits for the two entities
///
/// The API layer receives these as `Arc<dyn UserStore>` / `Arc<dyn TaskStore>`
/// constructed at startup: no module-level singletons, and tests substitute
/// the in-memory implementation for the MongoDB one.
///
/// All operations are single-request round trips. The relational check in
/// task create/update is a read followed by a write with no transactional
/// wrapping; the referenced user can disappear between the two (accepted
/// residual race, see `DESIGN.md`).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskdeck_shared::models::user::CreateUser;
/// use taskdeck_shared::store::{memory::MemoryStore, UserStore};
///
/// # async fn example() -> Result<(), taskdeck_shared::error::DataError> {
/// let store: Arc<dyn UserStore> = Arc::new(MemoryStore::new());
///
/// let user = store
///     .create_user(CreateUser {
///         name: "John".to_string(),
///         email: "john@example.com".to_string(),
///     })
///     .await?;
///
/// assert_eq!(store.get_user(user.id).await?.email, "john@example.com");
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DataResult;
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::models::user::{CreateUser, UpdateUser, User};

pub mod memory;
pub mod mongo;

/// Data access for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches all users
    async fn list_users(&self) -> DataResult<Vec<User>>;

    /// Fetches a user by id
    ///
    /// # Errors
    ///
    /// `NotFound` when no user with that id exists.
    async fn get_user(&self, id: Uuid) -> DataResult<User>;

    /// Creates a user
    ///
    /// # Errors
    ///
    /// `Conflict` when the email is already registered, `BadInput` when it
    /// is malformed.
    async fn create_user(&self, data: CreateUser) -> DataResult<User>;

    /// Partially updates a user; only supplied fields overwrite
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is absent, `Conflict` when the new email is
    /// owned by a different user.
    async fn update_user(&self, id: Uuid, data: UpdateUser) -> DataResult<User>;

    /// Deletes a user and returns the deleted document for confirmation
    ///
    /// Deleting a user does not touch its tasks; their `user` references
    /// are left dangling.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is absent.
    async fn delete_user(&self, id: Uuid) -> DataResult<User>;
}

/// Data access for tasks
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetches all tasks
    async fn list_tasks(&self) -> DataResult<Vec<Task>>;

    /// Fetches a task by id
    async fn get_task(&self, id: Uuid) -> DataResult<Task>;

    /// Creates a task, status defaulting to TODO
    ///
    /// When `data.user` is supplied the referenced user must exist; the
    /// check happens before the write, so a failed create leaves no task
    /// behind.
    ///
    /// # Errors
    ///
    /// `BadInput` when the referenced user does not exist.
    async fn create_task(&self, data: CreateTask) -> DataResult<Task>;

    /// Partially updates a task; only supplied fields overwrite
    ///
    /// The same relational check as creation applies when `data.user` is
    /// supplied.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id is absent, `BadInput` when the referenced
    /// user does not exist.
    async fn update_task(&self, id: Uuid, data: UpdateTask) -> DataResult<Task>;

    /// Deletes a task and returns the deleted document for confirmation
    async fn delete_task(&self, id: Uuid) -> DataResult<Task>;

    /// Fetches all tasks assigned to a user
    ///
    /// A pure filter: an unknown or task-less user yields an empty vec,
    /// never an error.
    async fn tasks_by_user(&self, user: Uuid) -> DataResult<Vec<Task>>;

    /// Assigns a task to a user, leaving every other field unchanged
    async fn assign_task(&self, id: Uuid, user: Uuid) -> DataResult<Task> {
        self.update_task(
            id,
            UpdateTask {
                user: Some(user),
                ..Default::default()
            },
        )
        .await
    }
}

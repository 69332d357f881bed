/// MongoDB-backed store
///
/// One `MongoStore` serves both entities from typed collection handles.
/// The generic fetch-all / fetch-by-id / delete-by-id paths are shared by
/// both entities; create and update are entity-specific because of the
/// uniqueness and relational checks layered on top.
///
/// Merge-on-update reads the current document, merges the supplied fields
/// in process, and replaces the document returning the post-image.
///
/// # Example
///
/// ```no_run
/// use taskdeck_shared::db::{connect, DatabaseConfig};
/// use taskdeck_shared::store::mongo::MongoStore;
/// use taskdeck_shared::store::UserStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let db = connect(&DatabaseConfig::default()).await?;
/// let store = MongoStore::new(&db);
///
/// let users = store.list_users().await?;
/// println!("{} users", users.len());
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndReplaceOptions, ReturnDocument};
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::{TaskStore, UserStore};
use crate::error::{DataError, DataResult};
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::models::user::{validate_email, CreateUser, UpdateUser, User};

/// Store implementation over MongoDB collections
#[derive(Debug, Clone)]
pub struct MongoStore {
    users: Collection<User>,
    tasks: Collection<Task>,
}

impl MongoStore {
    /// Binds the store to the `users` and `tasks` collections of `db`
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection("users"),
            tasks: db.collection("tasks"),
        }
    }

    /// Relational check for task assignment: the referenced user must exist
    ///
    /// Read-then-write with no transaction; the race with a concurrent user
    /// deletion is accepted.
    async fn ensure_user_exists(&self, user: Uuid) -> DataResult<()> {
        let count = self
            .users
            .count_documents(doc! { "_id": user.to_string() }, None)
            .await?;

        if count == 0 {
            return Err(DataError::BadInput(format!(
                "User with id: {} does not exist",
                user
            )));
        }
        Ok(())
    }
}

/// Fetches every document in a collection
async fn find_all<T>(coll: &Collection<T>) -> DataResult<Vec<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let cursor = coll.find(doc! {}, None).await?;
    let items = cursor.try_collect().await?;
    Ok(items)
}

/// Fetches a document by id, classifying absence as NotFound
async fn find_by_id<T>(coll: &Collection<T>, kind: &str, id: Uuid) -> DataResult<T>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    coll.find_one(doc! { "_id": id.to_string() }, None)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("{} with id: {} does not exist", kind, id)))
}

/// Deletes a document by id, returning it for confirmation
async fn delete_by_id<T>(coll: &Collection<T>, kind: &str, id: Uuid) -> DataResult<T>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    coll.find_one_and_delete(doc! { "_id": id.to_string() }, None)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("{} with id: {} does not exist", kind, id)))
}

/// Replaces a document by id, returning the post-image
async fn replace_by_id<T>(coll: &Collection<T>, kind: &str, id: Uuid, doc: &T) -> DataResult<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    let options = FindOneAndReplaceOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    coll.find_one_and_replace(doc! { "_id": id.to_string() }, doc, options)
        .await?
        .ok_or_else(|| DataError::NotFound(format!("{} with id: {} does not exist", kind, id)))
}

#[async_trait]
impl UserStore for MongoStore {
    async fn list_users(&self) -> DataResult<Vec<User>> {
        find_all(&self.users).await
    }

    async fn get_user(&self, id: Uuid) -> DataResult<User> {
        find_by_id(&self.users, "User", id).await
    }

    async fn create_user(&self, data: CreateUser) -> DataResult<User> {
        validate_email(&data.email)?;

        let existing = self
            .users
            .find_one(doc! { "email": data.email.as_str() }, None)
            .await?;
        if existing.is_some() {
            return Err(DataError::Conflict(format!(
                "User with email: {} already exists",
                data.email
            )));
        }

        let user = User::new(data.name, data.email);
        self.users.insert_one(&user, None).await?;

        debug!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUser) -> DataResult<User> {
        let mut user = find_by_id(&self.users, "User", id).await?;

        if let Some(email) = &data.email {
            validate_email(email)?;

            // Existence count excluding the target id: the user keeping its
            // own email is not a conflict.
            let clashes = self
                .users
                .count_documents(
                    doc! { "_id": { "$ne": id.to_string() }, "email": email.as_str() },
                    None,
                )
                .await?;
            if clashes > 0 {
                return Err(DataError::Conflict(format!(
                    "User with email: {} already exists",
                    email
                )));
            }
        }

        user.apply_update(data);
        let updated = replace_by_id(&self.users, "User", id, &user).await?;

        debug!(user_id = %id, "Updated user");
        Ok(updated)
    }

    async fn delete_user(&self, id: Uuid) -> DataResult<User> {
        let deleted = delete_by_id(&self.users, "User", id).await?;
        debug!(user_id = %id, "Deleted user");
        Ok(deleted)
    }
}

#[async_trait]
impl TaskStore for MongoStore {
    async fn list_tasks(&self) -> DataResult<Vec<Task>> {
        find_all(&self.tasks).await
    }

    async fn get_task(&self, id: Uuid) -> DataResult<Task> {
        find_by_id(&self.tasks, "Task", id).await
    }

    async fn create_task(&self, data: CreateTask) -> DataResult<Task> {
        // Check-then-act: reject before anything is written so a failed
        // create leaves no task behind.
        if let Some(user) = data.user {
            self.ensure_user_exists(user).await?;
        }

        let task = Task::new(data);
        self.tasks.insert_one(&task, None).await?;

        debug!(task_id = %task.id, status = task.status.as_str(), "Created task");
        Ok(task)
    }

    async fn update_task(&self, id: Uuid, data: UpdateTask) -> DataResult<Task> {
        if let Some(user) = data.user {
            self.ensure_user_exists(user).await?;
        }

        let mut task = find_by_id(&self.tasks, "Task", id).await?;
        task.apply_update(data);
        let updated = replace_by_id(&self.tasks, "Task", id, &task).await?;

        debug!(task_id = %id, "Updated task");
        Ok(updated)
    }

    async fn delete_task(&self, id: Uuid) -> DataResult<Task> {
        let deleted = delete_by_id(&self.tasks, "Task", id).await?;
        debug!(task_id = %id, "Deleted task");
        Ok(deleted)
    }

    async fn tasks_by_user(&self, user: Uuid) -> DataResult<Vec<Task>> {
        let cursor = self
            .tasks
            .find(doc! { "user": user.to_string() }, None)
            .await?;
        let tasks = cursor.try_collect().await?;
        Ok(tasks)
    }
}

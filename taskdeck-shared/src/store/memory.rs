/// In-memory store
///
/// Implements the same contract as the MongoDB store over two maps behind
/// async locks. Used by the API integration tests and wherever a database
/// is not available; the error classifications and messages match the
/// MongoDB implementation so callers cannot tell them apart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{TaskStore, UserStore};
use crate::error::{DataError, DataResult};
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::models::user::{validate_email, CreateUser, UpdateUser, User};

/// Store implementation over in-process maps
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_users(&self) -> DataResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(all)
    }

    async fn get_user(&self, id: Uuid) -> DataResult<User> {
        let users = self.users.read().await;
        users
            .get(&id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("User with id: {} does not exist", id)))
    }

    async fn create_user(&self, data: CreateUser) -> DataResult<User> {
        validate_email(&data.email)?;

        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == data.email) {
            return Err(DataError::Conflict(format!(
                "User with email: {} already exists",
                data.email
            )));
        }

        let user = User::new(data.name, data.email);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUser) -> DataResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&id) {
            return Err(DataError::NotFound(format!(
                "User with id: {} does not exist",
                id
            )));
        }

        if let Some(email) = &data.email {
            validate_email(email)?;
            if users.values().any(|u| u.id != id && &u.email == email) {
                return Err(DataError::Conflict(format!(
                    "User with email: {} already exists",
                    email
                )));
            }
        }

        let user = users
            .get_mut(&id)
            .ok_or_else(|| DataError::NotFound(format!("User with id: {} does not exist", id)))?;
        user.apply_update(data);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> DataResult<User> {
        let mut users = self.users.write().await;
        users
            .remove(&id)
            .ok_or_else(|| DataError::NotFound(format!("User with id: {} does not exist", id)))
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self) -> DataResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        let mut all: Vec<Task> = tasks.values().cloned().collect();
        all.sort_by_key(|t| t.created_at);
        Ok(all)
    }

    async fn get_task(&self, id: Uuid) -> DataResult<Task> {
        let tasks = self.tasks.read().await;
        tasks
            .get(&id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(format!("Task with id: {} does not exist", id)))
    }

    async fn create_task(&self, data: CreateTask) -> DataResult<Task> {
        if let Some(user) = data.user {
            self.ensure_user_exists(user).await?;
        }

        let task = Task::new(data);
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: Uuid, data: UpdateTask) -> DataResult<Task> {
        if let Some(user) = data.user {
            self.ensure_user_exists(user).await?;
        }

        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| DataError::NotFound(format!("Task with id: {} does not exist", id)))?;

        task.apply_update(data);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: Uuid) -> DataResult<Task> {
        let mut tasks = self.tasks.write().await;
        tasks
            .remove(&id)
            .ok_or_else(|| DataError::NotFound(format!("Task with id: {} does not exist", id)))
    }

    async fn tasks_by_user(&self, user: Uuid) -> DataResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        let mut assigned: Vec<Task> = tasks
            .values()
            .filter(|t| t.user == Some(user))
            .cloned()
            .collect();
        assigned.sort_by_key(|t| t.created_at);
        Ok(assigned)
    }
}

impl MemoryStore {
    /// Relational check mirroring the MongoDB implementation
    async fn ensure_user_exists(&self, user: Uuid) -> DataResult<()> {
        let users = self.users.read().await;
        if !users.contains_key(&user) {
            return Err(DataError::BadInput(format!(
                "User with id: {} does not exist",
                user
            )));
        }
        Ok(())
    }
}

/// GraphQL queries
///
/// Read-only pass-throughs to the stores. `getUserTasks` is a pure filter
/// and returns an empty list for a user with no tasks.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use taskdeck_shared::store::{TaskStore, UserStore};
use uuid::Uuid;

use super::gql_error;
use super::types::{Task, User};

/// Root query object
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetches all users
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let store = ctx.data_unchecked::<Arc<dyn UserStore>>();
        let users = store.list_users().await.map_err(gql_error)?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    /// Fetches a user by id
    async fn get_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<User> {
        let store = ctx.data_unchecked::<Arc<dyn UserStore>>();
        let user = store.get_user(id).await.map_err(gql_error)?;
        Ok(user.into())
    }

    /// Fetches all tasks
    async fn get_tasks(&self, ctx: &Context<'_>) -> Result<Vec<Task>> {
        let store = ctx.data_unchecked::<Arc<dyn TaskStore>>();
        let tasks = store.list_tasks().await.map_err(gql_error)?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }

    /// Fetches a task by id
    async fn get_task(&self, ctx: &Context<'_>, id: Uuid) -> Result<Task> {
        let store = ctx.data_unchecked::<Arc<dyn TaskStore>>();
        let task = store.get_task(id).await.map_err(gql_error)?;
        Ok(task.into())
    }

    /// Fetches all tasks assigned to a user
    async fn get_user_tasks(&self, ctx: &Context<'_>, user: Uuid) -> Result<Vec<Task>> {
        let store = ctx.data_unchecked::<Arc<dyn TaskStore>>();
        let tasks = store.tasks_by_user(user).await.map_err(gql_error)?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }
}

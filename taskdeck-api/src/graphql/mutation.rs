/// GraphQL mutations
///
/// Pass-throughs to the stores with the store's error classification
/// threaded into the GraphQL error extensions. Update mutations are
/// merge-on-update: omitted arguments keep their current value.

use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use taskdeck_shared::models::task::{CreateTask, UpdateTask};
use taskdeck_shared::models::user::{CreateUser, UpdateUser};
use taskdeck_shared::store::{TaskStore, UserStore};
use uuid::Uuid;

use super::gql_error;
use super::types::{Task, TaskProgress, User};

/// Root mutation object
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a user; fails with BAD_USER_INPUT when the email is taken
    async fn create_user(&self, ctx: &Context<'_>, name: String, email: String) -> Result<User> {
        let store = ctx.data_unchecked::<Arc<dyn UserStore>>();
        let user = store
            .create_user(CreateUser { name, email })
            .await
            .map_err(gql_error)?;
        Ok(user.into())
    }

    /// Partially updates a user; omitted arguments keep their value
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User> {
        let store = ctx.data_unchecked::<Arc<dyn UserStore>>();
        let user = store
            .update_user(id, UpdateUser { name, email })
            .await
            .map_err(gql_error)?;
        Ok(user.into())
    }

    /// Deletes a user, returning the deleted document
    ///
    /// Assigned tasks are left untouched; their references dangle.
    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<User> {
        let store = ctx.data_unchecked::<Arc<dyn UserStore>>();
        let user = store.delete_user(id).await.map_err(gql_error)?;
        Ok(user.into())
    }

    /// Creates a task with default status TODO
    async fn create_task(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: Option<String>,
        status: Option<TaskProgress>,
    ) -> Result<Task> {
        let store = ctx.data_unchecked::<Arc<dyn TaskStore>>();
        let task = store
            .create_task(CreateTask {
                name,
                description,
                status: status.map(Into::into),
                user: None,
            })
            .await
            .map_err(gql_error)?;
        Ok(task.into())
    }

    /// Partially updates a task; a supplied `user` must exist
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        name: Option<String>,
        description: Option<String>,
        status: Option<TaskProgress>,
        user: Option<Uuid>,
    ) -> Result<Task> {
        let store = ctx.data_unchecked::<Arc<dyn TaskStore>>();
        let task = store
            .update_task(
                id,
                UpdateTask {
                    name,
                    description,
                    status: status.map(Into::into),
                    user,
                },
            )
            .await
            .map_err(gql_error)?;
        Ok(task.into())
    }

    /// Deletes a task, returning the deleted document
    async fn delete_task(&self, ctx: &Context<'_>, id: Uuid) -> Result<Task> {
        let store = ctx.data_unchecked::<Arc<dyn TaskStore>>();
        let task = store.delete_task(id).await.map_err(gql_error)?;
        Ok(task.into())
    }

    /// Assigns a task to a user, leaving every other field unchanged
    async fn assign_task(&self, ctx: &Context<'_>, id: Uuid, user: Uuid) -> Result<Task> {
        let store = ctx.data_unchecked::<Arc<dyn TaskStore>>();
        let task = store.assign_task(id, user).await.map_err(gql_error)?;
        Ok(task.into())
    }
}

/// GraphQL output types
///
/// Thin views over the shared models. Timestamps are rendered as RFC 3339
/// strings and the status enum is mirrored from the shared crate so the
/// wire names (`TODO`, `IN_PROGRESS`, `DONE`) stay in one place.

use async_graphql::{Enum, SimpleObject};
use taskdeck_shared::models;
use uuid::Uuid;

/// Task progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(remote = "models::task::TaskProgress")]
pub enum TaskProgress {
    /// Not started yet
    Todo,

    /// Currently being worked on
    InProgress,

    /// Finished
    Done,
}

/// A registered user
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    /// Unique user id
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl From<models::user::User> for User {
    fn from(user: models::user::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// A tracked task
#[derive(Debug, Clone, SimpleObject)]
pub struct Task {
    /// Unique task id
    pub id: Uuid,

    /// Task name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Progress state
    pub status: TaskProgress,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,

    /// Last-write timestamp (RFC 3339)
    pub updated_at: String,

    /// Assigned user's id, if any
    pub user: Option<Uuid>,
}

impl From<models::task::Task> for Task {
    fn from(task: models::task::Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            description: task.description,
            status: task.status.into(),
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
            user: task.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_shared::models::task::CreateTask;

    #[test]
    fn test_status_round_trips_through_the_mirror_enum() {
        let gql: TaskProgress = models::task::TaskProgress::InProgress.into();
        assert_eq!(gql, TaskProgress::InProgress);

        let shared: models::task::TaskProgress = TaskProgress::Done.into();
        assert_eq!(shared, models::task::TaskProgress::Done);
    }

    #[test]
    fn test_task_conversion_preserves_fields() {
        let task = models::task::Task::new(CreateTask {
            name: "Clean roomba".to_string(),
            description: Some("do things".to_string()),
            ..Default::default()
        });
        let id = task.id;

        let view: Task = task.into();
        assert_eq!(view.id, id);
        assert_eq!(view.status, TaskProgress::Todo);
        assert!(view.user.is_none());
        assert!(!view.created_at.is_empty());
    }
}

/// Task model
///
/// Tasks are the unit of work tracked by the system. A task may optionally
/// be assigned to a user via a weak reference: the user must exist at
/// assignment time, but deleting the user later leaves the reference
/// dangling (documented gap, no cascade).
///
/// # Document shape
///
/// ```json
/// {
///   "_id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Clean roomba",
///   "description": "do things",
///   "status": "TODO",
///   "user": null,
///   "createdAt": "2025-01-04T12:00:00Z",
///   "updatedAt": "2025-01-04T12:00:00Z"
/// }
/// ```
///
/// Status transitions are unconstrained: any value in the set may follow
/// any other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task progress state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskProgress {
    /// Not started yet (default for new tasks)
    #[default]
    Todo,

    /// Currently being worked on
    InProgress,

    /// Finished
    Done,
}

impl TaskProgress {
    /// Wire representation, shared by storage and both APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskProgress::Todo => "TODO",
            TaskProgress::InProgress => "IN_PROGRESS",
            TaskProgress::Done => "DONE",
        }
    }
}

/// Task model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task ID (UUID v4), stored as the document `_id`
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Human-readable task name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Progress state, defaults to TODO
    pub status: TaskProgress,

    /// Weak reference to the assigned user's id, if any
    pub user: Option<Uuid>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last written
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Builds a new task with a generated id and fresh timestamps
    ///
    /// The relational check on `data.user` is the store's responsibility
    /// and must happen before this document is persisted.
    pub fn new(data: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            status: data.status.unwrap_or_default(),
            user: data.user,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update: only supplied fields overwrite
    ///
    /// Bumps `updated_at`. Unassigning a task is not expressible here:
    /// a `None` field means "leave unchanged".
    pub fn apply_update(&mut self, data: UpdateTask) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(description) = data.description {
            self.description = Some(description);
        }
        if let Some(status) = data.status {
            self.status = status;
        }
        if let Some(user) = data.user {
            self.user = Some(user);
        }
        self.updated_at = Utc::now();
    }
}

/// Input for creating a new task
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status (TODO when unspecified)
    pub status: Option<TaskProgress>,

    /// Optional assignee; the referenced user must exist
    pub user: Option<Uuid>,
}

/// Input for updating a task
///
/// All fields are optional. Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New task name
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskProgress>,

    /// New assignee; the referenced user must exist
    pub user: Option<Uuid>,
}

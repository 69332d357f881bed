/// User model
///
/// Users are the assignable principals of the system. A user owns nothing:
/// tasks hold a weak reference to a user id and survive the user's deletion.
///
/// # Document shape
///
/// ```json
/// {
///   "_id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "John",
///   "email": "john@example.com"
/// }
/// ```
///
/// Email must be unique across all users and match [`EMAIL_PATTERN`]:
/// word/hyphen/dot characters before the `@`, word/hyphen-separated labels
/// after it, final label 2-4 characters.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DataError, DataResult};

/// Accepted email shape: `local-part@domain.tld`
pub static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-.]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid email regex"));

/// Checks an email address against [`EMAIL_PATTERN`]
///
/// # Errors
///
/// Returns `DataError::BadInput` when the address does not match.
pub fn validate_email(email: &str) -> DataResult<()> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(DataError::BadInput(format!(
            "Invalid email address: {}",
            email
        )))
    }
}

/// User model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID v4), stored as the document `_id`
    #[serde(rename = "_id")]
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,
}

impl User {
    /// Builds a new user with a generated id
    ///
    /// Uniqueness and email-shape checks are the store's responsibility;
    /// this only assembles the document.
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
        }
    }

    /// Applies a partial update: only supplied fields overwrite
    pub fn apply_update(&mut self, data: UpdateUser) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
    }
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: String,

    /// Email address (must be unique and well-formed)
    pub email: String,
}

/// Input for updating an existing user
///
/// All fields are optional. Only non-None fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,

    /// New email address
    pub email: Option<String>,
}

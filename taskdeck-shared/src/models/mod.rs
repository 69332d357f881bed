/// Persisted entity models
///
/// This module contains the two document models and their create/update
/// input types:
///
/// - `user`: assignable principals with a unique email
/// - `task`: units of work, optionally assigned to a user
///
/// Models double as the storage representation and the REST wire
/// representation; the GraphQL layer has its own thin output types.

pub mod task;
pub mod user;

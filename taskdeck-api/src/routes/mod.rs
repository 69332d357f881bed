/// API route handlers
///
/// This module contains all REST route handlers organized by resource:
///
/// - `health`: health check endpoint
/// - `users`: user CRUD endpoints
/// - `tasks`: task CRUD endpoints

pub mod health;
pub mod tasks;
pub mod users;

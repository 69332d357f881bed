//! # TaskDeck API Server Library
//!
//! This library provides the core functionality for the TaskDeck API
//! server: user and task CRUD exposed over REST and GraphQL, backed by a
//! document database.
//!
//! ## Modules
//!
//! - `app`: application state and router builder
//! - `config`: configuration management
//! - `error`: error handling and HTTP response mapping
//! - `routes`: REST route handlers
//! - `graphql`: GraphQL schema, queries, and mutations

pub mod app;
pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;

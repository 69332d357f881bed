//! # TaskDeck Shared Library
//!
//! This crate contains the types and storage logic shared by the TaskDeck
//! API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: User and Task documents plus create/update inputs
//! - `error`: the closed `DataError` taxonomy crossing the storage boundary
//! - `store`: `UserStore`/`TaskStore` traits with MongoDB and in-memory
//!   implementations
//! - `db`: MongoDB connection establishment and health check

pub mod db;
pub mod error;
pub mod models;
pub mod store;

/// Current version of the TaskDeck shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! # TaskDeck API Server
//!
//! Task-management backend exposing User and Task CRUD over REST and
//! GraphQL, backed by MongoDB.
//!
//! ## Usage
//!
//! ```bash
//! MONGODB_URL=mongodb://localhost:27017 cargo run -p taskdeck-api
//! ```

use std::sync::Arc;

use taskdeck_api::app::{build_router, AppState};
use taskdeck_api::config::Config;
use taskdeck_shared::db;
use taskdeck_shared::store::mongo::MongoStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdeck_api=debug,taskdeck_shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TaskDeck API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration and connect to storage
    let config = Config::from_env()?;
    let database = db::connect(&config.database_config()).await?;
    let store = Arc::new(MongoStore::new(&database));

    // Wire the stores into the application state; the same handles back
    // both the REST routes and the GraphQL schema.
    let state = AppState::new(store.clone(), store, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received, exiting...");
        })
        .await?;

    Ok(())
}

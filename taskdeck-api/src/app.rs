/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use taskdeck_api::{app::AppState, config::Config};
/// use taskdeck_shared::store::mongo::MongoStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let db = taskdeck_shared::db::connect(&config.database_config()).await?;
/// let store = Arc::new(MongoStore::new(&db));
/// let state = AppState::new(store.clone(), store, config);
/// let app = taskdeck_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use crate::graphql::{self, TaskDeckSchema};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use taskdeck_shared::store::{TaskStore, UserStore};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The store
/// handles are trait objects constructed at startup (MongoDB in production,
/// in-memory in tests), so nothing here is a module-level singleton.
#[derive(Clone)]
pub struct AppState {
    /// User data access
    pub users: Arc<dyn UserStore>,

    /// Task data access
    pub tasks: Arc<dyn TaskStore>,

    /// Application configuration
    pub config: Arc<Config>,

    /// GraphQL schema, built over the same store handles
    pub schema: TaskDeckSchema,
}

impl AppState {
    /// Creates new application state
    pub fn new(users: Arc<dyn UserStore>, tasks: Arc<dyn TaskStore>, config: Config) -> Self {
        let schema = graphql::build_schema(users.clone(), tasks.clone());
        Self {
            users,
            tasks,
            config: Arc::new(config),
            schema,
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                    # Health check
/// ├── /graphql                   # GraphQL endpoint (GET: GraphiQL, POST: queries)
/// ├── /tasks                     # GET    list tasks
/// ├── /tasks/:taskId             # GET    get task
/// ├── /add-task                  # POST   create task
/// ├── /edit-task/:taskId         # PATCH  update task
/// ├── /delete-task/:taskId       # DELETE delete task
/// ├── /users                     # GET    list users
/// ├── /users/:userId             # GET    get user
/// ├── /add-user                  # POST   create user
/// ├── /edit-user/:userId         # PATCH  update user
/// └── /delete-user/:userId       # DELETE delete user
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let task_routes = Router::new()
        .route("/tasks", get(routes::tasks::list_tasks))
        .route("/tasks/:task_id", get(routes::tasks::get_task))
        .route("/add-task", post(routes::tasks::create_task))
        .route("/edit-task/:task_id", patch(routes::tasks::update_task))
        .route("/delete-task/:task_id", delete(routes::tasks::delete_task));

    let user_routes = Router::new()
        .route("/users", get(routes::users::list_users))
        .route("/users/:user_id", get(routes::users::get_user))
        .route("/add-user", post(routes::users::create_user))
        .route("/edit-user/:user_id", patch(routes::users::update_user))
        .route("/delete-user/:user_id", delete(routes::users::delete_user));

    let graphql_routes = Router::new().route(
        "/graphql",
        get(graphql::graphiql).post(graphql::graphql_handler),
    );

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .merge(task_routes)
        .merge(user_routes)
        .merge(graphql_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

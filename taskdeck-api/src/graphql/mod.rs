/// GraphQL endpoint
///
/// Exposes the same operations as the REST routes through a single
/// `/graphql` endpoint (POST executes queries, GET serves GraphiQL).
/// The schema holds the store handles injected at startup, so REST and
/// GraphQL share one data-access layer.
///
/// Errors carry a `code` extension: `BAD_USER_INPUT` for domain failures
/// (not found, conflict, invalid reference) and `INTERNAL_SERVER_ERROR`
/// for everything else.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Error, ErrorExtensions, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use taskdeck_shared::error::DataError;
use taskdeck_shared::store::{TaskStore, UserStore};

use crate::app::AppState;

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// Executable schema over the store trait objects
pub type TaskDeckSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with the store handles as context data
pub fn build_schema(users: Arc<dyn UserStore>, tasks: Arc<dyn TaskStore>) -> TaskDeckSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(users)
        .data(tasks)
        .finish()
}

/// `POST /graphql`
pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

/// `GET /graphql`: interactive GraphiQL playground
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Maps a store error to a GraphQL error with a classification extension
///
/// The store's classification is threaded through as-is; domain failures
/// all surface as `BAD_USER_INPUT`, matching the REST layer's 4xx split.
pub(crate) fn gql_error(err: DataError) -> Error {
    let code = if err.is_domain() {
        "BAD_USER_INPUT"
    } else {
        tracing::error!("Internal error: {}", err);
        "INTERNAL_SERVER_ERROR"
    };

    Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}

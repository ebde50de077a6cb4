//! graph-registry-server: HTTP front end for graph-registry-core.
//!
//! Thin layer: decodes JSON requests, calls the registry, and maps
//! `GraphError` variants to status codes. No graph logic lives here.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod handlers;
mod state;
mod types;

pub use config::{Config, EdgePolicyArg, DEFAULT_MAX_BODY_BYTES};
pub use error::ApiError;
pub use handlers::{create_graph, delete_graph, health_check, shortest_path, status};
pub use state::AppState;
pub use types::{
    CreateGraphRequest, CreateGraphResponse, DeleteGraphRequest, ErrorResponse, GraphId,
    HealthResponse, ShortestPathRequest, ShortestPathResponse, StatusResponse,
};

/// Build the application router with every route and layer.
pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/graph/create", post(create_graph))
        .route("/graph/delete", post(delete_graph))
        .route("/graph/shortest-path", post(shortest_path))
        .route("/status", get(status))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

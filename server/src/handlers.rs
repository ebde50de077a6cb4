//! HTTP handlers. Each one translates a request into a registry call.
//!
//! Graph building, BFS and dropping removed graphs run on the blocking pool.
//! The registry lock is never held across an `.await`. Body decoding failures
//! go through `ApiError` so every error shares the same JSON envelope.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use graph_registry_core::shortest_path as find_shortest_path;

use crate::error::ApiError;
use crate::types::{
    CreateGraphRequest, CreateGraphResponse, DeleteGraphRequest, HealthResponse,
    ShortestPathRequest, ShortestPathResponse, StatusResponse,
};
use crate::AppState;

pub async fn create_graph(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGraphRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateGraphResponse>), ApiError> {
    let Json(req) = payload?;
    let edge_count = req.edges.len();
    let registry_state = Arc::clone(&state);

    let id = tokio::task::spawn_blocking(move || registry_state.registry.create(&req.edges))
        .await
        .map_err(|e| ApiError::internal("Create graph", &e))??;

    tracing::info!(graph = %id, edges = edge_count, "graph created");
    Ok((StatusCode::CREATED, Json(CreateGraphResponse { id })))
}

pub async fn delete_graph(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DeleteGraphRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(req) = payload?;
    let key = req.id.into_key();
    let graph = state.registry.remove(&key)?;

    // The registry's handle may be the last one; free large adjacency maps off
    // the async workers.
    tokio::task::spawn_blocking(move || drop(graph))
        .await
        .map_err(|e| ApiError::internal("Delete graph", &e))?;

    tracing::info!(graph = %key, "graph deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn shortest_path(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShortestPathRequest>, JsonRejection>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let Json(req) = payload?;
    let key = req.id.into_key();
    let graph = state.registry.get(&key)?;
    let (start, end) = (req.start, req.end);

    let path = tokio::task::spawn_blocking(move || find_shortest_path(&graph, start, end))
        .await
        .map_err(|e| ApiError::internal("Shortest path", &e))??;

    tracing::debug!(graph = %key, start, end, hops = path.len() - 1, "shortest path served");
    Ok(Json(ShortestPathResponse { path }))
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse::new(
        state.registry.stats(),
        state.registry.policy(),
    ))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

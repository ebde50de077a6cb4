//! Mapping from registry failures to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use graph_registry_core::GraphError;
use thiserror::Error;

use crate::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Body could not be decoded into the expected request shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Message is safe to return; details were logged when it was built.
    #[error("{0}: internal error")]
    Internal(String),
}

impl ApiError {
    /// Log the full error server-side and return a generic message to the client.
    pub fn internal(context: &str, err: &dyn std::fmt::Display) -> Self {
        tracing::error!(%context, error = %err, "Internal server error");
        ApiError::Internal(context.to_string())
    }

    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Graph(err) => match err {
                GraphError::NotFound(_) => (StatusCode::NOT_FOUND, "ERR_GRAPH_NOT_FOUND"),
                GraphError::VertexNotFound(_) => {
                    (StatusCode::BAD_REQUEST, "ERR_VERTEX_NOT_FOUND")
                }
                GraphError::NoPathFound { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "ERR_NO_PATH_FOUND")
                }
                GraphError::MalformedEdge { .. } => {
                    (StatusCode::BAD_REQUEST, "ERR_MALFORMED_EDGE")
                }
                GraphError::KeySpaceExhausted => {
                    (StatusCode::SERVICE_UNAVAILABLE, "ERR_KEY_SPACE_EXHAUSTED")
                }
            },
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "ERR_INVALID_REQUEST"),
            ApiError::PayloadTooLarge(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "ERR_PAYLOAD_TOO_LARGE")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "ERR_INTERNAL"),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::InvalidRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_client_error() {
            tracing::warn!(%status, code, error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_errors_have_distinct_statuses() {
        let not_found = ApiError::from(GraphError::NotFound("1".into())).status_and_code();
        let vertex = ApiError::from(GraphError::VertexNotFound(4)).status_and_code();
        let no_path =
            ApiError::from(GraphError::NoPathFound { start: 1, end: 4 }).status_and_code();

        assert_eq!(not_found.0, StatusCode::NOT_FOUND);
        assert_eq!(vertex.0, StatusCode::BAD_REQUEST);
        assert_eq!(no_path.0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_malformed_edge_code_differs_from_vertex() {
        let malformed =
            ApiError::from(GraphError::MalformedEdge { index: 0, len: 1 }).status_and_code();
        let vertex = ApiError::from(GraphError::VertexNotFound(4)).status_and_code();
        assert_eq!(malformed.0, vertex.0);
        assert_ne!(malformed.1, vertex.1);
    }

    #[test]
    fn test_invalid_request_is_not_confused_with_no_path() {
        let invalid = ApiError::InvalidRequest("missing field `end`".into()).status_and_code();
        let no_path =
            ApiError::from(GraphError::NoPathFound { start: 1, end: 4 }).status_and_code();
        assert_eq!(invalid, (StatusCode::BAD_REQUEST, "ERR_INVALID_REQUEST"));
        assert_ne!(invalid.0, no_path.0);
    }

    #[test]
    fn test_internal_error_does_not_leak_details() {
        let detail = "JoinError: task panicked with sensitive data";
        let err = ApiError::internal("Shortest path", &detail);
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
        let message = err.to_string();
        assert!(message.contains("internal error"));
        assert!(!message.contains("panicked"));
        assert!(!message.contains("sensitive"));
    }
}

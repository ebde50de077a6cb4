//! Request and response bodies for the HTTP API.

use graph_registry_core::{EdgePolicy, GraphKey, RegistryStats, VertexId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateGraphRequest {
    /// Vertex pairs. Entries that are not pairs follow the configured edge policy.
    pub edges: Vec<Vec<VertexId>>,
}

#[derive(Debug, Serialize)]
pub struct CreateGraphResponse {
    pub id: GraphKey,
}

/// Graph key as sent by clients: either the decimal number or its string form.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum GraphId {
    Number(u64),
    Text(String),
}

impl GraphId {
    pub fn into_key(self) -> GraphKey {
        match self {
            GraphId::Number(n) => n.to_string(),
            GraphId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteGraphRequest {
    pub id: GraphId,
}

#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub id: GraphId,
    pub start: VertexId,
    pub end: VertexId,
}

#[derive(Debug, Serialize)]
pub struct ShortestPathResponse {
    pub path: Vec<VertexId>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub graph_count: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    pub next_key: u64,
    pub edge_policy: &'static str,
}

impl StatusResponse {
    pub fn new(stats: RegistryStats, policy: EdgePolicy) -> Self {
        Self {
            graph_count: stats.graph_count,
            vertex_count: stats.vertex_count,
            edge_count: stats.edge_count,
            memory_bytes: stats.memory_bytes,
            next_key: stats.next_key,
            edge_policy: match policy {
                EdgePolicy::Lenient => "lenient",
                EdgePolicy::Strict => "strict",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_id_accepts_number_and_string() {
        let numeric: DeleteGraphRequest = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(numeric.id.into_key(), "3");

        let text: DeleteGraphRequest = serde_json::from_str(r#"{"id": "3"}"#).unwrap();
        assert_eq!(text.id.into_key(), "3");
    }

    #[test]
    fn test_graph_id_accepts_keys_above_i64_range() {
        let req: DeleteGraphRequest =
            serde_json::from_str(r#"{"id": 18446744073709551614}"#).unwrap();
        assert_eq!(req.id.into_key(), (u64::MAX - 1).to_string());
    }

    #[test]
    fn test_create_request_keeps_ragged_entries() {
        let req: CreateGraphRequest =
            serde_json::from_str(r#"{"edges": [[1, 2], [3], [4, 5, 6]]}"#).unwrap();
        assert_eq!(req.edges, vec![vec![1, 2], vec![3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_create_request_rejects_non_integer_vertices() {
        let result = serde_json::from_str::<CreateGraphRequest>(r#"{"edges": [[1, "a"]]}"#);
        assert!(result.is_err());
    }
}

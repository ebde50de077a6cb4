//! graph-registry-core: In-memory undirected graphs with BFS shortest path.
//!
//! A pure Rust library that stores immutable adjacency-list graphs in a
//! lock-guarded registry keyed by generated string handles, and answers
//! unweighted shortest path queries between two vertices of a stored graph.
//! No transport dependencies. The HTTP service lives in graph-registry-server.

mod error;
mod graph;
mod registry;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{Graph, GraphBuilder, VertexId};
pub use registry::{EdgePolicy, GraphKey, Registry, RegistryStats};
pub use traversal::{bfs_distances, shortest_path};

use std::collections::{HashMap, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// Shortest path from `start` to `end` by edge count, using BFS.
///
/// Returns the vertex sequence from `start` to `end` inclusive. When
/// `start == end` the result is `[start]`.
///
/// Vertices are marked visited when first enqueued, so each one is expanded
/// at most once and the work is O(V + E) over the component of `start`.
/// Stores parent pointers instead of cloning a path per frontier entry; the
/// path is reconstructed once `end` is discovered.
///
/// When several shortest paths exist, the one returned depends on neighbor
/// insertion order. That choice is implementation-defined.
///
/// # Errors
///
/// - [`GraphError::VertexNotFound`] if either endpoint is absent. No
///   traversal is performed in that case.
/// - [`GraphError::NoPathFound`] if `end` is unreachable from `start`.
pub fn shortest_path(graph: &Graph, start: VertexId, end: VertexId) -> Result<Vec<VertexId>> {
    for vertex in [start, end] {
        if !graph.contains_vertex(vertex) {
            return Err(GraphError::VertexNotFound(vertex));
        }
    }

    if start == end {
        return Ok(vec![start]);
    }

    // Sentinel: start node's parent is itself
    let mut parents: HashMap<VertexId, VertexId> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    parents.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if parents.contains_key(&neighbor) {
                continue;
            }
            parents.insert(neighbor, current);

            if neighbor == end {
                let path = reconstruct_path(&parents, start, end);
                tracing::trace!(
                    start,
                    end,
                    hops = path.len() - 1,
                    visited = parents.len(),
                    "shortest path found"
                );
                return Ok(path);
            }

            queue.push_back(neighbor);
        }
    }

    tracing::trace!(start, end, visited = parents.len(), "frontier exhausted");
    Err(GraphError::NoPathFound { start, end })
}

/// Walk parent pointers from `end` back to `start`.
fn reconstruct_path(
    parents: &HashMap<VertexId, VertexId>,
    start: VertexId,
    end: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        current = parents[&current];
        path.push(current);
    }

    path.reverse();
    path
}

/// Hop distance from `start` to every vertex reachable from it.
///
/// `start` maps to 0. Returns an empty map if `start` is not in the graph.
pub fn bfs_distances(graph: &Graph, start: VertexId) -> HashMap<VertexId, u32> {
    let mut distances: HashMap<VertexId, u32> = HashMap::new();
    if !graph.contains_vertex(start) {
        return distances;
    }

    let mut queue: VecDeque<(VertexId, u32)> = VecDeque::new();
    distances.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    distances
}

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphBuilder, VertexId};
use crate::traversal;

/// Opaque handle to a stored graph: the decimal form of the key counter.
pub type GraphKey = String;

/// How `Registry::create` treats edge entries that are not exactly two vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Skip malformed entries and build the graph from the rest.
    #[default]
    Lenient,
    /// Reject the whole creation on the first malformed entry.
    Strict,
}

/// Aggregate counts across every stored graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub graph_count: usize,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub memory_bytes: usize,
    /// Key that the next successful creation will receive.
    pub next_key: u64,
}

struct Entry {
    graph: Arc<Graph>,
    memory_bytes: usize,
}

/// Running totals are maintained on insert and remove so that `stats` only
/// reads fields under the lock.
struct Inner {
    graphs: HashMap<GraphKey, Entry>,
    next_id: u64,
    vertex_count: usize,
    edge_count: usize,
    memory_bytes: usize,
}

/// Concurrency-safe map from generated keys to immutable graphs.
///
/// Every operation takes one exclusive lock for an O(1) map access and
/// releases it before returning. Graphs are handed out as `Arc<Graph>`, so a
/// traversal keeps working on its copy even if the key is deleted meanwhile.
///
/// Keys are minted from a `u64` counter starting at 1. The counter never
/// decreases and a key is never reissued, including after deletion.
pub struct Registry {
    inner: Mutex<Inner>,
    policy: EdgePolicy,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_policy(EdgePolicy::default())
    }

    pub fn with_policy(policy: EdgePolicy) -> Self {
        Self {
            inner: Mutex::new(Inner {
                graphs: HashMap::new(),
                next_id: 1,
                vertex_count: 0,
                edge_count: 0,
                memory_bytes: 0,
            }),
            policy,
        }
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Build a graph from edge pairs and store it under a fresh key.
    ///
    /// Pairs are applied in input order. Entries whose length is not 2 are
    /// skipped under [`EdgePolicy::Lenient`] and rejected under
    /// [`EdgePolicy::Strict`]. The graph is built before the lock is taken.
    ///
    /// # Errors
    ///
    /// - [`GraphError::MalformedEdge`] under the strict policy.
    /// - [`GraphError::KeySpaceExhausted`] if the key counter is at its limit.
    pub fn create<E>(&self, edges: &[E]) -> Result<GraphKey>
    where
        E: AsRef<[VertexId]>,
    {
        let mut builder = GraphBuilder::new();
        let mut skipped = 0usize;

        for (index, edge) in edges.iter().enumerate() {
            match edge.as_ref() {
                &[u, v] => {
                    builder.add_edge(u, v);
                }
                other => match self.policy {
                    EdgePolicy::Lenient => skipped += 1,
                    EdgePolicy::Strict => {
                        return Err(GraphError::MalformedEdge {
                            index,
                            len: other.len(),
                        });
                    }
                },
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, total = edges.len(), "skipped malformed edge entries");
        }

        self.insert(builder.build())
    }

    /// Store a prebuilt graph under a fresh key.
    ///
    /// # Errors
    ///
    /// [`GraphError::KeySpaceExhausted`] if the key counter is at its limit.
    /// Nothing is stored in that case.
    pub fn insert(&self, graph: Graph) -> Result<GraphKey> {
        let entry = Entry {
            memory_bytes: graph.memory_usage(),
            graph: Arc::new(graph),
        };

        let mut inner = self.inner.lock();

        let id = inner.next_id;
        let next = id.checked_add(1).ok_or(GraphError::KeySpaceExhausted)?;
        let key = id.to_string();

        inner.vertex_count += entry.graph.vertex_count();
        inner.edge_count += entry.graph.edge_count();
        inner.memory_bytes += entry.memory_bytes;
        inner.graphs.insert(key.clone(), entry);
        inner.next_id = next;

        Ok(key)
    }

    /// Resolve a key to its graph.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`] if no graph is stored under `key`.
    pub fn get(&self, key: &str) -> Result<Arc<Graph>> {
        self.inner
            .lock()
            .graphs
            .get(key)
            .map(|entry| Arc::clone(&entry.graph))
            .ok_or_else(|| GraphError::NotFound(key.to_string()))
    }

    /// Remove the graph stored under `key`. The key counter is unaffected.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`] if no graph is stored under `key`.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.remove(key).map(drop)
    }

    /// Remove the graph stored under `key` and hand back the registry's handle,
    /// so the caller decides where the last reference is dropped.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`] if no graph is stored under `key`.
    pub fn remove(&self, key: &str) -> Result<Arc<Graph>> {
        let mut inner = self.inner.lock();
        let entry = inner
            .graphs
            .remove(key)
            .ok_or_else(|| GraphError::NotFound(key.to_string()))?;

        inner.vertex_count -= entry.graph.vertex_count();
        inner.edge_count -= entry.graph.edge_count();
        inner.memory_bytes -= entry.memory_bytes;

        Ok(entry.graph)
    }

    /// Look up `key` and run BFS on the result outside the lock.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`], [`GraphError::VertexNotFound`] or
    /// [`GraphError::NoPathFound`].
    pub fn shortest_path(
        &self,
        key: &str,
        start: VertexId,
        end: VertexId,
    ) -> Result<Vec<VertexId>> {
        let graph = self.get(key)?;
        traversal::shortest_path(&graph, start, end)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of aggregate counts.
    pub fn stats(&self) -> RegistryStats {
        let inner = self.inner.lock();
        RegistryStats {
            graph_count: inner.graphs.len(),
            vertex_count: inner.vertex_count,
            edge_count: inner.edge_count,
            memory_bytes: inner.memory_bytes,
            next_key: inner.next_id,
        }
    }

    #[cfg(test)]
    fn set_next_id(&self, id: u64) {
        self.inner.lock().next_id = id;
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

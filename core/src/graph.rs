use std::collections::HashMap;

/// Vertex identifier. Any integer is a valid vertex; there is no fixed domain.
pub type VertexId = i64;

/// Construction-time adjacency list.
///
/// Owned exclusively by whoever is building the graph. Every `add_edge`
/// writes both directions, so the adjacency is symmetric at all times.
/// Call [`GraphBuilder::build`] to freeze it into an immutable [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Add an undirected edge. Missing endpoints are created on demand.
    ///
    /// Self-loops and parallel edges are kept as-is: `add_edge(v, v)` records
    /// `v` twice in its own neighbor list.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> &mut Self {
        self.adjacency.entry(u).or_default().push(v);
        self.adjacency.entry(v).or_default().push(u);
        self.edge_count += 1;
        self
    }

    /// Add every `(u, v)` pair in iteration order.
    pub fn extend_edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
        self
    }

    pub fn build(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
            edge_count: self.edge_count,
        }
    }
}

/// Immutable undirected graph.
///
/// A vertex exists iff it has an entry in the adjacency map, even when its
/// neighbor list is empty. Neighbor order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from `(u, v)` pairs, inserted in order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut builder = GraphBuilder::new();
        builder.extend_edges(edges);
        builder.build()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Neighbors of `id` in insertion order. Empty for unknown vertices.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of inserted edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let entries =
            self.adjacency.capacity() * (size_of::<VertexId>() + size_of::<Vec<VertexId>>());
        let lists: usize = self
            .adjacency
            .values()
            .map(|v| v.capacity() * size_of::<VertexId>())
            .sum();

        entries + lists
    }
}

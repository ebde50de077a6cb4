//! Property tests for graph construction and shortest path.

use std::collections::HashSet;

use graph_registry_core::{bfs_distances, shortest_path, Graph, GraphError, Registry, VertexId};
use proptest::{collection::vec, prelude::*};

/// Small vertex domain so random edge lists produce connected pieces and
/// shared endpoints often.
fn edge_list() -> impl Strategy<Value = Vec<(VertexId, VertexId)>> {
    vec((0..24i64, 0..24i64), 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn adjacency_is_symmetric(edges in edge_list()) {
        let registry = Registry::new();
        let pairs: Vec<[VertexId; 2]> = edges.iter().map(|&(u, v)| [u, v]).collect();
        let key = registry.create(&pairs).unwrap();
        let graph = registry.get(&key).unwrap();

        for &(u, v) in &edges {
            prop_assert!(graph.neighbors(u).contains(&v));
            prop_assert!(graph.neighbors(v).contains(&u));
        }
        for u in graph.vertices() {
            for &v in graph.neighbors(u) {
                prop_assert!(graph.neighbors(v).contains(&u));
            }
        }
    }

    #[test]
    fn path_to_self_is_single_vertex(edges in edge_list()) {
        let graph = Graph::from_edges(edges);
        for v in graph.vertices() {
            prop_assert_eq!(shortest_path(&graph, v, v).unwrap(), vec![v]);
        }
    }

    #[test]
    fn paths_are_valid_and_minimal(edges in edge_list(), a in 0..24i64, b in 0..24i64) {
        let graph = Graph::from_edges(edges);

        match shortest_path(&graph, a, b) {
            Ok(path) => {
                prop_assert!(!path.is_empty());
                prop_assert_eq!(path[0], a);
                prop_assert_eq!(*path.last().unwrap(), b);
                for pair in path.windows(2) {
                    prop_assert!(graph.neighbors(pair[0]).contains(&pair[1]));
                }
                let distinct: HashSet<VertexId> = path.iter().copied().collect();
                prop_assert_eq!(distinct.len(), path.len());

                let distances = bfs_distances(&graph, a);
                prop_assert_eq!(distances[&b] as usize, path.len() - 1);
            }
            Err(GraphError::VertexNotFound(v)) => {
                prop_assert!(v == a || v == b);
                prop_assert!(!graph.contains_vertex(v));
            }
            Err(GraphError::NoPathFound { start, end }) => {
                prop_assert_eq!((start, end), (a, b));
                prop_assert!(graph.contains_vertex(a) && graph.contains_vertex(b));
                prop_assert!(!bfs_distances(&graph, a).contains_key(&b));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn keys_strictly_increase(creates in 1usize..40, deletes in vec(any::<bool>(), 40)) {
        let registry = Registry::new();
        let mut last = 0u64;
        for i in 0..creates {
            let key = registry.create(&[[1i64, 2]]).unwrap();
            let id: u64 = key.parse().unwrap();
            prop_assert!(id > last);
            last = id;
            if deletes[i] {
                registry.delete(&key).unwrap();
                prop_assert_eq!(registry.get(&key), Err(GraphError::NotFound(key)));
            }
        }
    }
}

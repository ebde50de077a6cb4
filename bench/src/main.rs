use graph_registry_core::{Graph, GraphBuilder, Registry, VertexId};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: i64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-registry-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  chain       Single path (worst-case BFS depth)");
        println!("  tree        Ternary tree (log depth, exponential width)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!("  registry    Create/lookup/delete throughput on small graphs");
        println!();
        println!("Default vertex_count: 1000000");
        return;
    }

    if vertex_count < 16 {
        eprintln!("vertex_count must be at least 16");
        return;
    }

    println!("graph-registry-bench");
    println!("====================");
    println!();

    let generators: Vec<(&str, fn(i64) -> Graph)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "registry" => Vec::new(),
        "all" => vec![
            ("Chain", gen_chain as fn(i64) -> Graph),
            ("Ternary tree", gen_tree),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }

    if mode == "registry" || mode == "all" {
        run_registry_benchmark();
    }
}

fn run_benchmark(name: &str, generator: fn(i64) -> Graph, vertex_count: i64) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    let reach = graph_registry_core::bfs_distances(&graph, 0);
    let elapsed = t.elapsed();
    let eccentricity = reach.values().copied().max().unwrap_or(0);
    println!(
        "BFS from 0: reached {} vertices, eccentricity {}, {:.1}ms",
        reach.len(),
        eccentricity,
        elapsed.as_secs_f64() * 1000.0
    );

    // Shortest path: vertex 0 to a few far targets
    println!();
    println!("{:>12} {:>8} {:>10}", "target", "hops", "time");
    println!("{:->12} {:->8} {:->10}", "", "", "");

    for target in [vertex_count / 4, vertex_count / 2, vertex_count - 1] {
        let t = Instant::now();
        let path = graph_registry_core::shortest_path(&graph, 0, target);
        let elapsed = t.elapsed();
        match path {
            Ok(p) => println!(
                "{:>12} {:>8} {:>8.1}ms",
                target,
                p.len() - 1,
                elapsed.as_secs_f64() * 1000.0
            ),
            Err(e) => println!(
                "{:>12} {:>8} {:>8.1}ms",
                target,
                e.to_string(),
                elapsed.as_secs_f64() * 1000.0
            ),
        }
    }
    println!();
}

fn run_registry_benchmark() {
    const GRAPHS: i64 = 100_000;

    println!("--- Registry ---");
    let registry = Registry::new();
    let edges: Vec<[VertexId; 2]> = (0..8).map(|i| [i, i + 1]).collect();

    let t = Instant::now();
    let keys: Vec<String> = (0..GRAPHS)
        .filter_map(|_| registry.create(&edges).ok())
        .collect();
    report("create", keys.len(), t);

    let t = Instant::now();
    let found = keys
        .iter()
        .filter(|k| registry.shortest_path(k, 0, 8).is_ok())
        .count();
    report("lookup + path", found, t);

    let t = Instant::now();
    let deleted = keys.iter().filter(|k| registry.delete(k).is_ok()).count();
    report("delete", deleted, t);
    println!();
}

fn report(op: &str, count: usize, started: Instant) {
    let elapsed = started.elapsed().as_secs_f64();
    println!(
        "{:>14}: {:>8} ops in {:>7.1}ms ({:.0} ops/s)",
        op,
        count,
        elapsed * 1000.0,
        count as f64 / elapsed.max(f64::EPSILON)
    );
}

// ---------------------------------------------------------------------------
// Generators: all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: i64) -> i64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as i64
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Single path 0 - 1 - ... - n-1. Maximum BFS depth.
fn gen_chain(vertex_count: i64) -> Graph {
    let mut builder = GraphBuilder::with_capacity(vertex_count as usize);
    builder.extend_edges((0..vertex_count - 1).map(|i| (i, i + 1)));
    builder.build()
}

/// Ternary tree rooted at 0. Produces deep paths (log depth) with
/// exponential width. Tests path reconstruction through many parents.
fn gen_tree(vertex_count: i64) -> Graph {
    let mut builder = GraphBuilder::with_capacity(vertex_count as usize);
    for child in 1..vertex_count {
        builder.add_edge((child - 1) / 3, child);
    }
    builder.build()
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each vertex connects to K nearest neighbors on a ring, then each edge
/// is rewired with probability p. High clustering with short path lengths.
fn gen_small_world(vertex_count: i64) -> Graph {
    let k = 5i64;
    let p = 0.05f64;
    let mut builder = GraphBuilder::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        for j in 1..=k {
            let neighbor = (i + j) % vertex_count;
            if rng.next_f64() < p {
                let rewired = rng.next(vertex_count);
                builder.add_edge(i, if rewired != i { rewired } else { neighbor });
            } else {
                builder.add_edge(i, neighbor);
            }
        }
    }

    builder.build()
}

/// Erdos-Renyi: ~5 uniform random edges per vertex. Baseline topology.
fn gen_random(vertex_count: i64) -> Graph {
    let target_edges = vertex_count * 5;
    let mut builder = GraphBuilder::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(54321);

    // Guarantee every id in range exists so targets are always valid vertices
    for i in 0..vertex_count {
        builder.add_edge(i, rng.next(vertex_count));
    }
    for _ in vertex_count..target_edges {
        let from = rng.next(vertex_count);
        let to = rng.next(vertex_count);
        if from != to {
            builder.add_edge(from, to);
        }
    }

    builder.build()
}

/// Barbell: two dense clusters joined by a chain of 10 bridge vertices.
///
/// Worst case for "find path through bottleneck."
fn gen_barbell(vertex_count: i64) -> Graph {
    let bridge_len = 10i64;
    let cluster = (vertex_count - bridge_len) / 2;
    let mut builder = GraphBuilder::with_capacity(vertex_count as usize);
    let mut rng = FastRng::new(99999);

    let b_start = cluster + bridge_len;
    for base in [0, b_start] {
        for i in 0..cluster {
            for _ in 0..10 {
                builder.add_edge(base + i, base + rng.next(cluster));
            }
        }
    }

    // Bridge: last vertex of A through the chain to first vertex of B
    for id in cluster - 1..b_start {
        builder.add_edge(id, id + 1);
    }

    // Any remainder from the integer split hangs off the end of B
    for id in b_start + cluster..vertex_count {
        builder.add_edge(id - 1, id);
    }

    builder.build()
}

use clap::{Parser, ValueEnum};
use graph_registry_core::EdgePolicy;

pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Graph registry server - shortest path queries over in-memory graphs
#[derive(Parser, Debug, Clone)]
#[command(name = "graph-registry-server")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "GRAPH_REGISTRY_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 9000, env = "GRAPH_REGISTRY_PORT")]
    pub port: u16,

    /// Handling of edge entries that are not exactly two vertices
    #[arg(
        long,
        value_enum,
        default_value_t = EdgePolicyArg::Lenient,
        env = "GRAPH_REGISTRY_EDGE_POLICY"
    )]
    pub edge_policy: EdgePolicyArg,

    /// Maximum accepted request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, env = "GRAPH_REGISTRY_MAX_BODY_BYTES")]
    pub max_body_bytes: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicyArg {
    /// Drop malformed entries and keep the rest
    Lenient,
    /// Reject the request on the first malformed entry
    Strict,
}

impl From<EdgePolicyArg> for EdgePolicy {
    fn from(arg: EdgePolicyArg) -> Self {
        match arg {
            EdgePolicyArg::Lenient => EdgePolicy::Lenient,
            EdgePolicyArg::Strict => EdgePolicy::Strict,
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy.into()
    }
}

use graph_registry_core::{EdgePolicy, Registry};

/// Shared handler state. Constructed once in `main` and passed to every
/// handler through `axum::extract::State`.
pub struct AppState {
    pub registry: Registry,
}

impl AppState {
    pub fn new(policy: EdgePolicy) -> Self {
        Self {
            registry: Registry::with_policy(policy),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EdgePolicy::default())
    }
}

//! Application state.

use pitchrank_graph::GraphClient;

/// Application state shared across handlers.
///
/// Holds the process-scoped graph client; cloning shares the underlying
/// driver pool, so each request gets its own session without any locking
/// in this service.
#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
}

impl AppState {
    pub fn new(graph: GraphClient) -> Self {
        Self { graph }
    }
}

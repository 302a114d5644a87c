//! League model.

use serde::{Deserialize, Serialize};

/// A soccer league, as stored on `League` nodes in the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: i64,
    pub name: String,
}

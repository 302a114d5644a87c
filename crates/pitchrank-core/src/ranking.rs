//! Ranking result model.

use serde::{Deserialize, Serialize};

/// One entry of a ranking result: a team with its PageRank score and
/// 1-based rank. Transient, recomputed on every request.
///
/// The serialized key for the team name is capitalized to preserve the
/// wire contract consumed by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTeam {
    #[serde(rename = "Team")]
    pub team: String,
    pub score: f64,
    pub rank: usize,
}

//! Match models.
//!
//! A match is stored as a directed `beat` relationship from the losing
//! team to the winning team. Ties use the literal winner value `"tie"`.

use serde::{Deserialize, Serialize};

/// A validated match write payload.
///
/// `league_id` stays string-typed because that is how the `leagueID`
/// property is stored on `beat` edges; read queries coerce it with
/// `toInteger` where a numeric comparison is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInput {
    pub match_id: i64,
    pub winner: String,
    pub loser: String,
    pub winner_goals: i64,
    pub loser_goals: i64,
    pub league_id: String,
    pub season: String,
}

impl MatchInput {
    /// Signed goal differential, `winner_goals - loser_goals`.
    pub fn score_differential(&self) -> i64 {
        self.winner_goals - self.loser_goals
    }

    /// Edge weight used by the ranking projection: the differential's
    /// magnitude.
    pub fn weight(&self) -> i64 {
        self.score_differential().abs()
    }
}

/// Point-read result for a single match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStats {
    pub winner: String,
    pub loser: String,
    pub winner_goals: i64,
    pub loser_goals: i64,
}

/// A match id, as returned by the per-season match listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRef {
    pub match_id: i64,
}

/// Head-to-head record between two teams within one league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadToHead {
    pub team1: String,
    pub team2: String,
    pub team1_wins: i64,
    pub team2_wins: i64,
    pub ties: i64,
}

/// One season's aggregate results for a team in a league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonTrend {
    pub season: String,
    pub wins: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
}

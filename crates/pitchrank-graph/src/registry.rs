//! Match registry write operations.
//!
//! Matches are identified by a globally unique numeric `match_id`. Update is
//! delete-then-insert rather than in-place mutation: the two halves are
//! independent round-trips, so a failure between them leaves no edge for
//! that id. Delete of a missing id is a Cypher no-op and succeeds.

use anyhow::Result;
use async_trait::async_trait;
use neo4rs::Query;
use pitchrank_core::matches::{MatchInput, MatchStats};

use crate::GraphClient;

/// Write seam for the registry: one fire-and-forget Cypher statement.
///
/// [`GraphClient`] is the real implementation; tests substitute a recorder
/// to verify how many statements an operation issues.
#[async_trait]
pub trait GraphWriter: Send + Sync {
    async fn run(&self, query: Query) -> Result<()>;
}

#[async_trait]
impl GraphWriter for GraphClient {
    async fn run(&self, query: Query) -> Result<()> {
        self.execute(query).await
    }
}

fn create_edge_query(input: &MatchInput) -> Query {
    // The edge points loser -> winner; every value is bound, including the
    // derived differential and weight.
    Query::new(
        "MATCH (team1:Team {team_short_name: $winner}) \
         MATCH (team2:Team {team_short_name: $loser}) \
         CREATE (team2)-[:beat { \
             match_id: $match_id, \
             winner: $winner, \
             loser: $loser, \
             winner_goals: $winner_goals, \
             loser_goals: $loser_goals, \
             scoreDifferential: $score_differential, \
             season: $season, \
             weight: $weight, \
             leagueID: $league_id \
         }]->(team1)"
            .to_string(),
    )
    .param("match_id", input.match_id)
    .param("winner", input.winner.as_str())
    .param("loser", input.loser.as_str())
    .param("winner_goals", input.winner_goals)
    .param("loser_goals", input.loser_goals)
    .param("score_differential", input.score_differential())
    .param("season", input.season.as_str())
    .param("weight", input.weight())
    .param("league_id", input.league_id.as_str())
}

fn delete_edge_query(match_id: i64) -> Query {
    Query::new(
        "MATCH ()-[r:beat]-() WHERE toInteger(r.match_id) = $match_id DELETE r".to_string(),
    )
    .param("match_id", match_id)
}

/// Record a new match edge.
pub async fn add_match<W: GraphWriter + ?Sized>(writer: &W, input: &MatchInput) -> Result<()> {
    writer.run(create_edge_query(input)).await
}

/// Replace the edge for `input.match_id` with the given values.
///
/// Non-atomic: the delete and the insert are separate statements.
pub async fn update_match<W: GraphWriter + ?Sized>(writer: &W, input: &MatchInput) -> Result<()> {
    writer.run(delete_edge_query(input.match_id)).await?;
    writer.run(create_edge_query(input)).await
}

/// Delete the edge for `match_id`. Succeeds when no such edge exists.
pub async fn delete_match<W: GraphWriter + ?Sized>(writer: &W, match_id: i64) -> Result<()> {
    writer.run(delete_edge_query(match_id)).await
}

/// Point-read a match by id. Returns `None` when the id is unknown.
pub async fn match_stats(client: &GraphClient, match_id: i64) -> Result<Option<MatchStats>> {
    let query = Query::new(
        "MATCH (:Team)-[r:beat]-(:Team) \
         WHERE toInteger(r.match_id) = $match_id \
         RETURN r.winner AS winner, r.loser AS loser, \
                r.winner_goals AS winner_goals, r.loser_goals AS loser_goals \
         LIMIT 1"
            .to_string(),
    )
    .param("match_id", match_id);

    let rows = client.query(query).await?;
    let Some(row) = rows.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(MatchStats {
        winner: row
            .get("winner")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'winner': {:?}", e))?,
        loser: row
            .get("loser")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'loser': {:?}", e))?,
        winner_goals: row
            .get("winner_goals")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'winner_goals': {:?}", e))?,
        loser_goals: row
            .get("loser_goals")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'loser_goals': {:?}", e))?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingWriter {
        statements: Mutex<usize>,
    }

    #[async_trait]
    impl GraphWriter for RecordingWriter {
        async fn run(&self, _query: Query) -> Result<()> {
            *self.statements.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn sample_input() -> MatchInput {
        MatchInput {
            match_id: 999,
            winner: "ARS".to_string(),
            loser: "CHE".to_string(),
            winner_goals: 3,
            loser_goals: 1,
            league_id: "1729".to_string(),
            season: "2015/2016".to_string(),
        }
    }

    #[tokio::test]
    async fn add_issues_a_single_statement() {
        let writer = RecordingWriter::default();
        add_match(&writer, &sample_input()).await.unwrap();
        assert_eq!(*writer.statements.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn update_issues_delete_then_insert() {
        let writer = RecordingWriter::default();
        update_match(&writer, &sample_input()).await.unwrap();
        assert_eq!(*writer.statements.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_of_missing_match_succeeds() {
        // The delete query matches nothing for an unknown id; that is a
        // no-op success by contract, intentional and relied on by callers.
        let writer = RecordingWriter::default();
        delete_match(&writer, 123456).await.unwrap();
        assert_eq!(*writer.statements.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn update_halts_if_delete_fails() {
        struct FailingWriter;

        #[async_trait]
        impl GraphWriter for FailingWriter {
            async fn run(&self, _query: Query) -> Result<()> {
                anyhow::bail!("connection reset")
            }
        }

        let err = update_match(&FailingWriter, &sample_input())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}

//! Projection-and-ranking workflow.
//!
//! Given a league and season, ensure a named subgraph projection exists for
//! that pair, then stream PageRank scores over it and return the teams in
//! rank order. The projection is created lazily on the first request and
//! reused afterwards; it is never torn down by this service.
//!
//! Known race: existence check and creation are two independent round-trips.
//! Two concurrent first requests for the same (league, season) can both see
//! "absent" and both attempt creation; whether the second attempt fails is
//! up to the engine's duplicate-name behavior. Accepted as a documented
//! limitation, not handled here.

use anyhow::Result;
use async_trait::async_trait;
use neo4rs::Query;
use pitchrank_core::ranking::RankedTeam;
use pitchrank_core::{PitchrankError, PitchrankResult};

use crate::GraphClient;

/// Prefix for projection names; the full name appends the league id and the
/// season with non-alphanumeric characters stripped.
const PROJECTION_PREFIX: &str = "seasonLeagueGraph";

/// Node sub-query handed to the projection: every Team that has played at
/// least one match in the given league and season. The season/league values
/// arrive through the projection's `parameters` map, never by interpolation.
const PROJECTION_NODE_QUERY: &str = "MATCH (t:Team)-[:beat]->() \
     WHERE EXISTS { \
         MATCH (t)-[r:beat]->() \
         WHERE r.season = $season AND toInteger(r.leagueID) = $leagueID \
     } \
     RETURN id(t) AS id";

/// Relationship sub-query: every beat edge in the given league and season,
/// weighted by its goal differential magnitude.
const PROJECTION_REL_QUERY: &str = "MATCH (team1:Team)-[r:beat]->(team2:Team) \
     WHERE r.season = $season AND toInteger(r.leagueID) = $leagueID \
     RETURN id(team1) AS source, id(team2) AS target, r.weight AS weight";

/// A raw (team, score) record streamed back from the ranking computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTeam {
    pub team: String,
    pub score: f64,
}

/// The engine capabilities the ranking workflow depends on.
///
/// Implemented by [`GraphClient`] against Neo4j GDS; mocked in tests so the
/// workflow's idempotence can be verified without a live engine.
#[async_trait]
pub trait RankingStore: Send + Sync {
    /// Does a named projection exist?
    async fn projection_exists(&self, name: &str) -> Result<bool>;

    /// Materialize the (league, season) subgraph under `name`.
    async fn create_projection(&self, name: &str, league_id: i64, season: &str) -> Result<()>;

    /// Stream PageRank scores for the named projection.
    async fn stream_page_rank(&self, name: &str) -> Result<Vec<ScoredTeam>>;
}

#[async_trait]
impl RankingStore for GraphClient {
    async fn projection_exists(&self, name: &str) -> Result<bool> {
        let query = Query::new(
            "CALL gds.graph.exists($name) YIELD exists RETURN exists".to_string(),
        )
        .param("name", name);

        Ok(self.query_scalar(query, "exists").await?.unwrap_or(false))
    }

    async fn create_projection(&self, name: &str, league_id: i64, season: &str) -> Result<()> {
        // validateRelationships is off: the node and relationship filters are
        // identical by construction, so endpoint validation adds nothing.
        let query = Query::new(
            "CALL gds.graph.project.cypher($name, $nodeQuery, $relQuery, { \
                 validateRelationships: false, \
                 parameters: { season: $season, leagueID: $leagueID } \
             })"
            .to_string(),
        )
        .param("name", name)
        .param("nodeQuery", PROJECTION_NODE_QUERY)
        .param("relQuery", PROJECTION_REL_QUERY)
        .param("season", season)
        .param("leagueID", league_id);

        self.execute(query).await
    }

    async fn stream_page_rank(&self, name: &str) -> Result<Vec<ScoredTeam>> {
        let query = Query::new(
            "CALL gds.pageRank.stream($name) \
             YIELD nodeId, score \
             RETURN gds.util.asNode(nodeId).team_long_name AS team, score \
             ORDER BY score DESC"
                .to_string(),
        )
        .param("name", name);

        let mut records = Vec::new();
        for row in self.query(query).await? {
            let team: String = row
                .get("team")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'team': {:?}", e))?;
            let score: f64 = row
                .get("score")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'score': {:?}", e))?;
            records.push(ScoredTeam { team, score });
        }
        Ok(records)
    }
}

/// Derive the projection name for a (league, season) pair.
///
/// Must be stable across calls so repeated ranking requests reuse the same
/// projection. Season strings carry a path separator ("2015/2016"); anything
/// non-alphanumeric is stripped rather than escaped.
pub fn projection_name(league_id: i64, season: &str) -> String {
    let season_key: String = season.chars().filter(|c| c.is_alphanumeric()).collect();
    format!("{PROJECTION_PREFIX}{league_id}{season_key}")
}

/// Stably sort by score descending and assign dense 1-based ranks.
///
/// The engine already returns records ordered by score, but that is its
/// contract, not ours; sorting client-side keeps the output deterministic.
pub fn assign_ranks(mut records: Vec<ScoredTeam>) -> Vec<RankedTeam> {
    records.sort_by(|a, b| b.score.total_cmp(&a.score));
    records
        .into_iter()
        .enumerate()
        .map(|(idx, r)| RankedTeam {
            team: r.team,
            score: r.score,
            rank: idx + 1,
        })
        .collect()
}

/// Rank the teams of a league season by PageRank.
///
/// Validates inputs before touching the engine, ensures the projection
/// exists (creating it on first use), then streams and ranks the scores.
pub async fn rank_teams<S: RankingStore + ?Sized>(
    store: &S,
    league_id: i64,
    season: &str,
) -> PitchrankResult<Vec<RankedTeam>> {
    if league_id <= 0 {
        return Err(PitchrankError::validation(
            "Both 'leagueID' and 'season' parameters are required.",
        ));
    }
    if season.trim().is_empty() {
        return Err(PitchrankError::validation(
            "Both 'leagueID' and 'season' parameters are required.",
        ));
    }

    let name = projection_name(league_id, season);

    let exists = store
        .projection_exists(&name)
        .await
        .map_err(PitchrankError::engine)?;

    if !exists {
        tracing::info!(projection = %name, "creating season/league projection");
        store
            .create_projection(&name, league_id, season)
            .await
            .map_err(PitchrankError::engine)?;
    }

    let records = store
        .stream_page_rank(&name)
        .await
        .map_err(PitchrankError::engine)?;

    Ok(assign_ranks(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock engine recording which operations the workflow performed.
    struct MockStore {
        projections: Mutex<Vec<String>>,
        create_calls: Mutex<usize>,
        scores: Vec<ScoredTeam>,
        fail_stream: bool,
    }

    impl MockStore {
        fn new(scores: Vec<ScoredTeam>) -> Self {
            Self {
                projections: Mutex::new(Vec::new()),
                create_calls: Mutex::new(0),
                scores,
                fail_stream: false,
            }
        }
    }

    #[async_trait]
    impl RankingStore for MockStore {
        async fn projection_exists(&self, name: &str) -> Result<bool> {
            Ok(self.projections.lock().unwrap().iter().any(|p| p == name))
        }

        async fn create_projection(
            &self,
            name: &str,
            _league_id: i64,
            _season: &str,
        ) -> Result<()> {
            *self.create_calls.lock().unwrap() += 1;
            self.projections.lock().unwrap().push(name.to_string());
            Ok(())
        }

        async fn stream_page_rank(&self, _name: &str) -> Result<Vec<ScoredTeam>> {
            if self.fail_stream {
                anyhow::bail!("projection capability missing");
            }
            Ok(self.scores.clone())
        }
    }

    fn scored(team: &str, score: f64) -> ScoredTeam {
        ScoredTeam {
            team: team.to_string(),
            score,
        }
    }

    #[test]
    fn projection_name_is_deterministic() {
        let a = projection_name(1729, "2015/2016");
        let b = projection_name(1729, "2015/2016");
        assert_eq!(a, b);
        assert_eq!(a, "seasonLeagueGraph172920152016");
    }

    #[test]
    fn projection_name_strips_non_alphanumerics() {
        assert_eq!(
            projection_name(7, "2014-15 (short)"),
            "seasonLeagueGraph7201415short"
        );
    }

    #[test]
    fn distinct_pairs_get_distinct_names() {
        assert_ne!(projection_name(1, "2015/2016"), projection_name(1, "2016/2017"));
        assert_ne!(projection_name(1, "2015/2016"), projection_name(2, "2015/2016"));
    }

    #[test]
    fn ranks_are_dense_and_score_descending() {
        let ranked = assign_ranks(vec![
            scored("Chelsea", 0.7),
            scored("Arsenal", 1.4),
            scored("Spurs", 0.7),
            scored("Leicester", 2.1),
        ]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(ranked[0].team, "Leicester");
        assert_eq!(ranked[1].team, "Arsenal");
        // Stable sort: equal scores keep their input order.
        assert_eq!(ranked[2].team, "Chelsea");
        assert_eq!(ranked[3].team, "Spurs");
    }

    #[test]
    fn output_is_sorted_even_if_engine_order_is_not() {
        let ranked = assign_ranks(vec![scored("B", 0.1), scored("A", 0.9)]);
        assert_eq!(ranked[0].team, "A");
        assert_eq!(ranked[0].rank, 1);
    }

    #[tokio::test]
    async fn first_call_creates_projection_second_reuses_it() {
        let store = MockStore::new(vec![scored("Arsenal", 1.0)]);

        rank_teams(&store, 1729, "2015/2016").await.unwrap();
        assert_eq!(*store.create_calls.lock().unwrap(), 1);

        rank_teams(&store, 1729, "2015/2016").await.unwrap();
        assert_eq!(*store.create_calls.lock().unwrap(), 1, "second call must reuse");
    }

    #[tokio::test]
    async fn invalid_inputs_never_reach_the_engine() {
        let store = MockStore::new(vec![]);

        let err = rank_teams(&store, 0, "2015/2016").await.unwrap_err();
        assert!(matches!(err, PitchrankError::Validation(_)));

        let err = rank_teams(&store, 1729, "  ").await.unwrap_err();
        assert!(matches!(err, PitchrankError::Validation(_)));

        assert_eq!(*store.create_calls.lock().unwrap(), 0);
        assert!(store.projections.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn engine_failure_surfaces_with_message() {
        let mut store = MockStore::new(vec![]);
        store.fail_stream = true;

        let err = rank_teams(&store, 1729, "2015/2016").await.unwrap_err();
        match err {
            PitchrankError::Engine(msg) => {
                assert!(msg.contains("projection capability missing"))
            }
            other => panic!("expected engine error, got {other:?}"),
        }
    }
}

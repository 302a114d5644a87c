//! Per-season match listing.

use anyhow::Result;
use neo4rs::Query;
use pitchrank_core::matches::MatchRef;

use crate::GraphClient;

/// Distinct match ids for a league and season, ascending.
pub async fn list_matches(
    client: &GraphClient,
    league_id: i64,
    season: &str,
) -> Result<Vec<MatchRef>> {
    let query = Query::new(
        "MATCH ()-[r:beat]-() \
         WHERE toInteger(r.leagueID) = $leagueID AND r.season = $season \
         RETURN DISTINCT toInteger(r.match_id) AS match_id \
         ORDER BY match_id"
            .to_string(),
    )
    .param("leagueID", league_id)
    .param("season", season);

    let mut matches = Vec::new();
    for row in client.query(query).await? {
        let match_id: i64 = row
            .get("match_id")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'match_id': {:?}", e))?;
        matches.push(MatchRef { match_id });
    }
    Ok(matches)
}

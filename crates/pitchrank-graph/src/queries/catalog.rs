//! League, season and team listings.

use anyhow::Result;
use neo4rs::Query;
use pitchrank_core::league::League;
use pitchrank_core::team::TeamInfo;

use crate::GraphClient;

/// All leagues.
pub async fn list_leagues(client: &GraphClient) -> Result<Vec<League>> {
    let query = Query::new("MATCH (l:League) RETURN l.id AS id, l.name AS name".to_string());

    let mut leagues = Vec::new();
    for row in client.query(query).await? {
        leagues.push(League {
            id: row
                .get("id")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'id': {:?}", e))?,
            name: row
                .get("name")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'name': {:?}", e))?,
        });
    }
    Ok(leagues)
}

/// Distinct seasons with matches in a league, ascending.
///
/// `leagueID` is compared as a string here: that is the property's stored
/// type, and this listing has no reason to coerce it.
pub async fn list_seasons(client: &GraphClient, league_id: &str) -> Result<Vec<String>> {
    let query = Query::new(
        "MATCH ()-[r:beat]->() \
         WHERE r.leagueID = $leagueID \
         RETURN DISTINCT r.season AS season \
         ORDER BY season"
            .to_string(),
    )
    .param("leagueID", league_id);

    let mut seasons = Vec::new();
    for row in client.query(query).await? {
        let season: String = row
            .get("season")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'season': {:?}", e))?;
        seasons.push(season);
    }
    Ok(seasons)
}

/// Teams that have played at least one match in a league, by long name.
pub async fn list_teams(client: &GraphClient, league_id: i64) -> Result<Vec<TeamInfo>> {
    let query = Query::new(
        "MATCH (t:Team)-[:beat]->() \
         WHERE EXISTS { \
             MATCH (t)-[r:beat]->() \
             WHERE toInteger(r.leagueID) = $leagueID \
         } \
         RETURN DISTINCT t.team_api_id AS id, \
                t.team_long_name AS team_long_name, \
                t.team_short_name AS team_short_name \
         ORDER BY team_long_name"
            .to_string(),
    )
    .param("leagueID", league_id);

    let mut teams = Vec::new();
    for row in client.query(query).await? {
        teams.push(TeamInfo {
            id: row
                .get("id")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'id': {:?}", e))?,
            team_long_name: row
                .get("team_long_name")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'team_long_name': {:?}", e))?,
            team_short_name: row
                .get("team_short_name")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'team_short_name': {:?}", e))?,
        });
    }
    Ok(teams)
}

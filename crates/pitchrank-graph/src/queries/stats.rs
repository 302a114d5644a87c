//! Head-to-head and trend aggregations.

use anyhow::Result;
use neo4rs::Query;
use pitchrank_core::matches::{HeadToHead, SeasonTrend};

use crate::GraphClient;

/// Wins/wins/ties between two teams within a league.
///
/// Returns `None` when the teams have never met there; the endpoint renders
/// that as an empty object.
pub async fn head_to_head(
    client: &GraphClient,
    team1_id: i64,
    team2_id: i64,
    league_id: i64,
) -> Result<Option<HeadToHead>> {
    let query = Query::new(
        "MATCH (team1:Team {team_api_id: $team1_id})-[r:beat]-(team2:Team {team_api_id: $team2_id}) \
         WHERE toInteger(r.leagueID) = $leagueID \
         RETURN team1.team_short_name AS team1, team2.team_short_name AS team2, \
                COUNT(CASE WHEN r.winner = team1.team_short_name THEN 1 ELSE NULL END) AS team1_wins, \
                COUNT(CASE WHEN r.winner = team2.team_short_name THEN 1 ELSE NULL END) AS team2_wins, \
                COUNT(CASE WHEN r.winner = 'tie' THEN 1 ELSE NULL END) AS ties"
            .to_string(),
    )
    .param("team1_id", team1_id)
    .param("team2_id", team2_id)
    .param("leagueID", league_id);

    let rows = client.query(query).await?;
    let Some(row) = rows.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(HeadToHead {
        team1: row
            .get("team1")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'team1': {:?}", e))?,
        team2: row
            .get("team2")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'team2': {:?}", e))?,
        team1_wins: row
            .get("team1_wins")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'team1_wins': {:?}", e))?,
        team2_wins: row
            .get("team2_wins")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'team2_wins': {:?}", e))?,
        ties: row
            .get("ties")
            .map_err(|e| anyhow::anyhow!("Failed to get field 'ties': {:?}", e))?,
    }))
}

/// Per-season wins, losses and goal totals for one team in a league,
/// ordered by season. Empty when the team has no matches there.
pub async fn team_trend(
    client: &GraphClient,
    league_id: i64,
    team_id: i64,
) -> Result<Vec<SeasonTrend>> {
    let query = Query::new(
        "MATCH (team:Team {team_api_id: $teamID}) \
         WITH team.team_short_name AS team_short_name, team \
         MATCH (team)-[r:beat]-() \
         WHERE toInteger(r.leagueID) = $leagueID \
         WITH r.season AS season, \
              COUNT(CASE WHEN r.winner = team_short_name THEN 1 ELSE NULL END) AS wins, \
              COUNT(CASE WHEN r.loser = team_short_name THEN 1 ELSE NULL END) AS losses, \
              SUM(CASE \
                  WHEN r.winner = team_short_name THEN r.winner_goals \
                  WHEN r.loser = team_short_name THEN r.loser_goals \
                  ELSE 0 END) AS goals_for, \
              SUM(CASE \
                  WHEN r.winner = team_short_name THEN r.loser_goals \
                  WHEN r.loser = team_short_name THEN r.winner_goals \
                  ELSE 0 END) AS goals_against \
         RETURN season, wins, losses, goals_for, goals_against \
         ORDER BY season"
            .to_string(),
    )
    .param("teamID", team_id)
    .param("leagueID", league_id);

    let mut trend = Vec::new();
    for row in client.query(query).await? {
        trend.push(SeasonTrend {
            season: row
                .get("season")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'season': {:?}", e))?,
            wins: row
                .get("wins")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'wins': {:?}", e))?,
            losses: row
                .get("losses")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'losses': {:?}", e))?,
            goals_for: row
                .get("goals_for")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'goals_for': {:?}", e))?,
            goals_against: row
                .get("goals_against")
                .map_err(|e| anyhow::anyhow!("Failed to get field 'goals_against': {:?}", e))?,
        });
    }
    Ok(trend)
}

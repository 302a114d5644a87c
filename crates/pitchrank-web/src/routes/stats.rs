//! Head-to-head and trend handlers.

use axum::{extract::State, Json};
use pitchrank_core::matches::SeasonTrend;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HeadToHeadParams {
    pub team1_id: Option<i64>,
    pub team2_id: Option<i64>,
    #[serde(rename = "leagueID")]
    pub league_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct TrendParams {
    #[serde(rename = "leagueID")]
    pub league_id: Option<i64>,
    #[serde(rename = "teamID")]
    pub team_id: Option<i64>,
}

fn validate_head_to_head(params: HeadToHeadParams) -> Result<(i64, i64, i64), ApiError> {
    match (params.team1_id, params.team2_id, params.league_id) {
        (Some(t1), Some(t2), Some(league)) => Ok((t1, t2, league)),
        _ => Err(ApiError::bad_request(
            "'team1_id', 'team2_id' and 'leagueID' parameters are required.",
        )),
    }
}

fn validate_trend(params: TrendParams) -> Result<(i64, i64), ApiError> {
    match (params.league_id, params.team_id) {
        (Some(league), Some(team)) if league > 0 && team > 0 => Ok((league, team)),
        _ => Err(ApiError::bad_request(
            "Both 'leagueID' and 'teamID' parameters are required.",
        )),
    }
}

/// GET /head_to_head - record between two teams in a league.
///
/// Renders an empty object when the teams have never met.
pub async fn get_head_to_head(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<HeadToHeadParams>,
) -> Result<Json<Value>, ApiError> {
    let (team1_id, team2_id, league_id) = validate_head_to_head(params)?;

    let record =
        pitchrank_graph::queries::stats::head_to_head(&state.graph, team1_id, team2_id, league_id)
            .await?;

    Ok(Json(match record {
        Some(h2h) => serde_json::to_value(h2h).unwrap_or_else(|_| json!({})),
        None => json!({}),
    }))
}

/// GET /team_trend - per-season results for a team in a league.
pub async fn get_team_trend(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TrendParams>,
) -> Result<Json<Vec<SeasonTrend>>, ApiError> {
    let (league_id, team_id) = validate_trend(params)?;

    let trend =
        pitchrank_graph::queries::stats::team_trend(&state.graph, league_id, team_id).await?;

    if trend.is_empty() {
        return Err(ApiError::not_found(
            "No data found for the specified team and league.",
        ));
    }

    Ok(Json(trend))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_to_head_requires_all_three_params() {
        assert!(validate_head_to_head(HeadToHeadParams {
            team1_id: Some(1),
            team2_id: Some(2),
            league_id: Some(3),
        })
        .is_ok());
        assert!(validate_head_to_head(HeadToHeadParams {
            team1_id: Some(1),
            team2_id: None,
            league_id: Some(3),
        })
        .is_err());
        assert!(validate_head_to_head(HeadToHeadParams {
            team1_id: None,
            team2_id: None,
            league_id: None,
        })
        .is_err());
    }

    #[test]
    fn trend_requires_both_params() {
        assert!(validate_trend(TrendParams {
            league_id: Some(1729),
            team_id: Some(42),
        })
        .is_ok());
        assert!(validate_trend(TrendParams {
            league_id: None,
            team_id: Some(42),
        })
        .is_err());
        assert!(validate_trend(TrendParams {
            league_id: Some(1729),
            team_id: None,
        })
        .is_err());
    }
}

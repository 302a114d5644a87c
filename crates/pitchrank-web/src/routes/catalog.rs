//! League, season and team listing handlers.

use axum::{extract::State, Json};
use pitchrank_core::league::League;
use pitchrank_core::team::TeamInfo;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SeasonsParams {
    /// Kept string-typed: `leagueID` is stored as a string on beat edges
    /// and the seasons listing compares it without coercion.
    #[serde(rename = "leagueID")]
    pub league_id: Option<String>,
}

#[derive(Deserialize)]
pub struct TeamsParams {
    #[serde(rename = "leagueID")]
    pub league_id: Option<i64>,
}

fn validate_seasons(params: SeasonsParams) -> Result<String, ApiError> {
    params
        .league_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing leagueID parameter"))
}

fn validate_teams(params: TeamsParams) -> Result<i64, ApiError> {
    params
        .league_id
        .ok_or_else(|| ApiError::bad_request("Missing leagueID parameter"))
}

/// GET /leagues - all leagues.
pub async fn get_leagues(
    State(state): State<AppState>,
) -> Result<Json<Vec<League>>, ApiError> {
    let leagues = pitchrank_graph::queries::catalog::list_leagues(&state.graph).await?;
    Ok(Json(leagues))
}

/// GET /seasons - seasons with matches in a league.
pub async fn get_seasons(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SeasonsParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let league_id = validate_seasons(params)?;

    let seasons =
        pitchrank_graph::queries::catalog::list_seasons(&state.graph, &league_id).await?;
    Ok(Json(seasons))
}

/// GET /teams - teams that have played in a league.
pub async fn get_teams(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TeamsParams>,
) -> Result<Json<Vec<TeamInfo>>, ApiError> {
    let league_id = validate_teams(params)?;

    let teams = pitchrank_graph::queries::catalog::list_teams(&state.graph, league_id).await?;
    Ok(Json(teams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn seasons_requires_league_id() {
        let err = validate_seasons(SeasonsParams { league_id: None }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = validate_seasons(SeasonsParams {
            league_id: Some("  ".to_string()),
        })
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let league_id = validate_seasons(SeasonsParams {
            league_id: Some("1729".to_string()),
        })
        .unwrap();
        assert_eq!(league_id, "1729");
    }

    #[test]
    fn teams_requires_league_id() {
        let err = validate_teams(TeamsParams { league_id: None }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let league_id = validate_teams(TeamsParams {
            league_id: Some(1729),
        })
        .unwrap();
        assert_eq!(league_id, 1729);
    }
}

//! Match listing, point-read and registry handlers.

use axum::{extract::State, Json};
use pitchrank_core::matches::{MatchInput, MatchRef, MatchStats};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MatchListParams {
    #[serde(rename = "leagueID")]
    pub league_id: Option<i64>,
    pub season: Option<String>,
}

#[derive(Deserialize)]
pub struct MatchIdParams {
    #[serde(rename = "matchID")]
    pub match_id: Option<i64>,
}

/// Write payload for add/update. Fields are optional at the wire level so
/// a missing field yields the contract's 400, not a deserialization error.
#[derive(Deserialize)]
pub struct MatchPayload {
    #[serde(rename = "matchID")]
    pub match_id: Option<i64>,
    pub winner: Option<String>,
    pub loser: Option<String>,
    pub winner_goals: Option<i64>,
    pub loser_goals: Option<i64>,
    #[serde(rename = "leagueID")]
    pub league_id: Option<String>,
    pub season: Option<String>,
}

impl MatchPayload {
    fn into_input(self) -> Result<MatchInput, ApiError> {
        match (
            self.match_id,
            self.winner,
            self.loser,
            self.winner_goals,
            self.loser_goals,
            self.league_id,
            self.season,
        ) {
            (
                Some(match_id),
                Some(winner),
                Some(loser),
                Some(winner_goals),
                Some(loser_goals),
                Some(league_id),
                Some(season),
            ) => Ok(MatchInput {
                match_id,
                winner,
                loser,
                winner_goals,
                loser_goals,
                league_id,
                season,
            }),
            _ => Err(ApiError::bad_request("All fields are required")),
        }
    }
}

fn validate_match_list(params: MatchListParams) -> Result<(i64, String), ApiError> {
    match (params.league_id, params.season) {
        (Some(league_id), Some(season)) if !season.trim().is_empty() => Ok((league_id, season)),
        _ => Err(ApiError::bad_request(
            "Both 'leagueID' and 'season' parameters are required.",
        )),
    }
}

fn validate_match_stats(params: MatchIdParams) -> Result<i64, ApiError> {
    params
        .match_id
        .ok_or_else(|| ApiError::bad_request("Missing matchID parameter"))
}

fn validate_delete(params: MatchIdParams) -> Result<i64, ApiError> {
    params
        .match_id
        .ok_or_else(|| ApiError::bad_request("Match ID is required"))
}

/// GET /matches - match ids for a league season.
pub async fn get_matches(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MatchListParams>,
) -> Result<Json<Vec<MatchRef>>, ApiError> {
    let (league_id, season) = validate_match_list(params)?;

    let matches =
        pitchrank_graph::queries::matches::list_matches(&state.graph, league_id, &season).await?;
    Ok(Json(matches))
}

/// GET /match_stats - point-read one match.
pub async fn get_match_stats(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MatchIdParams>,
) -> Result<Json<MatchStats>, ApiError> {
    let match_id = validate_match_stats(params)?;

    let stats = pitchrank_graph::registry::match_stats(&state.graph, match_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Match not found"))?;

    Ok(Json(stats))
}

/// PUT /add_match - record a new match.
pub async fn add_match(
    State(state): State<AppState>,
    Json(payload): Json<MatchPayload>,
) -> Result<Json<Value>, ApiError> {
    let input = payload.into_input()?;

    pitchrank_graph::registry::add_match(&state.graph, &input).await?;

    Ok(Json(json!({ "message": "Match added successfully" })))
}

/// PUT /update_match - replace a match's edge (delete then insert).
pub async fn update_match(
    State(state): State<AppState>,
    Json(payload): Json<MatchPayload>,
) -> Result<Json<Value>, ApiError> {
    let input = payload.into_input()?;

    pitchrank_graph::registry::update_match(&state.graph, &input).await?;

    Ok(Json(json!({ "message": "Match updated successfully" })))
}

/// DELETE /delete_match - delete a match by id. Succeeds for unknown ids.
pub async fn delete_match(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MatchIdParams>,
) -> Result<Json<Value>, ApiError> {
    let match_id = validate_delete(params)?;

    pitchrank_graph::registry::delete_match(&state.graph, match_id).await?;

    Ok(Json(json!({ "message": "Match deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn full_payload() -> MatchPayload {
        MatchPayload {
            match_id: Some(999),
            winner: Some("ARS".to_string()),
            loser: Some("CHE".to_string()),
            winner_goals: Some(3),
            loser_goals: Some(1),
            league_id: Some("1729".to_string()),
            season: Some("2015/2016".to_string()),
        }
    }

    #[test]
    fn complete_payload_converts() {
        let input = full_payload().into_input().unwrap();
        assert_eq!(input.match_id, 999);
        assert_eq!(input.winner, "ARS");
        assert_eq!(input.loser, "CHE");
        assert_eq!(input.weight(), 2);
    }

    #[test]
    fn any_missing_field_is_rejected() {
        let mut p = full_payload();
        p.winner = None;
        assert!(p.into_input().is_err());

        let mut p = full_payload();
        p.season = None;
        assert!(p.into_input().is_err());

        let mut p = full_payload();
        p.loser_goals = None;
        assert!(p.into_input().is_err());
    }

    #[test]
    fn payload_accepts_wire_field_names() {
        let payload: MatchPayload = serde_json::from_value(json!({
            "matchID": 999,
            "winner": "ARS",
            "loser": "CHE",
            "winner_goals": 3,
            "loser_goals": 1,
            "leagueID": "1729",
            "season": "2015/2016"
        }))
        .unwrap();
        let input = payload.into_input().unwrap();
        assert_eq!(input.league_id, "1729");
        assert_eq!(input.score_differential(), 2);
    }

    #[test]
    fn match_list_requires_both_params() {
        let err = validate_match_list(MatchListParams {
            league_id: None,
            season: Some("2015/2016".to_string()),
        })
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = validate_match_list(MatchListParams {
            league_id: Some(1729),
            season: None,
        })
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = validate_match_list(MatchListParams {
            league_id: Some(1729),
            season: Some("   ".to_string()),
        })
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let (league_id, season) = validate_match_list(MatchListParams {
            league_id: Some(1729),
            season: Some("2015/2016".to_string()),
        })
        .unwrap();
        assert_eq!(league_id, 1729);
        assert_eq!(season, "2015/2016");
    }

    #[test]
    fn match_stats_requires_match_id() {
        let err = validate_match_stats(MatchIdParams { match_id: None }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let match_id = validate_match_stats(MatchIdParams {
            match_id: Some(999),
        })
        .unwrap();
        assert_eq!(match_id, 999);
    }

    #[test]
    fn delete_requires_match_id() {
        let err = validate_delete(MatchIdParams { match_id: None }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Match ID is required");

        assert_eq!(
            validate_delete(MatchIdParams {
                match_id: Some(123456)
            })
            .unwrap(),
            123456
        );
    }
}

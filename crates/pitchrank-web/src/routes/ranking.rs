//! Ranking route handler.

use axum::{extract::State, Json};
use pitchrank_core::ranking::RankedTeam;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RankingParams {
    #[serde(rename = "leagueID")]
    pub league_id: Option<i64>,
    pub season: Option<String>,
}

fn validate(params: RankingParams) -> Result<(i64, String), ApiError> {
    match (params.league_id, params.season) {
        (Some(league_id), Some(season)) if league_id > 0 && !season.trim().is_empty() => {
            Ok((league_id, season))
        }
        _ => Err(ApiError::bad_request(
            "Both 'leagueID' and 'season' parameters are required.",
        )),
    }
}

/// GET /ranking - teams of a league season ranked by PageRank.
pub async fn get_ranking(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RankingParams>,
) -> Result<Json<Vec<RankedTeam>>, ApiError> {
    let (league_id, season) = validate(params)?;

    let ranked = pitchrank_graph::rank_teams(&state.graph, league_id, &season).await?;

    Ok(Json(ranked))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_either_param_is_rejected() {
        assert!(validate(RankingParams {
            league_id: None,
            season: Some("2015/2016".to_string())
        })
        .is_err());
        assert!(validate(RankingParams {
            league_id: Some(1729),
            season: None
        })
        .is_err());
        assert!(validate(RankingParams {
            league_id: Some(0),
            season: Some("2015/2016".to_string())
        })
        .is_err());
    }

    #[test]
    fn valid_params_pass_through() {
        let (league_id, season) = validate(RankingParams {
            league_id: Some(1729),
            season: Some("2015/2016".to_string()),
        })
        .unwrap();
        assert_eq!(league_id, 1729);
        assert_eq!(season, "2015/2016");
    }
}

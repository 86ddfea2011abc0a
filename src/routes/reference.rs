use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;
use crate::models::{
    LeaguesResponse, PositionAverage, PositionComparisonResponse, PositionsResponse, TeamsResponse,
};

// Query parameters for position comparison
#[derive(Deserialize)]
pub struct PositionComparisonQuery {
    position: String,
}

// GET /api/teams - Team names present in the catalog
pub async fn get_teams(State(state): State<AppState>) -> Json<TeamsResponse> {
    Json(TeamsResponse {
        teams: state.catalog.teams(),
    })
}

// GET /api/positions - Position codes present in the catalog
pub async fn get_positions(State(state): State<AppState>) -> Json<PositionsResponse> {
    Json(PositionsResponse {
        positions: state.catalog.positions(),
    })
}

// GET /api/leagues - Leagues covered by the dataset
pub async fn get_leagues(State(state): State<AppState>) -> Json<LeaguesResponse> {
    Json(LeaguesResponse {
        leagues: state.catalog.leagues.clone(),
    })
}

// GET /api/position-comparison?position=RB - Position group summary and its players
pub async fn get_position_comparison(
    State(state): State<AppState>,
    params: Result<Query<PositionComparisonQuery>, QueryRejection>,
) -> Result<Json<PositionComparisonResponse>, ApiError> {
    let Query(params) = params?;

    let stat = state
        .catalog
        .position_stat(&params.position)
        .ok_or(ApiError::NotFound)?;

    Ok(Json(PositionComparisonResponse {
        position: stat.position.clone(),
        total_players: stat.players,
        position_average: PositionAverage {
            overall_score: stat.average_score,
        },
        players: state.catalog.players_at(&stat.position),
    }))
}

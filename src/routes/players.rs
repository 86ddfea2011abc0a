use axum::{
    extract::{rejection::{PathRejection, QueryRejection}, Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;
use crate::models::{Player, PlayersResponse};
use crate::query::{self, Page, PlayerFilter, PlayerQuery};

// Query parameters for listing players
#[derive(Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    offset: Option<i64>,
}

impl TryFrom<ListPlayersQuery> for PlayerQuery {
    type Error = query::QueryError;

    fn try_from(params: ListPlayersQuery) -> Result<Self, Self::Error> {
        Ok(PlayerQuery {
            filter: PlayerFilter::new(params.position, params.team),
            page: Page::from_params(params.limit, params.offset)?,
        })
    }
}

// GET /api/players?position=RB&team=SL%20Benfica&limit=50&offset=0 - List players
pub async fn get_players(
    State(state): State<AppState>,
    params: Result<Query<ListPlayersQuery>, QueryRejection>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let Query(params) = params?;
    let query = PlayerQuery::try_from(params)?;

    tracing::debug!(
        position = ?query.filter.position,
        team = ?query.filter.team,
        limit = query.page.limit,
        offset = query.page.offset,
        "Listing players"
    );

    Ok(Json(query::list_players(&state.catalog.players, &query)))
}

// GET /api/players/:id - Get player by ID
pub async fn get_player_by_id(
    State(state): State<AppState>,
    player_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(player_id) = player_id?;

    let player = state
        .catalog
        .player(player_id)
        .cloned()
        .ok_or(ApiError::NotFound)?;

    Ok(Json(player))
}

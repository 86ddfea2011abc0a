use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::catalog::Catalog;
use crate::error::{self, ApiError};

pub mod dashboard;
pub mod health;
pub mod players;
pub mod reference;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, environment: &str) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            environment: Arc::from(environment),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Root and health
        .route("/", get(health::root))
        .route("/health", get(health::health_check))

        // Player endpoints
        .route("/api/players", get(players::get_players))
        .route("/api/players/{id}", get(players::get_player_by_id))

        // Dashboard payloads
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/top-performers", get(dashboard::get_top_performers))
        .route("/api/mental-nuclei", get(dashboard::get_mental_nuclei))

        // Filter options for the frontend
        .route("/api/teams", get(reference::get_teams))
        .route("/api/positions", get(reference::get_positions))
        .route("/api/leagues", get(reference::get_leagues))
        .route("/api/position-comparison", get(reference::get_position_comparison))

        .fallback(|| async { ApiError::NotFound })
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .with_state(state)
}


#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Router};
    use tower_http::catch_panic::CatchPanicLayer;

    use super::test_support::{app, get_json};
    use crate::error;

    async fn boom() -> &'static str {
        panic!("catalog index out of bounds")
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (status, body) = get_json(app(), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Resource not found");
    }

    #[tokio::test]
    async fn panicking_handler_becomes_generic_500() {
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(error::handle_panic));

        let (status, body) = get_json(app, "/boom").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }
}

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;
use crate::models::{DashboardResponse, MentalNucleiResponse, TopPerformersResponse};
use crate::query;

const DEFAULT_TOP_PERFORMERS: usize = 10;

// Query parameters for the leaderboard
#[derive(Deserialize)]
pub struct TopPerformersQuery {
    #[serde(default)]
    pub limit: Option<i64>,
    // Exact position code, e.g. "CB"
    #[serde(default)]
    pub position: Option<String>,
}

// GET /api/dashboard - Landing page payload
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let catalog = &state.catalog;

    Json(DashboardResponse {
        system_status: catalog.system_status.clone(),
        mental_nuclei_overview: catalog.nuclei.clone(),
        top_performers: catalog.top_performers.clone(),
        position_stats: catalog.position_stats.clone(),
        recent_activity: catalog.recent_activity.clone(),
    })
}

// GET /api/top-performers?limit=10&position=CB - Ranked leaderboard
pub async fn get_top_performers(
    State(state): State<AppState>,
    params: Result<Query<TopPerformersQuery>, QueryRejection>,
) -> Result<Json<TopPerformersResponse>, ApiError> {
    let Query(params) = params?;
    let limit = query::non_negative("limit", params.limit, DEFAULT_TOP_PERFORMERS)?;
    let position = params.position.filter(|p| !p.is_empty());

    let top_performers = state
        .catalog
        .top_performers
        .iter()
        .filter(|p| position.as_deref().is_none_or(|pos| p.position == pos))
        .take(limit)
        .cloned()
        .collect();

    Ok(Json(TopPerformersResponse { top_performers }))
}

// GET /api/mental-nuclei - Per-nucleus averages and their components
pub async fn get_mental_nuclei(State(state): State<AppState>) -> Json<MentalNucleiResponse> {
    Json(MentalNucleiResponse {
        mental_nuclei: state.catalog.nuclei.clone(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{app, get_json};

    fn ranks(body: &serde_json::Value) -> Vec<u64> {
        body["top_performers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["rank"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn dashboard_has_every_section() {
        let (status, body) = get_json(app(), "/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["system_status"]["total_players"], 486);
        assert_eq!(body["system_status"]["status"], "Active");
        assert_eq!(body["mental_nuclei_overview"].as_object().unwrap().len(), 8);
        assert_eq!(body["top_performers"].as_array().unwrap().len(), 5);
        assert!(body["position_stats"].is_array());
        assert_eq!(body["recent_activity"][0]["action"], "Data loaded successfully");
    }

    #[tokio::test]
    async fn top_performers_default_and_limit() {
        let (_, body) = get_json(app(), "/api/top-performers").await;
        assert_eq!(ranks(&body), vec![1, 2, 3, 4, 5]);

        let (_, body) = get_json(app(), "/api/top-performers?limit=2&season=2023%2F2024").await;
        assert_eq!(ranks(&body), vec![1, 2]);
        assert_eq!(body["top_performers"][1]["name"], "David López");
    }

    #[tokio::test]
    async fn top_performers_by_position() {
        let (_, body) = get_json(app(), "/api/top-performers?position=CB").await;
        assert_eq!(ranks(&body), vec![4]);
        assert_eq!(body["top_performers"][0]["team"], "Sporting CP");
    }

    #[tokio::test]
    async fn top_performers_rejects_negative_limit() {
        let (status, _) = get_json(app(), "/api/top-performers?limit=-5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mental_nuclei_overview() {
        let (status, body) = get_json(app(), "/api/mental-nuclei").await;
        assert_eq!(status, StatusCode::OK);

        let resilience = &body["mental_nuclei"]["resilience_recovery"];
        assert_eq!(resilience["name"], "Resilience & Recovery");
        assert_eq!(resilience["average"], 83.2);
        assert_eq!(
            resilience["components"],
            serde_json::json!(["Recovery Speed", "Error Bounce Back"])
        );
    }
}

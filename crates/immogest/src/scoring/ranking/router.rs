use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AgencyEntry, RankingPeriod};
use super::repository::{RankingRepository, RepositoryError, RewardNotifier};
use super::service::{RankingService, RankingServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct RunCampaignRequest {
    pub(crate) period: String,
    /// Campaign date; defaults to today so reward validity anchors correctly.
    #[serde(default)]
    pub(crate) generated_on: Option<NaiveDate>,
    pub(crate) agencies: Vec<AgencyEntry>,
}

/// Router builder exposing the ranking campaign endpoints.
pub fn ranking_router<R, N>(service: Arc<RankingService<R, N>>) -> Router
where
    R: RankingRepository + 'static,
    N: RewardNotifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/agencies/rankings",
            post(run_campaign_handler::<R, N>),
        )
        .route(
            "/api/v1/agencies/rankings/latest",
            get(latest_handler::<R, N>),
        )
        .route(
            "/api/v1/agencies/rankings/:period",
            get(period_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn run_campaign_handler<R, N>(
    State(service): State<Arc<RankingService<R, N>>>,
    axum::Json(request): axum::Json<RunCampaignRequest>,
) -> Response
where
    R: RankingRepository + 'static,
    N: RewardNotifier + 'static,
{
    let RunCampaignRequest {
        period,
        generated_on,
        agencies,
    } = request;
    let generated_on = generated_on.unwrap_or_else(|| Local::now().date_naive());

    match service.run(RankingPeriod(period), generated_on, agencies) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(RankingServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "ranking already recorded for this period",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn period_handler<R, N>(
    State(service): State<Arc<RankingService<R, N>>>,
    Path(period): Path<String>,
) -> Response
where
    R: RankingRepository + 'static,
    N: RewardNotifier + 'static,
{
    let period = RankingPeriod(period);
    match service.get(&period) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(RankingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "period": period.0,
                "error": "no ranking recorded for this period",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_handler<R, N>(
    State(service): State<Arc<RankingService<R, N>>>,
) -> Response
where
    R: RankingRepository + 'static,
    N: RewardNotifier + 'static,
{
    match service.latest() {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(RankingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "no ranking campaign has run yet",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use immogest::scoring::agency::{
    compute_agency_score, compute_owner_satisfaction, compute_tenant_satisfaction, AgencyMetrics,
};
use immogest::scoring::ranking::{
    ranking_router, RankingRepository, RankingService, RewardNotifier,
};
use immogest::scoring::standing::{evaluate_standing, RoomEvaluation, RoomRecord, StandingTier};

#[derive(Debug, Deserialize)]
pub(crate) struct StandingRequest {
    pub(crate) rooms: Vec<RoomRecord>,
    /// Include the per-room component breakdown in the response.
    #[serde(default)]
    pub(crate) include_rooms: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct StandingResponse {
    pub(crate) tier: StandingTier,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
    pub(crate) average_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rooms: Option<Vec<RoomEvaluation>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SatisfactionRequest {
    pub(crate) renewal_rate: f64,
    pub(crate) complaint_rate: f64,
    pub(crate) average_stay_months: f64,
    pub(crate) payment_punctuality: f64,
    pub(crate) communication_score: f64,
    pub(crate) retention_rate: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct SatisfactionResponse {
    pub(crate) tenant_satisfaction: f64,
    pub(crate) owner_satisfaction: f64,
}

pub(crate) fn with_scoring_routes<R, N>(service: Arc<RankingService<R, N>>) -> axum::Router
where
    R: RankingRepository + 'static,
    N: RewardNotifier + 'static,
{
    ranking_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/properties/standing",
            axum::routing::post(standing_endpoint),
        )
        .route(
            "/api/v1/agencies/score",
            axum::routing::post(agency_score_endpoint),
        )
        .route(
            "/api/v1/agencies/satisfaction",
            axum::routing::post(satisfaction_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn standing_endpoint(
    Json(payload): Json<StandingRequest>,
) -> Json<StandingResponse> {
    let evaluation = evaluate_standing(&payload.rooms);

    Json(StandingResponse {
        tier: evaluation.tier,
        label: evaluation.tier.label(),
        description: evaluation.tier.description(),
        average_score: evaluation.average_score,
        rooms: payload.include_rooms.then_some(evaluation.rooms),
    })
}

pub(crate) async fn agency_score_endpoint(
    Json(metrics): Json<AgencyMetrics>,
) -> Json<serde_json::Value> {
    Json(json!({ "score": compute_agency_score(&metrics) }))
}

pub(crate) async fn satisfaction_endpoint(
    Json(payload): Json<SatisfactionRequest>,
) -> Json<SatisfactionResponse> {
    let tenant_satisfaction = compute_tenant_satisfaction(
        payload.renewal_rate,
        payload.complaint_rate,
        payload.average_stay_months,
    );
    let owner_satisfaction = compute_owner_satisfaction(
        payload.payment_punctuality,
        payload.communication_score,
        payload.retention_rate,
    );

    Json(SatisfactionResponse {
        tenant_satisfaction,
        owner_satisfaction,
    })
}

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::scoring::ranking::router::{
    run_campaign_handler, period_handler, RunCampaignRequest,
};
use crate::scoring::ranking::{ranking_router, RankingService};

fn run_request() -> RunCampaignRequest {
    RunCampaignRequest {
        period: "2026-S1".to_string(),
        generated_on: Some(campaign_date()),
        agencies: sample_entries(),
    }
}

#[tokio::test]
async fn run_campaign_handler_creates_a_record() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = run_campaign_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::Json(run_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn run_campaign_handler_returns_conflict_on_duplicate_period() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let first = run_campaign_handler::<MemoryRepository, MemoryNotifier>(
        State(service.clone()),
        axum::Json(run_request()),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = run_campaign_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::Json(run_request()),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn run_campaign_handler_reports_storage_failures() {
    let service = Arc::new(RankingService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    ));

    let response = run_campaign_handler::<UnavailableRepository, MemoryNotifier>(
        State(service),
        axum::Json(run_request()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn period_handler_reports_missing_periods() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);

    let response = period_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::extract::Path("1999-S1".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ranking_routes_accept_campaign_payloads() {
    let (service, _, _) = build_service();
    let router = ranking_router(Arc::new(service));

    let body = serde_json::json!({
        "period": "2026-S1",
        "generated_on": "2026-06-30",
        "agencies": [
            {
                "agency_id": "ag-alpha",
                "name": "Agence Alpha",
                "metrics": {
                    "total_properties": 100,
                    "total_contracts": 50,
                    "rent_collection_rate": 100.0,
                    "tenant_satisfaction": 100.0,
                    "owner_satisfaction": 100.0
                }
            }
        ]
    });

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/agencies/rankings")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&body).expect("payload serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);

    let fetched = router
        .oneshot(
            axum::http::Request::get("/api/v1/agencies/rankings/2026-S1")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(fetched.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(fetched.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let payload: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(payload["standings"][0]["rank"], 1);
    assert_eq!(payload["standings"][0]["score"], 100.0);
}

use crate::infra::{assess_validated, AppState};
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use ivf_navigator::error::AppError;
use ivf_navigator::navigator::{
    ClinicalInputs, Domain, EvaluationRecord, RecommendationSection, RiskBucket, ScoreEntry,
};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) scores: Vec<ScoreEntry>,
    pub(crate) overall_bucket: RiskBucket,
    pub(crate) primary_limiting_domain: Domain,
    pub(crate) sections: Vec<RecommendationSection>,
    pub(crate) record: EvaluationRecord,
}

pub(crate) fn navigator_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/navigator/assessments", post(assessment_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

pub(crate) async fn assessment_endpoint(
    payload: Result<Json<ClinicalInputs>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let Json(inputs) = payload?;
    let assessment = assess_validated(&inputs)?;
    let record = EvaluationRecord::from_assessment(&assessment, Utc::now());

    Ok(Json(AssessmentResponse {
        scores: assessment.scores.entries(),
        overall_bucket: assessment.overall_bucket,
        primary_limiting_domain: assessment.primary_domain,
        sections: assessment.sections,
        record,
    }))
}

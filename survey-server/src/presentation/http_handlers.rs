use axum::{Json, Router, routing::get};
use serde::Serialize;

use super::AppState;
use super::handlers::{samples, surveyors};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .nest("/v1", v1_router())
        .with_state(state)
}

fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/surveyors", get(surveyors::get_surveyors))
        .route("/samples", get(samples::get_samples))
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

use axum::{
    Router,
    routing::{get, post},
};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/exam/submit", post(handlers::exam::submit))
        .route("/result/{student_id}", get(handlers::results::list))
        .route("/mcq/generate", post(handlers::mcq::generate))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}

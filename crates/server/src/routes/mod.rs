pub mod analyze;
pub mod health;
pub mod metrics;
mod patient;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

/// Build the relay routes
pub fn relay_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(patient::create))
        .route("/search", get(patient::search))
        .route("/analyze", post(analyze::analyze))
}

//! xray-relay library crate
//!
//! Exposes `build_app`, `AppState` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
pub mod db;
mod error;
mod middleware;
mod routes;
pub mod upstream;

use std::sync::Arc;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::ImageStore;
use upstream::{FhirClient, PredictionClient};

/// Shared handler state: the image store and the two upstream clients
#[derive(Clone)]
pub struct AppState {
    pub images: Arc<dyn ImageStore>,
    pub fhir: FhirClient,
    pub prediction: PredictionClient,
}

impl AppState {
    /// Wire upstream clients from configuration around an image store
    pub fn new(images: Arc<dyn ImageStore>, config: &Config) -> Self {
        Self {
            images,
            fhir: FhirClient::new(config.fhir_base_url.clone()),
            prediction: PredictionClient::new(&config.prediction_base_url),
        }
    }
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(state: AppState, config: &Config) -> Router {
    let prometheus_handle = middleware::metrics::install_recorder();

    // Service routes
    let public_routes = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    Router::new()
        .merge(public_routes)
        .merge(routes::relay_routes())
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}

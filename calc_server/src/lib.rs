//! # calc_server - Projel HTTP API
//!
//! Exposes the `calc_core` calculators over HTTP for the project frontend.
//! The service is stateless: every request is answered from its body alone,
//! so any number of requests can run concurrently.
//!
//! ## Routes
//!
//! - `GET /` - banner
//! - `GET {prefix}/system/health`, `GET {prefix}/system/version`
//! - `POST {prefix}/cargas/calcular-minimo-nbr` - NBR 5410 minimum loads
//! - `POST {prefix}/propostas/analisar-rascunho` - circuit proposal analysis

pub mod config;
pub mod dto;
pub mod error;
pub mod logging;
pub mod routes;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use chrono::{DateTime, Utc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

pub use config::ServerConfig;
pub use error::{ApiError, Result};

/// Shared, read-only state of the service
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            started_at: Utc::now(),
        }
    }
}

/// Build the full router for a validated configuration.
pub fn build_router(config: ServerConfig) -> Router {
    let cors = cors_layer(&config);
    let state = Arc::new(AppState::new(config));

    Router::new()
        .route("/", get(routes::system::root))
        .nest(&state.config.api_prefix, routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

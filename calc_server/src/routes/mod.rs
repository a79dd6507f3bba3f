//! Route table of the API
//!
//! Paths below are mounted under the configured `api_prefix`.

pub mod loads;
pub mod proposals;
pub mod system;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/system/health", get(system::health))
        .route("/system/version", get(system::version))
        .route("/cargas/calcular-minimo-nbr", post(loads::minimum_load))
        .route("/propostas/analisar-rascunho", post(proposals::analyze_draft))
}

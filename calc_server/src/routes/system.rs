//! Service status endpoints

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Engine identifier reported by `/system/version`
pub const ENGINE_NAME: &str = "NBR5410-Stateless";

/// GET /
pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "message": format!("{} is running.", state.config.project_name)
    }))
}

/// GET {prefix}/system/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let uptime = chrono::Utc::now() - state.started_at;
    Json(json!({
        "status": "ok",
        "service": state.config.project_name,
        "uptime_seconds": uptime.num_seconds(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET {prefix}/system/version
pub async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "engine": ENGINE_NAME
    }))
}

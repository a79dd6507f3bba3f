//! API integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use calc_server::{build_router, ServerConfig};
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn test_router() -> Router {
    build_router(ServerConfig::default())
}

/// Helper to make JSON requests
async fn json_request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(json) => builder.body(Body::from(serde_json::to_string(&json).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&body_bytes) }))
    };

    (status, body)
}

async fn forecast(app: &Router, body: Value) -> (StatusCode, Value) {
    json_request(app, "POST", "/api/v1/cargas/calcular-minimo-nbr", Some(body)).await
}

#[tokio::test]
async fn test_root_banner() {
    let app = test_router();
    let (status, body) = json_request(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "PROJEL API is running.");
}

#[tokio::test]
async fn test_health_check() {
    let app = test_router();
    let (status, body) = json_request(&app, "GET", "/api/v1/system/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "PROJEL API");
    assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn test_version() {
    let app = test_router();
    let (status, body) = json_request(&app, "GET", "/api/v1/system/version", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["engine"], "NBR5410-Stateless");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_minimum_load_forecast() {
    let app = test_router();
    let (status, body) = forecast(&app, json!({ "area": 10.0, "perimetro": 14.0, "eh_cozinha_servico": false })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["norma_iluminacao_va"], 160.0);
    assert_eq!(body["norma_tugs_quantidade"], 3);
}

#[tokio::test]
async fn test_minimum_load_wet_area() {
    let app = test_router();
    let (status, body) = forecast(&app, json!({ "area": 14.0, "perimetro": 7.0, "eh_cozinha_servico": true })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["norma_iluminacao_va"], 220.0);
    assert_eq!(body["norma_tugs_quantidade"], 2);
}

#[tokio::test]
async fn test_minimum_load_empty_body_uses_defaults() {
    let app = test_router();
    let (status, body) = forecast(&app, json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["norma_iluminacao_va"], 100.0);
    assert_eq!(body["norma_tugs_quantidade"], 1);
}

#[tokio::test]
async fn test_minimum_load_numeric_flag_and_nulls() {
    let app = test_router();
    let (status, body) = forecast(&app, json!({ "area": null, "perimetro": 10.0, "eh_cozinha_servico": 1 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["norma_iluminacao_va"], 100.0);
    // wet: 10 / 3.5 = 2 full spans + fraction
    assert_eq!(body["norma_tugs_quantidade"], 3);
}

#[tokio::test]
async fn test_minimum_load_rejects_non_numeric() {
    let app = test_router();
    let (status, _) = forecast(&app, json!({ "area": "dez" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_minimum_load_huge_values_stay_numeric() {
    let app = test_router();
    let (status, body) = forecast(&app, json!({ "area": 1e308, "perimetro": 1e308, "eh_cozinha_servico": true })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["norma_iluminacao_va"].as_f64(), Some(f64::MAX));
    assert_eq!(body["norma_tugs_quantidade"], u32::MAX);
}

#[tokio::test]
async fn test_analyze_accepts_space_separated_timestamp() {
    let app = test_router();
    let request = json!({
        "cargas_selecionadas": [
            { "id": "c1", "nome": "Tomada", "potencia_va": 100.0, "potencia_w": 100.0,
              "data_criacao": "2025-03-01 10:00:00" }
        ]
    });

    let (status, body) = json_request(&app, "POST", "/api/v1/propostas/analisar-rascunho", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valida"], true);
}

#[tokio::test]
async fn test_minimum_load_is_idempotent() {
    let app = test_router();
    let request = json!({ "area": 23.7, "perimetro": 19.4, "eh_cozinha_servico": true });

    let first = forecast(&app, request.clone()).await;
    let second = forecast(&app, request).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_analyze_proposal_with_alerts() {
    let app = test_router();
    let request = json!({
        "cargas_selecionadas": [
            { "id": "c1", "nome": "Lustre", "tipo": "ILUMINACAO", "potencia_va": 100.0, "potencia_w": 100.0,
              "local_id": "sala", "zona_id": "z1" },
            { "id": "c2", "nome": "Tomada", "tipo": "TUG", "potencia_va": 600.0, "potencia_w": 540.0,
              "local_id": "cozinha", "zona_id": "z2", "data_criacao": "2025-03-01T10:00:00" }
        ],
        "zonas_do_projeto": [
            { "id": "z1", "nome": "Social", "tipo_zona": "residencial" },
            { "id": "z2", "nome": "Molhada", "tipo_zona": "residencial" }
        ]
    });

    let (status, body) = json_request(&app, "POST", "/api/v1/propostas/analisar-rascunho", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valida"], true);
    assert_eq!(body["potencia_total_va"], 700.0);
    assert_eq!(body["potencia_total_w"], 640.0);
    assert_eq!(body["locais_envolvidos_ids"], json!(["cozinha", "sala"]));
    assert_eq!(body["zonas_envolvidas_ids"], json!(["z1", "z2"]));
    assert_eq!(body["codigos_alertas"], json!(["MIXED_ZONES", "LIGHTING_WITH_OUTLETS"]));

    let alerts = body["alertas_normativos"].as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].as_str().unwrap().contains("Social, Molhada"));
}

#[tokio::test]
async fn test_analyze_empty_proposal() {
    let app = test_router();
    let request = json!({ "cargas_selecionadas": [], "zonas_do_projeto": [] });

    let (status, body) = json_request(&app, "POST", "/api/v1/propostas/analisar-rascunho", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valida"], false);
    assert_eq!(body["potencia_total_va"], 0.0);
    assert_eq!(body["codigos_alertas"], json!(["EMPTY_PROPOSAL"]));
}

#[tokio::test]
async fn test_analyze_rejects_invalid_load() {
    let app = test_router();
    let request = json!({
        "cargas_selecionadas": [
            { "id": "c1", "nome": "Tomada", "potencia_va": 0.0, "potencia_w": 10.0 }
        ]
    });

    let (status, body) = json_request(&app, "POST", "/api/v1/propostas/analisar-rascunho", Some(request)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert_eq!(body["status"], 422);
    assert!(body["error"].as_str().unwrap().contains("potencia_va"));
}

#[tokio::test]
async fn test_custom_api_prefix() {
    let config = ServerConfig {
        api_prefix: "/projel".to_string(),
        ..ServerConfig::default()
    };
    let app = build_router(config);

    let (status, body) = json_request(&app, "POST", "/projel/cargas/calcular-minimo-nbr", Some(json!({ "area": 6.0 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["norma_iluminacao_va"], 100.0);

    let (status, _) = json_request(&app, "GET", "/api/v1/system/health", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_restricted_cors_origins_still_serve() {
    let config = ServerConfig {
        cors_origins: vec!["http://localhost:5173".to_string()],
        ..ServerConfig::default()
    };
    let app = build_router(config);

    let (status, _) = json_request(&app, "GET", "/api/v1/system/version", None).await;
    assert_eq!(status, StatusCode::OK);
}

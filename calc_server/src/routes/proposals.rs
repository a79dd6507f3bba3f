//! Circuit proposal endpoints

use axum::Json;
use tracing::{debug, info};

use crate::dto::{ProposalAnalysisRequest, ProposalAnalysisResponse};
use crate::error::Result;

/// POST {prefix}/propostas/analisar-rascunho
///
/// Rejects loads that break the field constraints (422); an empty selection
/// is not an error and comes back with `is_valida = false`.
pub async fn analyze_draft(
    Json(request): Json<ProposalAnalysisRequest>,
) -> Result<Json<ProposalAnalysisResponse>> {
    request.validate()?;

    let analysis = request.analyze();

    if analysis.has_alerts() {
        info!(
            loads = request.loads.len(),
            alerts = ?analysis.alerts.iter().map(|a| a.code()).collect::<Vec<_>>(),
            "proposal analyzed with alerts"
        );
    } else {
        debug!(loads = request.loads.len(), "proposal analyzed");
    }

    Ok(Json(analysis.into()))
}

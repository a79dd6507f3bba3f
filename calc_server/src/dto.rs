//! Wire types of the HTTP API
//!
//! Field names follow the project frontend (pt-BR). Conversion into and out
//! of the `calc_core` types happens here so handlers stay one-liners.

use calc_core::calculations::{ForecastInput, MinimumLoadResult, ProposalAnalysis};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /cargas/calcular-minimo-nbr`.
///
/// Every field is optional and `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimumLoadRequest {
    /// Floor area (m²)
    #[serde(default)]
    pub area: Option<f64>,

    /// Perimeter (m)
    #[serde(default)]
    pub perimetro: Option<f64>,

    /// Kitchen/service area flag; `true`/`false` or a number (non-zero = true)
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub eh_cozinha_servico: Option<bool>,
}

impl From<MinimumLoadRequest> for ForecastInput {
    fn from(request: MinimumLoadRequest) -> Self {
        ForecastInput {
            area_m2: request.area,
            perimeter_m: request.perimetro,
            is_wet_area: request.eh_cozinha_servico,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Number(f64),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<FlagValue> = Option::deserialize(deserializer)?;
    Ok(value.map(|flag| match flag {
        FlagValue::Bool(b) => b,
        FlagValue::Number(n) => n != 0.0,
    }))
}

/// Response of `POST /cargas/calcular-minimo-nbr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumLoadResponse {
    pub norma_iluminacao_va: f64,
    pub norma_tugs_quantidade: u32,
}

impl From<MinimumLoadResult> for MinimumLoadResponse {
    fn from(result: MinimumLoadResult) -> Self {
        MinimumLoadResponse {
            norma_iluminacao_va: result.lighting_power_va,
            norma_tugs_quantidade: result.outlet_count,
        }
    }
}

/// Body of `POST /propostas/analisar-rascunho`; shared with the CLI's file format.
pub use calc_core::calculations::ProposalDraft as ProposalAnalysisRequest;

/// Response of `POST /propostas/analisar-rascunho`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalAnalysisResponse {
    pub potencia_total_va: f64,
    pub potencia_total_w: f64,
    pub locais_envolvidos_ids: Vec<String>,
    pub zonas_envolvidas_ids: Vec<String>,
    pub alertas_normativos: Vec<String>,
    /// Alert codes, index-aligned with `alertas_normativos`
    pub codigos_alertas: Vec<String>,
    pub is_valida: bool,
}

impl From<ProposalAnalysis> for ProposalAnalysisResponse {
    fn from(analysis: ProposalAnalysis) -> Self {
        ProposalAnalysisResponse {
            alertas_normativos: analysis.alert_messages(),
            codigos_alertas: analysis
                .alerts
                .iter()
                .map(|alert| alert.code().to_string())
                .collect(),
            potencia_total_va: analysis.total_power_va,
            potencia_total_w: analysis.total_power_w,
            locais_envolvidos_ids: analysis.room_ids,
            zonas_envolvidas_ids: analysis.zone_ids,
            is_valida: analysis.is_valid,
        }
    }
}

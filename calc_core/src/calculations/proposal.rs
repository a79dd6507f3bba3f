//! # Circuit Proposal Analysis
//!
//! Before a circuit is created, the designer groups a selection of loads
//! into a *proposal*. The analyzer sums the grouped power, derives which
//! rooms and zones the proposal touches, and raises NBR 5410 alerts about
//! the grouping.
//!
//! Alerts are advisory: a non-empty proposal is always valid, even when it
//! carries alerts. Only an empty proposal is invalid.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::proposal::{analyze_proposal, ProposalAlert};
//! use calc_core::loads::{Load, LoadKind};
//! use calc_core::zones::Zone;
//!
//! let loads = vec![
//!     Load::new("1", "Lamp", LoadKind::Lighting, 100.0, 100.0).in_zone("z1"),
//!     Load::new("2", "Outlet", LoadKind::GeneralOutlet, 600.0, 540.0).in_zone("z1"),
//! ];
//! let zones = vec![Zone::new("z1", "Social")];
//!
//! let analysis = analyze_proposal(&loads, &zones);
//! assert!(analysis.is_valid);
//! assert_eq!(analysis.total_power_va, 700.0);
//! assert_eq!(analysis.alerts, vec![ProposalAlert::LightingWithOutlets]);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::clauses::NormClause;
use crate::errors::CalcResult;
use crate::loads::{Load, LoadKind};
use crate::zones::{find_zone, Zone};

/// Name used for zone ids that are not in the project's zone list
pub const UNKNOWN_ZONE_NAME: &str = "Desconhecida";

/// An advisory raised while analyzing a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ProposalAlert {
    /// The proposal has no loads
    EmptyProposal,
    /// Loads come from more than one zone
    MixedZones { zone_names: Vec<String> },
    /// Lighting and general-purpose outlets grouped together
    LightingWithOutlets,
    /// A specific-purpose load or motor shares the circuit with other loads
    SpecificLoadNotExclusive,
}

impl ProposalAlert {
    /// Stable code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ProposalAlert::EmptyProposal => "EMPTY_PROPOSAL",
            ProposalAlert::MixedZones { .. } => "MIXED_ZONES",
            ProposalAlert::LightingWithOutlets => "LIGHTING_WITH_OUTLETS",
            ProposalAlert::SpecificLoadNotExclusive => "SPECIFIC_LOAD_NOT_EXCLUSIVE",
        }
    }

    /// The clause behind the alert, if any
    pub fn clause(&self) -> Option<NormClause> {
        match self {
            ProposalAlert::LightingWithOutlets => Some(NormClause::CircuitSeparation),
            ProposalAlert::SpecificLoadNotExclusive => Some(NormClause::ExclusiveSpecificCircuit),
            ProposalAlert::EmptyProposal | ProposalAlert::MixedZones { .. } => None,
        }
    }

    /// Message shown to the designer (pt-BR, as the rest of the UI)
    pub fn message(&self) -> String {
        match self {
            ProposalAlert::EmptyProposal => {
                "Uma Proposta de Circuito deve conter pelo menos uma Carga.".to_string()
            }
            ProposalAlert::MixedZones { zone_names } => format!(
                "Mistura de Zonas: as cargas pertencem a zonas distintas ({}). \
                 O circuito final herdará as exigências da zona mais rigorosa.",
                zone_names.join(", ")
            ),
            ProposalAlert::LightingWithOutlets => format!(
                "Atenção ({}): recomenda-se circuitos independentes para iluminação e \
                 tomadas (exceções aplicam-se a locais específicos).",
                NormClause::CircuitSeparation.citation()
            ),
            ProposalAlert::SpecificLoadNotExclusive => format!(
                "Atenção ({}): equipamentos de uso específico (TUE) com corrente nominal \
                 superior a 10 A devem ter circuitos exclusivos e independentes.",
                NormClause::ExclusiveSpecificCircuit.citation()
            ),
        }
    }
}

/// Outcome of analyzing a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalAnalysis {
    /// Sum of the loads' apparent power (VA), rounded to 2 decimals
    pub total_power_va: f64,

    /// Sum of the loads' active power (W), rounded to 2 decimals
    pub total_power_w: f64,

    /// Distinct rooms touched, sorted
    pub room_ids: Vec<String>,

    /// Distinct zones touched, sorted
    pub zone_ids: Vec<String>,

    pub alerts: Vec<ProposalAlert>,

    /// False only for an empty proposal
    pub is_valid: bool,
}

impl ProposalAnalysis {
    fn empty() -> Self {
        ProposalAnalysis {
            total_power_va: 0.0,
            total_power_w: 0.0,
            room_ids: Vec::new(),
            zone_ids: Vec::new(),
            alerts: vec![ProposalAlert::EmptyProposal],
            is_valid: false,
        }
    }

    /// Alert messages in the order they were raised
    pub fn alert_messages(&self) -> Vec<String> {
        self.alerts.iter().map(ProposalAlert::message).collect()
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// A draft grouping of loads, as submitted by the frontend.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cargas_selecionadas": [
///     { "id": "c1", "nome": "Lustre", "tipo": "ILUMINACAO", "potencia_va": 100, "potencia_w": 100 }
///   ],
///   "zonas_do_projeto": [ { "id": "z1", "nome": "Social" } ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalDraft {
    /// Loads the designer wants to group
    #[serde(rename = "cargas_selecionadas")]
    pub loads: Vec<Load>,

    /// Project zones, used to name zones in alerts
    #[serde(rename = "zonas_do_projeto", default)]
    pub zones: Vec<Zone>,
}

impl ProposalDraft {
    /// Decode a draft from its JSON body.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every load's field constraints.
    pub fn validate(&self) -> CalcResult<()> {
        self.loads.iter().try_for_each(Load::validate)
    }

    pub fn analyze(&self) -> ProposalAnalysis {
        analyze_proposal(&self.loads, &self.zones)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Analyze a selection of loads grouped into one circuit proposal.
///
/// `zones` is the project's zone list, used only to name the zones in a
/// mixed-zone alert.
pub fn analyze_proposal(loads: &[Load], zones: &[Zone]) -> ProposalAnalysis {
    if loads.is_empty() {
        return ProposalAnalysis::empty();
    }

    let mut total_va = 0.0;
    let mut total_w = 0.0;
    let mut room_ids = BTreeSet::new();
    let mut zone_ids = BTreeSet::new();
    let mut has_lighting = false;
    let mut has_general_outlet = false;
    let mut has_specific = false;

    for load in loads {
        total_va += load.power_va;
        total_w += load.power_w;

        if let Some(room) = load.room_id.as_deref().filter(|id| !id.is_empty()) {
            room_ids.insert(room.to_string());
        }
        if let Some(zone) = load.zone_id.as_deref().filter(|id| !id.is_empty()) {
            zone_ids.insert(zone.to_string());
        }

        has_lighting |= load.kind == LoadKind::Lighting;
        has_general_outlet |= load.kind == LoadKind::GeneralOutlet;
        has_specific |= load.kind.requires_exclusive_circuit();
    }

    let mut alerts = Vec::new();

    if zone_ids.len() > 1 {
        let zone_names = zone_ids
            .iter()
            .map(|id| {
                find_zone(zones, id)
                    .map(|zone| zone.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ZONE_NAME.to_string())
            })
            .collect();
        alerts.push(ProposalAlert::MixedZones { zone_names });
    }

    if has_lighting && has_general_outlet {
        alerts.push(ProposalAlert::LightingWithOutlets);
    }

    if has_specific && loads.len() > 1 {
        alerts.push(ProposalAlert::SpecificLoadNotExclusive);
    }

    ProposalAnalysis {
        total_power_va: round2(total_va),
        total_power_w: round2(total_w),
        room_ids: room_ids.into_iter().collect(),
        zone_ids: zone_ids.into_iter().collect(),
        alerts,
        is_valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp(id: &str) -> Load {
        Load::new(id, "Lamp", LoadKind::Lighting, 100.0, 100.0)
    }

    fn outlet(id: &str) -> Load {
        Load::new(id, "Outlet", LoadKind::GeneralOutlet, 100.0, 80.0)
    }

    #[test]
    fn test_empty_proposal_is_invalid() {
        let analysis = analyze_proposal(&[], &[]);
        assert!(!analysis.is_valid);
        assert_eq!(analysis.total_power_va, 0.0);
        assert_eq!(analysis.alerts, vec![ProposalAlert::EmptyProposal]);
        assert!(analysis.room_ids.is_empty());
    }

    #[test]
    fn test_totals_are_summed_and_rounded() {
        let loads = vec![
            Load::new("1", "A", LoadKind::GeneralOutlet, 100.123, 90.111),
            Load::new("2", "B", LoadKind::GeneralOutlet, 200.0, 180.0),
        ];
        let analysis = analyze_proposal(&loads, &[]);
        assert!(analysis.is_valid);
        assert!((analysis.total_power_va - 300.12).abs() < 1e-9);
        assert!((analysis.total_power_w - 270.11).abs() < 1e-9);
        assert!(!analysis.has_alerts());
    }

    #[test]
    fn test_quantity_does_not_multiply_power() {
        let mut load = outlet("1");
        load.quantity = 4;
        let analysis = analyze_proposal(&[load], &[]);
        assert_eq!(analysis.total_power_va, 100.0);
    }

    #[test]
    fn test_rooms_and_zones_are_distinct_and_sorted() {
        let loads = vec![
            outlet("1").in_room("quarto").in_zone("z2"),
            outlet("2").in_room("sala").in_zone("z2"),
            outlet("3").in_room("quarto"),
            outlet("4").in_room(""),
        ];
        let analysis = analyze_proposal(&loads, &[]);
        assert_eq!(analysis.room_ids, vec!["quarto", "sala"]);
        assert_eq!(analysis.zone_ids, vec!["z2"]);
        assert!(analysis.alerts.is_empty());
    }

    #[test]
    fn test_mixed_zones_alert_names_zones() {
        let zones = vec![Zone::new("z1", "Social"), Zone::new("z2", "Molhada")];
        let loads = vec![
            outlet("1").in_zone("z2"),
            outlet("2").in_zone("z1"),
            outlet("3").in_zone("z9"),
        ];
        let analysis = analyze_proposal(&loads, &zones);
        assert_eq!(
            analysis.alerts,
            vec![ProposalAlert::MixedZones {
                zone_names: vec![
                    "Social".to_string(),
                    "Molhada".to_string(),
                    UNKNOWN_ZONE_NAME.to_string()
                ]
            }]
        );
        assert!(analysis.alert_messages()[0].contains("Social, Molhada, Desconhecida"));
        assert!(analysis.is_valid);
    }

    #[test]
    fn test_lighting_with_outlets_alert() {
        let analysis = analyze_proposal(&[lamp("1"), outlet("2")], &[]);
        assert_eq!(analysis.alerts, vec![ProposalAlert::LightingWithOutlets]);
        assert_eq!(analysis.alerts[0].clause(), Some(NormClause::CircuitSeparation));
        assert!(analysis.alert_messages()[0].contains("9.5.3"));
    }

    #[test]
    fn test_specific_load_alone_is_fine() {
        let shower = Load::new("1", "Chuveiro", LoadKind::SpecificOutlet, 5500.0, 5500.0);
        let analysis = analyze_proposal(&[shower], &[]);
        assert!(analysis.alerts.is_empty());
    }

    #[test]
    fn test_specific_load_shared_alert() {
        let motor = Load::new("1", "Bomba", LoadKind::Motor, 1200.0, 900.0);
        let analysis = analyze_proposal(&[motor, outlet("2")], &[]);
        assert_eq!(analysis.alerts, vec![ProposalAlert::SpecificLoadNotExclusive]);
        assert_eq!(analysis.alerts[0].code(), "SPECIFIC_LOAD_NOT_EXCLUSIVE");
    }

    #[test]
    fn test_alert_order() {
        let loads = vec![
            lamp("1").in_zone("a"),
            outlet("2").in_zone("b"),
            Load::new("3", "Forno", LoadKind::SpecificOutlet, 3000.0, 3000.0),
        ];
        let codes: Vec<_> = analyze_proposal(&loads, &[])
            .alerts
            .iter()
            .map(ProposalAlert::code)
            .collect();
        assert_eq!(
            codes,
            vec!["MIXED_ZONES", "LIGHTING_WITH_OUTLETS", "SPECIFIC_LOAD_NOT_EXCLUSIVE"]
        );
    }

    #[test]
    fn test_draft_from_frontend_json() {
        let json = r#"{
            "cargas_selecionadas": [
                {"id": "c1", "nome": "Lustre", "tipo": "ILUMINACAO", "potencia_va": 100, "potencia_w": 100},
                {"id": "c2", "nome": "Chuveiro", "tipo": "TUE", "potencia_va": 5500, "potencia_w": 5500}
            ]
        }"#;
        let draft: ProposalDraft = serde_json::from_str(json).unwrap();
        assert!(draft.zones.is_empty());
        assert!(draft.validate().is_ok());

        let analysis = draft.analyze();
        assert_eq!(analysis.total_power_va, 5600.0);
        assert_eq!(analysis.alerts, vec![ProposalAlert::SpecificLoadNotExclusive]);
    }

    #[test]
    fn test_draft_from_json_reports_serialization_error() {
        let err = ProposalDraft::from_json(r#"{"cargas_selecionadas": "nenhuma"}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.is_client_error());

        let draft = ProposalDraft::from_json(r#"{"cargas_selecionadas": []}"#).unwrap();
        assert_eq!(draft, ProposalDraft::default());
    }

    #[test]
    fn test_motor_needs_its_own_circuit() {
        let motor = Load::new("m", "Bomba", LoadKind::Motor, 1200.0, 900.0);
        let analysis = analyze_proposal(&[motor.clone()], &[]);
        assert!(analysis.alerts.is_empty());

        let analysis = analyze_proposal(&[motor, outlet("1")], &[]);
        assert_eq!(analysis.alerts, vec![ProposalAlert::SpecificLoadNotExclusive]);
    }

    #[test]
    fn test_draft_validate_reports_first_bad_load() {
        let mut bad = outlet("2");
        bad.power_w = -1.0;
        let draft = ProposalDraft {
            loads: vec![outlet("1"), bad],
            zones: Vec::new(),
        };
        assert_eq!(draft.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_deterministic() {
        let loads = vec![outlet("1").in_zone("b"), lamp("2").in_zone("a")];
        assert_eq!(analyze_proposal(&loads, &[]), analyze_proposal(&loads, &[]));
    }
}

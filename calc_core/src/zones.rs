//! # Influence Zones
//!
//! A zone groups rooms that share the same external influences (water,
//! dust, people...). The calculators only need a zone's identity and name;
//! the influence codes themselves are carried by the frontend and ignored
//! here.

use serde::{Deserialize, Serialize};

/// Kind of zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneKind {
    #[default]
    #[serde(rename = "residencial")]
    Residential,
    #[serde(rename = "comercial")]
    Commercial,
    #[serde(rename = "industrial")]
    Industrial,
    #[serde(rename = "tecnica")]
    Technical,
    #[serde(rename = "externa")]
    Outdoor,
    #[serde(rename = "personalizada")]
    Custom,
}

impl ZoneKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ZoneKind::Residential => "Residential",
            ZoneKind::Commercial => "Commercial",
            ZoneKind::Industrial => "Industrial",
            ZoneKind::Technical => "Technical",
            ZoneKind::Outdoor => "Outdoor",
            ZoneKind::Custom => "Custom",
        }
    }
}

/// An influence zone of the project.
///
/// ## JSON Example
///
/// ```json
/// {
///   "id": "z-1",
///   "nome": "Area molhada",
///   "tipo_zona": "residencial"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo_zona", default)]
    pub kind: ZoneKind,

    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Zone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Zone {
            id: id.into(),
            name: name.into(),
            kind: ZoneKind::default(),
            description: None,
        }
    }
}

/// Find a zone by id.
pub fn find_zone<'a>(zones: &'a [Zone], id: &str) -> Option<&'a Zone> {
    zones.iter().find(|zone| zone.id == id)
}

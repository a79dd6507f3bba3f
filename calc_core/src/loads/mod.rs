//! Electrical loads of a project
//!
//! A [`Load`] is one entry of the project's load list: a lighting point or an
//! outlet with its nominal apparent and active power, installed in a room
//! (`local_id`) that belongs to an influence zone (`zona_id`).
//!
//! Loads use the same JSON field names as the project frontend, so a load
//! list can be passed through unchanged.
//!
//! # Example
//!
//! ```
//! use calc_core::loads::{Load, LoadKind};
//!
//! let lamp = Load::new("c-1", "Ceiling light", LoadKind::Lighting, 100.0, 100.0)
//!     .in_room("sala")
//!     .in_zone("z-1");
//!
//! assert!(lamp.validate().is_ok());
//! assert_eq!(lamp.room_id.as_deref(), Some("sala"));
//! ```

pub mod load_types;

pub use load_types::LoadKind;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single electrical load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Client-generated identifier
    pub id: String,

    /// Description (e.g., "Ceiling light", "Fridge outlet")
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo", default)]
    pub kind: LoadKind,

    /// Apparent power (VA)
    #[serde(rename = "potencia_va")]
    pub power_va: f64,

    /// Active power (W)
    #[serde(rename = "potencia_w")]
    pub power_w: f64,

    /// Power factor (cos phi), 0 to 1
    #[serde(rename = "fator_potencia", default = "default_power_factor")]
    pub power_factor: f64,

    #[serde(rename = "quantidade", default = "default_quantity")]
    pub quantity: u32,

    /// Room where the load is installed
    #[serde(rename = "local_id", default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,

    /// Influence zone of that room
    #[serde(rename = "zona_id", default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    #[serde(
        rename = "data_criacao",
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_power_factor() -> f64 {
    1.0
}

fn default_quantity() -> u32 {
    1
}

impl Load {
    /// Create a load with default power factor and quantity.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: LoadKind,
        power_va: f64,
        power_w: f64,
    ) -> Self {
        Load {
            id: id.into(),
            name: name.into(),
            kind,
            power_va,
            power_w,
            power_factor: default_power_factor(),
            quantity: default_quantity(),
            room_id: None,
            zone_id: None,
            created_at: None,
        }
    }

    /// Builder: set the room
    pub fn in_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Builder: set the zone
    pub fn in_zone(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    /// Check the field constraints the project frontend relies on.
    pub fn validate(&self) -> CalcResult<()> {
        if self.name.trim().is_empty() {
            return Err(CalcError::missing_field("nome"));
        }
        if !(self.power_va.is_finite() && self.power_va > 0.0) {
            return Err(CalcError::invalid_input(
                "potencia_va",
                self.power_va.to_string(),
                "Apparent power must be greater than zero",
            ));
        }
        if !(self.power_w.is_finite() && self.power_w > 0.0) {
            return Err(CalcError::invalid_input(
                "potencia_w",
                self.power_w.to_string(),
                "Active power must be greater than zero",
            ));
        }
        if !(0.0..=1.0).contains(&self.power_factor) {
            return Err(CalcError::invalid_input(
                "fator_potencia",
                self.power_factor.to_string(),
                "Power factor must be between 0 and 1",
            ));
        }
        if self.quantity == 0 {
            return Err(CalcError::invalid_input(
                "quantidade",
                "0",
                "Quantity must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Parse a creation timestamp.
///
/// Accepts RFC 3339 (`2025-03-01T10:00:00Z`) and offset-less ISO 8601
/// (`2025-03-01T10:00:00.123456` or `2025-03-01 10:00:00`), the latter
/// taken as UTC.
pub fn parse_timestamp(value: &str) -> CalcResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| CalcError::invalid_input("data_criacao", value, e.to_string()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) => parse_timestamp(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

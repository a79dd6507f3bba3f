//! Load kinds per NBR 5410
//!
//! Every electrical load in a project is either a lighting point, a
//! general-purpose outlet (TUG), a specific-purpose outlet (TUE) or a motor.
//! The kind decides which circuit rules apply to it.

use serde::{Deserialize, Serialize};

/// Kind of electrical load.
///
/// Serialized with the codes used on the wire (`"ILUMINACAO"`, `"TUG"`,
/// `"TUE"`, `"MOTOR"`).
///
/// # Example
/// ```
/// use calc_core::loads::LoadKind;
///
/// let tue = LoadKind::SpecificOutlet;
/// assert_eq!(tue.code(), "TUE");
/// assert!(tue.requires_exclusive_circuit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadKind {
    /// Lighting point
    #[serde(rename = "ILUMINACAO")]
    Lighting,
    /// TUG - general-purpose outlet
    #[default]
    #[serde(rename = "TUG")]
    GeneralOutlet,
    /// TUE - specific-purpose outlet (shower, air conditioner, oven...)
    #[serde(rename = "TUE")]
    SpecificOutlet,
    /// Motor load
    #[serde(rename = "MOTOR")]
    Motor,
}

impl LoadKind {
    /// All load kinds
    pub const ALL: [LoadKind; 4] = [
        LoadKind::Lighting,
        LoadKind::GeneralOutlet,
        LoadKind::SpecificOutlet,
        LoadKind::Motor,
    ];

    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            LoadKind::Lighting => "ILUMINACAO",
            LoadKind::GeneralOutlet => "TUG",
            LoadKind::SpecificOutlet => "TUE",
            LoadKind::Motor => "MOTOR",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadKind::Lighting => "Lighting",
            LoadKind::GeneralOutlet => "General-purpose outlet",
            LoadKind::SpecificOutlet => "Specific-purpose outlet",
            LoadKind::Motor => "Motor",
        }
    }

    /// Whether loads of this kind are expected on a circuit of their own
    pub fn requires_exclusive_circuit(&self) -> bool {
        matches!(self, LoadKind::SpecificOutlet | LoadKind::Motor)
    }
}

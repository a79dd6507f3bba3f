//! # NBR 5410 Clause Registry
//!
//! Central registry of the NBR 5410 clauses applied by the calculators.
//! Results and alerts cite clauses through the [`NormClause`] enum so that
//! every number or warning can be traced back to its source.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::clauses::NormClause;
//!
//! let clause = NormClause::LightingMinimum;
//! assert_eq!(clause.section(), "9.5.2.1");
//! assert_eq!(clause.citation(), "NBR 5410 9.5.2.1");
//! ```

use serde::{Deserialize, Serialize};

/// Edition of the standard the registry refers to.
pub const NBR_5410_EDITION: &str = "NBR 5410:2004";

/// A clause of NBR 5410 cited by a calculation or an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NormClause {
    /// 9.5.2.1 - minimum lighting load per room
    LightingMinimum,
    /// 9.5.2.2 - minimum number of general-purpose outlets (TUG)
    GeneralOutletMinimum,
    /// 9.5.3 - lighting and outlets on separate circuits
    CircuitSeparation,
    /// 9.5.3.2 - exclusive circuits for specific-purpose equipment
    ExclusiveSpecificCircuit,
}

impl NormClause {
    /// All clauses in section order
    pub const ALL: [NormClause; 4] = [
        NormClause::LightingMinimum,
        NormClause::GeneralOutletMinimum,
        NormClause::CircuitSeparation,
        NormClause::ExclusiveSpecificCircuit,
    ];

    /// Section number within the standard
    pub fn section(&self) -> &'static str {
        match self {
            NormClause::LightingMinimum => "9.5.2.1",
            NormClause::GeneralOutletMinimum => "9.5.2.2",
            NormClause::CircuitSeparation => "9.5.3",
            NormClause::ExclusiveSpecificCircuit => "9.5.3.2",
        }
    }

    /// Short title
    pub fn title(&self) -> &'static str {
        match self {
            NormClause::LightingMinimum => "Minimum lighting load",
            NormClause::GeneralOutletMinimum => "Minimum general-purpose outlets",
            NormClause::CircuitSeparation => "Separate lighting and outlet circuits",
            NormClause::ExclusiveSpecificCircuit => "Exclusive circuits for specific-purpose equipment",
        }
    }

    /// One-paragraph summary of what the clause requires, as applied here
    pub fn summary(&self) -> &'static str {
        match self {
            NormClause::LightingMinimum => {
                "At least 100 VA for rooms up to 6 m2; above that, 100 VA plus \
                 60 VA for every 4 whole m2 beyond the first 6 m2."
            }
            NormClause::GeneralOutletMinimum => {
                "One outlet per 3.5 m of perimeter (or fraction) in kitchens, \
                 pantries and service areas; one per 5 m (or fraction) elsewhere. \
                 Practical floors of 2 (wet) and 1 (dry) outlets apply."
            }
            NormClause::CircuitSeparation => {
                "Lighting and outlet points should be supplied by independent \
                 circuits, except in specific locations."
            }
            NormClause::ExclusiveSpecificCircuit => {
                "Specific-purpose equipment with rated current above 10 A must \
                 be supplied by an exclusive, independent circuit."
            }
        }
    }

    /// Citation for display (e.g., "NBR 5410 9.5.2.1")
    pub fn citation(&self) -> String {
        format!("NBR 5410 {}", self.section())
    }

    /// Look up a clause by its section number
    pub fn from_section(section: &str) -> Option<NormClause> {
        NormClause::ALL
            .iter()
            .copied()
            .find(|clause| clause.section() == section.trim())
    }
}

impl std::fmt::Display for NormClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.citation(), self.title())
    }
}

/// Render the registry as a markdown reference document.
pub fn generate_clauses_markdown() -> String {
    let mut output = String::with_capacity(4_096);

    output.push_str(
        "# Projel NBR 5410 Clause Reference\n\n\
         > **Auto-generated from source code. Do not edit manually.**\n\
         >\n\
         > Regenerate with: `cargo run --bin gen-clauses`\n\n",
    );
    output.push_str(&format!("Edition: {}\n\n", NBR_5410_EDITION));
    output.push_str("| Section | Title |\n|---------|-------|\n");
    for clause in NormClause::ALL {
        output.push_str(&format!("| {} | {} |\n", clause.section(), clause.title()));
    }
    output.push('\n');

    for clause in NormClause::ALL {
        output.push_str(&format!("## {} {}\n\n", clause.section(), clause.title()));
        output.push_str(clause.summary());
        output.push_str("\n\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections() {
        assert_eq!(NormClause::LightingMinimum.section(), "9.5.2.1");
        assert_eq!(NormClause::GeneralOutletMinimum.section(), "9.5.2.2");
        assert_eq!(NormClause::CircuitSeparation.section(), "9.5.3");
        assert_eq!(NormClause::ExclusiveSpecificCircuit.section(), "9.5.3.2");
    }

    #[test]
    fn test_from_section() {
        assert_eq!(NormClause::from_section("9.5.3"), Some(NormClause::CircuitSeparation));
        assert_eq!(NormClause::from_section(" 9.5.2.2 "), Some(NormClause::GeneralOutletMinimum));
        assert_eq!(NormClause::from_section("4.1"), None);
    }

    #[test]
    fn test_display() {
        let text = NormClause::ExclusiveSpecificCircuit.to_string();
        assert!(text.starts_with("NBR 5410 9.5.3.2"));
    }

    #[test]
    fn test_markdown_lists_every_clause() {
        let md = generate_clauses_markdown();
        for clause in NormClause::ALL {
            assert!(md.contains(&format!("## {}", clause.section())));
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&NormClause::LightingMinimum).unwrap();
        assert_eq!(json, "\"LightingMinimum\"");
    }
}

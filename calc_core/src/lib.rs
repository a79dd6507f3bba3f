//! # calc_core - NBR 5410 Load Calculation Engine
//!
//! `calc_core` is the computational heart of Projel: the minimum-load rules
//! of NBR 5410 (lighting VA and outlet count per room) and the analysis of
//! circuit proposals. All inputs and outputs are JSON-serializable so the
//! same types serve the HTTP service and the command line.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Total**: Calculators never fail; missing input falls back to defaults
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Traceable**: Results cite the NBR 5410 clauses they apply
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::minimum_load::{calculate, RoomDimensions};
//!
//! let living_room = RoomDimensions::new(14.0, 15.0, false);
//! let result = calculate(&living_room);
//!
//! assert_eq!(result.lighting_power_va, 220.0);
//! assert_eq!(result.outlet_count, 3);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Minimum-load forecast and proposal analysis
//! - [`clauses`] - Registry of the NBR 5410 clauses applied
//! - [`loads`] - Electrical loads and load kinds
//! - [`zones`] - Influence zones
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod clauses;
pub mod errors;
pub mod loads;
pub mod zones;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze_proposal, process_forecast, ForecastInput, MinimumLoadResult, ProposalAnalysis,
    RoomDimensions,
};
pub use clauses::NormClause;
pub use errors::{CalcError, CalcResult};
pub use loads::{Load, LoadKind};
pub use zones::{Zone, ZoneKind};

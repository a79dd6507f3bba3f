//! # NBR 5410 Calculations
//!
//! Each calculation follows the pattern:
//!
//! - an input type (JSON-serializable)
//! - a result type (JSON-serializable)
//! - a pure function from one to the other
//!
//! None of them fail: inputs are coerced to safe values rather than
//! rejected. Strict checks live in separate `validate()` methods.
//!
//! ## Available Calculations
//!
//! - [`minimum_load`] - Minimum lighting load and outlet count for a room (9.5.2)
//! - [`proposal`] - Power totals and circuit-grouping alerts for a load selection (9.5.3)

pub mod minimum_load;
pub mod proposal;

// Re-export commonly used types
pub use minimum_load::{
    compute_lighting_power, compute_outlet_count, process_forecast, ForecastInput,
    MinimumLoadResult, RoomDimensions,
};
pub use proposal::{analyze_proposal, ProposalAlert, ProposalAnalysis, ProposalDraft};

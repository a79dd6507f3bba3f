//! # Minimum Load Forecast (NBR 5410 9.5.2)
//!
//! Computes the minimum lighting load and the minimum number of
//! general-purpose outlets (TUG) a room must be provisioned with.
//!
//! ## Rules
//!
//! - Lighting (9.5.2.1): 100 VA up to 6 m²; above that, 100 VA plus 60 VA
//!   for every 4 *whole* m² beyond the first 6 m².
//! - Outlets (9.5.2.2): one per 3.5 m of perimeter in wet areas (kitchens,
//!   pantries, laundry/service areas), one per 5 m elsewhere. Any fraction
//!   of a span counts as a full outlet. Wet areas get at least 2 outlets,
//!   dry areas at least 1.
//!
//! These functions never fail. Non-finite inputs count as zero and negative
//! inputs fall through to the minimums.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::minimum_load::{calculate, RoomDimensions};
//!
//! let kitchen = RoomDimensions::new(10.0, 13.0, true);
//! let result = calculate(&kitchen);
//!
//! assert_eq!(result.lighting_power_va, 160.0);
//! assert_eq!(result.outlet_count, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::clauses::NormClause;
use crate::errors::{CalcError, CalcResult};

/// Lighting load granted to any room up to [`BASE_LIGHTING_AREA_M2`] (VA)
pub const BASE_LIGHTING_VA: f64 = 100.0;

/// Area covered by the base lighting load (m²)
pub const BASE_LIGHTING_AREA_M2: f64 = 6.0;

/// Whole-area step beyond the base area (m²)
pub const LIGHTING_STEP_AREA_M2: f64 = 4.0;

/// Lighting load added per whole step (VA)
pub const LIGHTING_STEP_VA: f64 = 60.0;

/// Perimeter per outlet in wet areas (m)
pub const WET_AREA_OUTLET_SPACING_M: f64 = 3.5;

/// Perimeter per outlet in dry areas (m)
pub const DRY_AREA_OUTLET_SPACING_M: f64 = 5.0;

/// Practical minimum outlet count for wet areas
pub const WET_AREA_MIN_OUTLETS: u32 = 2;

/// Practical minimum outlet count for dry areas
pub const DRY_AREA_MIN_OUTLETS: u32 = 1;

/// Room geometry needed by the forecast.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 10.0,
///   "perimeter_m": 13.0,
///   "is_wet_area": true
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Floor area in square meters
    pub area_m2: f64,

    /// Room perimeter in meters
    pub perimeter_m: f64,

    /// Kitchens, pantries, laundry and service areas
    #[serde(default)]
    pub is_wet_area: bool,
}

impl RoomDimensions {
    /// Create room dimensions.
    pub fn new(area_m2: f64, perimeter_m: f64, is_wet_area: bool) -> Self {
        RoomDimensions {
            area_m2,
            perimeter_m,
            is_wet_area,
        }
    }

    /// Strict geometry check for callers that register rooms.
    ///
    /// The calculator does not call this: it accepts any input. Use it when
    /// a zero or impossible room should be rejected instead of forecast.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidInput`] when area or perimeter are not
    /// positive finite numbers, or when the perimeter is too small to enclose
    /// the area (`perimeter < 2 * sqrt(area)`).
    pub fn validate(&self) -> CalcResult<()> {
        if !self.area_m2.is_finite() || self.area_m2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "area_m2",
                self.area_m2.to_string(),
                "Area must be greater than zero",
            ));
        }
        if !self.perimeter_m.is_finite() || self.perimeter_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "perimeter_m",
                self.perimeter_m.to_string(),
                "Perimeter must be greater than zero",
            ));
        }
        if self.perimeter_m < 2.0 * self.area_m2.sqrt() {
            return Err(CalcError::invalid_input(
                "perimeter_m",
                self.perimeter_m.to_string(),
                format!(
                    "Perimeter too small for an area of {} m2 (impossible geometry)",
                    self.area_m2
                ),
            ));
        }
        Ok(())
    }
}

/// Minimum loads for one room.
///
/// ## JSON Example
///
/// ```json
/// {
///   "lighting_power_va": 160.0,
///   "outlet_count": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumLoadResult {
    /// Minimum lighting apparent power (VA)
    pub lighting_power_va: f64,

    /// Minimum number of general-purpose outlets
    pub outlet_count: u32,
}

impl MinimumLoadResult {
    /// Clauses applied to produce this result
    pub fn clauses(&self) -> [NormClause; 2] {
        [NormClause::LightingMinimum, NormClause::GeneralOutletMinimum]
    }
}

/// Facade input where every field may be absent.
///
/// Missing numbers count as `0.0` and a missing wet-area flag as `false`,
/// so partial input from upstream callers never fails.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastInput {
    #[serde(default)]
    pub area_m2: Option<f64>,

    #[serde(default)]
    pub perimeter_m: Option<f64>,

    #[serde(default)]
    pub is_wet_area: Option<bool>,
}

impl ForecastInput {
    /// Resolve absent fields to their defaults.
    pub fn dimensions(&self) -> RoomDimensions {
        RoomDimensions {
            area_m2: self.area_m2.unwrap_or(0.0),
            perimeter_m: self.perimeter_m.unwrap_or(0.0),
            is_wet_area: self.is_wet_area.unwrap_or(false),
        }
    }
}

impl From<RoomDimensions> for ForecastInput {
    fn from(dims: RoomDimensions) -> Self {
        ForecastInput {
            area_m2: Some(dims.area_m2),
            perimeter_m: Some(dims.perimeter_m),
            is_wet_area: Some(dims.is_wet_area),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Minimum lighting load (VA) for a room of the given floor area.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::minimum_load::compute_lighting_power;
///
/// assert_eq!(compute_lighting_power(6.0), 100.0);
/// assert_eq!(compute_lighting_power(13.9), 160.0); // 7.9 m² extra = 1 whole step
/// assert_eq!(compute_lighting_power(14.0), 220.0);
/// ```
pub fn compute_lighting_power(area_m2: f64) -> f64 {
    let area = finite_or_zero(area_m2);
    if area <= BASE_LIGHTING_AREA_M2 {
        return BASE_LIGHTING_VA;
    }

    let whole_steps = ((area - BASE_LIGHTING_AREA_M2) / LIGHTING_STEP_AREA_M2).floor();
    let power = BASE_LIGHTING_VA + whole_steps * LIGHTING_STEP_VA;

    // Saturate like the outlet count: an overflowed product would serialize as null.
    if power.is_finite() {
        power
    } else {
        f64::MAX
    }
}

/// Minimum number of general-purpose outlets for a room perimeter.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::minimum_load::compute_outlet_count;
///
/// assert_eq!(compute_outlet_count(14.0, false), 3); // 2 full spans + a fraction
/// assert_eq!(compute_outlet_count(3.5, true), 2);   // wet-area floor
/// ```
pub fn compute_outlet_count(perimeter_m: f64, is_wet_area: bool) -> u32 {
    let (spacing, minimum) = if is_wet_area {
        (WET_AREA_OUTLET_SPACING_M, WET_AREA_MIN_OUTLETS)
    } else {
        (DRY_AREA_OUTLET_SPACING_M, DRY_AREA_MIN_OUTLETS)
    };

    let perimeter = finite_or_zero(perimeter_m);

    // Whole spans are derived from the remainder so the two always agree,
    // even when the division alone would round up to the next integer.
    let remainder = perimeter % spacing;
    let mut spans = ((perimeter - remainder) / spacing).round();
    if remainder > 0.0 {
        spans += 1.0;
    }

    // Float-to-int casts saturate: negatives become 0, huge values u32::MAX.
    (spans as u32).max(minimum)
}

/// Compute both minimums for a room.
pub fn calculate(dims: &RoomDimensions) -> MinimumLoadResult {
    MinimumLoadResult {
        lighting_power_va: compute_lighting_power(dims.area_m2),
        outlet_count: compute_outlet_count(dims.perimeter_m, dims.is_wet_area),
    }
}

/// Single-call facade over possibly incomplete input.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::minimum_load::{process_forecast, ForecastInput};
///
/// let result = process_forecast(&ForecastInput::default());
/// assert_eq!(result.lighting_power_va, 100.0);
/// assert_eq!(result.outlet_count, 1);
/// ```
pub fn process_forecast(input: &ForecastInput) -> MinimumLoadResult {
    calculate(&input.dimensions())
}

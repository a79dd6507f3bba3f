//! Load forecast endpoints

use axum::Json;
use calc_core::calculations::{process_forecast, ForecastInput};
use tracing::debug;

use crate::dto::{MinimumLoadRequest, MinimumLoadResponse};

/// POST {prefix}/cargas/calcular-minimo-nbr
///
/// Never fails once the body is decoded: absent fields fall back to zero
/// (and `false` for the wet-area flag).
pub async fn minimum_load(Json(request): Json<MinimumLoadRequest>) -> Json<MinimumLoadResponse> {
    let input = ForecastInput::from(request);
    let result = process_forecast(&input);

    debug!(
        area_m2 = ?input.area_m2,
        perimeter_m = ?input.perimeter_m,
        is_wet_area = ?input.is_wet_area,
        lighting_power_va = result.lighting_power_va,
        outlet_count = result.outlet_count,
        "minimum load forecast"
    );

    Json(result.into())
}

//! Thermal dynamics features: lagged deltas, smoothing, cumulative sums.

use crate::core::TimeFrame;
use crate::error::Result;
use crate::transform::window::{ewm_mean_halflife, rolling_sum, shift};

/// Half-life, in samples, of the thermal inertia smoother.
const INERTIA_HALFLIFE: f64 = 12.0;

/// Window, in rows, of the cumulative heating-degree sum.
const CUMULATIVE_HDD_WINDOW: usize = 48;

/// Add `temp_change_rate_3h`, `temp_gradient_24h`, `thermal_inertia_12h`
/// and `cumulative_hdd_48h`.
///
/// Requires `temperature_2m` and `heating_degree_hour` (the latter from
/// the weather builder). The lagged deltas leave NaN in their warmup
/// rows for the edge repairer.
pub fn add_thermal_dynamics(mut frame: TimeFrame) -> Result<TimeFrame> {
    let temperature = frame.require_column("temperature_2m")?.to_vec();

    let lag3 = shift(&temperature, 3);
    let change_rate: Vec<f64> = temperature
        .iter()
        .zip(&lag3)
        .map(|(t, l)| (t - l) / 3.0)
        .collect();
    frame.insert_column("temp_change_rate_3h", change_rate)?;

    let lag24 = shift(&temperature, 24);
    let gradient: Vec<f64> = temperature.iter().zip(&lag24).map(|(t, l)| t - l).collect();
    frame.insert_column("temp_gradient_24h", gradient)?;

    frame.insert_column(
        "thermal_inertia_12h",
        ewm_mean_halflife(&temperature, INERTIA_HALFLIFE, 1),
    )?;

    let cumulative_hdd =
        rolling_sum(frame.require_column("heating_degree_hour")?, CUMULATIVE_HDD_WINDOW, 1);
    frame.insert_column("cumulative_hdd_48h", cumulative_hdd)?;

    Ok(frame)
}

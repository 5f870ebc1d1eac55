//! Interaction features: cross-products of previously built columns.

use crate::core::TimeFrame;
use crate::error::Result;

/// Add `temp_x_hour_sin`, `radiation_x_daytime`, `weekend_x_hour_cos`
/// and `heating_x_night`.
///
/// `is_night` flags hours from 20:00 through 06:00; it deliberately
/// overlaps `is_daylight` at hours 6 and 20.
pub fn add_interactions(mut frame: TimeFrame) -> Result<TimeFrame> {
    let product = |a: &[f64], b: &[f64]| -> Vec<f64> {
        a.iter().zip(b).map(|(x, y)| x * y).collect()
    };

    let temperature = frame.require_column("temperature_2m")?;
    let hour_sin = frame.require_column("hour_sin")?;
    let temp_x_hour_sin = product(temperature, hour_sin);

    let radiation = frame.require_column("shortwave_radiation")?;
    let daylight = frame.require_column("is_daylight")?;
    let radiation_x_daytime = product(radiation, daylight);

    let weekend = frame.require_column("is_weekend")?;
    let hour_cos = frame.require_column("hour_cos")?;
    let weekend_x_hour_cos = product(weekend, hour_cos);

    let hour = frame.require_column("hour")?;
    let is_night: Vec<f64> = hour
        .iter()
        .map(|&h| if h >= 20.0 || h <= 6.0 { 1.0 } else { 0.0 })
        .collect();
    let heating_degree = frame.require_column("heating_degree_hour")?;
    let heating_x_night = product(heating_degree, &is_night);

    frame.insert_column("temp_x_hour_sin", temp_x_hour_sin)?;
    frame.insert_column("radiation_x_daytime", radiation_x_daytime)?;
    frame.insert_column("weekend_x_hour_cos", weekend_x_hour_cos)?;
    frame.insert_column("heating_x_night", heating_x_night)?;
    Ok(frame)
}

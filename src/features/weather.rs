//! Weather-derived features: heating degree and rolling statistics.

use crate::core::TimeFrame;
use crate::error::{FeatureError, Result};
use crate::features::REQUIRED_WEATHER_COLS;
use crate::transform::window::{rolling_mean, rolling_std};

/// Baseline temperature for heating demand, in °C.
const HEATING_BASE_TEMP: f64 = 18.0;

/// Rolling window length in rows (one day at hourly cadence).
const DAILY_WINDOW: usize = 24;

/// Add `heating_degree_hour` and the 24-hour rolling statistics.
///
/// Fails with [`FeatureError::MissingColumns`] unless all 4 raw weather
/// columns are present. Rolling aggregates use a minimum of one sample,
/// so the mean warms up from the first row; the sample standard
/// deviation stays NaN until a second observation exists and is patched
/// by the edge repairer.
pub fn add_weather_features(mut frame: TimeFrame) -> Result<TimeFrame> {
    let missing: Vec<String> = REQUIRED_WEATHER_COLS
        .iter()
        .filter(|col| !frame.has_column(col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(FeatureError::MissingColumns { columns: missing });
    }

    let temperature = frame.require_column("temperature_2m")?.to_vec();
    let heating_degree: Vec<f64> = temperature
        .iter()
        .map(|t| (HEATING_BASE_TEMP - t).max(0.0))
        .collect();

    frame.insert_column(
        "temp_rolling_mean_24h",
        rolling_mean(&temperature, DAILY_WINDOW, 1),
    )?;
    frame.insert_column(
        "temp_rolling_std_24h",
        rolling_std(&temperature, DAILY_WINDOW, 1),
    )?;

    let radiation_mean = rolling_mean(frame.require_column("shortwave_radiation")?, DAILY_WINDOW, 1);
    frame.insert_column("radiation_rolling_mean_24h", radiation_mean)?;

    let cloud_mean = rolling_mean(frame.require_column("cloud_cover")?, DAILY_WINDOW, 1);
    frame.insert_column("cloud_cover_rolling_mean_24h", cloud_mean)?;

    frame.insert_column(
        "heating_degree_rolling_mean_24h",
        rolling_mean(&heating_degree, DAILY_WINDOW, 1),
    )?;
    frame.insert_column("heating_degree_hour", heating_degree)?;

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn weather_frame(temperature: Vec<f64>) -> TimeFrame {
        let n = temperature.len();
        let base = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let timestamps: Vec<NaiveDateTime> =
            (0..n).map(|i| base + TimeDelta::hours(i as i64)).collect();
        TimeFrame::from_columns(
            timestamps,
            vec![
                ("temperature_2m".to_string(), temperature),
                ("shortwave_radiation".to_string(), vec![200.0; n]),
                ("cloud_cover".to_string(), vec![50.0; n]),
                ("precipitation".to_string(), vec![0.0; n]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn fails_without_all_raw_columns() {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let frame = TimeFrame::from_columns(
            vec![base],
            vec![("temperature_2m".to_string(), vec![10.0])],
        )
        .unwrap();

        let result = add_weather_features(frame);
        assert!(matches!(
            result,
            Err(FeatureError::MissingColumns { .. })
        ));
    }

    #[test]
    fn heating_degree_clamps_at_zero() {
        let frame = weather_frame(vec![10.0, 18.0, 25.0]);
        let result = add_weather_features(frame).unwrap();

        let hdd = result.column("heating_degree_hour").unwrap();
        assert_relative_eq!(hdd[0], 8.0, epsilon = 1e-10);
        assert_relative_eq!(hdd[1], 0.0, epsilon = 1e-10);
        assert_relative_eq!(hdd[2], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn rolling_mean_at_first_row_equals_raw_value() {
        let frame = weather_frame(vec![4.0, 8.0, 12.0]);
        let result = add_weather_features(frame).unwrap();

        let mean = result.column("temp_rolling_mean_24h").unwrap();
        assert_relative_eq!(mean[0], 4.0, epsilon = 1e-10);
        assert_relative_eq!(mean[1], 6.0, epsilon = 1e-10);
    }

    #[test]
    fn rolling_std_is_nan_at_first_row() {
        let frame = weather_frame(vec![4.0, 8.0, 12.0]);
        let result = add_weather_features(frame).unwrap();

        let std = result.column("temp_rolling_std_24h").unwrap();
        assert!(std[0].is_nan());
        assert!(!std[1].is_nan());
    }

    #[test]
    fn all_rolling_columns_are_present() {
        let frame = weather_frame(vec![5.0; 30]);
        let result = add_weather_features(frame).unwrap();

        for col in [
            "heating_degree_hour",
            "temp_rolling_mean_24h",
            "temp_rolling_std_24h",
            "radiation_rolling_mean_24h",
            "cloud_cover_rolling_mean_24h",
            "heating_degree_rolling_mean_24h",
        ] {
            assert!(result.has_column(col), "missing {col}");
        }
    }

    #[test]
    fn heating_degree_rolling_mean_tracks_cold_spell() {
        // Constant 8 °C gives a constant heating degree of 10.
        let frame = weather_frame(vec![8.0; 48]);
        let result = add_weather_features(frame).unwrap();

        let hdd_mean = result.column("heating_degree_rolling_mean_24h").unwrap();
        for &v in hdd_mean {
            assert_relative_eq!(v, 10.0, epsilon = 1e-10);
        }
    }
}

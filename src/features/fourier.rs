//! Fourier encoding of cyclical temporal patterns.
//!
//! Each cycle becomes a `(sin, cos)` pair of the phase angle
//! `2π·x/period`, avoiding the discontinuity a raw ordinal carries at
//! the period boundary.

use crate::core::TimeFrame;
use crate::error::Result;
use chrono::NaiveDate;
use std::f64::consts::PI;

/// Hours in a Julian year (365.25 days).
pub const ANNUAL_PERIOD_HOURS: f64 = 8766.0;

/// Hours in half a Julian year.
pub const SEMI_ANNUAL_PERIOD_HOURS: f64 = 4383.0;

/// Fixed epoch for the annual phase: 2020-01-01T00:00 local time.
fn epoch() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("fixed epoch is a valid timestamp")
}

/// Add the eight cyclical encodings: `hour_sin/cos`, `dow_sin/cos`,
/// `annual_sin/cos`, `semi_annual_sin/cos`.
///
/// Requires the `hour` and `day_of_week` columns from the temporal
/// builder. The annual and semi-annual phases run on fractional hours
/// elapsed since the fixed epoch.
pub fn add_fourier_features(mut frame: TimeFrame) -> Result<TimeFrame> {
    let epoch = epoch();
    let elapsed_hours: Vec<f64> = frame
        .timestamps()
        .iter()
        .map(|ts| (*ts - epoch).num_seconds() as f64 / 3600.0)
        .collect();

    for (name, period) in [
        ("annual", ANNUAL_PERIOD_HOURS),
        ("semi_annual", SEMI_ANNUAL_PERIOD_HOURS),
    ] {
        let angles: Vec<f64> = elapsed_hours.iter().map(|h| 2.0 * PI * h / period).collect();
        frame.insert_column(
            format!("{name}_sin"),
            angles.iter().map(|a| a.sin()).collect(),
        )?;
        frame.insert_column(
            format!("{name}_cos"),
            angles.iter().map(|a| a.cos()).collect(),
        )?;
    }

    let hour = frame.require_column("hour")?.to_vec();
    frame.insert_column(
        "hour_sin",
        hour.iter().map(|h| (2.0 * PI * h / 24.0).sin()).collect(),
    )?;
    frame.insert_column(
        "hour_cos",
        hour.iter().map(|h| (2.0 * PI * h / 24.0).cos()).collect(),
    )?;

    let dow = frame.require_column("day_of_week")?.to_vec();
    frame.insert_column(
        "dow_sin",
        dow.iter().map(|d| (2.0 * PI * d / 7.0).sin()).collect(),
    )?;
    frame.insert_column(
        "dow_cos",
        dow.iter().map(|d| (2.0 * PI * d / 7.0).cos()).collect(),
    )?;

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use crate::features::add_temporal_features;
    use approx::assert_relative_eq;
    use chrono::{NaiveDateTime, TimeDelta};

    fn fourier_frame(start: (i32, u32, u32), n: usize) -> TimeFrame {
        let base = NaiveDate::from_ymd_opt(start.0, start.1, start.2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let timestamps: Vec<NaiveDateTime> =
            (0..n).map(|i| base + TimeDelta::hours(i as i64)).collect();
        let frame = add_temporal_features(
            TimeFrame::new(timestamps),
            &HolidayCalendar::default(),
        )
        .unwrap();
        add_fourier_features(frame).unwrap()
    }

    #[test]
    fn midnight_encodes_as_zero_phase() {
        let frame = fourier_frame((2024, 1, 1), 24);
        assert_relative_eq!(frame.column("hour_sin").unwrap()[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(frame.column("hour_cos").unwrap()[0], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn hour_encoding_peaks_at_quarter_period() {
        let frame = fourier_frame((2024, 1, 1), 24);
        // Hour 6 is a quarter of the 24-hour cycle.
        assert_relative_eq!(frame.column("hour_sin").unwrap()[6], 1.0, epsilon = 1e-10);
        assert_relative_eq!(frame.column("hour_cos").unwrap()[6], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn all_encodings_are_bounded() {
        let frame = fourier_frame((2023, 11, 20), 24 * 14);
        for col in [
            "hour_sin",
            "hour_cos",
            "dow_sin",
            "dow_cos",
            "annual_sin",
            "annual_cos",
            "semi_annual_sin",
            "semi_annual_cos",
        ] {
            for &v in frame.column(col).unwrap() {
                assert!((-1.0..=1.0).contains(&v), "{col} out of bounds: {v}");
            }
        }
    }

    #[test]
    fn annual_phase_is_zero_at_epoch() {
        let frame = fourier_frame((2020, 1, 1), 1);
        assert_relative_eq!(frame.column("annual_sin").unwrap()[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(frame.column("annual_cos").unwrap()[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(
            frame.column("semi_annual_cos").unwrap()[0],
            1.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn semi_annual_runs_twice_as_fast() {
        let frame = fourier_frame((2021, 3, 15), 24);
        let annual = frame.column("annual_sin").unwrap();
        let semi = frame.column("semi_annual_sin").unwrap();
        // Phases differ, both bounded; spot-check they are not equal.
        assert!((annual[0] - semi[0]).abs() > 1e-6);
    }

    #[test]
    fn sin_cos_pairs_lie_on_the_unit_circle() {
        let frame = fourier_frame((2024, 5, 10), 24 * 3);
        let sin = frame.column("dow_sin").unwrap();
        let cos = frame.column("dow_cos").unwrap();
        for i in 0..sin.len() {
            assert_relative_eq!(sin[i] * sin[i] + cos[i] * cos[i], 1.0, epsilon = 1e-10);
        }
    }
}

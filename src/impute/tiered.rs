//! Tiered imputation of missing values in raw weather columns.
//!
//! Policy, applied per column in this exact order:
//! 1. gaps no longer than the small-gap threshold are deferred to
//!    linear interpolation;
//! 2. longer gaps are filled per position from the value 24, 48, or 72
//!    rows back (first usable lag wins), falling back to the monthly
//!    climate value for the position's calendar month;
//! 3. bounded linear interpolation resolves the deferred small gaps;
//! 4. any survivor is forward/backward filled and logged as degraded.
//!
//! Tier order is a correctness contract: identical input always yields
//! identical output.

use crate::core::TimeFrame;
use crate::error::Result;
use crate::features::REQUIRED_WEATHER_COLS;
use crate::impute::climate::MonthlyClimate;
use crate::impute::gap::find_gaps;
use crate::transform::fill::{backward_fill, forward_fill, interpolate_linear, nan_count};
use chrono::Datelike;
use tracing::{info, warn};

/// Lag candidates for large-gap substitution, in priority order.
/// Same hour of day, 1 to 3 days back.
const LAG_ROWS: [usize; 3] = [24, 48, 72];

/// Impute missing values in one column of the frame.
///
/// A column that is absent or has no missing values is returned
/// unchanged. The column is repaired in a single working buffer with
/// in-order writes, so a position filled by lag substitution can serve
/// as the lag source for a later position.
pub fn impute_column(
    mut frame: TimeFrame,
    column: &str,
    small_gap_threshold: usize,
    climate: &MonthlyClimate,
) -> Result<TimeFrame> {
    let Some(mut work) = frame.column(column).map(|v| v.to_vec()) else {
        return Ok(frame);
    };
    let missing_before = nan_count(&work);
    if missing_before == 0 {
        return Ok(frame);
    }

    let gaps = find_gaps(&work);
    info!(
        column,
        missing = missing_before,
        gaps = gaps.len(),
        "imputing weather column"
    );

    // Tier 2: lag / climate substitution for large gaps. Small gaps are
    // deferred to interpolation below.
    for gap in &gaps {
        if gap.len <= small_gap_threshold {
            continue;
        }
        for idx in gap.start..=gap.end {
            if !work[idx].is_nan() {
                continue;
            }
            let lagged = LAG_ROWS
                .iter()
                .filter(|&&back| idx >= back)
                .map(|&back| work[idx - back])
                .find(|v| !v.is_nan());
            match lagged {
                Some(v) => work[idx] = v,
                None => {
                    let month = frame.timestamps()[idx].month();
                    if let Some(v) = climate.value_for(column, month) {
                        work[idx] = v;
                    }
                }
            }
        }
    }

    // Tier 3: bounded linear interpolation across the whole column.
    if nan_count(&work) > 0 {
        work = interpolate_linear(&work, Some(small_gap_threshold));
    }

    // Tier 4: forward/backward fill safety net.
    let remaining = nan_count(&work);
    if remaining > 0 {
        work = backward_fill(&forward_fill(&work));
        warn!(
            column,
            remaining, "forward/backward filled remaining values, imputation degraded"
        );
    }

    let filled = missing_before - nan_count(&work);
    info!(column, filled, "imputation complete");

    frame.insert_column(column, work)?;
    Ok(frame)
}

/// Impute missing values for all required raw weather columns.
///
/// Derived features are computed afterwards from the repaired columns
/// and need no separate imputation.
pub fn impute_missing_weather(
    mut frame: TimeFrame,
    small_gap_threshold: usize,
    climate: &MonthlyClimate,
) -> Result<TimeFrame> {
    let columns_with_nan: Vec<&str> = REQUIRED_WEATHER_COLS
        .iter()
        .copied()
        .filter(|col| frame.missing_count(col).unwrap_or(0) > 0)
        .collect();

    if columns_with_nan.is_empty() {
        info!("no missing values in weather columns");
        return Ok(frame);
    }

    info!(
        columns = columns_with_nan.len(),
        "imputing columns with missing values"
    );
    for col in columns_with_nan {
        frame = impute_column(frame, col, small_gap_threshold, climate)?;
    }
    Ok(frame)
}

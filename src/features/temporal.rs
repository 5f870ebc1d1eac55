//! Basic temporal features from the timestamp index.

use crate::calendar::HolidayCalendar;
use crate::core::TimeFrame;
use crate::error::Result;
use chrono::{Datelike, Timelike};

/// Add `hour`, `day_of_week`, `is_weekend`, `is_holiday`, `is_daylight`.
///
/// `hour` and `day_of_week` are intermediate columns read by later
/// builders; the final selection drops them. `day_of_week` counts
/// Monday as 0 through Sunday as 6. `is_holiday` matches on the
/// date-only component against the calendar. `is_daylight` flags hours
/// 6 through 20 inclusive.
pub fn add_temporal_features(
    mut frame: TimeFrame,
    holidays: &HolidayCalendar,
) -> Result<TimeFrame> {
    let n = frame.len();
    let mut hour = Vec::with_capacity(n);
    let mut day_of_week = Vec::with_capacity(n);
    let mut is_weekend = Vec::with_capacity(n);
    let mut is_holiday = Vec::with_capacity(n);
    let mut is_daylight = Vec::with_capacity(n);

    for ts in frame.timestamps() {
        let h = ts.hour();
        let dow = ts.weekday().num_days_from_monday();
        hour.push(h as f64);
        day_of_week.push(dow as f64);
        is_weekend.push(if dow >= 5 { 1.0 } else { 0.0 });
        is_holiday.push(if holidays.contains(ts.date()) { 1.0 } else { 0.0 });
        is_daylight.push(if (6..=20).contains(&h) { 1.0 } else { 0.0 });
    }

    frame.insert_column("hour", hour)?;
    frame.insert_column("day_of_week", day_of_week)?;
    frame.insert_column("is_weekend", is_weekend)?;
    frame.insert_column("is_holiday", is_holiday)?;
    frame.insert_column("is_daylight", is_daylight)?;
    Ok(frame)
}

//! Italian public holiday calendar.
//!
//! Holidays are generated once for a configurable span of years and
//! consumed as an immutable set by the temporal feature builder.

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Fixed-date Italian public holidays as (month, day).
const FIXED_DATES: [(u32, u32); 10] = [
    (1, 1),   // Capodanno
    (1, 6),   // Epifania
    (4, 25),  // Liberazione
    (5, 1),   // Festa del Lavoro
    (6, 2),   // Festa della Repubblica
    (8, 15),  // Ferragosto
    (11, 1),  // Ognissanti
    (12, 8),  // Immacolata Concezione
    (12, 25), // Natale
    (12, 26), // Santo Stefano
];

/// Compute Easter Sunday for a year using the Anonymous Gregorian algorithm.
///
/// Integer arithmetic throughout; the classical computus formula.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    // The computus always yields a date in March or April.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| panic!("computus produced invalid date {year}-{month}-{day}"))
}

/// Sorted set of Italian public holiday dates over an inclusive year span.
///
/// Contains the 10 fixed-date holidays plus Easter Monday for every year
/// in the span. Dates outside the span are simply absent, so membership
/// tests on them return false.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Generate Italian public holidays for `start_year..=end_year`.
    pub fn italian(start_year: i32, end_year: i32) -> Self {
        let mut dates = BTreeSet::new();
        for year in start_year..=end_year {
            for (month, day) in FIXED_DATES {
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    dates.insert(date);
                }
            }
            let easter_monday = easter_sunday(year) + Days::new(1);
            dates.insert(easter_monday);
        }
        Self { dates }
    }

    /// Whether a calendar date is a public holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of holiday dates in the calendar.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the calendar is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate holiday dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl Default for HolidayCalendar {
    /// Default span matches the original pipeline configuration.
    fn default() -> Self {
        Self::italian(2020, 2035)
    }
}

//! Monthly climate reference values used as a last-resort fill.

use std::collections::HashMap;

/// Per-variable monthly climate normals, indexed by month of year (1–12).
///
/// Reference data, not derived from the input; immutable after
/// construction. Variables without an entry cannot be climate-filled.
#[derive(Debug, Clone)]
pub struct MonthlyClimate {
    tables: HashMap<String, [f64; 12]>,
}

impl MonthlyClimate {
    /// An empty table with no variables.
    pub fn empty() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Monthly normals for the reference alpine site (Folgaria,
    /// Trentino, ~1200 m altitude), covering the 4 raw weather variables.
    pub fn alpine_defaults() -> Self {
        Self::empty()
            .with_variable(
                "temperature_2m",
                [
                    -2.0, -1.0, 3.0, 7.0, 11.0, 15.0, 17.0, 17.0, 13.0, 8.0, 3.0, -1.0,
                ],
            )
            .with_variable(
                "shortwave_radiation",
                [
                    150.0, 200.0, 300.0, 400.0, 500.0, 550.0, 550.0, 500.0, 400.0, 280.0, 180.0,
                    130.0,
                ],
            )
            .with_variable(
                "cloud_cover",
                [
                    55.0, 50.0, 50.0, 55.0, 55.0, 50.0, 40.0, 45.0, 45.0, 50.0, 60.0, 60.0,
                ],
            )
            .with_variable(
                "precipitation",
                [0.0, 0.0, 0.0, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0],
            )
    }

    /// Add or replace the monthly values for a variable.
    ///
    /// `values[0]` is January, `values[11]` is December.
    pub fn with_variable(mut self, name: impl Into<String>, values: [f64; 12]) -> Self {
        self.tables.insert(name.into(), values);
        self
    }

    /// Whether a variable has climate values.
    pub fn has_variable(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Climate value for a variable and month (1–12), if available.
    pub fn value_for(&self, name: &str, month: u32) -> Option<f64> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.tables.get(name).map(|t| t[(month - 1) as usize])
    }
}

impl Default for MonthlyClimate {
    fn default() -> Self {
        Self::alpine_defaults()
    }
}

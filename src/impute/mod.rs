//! Missing-value repair for raw weather columns.
//!
//! Gap detection is purely positional; the tiered imputer resolves each
//! gap with the first applicable strategy (interpolation, day-back lag,
//! climate normal, forward/backward fill). Edge repair handles the NaN
//! that rolling and lag features leave behind at series edges.

pub mod climate;
pub mod gap;
pub mod repair;
pub mod tiered;

pub use climate::MonthlyClimate;
pub use gap::{find_gaps, Gap};
pub use repair::{repair_edge_nans, EDGE_NAN_LIMIT};
pub use tiered::{impute_column, impute_missing_weather};

//! # meteo-features
//!
//! Gold-layer weather feature engineering for energy demand forecasting -
//! Rust port of the Open-Meteo gold pipeline.
//!
//! Turns hourly weather observations (temperature, shortwave radiation,
//! cloud cover, precipitation) into 29 ML features: temporal flags,
//! Fourier encodings, rolling statistics, thermal dynamics, and
//! interactions. Missing raw values are repaired first by a tiered
//! imputation policy (interpolation, day-back lag substitution, monthly
//! climate normals, forward/backward fill).
//!
//! The engine is a pure in-memory table transform: no I/O, no
//! persistence, no scheduling. Orchestration layers call it with a raw
//! frame and consume the output frame.
//!
//! # Example
//!
//! ```
//! use meteo_features::prelude::*;
//! use chrono::{NaiveDate, TimeDelta};
//!
//! let base = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let timestamps: Vec<_> = (0..48).map(|i| base + TimeDelta::hours(i)).collect();
//! let n = timestamps.len();
//!
//! let frame = TimeFrame::from_columns(
//!     timestamps,
//!     vec![
//!         ("temperature_2m".to_string(), vec![4.0; n]),
//!         ("shortwave_radiation".to_string(), vec![150.0; n]),
//!         ("cloud_cover".to_string(), vec![55.0; n]),
//!         ("precipitation".to_string(), vec![0.0; n]),
//!     ],
//! )
//! .unwrap();
//!
//! let gold = GoldPipeline::default().run(frame).unwrap();
//! assert_eq!(gold.column_names().len(), 29);
//! ```

pub mod calendar;
pub mod core;
pub mod error;
pub mod features;
pub mod impute;
pub mod pipeline;
pub mod transform;

pub use error::{FeatureError, Result};

pub mod prelude {
    pub use crate::calendar::HolidayCalendar;
    pub use crate::core::TimeFrame;
    pub use crate::error::{FeatureError, Result};
    pub use crate::features::{REQUIRED_WEATHER_COLS, SELECTED_FEATURES};
    pub use crate::impute::MonthlyClimate;
    pub use crate::pipeline::{FeatureConfig, GoldPipeline};
}

//! Gold-layer feature builders.
//!
//! Each builder adds columns to the frame and never rewrites a column a
//! sibling builder reads from the pre-transform state. The orchestrator
//! invokes them in a fixed order: temporal → Fourier → weather-derived
//! → thermal dynamics → interactions.

pub mod fourier;
pub mod interaction;
pub mod temporal;
pub mod thermal;
pub mod weather;

pub use fourier::add_fourier_features;
pub use interaction::add_interactions;
pub use temporal::add_temporal_features;
pub use thermal::add_thermal_dynamics;
pub use weather::add_weather_features;

/// The 4 raw weather variables every input frame must carry.
pub const REQUIRED_WEATHER_COLS: [&str; 4] = [
    "temperature_2m",
    "shortwave_radiation",
    "cloud_cover",
    "precipitation",
];

/// The 29 canonical output features, in fixed order.
///
/// The output table carries `datetime` plus whichever of these are
/// present after derivation. Intermediate columns (`hour`,
/// `day_of_week`) are consumed by later builders and deliberately
/// excluded here.
pub const SELECTED_FEATURES: [&str; 29] = [
    // Temporal / Fourier (11)
    "hour_sin",
    "hour_cos",
    "dow_sin",
    "dow_cos",
    "annual_sin",
    "annual_cos",
    "semi_annual_sin",
    "semi_annual_cos",
    "is_weekend",
    "is_holiday",
    "is_daylight",
    // Temperature-derived (11)
    "temperature_2m",
    "heating_degree_hour",
    "temp_rolling_mean_24h",
    "temp_rolling_std_24h",
    "temp_change_rate_3h",
    "thermal_inertia_12h",
    "temp_gradient_24h",
    "heating_degree_rolling_mean_24h",
    "cumulative_hdd_48h",
    "temp_x_hour_sin",
    "heating_x_night",
    // Radiation-derived (3)
    "shortwave_radiation",
    "radiation_rolling_mean_24h",
    "radiation_x_daytime",
    // Cloud-derived (2)
    "cloud_cover",
    "cloud_cover_rolling_mean_24h",
    // Precipitation (1)
    "precipitation",
    // Interaction (1)
    "weekend_x_hour_cos",
];

//! Series transformations: fills, interpolation, and window statistics.

pub mod fill;
pub mod window;

pub use fill::{backward_fill, forward_fill, interpolate_linear, nan_count, nan_median};
pub use window::{ewm_mean_halflife, rolling_mean, rolling_std, rolling_sum, shift};

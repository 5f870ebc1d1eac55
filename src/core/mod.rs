//! Core data structures for feature engineering.

mod frame;

pub use frame::TimeFrame;

//! Gold feature pipeline: validation, imputation, builder sequencing
//! and final column selection.

use crate::calendar::HolidayCalendar;
use crate::core::TimeFrame;
use crate::error::{FeatureError, Result};
use crate::features::{
    add_fourier_features, add_interactions, add_temporal_features, add_thermal_dynamics,
    add_weather_features, REQUIRED_WEATHER_COLS, SELECTED_FEATURES,
};
use crate::impute::repair::{repair_edge_nans, EDGE_NAN_LIMIT};
use crate::impute::tiered::impute_missing_weather;
use crate::impute::MonthlyClimate;
use tracing::{info, warn};

/// Configuration for the gold feature pipeline.
///
/// Immutable once handed to [`GoldPipeline::new`]; concurrent pipeline
/// runs against the same configuration are safe.
#[derive(Debug, Clone)]
pub struct FeatureConfig {
    /// Longest gap, in rows, still repaired by linear interpolation.
    pub small_gap_threshold: usize,
    /// Whether to run tiered imputation before feature derivation.
    pub impute_missing: bool,
    /// First year covered by the holiday calendar.
    pub holiday_start_year: i32,
    /// Last year (inclusive) covered by the holiday calendar.
    pub holiday_end_year: i32,
    /// Reindex the frame onto a dense hourly grid before gap analysis,
    /// turning physically absent rows into explicit NaN rows. Off by
    /// default: the legacy behavior is purely positional and preserves
    /// the input row count.
    pub reindex_hourly: bool,
    /// Monthly climate normals used as the last-resort fill.
    pub climate: MonthlyClimate,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            small_gap_threshold: 6,
            impute_missing: true,
            holiday_start_year: 2020,
            holiday_end_year: 2035,
            reindex_hourly: false,
            climate: MonthlyClimate::alpine_defaults(),
        }
    }
}

impl FeatureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_small_gap_threshold(mut self, threshold: usize) -> Self {
        self.small_gap_threshold = threshold;
        self
    }

    pub fn with_impute_missing(mut self, impute: bool) -> Self {
        self.impute_missing = impute;
        self
    }

    pub fn with_holiday_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.holiday_start_year = start_year;
        self.holiday_end_year = end_year;
        self
    }

    pub fn with_reindex_hourly(mut self, reindex: bool) -> Self {
        self.reindex_hourly = reindex;
        self
    }

    pub fn with_climate(mut self, climate: MonthlyClimate) -> Self {
        self.climate = climate;
        self
    }
}

/// The gold feature pipeline.
///
/// Holds the holiday calendar and climate normals as read-only state,
/// built once at construction. [`run`] is a pure transform of its input
/// frame: it either returns a complete feature table or fails
/// synchronously, leaving retries to the caller.
///
/// [`run`]: GoldPipeline::run
#[derive(Debug, Clone)]
pub struct GoldPipeline {
    config: FeatureConfig,
    holidays: HolidayCalendar,
}

impl GoldPipeline {
    /// Build a pipeline, generating the holiday calendar for the
    /// configured year span.
    pub fn new(config: FeatureConfig) -> Self {
        let holidays =
            HolidayCalendar::italian(config.holiday_start_year, config.holiday_end_year);
        Self { config, holidays }
    }

    /// The pipeline's holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Build the 29 canonical gold features from a raw weather frame.
    ///
    /// The output carries the subset of canonical features that could
    /// be computed, in canonical order, with the same row count and
    /// chronological order as the sorted input.
    pub fn run(&self, frame: TimeFrame) -> Result<TimeFrame> {
        self.run_with_features(frame, &SELECTED_FEATURES)
    }

    /// Build features against an explicit canonical list.
    ///
    /// Sibling pipelines with a different fixed feature set share this
    /// entry point; [`run`] is the gold list bound to it.
    ///
    /// [`run`]: GoldPipeline::run
    pub fn run_with_features(&self, mut frame: TimeFrame, features: &[&str]) -> Result<TimeFrame> {
        info!(rows = frame.len(), "building gold features");

        let missing: Vec<String> = REQUIRED_WEATHER_COLS
            .iter()
            .filter(|col| !frame.has_column(col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(FeatureError::MissingColumns { columns: missing });
        }

        frame.sort_by_time();
        if self.config.reindex_hourly {
            frame = frame.reindex_hourly()?;
        }

        if self.config.impute_missing {
            frame = impute_missing_weather(
                frame,
                self.config.small_gap_threshold,
                &self.config.climate,
            )?;
        }

        frame = add_temporal_features(frame, &self.holidays)?;
        frame = add_fourier_features(frame)?;
        frame = add_weather_features(frame)?;
        frame = add_thermal_dynamics(frame)?;
        frame = add_interactions(frame)?;

        let available: Vec<&str> = features
            .iter()
            .copied()
            .filter(|f| frame.has_column(f))
            .collect();
        let absent: Vec<&str> = features
            .iter()
            .copied()
            .filter(|f| !frame.has_column(f))
            .collect();
        if !absent.is_empty() {
            warn!(?absent, "features missing from the canonical set");
        }

        let selected = frame.select(&available)?;
        let repaired = repair_edge_nans(selected, &available, EDGE_NAN_LIMIT)?;

        info!(
            features = available.len(),
            rows = repaired.len(),
            "gold features built"
        );
        Ok(repaired)
    }
}

impl Default for GoldPipeline {
    fn default() -> Self {
        Self::new(FeatureConfig::default())
    }
}

//! TimeFrame data structure for timestamp-keyed tabular data.

use crate::error::{FeatureError, Result};
use chrono::{NaiveDateTime, TimeDelta};
use std::collections::HashMap;

/// A named column of `f64` values. Missing values are `f64::NAN`.
#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// A table of rows keyed by timezone-naive timestamps, with
/// insertion-ordered named `f64` columns.
///
/// Rows are identified by position; gap and lag logic downstream operates
/// on row position, not elapsed wall-clock time. Builders only add
/// columns; rows are never deleted or reordered after [`sort_by_time`].
///
/// [`sort_by_time`]: TimeFrame::sort_by_time
#[derive(Debug, Clone)]
pub struct TimeFrame {
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<Column>,
}

impl TimeFrame {
    /// Create an empty frame over the given timestamps.
    pub fn new(timestamps: Vec<NaiveDateTime>) -> Self {
        Self {
            timestamps,
            columns: Vec::new(),
        }
    }

    /// Create a frame from timestamps and named columns.
    ///
    /// Every column must have the same length as the timestamp vector.
    pub fn from_columns(
        timestamps: Vec<NaiveDateTime>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> Result<Self> {
        let mut frame = Self::new(timestamps);
        for (name, values) in columns {
            frame.insert_column(name, values)?;
        }
        Ok(frame)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Row timestamps in frame order.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Values of a column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Values of a column, or [`FeatureError::ColumnNotFound`].
    pub fn require_column(&self, name: &str) -> Result<&[f64]> {
        self.column(name)
            .ok_or_else(|| FeatureError::ColumnNotFound(name.to_string()))
    }

    /// Insert a column, replacing any existing column with the same name.
    ///
    /// The value count must match the row count.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        if values.len() != self.timestamps.len() {
            return Err(FeatureError::DimensionMismatch {
                expected: self.timestamps.len(),
                got: values.len(),
            });
        }
        let name = name.into();
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(Column { name, values }),
        }
        Ok(())
    }

    /// Count of NaN entries in a column, if present.
    pub fn missing_count(&self, name: &str) -> Option<usize> {
        self.column(name)
            .map(|values| values.iter().filter(|v| v.is_nan()).count())
    }

    /// Stable sort of rows by timestamp ascending.
    ///
    /// Re-establishes the dense positional order assumed by gap and lag
    /// logic. Rows with equal timestamps keep their relative order.
    pub fn sort_by_time(&mut self) {
        if self.timestamps.windows(2).all(|w| w[0] <= w[1]) {
            return;
        }
        let mut order: Vec<usize> = (0..self.timestamps.len()).collect();
        order.sort_by_key(|&i| self.timestamps[i]);

        self.timestamps = order.iter().map(|&i| self.timestamps[i]).collect();
        for column in &mut self.columns {
            column.values = order.iter().map(|&i| column.values[i]).collect();
        }
    }

    /// Project the frame onto a subset of columns, in the requested order.
    ///
    /// Timestamps are carried over unchanged. Unknown names are an error.
    pub fn select(&self, names: &[&str]) -> Result<TimeFrame> {
        let mut frame = TimeFrame::new(self.timestamps.clone());
        for &name in names {
            let values = self.require_column(name)?.to_vec();
            frame.insert_column(name, values)?;
        }
        Ok(frame)
    }

    /// Reindex the frame onto a dense, regular hourly timeline.
    ///
    /// Rows absent from the input become all-NaN rows, making physically
    /// missing hours visible to positional gap analysis. Requires sorted,
    /// duplicate-free timestamps aligned to whole hours relative to the
    /// first row.
    pub fn reindex_hourly(&self) -> Result<TimeFrame> {
        if self.len() < 2 {
            return Ok(self.clone());
        }

        let start = self.timestamps[0];
        let mut index: HashMap<NaiveDateTime, usize> = HashMap::with_capacity(self.len());
        for (row, &ts) in self.timestamps.iter().enumerate() {
            let offset = ts - start;
            if offset < TimeDelta::zero() {
                return Err(FeatureError::TimestampError(
                    "timestamps must be sorted before reindexing".to_string(),
                ));
            }
            if offset.num_seconds() % 3600 != 0 {
                return Err(FeatureError::TimestampError(format!(
                    "timestamp {ts} is not aligned to a whole hour"
                )));
            }
            if index.insert(ts, row).is_some() {
                return Err(FeatureError::TimestampError(format!(
                    "duplicate timestamp {ts}"
                )));
            }
        }

        let end = self.timestamps[self.len() - 1];
        let hours = (end - start).num_hours() as usize;
        let timestamps: Vec<NaiveDateTime> = (0..=hours)
            .map(|h| start + TimeDelta::hours(h as i64))
            .collect();

        let mut frame = TimeFrame::new(timestamps.clone());
        for column in &self.columns {
            let values: Vec<f64> = timestamps
                .iter()
                .map(|ts| index.get(ts).map_or(f64::NAN, |&row| column.values[row]))
                .collect();
            frame.insert_column(column.name.clone(), values)?;
        }
        Ok(frame)
    }
}

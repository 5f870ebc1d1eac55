//! Edge-case NaN repair after feature derivation.
//!
//! Rolling and lag features leave NaN in their warmup region at the
//! series edges. Those are patched here; anything beyond the warmup
//! bound is reported and left in place.

use crate::core::TimeFrame;
use crate::error::Result;
use crate::transform::fill::{backward_fill, forward_fill, nan_count, nan_median};
use tracing::{debug, warn};

/// Upper bound on NaN counts treated as rolling/lag warmup. The longest
/// warmup among the derived features is the 48-hour rolling sum.
pub const EDGE_NAN_LIMIT: usize = 48;

/// Patch residual NaN in the given feature columns.
///
/// Columns with at most `max_warmup` missing values are backward- then
/// forward-filled, with the column median (or 0.0 when the median is
/// undefined) as a final fallback. Columns with more missing values
/// than that are left untouched and reported: a warning, not an error.
pub fn repair_edge_nans(
    mut frame: TimeFrame,
    columns: &[&str],
    max_warmup: usize,
) -> Result<TimeFrame> {
    for &col in columns {
        let Some(values) = frame.column(col) else {
            continue;
        };
        let n_nan = nan_count(values);
        if n_nan == 0 {
            continue;
        }

        if n_nan <= max_warmup {
            let mut patched = forward_fill(&backward_fill(values));
            if nan_count(&patched) > 0 {
                let median = nan_median(&patched);
                let fill = if median.is_nan() { 0.0 } else { median };
                for v in patched.iter_mut() {
                    if v.is_nan() {
                        *v = fill;
                    }
                }
            }
            debug!(column = col, filled = n_nan, "filled edge-case NaN");
            frame.insert_column(col, patched)?;
        } else {
            warn!(
                column = col,
                missing = n_nan,
                "column has more NaN values than the warmup period, leaving as-is"
            );
        }
    }
    Ok(frame)
}

//! Fill strategies for missing values in a series.
//!
//! Missing values are `f64::NAN` throughout.

/// Count of NaN entries in a series.
pub fn nan_count(series: &[f64]) -> usize {
    series.iter().filter(|v| v.is_nan()).count()
}

/// Propagate the last valid value forward into NaN positions.
///
/// Leading NaN values stay NaN.
pub fn forward_fill(series: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(series.len());
    let mut last_valid = None;
    for &v in series {
        if v.is_nan() {
            result.push(last_valid.unwrap_or(v));
        } else {
            last_valid = Some(v);
            result.push(v);
        }
    }
    result
}

/// Propagate the next valid value backward into NaN positions.
///
/// Trailing NaN values stay NaN.
pub fn backward_fill(series: &[f64]) -> Vec<f64> {
    let mut result = vec![f64::NAN; series.len()];
    let mut next_valid = None;
    for (i, &v) in series.iter().enumerate().rev() {
        if v.is_nan() {
            result[i] = next_valid.unwrap_or(v);
        } else {
            next_valid = Some(v);
            result[i] = v;
        }
    }
    result
}

/// Bounded linear interpolation over NaN runs.
///
/// Interior runs are filled on the straight line between their bounding
/// valid values; trailing runs hold the last valid value; leading runs
/// are left untouched. At most `limit` consecutive positions are filled
/// per run, counted from the run start (`None` = unbounded).
pub fn interpolate_linear(series: &[f64], limit: Option<usize>) -> Vec<f64> {
    let mut result = series.to_vec();
    let n = result.len();
    let max_fill = limit.unwrap_or(usize::MAX);

    let mut i = 0;
    while i < n {
        if !result[i].is_nan() {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && result[i].is_nan() {
            i += 1;
        }
        let end = i; // exclusive

        let left = if start > 0 { Some(result[start - 1]) } else { None };
        let right = if end < n { Some(result[end]) } else { None };

        match (left, right) {
            (Some(l), Some(r)) => {
                let segments = (end - start + 1) as f64;
                for (j, idx) in (start..end).enumerate() {
                    if j >= max_fill {
                        break;
                    }
                    let t = (j + 1) as f64 / segments;
                    result[idx] = l + t * (r - l);
                }
            }
            (Some(l), None) => {
                for (j, idx) in (start..end).enumerate() {
                    if j >= max_fill {
                        break;
                    }
                    result[idx] = l;
                }
            }
            // No left anchor: leave the leading run as NaN.
            _ => {}
        }
    }

    result
}

/// Median of the non-NaN values, or NaN if there are none.
pub fn nan_median(series: &[f64]) -> f64 {
    let mut valid: Vec<f64> = series.iter().copied().filter(|v| !v.is_nan()).collect();
    if valid.is_empty() {
        return f64::NAN;
    }
    valid.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = valid.len();
    if n % 2 == 0 {
        (valid[n / 2 - 1] + valid[n / 2]) / 2.0
    } else {
        valid[n / 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==================== forward_fill / backward_fill ====================

    #[test]
    fn forward_fill_propagates_last_valid() {
        let result = forward_fill(&[1.0, f64::NAN, f64::NAN, 4.0, f64::NAN]);
        assert_eq!(result, vec![1.0, 1.0, 1.0, 4.0, 4.0]);
    }

    #[test]
    fn forward_fill_leaves_leading_nan() {
        let result = forward_fill(&[f64::NAN, f64::NAN, 3.0]);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(result[2], 3.0);
    }

    #[test]
    fn backward_fill_propagates_next_valid() {
        let result = backward_fill(&[f64::NAN, 2.0, f64::NAN, 4.0]);
        assert_eq!(result, vec![2.0, 2.0, 4.0, 4.0]);
    }

    #[test]
    fn backward_fill_leaves_trailing_nan() {
        let result = backward_fill(&[1.0, f64::NAN, f64::NAN]);
        assert_eq!(result[0], 1.0);
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
    }

    // ==================== interpolate_linear ====================

    #[test]
    fn interpolation_fills_interior_run() {
        let result = interpolate_linear(&[1.0, f64::NAN, f64::NAN, 4.0], None);
        assert_relative_eq!(result[1], 2.0, epsilon = 1e-10);
        assert_relative_eq!(result[2], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn interpolation_respects_limit() {
        let series = vec![0.0, f64::NAN, f64::NAN, f64::NAN, 4.0];
        let result = interpolate_linear(&series, Some(2));
        assert_relative_eq!(result[1], 1.0, epsilon = 1e-10);
        assert_relative_eq!(result[2], 2.0, epsilon = 1e-10);
        assert!(result[3].is_nan());
        assert_relative_eq!(result[4], 4.0, epsilon = 1e-10);
    }

    #[test]
    fn interpolation_holds_trailing_run() {
        let result = interpolate_linear(&[1.0, 2.0, f64::NAN, f64::NAN], None);
        assert_eq!(result, vec![1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn interpolation_leaves_leading_run() {
        let result = interpolate_linear(&[f64::NAN, f64::NAN, 3.0], None);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_eq!(result[2], 3.0);
    }

    #[test]
    fn interpolation_all_nan_is_unchanged() {
        let result = interpolate_linear(&[f64::NAN, f64::NAN], None);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    // ==================== nan_median / nan_count ====================

    #[test]
    fn median_skips_nan_values() {
        let series = vec![5.0, f64::NAN, 1.0, f64::NAN, 3.0];
        assert_relative_eq!(nan_median(&series), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn median_even_count() {
        let series = vec![1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(nan_median(&series), 2.5, epsilon = 1e-10);
    }

    #[test]
    fn median_of_all_nan_is_nan() {
        assert!(nan_median(&[f64::NAN, f64::NAN]).is_nan());
        assert!(nan_median(&[]).is_nan());
    }

    #[test]
    fn nan_count_basic() {
        assert_eq!(nan_count(&[1.0, f64::NAN, 3.0]), 1);
        assert_eq!(nan_count(&[]), 0);
    }
}

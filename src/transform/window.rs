//! Trailing window statistics and lag operators.
//!
//! All functions skip NaN entries inside the window: an aggregate is
//! emitted once the count of valid observations reaches `min_periods`,
//! otherwise NaN. Windows are trailing (`[i + 1 - window, i]`, clamped
//! at the series start), matching dataframe rolling semantics.

/// Trailing rolling mean over valid values in the window.
pub fn rolling_mean(series: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    rolling_apply(series, window, min_periods, |valid| {
        valid.iter().sum::<f64>() / valid.len() as f64
    })
}

/// Trailing rolling sample standard deviation (n − 1 denominator).
///
/// A window with fewer than two valid observations yields NaN even when
/// `min_periods` is 1; the sample variance of a single point is undefined.
pub fn rolling_std(series: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    rolling_apply(series, window, min_periods, |valid| {
        if valid.len() < 2 {
            return f64::NAN;
        }
        let mean = valid.iter().sum::<f64>() / valid.len() as f64;
        let var = valid.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (valid.len() - 1) as f64;
        var.sqrt()
    })
}

/// Trailing rolling sum over valid values in the window.
pub fn rolling_sum(series: &[f64], window: usize, min_periods: usize) -> Vec<f64> {
    rolling_apply(series, window, min_periods, |valid| valid.iter().sum())
}

/// Generic trailing window application over the valid values.
fn rolling_apply<F>(series: &[f64], window: usize, min_periods: usize, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let n = series.len();
    if window == 0 {
        return vec![f64::NAN; n];
    }
    let min_periods = min_periods.max(1);

    let mut result = vec![f64::NAN; n];
    let mut valid = Vec::with_capacity(window);
    for i in 0..n {
        let start = (i + 1).saturating_sub(window);
        valid.clear();
        valid.extend(series[start..=i].iter().copied().filter(|v| !v.is_nan()));
        if valid.len() >= min_periods {
            result[i] = f(&valid);
        }
    }
    result
}

/// Exponentially weighted mean with a half-life in samples.
///
/// Uses normalized decaying weights over all prior observations
/// (`adjust=True` semantics): a NaN input decays the accumulators
/// without contributing a new observation. Output is NaN until
/// `min_periods` valid observations have been seen.
pub fn ewm_mean_halflife(series: &[f64], halflife: f64, min_periods: usize) -> Vec<f64> {
    let n = series.len();
    if !(halflife > 0.0) {
        return vec![f64::NAN; n];
    }
    let min_periods = min_periods.max(1);
    let decay = (-(std::f64::consts::LN_2) / halflife).exp();

    let mut result = vec![f64::NAN; n];
    let mut num = 0.0;
    let mut den = 0.0;
    let mut seen = 0usize;
    for (i, &x) in series.iter().enumerate() {
        num *= decay;
        den *= decay;
        if !x.is_nan() {
            num += x;
            den += 1.0;
            seen += 1;
        }
        if seen >= min_periods && den > 0.0 {
            result[i] = num / den;
        }
    }
    result
}

/// Shift a series forward by `periods` rows, introducing leading NaN.
pub fn shift(series: &[f64], periods: usize) -> Vec<f64> {
    let n = series.len();
    let mut result = vec![f64::NAN; n];
    for i in periods..n {
        result[i] = series[i - periods];
    }
    result
}

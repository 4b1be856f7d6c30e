//! Long-memory exponent via rescaled-range (R/S) analysis.
//!
//! Simplified variant in "price" mode: each chunk's range is measured as the
//! percent spread between its extremes and scaled by the standard deviation
//! of its simple returns. The exponent is the slope of log10(mean R/S)
//! against log10(chunk size) over log-spaced chunk sizes.
//!
//! Readings: > 0.5 trending, < 0.5 mean-reverting, ~0.5 random walk.
//!
//! The estimator is deliberately conservative about failure: any non-finite
//! or non-positive intermediate (a chunk touching zero, a negative percent
//! range, a degenerate regression) yields None rather than a number nobody
//! should trust. The 100-observation floor lives in config and is enforced
//! here as well.

use crate::config::ANALYSIS;
use crate::utils::maths_utils::{ols_slope, pct_returns, sample_std_dev};

/// Rescaled-range estimate of the long-memory exponent, or None when the
/// series is too short or numerically degenerate.
pub fn hurst_exponent(series: &[f64]) -> Option<f64> {
    let n = series.len();
    if n < ANALYSIS.hurst_min_observations {
        return None;
    }

    let mut log_sizes = Vec::new();
    let mut log_rs = Vec::new();

    for size in chunk_sizes(n) {
        let mut rs_sum = 0.0;
        let mut chunks = 0usize;

        let mut start = 0;
        while start + size <= n {
            if let Some(rs) = simplified_rs(&series[start..start + size]) {
                rs_sum += rs;
                chunks += 1;
            }
            start += size;
        }

        if chunks == 0 {
            continue;
        }
        let mean_rs = rs_sum / chunks as f64;
        // A non-positive mean R/S has no logarithm; the series is outside
        // the estimator's domain (this is the classic failure on return
        // series whose chunk minima are negative).
        if !mean_rs.is_finite() || mean_rs <= 0.0 {
            return None;
        }

        log_sizes.push((size as f64).log10());
        log_rs.push(mean_rs.log10());
    }

    if log_sizes.len() < 2 {
        return None;
    }

    let slope = ols_slope(&log_sizes, &log_rs)?;
    slope.is_finite().then_some(slope)
}

/// Log-spaced chunk sizes: 10^1.0, 10^1.25, ... below n-1, then n itself.
fn chunk_sizes(n: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    let limit = ((n - 1) as f64).log10();
    let mut exponent = 1.0f64;
    while exponent < limit {
        sizes.push(10f64.powf(exponent) as usize);
        exponent += 0.25;
    }
    sizes.push(n);
    sizes
}

/// R/S statistic for one chunk, "price" mode: percent range over return
/// volatility. None for flat chunks and any non-finite intermediate.
fn simplified_rs(chunk: &[f64]) -> Option<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in chunk {
        min = min.min(value);
        max = max.max(value);
    }

    let returns = pct_returns(chunk);
    let scale = sample_std_dev(&returns)?;
    if scale == 0.0 {
        return None;
    }

    let range = max / min - 1.0;
    let rs = range / scale;
    if rs == 0.0 || !rs.is_finite() {
        return None;
    }
    Some(rs)
}

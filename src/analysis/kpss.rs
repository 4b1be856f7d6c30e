//! KPSS level-stationarity test (constant-only regression).
//!
//! H₀ here is stationarity around a level, so a HIGH p-value supports
//! stationarity; this is the mirror image of the ADF convention. The long-run
//! variance uses a Bartlett-kernel Newey-West estimator with the automatic
//! bandwidth of Newey-West (1994), and p-values interpolate between the
//! Kwiatkowski et al. (1992) critical values for the level case.
//!
//! Unlike the ADF test, degenerate input (no variation, collapsed long-run
//! variance) is an expected condition for small windows. Callers treat an
//! error from here as a per-window recoverable failure, not a fault.

use anyhow::{Result, bail};

use crate::utils::maths_utils::mean;

const MIN_OBSERVATIONS: usize = 5;
const MIN_VARIANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpssOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

pub fn kpss_test(series: &[f64]) -> Result<KpssOutcome> {
    let n = series.len();
    if n < MIN_OBSERVATIONS {
        bail!("KPSS test needs at least {MIN_OBSERVATIONS} observations, got {n}");
    }

    // Constant-only: residuals are the demeaned series
    let level = mean(series);
    let residuals: Vec<f64> = series.iter().map(|x| x - level).collect();

    let variance = residuals.iter().map(|r| r * r).sum::<f64>() / n as f64;
    if variance < MIN_VARIANCE {
        bail!("no usable variation in the series");
    }

    // Numerator: scaled sum of squared partial sums of the residuals
    let mut cumulative = 0.0;
    let mut sum_sq_partial = 0.0;
    for r in &residuals {
        cumulative += r;
        sum_sq_partial += cumulative * cumulative;
    }
    let numerator = sum_sq_partial / (n as f64 * n as f64);

    let bandwidth = automatic_bandwidth(&residuals);
    let long_run_variance = bartlett_long_run_variance(&residuals, bandwidth);
    if !long_run_variance.is_finite() || long_run_variance <= MIN_VARIANCE {
        bail!("long-run variance collapsed to zero (bandwidth {bandwidth})");
    }

    let statistic = numerator / long_run_variance;
    Ok(KpssOutcome {
        statistic,
        p_value: kpss_p_value(statistic),
    })
}

/// Autocovariance at `lag`, normalized by n.
fn autocovariance(residuals: &[f64], lag: usize) -> f64 {
    let n = residuals.len();
    residuals[lag..]
        .iter()
        .zip(&residuals[..n - lag])
        .map(|(a, b)| a * b)
        .sum::<f64>()
        / n as f64
}

/// Newey-West (1994) automatic truncation lag for the Bartlett kernel,
/// capped at sqrt(n) for small samples to avoid over-smoothing.
fn automatic_bandwidth(residuals: &[f64]) -> usize {
    let n = residuals.len();
    let pilot = (4.0 * (n as f64 / 100.0).powf(2.0 / 9.0)) as usize;
    let pilot = pilot.min(n - 1);

    let gamma0 = autocovariance(residuals, 0);
    let mut s0 = gamma0;
    let mut s1 = 0.0;
    for j in 1..=pilot {
        let gamma = autocovariance(residuals, j);
        s0 += 2.0 * gamma;
        s1 += 2.0 * j as f64 * gamma;
    }

    let fallback = ((12.0 * (n as f64 / 100.0).powf(0.25)) as usize).min(n - 1);
    if s0.abs() < MIN_VARIANCE {
        return small_sample_cap(fallback, n);
    }

    let ratio = 1.1447 * ((s1 / s0) * (s1 / s0)).powf(1.0 / 3.0);
    let bandwidth = (ratio * (n as f64).powf(1.0 / 3.0)) as usize;
    if !ratio.is_finite() {
        return small_sample_cap(fallback, n);
    }

    small_sample_cap(bandwidth.min(n - 1), n)
}

fn small_sample_cap(bandwidth: usize, n: usize) -> usize {
    if n < 100 {
        bandwidth.min((n as f64).sqrt().ceil() as usize)
    } else {
        bandwidth
    }
}

/// Bartlett-weighted long-run variance estimate.
fn bartlett_long_run_variance(residuals: &[f64], bandwidth: usize) -> f64 {
    let mut lrv = autocovariance(residuals, 0);
    for j in 1..=bandwidth {
        let weight = 1.0 - j as f64 / (bandwidth as f64 + 1.0);
        lrv += 2.0 * weight * autocovariance(residuals, j);
    }
    lrv
}

/// Approximate p-value by interpolating the Kwiatkowski et al. (1992)
/// critical values for level stationarity.
fn kpss_p_value(statistic: f64) -> f64 {
    if statistic > 0.739 {
        0.001
    } else if statistic > 0.574 {
        0.01 + 0.015 * ((0.739 - statistic) / (0.739 - 0.574))
    } else if statistic > 0.463 {
        0.025 + 0.025 * ((0.574 - statistic) / (0.574 - 0.463))
    } else if statistic > 0.347 {
        0.05 + 0.05 * ((0.463 - statistic) / (0.463 - 0.347))
    } else if statistic > 0.1 {
        0.10 + 0.9 * ((0.347 - statistic) / 0.347).clamp(0.0, 1.0)
    } else {
        0.99
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Level-stationary: alternates around a constant level.
    fn level_stationary_series(len: usize) -> Vec<f64> {
        (0..len)
            .map(|t| 5.0 + if t % 2 == 0 { 1.0 } else { -1.0 })
            .collect()
    }

    fn trending_series(len: usize) -> Vec<f64> {
        (0..len).map(|t| t as f64 + 0.2 * (t as f64).sin()).collect()
    }

    #[test]
    fn supports_stationarity_for_level_series() {
        let outcome = kpss_test(&level_stationary_series(200)).unwrap();
        assert!(
            outcome.p_value > 0.05,
            "expected high p-value, got {} (stat={})",
            outcome.p_value,
            outcome.statistic
        );
    }

    #[test]
    fn rejects_stationarity_for_trending_series() {
        let outcome = kpss_test(&trending_series(200)).unwrap();
        assert!(
            outcome.p_value < 0.05,
            "expected rejection, got p={} (stat={})",
            outcome.p_value,
            outcome.statistic
        );
        assert!(outcome.statistic > 0.739);
    }

    #[test]
    fn constant_series_fails_recoverably() {
        let err = kpss_test(&[3.0; 50]).unwrap_err();
        assert!(err.to_string().contains("variation"));
    }

    #[test]
    fn short_series_fails_recoverably() {
        assert!(kpss_test(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn p_value_interpolation_is_monotone() {
        let stats = [0.05, 0.2, 0.4, 0.5, 0.6, 0.8];
        for pair in stats.windows(2) {
            assert!(kpss_p_value(pair[0]) >= kpss_p_value(pair[1]));
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let series = level_stationary_series(120);
        assert_eq!(kpss_test(&series).unwrap(), kpss_test(&series).unwrap());
    }
}

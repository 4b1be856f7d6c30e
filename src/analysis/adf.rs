//! Augmented Dickey-Fuller unit-root test.
//!
//! Constant-only regression with automatic lag selection by AIC over
//! 0..=Schwert's rule-of-thumb maximum. P-values come from linear
//! interpolation between MacKinnon (1994) finite-sample critical values for
//! the constant-only specification. That approximation is plenty for a
//! threshold-at-0.05 dashboard; exact response surfaces are not warranted.

use anyhow::{Result, anyhow, bail};

use crate::utils::maths_utils::ols_fit;

/// Fewer observations than this and no usable regression exists.
/// A failure at this level is fatal for the whole run, by design.
const MIN_OBSERVATIONS: usize = 5;

const SE_TOL: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdfOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

/// Run the ADF test: Δy_t = α + β·y_{t-1} + Σ γ_i·Δy_{t-i} + ε_t,
/// H₀: β = 0 (unit root). A low p-value rejects the unit root.
pub fn adf_test(series: &[f64]) -> Result<AdfOutcome> {
    let n = series.len();
    if n < MIN_OBSERVATIONS {
        bail!("ADF test needs at least {MIN_OBSERVATIONS} observations, got {n}");
    }

    // First differences: diffs[t] = series[t + 1] - series[t]
    let diffs: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();

    // Schwert's rule for the maximum lag order
    let max_lag = (12.0 * (n as f64 / 100.0).powf(0.25)) as usize;

    let mut best: Option<(f64, f64)> = None; // (aic, t_statistic)
    for lag in 0..=max_lag {
        let Some(rows) = diffs.len().checked_sub(lag) else {
            break;
        };
        let k = lag + 2; // intercept + lagged level + `lag` lagged differences
        if rows < k + 2 {
            // Longer lags only shrink the sample further
            break;
        }

        // Column-major design: [1, y_{t-1}, Δy_{t-1}, ..., Δy_{t-lag}]
        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(k);
        columns.push(vec![1.0; rows]);
        columns.push((lag..diffs.len()).map(|t| series[t]).collect());
        for j in 1..=lag {
            columns.push((lag..diffs.len()).map(|t| diffs[t - j]).collect());
        }
        let y: Vec<f64> = diffs[lag..].to_vec();

        let fit = match ols_fit(&columns, &y) {
            Ok(fit) => fit,
            // Singular design for this lag order; the next one may still work
            Err(_) => continue,
        };

        let se = fit.standard_errors[1];
        if se < SE_TOL {
            continue;
        }
        let t_statistic = fit.coefficients[1] / se;
        let aic = rows as f64 * (fit.rss.max(f64::MIN_POSITIVE) / rows as f64).ln()
            + 2.0 * k as f64;

        if best.is_none_or(|(best_aic, _)| aic < best_aic) {
            best = Some((aic, t_statistic));
        }
    }

    let (_, statistic) = best.ok_or_else(|| {
        anyhow!("ADF regression failed for every lag order (degenerate series of length {n})")
    })?;

    Ok(AdfOutcome {
        statistic,
        p_value: mackinnon_p_value(statistic, n),
    })
}

/// Approximate p-value by interpolating between MacKinnon critical values
/// for the constant-only ADF regression, with finite-sample corrections.
fn mackinnon_p_value(t_statistic: f64, n: usize) -> f64 {
    let n_inv = 1.0 / n as f64;
    let n_inv2 = n_inv * n_inv;
    let cv_01 = -3.43035 - 6.5393 * n_inv - 16.786 * n_inv2;
    let cv_05 = -2.86154 - 2.8903 * n_inv - 4.234 * n_inv2;
    let cv_10 = -2.56677 - 1.5384 * n_inv - 2.809 * n_inv2;

    if t_statistic < cv_01 {
        0.001
    } else if t_statistic < cv_05 {
        0.01 + 0.04 * ((cv_05 - t_statistic) / (cv_05 - cv_01)).clamp(0.0, 1.0)
    } else if t_statistic < cv_10 {
        0.05 + 0.05 * ((cv_10 - t_statistic) / (cv_10 - cv_05)).clamp(0.0, 1.0)
    } else if t_statistic < 0.0 {
        0.10 + 0.89 * ((0.0 - t_statistic) / (0.0 - cv_10)).clamp(0.0, 1.0)
    } else {
        0.99
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic broadband noise via xorshift64 so the tests are
    /// reproducible without pulling in an RNG.
    fn noise(seed: u64, len: usize) -> Vec<f64> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state as f64 / u64::MAX as f64) - 0.5
            })
            .collect()
    }

    /// AR(1) with a small coefficient: strongly mean-reverting, no unit root.
    fn mean_reverting_series(len: usize) -> Vec<f64> {
        let mut level = 0.0;
        noise(123_456_789, len)
            .into_iter()
            .map(|shock| {
                level = 0.3 * level + shock;
                level
            })
            .collect()
    }

    /// Random walk with drift: the unit root the test must not reject.
    fn random_walk_with_drift(len: usize) -> Vec<f64> {
        let mut level = 100.0;
        noise(42, len)
            .into_iter()
            .map(|shock| {
                level += 0.5 + shock;
                level
            })
            .collect()
    }

    #[test]
    fn rejects_unit_root_for_mean_reverting_series() {
        let outcome = adf_test(&mean_reverting_series(200)).unwrap();
        assert!(
            outcome.p_value < 0.05,
            "expected rejection, got p={} (t={})",
            outcome.p_value,
            outcome.statistic
        );
        assert!(outcome.statistic < 0.0);
    }

    #[test]
    fn no_strong_rejection_for_random_walk() {
        let outcome = adf_test(&random_walk_with_drift(200)).unwrap();
        assert!(
            outcome.p_value > 0.01,
            "expected the unit root to survive, got p={} (t={})",
            outcome.p_value,
            outcome.statistic
        );
    }

    #[test]
    fn short_series_is_a_hard_error() {
        assert!(adf_test(&[0.1, -0.2, 0.3]).is_err());
        assert!(adf_test(&[]).is_err());
    }

    #[test]
    fn works_at_the_observation_floor() {
        // 5 observations is the shortest usable regression (lag 0 only)
        let outcome = adf_test(&[0.01, -0.02, 0.015, -0.01, 0.02]);
        assert!(outcome.is_ok());
    }

    #[test]
    fn deterministic_across_calls() {
        let series = mean_reverting_series(150);
        let a = adf_test(&series).unwrap();
        let b = adf_test(&series).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn p_value_interpolation_brackets() {
        // Far below every critical value
        assert!((mackinnon_p_value(-10.0, 200) - 0.001).abs() < 1e-12);
        // Far above: no evidence against the null
        assert!((mackinnon_p_value(2.0, 200) - 0.99).abs() < 1e-12);
        // Monotone in the statistic
        assert!(mackinnon_p_value(-3.0, 200) < mackinnon_p_value(-2.0, 200));
    }
}

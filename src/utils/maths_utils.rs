use anyhow::{Result, bail};
use statrs::statistics::Statistics;

/// Simple percentage returns between consecutive values.
/// Output length is input length minus one (empty for fewer than 2 inputs).
pub fn pct_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Sample standard deviation (ddof = 1). Undefined below 2 observations.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    (values.len() >= 2).then(|| values.iter().std_dev())
}

/// Slope of the least-squares line through (xs, ys).
/// None when the points are degenerate (fewer than 2, or zero x-variance).
pub fn ols_slope(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let x_mean = mean(xs);
    let y_mean = mean(ys);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    (denominator.abs() > f64::EPSILON).then(|| numerator / denominator)
}

pub struct OlsFit {
    pub coefficients: Vec<f64>,
    pub standard_errors: Vec<f64>,
    pub rss: f64,
}

/// Multiple OLS regression over column-major predictors.
/// Solves the normal equations and inverts the Gram matrix for coefficient
/// standard errors; the predictor count stays tiny here so Gauss-Jordan is fine.
pub fn ols_fit(columns: &[Vec<f64>], y: &[f64]) -> Result<OlsFit> {
    let k = columns.len();
    let n = y.len();
    if k == 0 {
        bail!("OLS called with no predictors");
    }
    for column in columns {
        if column.len() != n {
            bail!(
                "predictor length {} does not match response length {}",
                column.len(),
                n
            );
        }
    }
    if n <= k {
        bail!("not enough observations ({n}) for {k} predictors");
    }

    // Gram matrix X'X and moment vector X'y
    let mut gram = vec![vec![0.0; k]; k];
    let mut moment = vec![0.0; k];
    for i in 0..k {
        for j in i..k {
            let s: f64 = columns[i].iter().zip(&columns[j]).map(|(a, b)| a * b).sum();
            gram[i][j] = s;
            gram[j][i] = s;
        }
        moment[i] = columns[i].iter().zip(y).map(|(a, b)| a * b).sum();
    }

    let inverse = invert_matrix(&gram)?;

    let coefficients: Vec<f64> = (0..k)
        .map(|i| (0..k).map(|j| inverse[i][j] * moment[j]).sum())
        .collect();

    let mut rss = 0.0;
    for t in 0..n {
        let fitted: f64 = (0..k).map(|i| coefficients[i] * columns[i][t]).sum();
        let residual = y[t] - fitted;
        rss += residual * residual;
    }

    let sigma2 = rss / (n - k) as f64;
    let standard_errors = (0..k)
        .map(|i| (sigma2 * inverse[i][i]).max(0.0).sqrt())
        .collect();

    Ok(OlsFit {
        coefficients,
        standard_errors,
        rss,
    })
}

const PIVOT_TOL: f64 = 1e-12;

fn invert_matrix(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let k = matrix.len();

    // Augment with the identity, then Gauss-Jordan with partial pivoting
    let mut aug: Vec<Vec<f64>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut extended = row.clone();
            extended.extend((0..k).map(|j| if i == j { 1.0 } else { 0.0 }));
            extended
        })
        .collect();

    for col in 0..k {
        let mut pivot_row = col;
        for row in col + 1..k {
            if aug[row][col].abs() > aug[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        if aug[pivot_row][col].abs() < PIVOT_TOL {
            bail!("design matrix is numerically singular");
        }
        aug.swap(col, pivot_row);

        let pivot = aug[col][col];
        for value in aug[col].iter_mut() {
            *value /= pivot;
        }

        let pivot_values = aug[col].clone();
        for row in 0..k {
            if row == col {
                continue;
            }
            let factor = aug[row][col];
            if factor == 0.0 {
                continue;
            }
            for c in 0..2 * k {
                aug[row][c] -= factor * pivot_values[c];
            }
        }
    }

    Ok(aug.into_iter().map(|row| row[k..].to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_returns_first_difference_ratio() {
        let returns = pct_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.10).abs() < 1e-12);
        assert!((returns[1] - (99.0 / 110.0 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn pct_returns_empty_for_short_input() {
        assert!(pct_returns(&[100.0]).is_empty());
        assert!(pct_returns(&[]).is_empty());
    }

    #[test]
    fn sample_std_dev_undefined_for_single_value() {
        assert!(sample_std_dev(&[1.0]).is_none());
        let sd = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        // Known sample std dev of this classic sequence is sqrt(32/7)
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn ols_slope_recovers_line() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        let slope = ols_slope(&xs, &ys).unwrap();
        assert!((slope - 2.0).abs() < 1e-12);
    }

    #[test]
    fn ols_slope_degenerate_inputs() {
        assert!(ols_slope(&[1.0], &[2.0]).is_none());
        assert!(ols_slope(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn ols_fit_recovers_known_coefficients() {
        // y = 5 + 2*x1 - 3*x2 with a little curvature so the fit is not exact
        let x1: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let x2: Vec<f64> = (0..20).map(|i| (i as f64 * 0.7).sin()).collect();
        let y: Vec<f64> = x1
            .iter()
            .zip(&x2)
            .enumerate()
            .map(|(i, (a, b))| 5.0 + 2.0 * a - 3.0 * b + 1e-6 * (i as f64).cos())
            .collect();

        let columns = vec![vec![1.0; 20], x1, x2];
        let fit = ols_fit(&columns, &y).unwrap();
        assert!((fit.coefficients[0] - 5.0).abs() < 1e-3);
        assert!((fit.coefficients[1] - 2.0).abs() < 1e-4);
        assert!((fit.coefficients[2] + 3.0).abs() < 1e-3);
        assert!(fit.rss >= 0.0);
    }

    #[test]
    fn ols_fit_rejects_singular_design() {
        // Second column is a multiple of the first
        let columns = vec![vec![1.0, 1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0, 2.0]];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        assert!(ols_fit(&columns, &y).is_err());
    }

    #[test]
    fn ols_fit_rejects_underdetermined_system() {
        let columns = vec![vec![1.0, 1.0], vec![1.0, 2.0]];
        let y = vec![1.0, 2.0];
        assert!(ols_fit(&columns, &y).is_err());
    }
}

//! Summary aggregation over the result table.

use crate::config::ANALYSIS;
use crate::models::ResultTable;

/// Fixed halting message for an empty result table.
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Not enough information to run the analysis.";

/// The three summary percentages. A null p-value or exponent counts toward
/// the denominator but never the numerator, so the percentages always share
/// the same base: every evaluated window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryReport {
    pub pct_adf_stationary: f64,
    pub pct_kpss_stationary: f64,
    pub pct_hurst_stationary: f64,
    pub evaluated_windows: usize,
}

impl SummaryReport {
    /// None for an empty table; the caller renders the fixed message instead
    /// of dividing by zero.
    pub fn from_table(table: &ResultTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }
        let total = table.len() as f64;
        let thresholds = &ANALYSIS.thresholds;

        let adf_hits = table
            .rows
            .iter()
            .filter(|row| row.adf_p_value < thresholds.alpha)
            .count();
        let kpss_hits = table
            .rows
            .iter()
            .filter(|row| row.kpss.p_value().is_some_and(|p| p > thresholds.alpha))
            .count();
        let hurst_hits = table
            .rows
            .iter()
            .filter(|row| {
                row.hurst
                    .is_some_and(|h| h > thresholds.hurst_band_low && h < thresholds.hurst_band_high)
            })
            .count();

        Some(Self {
            pct_adf_stationary: adf_hits as f64 / total * 100.0,
            pct_kpss_stationary: kpss_hits as f64 / total * 100.0,
            pct_hurst_stationary: hurst_hits as f64 / total * 100.0,
            evaluated_windows: table.len(),
        })
    }

    pub fn render(&self) -> String {
        format!(
            "Analysis summary ({} windows):\n\
             - Probability gold trades stationary (ADF): {:.2}%\n\
             - Probability gold trades stationary (KPSS): {:.2}%\n\
             - Hurst exponent indicating stationarity: {:.2}%",
            self.evaluated_windows,
            self.pct_adf_stationary,
            self.pct_kpss_stationary,
            self.pct_hurst_stationary,
        )
    }
}

/// Render the summary for a table, falling back to the fixed
/// insufficient-information message when there is nothing to aggregate.
pub fn summary_text(table: &ResultTable) -> String {
    match SummaryReport::from_table(table) {
        Some(report) => report.render(),
        None => INSUFFICIENT_DATA_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TestOutcome, WindowResult};
    use chrono::NaiveDate;

    fn row(adf_p: f64, kpss: TestOutcome, hurst: Option<f64>) -> WindowResult {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        WindowResult {
            window_start: date,
            window_end: date,
            adf_statistic: -1.0,
            adf_p_value: adf_p,
            kpss,
            hurst,
            volatility: Some(0.01),
        }
    }

    fn completed(p: f64) -> TestOutcome {
        TestOutcome::Completed {
            statistic: 0.2,
            p_value: p,
        }
    }

    #[test]
    fn scenario_six_of_ten_below_alpha_gives_sixty_percent() {
        let mut rows = Vec::new();
        for _ in 0..6 {
            rows.push(row(0.01, completed(0.5), None));
        }
        for _ in 0..4 {
            rows.push(row(0.20, completed(0.5), None));
        }
        let report = SummaryReport::from_table(&ResultTable { rows }).unwrap();
        assert!((report.pct_adf_stationary - 60.0).abs() < 1e-9);
        assert_eq!(report.evaluated_windows, 10);
        assert!(report.render().contains("60.00%"));
    }

    #[test]
    fn null_fields_count_in_denominator_only() {
        let rows = vec![
            row(
                0.01,
                TestOutcome::Failed {
                    reason: "no usable variation".to_string(),
                },
                None,
            ),
            row(0.01, completed(0.5), Some(0.5)),
        ];
        let report = SummaryReport::from_table(&ResultTable { rows }).unwrap();
        // One of two rows passes KPSS and Hurst; the null row still dilutes
        assert!((report.pct_kpss_stationary - 50.0).abs() < 1e-9);
        assert!((report.pct_hurst_stationary - 50.0).abs() < 1e-9);
        assert!((report.pct_adf_stationary - 100.0).abs() < 1e-9);
    }

    #[test]
    fn hurst_band_bounds_are_exclusive() {
        let rows = vec![
            row(0.5, completed(0.5), Some(0.4)),  // on the low bound: out
            row(0.5, completed(0.5), Some(0.6)),  // on the high bound: out
            row(0.5, completed(0.5), Some(0.41)), // inside
        ];
        let report = SummaryReport::from_table(&ResultTable { rows }).unwrap();
        assert!((report.pct_hurst_stationary - (100.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn kpss_needs_strictly_greater_than_alpha() {
        let rows = vec![row(0.5, completed(0.05), None)];
        let report = SummaryReport::from_table(&ResultTable { rows }).unwrap();
        assert_eq!(report.pct_kpss_stationary, 0.0);
    }

    #[test]
    fn empty_table_short_circuits_to_fixed_message() {
        let table = ResultTable::default();
        assert!(SummaryReport::from_table(&table).is_none());
        assert_eq!(summary_text(&table), INSUFFICIENT_DATA_MESSAGE);
    }

    #[test]
    fn rendered_text_has_two_decimal_places() {
        let rows = vec![row(0.01, completed(0.5), None); 3];
        let text = summary_text(&ResultTable { rows });
        assert!(text.contains("100.00%"));
        assert!(text.contains("0.00%"));
    }
}

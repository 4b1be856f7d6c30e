//! Per-window test battery and the pipeline driver.

use anyhow::{Context, Result};

use crate::analysis::adf::adf_test;
use crate::analysis::hurst::hurst_exponent;
use crate::analysis::kpss::kpss_test;
use crate::config::ANALYSIS;
use crate::models::{
    DateWindow, PriceSeries, ResultTable, TestOutcome, WindowResult, segment_windows,
};
use crate::utils::maths_utils::{pct_returns, sample_std_dev};

/// The full pipeline: segment the series into date windows, evaluate each,
/// fold the survivors into a table. A pure function of its inputs; running
/// it twice on the same series yields an identical table.
pub fn run_window_analysis(series: &PriceSeries, window_days: usize) -> Result<ResultTable> {
    let dates = series.distinct_dates();
    let windows = segment_windows(&dates, window_days);
    #[cfg(debug_assertions)]
    log::info!(
        "Evaluating {} windows over {} distinct dates",
        windows.len(),
        dates.len()
    );

    let mut rows = Vec::with_capacity(windows.len());
    for window in &windows {
        if let Some(row) = evaluate_window(series, window)? {
            rows.push(row);
        }
    }
    Ok(ResultTable { rows })
}

/// Run the test battery for one window.
/// `Ok(None)` means the window was skipped (fewer than 2 valid prices);
/// `Err` means an unrecoverable numeric fault that aborts the whole run.
pub fn evaluate_window(
    series: &PriceSeries,
    window: &DateWindow,
) -> Result<Option<WindowResult>> {
    let closes = series.valid_closes_in(window);
    if closes.len() < ANALYSIS.min_prices_per_window {
        #[cfg(debug_assertions)]
        log::info!(
            "Skipping window {}..{}: only {} valid prices",
            window.start(),
            window.end(),
            closes.len()
        );
        return Ok(None);
    }

    let returns = pct_returns(&closes);

    // Unit-root test: fail loud. Anything that breaks here is an unexpected
    // numeric fault and must not silently corrupt a row.
    let adf = adf_test(&returns).with_context(|| {
        format!(
            "ADF test failed for window {}..{}",
            window.start(),
            window.end()
        )
    })?;

    // Level-stationarity test: degenerate windows are an expected condition,
    // recorded in the row instead of propagated.
    let kpss = match kpss_test(&returns) {
        Ok(outcome) => TestOutcome::Completed {
            statistic: outcome.statistic,
            p_value: outcome.p_value,
        },
        Err(e) => {
            log::warn!(
                "KPSS test failed for window {}..{}: {e:#}",
                window.start(),
                window.end()
            );
            TestOutcome::Failed {
                reason: format!("{e:#}"),
            }
        }
    };

    // Long-memory exponent: unreliable below the observation floor, so the
    // field simply stays empty there.
    let hurst = if returns.len() < ANALYSIS.hurst_min_observations {
        None
    } else {
        hurst_exponent(&returns)
    };

    Ok(Some(WindowResult {
        window_start: window.start(),
        window_end: window.end(),
        adf_statistic: adf.statistic,
        adf_p_value: adf.p_value,
        kpss,
        hurst,
        volatility: sample_std_dev(&returns),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bar, BarInterval};

    const MAR_1: i64 = 1_709_251_200_000; // 2024-03-01T00:00:00Z
    const DAY_MS: i64 = 24 * 60 * 60 * 1000;
    const BAR_MS: i64 = 15 * 60 * 1000;

    /// Deterministic wobble around a gold-ish level; stationary by
    /// construction and never degenerate.
    fn wobble_close(idx: usize) -> f64 {
        1900.0 + (idx as f64 * 0.83).sin() * 3.0 + (idx as f64 * 0.17).cos() * 1.5
    }

    fn bar(ms: i64, close: Option<f64>) -> Bar {
        Bar {
            timestamp_ms: ms,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }

    /// `bars_per_day[d]` valid bars on day d, consecutive calendar days.
    fn series_with(bars_per_day: &[usize]) -> PriceSeries {
        let mut bars = Vec::new();
        let mut idx = 0usize;
        for (day, &count) in bars_per_day.iter().enumerate() {
            for slot in 0..count {
                bars.push(bar(
                    MAR_1 + day as i64 * DAY_MS + slot as i64 * BAR_MS,
                    Some(wobble_close(idx)),
                ));
                idx += 1;
            }
        }
        PriceSeries::from_bars("GC=F", BarInterval::M15, bars)
    }

    #[test]
    fn scenario_three_days_two_day_windows() {
        // 3 dates with plenty of positive bars, w=2: exactly 2 windows,
        // each producing a full row.
        let series = series_with(&[8, 8, 8]);
        let table = run_window_analysis(&series, 2).unwrap();
        assert_eq!(table.len(), 2);
        for row in &table.rows {
            assert!(row.adf_p_value > 0.0 && row.adf_p_value <= 1.0);
            assert!(row.volatility.is_some());
        }
        assert!(table.rows[0].window_start < table.rows[1].window_start);
    }

    #[test]
    fn scenario_single_price_window_is_skipped() {
        // Middle day has a single valid price: with w=1 that window is
        // skipped, so the table is one row shorter than the window count.
        let mut bars = Vec::new();
        for slot in 0..8usize {
            bars.push(bar(MAR_1 + slot as i64 * BAR_MS, Some(wobble_close(slot))));
            bars.push(bar(
                MAR_1 + 2 * DAY_MS + slot as i64 * BAR_MS,
                Some(wobble_close(slot + 20)),
            ));
        }
        bars.push(bar(MAR_1 + DAY_MS, Some(1901.0)));
        let series = PriceSeries::from_bars("GC=F", BarInterval::M15, bars);

        assert_eq!(series.distinct_dates().len(), 3);
        let table = run_window_analysis(&series, 1).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn scenario_fifty_returns_has_no_hurst_but_both_p_values() {
        // 51 valid closes in one window -> 50 returns: below the Hurst
        // floor, while both tests still run.
        let series = series_with(&[51]);
        let table = run_window_analysis(&series, 1).unwrap();
        assert_eq!(table.len(), 1);
        let row = &table.rows[0];
        assert!(row.hurst.is_none());
        assert!(row.adf_p_value > 0.0);
        assert!(row.kpss.p_value().is_some());
    }

    #[test]
    fn invalid_closes_do_not_count_toward_the_minimum() {
        // All closes invalid -> every window skipped, empty table.
        let bars: Vec<Bar> = (0..10)
            .map(|slot| bar(MAR_1 + slot as i64 * BAR_MS, Some(-1.0)))
            .collect();
        let series = PriceSeries::from_bars("GC=F", BarInterval::M15, bars);
        let table = run_window_analysis(&series, 1).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn empty_series_yields_empty_table() {
        let series = PriceSeries::from_bars("GC=F", BarInterval::M15, Vec::new());
        let table = run_window_analysis(&series, 2).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn pipeline_is_idempotent() {
        let series = series_with(&[12, 12, 12, 12]);
        let first = run_window_analysis(&series, 2).unwrap();
        let second = run_window_analysis(&series, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn window_larger_than_span_yields_empty_table() {
        let series = series_with(&[8, 8]);
        let table = run_window_analysis(&series, 5).unwrap();
        assert!(table.is_empty());
    }
}

use chrono::NaiveDate;

// ============================================================================
// TestOutcome: recoverable per-test result, success or failure-with-reason
// ============================================================================

/// A statistical test that is allowed to fail for a single window without
/// taking the run down. The failure reason is kept as a diagnostic string
/// instead of an error type so it can sit in a table row.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    Completed { statistic: f64, p_value: f64 },
    Failed { reason: String },
}

impl TestOutcome {
    pub fn p_value(&self) -> Option<f64> {
        match self {
            TestOutcome::Completed { p_value, .. } => Some(*p_value),
            TestOutcome::Failed { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            TestOutcome::Completed { .. } => None,
            TestOutcome::Failed { reason } => Some(reason),
        }
    }
}

// ============================================================================
// WindowResult / ResultTable
// ============================================================================

/// One row of the result table: the full test battery for one date window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowResult {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Unit-root test. A failure here is fatal for the run, so by the time a
    /// row exists these two are always populated.
    pub adf_statistic: f64,
    pub adf_p_value: f64,
    /// Level-stationarity test; legitimately fails on degenerate windows.
    pub kpss: TestOutcome,
    /// Long-memory exponent; None below the observation floor or on
    /// numerical failure.
    pub hurst: Option<f64>,
    /// Sample standard deviation of the window's returns; None for a
    /// single-return window.
    pub volatility: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    // One row per evaluated (non-skipped) window, in window-start order
    pub rows: Vec<WindowResult>,
}

impl ResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accessors() {
        let ok = TestOutcome::Completed {
            statistic: 0.31,
            p_value: 0.07,
        };
        assert_eq!(ok.p_value(), Some(0.07));
        assert_eq!(ok.failure_reason(), None);

        let failed = TestOutcome::Failed {
            reason: "no variation in the series".to_string(),
        };
        assert_eq!(failed.p_value(), None);
        assert_eq!(failed.failure_reason(), Some("no variation in the series"));
    }
}

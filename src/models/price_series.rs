use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{Bar, BarInterval};
use crate::models::window::DateWindow;

// ============================================================================
// PriceSeries: the raw fetched table, immutable once constructed
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,
    pub interval: BarInterval,
    // Ascending by timestamp, duplicate timestamps dropped at construction
    bars: Vec<Bar>,
}

impl PriceSeries {
    pub fn from_bars(symbol: impl Into<String>, interval: BarInterval, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|bar| bar.timestamp_ms);
        bars.dedup_by_key(|bar| bar.timestamp_ms);
        Self {
            symbol: symbol.into(),
            interval,
            bars,
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Sorted distinct calendar dates present in the series.
    /// Bars whose timestamp falls outside chrono's range are ignored.
    pub fn distinct_dates(&self) -> Vec<NaiveDate> {
        self.bars
            .iter()
            .filter_map(|bar| bar.trading_date())
            .dedup()
            .collect()
    }

    /// Valid closes (finite, strictly positive) inside a date window,
    /// in timestamp order. Missing slots are dropped here so the evaluator
    /// only ever sees usable prices.
    pub fn valid_closes_in(&self, window: &DateWindow) -> Vec<f64> {
        self.bars
            .iter()
            .filter(|bar| bar.trading_date().is_some_and(|date| window.contains(date)))
            .filter_map(|bar| bar.valid_close())
            .collect()
    }

    pub fn first_timestamp_ms(&self) -> Option<i64> {
        self.bars.first().map(|bar| bar.timestamp_ms)
    }

    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.bars.last().map(|bar| bar.timestamp_ms)
    }
}

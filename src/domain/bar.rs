use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::epoch_ms_to_date;

/// One OHLC bar as delivered by the market data provider.
/// Only the timestamp is guaranteed; every price/volume slot can be null
/// inside the provider's arrays, so all of them stay optional here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub timestamp_ms: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl Bar {
    /// UTC calendar date this bar belongs to.
    pub fn trading_date(&self) -> Option<NaiveDate> {
        epoch_ms_to_date(self.timestamp_ms)
    }

    /// Close price usable for return computation: present, finite, strictly positive.
    pub fn valid_close(&self) -> Option<f64> {
        self.close.filter(|c| c.is_finite() && *c > 0.0)
    }
}

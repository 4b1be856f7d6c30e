use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::utils::TimeUtils;

/// Sampling granularity of fetched bars, in the provider's shorthand.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString,
)]
pub enum BarInterval {
    #[strum(serialize = "1m")]
    M1,
    #[strum(serialize = "5m")]
    M5,
    #[strum(serialize = "15m")]
    M15,
    #[strum(serialize = "30m")]
    M30,
    #[strum(serialize = "1h")]
    H1,
    #[strum(serialize = "1d")]
    D1,
}

impl BarInterval {
    /// The query-string token the chart API expects.
    pub fn as_query(&self) -> &'static str {
        match self {
            BarInterval::M1 => "1m",
            BarInterval::M5 => "5m",
            BarInterval::M15 => "15m",
            BarInterval::M30 => "30m",
            BarInterval::H1 => "1h",
            BarInterval::D1 => "1d",
        }
    }

    pub fn ms(&self) -> i64 {
        match self {
            BarInterval::M1 => TimeUtils::MS_IN_MIN,
            BarInterval::M5 => TimeUtils::MS_IN_5_MIN,
            BarInterval::M15 => TimeUtils::MS_IN_15_MIN,
            BarInterval::M30 => TimeUtils::MS_IN_30_MIN,
            BarInterval::H1 => TimeUtils::MS_IN_H,
            BarInterval::D1 => TimeUtils::MS_IN_D,
        }
    }
}

/// Total lookback span to request from the provider.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString,
)]
pub enum LookbackPeriod {
    #[strum(serialize = "1d")]
    D1,
    #[strum(serialize = "5d")]
    D5,
    #[strum(serialize = "1mo")]
    Mo1,
    #[strum(serialize = "3mo")]
    Mo3,
}

impl LookbackPeriod {
    pub fn as_query(&self) -> &'static str {
        match self {
            LookbackPeriod::D1 => "1d",
            LookbackPeriod::D5 => "5d",
            LookbackPeriod::Mo1 => "1mo",
            LookbackPeriod::Mo3 => "3mo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn interval_round_trips_through_strings() {
        assert_eq!(BarInterval::from_str("15m").unwrap(), BarInterval::M15);
        assert_eq!(BarInterval::M15.to_string(), "15m");
        assert_eq!(BarInterval::M15.as_query(), "15m");
        assert!(BarInterval::from_str("7m").is_err());
    }

    #[test]
    fn period_round_trips_through_strings() {
        assert_eq!(LookbackPeriod::from_str("5d").unwrap(), LookbackPeriod::D5);
        assert_eq!(LookbackPeriod::D5.to_string(), "5d");
    }

    #[test]
    fn interval_widths_are_consistent() {
        assert_eq!(BarInterval::M15.ms(), 15 * 60 * 1000);
        assert_eq!(BarInterval::D1.ms(), 24 * 60 * 60 * 1000);
    }
}

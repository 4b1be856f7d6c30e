//! Market-data-provider configuration constants and types.

use crate::domain::{BarInterval, LookbackPeriod};

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    // One bounded retry after the first failed attempt. The upstream service
    // has no SLA, so we retry once and then surface the failure.
    pub retries: u32,
    pub backoff_ms: u64,
}

/// The Master Fetch Configuration Struct
pub struct FetchConfig {
    /// COMEX gold futures front-month contract on the chart API
    pub symbol: &'static str,
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub default_interval: BarInterval,
    pub default_period: LookbackPeriod,
    pub client: ClientDefaults,
    /// How many raw bars the dashboard shows in the head preview
    pub preview_rows: usize,
}

pub const FETCH: FetchConfig = FetchConfig {
    symbol: "GC=F",
    base_url: "https://query1.finance.yahoo.com",
    user_agent: concat!("gold-scope/", env!("CARGO_PKG_VERSION")),
    default_interval: BarInterval::M15,
    default_period: LookbackPeriod::D5,
    client: ClientDefaults {
        timeout_ms: 10_000,
        retries: 1,
        backoff_ms: 2_000,
    },
    preview_rows: 8,
};

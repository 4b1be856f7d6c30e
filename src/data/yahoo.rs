//! Yahoo Finance v8 chart API client.
//!
//! One endpoint, one symbol, bounded lookback: this stays a thin client.
//! The request carries an explicit timeout and a single bounded retry with
//! fixed backoff; the upstream service throttles aggressively, so anything
//! beyond one retry just burns goodwill.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tokio::time::{Duration, sleep};

use crate::config::FETCH;
use crate::domain::{Bar, BarInterval, LookbackPeriod};
use crate::models::PriceSeries;

// ============================================================================
// Wire format
// ============================================================================
// The chart payload is column-oriented: one timestamp array plus one array
// per quote field, all the same length, any slot nullable.

#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    chart: ChartNode,
}

#[derive(Deserialize, Debug)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Deserialize, Debug, Default)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl ChartResult {
    fn into_bars(self) -> Vec<Bar> {
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();
        self.timestamp
            .iter()
            .enumerate()
            .map(|(i, &epoch_sec)| Bar {
                timestamp_ms: epoch_sec * 1000,
                open: slot(&quote.open, i),
                high: slot(&quote.high, i),
                low: slot(&quote.low, i),
                close: slot(&quote.close, i),
                volume: slot(&quote.volume, i),
            })
            .collect()
    }
}

fn slot(column: &[Option<f64>], index: usize) -> Option<f64> {
    column.get(index).copied().flatten()
}

// ============================================================================
// Fetching
// ============================================================================

/// Download gold futures bars for the configured symbol.
/// An empty chart is a fatal input condition, reported as an error so the
/// caller can show the halting message without running the pipeline.
pub async fn fetch_gold_bars(
    interval: BarInterval,
    period: LookbackPeriod,
) -> Result<PriceSeries> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(FETCH.client.timeout_ms))
        .user_agent(FETCH.user_agent)
        .build()
        .context("failed to build the HTTP client")?;

    let url = format!("{}/v8/finance/chart/{}", FETCH.base_url, FETCH.symbol);

    let mut last_error = None;
    for attempt in 0..=FETCH.client.retries {
        if attempt > 0 {
            log::warn!(
                "Retrying chart request for {} (attempt {} of {})",
                FETCH.symbol,
                attempt + 1,
                FETCH.client.retries + 1
            );
            sleep(Duration::from_millis(FETCH.client.backoff_ms)).await;
        }

        match fetch_once(&client, &url, interval, period).await {
            Ok(series) => {
                log::info!(
                    "Fetched {} bars of {} at {} over {}",
                    series.len(),
                    FETCH.symbol,
                    interval,
                    period
                );
                return Ok(series);
            }
            Err(e) => {
                log::error!("Chart request failed: {e:#}");
                last_error = Some(e);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| anyhow::anyhow!("chart request never ran"))
        .context(format!("could not download {} data", FETCH.symbol)))
}

async fn fetch_once(
    client: &reqwest::Client,
    url: &str,
    interval: BarInterval,
    period: LookbackPeriod,
) -> Result<PriceSeries> {
    let response = client
        .get(url)
        .query(&[("interval", interval.as_query()), ("range", period.as_query())])
        .send()
        .await
        .context("chart request did not complete")?
        .error_for_status()
        .context("chart request was rejected")?;

    let envelope: ChartEnvelope = response
        .json()
        .await
        .context("chart response was not valid JSON")?;

    parse_chart(envelope, interval)
}

fn parse_chart(envelope: ChartEnvelope, interval: BarInterval) -> Result<PriceSeries> {
    if let Some(error) = envelope.chart.error {
        bail!("provider error {}: {}", error.code, error.description);
    }

    let result = envelope
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next();
    let bars = match result {
        Some(chart_result) => chart_result.into_bars(),
        None => Vec::new(),
    };

    if bars.is_empty() {
        bail!("provider returned an empty chart for {}", FETCH.symbol);
    }

    Ok(PriceSeries::from_bars(FETCH.symbol, interval, bars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fixture(json: &str) -> Result<PriceSeries> {
        let envelope: ChartEnvelope = serde_json::from_str(json).unwrap();
        parse_chart(envelope, BarInterval::M15)
    }

    #[test]
    fn parses_well_formed_chart() {
        let series = parse_fixture(
            r#"{
                "chart": {
                    "result": [{
                        "timestamp": [1709251200, 1709252100, 1709253000],
                        "indicators": {
                            "quote": [{
                                "open":  [1900.0, 1901.0, null],
                                "high":  [1902.0, 1903.0, 1904.0],
                                "low":   [1899.0, 1900.0, 1901.0],
                                "close": [1901.5, null, 1903.2],
                                "volume": [120.0, 98.0, 101.0]
                            }]
                        }
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.bars()[0].timestamp_ms, 1_709_251_200_000);
        assert_eq!(series.bars()[0].close, Some(1901.5));
        // Null slots survive as None instead of being invented
        assert_eq!(series.bars()[1].close, None);
        assert_eq!(series.bars()[2].open, None);
    }

    #[test]
    fn empty_chart_is_fatal() {
        let err = parse_fixture(
            r#"{"chart": {"result": [{"timestamp": [], "indicators": {"quote": [{}]}}], "error": null}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty chart"));
    }

    #[test]
    fn missing_result_is_fatal() {
        let err = parse_fixture(r#"{"chart": {"result": null, "error": null}}"#).unwrap_err();
        assert!(err.to_string().contains("empty chart"));
    }

    #[test]
    fn provider_error_is_surfaced() {
        let err = parse_fixture(
            r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn short_quote_columns_yield_none_slots() {
        // Columns shorter than the timestamp array happen on partial bars
        let series = parse_fixture(
            r#"{
                "chart": {
                    "result": [{
                        "timestamp": [1709251200, 1709252100],
                        "indicators": {"quote": [{"close": [1901.5]}]}
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();
        assert_eq!(series.bars()[0].close, Some(1901.5));
        assert_eq!(series.bars()[1].close, None);
    }
}

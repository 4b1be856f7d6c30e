use eframe::egui;
use poll_promise::Promise;
use std::time::{Duration, Instant};

use crate::data::fetch_gold_bars;
use crate::models::PriceSeries;
use crate::ui::app::{AppError, GoldScopeApp};

pub(super) struct FetchOutcome {
    pub(super) result: Result<PriceSeries, AppError>,
    elapsed_time: Duration,
}

impl GoldScopeApp {
    /// Kick off a background download with the current interval/period.
    /// No-op while a fetch is already in flight.
    pub(super) fn start_fetch(&mut self) {
        if self.fetch_promise.is_some() {
            return;
        }

        let interval = self.interval;
        let period = self.period;

        let promise = Promise::spawn_thread("gold_fetch", move || {
            let started = Instant::now();

            // The fetch is async (shared with the pre-UI path); give the
            // worker thread its own small runtime to drive it.
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt
                    .block_on(fetch_gold_bars(interval, period))
                    .map_err(|e| AppError::FetchFailed(format!("{e:#}"))),
                Err(e) => Err(AppError::FetchFailed(format!(
                    "failed to create fetch runtime: {e}"
                ))),
            };

            FetchOutcome {
                result,
                elapsed_time: started.elapsed(),
            }
        });

        self.fetch_promise = Some(promise);
    }

    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let outcome = self.fetch_promise.as_ref().and_then(|promise| {
            promise.ready().map(|o| FetchOutcome {
                result: o.result.clone(),
                elapsed_time: o.elapsed_time,
            })
        });

        if let Some(outcome) = outcome {
            self.fetch_promise = None;

            match outcome.result {
                Ok(series) => {
                    log::info!(
                        "✅ Fetch completed in {:.2}s ({} bars)",
                        outcome.elapsed_time.as_secs_f32(),
                        series.len()
                    );
                    self.data_state.series = Some(series);
                    self.data_state.last_error = None;
                    // Force a fresh pipeline run against the new series
                    self.last_analyzed = None;
                }
                Err(error) => {
                    log::error!("❌ Fetch failed: {}", error);
                    self.data_state.last_error = Some(error);
                }
            }
        } else if self.fetch_promise.is_some() {
            ctx.request_repaint();
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }
}

//! Analysis and computation configuration

/// Configuration for the evaluation-window UI slider
pub struct WindowSettings {
    pub min_days: u64,
    pub max_days: u64,
    pub default_days: u64,
}

/// Decision thresholds used by the summary report
pub struct ThresholdSettings {
    // Significance level shared by both p-value predicates and the chart's
    // horizontal reference line
    pub alpha: f64,
    // Exclusive band of Hurst exponents read as "stationary-ish"
    pub hurst_band_low: f64,
    pub hurst_band_high: f64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub window: WindowSettings,
    pub thresholds: ThresholdSettings,
    // A window needs at least this many valid closes to produce a row
    pub min_prices_per_window: usize,
    // Below this many return observations the Hurst estimator is considered
    // unreliable and the field stays empty. Policy, not an error.
    pub hurst_min_observations: usize,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    window: WindowSettings {
        min_days: 1,
        max_days: 30,
        default_days: 2,
    },
    thresholds: ThresholdSettings {
        alpha: 0.05,
        hurst_band_low: 0.4,
        hurst_band_high: 0.6,
    },
    min_prices_per_window: 2,
    hurst_min_observations: 100,
};

/// Every user-visible string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub app_description: &'static str,

    // Side panel headings
    pub controls_heading: &'static str,
    pub interval_heading: &'static str,
    pub period_heading: &'static str,
    pub window_heading: &'static str,
    pub window_helper_prefix: &'static str,
    pub window_helper_suffix: &'static str,
    pub refetch_button: &'static str,
    pub summary_heading: &'static str,

    // Central panel
    pub plot_heading: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub adf_series_label: &'static str,
    pub kpss_series_label: &'static str,
    pub threshold_label: &'static str,
    pub results_heading: &'static str,
    pub raw_data_heading: &'static str,

    // Result table columns
    pub col_window_start: &'static str,
    pub col_window_end: &'static str,
    pub col_adf_p: &'static str,
    pub col_kpss_p: &'static str,
    pub col_hurst: &'static str,
    pub col_volatility: &'static str,
    pub null_cell: &'static str,

    // Status / errors
    pub fetching_status: &'static str,
    pub fetch_failed_heading: &'static str,
    pub fetch_retry_hint: &'static str,
    pub analysis_failed_heading: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Gold Stationarity Analysis",
    app_description: "Evaluates how likely gold is to trade as a stationary process \
                      over sliding windows of recent sessions.",

    controls_heading: "Data Generation",
    interval_heading: "Bar interval",
    period_heading: "Lookback period",
    window_heading: "Evaluation window",
    window_helper_prefix: "Each window spans ",
    window_helper_suffix: " calendar day(s) of bars",
    refetch_button: "Refetch data",
    summary_heading: "Summary",

    plot_heading: "Stationarity tests over time",
    plot_x_axis: "Window start",
    plot_y_axis: "p-value",
    adf_series_label: "ADF p-value",
    kpss_series_label: "KPSS p-value",
    threshold_label: "Stationarity threshold (0.05)",
    results_heading: "Window results",
    raw_data_heading: "Fetched bars (head)",

    col_window_start: "Start",
    col_window_end: "End",
    col_adf_p: "ADF p",
    col_kpss_p: "KPSS p",
    col_hurst: "Hurst",
    col_volatility: "Volatility",
    null_cell: "n/a",

    fetching_status: "Downloading gold data...",
    fetch_failed_heading: "⚠ Could not download gold data",
    fetch_retry_hint: "Check your connection and try again.",
    analysis_failed_heading: "⚠ Unable to generate results",
};

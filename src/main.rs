#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use gold_scope::{Cli, fetch_gold_bars, run_app};

const APP_STATE_PATH: &str = "app_state.json";

fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking)
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let initial_fetch = rt.block_on(fetch_gold_bars(args.interval(), args.period()));
    if let Err(e) = &initial_fetch {
        // The app still starts so the analyst sees the halting message and can retry.
        log::error!("Initial data fetch failed: {:#}", e);
    }

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Gold Scope - Fetch. Window. Judge.",
        options,
        Box::new(move |cc| Ok(run_app(cc, &args, initial_fetch))),
    )
}

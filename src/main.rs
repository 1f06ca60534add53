//! # Video Game Sales Insights Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Initialise logging (RUST_LOG, default "info")
//!   ├─> Load, clean and aggregate video_games.csv
//!   ├─> Print the key-insights report
//!   ├─> Spawn the exit prompt thread
//!   ├─> Open the chart window (blocks until closed)
//!   └─> Wait for Enter, then exit 0
//! ```
//!
//! Load and parse failures propagate out of `main`, which prints the error
//! and exits non-zero. A machine without a display still gets the report and
//! the prompt; the chart failure is only logged.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // The report and prompt go to stdout

use vgsales_insights::analyser::gui::{self, ChartData};
use vgsales_insights::analyser::logic;
use vgsales_insights::config::AnalysisConfig;
use vgsales_insights::logging;

const EXIT_PROMPT: &str = "\nPress Enter to close the plots and exit...";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;

    let config = AnalysisConfig::default();
    let run = logic::analyse_file_flow(&config)?;

    print!("{}", logic::format_report(&run.insights));
    if let Ok(json) = serde_json::to_string_pretty(&run.insights) {
        log::debug!("Insights: {json}");
    }

    // The prompt runs beside the window so Enter can close it.
    let (close_tx, close_rx) = crossbeam_channel::bounded::<()>(1);
    let prompt = std::thread::spawn(move || {
        println!("{EXIT_PROMPT}");
        let mut line = String::new();
        if let Err(e) = std::io::stdin().read_line(&mut line) {
            log::warn!("Failed to read from stdin: {e}");
        }
        // The window may already be closed.
        let _ = close_tx.send(());
    });

    if config.show_charts {
        let data = ChartData::from_views(&run.views, &config);
        if let Err(e) = gui::show_charts(data, Some(close_rx)) {
            log::warn!("Could not open the chart window: {e}");
        }
    }

    if prompt.join().is_err() {
        return Err("exit prompt thread panicked".into());
    }
    Ok(())
}

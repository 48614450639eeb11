//! UDP Trace Analyzer - Main CLI Application
//!
//! Loads CSV dumps of UDP traffic on a motion-control link, splits each
//! dump into its two directional streams, and renders timing jitter and
//! delay figures for offline inspection.

use clap::Parser;
use std::process;
use udp_trace_analyzer::{
    app::App,
    cli::Cli,
    config::EnvManager,
    error::{AppError, Result},
    output, PKG_NAME, VERSION,
};

fn main() {
    // Load .env before parsing so env-backed flags see its values
    let debug_requested = std::env::args().any(|arg| arg == "--debug");
    if let Err(e) = EnvManager::load_env_file(debug_requested) {
        eprintln!("Warning: {}", e);
    }

    // Parse command line arguments
    let cli = Cli::parse();

    init_logging(cli.debug);

    if let Err(e) = run_application(cli) {
        eprintln!("{}", e.format_for_console(supports_stderr_color()));

        // Print suggestions for common errors
        eprintln!();
        eprintln!("{}", e.user_friendly_message());

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Debug mode enabled");
        println!();
    }

    // Cross-flag validation before any work is done
    cli.validate().map_err(AppError::validation)?;

    let use_color = cli.use_colors();

    let app = App::new(cli)?;
    let summary = app.run()?;

    println!();
    println!("{}", output::format_run_summary(&summary, use_color));

    Ok(())
}

/// Initialize the log facade; --debug raises the default filter.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}

/// Whether error output should be colored
fn supports_stderr_color() -> bool {
    std::env::var("NO_COLOR").is_err() && std::env::var("TERM").map_or(cfg!(unix), |t| t != "dumb")
}

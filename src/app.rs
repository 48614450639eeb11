//! Main application orchestration: load, filter, compute, render

use crate::{
    cli::Cli,
    config::{display_config_summary, load_config, Config},
    error::Result,
    output::{self, RunSummary},
    render::Renderer,
    stats::TraceMetrics,
    trace::{load_traces, split_directions},
};

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance from parsed CLI arguments
    pub fn new(cli: Cli) -> Result<Self> {
        let config = load_config(cli)?;
        Ok(Self { config })
    }

    /// Create an application instance from an already-resolved configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the resolved configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the analysis: one figure per input dump.
    pub fn run(&self) -> Result<RunSummary> {
        if self.config.debug {
            println!("Configuration:\n{}\n", display_config_summary(&self.config));
        }

        // All traces are loaded before any rendering begins.
        let traces = load_traces(&self.config.data_dir)?;
        log::info!(
            "loaded {} trace(s) from {}",
            traces.len(),
            self.config.data_dir.display()
        );

        let renderer = Renderer::new();
        let mut summary = RunSummary::new(traces.len());

        for trace in &traces {
            let (status, command) = split_directions(trace, &self.config.endpoints);

            println!(
                "{}",
                output::format_trace_progress(
                    &trace.name,
                    status.len(),
                    command.len(),
                    self.config.enable_color
                )
            );

            let metrics = TraceMetrics::from_traces(&status, &command);

            if self.config.verbose {
                println!(
                    "{}",
                    output::format_series_summaries(&metrics, self.config.enable_color)
                );
            }

            let figure = renderer.render(&metrics, &trace.name)?;
            summary.record_figure();

            if self.config.save {
                let path = figure.save_png(&self.config.figure_dir)?;
                summary.record_file(path);
            }

            if self.config.show {
                figure.show()?;
            }
        }

        Ok(summary)
    }
}

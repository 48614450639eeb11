//! Console reporting for analysis runs

use crate::stats::{SeriesSummary, TraceMetrics};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Outcome of one analysis run, accumulated by the driver.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Number of traces loaded from the data directory
    pub traces_loaded: usize,
    /// Number of figures rendered
    pub figures_rendered: usize,
    /// PNG files written, in processing order
    pub files_written: Vec<PathBuf>,
}

impl RunSummary {
    /// Start an empty summary stamped with the current time
    pub fn new(traces_loaded: usize) -> Self {
        Self {
            started_at: Utc::now(),
            traces_loaded,
            figures_rendered: 0,
            files_written: Vec::new(),
        }
    }

    /// Record one rendered figure
    pub fn record_figure(&mut self) {
        self.figures_rendered += 1;
    }

    /// Record one written PNG file
    pub fn record_file(&mut self, path: PathBuf) {
        self.files_written.push(path);
    }

    /// Elapsed wall time since the run started, in seconds
    pub fn elapsed_secs(&self) -> f64 {
        let elapsed = Utc::now().signed_duration_since(self.started_at);
        elapsed.num_milliseconds() as f64 / 1000.0
    }
}

/// Format the closing summary block of a run.
pub fn format_run_summary(summary: &RunSummary, use_color: bool) -> String {
    let mut out = String::new();

    let header = "Run Summary:";
    if use_color {
        let _ = writeln!(out, "{}", header.bold());
    } else {
        let _ = writeln!(out, "{}", header);
    }

    let _ = writeln!(out, "  Traces analyzed: {}", summary.traces_loaded);
    let _ = writeln!(out, "  Figures rendered: {}", summary.figures_rendered);

    if summary.files_written.is_empty() {
        let _ = writeln!(out, "  Figures saved: none");
    } else {
        let _ = writeln!(out, "  Figures saved: {}", summary.files_written.len());
        for path in &summary.files_written {
            let _ = writeln!(out, "    {}", path.display());
        }
    }

    let _ = write!(out, "  Elapsed: {:.2}s", summary.elapsed_secs());

    out
}

/// One progress line per processed trace.
pub fn format_trace_progress(
    name: &str,
    status_len: usize,
    command_len: usize,
    use_color: bool,
) -> String {
    let label = if use_color {
        name.cyan().bold().to_string()
    } else {
        name.to_string()
    };

    format!(
        "{}: {} status frames, {} command frames",
        label, status_len, command_len
    )
}

/// Verbose per-trace block: summary statistics of the three series.
pub fn format_series_summaries(metrics: &TraceMetrics, use_color: bool) -> String {
    let mut out = String::new();

    let rows = [
        ("status jitter", &metrics.status_jitter),
        ("command jitter", &metrics.command_jitter),
        ("command delay", &metrics.command_delay),
    ];

    for (label, series) in rows {
        let line = match SeriesSummary::from_series(series) {
            Some(summary) => summary.format_line(),
            None => "no samples".to_string(),
        };

        let label = if use_color {
            label.bold().to_string()
        } else {
            label.to_string()
        };

        let _ = writeln!(out, "    {}: {}", label, line);
    }

    out.trim_end().to_string()
}

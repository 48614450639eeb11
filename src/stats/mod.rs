//! Jitter and delay series derived from directional packet timestamps

use crate::trace::DirectionalTrace;

/// Conversion factor from seconds to milliseconds for display.
const MS_PER_SEC: f64 = 1000.0;

/// Truncate two time series to their common leading prefix.
///
/// The command stream is usually the shorter one (the controller is
/// typically shut down before the device is power cycled), but either
/// order is handled.
pub fn truncate_to_common<'a>(status: &'a [f64], command: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    let len = status.len().min(command.len());
    (&status[..len], &command[..len])
}

/// First-difference jitter of a time series, in milliseconds.
///
/// Produces `(t[i], (t[i] - t[i-1]) * 1000)` for i ≥ 1; the series is one
/// element shorter than its input. There is no wrap-around sample at
/// index 0.
pub fn jitter_series_ms(times: &[f64]) -> Vec<(f64, f64)> {
    times
        .windows(2)
        .map(|w| (w[1], (w[1] - w[0]) * MS_PER_SEC))
        .collect()
}

/// Element-wise delay between paired command and status timestamps, in
/// milliseconds, plotted against the command timestamps.
///
/// The pairing zips the two series, so the result has the length of the
/// shorter one and uses its leading prefix.
pub fn delay_series_ms(status: &[f64], command: &[f64]) -> Vec<(f64, f64)> {
    command
        .iter()
        .zip(status.iter())
        .map(|(c, s)| (*c, (c - s) * MS_PER_SEC))
        .collect()
}

/// The three derived series of one trace, ready for rendering.
#[derive(Debug, Clone)]
pub struct TraceMetrics {
    /// Status frame jitter against status timestamps
    pub status_jitter: Vec<(f64, f64)>,

    /// Command frame jitter against command timestamps
    pub command_jitter: Vec<(f64, f64)>,

    /// Command frame delay against command timestamps
    pub command_delay: Vec<(f64, f64)>,
}

impl TraceMetrics {
    /// Compute all three series from two aligned time series.
    ///
    /// Both inputs are truncated to their common leading prefix before
    /// differencing so the paired comparison never misaligns.
    pub fn compute(status_times: &[f64], command_times: &[f64]) -> Self {
        let (status, command) = truncate_to_common(status_times, command_times);

        Self {
            status_jitter: jitter_series_ms(status),
            command_jitter: jitter_series_ms(command),
            command_delay: delay_series_ms(status, command),
        }
    }

    /// Compute the series for a filtered trace pair.
    pub fn from_traces(status: &DirectionalTrace, command: &DirectionalTrace) -> Self {
        Self::compute(&status.times(), &command.times())
    }
}

/// Summary statistics over one derived series, for verbose reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    /// Number of samples in the series
    pub count: usize,
    /// Smallest value, in milliseconds
    pub min_ms: f64,
    /// Largest value, in milliseconds
    pub max_ms: f64,
    /// Arithmetic mean, in milliseconds
    pub mean_ms: f64,
    /// Population standard deviation, in milliseconds
    pub std_dev_ms: f64,
}

impl SeriesSummary {
    /// Summarize the value component of a plotted series.
    ///
    /// Returns `None` for an empty series; there is nothing to summarize.
    pub fn from_series(series: &[(f64, f64)]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let count = series.len();
        let mut min_ms = f64::INFINITY;
        let mut max_ms = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for &(_, value) in series {
            min_ms = min_ms.min(value);
            max_ms = max_ms.max(value);
            sum += value;
        }

        let mean_ms = sum / count as f64;
        let variance = series
            .iter()
            .map(|&(_, value)| (value - mean_ms).powi(2))
            .sum::<f64>()
            / count as f64;

        Some(Self {
            count,
            min_ms,
            max_ms,
            mean_ms,
            std_dev_ms: variance.sqrt(),
        })
    }

    /// One-line rendering for the verbose console report
    pub fn format_line(&self) -> String {
        format!(
            "{} samples, min {:.3} ms, max {:.3} ms, mean {:.3} ms, std dev {:.3} ms",
            self.count, self.min_ms, self.max_ms, self.mean_ms, self.std_dev_ms
        )
    }
}

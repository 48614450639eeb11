//! UDP Trace Analyzer
//!
//! An offline analysis tool for CSV dumps of UDP traffic on a motion-control
//! link. Each dump is split into its two directional streams (device status
//! frames and controller command frames), timing jitter and delay series are
//! computed from the packet timestamps, and the result is rendered as one
//! diagnostic figure per input file.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod stats;
pub mod trace;

// Re-export commonly used types
pub use config::{Config, Endpoints};
pub use error::{AppError, Result};
pub use render::{Figure, Renderer};
pub use stats::{SeriesSummary, TraceMetrics};
pub use trace::{DirectionalTrace, Trace, TraceRecord};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Address of the device endpoint (the robot arm side of the link).
    pub const DEFAULT_DEVICE_ADDR: &str = "192.168.38.1";
    /// Address of the controller endpoint.
    pub const DEFAULT_CONTROLLER_ADDR: &str = "192.168.38.11";

    /// Input directory, resolved relative to the working directory.
    pub const DEFAULT_DATA_DIR: &str = "data";
    /// Output directory for generated figures, resolved relative to the
    /// working directory.
    pub const DEFAULT_FIGURE_DIR: &str = "figures";

    /// Trajectory time window shown on every panel, in seconds.
    pub const TIME_AXIS_SECS: (f64, f64) = (0.0, 20.0);
    /// Jitter panel y-axis range, in milliseconds.
    pub const JITTER_AXIS_MS: (f64, f64) = (0.0, 8.0);
    /// Delay panel y-axis range, in milliseconds.
    pub const DELAY_AXIS_MS: (f64, f64) = (0.0, 0.6);

    /// Rendered figure dimensions, in pixels.
    pub const FIGURE_WIDTH: u32 = 1280;
    pub const FIGURE_HEIGHT: u32 = 960;
}

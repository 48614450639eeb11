//! Configuration data model, resolution and validation

pub mod env;

pub use env::EnvManager;

use crate::cli::Cli;
use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// The two fixed endpoints of the motion-control link.
///
/// Addresses are kept as strings because directional filtering is exact
/// string equality against the capture's Source/Destination columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Address of the device (robot arm) side, the sender of status frames
    #[serde(default = "default_device_addr")]
    pub device: String,

    /// Address of the controller side, the sender of command frames
    #[serde(default = "default_controller_addr")]
    pub controller: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            device: default_device_addr(),
            controller: default_controller_addr(),
        }
    }
}

impl Endpoints {
    /// Validate that both addresses are well-formed and distinct
    pub fn validate(&self) -> Result<()> {
        for (label, addr) in [("device", &self.device), ("controller", &self.controller)] {
            if addr.is_empty() {
                return Err(AppError::config(format!(
                    "{} address cannot be empty",
                    label
                )));
            }

            if IpAddr::from_str(addr).is_err() {
                return Err(AppError::config(format!(
                    "Invalid {} address: {}",
                    label, addr
                )));
            }
        }

        if self.device == self.controller {
            return Err(AppError::config(format!(
                "Device and controller addresses must differ (both are {})",
                self.device
            )));
        }

        Ok(())
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the captured .csv dumps
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory where generated figures are written
    #[serde(default = "default_figure_dir")]
    pub figure_dir: PathBuf,

    /// Persist figures as PNG files
    #[serde(default)]
    pub save: bool,

    /// Open figures in the system image viewer
    #[serde(default = "default_show")]
    pub show: bool,

    /// Endpoint addresses of the link
    #[serde(default)]
    pub endpoints: Endpoints,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            figure_dir: default_figure_dir(),
            save: false,
            show: default_show(),
            endpoints: Endpoints::default(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        // Figures that are neither saved nor shown serve no purpose
        if !self.save && !self.show {
            return Err(AppError::config(
                "Figures would be neither saved nor shown; drop --hide or add --save",
            ));
        }

        if self.save && self.figure_dir.as_os_str().is_empty() {
            return Err(AppError::config(
                "A figure directory must be specified when saving is requested",
            ));
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::config("Data directory cannot be empty"));
        }

        self.endpoints.validate()?;

        Ok(())
    }
}

fn default_device_addr() -> String {
    defaults::DEFAULT_DEVICE_ADDR.to_string()
}

fn default_controller_addr() -> String {
    defaults::DEFAULT_CONTROLLER_ADDR.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_DATA_DIR)
}

fn default_figure_dir() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_FIGURE_DIR)
}

fn default_show() -> bool {
    true
}

fn default_enable_color() -> bool {
    true
}

/// Resolve a directory flag against the current working directory
fn resolve_dir(explicit: Option<PathBuf>, default_name: &str) -> PathBuf {
    explicit.unwrap_or_else(|| {
        std::env::current_dir()
            .map(|cwd| cwd.join(default_name))
            .unwrap_or_else(|_| PathBuf::from(default_name))
    })
}

/// Build the complete configuration from parsed CLI arguments.
///
/// Precedence is CLI flag > environment variable > default; the environment
/// layer (including a `.env` file loaded beforehand) is handled by clap's
/// `env` fallback on the individual flags.
pub fn load_config(cli: Cli) -> Result<Config> {
    let mut config = Config {
        data_dir: resolve_dir(cli.data_dir.clone(), defaults::DEFAULT_DATA_DIR),
        figure_dir: resolve_dir(cli.figure_dir.clone(), defaults::DEFAULT_FIGURE_DIR),
        save: cli.save,
        show: !cli.hide,
        enable_color: cli.use_colors(),
        verbose: cli.verbose,
        debug: cli.debug,
        ..Config::default()
    };

    if let Some(addr) = cli.device_addr {
        config.endpoints.device = addr;
    }

    if let Some(addr) = cli.controller_addr {
        config.endpoints.controller = addr;
    }

    config.validate()?;

    Ok(config)
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Data directory: {}", config.data_dir.display()));
    summary.push(format!("Figure directory: {}", config.figure_dir.display()));
    summary.push(format!("Save figures: {}", config.save));
    summary.push(format!("Show figures: {}", config.show));
    summary.push(format!("Device endpoint: {}", config.endpoints.device));
    summary.push(format!(
        "Controller endpoint: {}",
        config.endpoints.controller
    ));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}

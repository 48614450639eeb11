//! Command-line interface definition and flag validation

use clap::Parser;
use std::path::PathBuf;

/// UDP Trace Analyzer - offline jitter and delay figures from CSV captures
#[derive(Parser, Debug, Clone)]
#[command(name = "uta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the captured UDP dumps in .csv format
    #[arg(long, value_name = "PATH", env = "UTA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory where generated figures are written
    #[arg(long, value_name = "PATH", env = "UTA_FIGURE_DIR")]
    pub figure_dir: Option<PathBuf>,

    /// Don't open the figures in the system image viewer
    #[arg(long)]
    pub hide: bool,

    /// Save the figures as PNG files
    #[arg(long)]
    pub save: bool,

    /// Address of the device endpoint of the link (the robot arm)
    #[arg(long, value_name = "ADDR", env = "UTA_DEVICE_ADDR")]
    pub device_addr: Option<String>,

    /// Address of the controller endpoint of the link
    #[arg(long, value_name = "ADDR", env = "UTA_CONTROLLER_ADDR")]
    pub controller_addr: Option<String>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        // Hidden and unsaved figures would produce nothing at all
        if self.hide && !self.save {
            return Err(
                "Nothing would be produced: --hide suppresses display and --save was not given"
                    .to_string(),
            );
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        summary.push_str(&format!("  Save figures: {}\n", self.save));
        summary.push_str(&format!("  Show figures: {}\n", !self.hide));
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        if let Some(ref data_dir) = self.data_dir {
            summary.push_str(&format!("  Data directory: {}\n", data_dir.display()));
        }

        if let Some(ref figure_dir) = self.figure_dir {
            summary.push_str(&format!("  Figure directory: {}\n", figure_dir.display()));
        }

        if let Some(ref addr) = self.device_addr {
            summary.push_str(&format!("  Device address: {}\n", addr));
        }

        if let Some(ref addr) = self.controller_addr {
            summary.push_str(&format!("  Controller address: {}\n", addr));
        }

        summary
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_default_flags() {
        let cli = parse(&["uta"]);
        assert!(cli.data_dir.is_none());
        assert!(cli.figure_dir.is_none());
        assert!(!cli.hide);
        assert!(!cli.save);
        assert!(cli.device_addr.is_none());
        assert!(cli.controller_addr.is_none());
    }

    #[test]
    fn test_directory_flags() {
        let cli = parse(&["uta", "--data-dir", "/tmp/dumps", "--figure-dir", "/tmp/figs"]);
        assert_eq!(cli.data_dir.unwrap(), PathBuf::from("/tmp/dumps"));
        assert_eq!(cli.figure_dir.unwrap(), PathBuf::from("/tmp/figs"));
    }

    #[test]
    fn test_endpoint_flags() {
        let cli = parse(&[
            "uta",
            "--device-addr",
            "10.0.0.1",
            "--controller-addr",
            "10.0.0.2",
        ]);
        assert_eq!(cli.device_addr.unwrap(), "10.0.0.1");
        assert_eq!(cli.controller_addr.unwrap(), "10.0.0.2");
    }

    #[test]
    fn test_hide_requires_save() {
        let cli = parse(&["uta", "--hide"]);
        let err = cli.validate().unwrap_err();
        assert!(err.contains("Nothing would be produced"));

        let cli = parse(&["uta", "--hide", "--save"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_conflicting_color_flags() {
        let cli = parse(&["uta", "--color", "--no-color"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_save_alone_is_valid() {
        let cli = parse(&["uta", "--save"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_config_summary() {
        let cli = parse(&["uta", "--save", "--hide", "--data-dir", "captures"]);
        let summary = cli.get_config_summary();
        assert!(summary.contains("Save figures: true"));
        assert!(summary.contains("Show figures: false"));
        assert!(summary.contains("captures"));
    }
}

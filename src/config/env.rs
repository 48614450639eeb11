//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists.
    ///
    /// Must run before CLI parsing so that the `UTA_*` fallbacks on the
    /// flags pick the file's values up.
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                println!("Loaded configuration from .env file");
            }
        } else if debug {
            println!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# UDP Trace Analyzer Configuration
#
# This file contains environment variables that can be used to configure
# the trace analyzer. Values specified here will be used as defaults,
# but can be overridden by command-line arguments.

# Directory containing the captured .csv dumps
# UTA_DATA_DIR=./data

# Directory where generated figures are written
# UTA_FIGURE_DIR=./figures

# Address of the device endpoint (the robot arm side of the link)
# UTA_DEVICE_ADDR=192.168.38.1

# Address of the controller endpoint
# UTA_CONTROLLER_ADDR=192.168.38.11
"#
        .to_string()
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        use std::fs;

        let content = Self::create_example_env_content();
        fs::write(path, content)
            .map_err(|e| AppError::config(format!("Failed to write example .env file: {}", e)))?;

        Ok(())
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "UTA_DEVICE_ADDR" | "UTA_CONTROLLER_ADDR" => {
                value.parse::<std::net::IpAddr>().map_err(|e| {
                    AppError::config(format!("Invalid {} entry '{}': {}", key, value, e))
                })?;
            }
            "UTA_DATA_DIR" | "UTA_FIGURE_DIR" => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} cannot be empty", key)));
                }
            }
            _ => {}
        }

        Ok(())
    }
}

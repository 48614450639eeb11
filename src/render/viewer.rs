//! Platform-specific launching of the system image viewer

use crate::error::{AppError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Open a rendered figure in the platform image viewer.
///
/// The viewer is spawned detached; the analysis run does not wait for the
/// window to close.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            AppError::render(format!(
                "Failed to open {} in the system image viewer: {}",
                path.display(),
                e
            ))
        })?;

    log::debug!("opened {} in the system image viewer", path.display());

    Ok(())
}

/// Build the viewer invocation for the current platform.
fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

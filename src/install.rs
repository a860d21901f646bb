//! Dependency installation step.
//! Runs npm in the generated project, blocking until it finishes.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Command used to install the generated project's dependencies
pub const INSTALL_COMMAND: &str = "npm";

/// Runs `npm install` in the generated project root with inherited stdio.
///
/// # Arguments
/// * `output_root` - Directory the project was generated into
///
/// # Errors
/// * `Error::IoError` if the command cannot be spawned
/// * `Error::InstallError` if it exits with a non-zero status
pub fn run_install(output_root: &Path) -> Result<()> {
    debug!("Installing dependencies in '{}'", output_root.display());

    let status = Command::new(INSTALL_COMMAND)
        .arg("install")
        .current_dir(output_root)
        .status()
        .map_err(Error::IoError)?;

    if !status.success() {
        return Err(Error::InstallError { status });
    }

    Ok(())
}

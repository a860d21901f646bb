//! Error handling for the reactor-gen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for reactor-gen operations.
///
/// Every error is fatal to the run: nothing is retried and no partially
/// generated output is cleaned up.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while walking or copying the boilerplate
    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Boilerplate directory does not exist: {template_dir}.")]
    TemplateDoesNotExist { template_dir: String },

    #[error("Output directory already exists: {output_dir}. Use --force to overwrite.")]
    OutputDirectoryExists { output_dir: String },

    /// A file the boilerplate is required to ship is absent after copying
    #[error("Expected boilerplate file is missing: {path}.")]
    MissingTemplateFile { path: String },

    /// Represents errors in the destination package manifest synthesis
    #[error("Manifest error: {0}.")]
    ManifestError(String),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// The interactive prompt stream was closed or failed
    #[error("Input aborted: {0}.")]
    InputAborted(String),

    #[error("Glob pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// The external dependency installation step failed
    #[error("Dependency installation failed with {status}.")]
    InstallError { status: std::process::ExitStatus },
}

/// Convenience type alias for Results with reactor-gen's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}

//! Error handling for snipkit.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use thiserror::Error;

/// Errors raised while generating snippets.
///
/// None of them is recoverable: the binary reports the first error it sees
/// and exits, leaving already written files in place.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the MiniJinja engine while compiling or rendering
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Template root '{template_root}' does not exist.")]
    TemplateRootDoesNotExistError { template_root: String },

    /// A group directory lacks one of its required files
    #[error("No file found in '{group_dir}' (tried: {tried}).")]
    MissingFileError { group_dir: String, tried: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}

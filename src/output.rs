//! Filesystem output helpers shared by the snippet writers.

use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// Creates `dir` and any missing ancestors. An existing directory is not an error.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        debug!("Creating directory {}", dir.display());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Writes `content` to `path`, creating parent directories and replacing any
/// existing file. Returns once the data has been handed to the OS.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    debug!("Writing {}", path.display());
    fs::write(path, content)?;
    Ok(())
}

//! Template source loading for snipkit.
//! A template root holds one directory per snippet group; each group
//! directory carries a template file and a configuration file.
use crate::config::{load_first, parse_group_config, GroupConfig};
use crate::constants::{CONFIG_FILES, TEMPLATE_FILES};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A group's template paired with its configuration.
#[derive(Debug)]
pub struct TemplateSource {
    /// Directory the template was loaded from
    pub group_dir: PathBuf,
    /// Raw template text
    pub template: String,
    /// Parsed group configuration
    pub config: GroupConfig,
}

/// Reads the first existing file among `candidates`, failing if none exists.
fn read_required(group_dir: &Path, candidates: &[&str]) -> Result<String> {
    match load_first(group_dir, candidates)? {
        Some((_, content)) => Ok(content),
        None => Err(Error::MissingFileError {
            group_dir: group_dir.display().to_string(),
            tried: candidates.join(", "),
        }),
    }
}

/// Loads a single group directory.
///
/// # Errors
/// * `Error::MissingFileError` if the template or configuration file is absent
/// * `Error::ConfigError` if the configuration cannot be parsed
pub fn load_group<P: AsRef<Path>>(group_dir: P) -> Result<TemplateSource> {
    let group_dir = group_dir.as_ref();
    let template = read_required(group_dir, &TEMPLATE_FILES)?;
    let config = parse_group_config(&read_required(group_dir, &CONFIG_FILES)?)?;

    Ok(TemplateSource { group_dir: group_dir.to_path_buf(), template, config })
}

/// Loads every group under `template_root`, in file-name order.
///
/// Plain files directly under the root are ignored.
///
/// # Errors
/// * `Error::TemplateRootDoesNotExistError` if the root is missing
pub fn load_template_root<P: AsRef<Path>>(template_root: P) -> Result<Vec<TemplateSource>> {
    let template_root = template_root.as_ref();
    if !template_root.is_dir() {
        return Err(Error::TemplateRootDoesNotExistError {
            template_root: template_root.display().to_string(),
        });
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(template_root).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.path().is_dir() {
            debug!("Skipping non-directory entry {}", entry.path().display());
            continue;
        }
        debug!("Loading group {}", entry.path().display());
        sources.push(load_group(entry.path())?);
    }

    Ok(sources)
}

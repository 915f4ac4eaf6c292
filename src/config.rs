//! Configuration handling for snipkit.
//! Covers the generator settings (where templates live, where snippets go)
//! and the per-group configuration files that describe snippet variants.

use crate::constants::SETTINGS_FILES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Generator settings, read once at startup and passed down explicitly.
///
/// Every field has a default, so a settings file only needs to name the
/// values it changes. Relative paths are resolved against the base directory
/// by [`Settings::resolve`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root holding one directory per CSS snippet group
    pub css_root: PathBuf,
    /// Root holding one directory per JS snippet group
    pub js_root: PathBuf,
    /// Output root for Sublime Text snippets
    pub sublime_root: PathBuf,
    /// Output root for the WebStorm live-template set
    pub webstorm_root: PathBuf,
    /// Prefix of every trigger and snippet file name
    pub prefix: String,
    /// Extension of the generated Sublime snippet files
    pub snippet_extension: String,
    /// `group` attribute of the live-template set
    pub template_set_group: String,
    /// File name of the live-template set
    pub template_set_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            css_root: PathBuf::from("src/css"),
            js_root: PathBuf::from("src/js"),
            sublime_root: PathBuf::from("dist/sublime"),
            webstorm_root: PathBuf::from("dist/webstorm"),
            prefix: "am-".to_string(),
            snippet_extension: "sublime-snippet".to_string(),
            template_set_group: "AmazeUI".to_string(),
            template_set_file: "AmazeUI.xml".to_string(),
        }
    }
}

impl Settings {
    /// Makes every relative path absolute with respect to `base_dir`.
    pub fn resolve<P: AsRef<Path>>(mut self, base_dir: P) -> Self {
        let base_dir = base_dir.as_ref();
        for path in [
            &mut self.css_root,
            &mut self.js_root,
            &mut self.sublime_root,
            &mut self.webstorm_root,
        ] {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
        self
    }

    /// Template roots in processing order, paired with a family label.
    pub fn families(&self) -> [(&'static str, &Path); 2] {
        [("css", self.css_root.as_path()), ("js", self.js_root.as_path())]
    }
}

/// Value of one entry in a group configuration file.
///
/// The shape is decided once at parse time: an array is a list of variants,
/// anything else is a single render context.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupValue {
    /// One snippet, rendered without a class name
    SingleContext(serde_json::Value),
    /// One snippet per variant, each rendered with that variant as `className`
    VariantList(Vec<String>),
}

impl TryFrom<serde_json::Value> for GroupValue {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Ok(s),
                    other => Err(Error::ConfigError(format!(
                        "variant list may only contain strings, found '{other}'"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(GroupValue::VariantList),
            other => Ok(GroupValue::SingleContext(other)),
        }
    }
}

/// Ordered group configuration: logical group name to its value.
pub type GroupConfig = IndexMap<String, GroupValue>;

/// Loads the first existing file among `candidates` in `dir`.
///
/// # Returns
/// * `Result<Option<(PathBuf, String)>>` - Path and contents of the first
///   file found, or `None` if none exists
pub fn load_first<P: AsRef<Path>>(
    dir: P,
    candidates: &[&str],
) -> Result<Option<(PathBuf, String)>> {
    for file in candidates {
        let path = dir.as_ref().join(file);
        if path.is_file() {
            debug!("Loading {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            return Ok(Some((path, content)));
        }
    }
    Ok(None)
}

/// Parses JSON first and falls back to YAML.
fn parse_json_or_yaml<T: DeserializeOwned>(content: &str) -> Result<T> {
    match serde_json::from_str(content) {
        Ok(v) => Ok(v),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Parses a group configuration file.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither a JSON nor a YAML
///   mapping, or a variant list holds a non-string value
pub fn parse_group_config(content: &str) -> Result<GroupConfig> {
    let raw: IndexMap<String, serde_json::Value> = parse_json_or_yaml(content)?;
    raw.into_iter()
        .map(|(name, value)| GroupValue::try_from(value).map(|value| (name, value)))
        .collect()
}

/// Parses generator settings content; missing fields keep their defaults.
pub fn parse_settings(content: &str) -> Result<Settings> {
    parse_json_or_yaml(content)
}

/// Loads the generator settings for `base_dir`.
///
/// Falls back to [`Settings::default`] when no settings file exists. The
/// returned settings have all paths resolved against `base_dir`.
pub fn get_settings<P: AsRef<Path>>(base_dir: P) -> Result<Settings> {
    let base_dir = base_dir.as_ref();
    let settings = match load_first(base_dir, &SETTINGS_FILES)? {
        Some((_, content)) => parse_settings(&content)?,
        None => {
            debug!("No settings file in {}, using defaults", base_dir.display());
            Settings::default()
        }
    };
    Ok(settings.resolve(base_dir))
}

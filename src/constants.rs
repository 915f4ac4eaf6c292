//! Common constants used throughout snipkit.

/// Generator settings files, looked up in the base directory
pub const SETTINGS_FILES: [&str; 3] = ["snipkit.json", "snipkit.yml", "snipkit.yaml"];

/// Per-group configuration files
pub const CONFIG_FILES: [&str; 3] = ["config.json", "config.yml", "config.yaml"];

/// Per-group template files
pub const TEMPLATE_FILES: [&str; 2] = ["tpl.j2", "tpl.hbs"];

/// Context key that carries the variant of a variant-list group
pub const CLASS_NAME_KEY: &str = "className";

/// Message printed once every file has been written
pub const SUCCESS_MESSAGE: &str = "snippets is saved";

//! snipkit generates editor snippets from template fragments.
//! Each snippet group is rendered with MiniJinja, then written both as
//! Sublime Text snippets and as a single WebStorm live-template set.

/// Command-line interface module for the snipkit binary
pub mod cli;

/// Snippet collection: turns templates and group configuration into render records
pub mod collector;

/// Generator settings and group configuration parsing
/// Supports JSON and YAML formats
pub mod config;

pub mod constants;

/// Error types and handling for snipkit
pub mod error;

/// Full pipeline orchestration
pub mod generator;

/// WebStorm live-template serialization
pub mod live_template;

/// Template root discovery and group loading
pub mod loader;

pub mod logger;

pub mod output;

/// Placeholder extraction, renumbering and XML escaping
pub mod placeholder;

/// Template rendering functionality
pub mod renderer;

/// Sublime Text snippet serialization
pub mod sublime;

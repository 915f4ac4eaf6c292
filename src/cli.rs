//! Command-line interface implementation for snipkit.
//! Every argument is optional; a bare `snipkit` generates from the current
//! directory.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for snipkit.
#[derive(Parser, Debug)]
#[command(author, version, about = "snipkit: generate Sublime Text snippets and WebStorm live templates", long_about = None)]
pub struct Args {
    /// Directory holding the settings file, template roots and output roots
    #[arg(value_name = "BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments, exiting through clap on invalid input.
pub fn get_args() -> Args {
    Args::parse()
}

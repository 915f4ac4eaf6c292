//! snipkit's main application entry point.
//! Parses arguments, configures logging and runs the generator.

use snipkit::{
    cli::{get_args, Args},
    config::get_settings,
    constants::SUCCESS_MESSAGE,
    error::{default_error_handler, Result},
    generator::generate,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// Settings are loaded once here and passed to the generator by reference.
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();
    let settings = get_settings(&args.base_dir)?;
    log::debug!("Using settings {:?}", settings);

    generate(&engine, &settings)?;

    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

/// Initializes `env_logger` for the generator run.
///
/// Pipeline progress is logged at `info`, per-record details at `debug`.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .init();
}

use std::io;

use snipkit::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplateRootDoesNotExistError { template_root: "src/css".to_string() };
    assert_eq!(err.to_string(), "Template root 'src/css' does not exist.");

    let err = Error::MissingFileError {
        group_dir: "src/css/btn".to_string(),
        tried: "tpl.j2, tpl.hbs".to_string(),
    };
    assert_eq!(err.to_string(), "No file found in 'src/css/btn' (tried: tpl.j2, tpl.hbs).");
}

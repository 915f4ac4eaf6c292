use clap::Parser;
use snipkit::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("snipkit")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.base_dir, PathBuf::from("."));
    assert!(!parsed.verbose);
}

#[test]
fn test_base_dir_and_verbose() {
    let parsed = Args::try_parse_from(make_args(&["-v", "./amaze"])).unwrap();

    assert_eq!(parsed.base_dir, PathBuf::from("./amaze"));
    assert!(parsed.verbose);

    let parsed = Args::try_parse_from(make_args(&["--verbose"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["./one", "./two"])).is_err());
}

#[test]
fn test_unknown_flag() {
    assert!(Args::try_parse_from(make_args(&["--force"])).is_err());
}

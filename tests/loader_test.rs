use snipkit::config::GroupValue;
use snipkit::error::Error;
use snipkit::loader::{load_group, load_template_root};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_group(root: &Path, group: &str, template: &str, config: &str) {
    let dir = root.join(group);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("tpl.j2"), template).unwrap();
    fs::write(dir.join("config.json"), config).unwrap();
}

#[test]
fn test_load_template_root_sorted_by_name() {
    let temp_dir = TempDir::new().unwrap();
    write_group(temp_dir.path(), "nav", "<nav></nav>", r#"{"nav": {}}"#);
    write_group(temp_dir.path(), "btn", "<button></button>", r#"{"btn": ["a"]}"#);
    fs::write(temp_dir.path().join("README.md"), "not a group").unwrap();

    let sources = load_template_root(temp_dir.path()).unwrap();

    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].template, "<button></button>");
    assert_eq!(sources[1].template, "<nav></nav>");
    assert_eq!(sources[0].group_dir, temp_dir.path().join("btn"));
}

#[test]
fn test_load_group_accepts_hbs_and_yaml() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("tpl.hbs"), "<i>{{ className }}</i>").unwrap();
    fs::write(temp_dir.path().join("config.yml"), "icon:\n  - star\n").unwrap();

    let source = load_group(temp_dir.path()).unwrap();

    assert_eq!(source.template, "<i>{{ className }}</i>");
    assert_eq!(source.config["icon"], GroupValue::VariantList(vec!["star".to_string()]));
}

#[test]
fn test_load_group_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("tpl.j2"), "<hr>").unwrap();

    match load_group(temp_dir.path()) {
        Err(Error::MissingFileError { tried, .. }) => {
            assert_eq!(tried, "config.json, config.yml, config.yaml")
        }
        other => panic!("Expected MissingFileError, got {other:?}"),
    }
}

#[test]
fn test_load_template_root_missing() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_template_root(temp_dir.path().join("absent"));
    assert!(matches!(result, Err(Error::TemplateRootDoesNotExistError { .. })));
}

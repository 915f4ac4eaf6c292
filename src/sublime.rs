//! Sublime Text snippet writer.
//! Each render record becomes one `.sublime-snippet` file under a directory
//! named after its group.

use crate::collector::RenderRecord;
use crate::config::Settings;
use crate::error::Result;
use crate::output::write_file;
use crate::placeholder::to_sublime;
use std::path::{Path, PathBuf};

/// Builds the snippet document for a record.
pub fn render_snippet(record: &RenderRecord) -> String {
    let content = to_sublime(&record.data);
    let trigger = format!("  <tabTrigger>{}</tabTrigger>", record.trigger_name);
    [
        "<snippet>",
        "  <content>",
        "    <![CDATA[",
        content.as_str(),
        "    ]]>",
        "  </content>",
        trigger.as_str(),
        "</snippet>",
    ]
    .join("\n")
}

/// Path of a record's snippet file:
/// `<root>/<name>/<prefix><name>[-<file_name>].<extension>`.
pub fn snippet_path<P: AsRef<Path>>(
    sublime_root: P,
    record: &RenderRecord,
    prefix: &str,
    extension: &str,
) -> PathBuf {
    let mut file_name = format!("{prefix}{}", record.name);
    if !record.file_name.is_empty() {
        file_name.push('-');
        file_name.push_str(&record.file_name);
    }
    file_name.push('.');
    file_name.push_str(extension);

    sublime_root.as_ref().join(&record.name).join(file_name)
}

/// Writes one snippet file per record, overwriting existing files.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths written, in record order
pub fn write_snippets(settings: &Settings, records: &[RenderRecord]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = snippet_path(
            &settings.sublime_root,
            record,
            &settings.prefix,
            &settings.snippet_extension,
        );
        write_file(&path, &render_snippet(record))?;
        written.push(path);
    }
    Ok(written)
}

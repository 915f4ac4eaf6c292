//! WebStorm live-template writer.
//! All render records, across template families, are serialized into a single
//! `<templateSet>` document.

use crate::collector::RenderRecord;
use crate::config::Settings;
use crate::error::Result;
use crate::output::write_file;
use crate::placeholder::{to_live_template, Variable};
use std::path::PathBuf;

fn render_variable(variable: &Variable) -> String {
    format!(
        r#"    <variable name="{}" expression="{}" defaultValue="" alwaysStopAt="true" />"#,
        variable.name, variable.expression
    )
}

/// Builds the `<template>` block of a record.
pub fn render_template(record: &RenderRecord) -> String {
    let text = to_live_template(&record.data);

    let mut lines = vec![format!(
        r#"  <template name="{}" value="{}" toReformat="true" toShortenFQNames="true">"#,
        record.trigger_name, text.value
    )];
    lines.extend(text.variables.iter().map(render_variable));
    lines.extend(
        [
            "    <context>",
            r#"      <option name="HTML_TEXT" value="true" />"#,
            r#"      <option name="HTML" value="true" />"#,
            "    </context>",
            "  </template>",
        ]
        .map(String::from),
    );
    lines.join("\n")
}

/// Builds the complete template set document.
pub fn render_template_set(group: &str, records: &[RenderRecord]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(r#"<templateSet group="{group}">"#),
    ];
    lines.extend(records.iter().map(render_template));
    lines.push("</templateSet>".to_string());
    lines.join("\n")
}

/// Writes the template set for `records` to
/// `<webstorm_root>/<template_set_file>`, replacing any existing file.
pub fn write_template_set(settings: &Settings, records: &[RenderRecord]) -> Result<PathBuf> {
    let path = settings.webstorm_root.join(&settings.template_set_file);
    write_file(&path, &render_template_set(&settings.template_set_group, records))?;
    Ok(path)
}

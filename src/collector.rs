//! Snippet collection: renders every group of every template source into a
//! flat, ordered list of render records.

use crate::config::GroupValue;
use crate::constants::CLASS_NAME_KEY;
use crate::error::Result;
use crate::loader::TemplateSource;
use crate::renderer::TemplateRenderer;
use log::debug;

/// One rendered snippet, shared read-only by both writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRecord {
    /// Group name, also the Sublime output sub-directory
    pub name: String,
    /// Variant name; empty for single-context groups
    pub file_name: String,
    /// Editor trigger, e.g. `am-btn:primary`
    pub trigger_name: String,
    /// Rendered template text, placeholders still in `$label$` form
    pub data: String,
}

/// Renders the groups of a single template.
///
/// A variant list yields one record per variant, in list order, rendered with
/// `{"className": variant}`. Any other value yields one record rendered with
/// an empty context.
pub fn collect_source(
    engine: &dyn TemplateRenderer,
    source: &TemplateSource,
    prefix: &str,
) -> Result<Vec<RenderRecord>> {
    let mut records = Vec::new();

    for (name, value) in &source.config {
        match value {
            GroupValue::VariantList(variants) => {
                for variant in variants {
                    let context = serde_json::json!({ CLASS_NAME_KEY: variant });
                    records.push(RenderRecord {
                        name: name.clone(),
                        file_name: variant.clone(),
                        trigger_name: format!("{prefix}{name}:{variant}"),
                        data: engine.render(&source.template, &context)?,
                    });
                }
            }
            GroupValue::SingleContext(_) => {
                records.push(RenderRecord {
                    name: name.clone(),
                    file_name: String::new(),
                    trigger_name: format!("{prefix}{name}"),
                    data: engine.render(&source.template, &serde_json::json!({}))?,
                });
            }
        }
        debug!("Rendered group '{}' from {}", name, source.group_dir.display());
    }

    Ok(records)
}

/// Renders all template sources in order and concatenates their records.
pub fn collect(
    engine: &dyn TemplateRenderer,
    sources: &[TemplateSource],
    prefix: &str,
) -> Result<Vec<RenderRecord>> {
    let mut records = Vec::new();
    for source in sources {
        records.extend(collect_source(engine, source, prefix)?);
    }
    Ok(records)
}

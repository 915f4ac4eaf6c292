//! End-to-end snippet generation.
//! Loads every template family, renders its records, and hands them to the
//! Sublime and live-template writers.

use crate::collector::{collect, RenderRecord};
use crate::config::Settings;
use crate::error::Result;
use crate::live_template::write_template_set;
use crate::loader::load_template_root;
use crate::renderer::TemplateRenderer;
use crate::sublime::write_snippets;
use log::info;
use std::path::PathBuf;

/// Files produced by a generator run.
#[derive(Debug, Default)]
pub struct Generated {
    /// Sublime snippet files, in record order
    pub snippets: Vec<PathBuf>,
    /// The live-template set
    pub template_set: PathBuf,
}

/// Renders the records of every template family, css first.
pub fn collect_families(
    engine: &dyn TemplateRenderer,
    settings: &Settings,
) -> Result<Vec<(&'static str, Vec<RenderRecord>)>> {
    let mut families = Vec::new();
    for (family, root) in settings.families() {
        let sources = load_template_root(root)?;
        let records = collect(engine, &sources, &settings.prefix)?;
        info!("Rendered {} {} snippets from {} groups", records.len(), family, sources.len());
        families.push((family, records));
    }
    Ok(families)
}

/// Runs the whole pipeline. Every write has completed when this returns `Ok`.
///
/// # Flow
/// 1. Loads and renders each template family
/// 2. Writes the Sublime snippets family by family
/// 3. Writes one live-template set holding the records of all families
pub fn generate(engine: &dyn TemplateRenderer, settings: &Settings) -> Result<Generated> {
    let families = collect_families(engine, settings)?;

    let mut snippets = Vec::new();
    for (family, records) in &families {
        let written = write_snippets(settings, records)?;
        info!("Wrote {} {} snippets to {}", written.len(), family, settings.sublime_root.display());
        snippets.extend(written);
    }

    let all_records: Vec<RenderRecord> =
        families.into_iter().flat_map(|(_, records)| records).collect();
    let template_set = write_template_set(settings, &all_records)?;
    info!("Wrote {} live templates to {}", all_records.len(), template_set.display());

    Ok(Generated { snippets, template_set })
}

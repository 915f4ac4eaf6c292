//! Template rendering for snipkit.
//! Wraps MiniJinja behind a small trait so the collector does not depend on
//! a concrete engine.
use crate::error::Result;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template source to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps the trailing newline of template files,
    /// so rendered snippets match their source byte for byte.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a one-off template string.
    ///
    /// Undefined variables render as empty strings, which is what a group
    /// rendered without a `className` relies on.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to compile or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_class_name() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer
            .render(r#"<a class="${{ className }}$"></a>"#, &json!({"className": "primary"}))
            .unwrap();
        assert_eq!(result, r#"<a class="$primary$"></a>"#);
    }

    #[test]
    fn test_undefined_variable_renders_empty() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("am-btn{{ className }}", &json!({})).unwrap();
        assert_eq!(result, "am-btn");
    }

    #[test]
    fn test_trailing_newline_kept() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("<hr>\n", &json!({})).unwrap();
        assert_eq!(result, "<hr>\n");
    }

    #[test]
    fn test_malformed_template_is_an_error() {
        let renderer = MiniJinjaRenderer::new();
        assert!(renderer.render("{% if %}", &json!({})).is_err());
    }
}

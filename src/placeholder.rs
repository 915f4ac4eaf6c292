//! Placeholder extraction and renumbering.
//!
//! Rendered snippets mark tab stops as `$label$`. Each occurrence, read left
//! to right, gets the next 1-based index; repeated labels are not merged.
//! Numbering restarts for every snippet.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    // `$` followed by one or more non-`$` characters and a closing `$`
    Regex::new(r"\$([^$]+)\$").expect("placeholder pattern is valid")
});

/// A tab stop found in a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// 1-based position among the snippet's placeholders
    pub index: usize,
    /// Text between the delimiters
    pub label: String,
}

/// Variable declaration emitted for each live-template placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub expression: String,
}

/// Live-template body together with its variable declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveTemplateText {
    pub value: String,
    pub variables: Vec<Variable>,
}

/// Lists the placeholders of `text` in left-to-right order.
pub fn find_placeholders(text: &str) -> Vec<Placeholder> {
    PLACEHOLDER
        .captures_iter(text)
        .enumerate()
        .map(|(i, caps)| Placeholder { index: i + 1, label: caps[1].to_string() })
        .collect()
}

/// Rewrites every placeholder through `f`, numbering occurrences from 1.
fn renumber<F>(text: &str, mut f: F) -> String
where
    F: FnMut(usize, &str) -> String,
{
    let mut index = 0;
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            index += 1;
            f(index, &caps[1])
        })
        .into_owned()
}

/// Sublime Text encoding: `$label$` becomes `${i:label}`.
///
/// Text without placeholders is returned unchanged.
pub fn to_sublime(text: &str) -> String {
    renumber(text, |index, label| format!("${{{index}:{label}}}"))
}

/// Escapes `<`, `>` and `"` for use inside an XML attribute value.
///
/// `&` is left alone so entities already present in templates pass through.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// WebStorm live-template encoding.
///
/// The whole text is escaped first, then `$label$` becomes `$varI$` and a
/// `varI` variable with the label as its expression is recorded. Labels are
/// matched after escaping, so a label containing `<`, `>` or `"` ends up with
/// the escaped form as its expression. Such labels are not supported.
pub fn to_live_template(text: &str) -> LiveTemplateText {
    let mut variables = Vec::new();
    let value = renumber(&escape_xml(text), |index, label| {
        let name = format!("var{index}");
        let token = format!("${name}$");
        variables.push(Variable { name, expression: label.to_string() });
        token
    });
    LiveTemplateText { value, variables }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_placeholders_keeps_duplicates() {
        let found = find_placeholders("$a$ $b$ $a$");
        let labels: Vec<_> = found.iter().map(|p| (p.index, p.label.as_str())).collect();
        assert_eq!(labels, vec![(1, "a"), (2, "b"), (3, "a")]);
    }

    #[test]
    fn test_empty_label_is_not_a_placeholder() {
        assert!(find_placeholders("$$").is_empty());
        assert_eq!(to_sublime("cost: $$"), "cost: $$");
    }

    #[test]
    fn test_unterminated_delimiter_is_left_alone() {
        assert_eq!(to_sublime("$one$ and $two"), "${1:one} and $two");
    }
}

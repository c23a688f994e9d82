//! Route template compilation: placeholder syntax to an anchored regex.
//!
//! Templates use `<converter:name>` placeholders (`<int:pk>`, `<slug:title>`)
//! or bare `<name>`, which defaults to the `str` converter.

use regex::Regex;
use thiserror::Error;

/// Converter name → character class. `path` is the only one crossing `/`.
const CONVERTERS: &[(&str, &str)] = &[
    ("str", "[^/]+"),
    ("int", "[0-9]+"),
    ("slug", "[-a-zA-Z0-9_]+"),
    (
        "uuid",
        "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
    ),
    ("path", ".+"),
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unclosed `<` in route template `{0}`")]
    Unclosed(String),
    #[error("unknown converter `{converter}` in route template `{template}`")]
    UnknownConverter { template: String, converter: String },
    #[error("empty parameter name in route template `{0}`")]
    EmptyName(String),
    #[error("duplicate parameter `{name}` in route template `{template}`")]
    DuplicateName { template: String, name: String },
    #[error("route template `{template}` compiled to an invalid regex: {source}")]
    Regex {
        template: String,
        source: regex::Error,
    },
}

/// A route template compiled to an anchored regex plus its parameter names.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    param_names: Vec<String>,
}

impl CompiledPattern {
    /// Compiles a template. Literal text is regex-escaped; each placeholder
    /// becomes one capture group.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        let mut pattern = String::with_capacity(template.len() + 8);
        pattern.push('^');
        let mut param_names: Vec<String> = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('<') {
            let (literal, tail) = rest.split_at(open);
            pattern.push_str(&regex::escape(literal));

            let close = tail
                .find('>')
                .ok_or_else(|| TemplateError::Unclosed(template.to_string()))?;
            let placeholder = &tail[1..close];
            let (converter, name) = match placeholder.split_once(':') {
                Some((converter, name)) => (converter, name),
                None => ("str", placeholder),
            };
            if name.is_empty() {
                return Err(TemplateError::EmptyName(template.to_string()));
            }
            if param_names.iter().any(|n| n == name) {
                return Err(TemplateError::DuplicateName {
                    template: template.to_string(),
                    name: name.to_string(),
                });
            }
            let class = CONVERTERS
                .iter()
                .find(|(c, _)| *c == converter)
                .map(|(_, class)| *class)
                .ok_or_else(|| TemplateError::UnknownConverter {
                    template: template.to_string(),
                    converter: converter.to_string(),
                })?;

            pattern.push('(');
            pattern.push_str(class);
            pattern.push(')');
            param_names.push(name.to_string());
            rest = &tail[close + 1..];
        }
        pattern.push_str(&regex::escape(rest));
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|source| TemplateError::Regex {
            template: template.to_string(),
            source,
        })?;
        Ok(Self { regex, param_names })
    }

    /// Matches a concrete path; returns captured parameters in template order.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let caps = self.regex.captures(path)?;
        Some(
            self.param_names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let value = caps.get(i + 1).map(|m| m.as_str()).unwrap_or("");
                    (name.clone(), value.to_string())
                })
                .collect(),
        )
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}

/// Rewrites typed placeholders to bare display braces: `<int:pk>` → `{pk}`,
/// `<name>` → `{name}`.
///
/// Purely textual; never fails, and leaves a dangling `<` alone.
pub fn display_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('<') {
        let (literal, tail) = rest.split_at(open);
        out.push_str(literal);
        match tail.find('>') {
            Some(close) => {
                let placeholder = &tail[1..close];
                let name = placeholder
                    .split_once(':')
                    .map(|(_, n)| n)
                    .unwrap_or(placeholder);
                out.push('{');
                out.push_str(name);
                out.push('}');
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

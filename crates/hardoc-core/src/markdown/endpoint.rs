//! Endpoint heading component and query-value masking.

use crate::document::Document;
use crate::routes::{RouteTable, ViewNotFound};

use super::{MarkdownComponent, RenderOptions};

/// Replaces each recorded `key=value` pair occurring verbatim in `path` with
/// a `key={key}` placeholder.
///
/// Idempotent: once replaced, the `key=value` needle no longer occurs, so a
/// second pass leaves the string unchanged.
pub fn mask_query_values(path: &str, pairs: &[(String, String)]) -> String {
    let mut masked = path.to_string();
    for (key, value) in pairs {
        let needle = format!("{key}={value}");
        let placeholder = format!("{key}={{{key}}}");
        masked = masked.replace(&needle, &placeholder);
    }
    masked
}

/// Heading line for one request: view identity, method, masked path.
///
/// Example:
///     ### UserDetailView GET `/api/users/42/?page={page}`
///
/// Example:
///     ### list_users() POST `/api/users/?type=personal`
pub struct EndpointSection {
    heading: String,
}

impl EndpointSection {
    /// Resolves the document's path and builds the heading. Query values are
    /// masked only for GET-like requests; other methods keep the path as
    /// captured.
    pub fn new(
        document: &Document,
        table: &RouteTable,
        options: &RenderOptions,
    ) -> Result<Self, ViewNotFound> {
        let matched = table.resolve(document.path_only())?;
        let view = matched.handler.label(options.include_view_module);

        let path = if document.is_get_like() {
            mask_query_values(&document.request_path, &document.request_query_string)
        } else {
            document.request_path.clone()
        };

        let marks = "#".repeat(options.heading_level);
        Ok(Self {
            heading: format!("{marks} {view} {} `{path}`", document.request_method),
        })
    }
}

impl MarkdownComponent for EndpointSection {
    fn render(&self) -> String {
        self.heading.clone()
    }
}

/// Bullet list of recorded query parameters; omitted when there are none.
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    pub fn new(document: &Document) -> Self {
        Self {
            pairs: document.request_query_string.clone(),
        }
    }
}

impl MarkdownComponent for QueryParameters {
    fn render(&self) -> String {
        let lines: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("- `{key}`: `{value}`"))
            .collect();
        format!("Query parameters:\n{}", lines.join("\n"))
    }

    fn condition(&self) -> bool {
        !self.pairs.is_empty()
    }
}

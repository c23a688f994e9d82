//! Markdown component pipeline: one documentation section per recorded request.

mod endpoint;

pub use endpoint::{mask_query_values, EndpointSection, QueryParameters};

use crate::document::Document;
use crate::routes::{RouteTable, ViewNotFound};

/// A renderable Markdown fragment for one request record.
///
/// `condition` gates inclusion; components returning false are omitted from
/// the rendered section.
pub trait MarkdownComponent {
    fn render(&self) -> String;

    fn condition(&self) -> bool {
        true
    }
}

/// Rendering options shared by all components.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Qualify view names with their module path.
    pub include_view_module: bool,
    /// Markdown heading depth for endpoint sections.
    pub heading_level: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_view_module: false,
            heading_level: 3,
        }
    }
}

/// Renders one document: every applicable component, blank-line separated.
pub fn render_document(
    document: &Document,
    table: &RouteTable,
    options: &RenderOptions,
) -> Result<String, ViewNotFound> {
    let endpoint = EndpointSection::new(document, table, options)?;
    let query = QueryParameters::new(document);

    let components: [&dyn MarkdownComponent; 2] = [&endpoint, &query];
    Ok(components
        .iter()
        .filter(|c| c.condition())
        .map(|c| c.render())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

/// Renders a whole capture, one section per document.
///
/// When `skip_unresolved` is set, requests with no matching route are dropped
/// with a warning; otherwise the first unresolved path aborts the run.
pub fn render_capture(
    documents: &[Document],
    table: &RouteTable,
    options: &RenderOptions,
    skip_unresolved: bool,
) -> anyhow::Result<String> {
    let mut sections = Vec::with_capacity(documents.len());
    for document in documents {
        match render_document(document, table, options) {
            Ok(section) => sections.push(section),
            Err(err) if skip_unresolved => {
                tracing::warn!("skipping request: {err}");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(sections.join("\n\n"))
}

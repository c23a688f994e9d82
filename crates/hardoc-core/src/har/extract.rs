//! Turn HAR entries into per-request documents.

use anyhow::{Context, Result};
use http::Method;
use std::path::Path;

use crate::document::Document;

use super::parse::{HarEntry, HarLog};

/// Reads a HAR file and extracts one [`Document`] per request entry.
///
/// Entries whose URL or method does not parse are skipped with a warning
/// rather than failing the whole capture. An empty `entries` array is an error.
pub fn extract_documents(path: &Path) -> Result<Vec<Document>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;

    let entries = har.log.entries;
    if entries.is_empty() {
        anyhow::bail!("HAR file has no entries");
    }

    let mut documents = Vec::with_capacity(entries.len());
    for entry in &entries {
        match document_from_entry(entry) {
            Some(doc) => documents.push(doc),
            None => tracing::warn!(
                "skipping HAR entry with unparseable URL or method: {} {}",
                entry.request.method,
                entry.request.url
            ),
        }
    }
    Ok(documents)
}

/// Builds a [`Document`] from one entry, or `None` if URL/method are invalid.
fn document_from_entry(entry: &HarEntry) -> Option<Document> {
    let parsed = url::Url::parse(&entry.request.url).ok()?;
    let method = Method::from_bytes(entry.request.method.as_bytes()).ok()?;

    let request_path = match parsed.query() {
        Some(q) if !q.is_empty() => format!("{}?{}", parsed.path(), q),
        _ => parsed.path().to_string(),
    };

    // HAR captures carry decoded query pairs in `queryString`; fall back to
    // parsing the URL when a recorder left the array empty.
    let query_pairs: Vec<(String, String)> = if entry.request.query_string.is_empty() {
        parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    } else {
        entry
            .request
            .query_string
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    };

    Some(Document {
        request_url: entry.request.url.clone(),
        request_path,
        request_method: method,
        request_query_string: query_pairs,
    })
}

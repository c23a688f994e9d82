//! Minimal HAR 1.2 structures for extracting recorded requests.

use serde::Deserialize;

/// Root HAR log (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    pub method: String,
    pub url: String,
    #[serde(default, rename = "queryString")]
    pub query_string: Vec<HarQueryPair>,
}

/// One `queryString` record (decoded name/value, per HAR 1.2).
#[derive(Debug, Deserialize)]
pub struct HarQueryPair {
    pub name: String,
    pub value: String,
}

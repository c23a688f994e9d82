//! Per-request record handed to the rendering pipeline.

use http::Method;

/// One recorded request, reduced to the fields the documentation pipeline reads.
#[derive(Debug, Clone)]
pub struct Document {
    /// Full URL as captured.
    pub request_url: String,
    /// Path plus `?query` when the capture had one, e.g. `/api/users/?page=1`.
    pub request_path: String,
    pub request_method: Method,
    /// Query pairs in recorded order (duplicates preserved).
    pub request_query_string: Vec<(String, String)>,
}

impl Document {
    /// Path portion only, query string stripped. Route resolution works on this.
    pub fn path_only(&self) -> &str {
        self.request_path.split('?').next().unwrap_or("")
    }

    /// True for methods whose query string carries the request inputs (GET, HEAD).
    pub fn is_get_like(&self) -> bool {
        self.request_method == Method::GET || self.request_method == Method::HEAD
    }
}

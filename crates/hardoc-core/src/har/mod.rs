//! HAR (HTTP Archive) reader: parse captures and extract request records.
//!
//! Only the request side of each entry is read (method, URL, query string);
//! responses are irrelevant to endpoint documentation.

mod extract;
mod parse;

pub use extract::extract_documents;

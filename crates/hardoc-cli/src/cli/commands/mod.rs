//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod generate;
mod resolve;
mod routes;

pub use completions::run_completions;
pub use generate::run_generate;
pub use resolve::run_resolve;
pub use routes::run_routes;

//! `hardoc generate` – render a HAR capture into Markdown endpoint docs.

use anyhow::{Context, Result};
use hardoc_core::config::HardocConfig;
use hardoc_core::har;
use hardoc_core::markdown::{render_capture, RenderOptions};
use hardoc_core::routes::RouteTable;
use std::path::Path;

pub fn run_generate(
    cfg: &HardocConfig,
    har_path: &Path,
    routes_path: &Path,
    output: Option<&Path>,
    include_module: bool,
    skip_unresolved: bool,
) -> Result<()> {
    let table = RouteTable::load(routes_path)?;
    let documents = har::extract_documents(har_path)?;
    tracing::info!(
        "documenting {} requests against {} routes",
        documents.len(),
        table.len()
    );

    let options = RenderOptions {
        include_view_module: include_module || cfg.include_view_module,
        heading_level: cfg.heading_level,
    };
    let skip = skip_unresolved || cfg.skip_unresolved;

    let rendered = render_capture(&documents, &table, &options, skip)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("write output: {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

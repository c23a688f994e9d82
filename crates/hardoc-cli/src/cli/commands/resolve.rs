//! `hardoc resolve` – resolve one URL path against the route table.

use anyhow::Result;
use hardoc_core::routes::RouteTable;
use std::path::Path;

/// Resolve `path` and print the view, display template, and captured params.
pub fn run_resolve(routes_path: &Path, path: &str) -> Result<()> {
    let table = RouteTable::load(routes_path)?;
    let matched = table.resolve(path)?;

    println!("view:     {}", matched.handler.label(true));
    println!("template: {}", matched.route_template);
    if matched.path_params.is_empty() {
        println!("params:   (none)");
    } else {
        for (name, value) in &matched.path_params {
            println!("param:    {name} = {value}");
        }
    }
    Ok(())
}

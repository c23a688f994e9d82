//! `hardoc routes` – list the route table.

use anyhow::Result;
use hardoc_core::routes::{display_template, RouteTable, ViewKind};
use std::path::Path;

pub fn run_routes(routes_path: &Path) -> Result<()> {
    let table = RouteTable::load(routes_path)?;
    if table.is_empty() {
        println!("Route table is empty.");
        return Ok(());
    }

    println!("{:<40} {:<10} {}", "TEMPLATE", "KIND", "VIEW");
    for route in table.routes() {
        let kind = match route.kind {
            ViewKind::Class => "class",
            ViewKind::Function => "function",
        };
        println!(
            "{:<40} {:<10} {}",
            display_template(&route.pattern),
            kind,
            route.view
        );
    }
    Ok(())
}

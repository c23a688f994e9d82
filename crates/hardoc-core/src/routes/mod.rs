//! Route table: the documented application's URL patterns.
//!
//! Loaded from a TOML file, compiled once, then used to resolve recorded
//! request paths back to their handling views.

mod pattern;
mod resolve;

pub use pattern::{display_template, CompiledPattern, TemplateError};
pub use resolve::{ResolverMatch, ViewHandler, ViewNotFound};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Handler kind declared for a route: class-based or function-based view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Class,
    #[default]
    Function,
}

/// One route as declared in the TOML table.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// URL pattern with placeholders, e.g. `/api/users/<int:pk>/`.
    pub pattern: String,
    /// View name: class name or function name.
    pub view: String,
    /// Optional module path qualifying the view.
    #[serde(default)]
    pub module: Option<String>,
    /// Class or function handler; defaults to function.
    #[serde(default)]
    pub kind: ViewKind,
}

#[derive(Debug, Deserialize)]
struct RouteTableFile {
    #[serde(default)]
    routes: Vec<Route>,
}

/// Ordered route table with compiled patterns; first declared match wins.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<(Route, CompiledPattern)>,
}

impl RouteTable {
    /// Loads and compiles a TOML route table.
    ///
    /// A malformed template fails the whole load, naming the offending route.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read route table: {}", path.display()))?;
        let file: RouteTableFile = toml::from_str(&data)
            .with_context(|| format!("parse route table TOML: {}", path.display()))?;
        let table = Self::from_routes(file.routes)?;
        tracing::info!(
            "loaded route table with {} routes from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Compiles an in-memory list of routes (used by tests and embedders).
    pub fn from_routes(routes: Vec<Route>) -> Result<Self> {
        let mut entries = Vec::with_capacity(routes.len());
        for route in routes {
            let compiled = CompiledPattern::compile(&route.pattern)
                .with_context(|| format!("route `{}` (view {})", route.pattern, route.view))?;
            entries.push((route, compiled));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared routes in table order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().map(|(route, _)| route)
    }
}

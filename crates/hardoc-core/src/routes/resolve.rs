//! Resolve a concrete request path against the route table.

use std::collections::BTreeMap;
use thiserror::Error;

use super::pattern::display_template;
use super::{Route, RouteTable, ViewKind};

/// No route in the table matches the request path.
///
/// A distinct type so callers can tell "unknown endpoint" apart from I/O or
/// parse failures and decide whether to skip the request or abort the run.
#[derive(Debug, Error)]
#[error("no route matches path `{path}`")]
pub struct ViewNotFound {
    pub path: String,
}

/// The handling view, decided once at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewHandler {
    Class {
        name: String,
        module: Option<String>,
    },
    Function {
        name: String,
        module: Option<String>,
    },
}

impl ViewHandler {
    fn from_route(route: &Route) -> Self {
        match route.kind {
            ViewKind::Class => ViewHandler::Class {
                name: route.view.clone(),
                module: route.module.clone(),
            },
            ViewKind::Function => ViewHandler::Function {
                name: route.view.clone(),
                module: route.module.clone(),
            },
        }
    }

    /// View identity for headings: `UserDetailView` / `list_users()`,
    /// module-qualified when requested and the route declares a module.
    pub fn label(&self, include_module: bool) -> String {
        let (name, module, suffix) = match self {
            ViewHandler::Class { name, module } => (name, module, ""),
            ViewHandler::Function { name, module } => (name, module, "()"),
        };
        match module {
            Some(module) if include_module => format!("{module}.{name}{suffix}"),
            _ => format!("{name}{suffix}"),
        }
    }
}

/// Successful resolution: handler, display template, captured path parameters.
#[derive(Debug, Clone)]
pub struct ResolverMatch<'a> {
    pub route: &'a Route,
    pub handler: ViewHandler,
    /// Matched route in display form, e.g. `/api/users/{pk}/`.
    pub route_template: String,
    /// Captured path parameters, name → raw value.
    pub path_params: BTreeMap<String, String>,
}

impl RouteTable {
    /// Matches `path` (no query string) against the table in declaration
    /// order; first match wins.
    pub fn resolve(&self, path: &str) -> Result<ResolverMatch<'_>, ViewNotFound> {
        for (route, compiled) in &self.entries {
            if let Some(params) = compiled.matches(path) {
                tracing::debug!("resolved {} -> {}", path, route.view);
                return Ok(ResolverMatch {
                    route,
                    handler: ViewHandler::from_route(route),
                    route_template: display_template(&route.pattern),
                    path_params: params.into_iter().collect(),
                });
            }
        }
        Err(ViewNotFound {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_routes(vec![
            Route {
                pattern: "/api/users/".to_string(),
                view: "list_users".to_string(),
                module: Some("users.views".to_string()),
                kind: ViewKind::Function,
            },
            Route {
                pattern: "/api/users/<int:pk>/".to_string(),
                view: "UserDetailView".to_string(),
                module: Some("users.views".to_string()),
                kind: ViewKind::Class,
            },
            Route {
                pattern: "/api/users/<str:pk>/".to_string(),
                view: "user_fallback".to_string(),
                module: None,
                kind: ViewKind::Function,
            },
        ])
        .unwrap()
    }

    #[test]
    fn resolve_returns_view_and_params() {
        let table = table();
        let m = table.resolve("/api/users/42/").unwrap();
        assert_eq!(m.route.view, "UserDetailView");
        assert_eq!(m.route_template, "/api/users/{pk}/");
        assert_eq!(m.path_params.get("pk").map(String::as_str), Some("42"));
    }

    #[test]
    fn resolve_first_declared_match_wins() {
        let table = table();
        // "abc" fails the int route, falls through to the str route.
        let m = table.resolve("/api/users/abc/").unwrap();
        assert_eq!(m.route.view, "user_fallback");
    }

    #[test]
    fn resolve_unknown_path_is_view_not_found() {
        let table = table();
        let err = table.resolve("/api/orders/1/").unwrap_err();
        assert_eq!(err.path, "/api/orders/1/");
        assert!(err.to_string().contains("/api/orders/1/"));
    }

    #[test]
    fn resolve_empty_table_is_view_not_found() {
        let table = RouteTable::from_routes(Vec::new()).unwrap();
        assert!(table.resolve("/anything").is_err());
    }

    #[test]
    fn handler_labels() {
        let table = table();
        let class = table.resolve("/api/users/42/").unwrap().handler;
        assert_eq!(class.label(false), "UserDetailView");
        assert_eq!(class.label(true), "users.views.UserDetailView");

        let func = table.resolve("/api/users/").unwrap().handler;
        assert_eq!(func.label(false), "list_users()");
        assert_eq!(func.label(true), "users.views.list_users()");
    }

    #[test]
    fn handler_label_without_module_ignores_include_module() {
        let table = table();
        let handler = table.resolve("/api/users/abc/").unwrap().handler;
        assert_eq!(handler.label(true), "user_fallback()");
    }
}

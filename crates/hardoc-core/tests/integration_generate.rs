//! End-to-end: HAR capture + route table files in, Markdown document out.

use hardoc_core::har;
use hardoc_core::markdown::{render_capture, RenderOptions};
use hardoc_core::routes::RouteTable;
use std::fs;
use tempfile::TempDir;

const ROUTES_TOML: &str = r#"
[[routes]]
pattern = "/api/users/"
view = "list_users"
module = "users.views"

[[routes]]
pattern = "/api/users/<int:pk>/"
view = "UserDetailView"
module = "users.views"
kind = "class"

[[routes]]
pattern = "/api/posts/<slug:title>/"
view = "PostDetailView"
kind = "class"
"#;

const CAPTURE_HAR: &str = r#"{
    "log": {
        "version": "1.2",
        "entries": [
            {
                "request": {
                    "method": "GET",
                    "url": "https://app.example.com/api/users/?page=1&size=20",
                    "queryString": [
                        { "name": "page", "value": "1" },
                        { "name": "size", "value": "20" }
                    ]
                }
            },
            {
                "request": {
                    "method": "POST",
                    "url": "https://app.example.com/api/users/?type=personal",
                    "queryString": [ { "name": "type", "value": "personal" } ]
                }
            },
            {
                "request": {
                    "method": "GET",
                    "url": "https://app.example.com/api/users/42/"
                }
            },
            {
                "request": {
                    "method": "DELETE",
                    "url": "https://app.example.com/api/posts/hello-world/"
                }
            }
        ]
    }
}"#;

struct Fixture {
    _dir: TempDir,
    table: RouteTable,
    documents: Vec<hardoc_core::document::Document>,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let routes_path = dir.path().join("routes.toml");
    let har_path = dir.path().join("capture.har");
    fs::write(&routes_path, ROUTES_TOML).unwrap();
    fs::write(&har_path, CAPTURE_HAR).unwrap();

    let table = RouteTable::load(&routes_path).unwrap();
    let documents = har::extract_documents(&har_path).unwrap();
    Fixture {
        _dir: dir,
        table,
        documents,
    }
}

#[test]
fn generate_full_capture() {
    let f = fixture();
    let rendered = render_capture(
        &f.documents,
        &f.table,
        &RenderOptions::default(),
        false,
    )
    .unwrap();

    let expected = "\
### list_users() GET `/api/users/?page={page}&size={size}`

Query parameters:
- `page`: `1`
- `size`: `20`

### list_users() POST `/api/users/?type=personal`

Query parameters:
- `type`: `personal`

### UserDetailView GET `/api/users/42/`

### PostDetailView DELETE `/api/posts/hello-world/`";
    assert_eq!(rendered, expected);
}

#[test]
fn generate_with_module_qualified_views() {
    let f = fixture();
    let options = RenderOptions {
        include_view_module: true,
        ..RenderOptions::default()
    };
    let rendered = render_capture(&f.documents, &f.table, &options, false).unwrap();
    assert!(rendered.contains("### users.views.list_users() GET"));
    assert!(rendered.contains("### users.views.UserDetailView GET"));
    // No module declared for PostDetailView; name stays bare.
    assert!(rendered.contains("### PostDetailView DELETE"));
}

#[test]
fn generate_unresolved_aborts_or_skips() {
    let f = fixture();
    let mut documents = f.documents.clone();
    documents.push(hardoc_core::document::Document {
        request_url: "https://app.example.com/api/unknown/".to_string(),
        request_path: "/api/unknown/".to_string(),
        request_method: http::Method::GET,
        request_query_string: Vec::new(),
    });

    let err = render_capture(&documents, &f.table, &RenderOptions::default(), false).unwrap_err();
    assert!(err.to_string().contains("/api/unknown/"));

    let rendered =
        render_capture(&documents, &f.table, &RenderOptions::default(), true).unwrap();
    assert!(!rendered.contains("/api/unknown/"));
    assert!(rendered.contains("### PostDetailView DELETE"));
}

#[test]
fn resolution_matches_compiled_pattern_directly() {
    let f = fixture();
    let m = f.table.resolve("/api/users/42/").unwrap();
    assert_eq!(m.handler.label(false), "UserDetailView");
    assert_eq!(m.route_template, "/api/users/{pk}/");
    assert_eq!(m.path_params.get("pk").map(String::as_str), Some("42"));
}

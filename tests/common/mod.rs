//! Shared helpers for the integration test binaries.
//!
//! Tests drive the real code paths: the typed content client against a
//! wiremock server, or the full router through tower::ServiceExt. Helpers
//! here build configurations pointed at the mock server, JSON payloads
//! shaped like the content API's envelopes, and requests against the app.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lectern::config::{AppConfig, ContentApiConfig};
use lectern::content::ContentClient;
use lectern::routes::create_router;
use lectern::state::AppState;
use lectern::templates::init_templates;

/// Content API settings pointed at `base_url`, with the bearer token the
/// category mock expects and a short timeout so dead-endpoint tests fail fast.
pub fn content_config(base_url: &str) -> ContentApiConfig {
    ContentApiConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        bearer_token: Some("test-token".to_string()),
        request_timeout_seconds: 2,
        asset_base_url: None,
    }
}

/// Content client pointed at `base_url`.
pub fn client_for(base_url: &str) -> ContentClient {
    ContentClient::new(&content_config(base_url)).expect("client should build")
}

/// Full application router wired to a content API at `base_url`.
///
/// Mirrors the assembly in main.rs (templates, client, state, router) so the
/// tests exercise the same stack production uses.
pub fn build_test_app(base_url: &str) -> Router {
    let config = AppConfig {
        content: content_config(base_url),
        ..AppConfig::default()
    };
    let tera = init_templates().expect("templates should load");
    let content = ContentClient::new(&config.content).expect("client should build");
    create_router(AppState::new(config, tera, content))
}

/// GET `uri` against the app without binding a socket.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// POST a urlencoded form to `uri`, optionally carrying a Referer.
pub async fn post_form(app: Router, uri: &str, body: &str, referer: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(referer) = referer {
        builder = builder.header(header::REFERER, referer);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

/// A live article payload in the listing wire shape.
pub fn article_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": format!("<p>{} in depth.</p>", title),
        "author": "Test Desk",
        "categoryId": 1,
        "subCategoryId": 101,
        "blogsCategory": { "name": "History" },
        "blogsSubCategory": { "name": "Ancient History" },
        "tags": [ { "tag": { "name": "notes" } } ],
        "minuteRead": 4,
        "setPopular": 0,
        "is_active": 1,
        "images": [],
        "createdAt": "2026-02-10T06:00:00Z"
    })
}

/// An article listing envelope holding `articles` as its only page.
pub fn articles_page(articles: Vec<Value>) -> Value {
    let count = articles.len();
    json!({
        "responseResult": articles,
        "totalCount": count,
        "totalPages": 1,
        "perPage": 10
    })
}

/// A live subcategory payload in the wire shape.
pub fn subcategory_json(id: u64, category_id: u64, name: &str) -> Value {
    json!({ "id": id, "name": name, "categoryId": category_id, "is_active": 1 })
}

/// Mount a 200 JSON response for GET `route`.
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount the listing shell endpoints (banners, menu buttons, categories) so
/// home page tests only spell out the endpoints they are about.
pub async fn mount_shell(server: &MockServer) {
    mount_json(server, "/blogs/banner", json!({ "blogsBanners": [] })).await;
    mount_json(server, "/blogs/menu-buttons", json!({ "blogsMenuButtons": [] })).await;
    mount_json(
        server,
        "/blogs/category",
        json!({
            "blogsCategories": [
                { "id": 1, "name": "History", "is_active": 1 },
                { "id": 3, "name": "Polity", "is_active": 1 }
            ]
        }),
    )
    .await;
}

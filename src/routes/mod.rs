//! HTTP route handlers for the site.
//!
//! Routes are organized by page, with per-route Cache-Control headers.
//! Stable content (article detail, coaching centers) uses longer cache
//! durations, while the listing page uses shorter ones. Form posts are
//! uncached.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod article;
pub mod centers;
pub mod enquiry;
pub mod home;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use http::StatusCode;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    CACHE_CONTROL_ARTICLE, CACHE_CONTROL_CENTERS, CACHE_CONTROL_HOME, CACHE_CONTROL_STATIC,
    STATIC_DIR,
};
use crate::error::error_page;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Prefix relative media paths with the asset origin. Absolute URLs pass
/// through untouched. The content API stores uploads as paths relative to
/// its own origin.
pub fn absolute_asset_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}

/// Liveness probe handler.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for paths no route matched.
async fn not_found() -> axum::response::Response {
    error_page(StatusCode::NOT_FOUND, "Page not found")
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Listing page - short cache, new articles appear regularly
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Article detail - longer cache, content rarely changes after publication
    let article_routes = Router::new()
        .route("/article/{id}", get(article::view))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_ARTICLE),
        ));

    // Coaching center directory - essentially static content
    let center_routes = Router::new()
        .route("/centers", get(centers::list))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_CENTERS),
        ));

    // Form posts - no caching (stateful)
    let form_routes = Router::new()
        .route("/enquiry", post(enquiry::submit))
        .route("/toasts/{id}/dismiss", post(enquiry::dismiss_toast));

    // Static files - long cache with immutable hint
    let static_routes = Router::new()
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health));

    Router::new()
        .merge(home_routes)
        .merge(article_routes)
        .merge(center_routes)
        .merge(form_routes)
        .merge(health_routes)
        .merge(static_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_pass_through() {
        assert_eq!(
            absolute_asset_url("https://cdn.example.com", "https://elsewhere.com/a.jpg"),
            "https://elsewhere.com/a.jpg"
        );
    }

    #[test]
    fn test_relative_paths_are_joined_without_double_slashes() {
        assert_eq!(
            absolute_asset_url("https://cdn.example.com/", "/uploads/a.jpg"),
            "https://cdn.example.com/uploads/a.jpg"
        );
        assert_eq!(
            absolute_asset_url("https://cdn.example.com", "uploads/a.jpg"),
            "https://cdn.example.com/uploads/a.jpg"
        );
    }
}

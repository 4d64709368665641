//! Handler for the blog listing page.
//!
//! Renders the page shell (banners, menu buttons, category tabs) alongside
//! the discovery panel. The panel is rebuilt per request and driven through
//! its transitions from the query string, so the URL fully determines the
//! listing state.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use super::absolute_asset_url;
use crate::discovery::{DiscoveryPanel, Layout};
use crate::error::AppError;
use crate::state::AppState;

/// Listing state carried in the query string.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub category: Option<u64>,
    pub subcategory: Option<u64>,
    pub q: Option<String>,
    pub layout: Option<Layout>,
}

/// Replay the query string onto a fresh panel, in transition order.
async fn drive_panel(panel: &DiscoveryPanel, params: &ListingParams) {
    panel.select_category(params.category).await;
    if params.subcategory.is_some() {
        panel.select_subcategory(params.subcategory).await;
    }
    if let Some(q) = &params.q {
        panel.set_search_term(q).await;
    }
    if let Some(layout) = params.layout {
        panel.set_layout(layout).await;
    }
}

/// Query string preserving the current filters and search, without the
/// layout. Templates append a layout to build the toggle links.
fn listing_query(params: &ListingParams) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(category) = params.category {
        parts.push(format!("category={}", category));
    }
    if let Some(subcategory) = params.subcategory {
        parts.push(format!("subcategory={}", subcategory));
    }
    if let Some(q) = &params.q {
        if !q.is_empty() {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }
    }
    parts.join("&")
}

/// Query string preserving the search term and layout, without the filters.
/// Category and subcategory links append it so changing a filter keeps both.
fn search_layout_query(params: &ListingParams) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(q) = &params.q {
        if !q.is_empty() {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }
    }
    if params.layout == Some(Layout::List) {
        parts.push("layout=list".to_string());
    }
    parts.join("&")
}

/// Listing page handler.
#[instrument(
    name = "home::index",
    skip(state, params),
    fields(category = ?params.category, subcategory = ?params.subcategory)
)]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Html<String>, AppError> {
    let panel = DiscoveryPanel::new(state.content.clone(), &state.config.ui.section_label);

    // Shell resources and panel fetches share the same await window
    let (banners, menu_buttons, categories, _) = tokio::join!(
        state.content.banners(),
        state.content.menu_buttons(),
        state.content.categories(),
        drive_panel(&panel, &params),
    );

    let asset_base = state.config.content.asset_base();
    let banner_views: Vec<serde_json::Value> = banners
        .inner()
        .iter()
        .map(|banner| {
            serde_json::json!({
                "id": banner.id,
                "title": banner.title,
                "image_url": absolute_asset_url(&asset_base, &banner.image_url),
                "link_url": banner.link_url,
            })
        })
        .collect();

    let panel_state = panel.snapshot().await;
    let articles = panel_state.visible_articles();
    let toasts = state.toasts.active().await;

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("banners", &banner_views);
    context.insert("banners_degraded", &banners.is_fallback());
    context.insert("menu_buttons", menu_buttons.inner());
    context.insert("categories", categories.inner());
    context.insert("categories_degraded", &categories.is_fallback());
    context.insert("panel", &panel_state);
    context.insert("articles", &articles);
    context.insert("listing_query", &listing_query(&params));
    context.insert("search_layout_query", &search_layout_query(&params));
    context.insert("toasts", &toasts);

    let html = state.tera.render("home.html", &context)?;
    Ok(Html(html))
}

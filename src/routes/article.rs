//! Handler for viewing a single article by id.
//!
//! The only page with a hard error path: an unparseable id or a missing
//! article renders an error page instead of degrading to fallback data.

use axum::{
    extract::{Path, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use super::absolute_asset_url;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ViewPath {
    pub id: String,
}

/// Fetches and displays a single article.
#[instrument(name = "article::view", skip(state, path), fields(id = %path.id))]
pub async fn view(
    State(state): State<AppState>,
    Path(path): Path<ViewPath>,
) -> Result<Html<String>, AppError> {
    // The id must parse before any fetch is issued
    let id: u64 = path
        .id
        .parse()
        .map_err(|_| AppError::InvalidArticleId(path.id.clone()))?;

    let article = state.content.article(id).await?;

    let asset_base = state.config.content.asset_base();
    let images: Vec<String> = article
        .images
        .iter()
        .map(|image| absolute_asset_url(&asset_base, &image.url))
        .collect();

    let toasts = state.toasts.active().await;

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("article", &article);
    context.insert("images", &images);
    context.insert("toasts", &toasts);

    let html = state.tera.render("article.html", &context)?;
    Ok(Html(html))
}

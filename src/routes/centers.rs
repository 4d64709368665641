//! Coaching center directory page.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Renders the coaching center directory.
#[instrument(name = "centers::list", skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let centers = state.content.coaching_centers().await;
    let toasts = state.toasts.active().await;

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("centers", centers.inner());
    context.insert("centers_degraded", &centers.is_fallback());
    context.insert("toasts", &toasts);

    let html = state.tera.render("centers.html", &context)?;
    Ok(Html(html))
}

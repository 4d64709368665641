//! Handlers for enquiry submission and toast dismissal.
//!
//! Both are plain form posts that report their outcome through the toast
//! hub and bounce back to the page the form was on.

use axum::{
    extract::{Path, State},
    http::{header::REFERER, HeaderMap, Uri},
    response::Redirect,
    Form,
};
use tracing::instrument;
use uuid::Uuid;

use crate::content::{ContentError, EnquiryForm};
use crate::notify::ToastKind;
use crate::state::AppState;

const ENQUIRY_FALLBACK_THANKS: &str = "Thank you for your enquiry. We will get back to you shortly.";
const ENQUIRY_FALLBACK_FAILURE: &str = "Could not submit your enquiry. Please try again later.";

/// Handles an enquiry form post.
///
/// Validation failures and rejections surface their own message; transport
/// trouble gets a generic one so upstream details stay out of the page.
#[instrument(name = "enquiry::submit", skip(state, headers, form))]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<EnquiryForm>,
) -> Redirect {
    match state.content.submit_enquiry(&form).await {
        Ok(receipt) => {
            let message = if receipt.message.is_empty() {
                ENQUIRY_FALLBACK_THANKS.to_string()
            } else {
                receipt.message
            };
            state.toasts.show(ToastKind::Success, message).await;
        }
        Err(err) => {
            let message = match &err {
                ContentError::InvalidField { .. } | ContentError::EnquiryRejected(_) => {
                    err.to_string()
                }
                _ => {
                    tracing::warn!(error = %err, "Enquiry submission failed");
                    ENQUIRY_FALLBACK_FAILURE.to_string()
                }
            };
            state.toasts.show(ToastKind::Error, message).await;
        }
    }

    Redirect::to(&back_path(&headers))
}

/// Dismisses one toast. Unknown or already-dismissed ids are a no-op.
#[instrument(name = "enquiry::dismiss_toast", skip(state, headers))]
pub async fn dismiss_toast(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Redirect {
    state.toasts.dismiss(id).await;
    Redirect::to(&back_path(&headers))
}

/// Path of the page the form was posted from, falling back to the listing
/// page. Only the path and query are kept, never the referer's host.
fn back_path(headers: &HeaderMap) -> String {
    headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| referer.parse::<Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_string()))
        .unwrap_or_else(|| "/".to_string())
}

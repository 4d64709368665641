use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::content::ContentError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Content API error: {0}")]
    Content(#[from] ContentError),

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Invalid article id: {0}")]
    InvalidArticleId(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidArticleId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("'{}' is not a valid article id", raw),
            ),
            AppError::Content(ContentError::ArticleNotFound { id }) => {
                (StatusCode::NOT_FOUND, format!("Article {} not found", id))
            }
            AppError::Content(_) => {
                tracing::error!(error = %self, "Content service failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "Content service unavailable".to_string(),
                )
            }
            AppError::Template(_) => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        error_page(status, &message)
    }
}

/// Render the minimal error page. Does not go through Tera; rendering
/// failures themselves land here.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let body = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
    <link rel="stylesheet" href="/static/css/site.css">
</head>
<body>
    <div class="container">
        <div class="error-page">
            <h1>Error {}</h1>
            <p>{}</p>
            <a href="/">Return to homepage</a>
        </div>
    </div>
</body>
</html>"#,
        status.as_u16(),
        status.as_u16(),
        message
    );

    (status, Html(body)).into_response()
}

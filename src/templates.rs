use chrono::{DateTime, Utc};
use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::content::plain_excerpt;
use crate::error::AppError;

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::new(TEMPLATE_GLOB)?;

    // Add custom filters
    tera.register_filter("format_date", format_date_filter);
    tera.register_filter("embed_url", embed_url_filter);
    tera.register_filter("excerpt", excerpt_filter);

    Ok(tera)
}

/// Format an RFC 3339 timestamp as a short human date (e.g., "12 Aug 2026")
fn format_date_filter(
    value: &tera::Value,
    _args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let date_str = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("format_date filter expects a string"))?;

    match DateTime::parse_from_rfc3339(date_str) {
        Ok(date) => {
            let formatted = date.with_timezone(&Utc).format("%-d %b %Y").to_string();
            Ok(tera::Value::String(formatted))
        }
        Err(_) => {
            // If parsing fails, return the original string
            Ok(tera::Value::String(date_str.to_string()))
        }
    }
}

/// Rewrite a YouTube watch or share link into its embeddable player URL.
/// Links that are not recognizable YouTube URLs pass through unchanged.
fn embed_url_filter(
    value: &tera::Value,
    _args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let link = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("embed_url filter expects a string"))?;

    let rewritten = youtube_embed_url(link).unwrap_or_else(|| link.to_string());
    Ok(tera::Value::String(rewritten))
}

/// Strip markup and truncate to the excerpt length, for meta descriptions
fn excerpt_filter(
    value: &tera::Value,
    _args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("excerpt filter expects a string"))?;

    Ok(tera::Value::String(plain_excerpt(s)))
}

/// Derive the embed URL for a YouTube link, handling the watch, short, and
/// already-embedded forms. Returns None for anything else.
fn youtube_embed_url(link: &str) -> Option<String> {
    let trimmed = link.trim();
    if trimmed.contains("/embed/") {
        return Some(trimmed.to_string());
    }

    if let Some(rest) = trimmed.split("watch?v=").nth(1) {
        let id = rest.split(['&', '#']).next().unwrap_or(rest);
        if !id.is_empty() {
            return Some(format!("https://www.youtube.com/embed/{}", id));
        }
    }

    if let Some(rest) = trimmed.split("youtu.be/").nth(1) {
        let id = rest.split(['?', '&', '#']).next().unwrap_or(rest);
        if !id.is_empty() {
            return Some(format!("https://www.youtube.com/embed/{}", id));
        }
    }

    None
}

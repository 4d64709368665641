//! View-model adapter converting raw articles into display-ready cards.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use super::Article;
use crate::config::{EXCERPT_ELLIPSIS, EXCERPT_MAX_CHARS};

static MARKUP_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Display-ready article record for listing pages.
///
/// Derived from [`Article`] on every fetch and never persisted. Identifiers
/// are stringified for the templates; tags flatten to plain names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    /// Tag-stripped content, capped at [`EXCERPT_MAX_CHARS`] characters
    pub excerpt: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    /// Reading time in minutes, absent when the editor never set one
    pub minute_read: Option<u32>,
    pub popular: bool,
    pub category_id: String,
    pub sub_category_id: String,
    /// Section label from the configured mapping rule
    pub section: String,
    /// Listing payloads carry no card image field; stays empty
    pub image_url: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCard {
    /// Convert a raw article into its display form.
    ///
    /// Pure projection with no I/O. `section` comes from the configured
    /// mapping rule rather than the source data.
    pub fn from_raw(article: &Article, section: &str) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.clone(),
            excerpt: plain_excerpt(&article.content),
            author: article.author.clone(),
            tags: article.tags.iter().map(|t| t.tag.name.clone()).collect(),
            minute_read: article.minute_read,
            popular: article.set_popular == 1,
            category_id: article
                .category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            sub_category_id: article
                .sub_category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            section: section.to_string(),
            image_url: String::new(),
            published_at: article.created_at,
        }
    }
}

/// Strip markup tags from an HTML blob and cap the result for card display.
///
/// Tags are removed by pattern substitution, then the first
/// [`EXCERPT_MAX_CHARS`] characters are kept with an ellipsis marker appended
/// when the stripped text was longer. Character counts, not bytes, so
/// multibyte content never splits.
pub fn plain_excerpt(html: &str) -> String {
    let stripped = MARKUP_TAG_RE.replace_all(html, "");
    let mut excerpt: String = stripped.chars().take(EXCERPT_MAX_CHARS).collect();
    if stripped.chars().count() > EXCERPT_MAX_CHARS {
        excerpt.push_str(EXCERPT_ELLIPSIS);
    }
    excerpt
}

/// Case-insensitive search over a card's visible text fields.
///
/// An empty term matches everything. A non-empty term matches when it occurs
/// in the title, excerpt, author, or any tag. Linear scan; listings are
/// bounded by the API page size.
pub fn matches_search(card: &ArticleCard, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    card.title.to_lowercase().contains(&needle)
        || card.excerpt.to_lowercase().contains(&needle)
        || card
            .author
            .as_deref()
            .is_some_and(|author| author.to_lowercase().contains(&needle))
        || card.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

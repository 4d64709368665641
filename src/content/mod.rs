//! Content API module providing access to the remote blog service.
//!
//! This module contains the data types mirrored from the content API's JSON
//! payloads, the tagged [`Fetched`] result that listing fetches come back in,
//! and the typed error for the operations that propagate failure.
//!
//! Key re-exports:
//! - [`ContentClient`] - typed access to every content API resource
//! - [`ArticleCard`] - display-ready article record for listing pages

mod card;
mod client;
mod enquiry;
pub mod fallback;

pub use card::{matches_search, plain_excerpt, ArticleCard};
pub use client::ContentClient;
pub use enquiry::{EnquiryForm, EnquiryReceipt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker value the API uses on live records; anything else is hidden
pub const ACTIVE_FLAG: u8 = 1;

/// Homepage hero banner
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Banner {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "linkUrl", default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub is_active: u8,
}

/// Quick-navigation button shown above the article listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuButton {
    pub id: u64,
    pub label: String,
    #[serde(rename = "linkUrl", default)]
    pub link_url: Option<String>,
    #[serde(rename = "displayOrder", default)]
    pub display_order: u32,
    #[serde(default)]
    pub is_active: u8,
}

/// Exam-subject category grouping articles
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    /// Nested subcategories when the API inlines them; the dedicated
    /// subcategory resource is the usual source
    #[serde(rename = "subCategories", default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub is_active: u8,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Subcategory {
    pub id: u64,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: u64,
    #[serde(default)]
    pub is_active: u8,
}

/// Raw article as served by the content API.
///
/// The wire format mixes camelCase and snake_case field names; renames below
/// match the payload, not a convention.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    /// Server-supplied HTML blob
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<u64>,
    #[serde(rename = "subCategoryId", default)]
    pub sub_category_id: Option<u64>,
    /// Denormalized owning-category name
    #[serde(rename = "blogsCategory", default)]
    pub blogs_category: Option<NameRef>,
    #[serde(rename = "blogsSubCategory", default)]
    pub blogs_sub_category: Option<NameRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    /// Estimated reading time in minutes
    #[serde(rename = "minuteRead", default)]
    pub minute_read: Option<u32>,
    /// 1 marks editor-picked popular articles
    #[serde(rename = "setPopular", default)]
    pub set_popular: u8,
    #[serde(default)]
    pub is_active: u8,
    #[serde(default)]
    pub images: Vec<ArticleImage>,
    #[serde(rename = "youtubeVideoLink", default)]
    pub youtube_video_link: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Denormalized display-name object nested inside article payloads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NameRef {
    pub name: String,
}

/// Tag reference; the API nests the tag record one level down
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagRef {
    pub tag: NameRef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleImage {
    pub id: u64,
    pub url: String,
}

/// Coaching center contact record, displayed as-is
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoachingCenter {
    pub id: u64,
    pub city: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "mapUrl", default)]
    pub map_url: Option<String>,
    #[serde(default)]
    pub is_active: u8,
}

/// One page of the article listing with the API's pagination metadata.
///
/// Only the first page is ever requested; no pagination controls consume the
/// counts, they are decoded because the envelope carries them.
#[derive(Debug, Clone, Default)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total_count: u64,
    pub total_pages: u32,
    pub per_page: u32,
}

/// Result of a listing fetch.
///
/// Listing resources degrade instead of failing: on transport or upstream
/// errors the static fallback value is substituted and the failure logged.
/// The variants keep "legitimately empty" distinguishable from "substituted
/// after a failure" so callers can surface degradation where they want to.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Data decoded from a live API response
    Live(T),
    /// Static fallback substituted after a failed fetch
    Fallback(T),
}

impl<T> Fetched<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Fetched::Fallback(_))
    }

    pub fn inner(&self) -> &T {
        match self {
            Fetched::Live(v) | Fetched::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(v) | Fetched::Fallback(v) => v,
        }
    }
}

/// Error type for the content API operations that propagate failure
/// (single-article fetch and enquiry submission).
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content API returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("article {id} not found")]
    ArticleNotFound { id: u64 },

    #[error("{message}")]
    InvalidField {
        field: &'static str,
        message: &'static str,
    },

    #[error("enquiry rejected: {0}")]
    EnquiryRejected(String),
}

/// Activity flag access for API records.
///
/// Records with any flag value other than [`ACTIVE_FLAG`] never reach view
/// state, including records where the API omitted the flag entirely.
pub trait ActiveRecord {
    fn active_flag(&self) -> u8;

    fn is_live(&self) -> bool {
        self.active_flag() == ACTIVE_FLAG
    }
}

macro_rules! impl_active_record {
    ($($ty:ty),+) => {
        $(impl ActiveRecord for $ty {
            fn active_flag(&self) -> u8 {
                self.is_active
            }
        })+
    };
}

impl_active_record!(Banner, MenuButton, Category, Subcategory, Article, CoachingCenter);

/// Drop records whose activity flag is not set, preserving order.
pub fn retain_active<T: ActiveRecord>(mut items: Vec<T>) -> Vec<T> {
    items.retain(|item| item.is_live());
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_decodes_mixed_case_fields() {
        let raw = r#"{
            "id": 42,
            "title": "Mauryan Administration",
            "content": "<p>Ashoka's edicts...</p>",
            "author": "R. Sharma",
            "categoryId": 3,
            "subCategoryId": 9,
            "blogsCategory": { "name": "History" },
            "blogsSubCategory": { "name": "Ancient India" },
            "tags": [ { "tag": { "name": "mauryas" } }, { "tag": { "name": "polity" } } ],
            "minuteRead": 7,
            "setPopular": 1,
            "is_active": 1,
            "images": [ { "id": 1, "url": "/uploads/edict.png" } ],
            "youtubeVideoLink": "https://www.youtube.com/watch?v=abc123",
            "createdAt": "2024-01-15T08:30:00Z"
        }"#;

        let article: Article = serde_json::from_str(raw).expect("article should decode");
        assert_eq!(article.id, 42);
        assert_eq!(article.category_id, Some(3));
        assert_eq!(article.blogs_category.as_ref().map(|c| c.name.as_str()), Some("History"));
        assert_eq!(article.tags.len(), 2);
        assert_eq!(article.tags[0].tag.name, "mauryas");
        assert_eq!(article.minute_read, Some(7));
        assert_eq!(article.set_popular, 1);
        assert_eq!(article.images[0].url, "/uploads/edict.png");
        assert!(article.created_at.is_some());
    }

    #[test]
    fn test_article_decodes_with_sparse_fields() {
        // Listing payloads often omit media and denormalized names entirely
        let raw = r#"{ "id": 7, "title": "Monsoon Systems", "is_active": 1 }"#;

        let article: Article = serde_json::from_str(raw).expect("sparse article should decode");
        assert_eq!(article.title, "Monsoon Systems");
        assert!(article.content.is_empty());
        assert!(article.tags.is_empty());
        assert!(article.created_at.is_none());
    }

    #[test]
    fn test_retain_active_drops_inactive_and_unflagged() {
        let subs = vec![
            Subcategory { id: 1, name: "Kept".into(), category_id: 1, is_active: 1 },
            Subcategory { id: 2, name: "Inactive".into(), category_id: 1, is_active: 0 },
            Subcategory { id: 3, name: "Odd flag".into(), category_id: 1, is_active: 2 },
            Subcategory { id: 4, name: "Also kept".into(), category_id: 1, is_active: 1 },
        ];

        let live = retain_active(subs);
        let names: Vec<&str> = live.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Kept", "Also kept"]);
    }

    #[test]
    fn test_fetched_tags_provenance() {
        let live: Fetched<Vec<u64>> = Fetched::Live(vec![1]);
        let degraded: Fetched<Vec<u64>> = Fetched::Fallback(vec![]);

        assert!(!live.is_fallback());
        assert!(degraded.is_fallback());
        assert_eq!(live.into_inner(), vec![1]);
        assert!(degraded.inner().is_empty());
    }
}

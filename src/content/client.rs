//! Typed client for the remote content API.
//!
//! One method per resource. Listing resources degrade to static fallbacks
//! and report provenance through [`Fetched`]; single-article fetch and
//! enquiry submission propagate typed errors instead. Every call is a fresh
//! request; there is no response cache and no retry.

use std::time::Duration;

use serde::Deserialize;
use tracing::instrument;

use crate::config::{
    ContentApiConfig, API_PATH_ARTICLES, API_PATH_BANNERS, API_PATH_CATEGORIES,
    API_PATH_COACHING_CENTERS, API_PATH_ENQUIRY, API_PATH_MENU_BUTTONS, API_PATH_SUBCATEGORIES,
};

use super::enquiry::EnquiryReceipt;
use super::{
    fallback, retain_active, ActiveRecord, Article, ArticlePage, Banner, Category,
    CoachingCenter, ContentError, EnquiryForm, Fetched, MenuButton, Subcategory,
};

// Response envelopes. Every resource wraps its records in a resource-named
// field; unknown siblings (status, message) are ignored.

#[derive(Debug, Deserialize)]
struct BannersEnvelope {
    #[serde(rename = "blogsBanners", default)]
    blogs_banners: Vec<Banner>,
}

#[derive(Debug, Deserialize)]
struct MenuButtonsEnvelope {
    #[serde(rename = "blogsMenuButtons", default)]
    blogs_menu_buttons: Vec<MenuButton>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(rename = "blogsCategories", default)]
    blogs_categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct SubcategoriesEnvelope {
    #[serde(rename = "blogsSubCategories", default)]
    blogs_sub_categories: Vec<Subcategory>,
}

#[derive(Debug, Deserialize)]
struct ArticlesEnvelope {
    #[serde(rename = "responseResult", default)]
    response_result: Vec<Article>,
    #[serde(rename = "totalCount", default)]
    total_count: u64,
    #[serde(rename = "totalPages", default)]
    total_pages: u32,
    #[serde(rename = "perPage", default)]
    per_page: u32,
}

#[derive(Debug, Deserialize)]
struct SingleArticleEnvelope {
    #[serde(rename = "blogsArticle")]
    blogs_article: Article,
}

#[derive(Debug, Deserialize)]
struct CentersEnvelope {
    #[serde(rename = "coachingCenters", default)]
    coaching_centers: Vec<CoachingCenter>,
}

/// Typed access to every content API resource.
///
/// Cheap to clone; the inner reqwest client pools connections internally.
#[derive(Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentApiConfig,
}

impl ContentClient {
    /// Build the shared HTTP client with the configured request timeout.
    pub fn new(config: &ContentApiConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Issue a GET and decode the JSON envelope, mapping non-2xx to a typed
    /// error. The bearer token is attached only when `authorized` is set.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        authorized: bool,
    ) -> Result<T, ContentError> {
        let mut request = self.http.get(url);
        if authorized {
            if let Some(token) = &self.config.bearer_token {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Homepage hero banners.
    #[instrument(name = "content.banners", skip(self), fields(fallback = false))]
    pub async fn banners(&self) -> Fetched<Vec<Banner>> {
        let url = self.config.endpoint(API_PATH_BANNERS);
        match self.get_json::<BannersEnvelope>(&url, false).await {
            Ok(envelope) => Fetched::Live(retain_active(envelope.blogs_banners)),
            Err(err) => {
                tracing::Span::current().record("fallback", true);
                tracing::warn!(error = %err, "Banner fetch failed, substituting fallback");
                Fetched::Fallback(fallback::banners())
            }
        }
    }

    /// Quick-navigation menu buttons, ordered by display_order.
    #[instrument(name = "content.menu_buttons", skip(self), fields(fallback = false))]
    pub async fn menu_buttons(&self) -> Fetched<Vec<MenuButton>> {
        let url = self.config.endpoint(API_PATH_MENU_BUTTONS);
        match self.get_json::<MenuButtonsEnvelope>(&url, false).await {
            Ok(envelope) => {
                let mut buttons = retain_active(envelope.blogs_menu_buttons);
                buttons.sort_by_key(|b| b.display_order);
                Fetched::Live(buttons)
            }
            Err(err) => {
                tracing::Span::current().record("fallback", true);
                tracing::warn!(error = %err, "Menu button fetch failed, substituting fallback");
                Fetched::Fallback(fallback::menu_buttons())
            }
        }
    }

    /// Category listing. The one resource the API gates behind a bearer token.
    #[instrument(name = "content.categories", skip(self), fields(fallback = false))]
    pub async fn categories(&self) -> Fetched<Vec<Category>> {
        let url = self.config.endpoint(API_PATH_CATEGORIES);
        match self.get_json::<CategoriesEnvelope>(&url, true).await {
            Ok(envelope) => Fetched::Live(retain_active(envelope.blogs_categories)),
            Err(err) => {
                tracing::Span::current().record("fallback", true);
                tracing::warn!(error = %err, "Category fetch failed, substituting seed tree");
                Fetched::Fallback(fallback::categories())
            }
        }
    }

    /// Subcategories of one category, filtered server-side.
    #[instrument(name = "content.subcategories", skip(self), fields(fallback = false))]
    pub async fn subcategories(&self, category_id: u64) -> Fetched<Vec<Subcategory>> {
        let url = format!(
            "{}?categoryId={}",
            self.config.endpoint(API_PATH_SUBCATEGORIES),
            category_id
        );
        match self.get_json::<SubcategoriesEnvelope>(&url, false).await {
            Ok(envelope) => Fetched::Live(retain_active(envelope.blogs_sub_categories)),
            Err(err) => {
                tracing::Span::current().record("fallback", true);
                tracing::warn!(
                    error = %err,
                    category_id,
                    "Subcategory fetch failed, substituting seed tree"
                );
                Fetched::Fallback(fallback::subcategories(category_id))
            }
        }
    }

    /// First page of the article listing, optionally filtered server-side by
    /// category and subcategory. Both query parameters are always sent, empty
    /// when no filter applies.
    #[instrument(name = "content.articles", skip(self), fields(fallback = false))]
    pub async fn articles(
        &self,
        category_id: Option<u64>,
        sub_category_id: Option<u64>,
    ) -> Fetched<ArticlePage> {
        let url = format!(
            "{}?categoryId={}&subCategoryId={}",
            self.config.endpoint(API_PATH_ARTICLES),
            category_id.map(|id| id.to_string()).unwrap_or_default(),
            sub_category_id.map(|id| id.to_string()).unwrap_or_default(),
        );
        match self.get_json::<ArticlesEnvelope>(&url, false).await {
            Ok(envelope) => Fetched::Live(ArticlePage {
                articles: retain_active(envelope.response_result),
                total_count: envelope.total_count,
                total_pages: envelope.total_pages,
                per_page: envelope.per_page,
            }),
            Err(err) => {
                tracing::Span::current().record("fallback", true);
                tracing::warn!(error = %err, "Article listing fetch failed, substituting empty page");
                Fetched::Fallback(fallback::articles())
            }
        }
    }

    /// Coaching center listing.
    #[instrument(name = "content.coaching_centers", skip(self), fields(fallback = false))]
    pub async fn coaching_centers(&self) -> Fetched<Vec<CoachingCenter>> {
        let url = self.config.endpoint(API_PATH_COACHING_CENTERS);
        match self.get_json::<CentersEnvelope>(&url, false).await {
            Ok(envelope) => Fetched::Live(retain_active(envelope.coaching_centers)),
            Err(err) => {
                tracing::Span::current().record("fallback", true);
                tracing::warn!(error = %err, "Center fetch failed, substituting seed records");
                Fetched::Fallback(fallback::coaching_centers())
            }
        }
    }

    /// Fetch one article by id.
    ///
    /// The one read operation that propagates failure: the detail view needs
    /// "not found" distinguishable from transport trouble. An article whose
    /// activity flag is unset is reported as not found.
    #[instrument(name = "content.article", skip(self))]
    pub async fn article(&self, id: u64) -> Result<Article, ContentError> {
        let url = format!("{}/{}", self.config.endpoint(API_PATH_ARTICLES), id);
        let envelope: SingleArticleEnvelope = match self.get_json(&url, false).await {
            Ok(envelope) => envelope,
            Err(ContentError::UpstreamStatus { status: 404 }) => {
                return Err(ContentError::ArticleNotFound { id });
            }
            Err(err) => return Err(err),
        };

        let article = envelope.blogs_article;
        if !article.is_live() {
            tracing::debug!(id, "Article exists upstream but is not active");
            return Err(ContentError::ArticleNotFound { id });
        }

        Ok(article)
    }

    /// Validate locally, then submit the enquiry.
    ///
    /// Invalid forms never reach the network. A response carrying
    /// success=false is a rejection with the server's message.
    #[instrument(name = "content.enquiry", skip(self, form))]
    pub async fn submit_enquiry(&self, form: &EnquiryForm) -> Result<EnquiryReceipt, ContentError> {
        form.validate()?;

        let url = self.config.endpoint(API_PATH_ENQUIRY);
        let response = self.http.post(&url).json(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let receipt: EnquiryReceipt = response.json().await?;
        if !receipt.success {
            return Err(ContentError::EnquiryRejected(receipt.message));
        }

        tracing::info!("Enquiry submitted");
        Ok(receipt)
    }
}

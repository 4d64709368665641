//! Blog discovery panel.
//!
//! Holds the listing state for one page view: active category and
//! subcategory, search term, layout mode, the fetched subcategory menu and
//! article cards, and loading flags for the two fetch lanes. Category and
//! subcategory changes refetch through [`ContentClient`]; search and layout
//! changes are purely local.
//!
//! Every fetch is stamped by its lane (subcategory menu or article listing)
//! under the same lock that records the selection. A response whose stamp is
//! no longer the lane's latest is dropped instead of committed, so a slow
//! response can never overwrite the state of a newer selection, while a lane
//! the newer selection never touched still lands.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::content::{
    matches_search, ArticleCard, ArticlePage, ContentClient, Fetched, Subcategory,
};

/// Listing arrangement. Purely presentational; switching never refetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Grid,
    List,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Grid
    }
}

/// Snapshot of everything the listing view renders from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PanelState {
    pub search_term: String,
    pub layout: Layout,
    pub selected_category: Option<u64>,
    pub selected_subcategory: Option<u64>,
    pub subcategories: Vec<Subcategory>,
    pub articles: Vec<ArticleCard>,
    /// Upstream total across all pages, shown alongside the first page.
    pub total_count: u64,
    pub loading_subcategories: bool,
    pub loading_articles: bool,
    /// Set when the corresponding list came from fallback data.
    pub subcategories_degraded: bool,
    pub articles_degraded: bool,
}

impl PanelState {
    /// Articles passing the current search term, in fetch order.
    pub fn visible_articles(&self) -> Vec<ArticleCard> {
        self.articles
            .iter()
            .filter(|card| matches_search(card, &self.search_term))
            .cloned()
            .collect()
    }
}

/// Stale-response guard for one fetch lane.
///
/// A selection stamps the lane before its fetch goes out; the resolved fetch
/// may commit only while its stamp is still the lane's latest.
#[derive(Default)]
struct FetchLane(AtomicU64);

impl FetchLane {
    fn stamp(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, stamp: u64) -> bool {
        self.0.load(Ordering::SeqCst) == stamp
    }
}

/// Discovery panel handle. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct DiscoveryPanel {
    client: ContentClient,
    section_label: String,
    state: Arc<RwLock<PanelState>>,
    menu_lane: Arc<FetchLane>,
    article_lane: Arc<FetchLane>,
}

impl DiscoveryPanel {
    pub fn new(client: ContentClient, section_label: impl Into<String>) -> Self {
        Self {
            client,
            section_label: section_label.into(),
            state: Arc::new(RwLock::new(PanelState::default())),
            menu_lane: Arc::new(FetchLane::default()),
            article_lane: Arc::new(FetchLane::default()),
        }
    }

    /// Switch the active category, or clear it.
    ///
    /// Clears the subcategory selection immediately, then refetches the
    /// subcategory menu and the article listing concurrently. Both loading
    /// flags stay up until their fetch settles.
    pub async fn select_category(&self, category_id: Option<u64>) {
        // Stamp order must match selection order; both happen under one lock
        let (menu_stamp, article_stamp) = {
            let mut state = self.state.write().await;
            state.selected_category = category_id;
            state.selected_subcategory = None;
            state.loading_subcategories = true;
            state.loading_articles = true;
            (self.menu_lane.stamp(), self.article_lane.stamp())
        };

        let (subcategories, page) = match category_id {
            Some(id) => {
                tokio::join!(self.client.subcategories(id), self.client.articles(Some(id), None))
            }
            None => (
                Fetched::Live(Vec::new()),
                self.client.articles(None, None).await,
            ),
        };

        let mut state = self.state.write().await;
        if self.menu_lane.is_current(menu_stamp) {
            state.subcategories_degraded = subcategories.is_fallback();
            state.subcategories = subcategories.into_inner();
            state.loading_subcategories = false;
        }
        if self.article_lane.is_current(article_stamp) {
            self.commit_articles(&mut state, page);
        }
    }

    /// Filter by one subcategory of the active category, or clear the
    /// filter. Never touches the category selection or the subcategory menu.
    pub async fn select_subcategory(&self, sub_category_id: Option<u64>) {
        let (article_stamp, category_id) = {
            let mut state = self.state.write().await;
            state.selected_subcategory = sub_category_id;
            state.loading_articles = true;
            (self.article_lane.stamp(), state.selected_category)
        };

        let page = self.client.articles(category_id, sub_category_id).await;

        let mut state = self.state.write().await;
        if self.article_lane.is_current(article_stamp) {
            self.commit_articles(&mut state, page);
        }
    }

    /// Update the search term. Local only; the filtered view is recomputed
    /// on the next [`PanelState::visible_articles`] call.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.write().await.search_term = term.into();
    }

    pub async fn set_layout(&self, layout: Layout) {
        self.state.write().await.layout = layout;
    }

    pub async fn snapshot(&self) -> PanelState {
        self.state.read().await.clone()
    }

    fn commit_articles(&self, state: &mut PanelState, page: Fetched<ArticlePage>) {
        state.articles_degraded = page.is_fallback();
        let page = page.into_inner();
        state.articles = page
            .articles
            .iter()
            .map(|raw| ArticleCard::from_raw(raw, &self.section_label))
            .collect();
        state.total_count = page.total_count;
        state.loading_articles = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, author: Option<&str>, tags: &[&str]) -> ArticleCard {
        ArticleCard {
            id: "1".into(),
            title: title.into(),
            excerpt: String::new(),
            author: author.map(String::from),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            minute_read: None,
            popular: false,
            category_id: String::new(),
            sub_category_id: String::new(),
            section: "prelims".into(),
            image_url: String::new(),
            published_at: None,
        }
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let state = PanelState {
            articles: vec![card("Monsoon systems", None, &[]), card("Mauryan art", None, &[])],
            ..PanelState::default()
        };
        assert_eq!(state.visible_articles().len(), 2);
    }

    #[test]
    fn test_search_scans_title_author_and_tags() {
        let state = PanelState {
            search_term: "polity".into(),
            articles: vec![
                card("Polity primer", None, &[]),
                card("Weekly digest", Some("Polity desk"), &[]),
                card("Quiz", None, &["polity"]),
                card("Geography notes", None, &["maps"]),
            ],
            ..PanelState::default()
        };
        assert_eq!(state.visible_articles().len(), 3);
    }

    #[test]
    fn test_layout_defaults_to_grid() {
        assert_eq!(PanelState::default().layout, Layout::Grid);
    }
}

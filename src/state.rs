//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::content::ContentClient;
use crate::notify::ToastHub;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, Tera template engine, the typed
/// content API client, and the process-wide toast hub.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub content: ContentClient,
    pub toasts: ToastHub,
}

impl AppState {
    /// Creates a new application state from the given configuration, templates, and content client.
    pub fn new(config: AppConfig, tera: Tera, content: ContentClient) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            content,
            toasts: ToastHub::new(),
        }
    }
}

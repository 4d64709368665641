//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache TTLs, content API resource paths, excerpt and toast behavior,
//! logging format, and default paths. `AppConfig` is the root configuration
//! struct containing all settings.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (nginx, CDNs).
// All values are in seconds. Directives used:
// - max-age: How long the response is considered fresh
// - stale-while-revalidate: Serve stale while fetching fresh in background
// - stale-if-error: Serve stale content if origin returns 5xx
//
// References:
// - RFC 9111 (HTTP Caching): https://httpwg.org/specs/rfc9111.html
// - RFC 5861 (stale-* extensions): https://httpwg.org/specs/rfc5861.html

/// Home and listing pages - new articles appear as editors publish
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

/// Article detail pages - published content changes rarely
pub const HTTP_CACHE_ARTICLE_MAX_AGE: u32 = 600;
pub const HTTP_CACHE_ARTICLE_SWR: u32 = 60;

/// Coaching centers page - near-static content
pub const HTTP_CACHE_CENTERS_MAX_AGE: u32 = 3600;
pub const HTTP_CACHE_CENTERS_SWR: u32 = 300;

/// Static assets (CSS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Stale-if-error duration - keep serving pages while the content API is down
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_ARTICLE: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_ARTICLE_MAX_AGE,
    HTTP_CACHE_ARTICLE_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_CENTERS: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_CENTERS_MAX_AGE,
    HTTP_CACHE_CENTERS_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

// =============================================================================
// Content API Resource Paths
// =============================================================================
// Paths are appended to [content] base_url. The API is versioned in the base
// URL itself (e.g. https://admin.example.org/api/v1).

/// Homepage hero banners
pub const API_PATH_BANNERS: &str = "blogs/banner";

/// Quick-navigation menu buttons shown above the listing
pub const API_PATH_MENU_BUTTONS: &str = "blogs/menu-buttons";

/// Category listing (the only resource that requires the bearer token)
pub const API_PATH_CATEGORIES: &str = "blogs/category";

/// Subcategory listing, filtered with ?categoryId=
pub const API_PATH_SUBCATEGORIES: &str = "blogs/sub-category";

/// Article listing and single-article detail (detail appends /{id})
pub const API_PATH_ARTICLES: &str = "blogs/article";

/// Coaching center listing
pub const API_PATH_COACHING_CENTERS: &str = "blogs/coaching-center";

/// Admission enquiry submissions
pub const API_PATH_ENQUIRY: &str = "blogs/enquiry";

// =============================================================================
// Article Card Constants
// =============================================================================

/// Maximum characters for the plain-text excerpt on article cards
pub const EXCERPT_MAX_CHARS: usize = 150;

/// Marker appended when an excerpt was truncated
pub const EXCERPT_ELLIPSIS: &str = "...";

// =============================================================================
// Toast Constants
// =============================================================================

/// Default toast display duration in milliseconds
pub const TOAST_DEFAULT_DURATION_MS: u64 = 5000;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Directory for static files
pub const STATIC_DIR: &str = "static";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "lectern=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Remote content API settings
    #[serde(default)]
    pub content: ContentApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

/// Settings for the remote content API that serves every page's data
#[derive(Debug, Clone, Deserialize)]
pub struct ContentApiConfig {
    /// Base URL of the content API, stored without a trailing slash
    #[serde(default = "ContentApiConfig::default_base_url")]
    pub base_url: String,
    /// Bearer token sent with the category listing request
    pub bearer_token: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "ContentApiConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Origin used to absolutize relative media paths in article payloads.
    /// Derived from base_url when unset.
    pub asset_base_url: Option<String>,
}

impl Default for ContentApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            bearer_token: None,
            request_timeout_seconds: Self::default_request_timeout(),
            asset_base_url: None,
        }
    }
}

impl ContentApiConfig {
    fn default_base_url() -> String {
        "http://localhost:8081/api/v1".to_string()
    }

    fn default_request_timeout() -> u64 {
        15
    }

    /// Full URL for a resource path under the API base
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Origin prefix for relative media paths.
    ///
    /// Explicit `asset_base_url` wins; otherwise the scheme and authority of
    /// `base_url` (the API version path is not part of media URLs).
    pub fn asset_base(&self) -> String {
        if let Some(base) = &self.asset_base_url {
            return base.trim_end_matches('/').to_string();
        }
        origin_of(&self.base_url)
    }
}

/// Extract `scheme://authority` from a URL, dropping any path
fn origin_of(url: &str) -> String {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            match rest.find('/') {
                Some(path_start) => url[..scheme_end + 3 + path_start].to_string(),
                None => url.to_string(),
            }
        }
        None => url.trim_end_matches('/').to_string(),
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Site title shown in the header and page titles
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Strapline shown under the hero heading
    #[serde(default = "UiConfig::default_tagline")]
    pub tagline: String,
    /// Section label stamped on article cards by the view-model adapter
    #[serde(default = "UiConfig::default_section_label")]
    pub section_label: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "UiConfig::default_version")]
    pub version: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            tagline: Self::default_tagline(),
            section_label: Self::default_section_label(),
            version: Self::default_version(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        "Lectern".to_string()
    }

    fn default_tagline() -> String {
        "Notes and analysis for serious exam preparation".to_string()
    }

    fn default_section_label() -> String {
        "prelims".to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&contents)?;

        // Normalize: resource paths are joined with '/'
        config.content.base_url = config.content.base_url.trim_end_matches('/').to_string();

        if config.content.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "content.base_url must not be empty".to_string(),
            ));
        }
        if !config.content.base_url.starts_with("http://")
            && !config.content.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "content.base_url must be an http(s) URL, got '{}'",
                config.content.base_url
            )));
        }
        if config.content.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "content.request_timeout_seconds must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

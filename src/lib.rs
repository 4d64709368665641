//! Server-rendered blog and marketing site backed by a remote content API.
//!
//! The library crate exposes the application's building blocks so the binary
//! and the integration tests share one assembly path: configuration, the
//! typed content client with its fallback data, the discovery panel, the
//! toast hub, and the Axum router.

pub mod config;
pub mod content;
pub mod discovery;
pub mod error;
pub mod middleware;
pub mod notify;
pub mod routes;
pub mod state;
pub mod templates;

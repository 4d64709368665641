//! Transient notification toasts.
//!
//! One process-wide hub holds every live toast. Each toast owns an expiry
//! task; dismissing a toast aborts its task, and a toast expiring dismisses
//! itself through the same path. Dismissal is idempotent, so the racing
//! cases (expiry vs. user dismissal, double dismissal) all collapse to
//! no-ops.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::TOAST_DEFAULT_DURATION_MS;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// One visible notification.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    /// Lifetime the expiry task was scheduled with.
    pub duration_ms: u64,
}

#[derive(Default)]
struct HubState {
    /// Visible toasts, oldest first.
    toasts: Vec<Toast>,
    /// Expiry task per toast id.
    timers: HashMap<Uuid, JoinHandle<()>>,
}

/// Process-wide toast registry.
#[derive(Clone, Default)]
pub struct ToastHub {
    state: Arc<Mutex<HubState>>,
}

impl ToastHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast with the default lifetime.
    pub async fn show(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        self.show_for(
            kind,
            message,
            Duration::from_millis(TOAST_DEFAULT_DURATION_MS),
        )
        .await
    }

    /// Show a toast that dismisses itself after `lifetime`.
    pub async fn show_for(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        lifetime: Duration,
    ) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            duration_ms: lifetime.as_millis() as u64,
        };
        let id = toast.id;

        // The timer is registered under the same lock that publishes the
        // toast, so it cannot fire before the toast is visible.
        let mut state = self.state.lock().await;
        state.toasts.push(toast);

        let hub = self.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            hub.dismiss(id).await;
        });
        state.timers.insert(id, timer);

        id
    }

    /// Remove a toast and cancel its expiry task. Unknown ids are ignored.
    pub async fn dismiss(&self, id: Uuid) {
        let mut state = self.state.lock().await;
        state.toasts.retain(|toast| toast.id != id);
        if let Some(timer) = state.timers.remove(&id) {
            timer.abort();
        }
    }

    /// Snapshot of the visible toasts, oldest first.
    pub async fn active(&self) -> Vec<Toast> {
        self.state.lock().await.toasts.clone()
    }
}

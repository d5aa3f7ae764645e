//! Toast notifications
//!
//! Toasts are kept in a queue and expire after the configured display time.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use shared::render::{render_toast, ViewNode, TOAST_ERROR_CLASS, TOAST_SUCCESS_CLASS};
use uuid::Uuid;

/// Notification kind, drives the toast colour
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn toast_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => TOAST_SUCCESS_CLASS,
            NotificationKind::Error => TOAST_ERROR_CLASS,
        }
    }
}

/// A single toast
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Notification service holding the toast queue
#[derive(Debug, Clone)]
pub struct NotificationService {
    display_for: Duration,
    queue: Vec<Notification>,
}

impl NotificationService {
    /// Create a new NotificationService with the given display time
    pub fn new(display_ms: u64) -> Self {
        Self {
            display_for: Duration::milliseconds(display_ms as i64),
            queue: Vec::new(),
        }
    }

    pub fn success(&mut self, message: &str) -> &Notification {
        self.push(NotificationKind::Success, message, Utc::now())
    }

    pub fn error(&mut self, message: &str) -> &Notification {
        self.push(NotificationKind::Error, message, Utc::now())
    }

    fn push(
        &mut self,
        kind: NotificationKind,
        message: &str,
        now: DateTime<Utc>,
    ) -> &Notification {
        match kind {
            NotificationKind::Success => tracing::info!("Notification: {}", message),
            NotificationKind::Error => tracing::warn!("Notification: {}", message),
        }

        self.prune_expired(now);
        self.queue.push(Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.to_string(),
            created_at: now,
            expires_at: now + self.display_for,
        });
        &self.queue[self.queue.len() - 1]
    }

    /// Notifications still queued; expired ones are dropped on the next push or prune
    pub fn history(&self) -> &[Notification] {
        &self.queue
    }

    /// Notifications still on screen at `now`
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.queue.iter().filter(|n| !n.is_expired(now)).collect()
    }

    /// Drop expired notifications, returning how many were removed
    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.queue.len();
        self.queue.retain(|n| !n.is_expired(now));
        before - self.queue.len()
    }

    /// Toasts currently visible, as view nodes
    pub fn render(&self, now: DateTime<Utc>) -> Vec<ViewNode> {
        self.visible(now)
            .into_iter()
            .map(|n| render_toast(n.kind.toast_class(), &n.message))
            .collect()
    }
}

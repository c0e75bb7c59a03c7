// src/controller/notification.rs
//! Transient notifications with automatic expiry.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_TTL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub ttl_secs: u64,
    /// Time left as of the snapshot returned by `NotificationCenter::active`
    pub remaining_ms: u64,
}

impl Notification {
    pub fn remaining_ms_at(&self, now: DateTime<Utc>) -> u64 {
        (self.expires_at - now).num_milliseconds().max(0) as u64
    }
}

/// Shared list of visible notifications.
///
/// Each pushed notification schedules its own removal on the tokio runtime.
/// A removal that fires after an explicit dismissal does nothing.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    inner: Arc<Mutex<Vec<Notification>>>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Show a notification. Must be called from within a tokio runtime.
    pub fn push(&self, title: &str, message: &str) -> Uuid {
        let created_at = Utc::now();
        let lifetime =
            chrono::Duration::from_std(self.ttl).unwrap_or_else(|_| chrono::Duration::zero());
        let notification = Notification {
            id: Uuid::new_v4(),
            title: title.to_string(),
            message: message.to_string(),
            created_at,
            expires_at: created_at + lifetime,
            ttl_secs: self.ttl.as_secs(),
            remaining_ms: self.ttl.as_millis() as u64,
        };
        let id = notification.id;
        self.lock().push(notification);

        let center = self.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if center.remove(id) {
                debug!("Notification {} expired", id);
            }
        });

        id
    }

    /// Remove a notification ahead of its expiry. Returns false if it is already gone.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let removed = self.remove(id);
        if removed {
            debug!("Notification {} dismissed", id);
        }
        removed
    }

    fn remove(&self, id: Uuid) -> bool {
        let mut notifications = self.lock();
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        notifications.len() != before
    }

    pub fn active(&self) -> Vec<Notification> {
        let now = Utc::now();
        self.lock()
            .iter()
            .map(|n| Notification {
                remaining_ms: n.remaining_ms_at(now),
                ..n.clone()
            })
            .collect()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.lock().iter().any(|n| n.id == id)
    }
}

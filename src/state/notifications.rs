//! Transient toast notifications

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

/// Clock for creation and expiry; tokio's, so timers and toasts agree
fn clock() -> Instant {
    tokio::time::Instant::now().into_std()
}

/// Styling class of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
    /// Wall-clock time shown next to the message
    pub shown_at: DateTime<Local>,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= NOTIFICATION_TTL
    }
}

/// Stack of visible notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        self.push_at(kind, message, clock())
    }

    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        created_at: Instant,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let message = message.into();
        tracing::debug!(%id, kind = kind.as_str(), "{message}");
        self.items.push(Notification {
            id,
            kind,
            message,
            created_at,
            shown_at: Local::now(),
        });
        id
    }

    /// Drop every notification whose display window has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    /// Prune against the current time
    pub fn prune_expired(&mut self) {
        self.prune(clock());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_survives_until_ttl() {
        let start = Instant::now();
        let mut notes = Notifications::default();
        notes.push_at(NotificationKind::Success, "ok", start);

        notes.prune(start + Duration::from_millis(4999));
        assert_eq!(notes.len(), 1);

        notes.prune(start + Duration::from_millis(5000));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_expiry_independent_of_later_notifications() {
        let start = Instant::now();
        let mut notes = Notifications::default();
        notes.push_at(NotificationKind::Error, "first", start);
        let second = notes.push_at(
            NotificationKind::Error,
            "second",
            start + Duration::from_millis(3000),
        );

        notes.prune(start + Duration::from_millis(5000));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.last().map(|n| n.id), Some(second));

        notes.prune(start + Duration::from_millis(8000));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_duplicates_stack() {
        let mut notes = Notifications::default();
        notes.push(NotificationKind::Error, "same");
        notes.push(NotificationKind::Error, "same");
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_kind_class_names() {
        assert_eq!(NotificationKind::Success.as_str(), "success");
        assert_eq!(NotificationKind::Error.as_str(), "error");
    }
}

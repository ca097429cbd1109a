//! Toast notifications shown in the top-right corner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens push notifications after a request settles; `NotificationStack`
//! renders them and dismisses each one when its duration runs out.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::config::DEFAULT_NOTIFICATION_SECS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A notification before it is queued. `NotificationsState::push` assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub duration_secs: u32,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind, title: title.into(), description: description.into(), duration_secs: DEFAULT_NOTIFICATION_SECS }
    }
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<ActiveNotification>,
    next_id: u64,
}

impl NotificationsState {
    /// Queue a notification and return its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ActiveNotification { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    #[cfg(test)]
    pub fn has_kind(&self, kind: NotificationKind) -> bool {
        self.items.iter().any(|item| item.notification.kind == kind)
    }
}

//! Notification drawer state: open flag, body contents, badge count.
//!
//! DESIGN
//! ======
//! The drawer's `open` class and `aria-hidden` attribute are both derived
//! from [`NotificationState::open`], so they cannot drift apart. The body is
//! a closed [`DrawerBody`] enum rather than ad-hoc markup.
//!
//! Results are applied in arrival order with no sequencing: a slow poll that
//! lands after a newer one overwrites it. The badge is cheap to be wrong
//! about for one poll interval.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::{ApiError, NotificationItem, NotificationKind, NotificationsResponse};

/// Badge counts above this render as `"99+"`.
pub const BADGE_OVERFLOW_LIMIT: usize = 99;

/// What the drawer body currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DrawerBody {
    #[default]
    Loading,
    Disabled,
    Empty,
    Items(Vec<NotificationItem>),
    Unavailable,
}

impl DrawerBody {
    pub fn from_payload(payload: NotificationsResponse) -> Self {
        if payload.disabled {
            Self::Disabled
        } else if payload.items.is_empty() {
            Self::Empty
        } else {
            Self::Items(payload.items)
        }
    }

    /// Placeholder text, or `None` when there are cards to render.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading notifications..."),
            Self::Disabled => Some("In-app notifications are turned off in Settings."),
            Self::Empty => Some("No new notifications right now."),
            Self::Unavailable => Some("Could not load notifications."),
            Self::Items(_) => None,
        }
    }
}

/// Icon and CSS modifier for one notification kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindPresentation {
    pub modifier: &'static str,
    pub icon: &'static str,
}

pub fn kind_presentation(kind: NotificationKind) -> KindPresentation {
    match kind {
        NotificationKind::Message => KindPresentation { modifier: "notification-message", icon: "fa-regular fa-comment-dots" },
        NotificationKind::Post => KindPresentation { modifier: "notification-post", icon: "fa-regular fa-image" },
    }
}

/// Unread count carried by a payload. Disabled notifications count as zero
/// whatever `items` holds.
pub fn badge_count(payload: &NotificationsResponse) -> usize {
    if payload.disabled { 0 } else { payload.items.len() }
}

/// Rendered badge: visible text (if any) plus its accessible label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub text: Option<String>,
    pub aria_label: String,
}

pub fn badge_view(count: usize) -> BadgeView {
    match count {
        0 => BadgeView { text: None, aria_label: "No unread notifications".to_owned() },
        1 => BadgeView { text: Some("1".to_owned()), aria_label: "1 unread notification".to_owned() },
        n if n > BADGE_OVERFLOW_LIMIT => BadgeView {
            text: Some(format!("{BADGE_OVERFLOW_LIMIT}+")),
            aria_label: format!("More than {BADGE_OVERFLOW_LIMIT} unread notifications"),
        },
        n => BadgeView { text: Some(n.to_string()), aria_label: format!("{n} unread notifications") },
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub open: bool,
    pub body: DrawerBody,
    pub badge_count: usize,
}

impl NotificationState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// `aria-hidden` value for the drawer and its backdrop.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    pub fn begin_load(&mut self) {
        self.body = DrawerBody::Loading;
    }

    /// Full drawer load finished: update both the body and the badge.
    pub fn apply_list_result(&mut self, result: Result<NotificationsResponse, ApiError>) {
        match result {
            Ok(payload) => {
                self.badge_count = badge_count(&payload);
                self.body = DrawerBody::from_payload(payload);
            }
            Err(_) => {
                self.badge_count = 0;
                self.body = DrawerBody::Unavailable;
            }
        }
    }

    /// Badge poll finished: update the badge only.
    pub fn apply_badge_result(&mut self, result: Result<NotificationsResponse, ApiError>) {
        self.badge_count = result.map_or(0, |payload| badge_count(&payload));
    }

    pub fn badge(&self) -> BadgeView {
        badge_view(self.badge_count)
    }
}

//! Slide-in notification drawer and its backdrop.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once into `<body>` by the notification widget. Open/closed
//! classes and `aria-hidden` on both elements read the same
//! `NotificationState::open` flag.

use leptos::prelude::*;

use crate::net::types::NotificationItem;
use crate::state::notifications::{DrawerBody, NotificationState, kind_presentation};
use crate::util::time_label::format_time_label;

pub const DRAWER_ID: &str = "notificationDrawer";
pub const DRAWER_BODY_ID: &str = "notificationDrawerBody";
pub const BACKDROP_ID: &str = "notificationBackdrop";

/// Drawer + backdrop pair.
#[component]
pub fn NotificationDrawer(state: RwSignal<NotificationState>, on_close: Callback<()>) -> impl IntoView {
    let is_open = move || state.with(|s| s.open);
    let aria_hidden = move || state.with(NotificationState::aria_hidden);

    view! {
        <div
            id=BACKDROP_ID
            class="notification-backdrop"
            class:open=is_open
            aria-hidden=aria_hidden
            on:click=move |_| on_close.run(())
        ></div>
        <aside id=DRAWER_ID class="notification-drawer" class:open=is_open aria-hidden=aria_hidden>
            <div class="notification-drawer-header">
                <h3>"Notifications"</h3>
                <button
                    type="button"
                    class="notification-close-btn"
                    aria-label="Close notifications"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>
            <div class="notification-drawer-body" id=DRAWER_BODY_ID>
                {move || {
                    let body = state.with(|s| s.body.clone());
                    match body {
                        DrawerBody::Items(items) => items.into_iter().map(notification_card).collect_view().into_any(),
                        other => {
                            let text = other.placeholder().unwrap_or_default();
                            view! { <p class="notification-empty">{text}</p> }.into_any()
                        }
                    }
                }}
            </div>
        </aside>
    }
}

fn notification_card(item: NotificationItem) -> impl IntoView {
    let presentation = kind_presentation(item.kind);
    let time_label = format_time_label(&item.created_at);

    view! {
        <article class=format!("notification-item {}", presentation.modifier)>
            <div class="notification-icon">
                <i class=presentation.icon></i>
            </div>
            <div class="notification-copy">
                <p class="notification-title">{item.title}</p>
                <p class="notification-desc">{item.description}</p>
                <p class="notification-time">{time_label}</p>
            </div>
        </article>
    }
}

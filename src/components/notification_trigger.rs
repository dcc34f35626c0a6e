//! Label + unread badge rendered inside the notification trigger.

use leptos::prelude::*;

use crate::state::notifications::NotificationState;

#[component]
pub fn NotificationTriggerContent(state: RwSignal<NotificationState>) -> impl IntoView {
    let badge = Memo::new(move |_| state.with(NotificationState::badge));

    view! {
        <span class="notification-trigger-label">"Notifications"</span>
        <span
            class="notification-badge"
            hidden=move || badge.with(|b| b.text.is_none())
            aria-label=move || badge.with(|b| b.aria_label.clone())
        >
            {move || badge.with(|b| b.text.clone().unwrap_or_default())}
        </span>
    }
}

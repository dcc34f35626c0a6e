//! AI assistant modal: message history, text input, and send control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted lazily into `<body>` the first time the assistant opens. Reads
//! and writes `AssistantState`; the actual request is issued by the
//! assistant widget through `on_send`.

#[cfg(test)]
#[path = "assistant_modal_test.rs"]
mod assistant_modal_test;

use leptos::prelude::*;

use crate::state::assistant::{AssistantState, Role};
use crate::util::markdown::render_markdown_html;

pub const MODAL_ID: &str = "assistantModal";
pub const MESSAGES_ID: &str = "assistantMessages";
pub const INPUT_ID: &str = "assistantInput";

/// Static contents of the sidebar entry that opens the modal.
pub const TRIGGER_MARKUP: &str =
    r##"<a href="#" class="assistant-trigger-link"><i class="fa-solid fa-robot"></i><span>AI Assistant</span></a>"##;

#[component]
pub fn AssistantModal(state: RwSignal<AssistantState>, on_send: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let is_open = move || state.with(|s| s.open);
    let aria_hidden = move || state.with(AssistantState::aria_hidden);

    // Pin the list to the bottom after every render.
    Effect::new(move || {
        let _ = state.with(|s| (s.messages.len(), s.sending));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        if !state.with(|s| s.open) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            if let Some(input_el) = input_ref.get() {
                if input_el.focus().is_err() {
                    log::debug!("assistant input could not take focus");
                }
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div
            class="assistant-backdrop"
            class:open=is_open
            aria-hidden=aria_hidden
            on:click=move |_| on_close.run(())
        ></div>
        <section
            id=MODAL_ID
            class="assistant-modal"
            class:open=is_open
            aria-hidden=aria_hidden
            role="dialog"
            aria-label="AI Assistant"
        >
            <div class="assistant-modal-header">
                <h3>"AI Assistant"</h3>
                <button
                    type="button"
                    class="assistant-close-btn"
                    aria-label="Close assistant"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>

            <div class="assistant-messages" id=MESSAGES_ID node_ref=messages_ref>
                {move || {
                    let messages = state.with(|s| s.messages.clone());
                    if messages.is_empty() {
                        return view! {
                            <p class="assistant-empty">"Ask about your posts, schedule, or inbox."</p>
                        }
                            .into_any();
                    }
                    messages
                        .into_iter()
                        .map(|msg| {
                            let role = msg.role.as_str();
                            let body = match msg.role {
                                Role::Assistant => {
                                    let rendered = render_markdown_html(&msg.content);
                                    view! { <div class="assistant-markdown" inner_html=rendered></div> }.into_any()
                                }
                                Role::User => view! { <span>{msg.content}</span> }.into_any(),
                            };
                            view! {
                                <div class=format!("assistant-message assistant-message--{role}") data-role=role>
                                    {body}
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
                {move || {
                    state.with(|s| s.sending).then(|| view! { <div class="assistant-loading">"Thinking..."</div> })
                }}
            </div>

            <div class="assistant-input-row">
                <textarea
                    id=INPUT_ID
                    class="assistant-input"
                    rows="2"
                    placeholder="Ask the assistant..."
                    node_ref=input_ref
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft = value);
                    }
                    on:keydown=on_keydown
                ></textarea>
                <button
                    type="button"
                    class="assistant-send-btn"
                    disabled=move || !state.with(AssistantState::can_send)
                    on:click=move |_| on_send.run(())
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}

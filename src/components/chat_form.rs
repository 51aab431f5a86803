//! Chat Form Component
//!
//! Message input with Send and Clear All buttons.

use leptos::prelude::*;

use crate::forms::MessageDraft;

#[component]
pub fn ChatForm(
    draft: RwSignal<MessageDraft>,
    #[prop(into)] on_send: Callback<()>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="chat-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_send.run(());
            }
        >
            <input
                type="text"
                placeholder="Type your message..."
                prop:value=move || draft.with(|d| d.message.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.message = value);
                }
            />
            <div class="chat-actions">
                <button type="submit" class="send-btn">"Send"</button>
                <button type="button" class="clear-btn" on:click=move |_| on_clear.run(())>
                    "Clear All"
                </button>
            </div>
        </form>
    }
}

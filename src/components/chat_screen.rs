//! Chat Screen
//!
//! Message list backed by `/messages/`. Every mutation is followed by a full
//! re-list; the latest issued list is the one shown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{ChatForm, ErrorBanner};
use crate::context::use_app_context;
use crate::forms::MessageDraft;
use crate::store::{store_apply_message, store_begin_message_load, MessageState, MessageStateStoreFields, MessageStore};
use crate::sync;

/// Replace the store with the server's full collection
async fn resync(api: &ApiClient, store: MessageStore) {
    let ticket = store_begin_message_load(&store);
    let event = sync::load_messages(api, ticket).await;
    store_apply_message(&store, event);
}

#[component]
pub fn ChatScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(MessageState::default());
    let draft = RwSignal::new(MessageDraft::default());

    // Load messages on mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            resync(&api, store).await;
        });
    });

    let send = Callback::new(move |_: ()| {
        let api = ctx.api();
        let submitted = draft.get_untracked();
        spawn_local(async move {
            // Blank messages never reach the network
            let Some(event) = sync::post_message(&api, &submitted).await else { return };
            if event.succeeded() {
                // Keep anything typed while the request was in flight
                draft.maybe_update(|d| d.clear_if_unchanged(&submitted));
            }
            store_apply_message(&store, event);
            resync(&api, store).await;
        });
    });

    let clear = Callback::new(move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            let event = sync::clear_messages(&api).await;
            store_apply_message(&store, event);
            resync(&api, store).await;
        });
    });

    view! {
        <div class="chat-screen">
            <ErrorBanner error=Signal::derive(move || store.error().get()) />

            <ChatForm draft=draft on_send=send on_clear=clear />

            <div class="message-list">
                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! { <p class="loading">"Loading messages..."</p> }
                >
                    <For
                        each=move || store.messages().get()
                        key=|message| message.id
                        children=move |message| view! {
                            <div class="message-row">{message.content}</div>
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

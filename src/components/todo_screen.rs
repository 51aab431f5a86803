//! Todo Screen
//!
//! Todo list backed by `/todos/`. Successful mutations patch the store with
//! the server's copy of the changed todo; nothing is applied before the
//! server confirms it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ErrorBanner, TodoForm, TodoItem};
use crate::context::use_app_context;
use crate::forms::TodoDraft;
use crate::models::{Todo, TodoId};
use crate::store::{store_apply_todo, store_begin_todo_request, TodoState, TodoStateStoreFields};
use crate::sync;
use crate::tracker::RequestKey;

#[component]
pub fn TodoScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(TodoState::default());
    let draft = RwSignal::new(TodoDraft::default());

    // Load todos on mount
    Effect::new(move |_| {
        let api = ctx.api();
        let ticket = store_begin_todo_request(&store, RequestKey::Collection);
        spawn_local(async move {
            let event = sync::load_todos(&api, ticket).await;
            store_apply_todo(&store, event);
        });
    });

    let create = Callback::new(move |_: ()| {
        let api = ctx.api();
        let submitted = draft.get_untracked();
        spawn_local(async move {
            // Blank titles never reach the network
            let Some(event) = sync::create_todo(&api, &submitted).await else { return };
            if event.succeeded() {
                draft.maybe_update(|d| d.clear_if_unchanged(&submitted));
            }
            store_apply_todo(&store, event);
        });
    });

    let toggle = Callback::new(move |todo: Todo| {
        let api = ctx.api();
        let ticket = store_begin_todo_request(&store, RequestKey::Entity(todo.id));
        spawn_local(async move {
            let event = sync::toggle_todo(&api, &todo, ticket).await;
            store_apply_todo(&store, event);
        });
    });

    let delete = Callback::new(move |id: TodoId| {
        let api = ctx.api();
        spawn_local(async move {
            let event = sync::delete_todo(&api, id).await;
            store_apply_todo(&store, event);
        });
    });

    view! {
        <div class="todo-screen">
            <h1 class="screen-title">"Todo List"</h1>
            <p class="screen-subtitle">"Keep track of your tasks and stay organized"</p>

            <ErrorBanner error=Signal::derive(move || store.error().get()) />

            <TodoForm draft=draft on_submit=create />

            {move || if store.loading().get() {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"Loading todos..."</p>
                    </div>
                }.into_any()
            } else if store.todos().with(|todos| todos.is_empty()) {
                view! { <p class="empty-state">"No todos yet. Add one above!"</p> }.into_any()
            } else {
                view! {
                    <div class="todo-list">
                        <For
                            each=move || store.todos().get()
                            // Every mutable field is part of the key so a changed todo re-renders
                            key=|todo| (todo.id, todo.is_completed, todo.title.clone(), todo.description.clone())
                            children=move |todo| view! {
                                <TodoItem todo=todo on_toggle=toggle on_delete=delete />
                            }
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}

//! Todo Form Component
//!
//! Title and optional description for a new todo.

use leptos::prelude::*;

use crate::forms::TodoDraft;

/// Form fields are owned by the screen so it can reset them after a create
#[component]
pub fn TodoForm(draft: RwSignal<TodoDraft>, #[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="todo-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                type="text"
                placeholder="What needs to be done?"
                required=true
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.title = value);
                }
            />
            <textarea
                placeholder="Add some details (optional)..."
                rows="3"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.description = value);
                }
            />
            <button type="submit" class="add-btn">"+ Add Todo"</button>
        </form>
    }
}

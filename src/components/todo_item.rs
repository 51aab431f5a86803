//! Todo Item Component
//!
//! A single todo row with completion toggle and delete button.

use leptos::prelude::*;

use crate::models::{Todo, TodoId};

/// A single todo row. Both buttons fire a request immediately.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<Todo>,
    #[prop(into)] on_delete: Callback<TodoId>,
) -> impl IntoView {
    let id = todo.id;
    let completed = todo.is_completed;
    let title = todo.title.clone();
    let description = todo.description.clone().filter(|d| !d.is_empty());
    let (row_class, toggle_class, toggle_label) = if completed {
        ("todo-row completed", "toggle-btn checked", "Mark incomplete")
    } else {
        ("todo-row", "toggle-btn", "Mark complete")
    };

    view! {
        <div class=row_class>
            <button
                class=toggle_class
                aria-label=toggle_label
                on:click=move |_| on_toggle.run(todo.clone())
            >
                {completed.then_some("✓")}
            </button>

            <div class="todo-body">
                <h3 class="todo-title">{title}</h3>
                {description.map(|text| view! { <p class="todo-description">{text}</p> })}
            </div>

            <button class="delete-btn" aria-label="Delete todo" on:click=move |_| on_delete.run(id)>
                "×"
            </button>
        </div>
    }
}

//! Nav Bar Component
//!
//! Tab bar for switching between the todo and chat screens.

use leptos::prelude::*;

use crate::app::Screen;
use crate::context::use_app_context;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            {Screen::ALL.into_iter().map(|screen| {
                let tab_class = move || {
                    if ctx.screen.get() == screen { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.show(screen)>
                        {screen.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

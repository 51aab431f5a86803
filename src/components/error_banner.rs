//! Error Banner Component

use leptos::prelude::*;

/// Shows the screen's error flag, if set
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<&'static str>>) -> impl IntoView {
    move || error.get().map(|message| view! { <div class="error-banner" role="alert">{message}</div> })
}

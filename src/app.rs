//! Todo & Chat Frontend App
//!
//! Application shell: nav bar plus the active screen.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{ChatScreen, NavBar, TodoScreen};
use crate::config::ApiConfig;
use crate::context::AppContext;

/// Screens reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Todos,
    Chat,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Todos, Screen::Chat];

    /// `/chat` (with or without trailing slash) opens the chat, anything else the todos
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/chat" => Screen::Chat,
            _ => Screen::Todos,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Todos => "Todos",
            Screen::Chat => "Chat",
        }
    }
}

fn initial_screen() -> Screen {
    window()
        .location()
        .pathname()
        .map(|path| Screen::from_path(&path))
        .unwrap_or(Screen::Todos)
}

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    tracing::info!(base_url = %config.base_url(), "starting app");

    let screen = signal(initial_screen());
    let ctx = AppContext::new(ApiClient::new(config), screen);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match ctx.screen.get() {
                    Screen::Todos => view! { <TodoScreen /> }.into_any(),
                    Screen::Chat => view! { <ChatScreen /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_from_path() {
        assert_eq!(Screen::from_path("/"), Screen::Todos);
        assert_eq!(Screen::from_path("/chat"), Screen::Chat);
        assert_eq!(Screen::from_path("/chat/"), Screen::Chat);
        assert_eq!(Screen::from_path("/chatter"), Screen::Todos);
    }
}

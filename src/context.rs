//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::app::Screen;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client, built once from the configured base URL
    api: StoredValue<ApiClient>,
    /// Screen currently shown - read
    pub screen: ReadSignal<Screen>,
    /// Screen currently shown - write
    set_screen: WriteSignal<Screen>,
}

impl AppContext {
    pub fn new(api: ApiClient, screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            api: StoredValue::new(api),
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Handle to the backend client (cheap to clone)
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Switch to another screen
    pub fn show(&self, screen: Screen) {
        self.set_screen.set(screen);
    }
}

/// Get the app context (provided by `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod error_banner;
mod todo_form;
mod todo_item;
mod todo_screen;
mod chat_form;
mod chat_screen;

pub use nav_bar::NavBar;
pub use error_banner::ErrorBanner;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_screen::TodoScreen;
pub use chat_form::ChatForm;
pub use chat_screen::ChatScreen;

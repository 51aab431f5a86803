//! Backend API
//!
//! Typed bindings to the REST endpoints, organized by collection.

mod client;
mod error;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::models::{Message, NewMessage, NewTodo, Todo, TodoId, TodoPatch};

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

/// `/todos/` collection
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos/`
    async fn list_todos(&self) -> ApiResult<Vec<Todo>>;

    /// `POST /todos/`, returns the stored todo with its server id
    async fn create_todo(&self, new_todo: &NewTodo) -> ApiResult<Todo>;

    /// `PATCH /todos/{id}`
    async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> ApiResult<Todo>;

    /// `DELETE /todos/{id}`
    async fn delete_todo(&self, id: TodoId) -> ApiResult<()>;
}

/// `/messages/` collection
#[async_trait(?Send)]
pub trait MessageApi {
    /// `GET /messages/`
    async fn list_messages(&self) -> ApiResult<Vec<Message>>;

    /// `POST /messages/`; the echoed message is not used
    async fn create_message(&self, new_message: &NewMessage) -> ApiResult<()>;

    /// `DELETE /messages/clear`
    async fn clear_messages(&self) -> ApiResult<()>;
}

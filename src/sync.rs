//! Sync Operations
//!
//! One request per user action, returned as an event for the store to apply.
//! Nothing here touches UI state, so the same flows run against the HTTP
//! client in the browser and the fake backend in tests.

use tracing::{debug, info, warn};

use crate::api::{MessageApi, TodoApi};
use crate::forms::{MessageDraft, TodoDraft};
use crate::models::{Todo, TodoId, TodoPatch};
use crate::store::{MessageEvent, TodoEvent};
use crate::tracker::Ticket;

// ========================
// Todos
// ========================

pub async fn load_todos<A: TodoApi + ?Sized>(api: &A, ticket: Ticket) -> TodoEvent {
    debug!("listing todos");
    let result = api.list_todos().await;
    match &result {
        Ok(todos) => info!(count = todos.len(), "todos listed"),
        Err(e) => warn!(error = %e, "list todos failed"),
    }
    TodoEvent::Loaded { ticket, result }
}

/// Returns `None` without issuing a request when the title is blank.
pub async fn create_todo<A: TodoApi + ?Sized>(api: &A, draft: &TodoDraft) -> Option<TodoEvent> {
    let new_todo = draft.submission()?;
    debug!(title = %new_todo.title, "creating todo");
    let result = api.create_todo(&new_todo).await;
    match &result {
        Ok(todo) => info!(id = todo.id, "todo created"),
        Err(e) => warn!(error = %e, "create todo failed"),
    }
    Some(TodoEvent::Created(result))
}

pub async fn delete_todo<A: TodoApi + ?Sized>(api: &A, id: TodoId) -> TodoEvent {
    debug!(id, "deleting todo");
    let result = api.delete_todo(id).await;
    match &result {
        Ok(()) => info!(id, "todo deleted"),
        Err(e) => warn!(id, error = %e, "delete todo failed"),
    }
    TodoEvent::Deleted { id, result }
}

/// Send the negation of the todo's current completion flag.
pub async fn toggle_todo<A: TodoApi + ?Sized>(api: &A, todo: &Todo, ticket: Ticket) -> TodoEvent {
    let patch = TodoPatch { is_completed: !todo.is_completed };
    debug!(id = todo.id, is_completed = patch.is_completed, "updating todo");
    let result = api.update_todo(todo.id, patch).await;
    match &result {
        Ok(updated) => info!(id = updated.id, is_completed = updated.is_completed, "todo updated"),
        Err(e) => warn!(id = todo.id, error = %e, "update todo failed"),
    }
    TodoEvent::Toggled { ticket, result }
}

// ========================
// Messages
// ========================

pub async fn load_messages<A: MessageApi + ?Sized>(api: &A, ticket: Ticket) -> MessageEvent {
    debug!("listing messages");
    let result = api.list_messages().await;
    match &result {
        Ok(messages) => info!(count = messages.len(), "messages listed"),
        Err(e) => warn!(error = %e, "list messages failed"),
    }
    MessageEvent::Loaded { ticket, result }
}

/// Returns `None` without issuing a request when the message is blank.
/// Callers re-list afterwards whatever the outcome.
pub async fn post_message<A: MessageApi + ?Sized>(api: &A, draft: &MessageDraft) -> Option<MessageEvent> {
    let new_message = draft.submission()?;
    debug!(len = new_message.content.len(), "posting message");
    let result = api.create_message(&new_message).await;
    match &result {
        Ok(()) => info!("message posted"),
        Err(e) => warn!(error = %e, "post message failed"),
    }
    Some(MessageEvent::Posted(result))
}

/// Callers re-list afterwards whatever the outcome.
pub async fn clear_messages<A: MessageApi + ?Sized>(api: &A) -> MessageEvent {
    debug!("clearing messages");
    let result = api.clear_messages().await;
    match &result {
        Ok(()) => info!("messages cleared"),
        Err(e) => warn!(error = %e, "clear messages failed"),
    }
    MessageEvent::Cleared(result)
}

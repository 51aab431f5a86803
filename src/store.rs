//! Collection Stores
//!
//! Per-screen state using Leptos reactive_stores for fine-grained reactivity.
//! Sync results arrive as events and are reduced into the store here, so the
//! same rules apply whether the event came from the browser or a test.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::api::ApiResult;
use crate::models::{Entity, Message, Todo, TodoId};
use crate::tracker::{RequestKey, RequestTracker, Ticket};

pub const LOAD_TODOS_FAILED: &str = "Failed to load todos";
pub const CREATE_TODO_FAILED: &str = "Failed to create todo";
pub const DELETE_TODO_FAILED: &str = "Failed to delete todo";
pub const UPDATE_TODO_FAILED: &str = "Failed to update todo";
pub const LOAD_MESSAGES_FAILED: &str = "Failed to load messages";
pub const SEND_MESSAGE_FAILED: &str = "Failed to send message";
pub const CLEAR_MESSAGES_FAILED: &str = "Failed to clear messages";

// ========================
// Collection Helpers
// ========================

/// Replace the entity with the same id, or append it at the end
pub fn upsert_by_id<T: Entity>(items: &mut Vec<T>, entity: T) {
    match items.iter_mut().find(|item| item.id() == entity.id()) {
        Some(slot) => *slot = entity,
        None => items.push(entity),
    }
}

/// Replace the entity with the same id; false if none is present
pub fn replace_by_id<T: Entity>(items: &mut [T], entity: T) -> bool {
    items
        .iter_mut()
        .find(|item| item.id() == entity.id())
        .map(|item| *item = entity)
        .is_some()
}

/// Remove every entity with the given id, keeping the others in order
pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: u32) {
    items.retain(|item| item.id() != id);
}

// ========================
// Todo Screen
// ========================

/// Outcome of a todo request
#[derive(Debug, Clone)]
pub enum TodoEvent {
    Loaded { ticket: Ticket, result: ApiResult<Vec<Todo>> },
    Created(ApiResult<Todo>),
    Deleted { id: TodoId, result: ApiResult<()> },
    Toggled { ticket: Ticket, result: ApiResult<Todo> },
}

impl TodoEvent {
    pub fn succeeded(&self) -> bool {
        match self {
            TodoEvent::Loaded { result, .. } => result.is_ok(),
            TodoEvent::Created(result) => result.is_ok(),
            TodoEvent::Deleted { result, .. } => result.is_ok(),
            TodoEvent::Toggled { result, .. } => result.is_ok(),
        }
    }
}

/// A server-confirmed change that an in-flight list may predate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmedChange {
    Created(Todo),
    Updated(Todo),
    Deleted(TodoId),
}

impl ConfirmedChange {
    fn replay(self, todos: &mut Vec<Todo>) {
        match self {
            ConfirmedChange::Created(todo) => upsert_by_id(todos, todo),
            ConfirmedChange::Updated(todo) => {
                replace_by_id(todos, todo);
            }
            ConfirmedChange::Deleted(id) => remove_by_id(todos, id),
        }
    }
}

#[derive(Clone, Debug, Store)]
pub struct TodoState {
    /// Todos in server insertion order
    pub todos: Vec<Todo>,
    /// True until the first list fetch settles
    pub loading: bool,
    /// Banner text for the last failed operation
    pub error: Option<&'static str>,
    pub requests: RequestTracker,
    /// Changes confirmed while a list fetch was in flight, replayed over it
    pub confirmed: Vec<ConfirmedChange>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            loading: true,
            error: None,
            requests: RequestTracker::default(),
            confirmed: Vec::new(),
        }
    }
}

impl TodoState {
    pub fn apply(&mut self, event: TodoEvent) {
        match event {
            TodoEvent::Loaded { ticket, result } => {
                if !self.requests.finish(&ticket) {
                    debug!(key = ?ticket.key(), "discarding superseded todo list");
                    return;
                }
                self.loading = false;
                let confirmed = std::mem::take(&mut self.confirmed);
                match result {
                    Ok(todos) => {
                        self.todos = todos;
                        if !confirmed.is_empty() {
                            debug!(count = confirmed.len(), "replaying changes confirmed during list");
                        }
                        for change in confirmed {
                            change.replay(&mut self.todos);
                        }
                        self.error = None;
                    }
                    Err(_) => self.error = Some(LOAD_TODOS_FAILED),
                }
            }
            TodoEvent::Created(result) => match result {
                Ok(todo) => {
                    self.confirm(ConfirmedChange::Created(todo));
                    self.error = None;
                }
                Err(_) => self.error = Some(CREATE_TODO_FAILED),
            },
            TodoEvent::Deleted { id, result } => match result {
                Ok(()) => {
                    self.confirm(ConfirmedChange::Deleted(id));
                    self.error = None;
                }
                Err(_) => self.error = Some(DELETE_TODO_FAILED),
            },
            TodoEvent::Toggled { ticket, result } => {
                if !self.requests.finish(&ticket) {
                    debug!(key = ?ticket.key(), "discarding superseded toggle");
                    return;
                }
                match result {
                    Ok(todo) => {
                        if !self.todos.iter().any(|t| t.id == todo.id) {
                            debug!(id = todo.id, "toggled todo is no longer listed");
                        }
                        self.confirm(ConfirmedChange::Updated(todo));
                        self.error = None;
                    }
                    Err(_) => self.error = Some(UPDATE_TODO_FAILED),
                }
            }
        }
    }

    /// Apply a confirmed change now, and again over any list still in flight.
    fn confirm(&mut self, change: ConfirmedChange) {
        if self.requests.is_pending(RequestKey::Collection) {
            self.confirmed.push(change.clone());
        }
        change.replay(&mut self.todos);
    }
}

// ========================
// Chat Screen
// ========================

/// Outcome of a chat request
#[derive(Debug, Clone)]
pub enum MessageEvent {
    Loaded { ticket: Ticket, result: ApiResult<Vec<Message>> },
    Posted(ApiResult<()>),
    Cleared(ApiResult<()>),
}

impl MessageEvent {
    pub fn succeeded(&self) -> bool {
        match self {
            MessageEvent::Loaded { result, .. } => result.is_ok(),
            MessageEvent::Posted(result) | MessageEvent::Cleared(result) => result.is_ok(),
        }
    }
}

#[derive(Clone, Debug, Store)]
pub struct MessageState {
    /// Messages exactly as the last applied list returned them
    pub messages: Vec<Message>,
    pub loading: bool,
    pub error: Option<&'static str>,
    /// Failure of the last send or clear, kept through its follow-up re-list
    pub mutation_error: Option<&'static str>,
    pub requests: RequestTracker,
}

impl Default for MessageState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            loading: true,
            error: None,
            mutation_error: None,
            requests: RequestTracker::default(),
        }
    }
}

impl MessageState {
    pub fn apply(&mut self, event: MessageEvent) {
        match event {
            MessageEvent::Loaded { ticket, result } => {
                if !self.requests.finish(&ticket) {
                    debug!(key = ?ticket.key(), "discarding superseded message list");
                    return;
                }
                self.loading = false;
                let mutation_error = self.mutation_error.take();
                match result {
                    Ok(messages) => {
                        self.messages = messages;
                        self.error = mutation_error;
                    }
                    Err(_) => self.error = Some(LOAD_MESSAGES_FAILED),
                }
            }
            // The follow-up list replaces the messages; only the flags change here
            MessageEvent::Posted(result) => {
                self.mutation_error = result.err().map(|_| SEND_MESSAGE_FAILED);
                self.error = self.mutation_error;
            }
            MessageEvent::Cleared(result) => {
                self.mutation_error = result.err().map(|_| CLEAR_MESSAGES_FAILED);
                self.error = self.mutation_error;
            }
        }
    }
}

// ========================
// Store Helper Functions
// ========================

pub type TodoStore = Store<TodoState>;
pub type MessageStore = Store<MessageState>;

/// Issue a ticket, writing only the `requests` field so list readers stay quiet
pub fn store_begin_todo_request(store: &TodoStore, key: RequestKey) -> Ticket {
    store.requests().write().begin(key)
}

pub fn store_apply_todo(store: &TodoStore, event: TodoEvent) {
    store.update(|state| state.apply(event));
}

pub fn store_begin_message_load(store: &MessageStore) -> Ticket {
    store.requests().write().begin(RequestKey::Collection)
}

pub fn store_apply_message(store: &MessageStore, event: MessageEvent) {
    store.update(|state| state.apply(event));
}

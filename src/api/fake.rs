//! In-memory backend for sync tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, ApiResult, MessageApi, TodoApi};
use crate::models::{Message, NewMessage, NewTodo, Todo, TodoId, TodoPatch};

#[derive(Default)]
pub struct FakeBackend {
    pub todos: RefCell<Vec<Todo>>,
    pub messages: RefCell<Vec<Message>>,
    /// Every request received, failed ones included
    pub requests: Cell<usize>,
    /// Last patch body seen by `update_todo`
    pub last_patch: Cell<Option<(TodoId, TodoPatch)>>,
    failure: RefCell<Option<ApiError>>,
    next_id: Cell<u32>,
}

impl FakeBackend {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        let backend = Self::default();
        backend.next_id.set(next_id);
        *backend.todos.borrow_mut() = todos;
        backend
    }

    pub fn with_messages(messages: Vec<Message>) -> Self {
        let next_id = messages.iter().map(|m| m.id).max().unwrap_or(0);
        let backend = Self::default();
        backend.next_id.set(next_id);
        *backend.messages.borrow_mut() = messages;
        backend
    }

    /// Make every following request fail with `error`.
    pub fn fail_with(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }

    fn receive(&self) -> ApiResult<()> {
        self.requests.set(self.requests.get() + 1);
        match self.failure.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn assign_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeBackend {
    async fn list_todos(&self) -> ApiResult<Vec<Todo>> {
        self.receive()?;
        Ok(self.todos.borrow().clone())
    }

    async fn create_todo(&self, new_todo: &NewTodo) -> ApiResult<Todo> {
        self.receive()?;
        let todo = Todo {
            id: self.assign_id(),
            title: new_todo.title.clone(),
            description: new_todo.description.clone(),
            is_completed: false,
        };
        self.todos.borrow_mut().push(todo.clone());
        Ok(todo)
    }

    async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> ApiResult<Todo> {
        self.receive()?;
        self.last_patch.set(Some((id, patch)));
        let mut todos = self.todos.borrow_mut();
        let todo = todos.iter_mut().find(|t| t.id == id).ok_or(ApiError::Status(404))?;
        todo.is_completed = patch.is_completed;
        Ok(todo.clone())
    }

    async fn delete_todo(&self, id: TodoId) -> ApiResult<()> {
        self.receive()?;
        let mut todos = self.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl MessageApi for FakeBackend {
    async fn list_messages(&self) -> ApiResult<Vec<Message>> {
        self.receive()?;
        Ok(self.messages.borrow().clone())
    }

    async fn create_message(&self, new_message: &NewMessage) -> ApiResult<()> {
        self.receive()?;
        let message = Message { id: self.assign_id(), content: new_message.content.clone() };
        self.messages.borrow_mut().push(message);
        Ok(())
    }

    async fn clear_messages(&self) -> ApiResult<()> {
        self.receive()?;
        self.messages.borrow_mut().clear();
        Ok(())
    }
}

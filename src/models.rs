//! Frontend Models
//!
//! Data structures matching backend entities and request bodies.

use serde::{Deserialize, Serialize};

pub type TodoId = u32;
pub type MessageId = u32;

/// Anything the server identifies by a numeric id
pub trait Entity {
    fn id(&self) -> u32;
}

/// Chat message (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl Entity for Todo {
    fn id(&self) -> u32 {
        self.id
    }
}

// ========================
// Request Bodies
// ========================

/// Body for `POST /messages/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub content: String,
}

/// Body for `POST /todos/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update body for `PATCH /todos/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_defaults_optional_fields() {
        let todo: Todo = serde_json::from_value(json!({ "id": 3, "title": "Write docs" })).unwrap();
        assert_eq!(todo.description, None);
        assert!(!todo.is_completed);
    }

    #[test]
    fn test_todo_accepts_null_description() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 1,
            "title": "A",
            "description": null,
            "is_completed": true,
        }))
        .unwrap();
        assert_eq!(todo.description, None);
        assert!(todo.is_completed);
    }

    #[test]
    fn test_new_todo_omits_missing_description() {
        let body = serde_json::to_value(NewTodo { title: "A".into(), description: None }).unwrap();
        assert_eq!(body, json!({ "title": "A" }));
    }

    #[test]
    fn test_patch_body_shape() {
        let body = serde_json::to_value(TodoPatch { is_completed: true }).unwrap();
        assert_eq!(body, json!({ "is_completed": true }));
    }
}

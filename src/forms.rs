//! Form Drafts
//!
//! Uncommitted input field values. A draft only yields a request body when
//! its primary field has visible content.

use crate::models::{NewMessage, NewTodo};

/// Todo form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
}

impl TodoDraft {
    /// Trimmed body, or `None` when the title is blank.
    pub fn submission(&self) -> Option<NewTodo> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let description = self.description.trim();
        Some(NewTodo {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }

    /// Empty the fields unless they were edited after `submitted` was sent.
    pub fn clear_if_unchanged(&mut self, submitted: &TodoDraft) -> bool {
        if self != submitted {
            return false;
        }
        *self = TodoDraft::default();
        true
    }
}

/// Chat input field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub message: String,
}

impl MessageDraft {
    /// The message as typed, or `None` when it is blank.
    pub fn submission(&self) -> Option<NewMessage> {
        if self.message.trim().is_empty() {
            return None;
        }
        Some(NewMessage { content: self.message.clone() })
    }

    /// Empty the input unless it was edited after `submitted` was sent.
    pub fn clear_if_unchanged(&mut self, submitted: &MessageDraft) -> bool {
        if self != submitted {
            return false;
        }
        self.message.clear();
        true
    }
}

//! In-flight Request Tracker
//!
//! Requests are never serialized, so responses can arrive out of order.
//! Each request takes a [`Ticket`] from a monotonic counter; only the latest
//! ticket issued for a key may apply its response.

use std::collections::HashMap;

use crate::models::TodoId;

/// What an in-flight request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKey {
    /// Full list fetch
    Collection,
    /// Update of a single entity
    Entity(TodoId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    key: RequestKey,
    seq: u64,
}

impl Ticket {
    pub fn key(&self) -> RequestKey {
        self.key
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    next_seq: u64,
    latest: HashMap<RequestKey, u64>,
}

impl RequestTracker {
    /// Issue a ticket, superseding any earlier ticket for the same key.
    pub fn begin(&mut self, key: RequestKey) -> Ticket {
        self.next_seq += 1;
        self.latest.insert(key, self.next_seq);
        Ticket { key, seq: self.next_seq }
    }

    /// True while a ticket for `key` is issued and not yet settled
    pub fn is_pending(&self, key: RequestKey) -> bool {
        self.latest.contains_key(&key)
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.key) == Some(&ticket.seq)
    }

    /// Settle a completed request. Returns false for a superseded ticket,
    /// whose response must be discarded.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.latest.remove(&ticket.key);
        true
    }
}

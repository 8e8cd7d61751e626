//! Input events and listener registry
//!
//! Raw input is tagged data carrying its target node; key input also carries
//! a millisecond timestamp so time-based behavior needs no wall clock.
//! Subscriptions are held in a side registry keyed by scope node and event
//! kind, never on the nodes themselves.

use std::collections::HashMap;

use crate::NodeId;

/// Event kinds a subscriber can listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseOver,
    KeyDown,
    Change,
}

/// Key codes for keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A regular character key
    Char(char),
    Enter,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Letters and digits feed type-ahead search
    pub fn is_printable(&self) -> bool {
        matches!(self, Key::Char(c) if c.is_ascii_alphanumeric())
    }
}

/// Raw input record, dispatched by the embedder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomInput {
    /// Pointer click on a node
    Click { target: NodeId },
    /// Pointer moved over a node
    MouseOver { target: NodeId },
    /// Key pressed while focus is within a node
    KeyDown { target: NodeId, key: Key, at_ms: u64 },
    /// The select control's value changed externally
    Change { select: NodeId },
}

impl DomInput {
    /// The event kind this input is routed by
    pub fn kind(&self) -> EventKind {
        match self {
            DomInput::Click { .. } => EventKind::Click,
            DomInput::MouseOver { .. } => EventKind::MouseOver,
            DomInput::KeyDown { .. } => EventKind::KeyDown,
            DomInput::Change { .. } => EventKind::Change,
        }
    }
}

/// Opaque subscriber handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Listener registry keyed by (scope node, event kind).
///
/// A subscription scoped to a node covers that node's whole subtree; routing
/// within the subtree is the subscriber's business (containment checks, not
/// registration order).
#[derive(Debug, Default)]
pub struct ListenerMap {
    listeners: HashMap<(NodeId, EventKind), Vec<SubscriberId>>,
}

impl ListenerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscription. Returns false on a duplicate.
    pub fn add(&mut self, scope: NodeId, kind: EventKind, subscriber: SubscriberId) -> bool {
        let entry = self.listeners.entry((scope, kind)).or_default();
        if entry.contains(&subscriber) {
            return false;
        }
        entry.push(subscriber);
        true
    }

    /// Remove one subscription. Returns whether it was present.
    pub fn remove(&mut self, scope: NodeId, kind: EventKind, subscriber: SubscriberId) -> bool {
        let Some(entry) = self.listeners.get_mut(&(scope, kind)) else {
            return false;
        };
        let before = entry.len();
        entry.retain(|s| *s != subscriber);
        let removed = entry.len() != before;
        if entry.is_empty() {
            self.listeners.remove(&(scope, kind));
        }
        removed
    }

    /// Drop every subscription held by a subscriber
    pub fn remove_subscriber(&mut self, subscriber: SubscriberId) {
        self.listeners.retain(|_, subs| {
            subs.retain(|s| *s != subscriber);
            !subs.is_empty()
        });
    }

    /// All (scope, subscriber) pairs registered for an event kind
    pub fn entries(&self, kind: EventKind) -> Vec<(NodeId, SubscriberId)> {
        let mut out: Vec<_> = self
            .listeners
            .iter()
            .filter(|((_, k), _)| *k == kind)
            .flat_map(|((scope, _), subs)| subs.iter().map(|s| (*scope, *s)))
            .collect();
        // Deterministic dispatch order regardless of map iteration
        out.sort_by_key(|(scope, sub)| (scope.0, sub.0));
        out
    }

    /// Check whether a specific subscription exists
    pub fn has(&self, scope: NodeId, kind: EventKind, subscriber: SubscriberId) -> bool {
        self.listeners
            .get(&(scope, kind))
            .is_some_and(|subs| subs.contains(&subscriber))
    }

    /// Total number of subscriptions
    pub fn len(&self) -> usize {
        self.listeners.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

//! # Event Bus System
//!
//! Broadcasts catalog mutations to interested host components using
//! `tokio::sync::broadcast`, so a UI can refresh views or badges without
//! polling the manager.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::events::{CatalogEvent, EventBus, MediaKind};
//!
//! let bus = EventBus::new(64);
//! let mut stream = bus.subscribe();
//!
//! bus.emit(CatalogEvent::Deleted {
//!     kind: MediaKind::Music,
//!     id: "770a".to_string(),
//! }).ok();
//! ```
//!
//! Slow subscribers observe `RecvError::Lagged(n)` after missing `n` events
//! and can resynchronize by re-reading the manager's state.

use std::fmt;
use tokio::sync::broadcast;

/// The two administered media kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Exercise,
    Music,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exercise => write!(f, "exercise"),
            Self::Music => write!(f, "music"),
        }
    }
}

/// A catalog mutation observed by the list manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// The full list was refetched
    Reloaded { kind: MediaKind, count: usize },
    /// A new entity was accepted by the backend
    Created { kind: MediaKind, id: String },
    /// An entity's metadata was updated
    Updated { kind: MediaKind, id: String },
    /// An entity was deleted
    Deleted { kind: MediaKind, id: String },
}

/// Central broadcast channel for catalog events.
///
/// Cloning is cheap; all clones publish into the same channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CatalogEvent>,
}

impl EventBus {
    /// Create an event bus buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns the number of subscribers that received it; an error means
    /// there were none, which is not a failure for emitters.
    pub fn emit(
        &self,
        event: CatalogEvent,
    ) -> std::result::Result<usize, broadcast::error::SendError<CatalogEvent>> {
        self.sender.send(event)
    }

    /// Subscribe to events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

//! In-memory event store.
//!
//! Owns the ordered event list and is the single writer for it. Analyzers
//! take `&[Event]` snapshots and recompute from scratch on every mutation;
//! nothing here is incremental. If this ever moves to a multi-threaded
//! host, wrap the store in a mutex or an actor boundary so analyzers see a
//! stable snapshot.

use crate::event::Event;

/// Ordered in-memory collection of events with add/update/delete by id.
///
/// Lookup misses are no-ops: updating or removing an unknown id leaves the
/// store unchanged and signals nothing.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an initial event list.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Append an event. Identifiers are not checked for uniqueness here;
    /// callers mint them via uuid.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replace the event with the same id, keeping its position.
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn update(&mut self, event: Event) -> bool {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event;
                true
            }
            None => false,
        }
    }

    /// Remove the event with the given id.
    /// Returns false (and changes nothing) when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    /// Look up an event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Snapshot view of all events, in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

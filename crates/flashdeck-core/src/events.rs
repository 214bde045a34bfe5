//! Deck event notifications.
//!
//! The `EventSink` trait lets a caller observe deck changes without the deck
//! knowing how they are recorded. The CLI uses this to keep its transcript;
//! the default sink forwards everything to `tracing`.

/// Notable changes to a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEvent {
    CardAdded { term: String },
    CardRemoved { term: String },
    MistakeRecorded { term: String, total: u32 },
    StatsReset,
    Imported { count: usize },
    Exported { count: usize },
}

/// Observer for deck events.
pub trait EventSink {
    /// Called after the change has been applied.
    fn notify(&mut self, event: &DeckEvent);
}

/// Sink that emits every event as a `tracing` debug record.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn notify(&mut self, event: &DeckEvent) {
        tracing::debug!(?event, "deck event");
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<DeckEvent>,
}

impl EventSink for RecordingSink {
    fn notify(&mut self, event: &DeckEvent) {
        self.events.push(event.clone());
    }
}

use std::collections::HashMap;

use crate::models::Event;

/// Lookup table from event id to tournament metadata, built once before the
/// results stream is consumed. Enrichment is best-effort: an id the export
/// never mentioned resolves to an empty sentinel event, not an error.
#[derive(Debug, Default)]
pub struct EventIndex {
    by_id: HashMap<String, Event>,
    missing: Event,
}

impl EventIndex {
    /// Duplicated ids are tolerated; the later row overwrites the earlier
    /// one.
    pub fn build(events: impl IntoIterator<Item = Event>) -> Self {
        let mut by_id = HashMap::new();
        for event in events {
            by_id.insert(event.id.clone(), event);
        }
        Self {
            by_id,
            missing: Event::default(),
        }
    }

    pub fn get(&self, event_id: &str) -> &Event {
        self.by_id.get(event_id).unwrap_or(&self.missing)
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.by_id.contains_key(event_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

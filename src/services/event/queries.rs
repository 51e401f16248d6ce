use super::EventManager;
use crate::models::event::Event;
use crate::services::index::EventIndex;
use chrono::NaiveDate;

impl EventManager {
    /// Fresh per-day index over the current collection.
    pub fn index(&self) -> EventIndex {
        EventIndex::build(&self.events)
    }

    /// Events starting on `date`, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.day() == date)
            .collect()
    }
}

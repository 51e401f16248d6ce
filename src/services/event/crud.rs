use super::{EventChange, EventManager};
use crate::models::event::{Event, EventId, EventPatch, NewEvent};
use anyhow::{Context, Result};
use uuid::Uuid;

impl EventManager {
    /// Create a new event with a freshly generated identifier.
    pub fn create(&mut self, input: NewEvent) -> Result<Event> {
        input.validate().context("Failed to create event")?;

        let event = input.into_event(self.generate_id());
        self.events.push(event.clone());
        self.changes.push(EventChange::Created(event.clone()));

        log::info!("Created event {} ({})", event.id, event.title);
        Ok(event)
    }

    /// Retrieve an event by ID.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Merge `patch` into the event with `id`.
    ///
    /// Returns `Ok(None)` when no such event exists. An invalid patch is
    /// rejected before anything is modified.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> Result<Option<Event>> {
        let Some(slot) = self.events.iter_mut().find(|event| event.id == id) else {
            log::debug!("Update skipped, event {} not found", id);
            return Ok(None);
        };

        let mut updated = slot.clone();
        updated.apply(patch);
        updated
            .validate()
            .with_context(|| format!("Failed to update event {}", id))?;

        let before = std::mem::replace(slot, updated.clone());
        self.changes.push(EventChange::Updated {
            before,
            after: updated.clone(),
        });

        log::info!("Updated event {}", id);
        Ok(Some(updated))
    }

    /// Delete an event by ID, returning it if it existed.
    pub fn delete(&mut self, id: &str) -> Option<Event> {
        let Some(position) = self.events.iter().position(|event| event.id == id) else {
            log::debug!("Delete skipped, event {} not found", id);
            return None;
        };

        let removed = self.events.remove(position);
        self.changes.push(EventChange::Deleted(removed.clone()));

        log::info!("Deleted event {}", id);
        Some(removed)
    }

    fn generate_id(&self) -> EventId {
        loop {
            let id = format!("evt-{}", Uuid::new_v4().simple());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

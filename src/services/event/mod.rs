//! Calendar event manager entry point.
//! Owns the in-memory event collection; CRUD and read-side queries live in
//! focused submodules.

use crate::models::event::Event;

pub mod crud;
pub mod queries;

/// Notification emitted for every committed change to the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum EventChange {
    Created(Event),
    Updated { before: Event, after: Event },
    Deleted(Event),
}

/// Single owner of the event collection.
///
/// Readers receive snapshots (slices, clones, indexes); nothing outside the
/// manager mutates the stored events.
#[derive(Debug, Default)]
pub struct EventManager {
    pub(crate) events: Vec<Event>,
    pub(crate) changes: Vec<EventChange>,
}

impl EventManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the manager with existing events. No notifications are queued.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            changes: Vec::new(),
        }
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Notifications queued since the last drain.
    pub fn pending_changes(&self) -> &[EventChange] {
        &self.changes
    }

    /// Hand queued notifications to the caller and clear the queue.
    pub fn drain_changes(&mut self) -> Vec<EventChange> {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventError, EventPatch, NewEvent};
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn sample_input() -> NewEvent {
        NewEvent::new("Test Event", start(), start() + Duration::hours(1)).unwrap()
    }

    #[test]
    fn test_create_event() {
        let mut manager = EventManager::new();

        let created = manager.create(sample_input()).unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.title, "Test Event");
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(&created.id), Some(&created));
    }

    #[test]
    fn test_created_ids_are_unique() {
        let mut manager = EventManager::new();
        let ids: Vec<String> = (0..50)
            .map(|_| manager.create(sample_input()).unwrap().id)
            .collect();

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_create_rejects_malformed_input() {
        let mut manager = EventManager::new();
        let mut input = sample_input();
        input.title = String::new();

        let result = manager.create(input);

        assert!(result.is_err());
        assert!(manager.is_empty());
        assert!(manager.pending_changes().is_empty());
        let err = result.unwrap_err();
        assert_eq!(err.downcast_ref::<EventError>(), Some(&EventError::EmptyTitle));
    }

    #[test]
    fn test_update_event() {
        let mut manager = EventManager::new();
        let created = manager.create(sample_input()).unwrap();

        let updated = manager
            .update(&created.id, EventPatch::new().title("Updated Title").description("New description"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.description.as_deref(), Some("New description"));
        assert_eq!(updated.start, created.start);
        assert_eq!(updated.end, created.end);
    }

    #[test]
    fn test_update_nonexistent_event_is_noop() {
        let mut manager = EventManager::new();
        manager.create(sample_input()).unwrap();
        manager.drain_changes();

        let result = manager.update("evt-missing", EventPatch::new().title("Y")).unwrap();

        assert!(result.is_none());
        assert!(manager.pending_changes().is_empty());
    }

    #[test]
    fn test_update_with_invalid_patch_changes_nothing() {
        let mut manager = EventManager::new();
        let created = manager.create(sample_input()).unwrap();
        manager.drain_changes();

        let result = manager.update(&created.id, EventPatch::new().title("Renamed").color("purple"));

        assert!(result.is_err());
        assert_eq!(manager.get(&created.id), Some(&created));
        assert!(manager.pending_changes().is_empty());
    }

    #[test]
    fn test_delete_event() {
        let mut manager = EventManager::new();
        let created = manager.create(sample_input()).unwrap();

        let removed = manager.delete(&created.id);

        assert_eq!(removed, Some(created.clone()));
        assert!(manager.get(&created.id).is_none());
        assert!(manager.delete(&created.id).is_none());
    }

    #[test]
    fn test_change_notifications() {
        let mut manager = EventManager::new();
        let created = manager.create(sample_input()).unwrap();
        let updated = manager
            .update(&created.id, EventPatch::new().title("Y"))
            .unwrap()
            .unwrap();
        manager.delete(&created.id);

        let changes = manager.drain_changes();
        assert_eq!(
            changes,
            vec![
                EventChange::Created(created.clone()),
                EventChange::Updated {
                    before: created,
                    after: updated.clone(),
                },
                EventChange::Deleted(updated),
            ]
        );
        assert!(manager.drain_changes().is_empty());
    }

    #[test]
    fn test_with_events_seeds_without_notifications() {
        let seeded = sample_input().into_event("evt-seed".to_string());
        let manager = EventManager::with_events(vec![seeded.clone()]);

        assert_eq!(manager.events(), &[seeded]);
        assert!(manager.pending_changes().is_empty());
    }
}

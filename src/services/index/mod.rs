//! Per-day event index.
//! Groups a snapshot of events by the calendar day of their start instant.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::models::event::Event;

/// Day-granularity key: `year * 10000 + month * 100 + day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(i64);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        let year = self.0.div_euclid(10_000);
        let rest = self.0.rem_euclid(10_000);
        NaiveDate::from_ymd_opt(year as i32, (rest / 100) as u32, (rest % 100) as u32)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Immutable snapshot of events grouped by start day.
///
/// Within a day, events keep the order of the input collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    days: HashMap<DayKey, Vec<Event>>,
    event_count: usize,
}

impl EventIndex {
    pub fn build(events: &[Event]) -> Self {
        let mut days: HashMap<DayKey, Vec<Event>> = HashMap::new();
        for event in events {
            days.entry(DayKey::from_date(event.day()))
                .or_default()
                .push(event.clone());
        }

        log::debug!(
            "Indexed {} events across {} days",
            events.len(),
            days.len()
        );

        Self {
            days,
            event_count: events.len(),
        }
    }

    /// Events starting on `date`; empty when there are none.
    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.get(DayKey::from_date(date))
    }

    pub fn get(&self, key: DayKey) -> &[Event] {
        self.days.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys of all days holding at least one event, in chronological order.
    pub fn days(&self) -> Vec<DayKey> {
        let mut keys: Vec<DayKey> = self.days.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn is_empty(&self) -> bool {
        self.event_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::NewEvent;
    use chrono::NaiveDateTime;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        NewEvent::new(id, start, end).unwrap().into_event(id.to_string())
    }

    #[test]
    fn test_day_key_values() {
        let key = DayKey::from_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(key.value(), 20240305);
        assert_eq!(key.to_date(), NaiveDate::from_ymd_opt(2024, 3, 5));

        let early = DayKey::from_date(NaiveDate::from_ymd_opt(-44, 3, 15).unwrap());
        assert_eq!(early.to_date(), NaiveDate::from_ymd_opt(-44, 3, 15));
    }

    #[test]
    fn test_groups_by_start_day_ignoring_time() {
        let events = vec![
            event("late", at(15, 22, 0), at(15, 23, 0)),
            event("other-day", at(16, 9, 0), at(16, 10, 0)),
            event("early", at(15, 1, 0), at(15, 2, 0)),
        ];
        let index = EventIndex::build(&events);

        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let ids: Vec<&str> = index.events_on(day).iter().map(|e| e.id.as_str()).collect();
        // insertion order, not start order
        assert_eq!(ids, vec!["late", "early"]);
        assert_eq!(index.day_count(), 2);
        assert_eq!(index.event_count(), 3);
    }

    #[test]
    fn test_multi_day_event_belongs_to_start_day() {
        let events = vec![event("overnight", at(15, 22, 0), at(16, 2, 0))];
        let index = EventIndex::build(&events);

        assert_eq!(index.events_on(at(15, 0, 0).date()).len(), 1);
        assert!(index.events_on(at(16, 0, 0).date()).is_empty());
    }

    #[test]
    fn test_days_are_sorted() {
        let events = vec![
            event("b", at(20, 9, 0), at(20, 10, 0)),
            event("a", at(2, 9, 0), at(2, 10, 0)),
        ];
        let index = EventIndex::build(&events);
        let days: Vec<i64> = index.days().into_iter().map(DayKey::value).collect();
        assert_eq!(days, vec![20240302, 20240320]);
    }

    #[test]
    fn test_empty_index() {
        let index = EventIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.events_on(at(1, 0, 0).date()).is_empty());
    }
}

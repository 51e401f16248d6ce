// Test fixtures - reusable test data
// Provides consistent dates and events across all test files
#![allow(dead_code)]

use calendar_engine::models::event::{Event, NewEvent};
use calendar_engine::services::event::EventManager;
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Friday 15 March 2024
    pub fn mar_15_2024() -> NaiveDate {
        date(2024, 3, 15)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        date(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// The classic overlap scenario: A and B overlap, C starts when A ends.
    pub fn abc_inputs() -> Vec<NewEvent> {
        let day = dates::mar_15_2024();
        vec![
            NewEvent::new("A", dates::at(day, 9, 0), dates::at(day, 9, 30)).unwrap(),
            NewEvent::new("B", dates::at(day, 9, 15), dates::at(day, 10, 0)).unwrap(),
            NewEvent::new("C", dates::at(day, 10, 0), dates::at(day, 10, 30)).unwrap(),
        ]
    }

    pub fn standup() -> NewEvent {
        let day = dates::mar_15_2024();
        let mut input = NewEvent::new("Team Standup", dates::at(day, 9, 0), dates::at(day, 9, 30)).unwrap();
        input.description = Some("Daily sync with the team".to_string());
        input.color = Some("#3b82f6".to_string());
        input.category = Some("Meeting".to_string());
        input
    }

    /// Manager seeded through `create`, with the notification queue drained.
    pub fn manager_with(inputs: Vec<NewEvent>) -> (EventManager, Vec<Event>) {
        let mut manager = EventManager::new();
        let created = inputs
            .into_iter()
            .map(|input| manager.create(input).unwrap())
            .collect();
        manager.drain_changes();
        (manager, created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::mar_15_2024().weekday(), chrono::Weekday::Fri);
        assert_eq!(dates::leap_day_2024().day(), 29);
    }
}

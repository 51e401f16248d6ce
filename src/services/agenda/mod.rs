//! Day-by-day list view used on narrow screens.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::services::index::EventIndex;
use crate::services::navigation::Direction;
use crate::utils::date::month_days;

/// One row of the month agenda.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgendaDay<'a> {
    pub date: NaiveDate,
    pub events: &'a [Event],
}

impl AgendaDay<'_> {
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Every day of the month containing `month`, each paired with its events.
pub fn month_agenda(month: NaiveDate, index: &EventIndex) -> Vec<AgendaDay<'_>> {
    month_days(month)
        .into_iter()
        .map(|date| AgendaDay {
            date,
            events: index.events_on(date),
        })
        .collect()
}

/// Events ordered by start; equal starts keep their input order.
pub fn upcoming(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|event| event.start);
    sorted
}

/// Month direction of a horizontal swipe.
///
/// A leftward drag longer than `threshold` pixels moves forward, a rightward
/// one backward. Without both touch positions there is no swipe.
pub fn swipe(start_x: Option<f32>, end_x: Option<f32>, threshold: f32) -> Option<Direction> {
    let distance = start_x? - end_x?;
    if distance > threshold {
        Some(Direction::Forward)
    } else if distance < -threshold {
        Some(Direction::Backward)
    } else {
        None
    }
}

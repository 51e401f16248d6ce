//! Overlap layout for time-axis views.
//!
//! Events of a single day are packed greedily into columns: each event goes
//! into the leftmost column whose previous event has already ended, or opens
//! a new column. Every event on the day then shares the final column count,
//! so an overlap late in the day narrows earlier events too.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::models::event::{Event, EventId};

pub mod week;

pub use week::{slot_count, DayColumn, DragSelection, WeekLayout};

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Shortest duration an event is drawn with, whatever its stored range.
pub const MIN_VISUAL_DURATION_MINUTES: i64 = 15;

/// Column assignment for one event within its day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnPlacement {
    pub event_id: EventId,
    pub column: usize,
    pub total_columns: usize,
}

impl ColumnPlacement {
    pub fn width_percent(&self) -> f64 {
        100.0 / self.total_columns.max(1) as f64
    }

    pub fn left_percent(&self) -> f64 {
        self.column as f64 * self.width_percent()
    }
}

/// Position of an event box inside a day column, in percent of the column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventGeometry {
    pub top_percent: f64,
    pub height_percent: f64,
    pub left_percent: f64,
    pub width_percent: f64,
}

impl EventGeometry {
    pub fn new(event: &Event, placement: &ColumnPlacement) -> Self {
        Self {
            top_percent: minutes_since_midnight(event.start) as f64 / MINUTES_PER_DAY * 100.0,
            height_percent: visual_duration_minutes(event) as f64 / MINUTES_PER_DAY * 100.0,
            left_percent: placement.left_percent(),
            width_percent: placement.width_percent(),
        }
    }
}

/// Column layout of one day's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    placements: Vec<ColumnPlacement>,
    total_columns: usize,
}

impl Default for DayLayout {
    fn default() -> Self {
        Self {
            placements: Vec::new(),
            total_columns: 1,
        }
    }
}

impl DayLayout {
    /// Compute column placements for events that all start on the same day.
    ///
    /// Events are ordered by start with ties kept in input order, so the same
    /// input always yields the same layout.
    ///
    /// Columns are packed by each event's stored end, while geometry draws
    /// at least 15 minutes. A zero or negative duration event can therefore
    /// share a column with one starting right after it and be drawn over it.
    ///
    /// # Examples
    /// ```
    /// use calendar_engine::models::event::NewEvent;
    /// use calendar_engine::services::event::EventManager;
    /// use calendar_engine::services::layout::DayLayout;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
    ///
    /// let mut manager = EventManager::new();
    /// let a = manager.create(NewEvent::new("A", at(9, 0), at(9, 30)).unwrap()).unwrap();
    /// let b = manager.create(NewEvent::new("B", at(9, 15), at(10, 0)).unwrap()).unwrap();
    ///
    /// let layout = DayLayout::compute(manager.events());
    /// assert_eq!(layout.total_columns(), 2);
    /// assert_eq!(layout.get(&a.id).unwrap().column, 0);
    /// assert_eq!(layout.get(&b.id).unwrap().column, 1);
    /// ```
    pub fn compute(events: &[Event]) -> Self {
        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by_key(|event| event.start);

        // end instant of the most recently placed event in each column
        let mut column_ends: Vec<NaiveDateTime> = Vec::new();
        let mut assigned: Vec<(EventId, usize)> = Vec::with_capacity(sorted.len());

        for event in sorted {
            let column = match column_ends.iter().position(|end| *end <= event.start) {
                Some(column) => {
                    column_ends[column] = event.end;
                    column
                }
                None => {
                    column_ends.push(event.end);
                    column_ends.len() - 1
                }
            };
            assigned.push((event.id.clone(), column));
        }

        let total_columns = column_ends.len().max(1);
        let placements = assigned
            .into_iter()
            .map(|(event_id, column)| ColumnPlacement {
                event_id,
                column,
                total_columns,
            })
            .collect();

        Self {
            placements,
            total_columns,
        }
    }

    /// Placements in start order.
    pub fn placements(&self) -> &[ColumnPlacement] {
        &self.placements
    }

    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    pub fn get(&self, event_id: &str) -> Option<&ColumnPlacement> {
        self.placements.iter().find(|p| p.event_id == event_id)
    }

    /// Geometry for `event`, if it was part of this layout.
    pub fn geometry_for(&self, event: &Event) -> Option<EventGeometry> {
        self.get(&event.id)
            .map(|placement| EventGeometry::new(event, placement))
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Whole minutes elapsed since midnight; seconds are ignored.
pub fn minutes_since_midnight(instant: NaiveDateTime) -> i64 {
    instant.hour() as i64 * 60 + instant.minute() as i64
}

/// Drawn duration: the stored duration floored to fifteen minutes.
pub fn visual_duration_minutes(event: &Event) -> i64 {
    event.duration().num_minutes().max(MIN_VISUAL_DURATION_MINUTES)
}

//! Week time-grid layout and drag-to-create selection.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::{DayLayout, MINUTES_PER_DAY, MIN_VISUAL_DURATION_MINUTES};
use crate::models::calendar::WeekStart;
use crate::models::event::{Event, NewEvent};
use crate::models::settings::Settings;
use crate::services::index::EventIndex;
use crate::utils::date::{start_of_day, week_days};

/// One day of the week view with its events and their columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub events: Vec<Event>,
    pub layout: DayLayout,
}

/// Seven day columns of the week containing a reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout {
    days: Vec<DayColumn>,
}

impl WeekLayout {
    /// Columns for the week containing `date`; empty when that week runs
    /// outside chrono's date range.
    pub fn build(date: NaiveDate, week_start: WeekStart, index: &EventIndex) -> Self {
        let days = week_days(date, week_start)
            .into_iter()
            .flatten()
            .map(|day| {
                let events = index.events_on(day).to_vec();
                let layout = DayLayout::compute(&events);
                DayColumn {
                    date: day,
                    events,
                    layout,
                }
            })
            .collect();

        Self { days }
    }

    pub fn days(&self) -> &[DayColumn] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&DayColumn> {
        self.days.get(index)
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|column| column.date).collect()
    }
}

/// Number of horizontal grid lines drawn for a slot interval.
pub fn slot_count(interval_minutes: u32) -> usize {
    if interval_minutes == 0 {
        return 0;
    }
    (24 * 60 / interval_minutes) as usize
}

/// In-progress drag on a day column, measured in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSelection {
    pub day_index: usize,
    pub start_minute: i64,
    pub end_minute: i64,
}

impl DragSelection {
    /// Start a selection at a vertical position given as a fraction of the column height.
    pub fn begin(day_index: usize, y_fraction: f64, interval_minutes: u32) -> Self {
        let start_minute = minute_at(y_fraction);
        Self {
            day_index,
            start_minute,
            end_minute: start_minute + interval_minutes as i64,
        }
    }

    /// Extend the selection; moves over other columns are ignored.
    pub fn update(&mut self, day_index: usize, y_fraction: f64) {
        if day_index != self.day_index {
            return;
        }
        self.end_minute = minute_at(y_fraction).max(self.start_minute + MIN_VISUAL_DURATION_MINUTES);
    }

    pub fn top_percent(&self) -> f64 {
        self.start_minute as f64 / MINUTES_PER_DAY * 100.0
    }

    pub fn height_percent(&self) -> f64 {
        (self.end_minute - self.start_minute) as f64 / MINUTES_PER_DAY * 100.0
    }

    /// Turn the selection into event input on the corresponding day.
    ///
    /// Returns `None` when the release happens over another column or the
    /// selection's day is not part of `week`.
    pub fn finish(&self, day_index: usize, week: &WeekLayout, settings: &Settings) -> Option<NewEvent> {
        if day_index != self.day_index {
            return None;
        }
        let day = week.day(self.day_index)?.date;
        let midnight = start_of_day(day);

        Some(NewEvent {
            title: settings.new_event_title.clone(),
            description: None,
            start: midnight.checked_add_signed(Duration::minutes(self.start_minute))?,
            end: midnight.checked_add_signed(Duration::minutes(self.end_minute))?,
            color: Some(settings.default_event_color.clone()),
            category: None,
        })
    }
}

fn minute_at(y_fraction: f64) -> i64 {
    let fraction = if y_fraction.is_finite() {
        y_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (fraction * MINUTES_PER_DAY).round() as i64
}

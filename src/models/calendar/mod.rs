//! Calendar grid model.
//! Week-start convention, month grids and the date constraints that gate
//! keyboard navigation.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while constructing calendar values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Week start must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidWeekStart(u8),
}

/// First weekday of a displayed week, 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekStart(u8);

impl WeekStart {
    pub const SUNDAY: WeekStart = WeekStart(0);
    pub const MONDAY: WeekStart = WeekStart(1);

    /// Create a week start from a day index counted from Sunday.
    ///
    /// # Examples
    /// ```
    /// use calendar_engine::models::calendar::WeekStart;
    ///
    /// assert!(WeekStart::new(1).is_ok());
    /// assert!(WeekStart::new(7).is_err());
    /// ```
    pub fn new(days_from_sunday: u8) -> Result<Self, CalendarError> {
        if days_from_sunday > 6 {
            return Err(CalendarError::InvalidWeekStart(days_from_sunday));
        }
        Ok(Self(days_from_sunday))
    }

    pub fn days_from_sunday(self) -> u8 {
        self.0
    }

    /// The weekday this convention starts on.
    pub fn weekday(self) -> Weekday {
        (0..self.0).fold(Weekday::Sun, |day, _| day.succ())
    }

    /// Number of days between the start of `date`'s week and `date` itself.
    pub fn offset_of(self, date: NaiveDate) -> i64 {
        let weekday = date.weekday().num_days_from_sunday() as i64;
        (weekday - self.0 as i64 + 7) % 7
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for WeekStart {
    fn from(day: Weekday) -> Self {
        Self(day.num_days_from_sunday() as u8)
    }
}

impl From<WeekStart> for u8 {
    fn from(week_start: WeekStart) -> Self {
        week_start.0
    }
}

/// A single cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for leading/trailing padding days from adjacent months.
    pub in_month: bool,
}

/// Whole weeks covering a month, padded with days of the adjacent months.
///
/// Built by [`crate::utils::date::month_grid`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    week_start: WeekStart,
    weeks: Vec<[NaiveDate; 7]>,
}

impl MonthGrid {
    pub(crate) fn new(month: NaiveDate, week_start: WeekStart, weeks: Vec<[NaiveDate; 7]>) -> Self {
        Self {
            month,
            week_start,
            weeks,
        }
    }

    /// First day of the month this grid displays.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn weeks(&self) -> &[[NaiveDate; 7]] {
        &self.weeks
    }

    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn cell_count(&self) -> usize {
        self.weeks.len() * 7
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.weeks.first().map(|week| week[0])
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|week| week[6])
    }

    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.month.year() && date.month() == self.month.month()
    }

    /// Whether this grid is still valid for the given month and week start.
    pub fn is_for(&self, date: NaiveDate, week_start: WeekStart) -> bool {
        self.week_start == week_start && self.is_in_month(date)
    }

    /// Cells in row-major order with their out-of-month flag.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.weeks.iter().flatten().map(move |&date| GridCell {
            date,
            in_month: self.is_in_month(date),
        })
    }
}

/// Predicate marking individual dates as unreachable.
pub type DisabledPredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

/// Bounds and predicate restricting which dates can receive focus or be selected.
///
/// Bounds are inclusive and compared at day granularity.
#[derive(Clone, Default)]
pub struct DateConstraints {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub disabled: Option<DisabledPredicate>,
}

impl DateConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        self.disabled = Some(Arc::new(predicate));
        self
    }
}

impl fmt::Debug for DateConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateConstraints")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("disabled", &self.disabled.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}

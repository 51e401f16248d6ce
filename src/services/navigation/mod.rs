//! Keyboard navigation over the month grid.
//!
//! [`reduce`] is a pure function from the focused date, a command and the
//! surrounding context to the next focus plus the notifications the
//! presentation layer should react to. [`CalendarState`] wraps it with the
//! state a calendar widget keeps between key presses.

use chrono::NaiveDate;

use crate::models::calendar::{DateConstraints, WeekStart};
use crate::utils::date::{
    add_days, add_months, add_weeks, add_years, clamp_date, days_in_month, grid_month_bounds,
    is_disabled, is_in_month, month_end, month_start, week_end_of, week_start_of,
};

mod keys;
mod state;

pub use keys::Key;
pub use state::CalendarState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    StepDay(Direction),
    StepWeek(Direction),
    StepMonth(Direction),
    StepYear(Direction),
    /// Jump to the first day of the focused week
    WeekStart,
    /// Jump to the last day of the focused week
    WeekEnd,
    /// Select the focused date
    Commit,
}

impl NavCommand {
    /// Months the visible month moves by, for commands that change it.
    fn visible_month_delta(self) -> Option<i32> {
        match self {
            NavCommand::StepMonth(direction) => Some(direction.sign()),
            NavCommand::StepYear(direction) => Some(12 * direction.sign()),
            _ => None,
        }
    }
}

/// Notifications produced by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The displayed month changed; carries its first day.
    VisibleMonthChanged(NaiveDate),
    SelectionCommitted(NaiveDate),
}

/// Everything a navigation step depends on besides the focused date.
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
    /// First day of the displayed month
    pub visible_month: NaiveDate,
    pub week_start: WeekStart,
    pub constraints: &'a DateConstraints,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOutcome {
    pub focused: NaiveDate,
    pub visible_month: NaiveDate,
    pub events: Vec<NavEvent>,
}

/// Date a movement command would focus, ignoring constraints.
///
/// `None` for [`NavCommand::Commit`] and when the step leaves chrono's range.
pub fn candidate(focused: NaiveDate, command: NavCommand, week_start: WeekStart) -> Option<NaiveDate> {
    match command {
        NavCommand::StepDay(direction) => add_days(focused, direction.sign() as i64),
        NavCommand::StepWeek(direction) => add_weeks(focused, direction.sign() as i64),
        NavCommand::StepMonth(direction) => add_months(focused, direction.sign()),
        NavCommand::StepYear(direction) => add_years(focused, direction.sign()),
        NavCommand::WeekStart => week_start_of(focused, week_start),
        NavCommand::WeekEnd => week_end_of(focused, week_start),
        NavCommand::Commit => None,
    }
}

/// Apply one command.
///
/// A movement whose target is disabled leaves focus where it is. Month and
/// year steps also move the visible month (kept inside the min/max bounds);
/// when that happens and focus ends up outside the new month, focus is
/// re-clamped into it.
pub fn reduce(focused: NaiveDate, command: NavCommand, ctx: &NavContext<'_>) -> NavOutcome {
    let mut events = Vec::new();

    if command == NavCommand::Commit {
        if is_disabled(focused, ctx.constraints) {
            log::debug!("Commit rejected, {} is disabled", focused);
        } else {
            events.push(NavEvent::SelectionCommitted(focused));
        }
        return NavOutcome {
            focused,
            visible_month: ctx.visible_month,
            events,
        };
    }

    let next = match candidate(focused, command, ctx.week_start) {
        Some(target) if !is_disabled(target, ctx.constraints) => target,
        target => {
            log::debug!("{:?} from {} rejected (target {:?})", command, focused, target);
            focused
        }
    };

    let mut visible_month = ctx.visible_month;
    if let Some(delta) = command.visible_month_delta() {
        if let Some(target) = add_months(ctx.visible_month, delta) {
            let target = visible_month_for(target, ctx.constraints);
            if target != visible_month {
                visible_month = target;
                events.push(NavEvent::VisibleMonthChanged(target));
            }
        }
    }

    let focused = if visible_month != ctx.visible_month {
        refocus(next, visible_month, ctx.constraints)
    } else {
        next
    };

    NavOutcome {
        focused,
        visible_month,
        events,
    }
}

/// First day of the month that should be displayed for `date`, with `date`
/// first clamped into the constraint bounds and then into the months that
/// have a full grid.
pub fn visible_month_for(date: NaiveDate, constraints: &DateConstraints) -> NaiveDate {
    let (first, last) = grid_month_bounds();
    let date = clamp_date(date, constraints.min, constraints.max);
    month_start(clamp_date(date, Some(first), Some(month_end(last))))
}

/// Keep `focused` if it is an enabled day of `visible_month`; otherwise move
/// it to the first enabled day of that month.
///
/// When the month has no enabled day, an in-month focus stays put and an
/// outside focus lands on the month's first day.
pub fn refocus(focused: NaiveDate, visible_month: NaiveDate, constraints: &DateConstraints) -> NaiveDate {
    let in_month = is_in_month(focused, visible_month);
    if in_month && !is_disabled(focused, constraints) {
        return focused;
    }

    let first = month_start(visible_month);
    first
        .iter_days()
        .take(days_in_month(first) as usize)
        .find(|day| !is_disabled(*day, constraints))
        .unwrap_or(if in_month { focused } else { first })
}

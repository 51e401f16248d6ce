use chrono::NaiveDate;

use super::{reduce, refocus, visible_month_for, Key, NavCommand, NavContext, NavEvent};
use crate::models::calendar::{DateConstraints, MonthGrid, WeekStart};
use crate::models::settings::Settings;
use crate::models::ui::ViewType;
use crate::utils::date::{add_months, is_disabled, month_grid, month_label, weekday_labels};

/// Navigation state of one calendar instance.
///
/// Focus is the keyboard cursor; `selected` is the last committed choice.
/// The month grid is rebuilt whenever the visible month or week start changes.
#[derive(Debug, Clone)]
pub struct CalendarState {
    visible_month: NaiveDate,
    focused: NaiveDate,
    selected: Option<NaiveDate>,
    view: ViewType,
    week_start: WeekStart,
    constraints: DateConstraints,
    grid: MonthGrid,
}

impl CalendarState {
    /// Open the calendar on `today`'s month (clamped into the bounds).
    pub fn new(today: NaiveDate, week_start: WeekStart, constraints: DateConstraints) -> Self {
        let visible_month = visible_month_for(today, &constraints);
        let focused = refocus(today, visible_month, &constraints);
        Self {
            visible_month,
            focused,
            selected: None,
            view: ViewType::default(),
            week_start,
            grid: build_grid(visible_month, week_start),
            constraints,
        }
    }

    pub fn from_settings(today: NaiveDate, settings: &Settings, constraints: DateConstraints) -> Self {
        let mut state = Self::new(today, settings.week_start(), constraints);
        state.view = settings.default_view;
        state
    }

    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    pub fn focused(&self) -> NaiveDate {
        self.focused
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn constraints(&self) -> &DateConstraints {
        &self.constraints
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn weekday_labels(&self) -> [String; 7] {
        weekday_labels(self.week_start)
    }

    pub fn month_label(&self) -> String {
        month_label(self.visible_month)
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        is_disabled(date, &self.constraints)
    }

    /// Apply a navigation command and return the resulting notifications.
    pub fn apply(&mut self, command: NavCommand) -> Vec<NavEvent> {
        let ctx = NavContext {
            visible_month: self.visible_month,
            week_start: self.week_start,
            constraints: &self.constraints,
        };
        let outcome = reduce(self.focused, command, &ctx);

        self.focused = outcome.focused;
        if outcome.visible_month != self.visible_month {
            self.visible_month = outcome.visible_month;
            self.regrid();
        }
        for event in &outcome.events {
            if let NavEvent::SelectionCommitted(date) = event {
                self.selected = Some(*date);
            }
        }

        outcome.events
    }

    pub fn handle_key(&mut self, key: Key, shift: bool) -> Vec<NavEvent> {
        self.apply(key.command(shift))
    }

    /// Display the month containing `date`, as prev/next/today buttons and
    /// swipes do. Focus is re-clamped into the new month.
    pub fn set_visible_month(&mut self, date: NaiveDate) -> Vec<NavEvent> {
        let target = visible_month_for(date, &self.constraints);
        if target == self.visible_month {
            return Vec::new();
        }

        self.visible_month = target;
        self.focused = refocus(self.focused, target, &self.constraints);
        self.regrid();
        vec![NavEvent::VisibleMonthChanged(target)]
    }

    pub fn next_month(&mut self) -> Vec<NavEvent> {
        self.shift_visible_month(1)
    }

    pub fn previous_month(&mut self) -> Vec<NavEvent> {
        self.shift_visible_month(-1)
    }

    pub fn go_to_today(&mut self, today: NaiveDate) -> Vec<NavEvent> {
        self.set_visible_month(today)
    }

    /// Record an externally made selection; focus follows it.
    pub fn set_selected(&mut self, date: Option<NaiveDate>) {
        self.selected = date;
        if let Some(date) = date {
            self.focused = date;
        }
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    pub fn set_week_start(&mut self, week_start: WeekStart) {
        if self.week_start != week_start {
            self.week_start = week_start;
            self.regrid();
        }
    }

    /// Replace the constraints; the visible month is pulled back inside the
    /// new bounds and focus moves off any date they disable.
    pub fn set_constraints(&mut self, constraints: DateConstraints) -> Vec<NavEvent> {
        self.constraints = constraints;
        let current = self.visible_month;
        let events = self.set_visible_month(current);
        self.focused = refocus(self.focused, self.visible_month, &self.constraints);
        events
    }

    fn shift_visible_month(&mut self, months: i32) -> Vec<NavEvent> {
        match add_months(self.visible_month, months) {
            Some(target) => self.set_visible_month(target),
            None => Vec::new(),
        }
    }

    fn regrid(&mut self) {
        if !self.grid.is_for(self.visible_month, self.week_start) {
            log::debug!(
                "Rebuilding grid for {} (week start {})",
                self.visible_month,
                self.week_start.days_from_sunday()
            );
            self.grid = build_grid(self.visible_month, self.week_start);
        }
    }
}

/// Grid for a visible month. Visible months are kept inside
/// [`crate::utils::date::grid_month_bounds`], so the empty fallback is never displayed.
fn build_grid(month: NaiveDate, week_start: WeekStart) -> MonthGrid {
    month_grid(month, week_start).unwrap_or_else(|| {
        log::warn!("No grid for {}, showing an empty month", month);
        MonthGrid::new(month, week_start, Vec::new())
    })
}

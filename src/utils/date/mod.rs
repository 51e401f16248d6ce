// Date utility functions
// Month grids, weekday labels, calendar stepping and constraint checks

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::calendar::{DateConstraints, MonthGrid, WeekStart};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

/// Day-level equality that treats a missing side as "not the same".
pub fn is_same_date(date1: Option<NaiveDate>, date2: Option<NaiveDate>) -> bool {
    matches!((date1, date2), (Some(a), Some(b)) if a == b)
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.day0() as u64)
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    match date.month() {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date) + Days::new(days_in_month(date) as u64 - 1)
}

pub fn is_in_month(day: NaiveDate, month: NaiveDate) -> bool {
    day.year() == month.year() && day.month() == month.month()
}

/// Every day of `date`'s month, in order.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    let first = month_start(date);
    first.iter_days().take(days_in_month(date) as usize).collect()
}

/// e.g. "March 2024"
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Calculate the start of the week containing the given date.
///
/// `None` when that week begins before chrono's first representable day.
pub fn week_start_of(date: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
    add_days(date, -week_start.offset_of(date))
}

pub fn week_end_of(date: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
    add_days(week_start_of(date, week_start)?, 6)
}

/// The seven consecutive days of the week containing `date`.
pub fn week_days(date: NaiveDate, week_start: WeekStart) -> Option<[NaiveDate; 7]> {
    let start = week_start_of(date, week_start)?;
    add_days(start, 6)?;
    Some(std::array::from_fn(|i| start + Days::new(i as u64)))
}

/// First and last months whose padded grids fit inside chrono's date range.
pub fn grid_month_bounds() -> (NaiveDate, NaiveDate) {
    let first = add_months(month_start(NaiveDate::MIN), 1).unwrap_or(NaiveDate::MIN);
    let last = add_months(month_start(NaiveDate::MAX), -1).unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Build the grid of whole weeks covering `date`'s month.
///
/// `None` for the months at either end of chrono's range, whose padding
/// days do not exist.
///
/// The grid runs from the start of the week holding the 1st through the end
/// of the week holding the last day; padding days stay in the grid and are
/// flagged by [`MonthGrid::cells`].
///
/// # Examples
/// ```
/// use calendar_engine::models::calendar::WeekStart;
/// use calendar_engine::utils::date::month_grid;
/// use chrono::NaiveDate;
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let grid = month_grid(march, WeekStart::SUNDAY).unwrap();
/// assert_eq!(grid.row_count(), 6);
/// assert_eq!(grid.first_day(), NaiveDate::from_ymd_opt(2024, 2, 25));
/// ```
pub fn month_grid(date: NaiveDate, week_start: WeekStart) -> Option<MonthGrid> {
    let first = month_start(date);
    let start = week_start_of(first, week_start)?;
    let end = week_end_of(month_end(date), week_start)?;

    let mut weeks = Vec::with_capacity(6);
    let mut row_start = Some(start);
    while let Some(cursor) = row_start.filter(|cursor| *cursor <= end) {
        weeks.push(std::array::from_fn(|i| cursor + Days::new(i as u64)));
        row_start = add_days(cursor, 7);
    }

    Some(MonthGrid::new(first, week_start, weeks))
}

/// Short weekday names ("Sun", "Mon", ...) beginning with `week_start`.
pub fn weekday_labels(week_start: WeekStart) -> [String; 7] {
    let mut day = week_start.weekday();
    std::array::from_fn(|_| {
        let label = day.to_string();
        day = day.succ();
        label
    })
}

pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    add_days(date, weeks.checked_mul(7)?)
}

/// Calendar month addition; the day of month is clamped to the target month's length.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Calendar year addition; Feb 29 lands on Feb 28 in non-leap years.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months(date, years.checked_mul(12)?)
}

/// Clamp `date` into `[min, max]`.
///
/// When the bounds are inverted `min` wins, which keeps the function idempotent.
pub fn clamp_date(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    let date = max.map_or(date, |max| date.min(max));
    min.map_or(date, |min| date.max(min))
}

/// True if the date is outside the bounds or rejected by the predicate.
pub fn is_disabled(date: NaiveDate, constraints: &DateConstraints) -> bool {
    if constraints.min.is_some_and(|min| date < min) {
        return true;
    }
    if constraints.max.is_some_and(|max| date > max) {
        return true;
    }
    constraints
        .disabled
        .as_ref()
        .is_some_and(|predicate| predicate(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_march_2024_sunday_grid() {
        let grid = month_grid(date(2024, 3, 15), WeekStart::SUNDAY).unwrap();

        assert_eq!(grid.row_count(), 6);
        assert_eq!(grid.cell_count(), 42);
        assert_eq!(grid.first_day(), Some(date(2024, 2, 25)));
        assert_eq!(grid.last_day(), Some(date(2024, 4, 6)));
        assert_eq!(grid.month(), date(2024, 3, 1));
    }

    #[test]
    fn test_grid_with_no_padding() {
        // February 2015 starts on a Sunday and has exactly four weeks
        let grid = month_grid(date(2015, 2, 10), WeekStart::SUNDAY).unwrap();
        assert_eq!(grid.row_count(), 4);
        assert!(grid.cells().all(|cell| cell.in_month));
    }

    #[test]
    fn test_grid_monday_start() {
        let grid = month_grid(date(2024, 3, 1), WeekStart::MONDAY).unwrap();
        assert_eq!(grid.first_day(), Some(date(2024, 2, 26)));
        assert_eq!(grid.last_day(), Some(date(2024, 3, 31)));
        assert_eq!(grid.row_count(), 5);
        assert!(grid.weeks().iter().all(|week| week[0].weekday() == Weekday::Mon));
    }

    #[test_case(0, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]; "sunday first")]
    #[test_case(1, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]; "monday first")]
    #[test_case(6, ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]; "saturday first")]
    fn test_weekday_labels(week_start: u8, expected: [&str; 7]) {
        let labels = weekday_labels(WeekStart::new(week_start).unwrap());
        assert_eq!(labels, expected.map(String::from));
    }

    #[test_case(date(2024, 1, 31), 1, date(2024, 2, 29); "clamps into leap february")]
    #[test_case(date(2023, 1, 31), 1, date(2023, 2, 28); "clamps into february")]
    #[test_case(date(2024, 3, 31), -1, date(2024, 2, 29); "backwards clamp")]
    #[test_case(date(2024, 5, 15), 12, date(2025, 5, 15); "twelve months")]
    #[test_case(date(2024, 1, 15), -13, date(2022, 12, 15); "crosses two years back")]
    fn test_add_months(start: NaiveDate, months: i32, expected: NaiveDate) {
        assert_eq!(add_months(start, months), Some(expected));
    }

    #[test]
    fn test_add_days_weeks_years() {
        assert_eq!(add_days(date(2024, 2, 28), 2), Some(date(2024, 3, 1)));
        assert_eq!(add_days(date(2024, 3, 1), -1), Some(date(2024, 2, 29)));
        assert_eq!(add_weeks(date(2024, 12, 30), 1), Some(date(2025, 1, 6)));
        assert_eq!(add_weeks(date(2024, 1, 3), -1), Some(date(2023, 12, 27)));
        assert_eq!(add_years(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
        assert_eq!(add_years(date(2024, 2, 29), -4), Some(date(2020, 2, 29)));
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_week_bounds() {
        let friday = date(2024, 3, 1);
        assert_eq!(week_start_of(friday, WeekStart::SUNDAY), Some(date(2024, 2, 25)));
        assert_eq!(week_end_of(friday, WeekStart::SUNDAY), Some(date(2024, 3, 2)));
        assert_eq!(week_start_of(friday, WeekStart::MONDAY), Some(date(2024, 2, 26)));

        let days = week_days(friday, WeekStart::MONDAY).unwrap();
        assert_eq!(days[0], date(2024, 2, 26));
        assert_eq!(days[6], date(2024, 3, 3));
    }

    #[test]
    fn test_grid_at_range_ends_is_none() {
        // a week starting on the last day runs past it
        let from_max = WeekStart::from(NaiveDate::MAX.weekday());
        assert_eq!(week_start_of(NaiveDate::MAX, from_max), Some(NaiveDate::MAX));
        assert_eq!(week_end_of(NaiveDate::MAX, from_max), None);
        assert_eq!(week_days(NaiveDate::MAX, from_max), None);
        assert_eq!(week_start_of(NaiveDate::MIN, WeekStart::from(NaiveDate::MIN.weekday().succ())), None);

        // some week start always pads past the last day
        assert!((0..=6u8).any(|ws| month_grid(NaiveDate::MAX, WeekStart::new(ws).unwrap()).is_none()));
        assert!((0..=6u8).any(|ws| month_grid(NaiveDate::MIN, WeekStart::new(ws).unwrap()).is_none()));
    }

    #[test]
    fn test_grid_month_bounds_always_build() {
        let (first, last) = grid_month_bounds();
        for ws in 0..=6u8 {
            let week_start = WeekStart::new(ws).unwrap();
            assert!(month_grid(first, week_start).is_some());
            assert!(month_grid(last, week_start).is_some());
        }
        assert_eq!(first, add_months(month_start(NaiveDate::MIN), 1).unwrap());
        assert_eq!(last.day(), 1);
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2100, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 4, 10)), 30);
        assert_eq!(month_end(date(2024, 12, 5)), date(2024, 12, 31));
        assert_eq!(month_days(date(2024, 2, 10)).len(), 29);
        assert_eq!(month_label(date(2024, 3, 10)), "March 2024");
        assert!(is_in_month(date(2024, 3, 31), date(2024, 3, 1)));
        assert!(!is_in_month(date(2023, 3, 31), date(2024, 3, 1)));
    }

    #[test]
    fn test_clamp_date() {
        let min = Some(date(2024, 3, 10));
        let max = Some(date(2024, 3, 20));

        assert_eq!(clamp_date(date(2024, 3, 1), min, max), date(2024, 3, 10));
        assert_eq!(clamp_date(date(2024, 3, 25), min, max), date(2024, 3, 20));
        assert_eq!(clamp_date(date(2024, 3, 15), min, max), date(2024, 3, 15));
        assert_eq!(clamp_date(date(2024, 3, 15), None, None), date(2024, 3, 15));
    }

    #[test]
    fn test_clamp_inverted_bounds_is_idempotent() {
        let min = Some(date(2024, 3, 20));
        let max = Some(date(2024, 3, 10));
        let once = clamp_date(date(2024, 3, 25), min, max);
        assert_eq!(once, date(2024, 3, 20));
        assert_eq!(clamp_date(once, min, max), once);
    }

    #[test]
    fn test_is_disabled() {
        let constraints = DateConstraints::new()
            .with_min(date(2024, 3, 10))
            .with_max(date(2024, 3, 20))
            .with_predicate(|d| d.weekday() == Weekday::Sun);

        assert!(is_disabled(date(2024, 3, 9), &constraints));
        assert!(!is_disabled(date(2024, 3, 10), &constraints));
        assert!(!is_disabled(date(2024, 3, 20), &constraints));
        assert!(is_disabled(date(2024, 3, 21), &constraints));
        // 2024-03-17 is a Sunday
        assert!(is_disabled(date(2024, 3, 17), &constraints));
        assert!(!is_disabled(date(2000, 1, 1), &DateConstraints::default()));
    }

    #[test]
    fn test_same_day_helpers() {
        let morning = date(2024, 3, 15).and_hms_opt(8, 0, 0).unwrap();
        let evening = date(2024, 3, 15).and_hms_opt(22, 30, 0).unwrap();
        assert!(is_same_day(morning, evening));
        assert!(!is_same_day(morning, start_of_day(date(2024, 3, 16))));

        assert!(is_same_date(Some(date(2024, 3, 15)), Some(date(2024, 3, 15))));
        assert!(!is_same_date(Some(date(2024, 3, 15)), None));
        assert!(!is_same_date(None, None));
    }
}

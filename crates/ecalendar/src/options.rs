//! The enumerated choices offered by the month and year dropdowns.
//!
//! Each dropdown has its own option type, so a month index can never be mistaken for a year.

use std::ops::RangeInclusive;

use crate::{CalendarDate, DateRange, MONTH_NAMES};

/// How many years before today the year dropdown reaches when there is no lower bound.
pub const DEFAULT_YEARS_BEFORE: i32 = 100;

/// How many years after today the year dropdown reaches when there is no upper bound.
pub const DEFAULT_YEARS_AFTER: i32 = 10;

/// An entry of the month dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthOption {
    /// Zero-based, `0..=11`.
    pub index: u8,
}

impl MonthOption {
    #[inline]
    pub fn label(self) -> &'static str {
        MONTH_NAMES[self.index as usize]
    }
}

/// All twelve months, January first.
pub fn month_options() -> impl ExactSizeIterator<Item = MonthOption> {
    (0..12).map(|index| MonthOption { index })
}

/// An entry of the year dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct YearOption {
    pub year: i32,
}

impl YearOption {
    #[inline]
    pub fn label(self) -> String {
        self.year.to_string()
    }
}

/// The span of years the year dropdown offers.
///
/// The lower end is the year of `range.min`, or [`DEFAULT_YEARS_BEFORE`] years before
/// `today`. The upper end is the year of `range.max`, or [`DEFAULT_YEARS_AFTER`] years after
/// `today`. The two ends are resolved independently, and never leave the supported years.
///
/// ```
/// # use ecalendar::{year_bounds, CalendarDate, DateRange};
/// let today = CalendarDate::new(2024, 5, 1).unwrap();
/// assert_eq!(year_bounds(today, DateRange::UNBOUNDED), 1924..=2034);
/// let max = CalendarDate::new(2026, 0, 1).unwrap();
/// assert_eq!(year_bounds(today, DateRange::at_most(max)), 1924..=2026);
/// ```
pub fn year_bounds(today: CalendarDate, range: DateRange) -> RangeInclusive<i32> {
    let start = range.min.map_or_else(
        || CalendarDate::clamp_year(today.year().saturating_sub(DEFAULT_YEARS_BEFORE)),
        CalendarDate::year,
    );
    let end = range.max.map_or_else(
        || CalendarDate::clamp_year(today.year().saturating_add(DEFAULT_YEARS_AFTER)),
        CalendarDate::year,
    );
    start..=end
}

/// The year dropdown entries, newest year first.
pub fn year_options(bounds: RangeInclusive<i32>) -> impl Iterator<Item = YearOption> {
    bounds.rev().map(|year| YearOption { year })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_in_order() {
        let labels: Vec<&str> = month_options().map(MonthOption::label).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "January");
        assert_eq!(labels[11], "December");
    }

    #[test]
    fn years_newest_first() {
        let years: Vec<i32> = year_options(2020..=2023).map(|o| o.year).collect();
        assert_eq!(years, [2023, 2022, 2021, 2020]);
        assert_eq!(YearOption { year: 1999 }.label(), "1999");
    }

    #[test]
    fn bounds_follow_range_years() {
        let today = CalendarDate::new(2024, 5, 1).unwrap();
        let min = CalendarDate::new(2019, 3, 4).unwrap();
        let max = CalendarDate::new(2030, 11, 31).unwrap();
        assert_eq!(year_bounds(today, DateRange::between(min, max)), 2019..=2030);
        assert_eq!(year_bounds(today, DateRange::at_least(min)), 2019..=2034);
    }

    #[test]
    fn bounds_stay_in_supported_years() {
        let last = CalendarDate::new(CalendarDate::MAX_YEAR, 5, 1).unwrap();
        let first = CalendarDate::new(CalendarDate::MIN_YEAR, 5, 1).unwrap();
        assert_eq!(
            year_bounds(last, DateRange::UNBOUNDED),
            (CalendarDate::MAX_YEAR - DEFAULT_YEARS_BEFORE)..=CalendarDate::MAX_YEAR
        );
        assert_eq!(
            year_bounds(first, DateRange::UNBOUNDED),
            CalendarDate::MIN_YEAR..=(CalendarDate::MIN_YEAR + DEFAULT_YEARS_AFTER)
        );
    }
}

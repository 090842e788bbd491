//! The calendar engine: stateless functions from a displayed month to the cells of its grid.
//!
//! Nothing in here reads the wall clock. Callers pass `today` explicitly.

use crate::{CalendarDate, MAX_GRID_CELLS};

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Short weekday names, indexed by weekday with Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[inline]
fn assert_month(month: u8) {
    assert!(month < 12, "month index {month} is out of range, expected 0-11");
}

/// Gregorian leap year rule.
///
/// ```
/// # use ecalendar::is_leap_year;
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month, `28..=31`.
///
/// # Panics
/// If `month` is not in `0..=11`. Out-of-range months are never wrapped into range.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    assert_month(month);
    match month {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Sakamoto's method, with floor division so that it holds for years before 1 as well.
pub(crate) fn weekday_of(year: i32, month: u8, day: u8) -> u8 {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = i64::from(year) - i64::from(month < 2);
    let w = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + OFFSETS[month as usize]
        + i64::from(day);
    w.rem_euclid(7) as u8
}

/// Weekday of the first of the month, `0` (Sunday) to `6` (Saturday).
///
/// This is also the number of blank cells before day 1 in a Sunday-first grid.
///
/// # Panics
/// If `month` is not in `0..=11`.
pub fn first_weekday_of_month(year: i32, month: u8) -> u8 {
    assert_month(month);
    weekday_of(year, month, 1)
}

/// The month after `(year, month)`, rolling December over into January of the next year.
///
/// ```
/// # use ecalendar::advance_month;
/// assert_eq!(advance_month(2024, 11), (2025, 0));
/// assert_eq!(advance_month(2024, 4), (2024, 5));
/// ```
///
/// December of [`CalendarDate::MAX_YEAR`] is the last month: advancing from it (or from any
/// December after it) returns the same month.
///
/// # Panics
/// If `month` is not in `0..=11`.
pub fn advance_month(year: i32, month: u8) -> (i32, u8) {
    assert_month(month);
    if month < 11 {
        (year, month + 1)
    } else if year < CalendarDate::MAX_YEAR {
        (year + 1, 0)
    } else {
        (year, month)
    }
}

/// The month before `(year, month)`, rolling January back into December of the previous year.
///
/// ```
/// # use ecalendar::retreat_month;
/// assert_eq!(retreat_month(2024, 0), (2023, 11));
/// ```
///
/// January of [`CalendarDate::MIN_YEAR`] is the first month: retreating from it (or from any
/// January before it) returns the same month.
///
/// # Panics
/// If `month` is not in `0..=11`.
pub fn retreat_month(year: i32, month: u8) -> (i32, u8) {
    assert_month(month);
    if month > 0 {
        (year, month - 1)
    } else if year > CalendarDate::MIN_YEAR {
        (year - 1, 11)
    } else {
        (year, month)
    }
}

/// Is `date` inside `[min, max]`? A missing bound does not constrain that side.
pub fn is_within_range(
    date: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
) -> bool {
    min.is_none_or(|min| min <= date) && max.is_none_or(|max| date <= max)
}

/// Optional inclusive bounds on which dates may be selected.
///
/// `min <= max` is the caller's responsibility. With `min > max` nothing is selectable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DateRange {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateRange {
    /// Every date is selectable.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    #[inline]
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    /// `min..`
    #[inline]
    pub fn at_least(min: CalendarDate) -> Self {
        Self::new(Some(min), None)
    }

    /// `..=max`
    #[inline]
    pub fn at_most(max: CalendarDate) -> Self {
        Self::new(None, Some(max))
    }

    /// `min..=max`
    #[inline]
    pub fn between(min: CalendarDate, max: CalendarDate) -> Self {
        Self::new(Some(min), Some(max))
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[inline]
    pub fn contains(&self, date: CalendarDate) -> bool {
        is_within_range(date, self.min, self.max)
    }
}

/// One cell of a month grid.
///
/// Padding cells fill the grid before day 1 so that every day lands in its weekday column.
/// They have `day == 0` and every other flag `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    /// `1..=31`, or `0` for padding.
    pub day: u8,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_selectable: bool,
    pub is_padding: bool,
}

impl DayCell {
    pub const PADDING: Self = Self {
        day: 0,
        is_selected: false,
        is_today: false,
        is_selectable: false,
        is_padding: true,
    };
}

/// The grid for one month: [`first_weekday_of_month`] padding cells, then one cell per day.
///
/// The result never holds more than [`MAX_GRID_CELLS`] cells. Split it into rows with
/// `cells.chunks(DAYS_PER_WEEK)`.
///
/// ```
/// # use ecalendar::{build_day_cells, CalendarDate, DateRange};
/// let today = CalendarDate::new(2024, 2, 10).unwrap();
/// let cells = build_day_cells(2024, 2, None, DateRange::UNBOUNDED, today);
/// assert_eq!(cells.iter().filter(|c| c.is_padding).count(), 5); // March 2024 starts on a Friday
/// assert_eq!(cells.len(), 5 + 31);
/// assert!(cells.iter().any(|c| c.day == 10 && c.is_today));
/// ```
///
/// # Panics
/// If `month` is not in `0..=11`, or `year` is outside
/// [`CalendarDate::MIN_YEAR`]`..=`[`CalendarDate::MAX_YEAR`].
pub fn build_day_cells(
    year: i32,
    month: u8,
    selected: Option<CalendarDate>,
    range: DateRange,
    today: CalendarDate,
) -> Vec<DayCell> {
    let padding = first_weekday_of_month(year, month) as usize;
    let num_days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(MAX_GRID_CELLS);
    cells.extend(std::iter::repeat_n(DayCell::PADDING, padding));
    cells.extend((1..=num_days).map(|day| {
        let date = CalendarDate::new(year, month, day)
            .unwrap_or_else(|err| unreachable!("{err}: day is within days_in_month"));
        DayCell {
            day,
            is_selected: selected == Some(date),
            is_today: date == today,
            is_selectable: range.contains(date),
            is_padding: false,
        }
    }));
    debug_assert!(cells.len() <= MAX_GRID_CELLS, "a month spans at most six weeks");
    cells
}

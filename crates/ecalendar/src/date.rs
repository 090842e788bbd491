use std::fmt;

use crate::{CalendarError, MONTH_NAMES, days_in_month, engine::weekday_of};

/// One day of the proleptic Gregorian calendar.
///
/// Always valid: there is no way to build a `CalendarDate` for February 30th.
/// Ordering and equality are by `(year, month, day)`, i.e. calendar order.
///
/// ```
/// # use ecalendar::CalendarDate;
/// let date = CalendarDate::new(2024, 1, 29).unwrap();
/// assert_eq!(date.month_name(), "February");
/// assert!(CalendarDate::new(2023, 1, 29).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "(i32, u8, u8)", into = "(i32, u8, u8)")
)]
pub struct CalendarDate {
    // Field order matters for the derived `Ord`.
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// The earliest supported year. Same as chrono's `NaiveDate::MIN`.
    pub const MIN_YEAR: i32 = -262_143;

    /// The latest supported year. Same as chrono's `NaiveDate::MAX`.
    pub const MAX_YEAR: i32 = 262_142;

    /// `month` is zero-based (`0..=11`), `day` is one-based.
    ///
    /// # Errors
    /// [`CalendarError::YearOutOfRange`] outside [`Self::MIN_YEAR`]`..=`[`Self::MAX_YEAR`].
    /// [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`] if the triple does
    /// not name a real day. Nothing is ever rolled over into the next month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !Self::is_supported_year(year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        if month >= 12 {
            return Err(CalendarError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Is `year` within [`Self::MIN_YEAR`]`..=`[`Self::MAX_YEAR`]?
    #[inline]
    pub fn is_supported_year(year: i32) -> bool {
        (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year)
    }

    /// Clamp `year` into the supported years.
    #[inline]
    pub fn clamp_year(year: i32) -> i32 {
        year.clamp(Self::MIN_YEAR, Self::MAX_YEAR)
    }

    /// The first day of the given month.
    ///
    /// # Errors
    /// [`CalendarError::InvalidMonth`] if `month` is not in `0..=11`.
    pub fn first_of_month(year: i32, month: u8) -> Result<Self, CalendarError> {
        Self::new(year, month, 1)
    }

    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Zero-based month, `0..=11`.
    #[inline]
    pub fn month(self) -> u8 {
        self.month
    }

    /// One-based day of the month.
    #[inline]
    pub fn day(self) -> u8 {
        self.day
    }

    /// Day of the week, `0` for Sunday up to `6` for Saturday.
    pub fn weekday(self) -> u8 {
        weekday_of(self.year, self.month, self.day)
    }

    /// English name of the month, e.g. `"March"`.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Same year and month as `other`?
    pub fn same_month_as(self, other: Self) -> bool {
        self.year == other.year && self.month == other.month
    }
}

/// ISO-8601 style, `2024-03-09`. Use [`crate::DateFormat`] for the picker's display formats.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year, date.month, date.day)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impl {
    use chrono::Datelike as _;

    use super::CalendarDate;

    impl From<chrono::NaiveDate> for CalendarDate {
        fn from(date: chrono::NaiveDate) -> Self {
            // chrono years, months and days are always in range, and its months are one-based.
            Self {
                year: date.year(),
                month: date.month0() as u8,
                day: date.day() as u8,
            }
        }
    }

    impl CalendarDate {
        /// `None` if the year is outside what [`chrono::NaiveDate`] can represent.
        pub fn to_naive_date(self) -> Option<chrono::NaiveDate> {
            chrono::NaiveDate::from_ymd_opt(
                self.year,
                u32::from(self.month) + 1,
                u32::from(self.day),
            )
        }
    }
}

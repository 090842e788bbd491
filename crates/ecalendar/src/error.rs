/// A value that does not name a real calendar day.
///
/// These are caller bugs, never user input errors: the date picker only ever offers
/// months and days that exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// See [`crate::CalendarDate::MIN_YEAR`] and [`crate::CalendarDate::MAX_YEAR`].
    #[error("year {0} is outside the supported calendar")]
    YearOutOfRange(i32),

    /// Month indices are zero-based, `0..=11`.
    #[error("month index {0} is out of range, expected 0-11")]
    InvalidMonth(u8),

    /// The day does not exist in that month, e.g. February 30th or day 0.
    #[error("day {day} does not exist in month index {month} of year {year}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

/// Failure to turn a display string back into a [`crate::CalendarDate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    /// The format pattern itself is not one we know.
    #[error("unknown date format {0:?}, expected one of \"dd/mm/yyyy\", \"mm/dd/yyyy\", \"yyyy-mm-dd\"")]
    UnknownFormat(String),

    /// The text does not have the shape of the format.
    #[error("{input:?} does not match the date format {pattern:?}")]
    Malformed {
        input: String,
        pattern: &'static str,
    },

    /// The text has the right shape, but names a day that does not exist.
    #[error(transparent)]
    Invalid(#[from] CalendarError),
}

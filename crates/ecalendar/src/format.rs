use std::{fmt, str::FromStr};

use crate::{CalendarDate, ParseDateError};

/// How a [`CalendarDate`] is shown in the picker's input.
///
/// Day and month are always zero-padded to two digits.
///
/// ```
/// # use ecalendar::{CalendarDate, DateFormat};
/// let date = CalendarDate::new(2024, 0, 5).unwrap();
/// assert_eq!(DateFormat::DayMonthYear.format(date), "05/01/2024");
/// assert_eq!(DateFormat::MonthDayYear.format(date), "01/05/2024");
/// assert_eq!(DateFormat::YearMonthDay.format(date), "2024-01-05");
/// assert_eq!("yyyy-mm-dd".parse(), Ok(DateFormat::YearMonthDay));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DateFormat {
    /// `dd/mm/yyyy`
    #[default]
    DayMonthYear,

    /// `mm/dd/yyyy`
    MonthDayYear,

    /// `yyyy-mm-dd`
    YearMonthDay,
}

impl DateFormat {
    pub const ALL: [Self; 3] = [Self::DayMonthYear, Self::MonthDayYear, Self::YearMonthDay];

    /// The pattern string, e.g. `"dd/mm/yyyy"`.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "dd/mm/yyyy",
            Self::MonthDayYear => "mm/dd/yyyy",
            Self::YearMonthDay => "yyyy-mm-dd",
        }
    }

    fn separator(self) -> char {
        match self {
            Self::DayMonthYear | Self::MonthDayYear => '/',
            Self::YearMonthDay => '-',
        }
    }

    pub fn format(self, date: CalendarDate) -> String {
        let day = date.day();
        let month = date.month() + 1;
        let year = date.year();
        match self {
            Self::DayMonthYear => format!("{day:02}/{month:02}/{year}"),
            Self::MonthDayYear => format!("{month:02}/{day:02}/{year}"),
            Self::YearMonthDay => format!("{year}-{month:02}-{day:02}"),
        }
    }

    /// Inverse of [`Self::format`]. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// [`ParseDateError::Malformed`] if the text does not have the shape of the pattern,
    /// [`ParseDateError::Invalid`] if it names a day that does not exist.
    pub fn parse(self, text: &str) -> Result<CalendarDate, ParseDateError> {
        let malformed = || ParseDateError::Malformed {
            input: text.to_owned(),
            pattern: self.pattern(),
        };

        let mut parts = text.trim().split(self.separator());
        let (Some(a), Some(b), Some(c), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let (year, month, day) = match self {
            Self::DayMonthYear => (c, b, a),
            Self::MonthDayYear => (c, a, b),
            Self::YearMonthDay => (a, b, c),
        };

        let two_digits = |s: &str| -> Option<u8> {
            (matches!(s.len(), 1 | 2) && s.bytes().all(|b| b.is_ascii_digit()))
                .then(|| s.parse().ok())
                .flatten()
        };
        let year: i32 = (!year.is_empty() && year.bytes().all(|b| b.is_ascii_digit()))
            .then(|| year.parse().ok())
            .flatten()
            .ok_or_else(malformed)?;
        let month = two_digits(month).ok_or_else(malformed)?;
        let day = two_digits(day).ok_or_else(malformed)?;

        // A month of "00" would otherwise underflow.
        let month0 = month.checked_sub(1).ok_or_else(malformed)?;
        Ok(CalendarDate::new(year, month0, day)?)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl FromStr for DateFormat {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.pattern().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDateError::UnknownFormat(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarError;

    #[test]
    fn formats_with_padding() {
        let date = CalendarDate::new(2024, 0, 5).unwrap();
        assert_eq!(DateFormat::default().format(date), "05/01/2024");
        assert_eq!(DateFormat::YearMonthDay.format(date), "2024-01-05");

        let date = CalendarDate::new(987, 11, 25).unwrap();
        assert_eq!(DateFormat::MonthDayYear.format(date), "12/25/987");
    }

    #[test]
    fn parses_what_it_formats() {
        let date = CalendarDate::new(2024, 1, 29).unwrap();
        for format in DateFormat::ALL {
            assert_eq!(format.parse(&format.format(date)), Ok(date), "{format}");
        }
        assert_eq!(
            DateFormat::DayMonthYear.parse(" 5/1/2024 "),
            Ok(CalendarDate::new(2024, 0, 5).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        let f = DateFormat::DayMonthYear;
        for text in [
            "",
            "05/01",
            "05/01/2024/1",
            "2024-01-05",
            "aa/01/2024",
            "005/01/2024",
            "05/00/2024",
            "+5/01/2024",
        ] {
            assert!(
                matches!(f.parse(text), Err(ParseDateError::Malformed { .. })),
                "{text:?}"
            );
        }
        assert_eq!(
            f.parse("31/04/2024"),
            Err(ParseDateError::Invalid(CalendarError::InvalidDay {
                year: 2024,
                month: 3,
                day: 31
            }))
        );
        assert_eq!(
            f.parse("01/13/2024"),
            Err(ParseDateError::Invalid(CalendarError::InvalidMonth(12)))
        );
    }

    #[test]
    fn pattern_strings() {
        for format in DateFormat::ALL {
            assert_eq!(format.pattern().parse(), Ok(format));
            assert_eq!(format.to_string(), format.pattern());
        }
        assert!(matches!(
            "dd.mm.yyyy".parse::<DateFormat>(),
            Err(ParseDateError::UnknownFormat(_))
        ));
    }
}

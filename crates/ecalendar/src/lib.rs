//! Calendar math and date-picker state for GUI work.
//!
//! This crate is built for the wants and needs of [`egui_datepicker`](https://github.com/emilk/egui/),
//! but has no dependency on any GUI library.
//!
//! The pieces:
//! * [`CalendarDate`]: a validated Gregorian `(year, month, day)` triple.
//! * The calendar engine ([`days_in_month`], [`build_day_cells`], [`advance_month`], …):
//!   pure functions that never read the wall clock. `today` is always passed in.
//! * [`NavigationState`]: what a date picker popup shows and what it has selected.
//! * [`DateFormat`]: the `dd/mm/yyyy`, `mm/dd/yyyy` and `yyyy-mm-dd` display formats.
//! * [`FieldBinding`] and [`FormField`]: how a selection reaches the host's form state.
//!
//! ## Conventions
//! Months are zero-based (`0` is January, `11` is December) and weekdays start on Sunday
//! (`0` is Sunday, `6` is Saturday). Days are one-based.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod binding;
mod date;
mod engine;
mod error;
mod format;
mod navigation;
mod options;

pub use binding::{FieldBinding, FormField, ValidationError, validate_all};
pub use date::CalendarDate;
pub use engine::{
    DateRange, DayCell, MONTH_NAMES, WEEKDAY_NAMES, advance_month, build_day_cells,
    days_in_month, first_weekday_of_month, is_leap_year, is_within_range, retreat_month,
};
pub use error::{CalendarError, ParseDateError};
pub use format::DateFormat;
pub use navigation::{NavigationState, SelectOutcome};
pub use options::{
    DEFAULT_YEARS_AFTER, DEFAULT_YEARS_BEFORE, MonthOption, YearOption, month_options, year_bounds,
    year_options,
};

/// Number of weekday columns in a month grid.
pub const DAYS_PER_WEEK: usize = 7;

/// The largest number of cells [`build_day_cells`] can return: six full weeks.
pub const MAX_GRID_CELLS: usize = 6 * DAYS_PER_WEEK;

//! A date picker for [`egui`](https://github.com/emilk/egui).
//!
//! [`DatePickerButton`] shows the selected date (or a placeholder) and opens a calendar popup
//! when clicked. The popup has month and year dropdowns, previous/next month arrows and a
//! "Today" shortcut. Dates outside the allowed range are greyed out.
//!
//! All calendar decisions are made by [`ecalendar`], which is re-exported.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! use egui_datepicker::{DatePickerButton, ecalendar::{CalendarDate, DateFormat}};
//!
//! let mut date: Option<CalendarDate> = None;
//! ui.add(
//!     DatePickerButton::new(&mut date)
//!         .label("Birth date")
//!         .format(DateFormat::YearMonthDay),
//! );
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod button;
mod popup;

pub use button::DatePickerButton;
pub use ecalendar;

/// Today according to the local clock.
pub fn local_today() -> ecalendar::CalendarDate {
    chrono::Local::now().date_naive().into()
}

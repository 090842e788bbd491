use std::ops::RangeInclusive;

use crate::{
    CalendarDate, CalendarError, DateRange, DayCell, YearOption, advance_month, build_day_cells,
    retreat_month, year_bounds, year_options,
};

/// Result of trying to select a day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The date is now the selection. The popup should close.
    Selected(CalendarDate),

    /// The date is outside the allowed range. Nothing changed.
    Rejected(CalendarDate),
}

impl SelectOutcome {
    #[inline]
    pub fn selected(self) -> Option<CalendarDate> {
        match self {
            Self::Selected(date) => Some(date),
            Self::Rejected(_) => None,
        }
    }
}

/// What an open date picker shows, and what it has selected.
///
/// Created when the picker opens, dropped when it closes. Navigation is always allowed,
/// selection is checked against the [`DateRange`].
///
/// ```
/// # use ecalendar::{CalendarDate, DateRange, NavigationState, SelectOutcome};
/// let today = CalendarDate::new(2024, 5, 3).unwrap();
/// let max = CalendarDate::new(2024, 5, 15).unwrap();
/// let mut nav = NavigationState::open(None, today, DateRange::at_most(max));
///
/// assert!(matches!(nav.select_day(20), Ok(SelectOutcome::Rejected(_))));
/// assert_eq!(nav.selected(), None);
///
/// nav.goto_prev_month();
/// assert_eq!((nav.displayed_year(), nav.displayed_month()), (2024, 4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    displayed_year: i32,
    displayed_month: u8,
    selected: Option<CalendarDate>,
    range: DateRange,
    today: CalendarDate,
    year_bounds: Option<RangeInclusive<i32>>,
}

impl NavigationState {
    /// Shows the month of `selected`, or the month of `today` if nothing is selected yet.
    pub fn open(selected: Option<CalendarDate>, today: CalendarDate, range: DateRange) -> Self {
        let shown = selected.unwrap_or(today);
        Self {
            displayed_year: shown.year(),
            displayed_month: shown.month(),
            selected,
            range,
            today,
            year_bounds: None,
        }
    }

    /// Offer exactly these years in the year dropdown, instead of deriving them from the range.
    ///
    /// Both ends are clamped to the years a [`CalendarDate`] supports.
    #[inline]
    pub fn with_year_bounds(mut self, years: RangeInclusive<i32>) -> Self {
        let (start, end) = years.into_inner();
        self.year_bounds = Some(CalendarDate::clamp_year(start)..=CalendarDate::clamp_year(end));
        self
    }

    #[inline]
    pub fn displayed_year(&self) -> i32 {
        self.displayed_year
    }

    /// Zero-based.
    #[inline]
    pub fn displayed_month(&self) -> u8 {
        self.displayed_month
    }

    #[inline]
    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    #[inline]
    pub fn range(&self) -> DateRange {
        self.range
    }

    #[inline]
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// The host changed the allowed range while the picker is open.
    ///
    /// An existing selection is kept even if it now falls outside. Only new selections
    /// are checked.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    /// The host changed the value while the picker is open.
    ///
    /// A new date is also shown. Setting the current selection again changes nothing, so
    /// this can be called every frame without undoing the user's navigation.
    pub fn set_selected(&mut self, selected: Option<CalendarDate>) {
        if selected == self.selected {
            return;
        }
        if let Some(date) = selected {
            self.displayed_year = date.year();
            self.displayed_month = date.month();
        }
        self.selected = selected;
    }

    /// The host moved on to a new day while the picker is open.
    pub fn set_today(&mut self, today: CalendarDate) {
        self.today = today;
    }

    /// Select a day of the displayed month.
    ///
    /// # Errors
    /// [`CalendarError::InvalidDay`] if `day` does not exist in the displayed month.
    /// A day outside the range is not an error, it is [`SelectOutcome::Rejected`].
    pub fn select_day(&mut self, day: u8) -> Result<SelectOutcome, CalendarError> {
        let date = CalendarDate::new(self.displayed_year, self.displayed_month, day)?;
        Ok(self.select(date))
    }

    /// Select today, subject to the same range check as [`Self::select_day`].
    pub fn select_today(&mut self) -> SelectOutcome {
        self.select(self.today)
    }

    fn select(&mut self, date: CalendarDate) -> SelectOutcome {
        if self.range.contains(date) {
            log::debug!("Selected {date}");
            self.selected = Some(date);
            SelectOutcome::Selected(date)
        } else {
            log::debug!("Ignoring selection of {date}: outside {:?}", self.range);
            SelectOutcome::Rejected(date)
        }
    }

    /// Always allowed, whatever the range.
    pub fn clear_selection(&mut self) {
        if let Some(date) = self.selected.take() {
            log::debug!("Cleared selection {date}");
        }
    }

    pub fn goto_next_month(&mut self) {
        (self.displayed_year, self.displayed_month) =
            advance_month(self.displayed_year, self.displayed_month);
        log::trace!("Showing {}-{}", self.displayed_year, self.displayed_month);
    }

    pub fn goto_prev_month(&mut self) {
        (self.displayed_year, self.displayed_month) =
            retreat_month(self.displayed_year, self.displayed_month);
        log::trace!("Showing {}-{}", self.displayed_year, self.displayed_month);
    }

    /// Show the given month of the displayed year.
    ///
    /// # Panics
    /// If `month` is not in `0..=11`. The month dropdown only ever offers valid indices.
    pub fn goto_month(&mut self, month: u8) {
        assert!(month < 12, "month index {month} is out of range, expected 0-11");
        self.displayed_month = month;
    }

    /// Show the displayed month of the given year.
    ///
    /// Years outside [`CalendarDate::MIN_YEAR`]`..=`[`CalendarDate::MAX_YEAR`] are clamped.
    pub fn goto_year(&mut self, year: i32) {
        self.displayed_year = CalendarDate::clamp_year(year);
    }

    /// The grid for the displayed month.
    pub fn day_cells(&self) -> Vec<DayCell> {
        build_day_cells(
            self.displayed_year,
            self.displayed_month,
            self.selected,
            self.range,
            self.today,
        )
    }

    /// The years offered by the year dropdown, see [`year_bounds`].
    pub fn year_bounds(&self) -> RangeInclusive<i32> {
        self.year_bounds
            .clone()
            .unwrap_or_else(|| year_bounds(self.today, self.range))
    }

    /// The year dropdown entries, newest first.
    pub fn year_options(&self) -> impl Iterator<Item = YearOption> + use<> {
        year_options(self.year_bounds())
    }

    /// Is today inside the range, i.e. would [`Self::select_today`] succeed?
    pub fn can_select_today(&self) -> bool {
        self.range.contains(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn opens_on_selection_or_today() {
        let today = date(2024, 2, 10);
        let nav = NavigationState::open(None, today, DateRange::UNBOUNDED);
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (2024, 2));

        let nav = NavigationState::open(Some(date(1999, 11, 31)), today, DateRange::UNBOUNDED);
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (1999, 11));
        assert_eq!(nav.selected(), Some(date(1999, 11, 31)));
    }

    #[test]
    fn selection_past_max_is_rejected() {
        let range = DateRange::at_most(date(2024, 5, 15));
        let mut nav = NavigationState::open(None, date(2024, 5, 1), range);
        assert_eq!(
            nav.select_day(20),
            Ok(SelectOutcome::Rejected(date(2024, 5, 20)))
        );
        assert_eq!(nav.selected(), None);

        assert_eq!(
            nav.select_day(15),
            Ok(SelectOutcome::Selected(date(2024, 5, 15)))
        );
        assert_eq!(nav.select_day(16).map(SelectOutcome::selected), Ok(None));
        assert_eq!(nav.selected(), Some(date(2024, 5, 15)));
    }

    #[test]
    fn selection_before_min_is_rejected() {
        let range = DateRange::at_least(date(2024, 0, 10));
        let mut nav = NavigationState::open(Some(date(2024, 0, 12)), date(2024, 0, 12), range);
        nav.goto_prev_month();
        assert!(matches!(nav.select_day(31), Ok(SelectOutcome::Rejected(_))));
        assert_eq!(nav.selected(), Some(date(2024, 0, 12)));
    }

    #[test]
    fn nonexistent_day_is_an_error() {
        let mut nav = NavigationState::open(None, date(2023, 1, 1), DateRange::UNBOUNDED);
        assert_eq!(
            nav.select_day(29),
            Err(CalendarError::InvalidDay {
                year: 2023,
                month: 1,
                day: 29
            })
        );
        assert_eq!(nav.selected(), None);
    }

    #[test]
    fn clearing_ignores_range() {
        let range = DateRange::between(date(2024, 0, 1), date(2024, 0, 31));
        let mut nav = NavigationState::open(Some(date(2024, 0, 5)), date(2024, 0, 5), range);
        nav.clear_selection();
        assert_eq!(nav.selected(), None);
        nav.clear_selection();
        assert_eq!(nav.selected(), None);
    }

    #[test]
    fn select_today_respects_range() {
        let today = date(2024, 2, 10);
        let mut nav = NavigationState::open(None, today, DateRange::at_least(date(2024, 2, 11)));
        assert!(!nav.can_select_today());
        assert_eq!(nav.select_today(), SelectOutcome::Rejected(today));
        assert_eq!(nav.selected(), None);

        nav.set_range(DateRange::UNBOUNDED);
        assert_eq!(nav.select_today(), SelectOutcome::Selected(today));
        assert_eq!(nav.selected(), Some(today));
    }

    #[test]
    fn navigation_rolls_over_years_and_keeps_selection() {
        let selected = Some(date(2024, 11, 24));
        let mut nav = NavigationState::open(selected, date(2024, 0, 1), DateRange::UNBOUNDED);
        nav.goto_next_month();
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (2025, 0));
        nav.goto_prev_month();
        nav.goto_prev_month();
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (2024, 10));
        assert_eq!(nav.selected(), selected);
    }

    #[test]
    fn navigation_ignores_range() {
        let range = DateRange::between(date(2024, 5, 1), date(2024, 5, 30));
        let mut nav = NavigationState::open(None, date(2024, 5, 1), range);
        nav.goto_year(1990);
        nav.goto_month(0);
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (1990, 0));
        assert!(nav.day_cells().iter().all(|cell| !cell.is_selectable));
    }

    #[test]
    fn navigation_stops_at_the_ends_of_the_calendar() {
        let mut nav = NavigationState::open(None, date(2024, 2, 10), DateRange::UNBOUNDED);
        nav.goto_year(i32::MAX);
        nav.goto_month(11);
        assert_eq!(nav.displayed_year(), CalendarDate::MAX_YEAR);
        nav.goto_next_month();
        assert_eq!(
            (nav.displayed_year(), nav.displayed_month()),
            (CalendarDate::MAX_YEAR, 11)
        );
        assert_eq!(nav.day_cells().last().map(|c| c.day), Some(31));

        nav.goto_year(i32::MIN);
        nav.goto_month(0);
        nav.goto_prev_month();
        assert_eq!(
            (nav.displayed_year(), nav.displayed_month()),
            (CalendarDate::MIN_YEAR, 0)
        );

        let nav = nav.with_year_bounds(i32::MIN..=i32::MAX);
        assert_eq!(
            nav.year_bounds(),
            CalendarDate::MIN_YEAR..=CalendarDate::MAX_YEAR
        );
    }

    #[test]
    #[should_panic = "out of range"]
    fn goto_month_rejects_bad_index() {
        let mut nav = NavigationState::open(None, date(2024, 5, 1), DateRange::UNBOUNDED);
        nav.goto_month(12);
    }

    #[test]
    fn host_value_changes_follow_into_an_open_picker() {
        let mut nav = NavigationState::open(None, date(2024, 2, 10), DateRange::UNBOUNDED);
        nav.goto_next_month();
        nav.set_selected(None);
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (2024, 3));

        nav.set_selected(Some(date(2023, 1, 14)));
        assert_eq!(nav.selected(), Some(date(2023, 1, 14)));
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (2023, 1));

        nav.goto_prev_month();
        nav.set_selected(Some(date(2023, 1, 14)));
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (2023, 0));

        nav.set_selected(None);
        assert_eq!(nav.selected(), None);
        assert_eq!((nav.displayed_year(), nav.displayed_month()), (2023, 0));
    }

    #[test]
    fn day_cells_reflect_state() {
        let mut nav = NavigationState::open(None, date(2024, 2, 10), DateRange::UNBOUNDED);
        nav.select_day(3).unwrap();
        let cells = nav.day_cells();
        let selected: Vec<u8> = cells.iter().filter(|c| c.is_selected).map(|c| c.day).collect();
        assert_eq!(selected, [3]);
        let today: Vec<u8> = cells.iter().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(today, [10]);
    }

    #[test]
    fn year_options_default_and_override() {
        let nav = NavigationState::open(None, date(2024, 2, 10), DateRange::UNBOUNDED);
        assert_eq!(nav.year_bounds(), 1924..=2034);
        assert_eq!(nav.year_options().next().map(|o| o.year), Some(2034));

        let nav = nav.with_year_bounds(2000..=2035);
        let years: Vec<i32> = nav.year_options().map(|o| o.year).collect();
        assert_eq!(years.first(), Some(&2035));
        assert_eq!(years.last(), Some(&2000));
    }
}

use ecalendar::{
    CalendarDate, DAYS_PER_WEEK, DateFormat, DayCell, MONTH_NAMES, NavigationState, SelectOutcome,
    WEEKDAY_NAMES, month_options,
};
use egui::{Align, Button, ComboBox, Layout, RichText, Ui, Vec2, vec2};

pub(crate) struct DatePickerPopup<'a> {
    pub nav: &'a mut NavigationState,
}

impl DatePickerPopup<'_> {
    /// Returns the date the user picked this frame, if any.
    pub fn draw(&mut self, ui: &mut Ui) -> Option<CalendarDate> {
        let spacing = 2.0;
        ui.spacing_mut().item_spacing = Vec2::splat(spacing);

        self.header(ui);
        ui.separator();
        let picked_day = self.calendar(ui);
        ui.separator();
        let picked_today = self.today_shortcut(ui);
        picked_day.or(picked_today)
    }

    fn header(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("<").on_hover_text("Previous month").clicked() {
                self.nav.goto_prev_month();
            }

            let mut month = self.nav.displayed_month();
            ComboBox::from_id_salt("date_picker_month")
                .selected_text(MONTH_NAMES[month as usize])
                .width(96.0)
                .show_ui(ui, |ui| {
                    for option in month_options() {
                        ui.selectable_value(&mut month, option.index, option.label());
                    }
                });
            if month != self.nav.displayed_month() {
                self.nav.goto_month(month);
            }

            let mut year = self.nav.displayed_year();
            ComboBox::from_id_salt("date_picker_year")
                .selected_text(year.to_string())
                .width(64.0)
                .show_ui(ui, |ui| {
                    for option in self.nav.year_options() {
                        ui.selectable_value(&mut year, option.year, option.label());
                    }
                });
            if year != self.nav.displayed_year() {
                self.nav.goto_year(year);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(">").on_hover_text("Next month").clicked() {
                    self.nav.goto_next_month();
                }
            });
        });
    }

    fn calendar(&mut self, ui: &mut Ui) -> Option<CalendarDate> {
        let cells = self.nav.day_cells();
        let cell_size = vec2(30.0, 20.0);
        let mut picked = None;

        egui::Grid::new("date_picker_days")
            .num_columns(DAYS_PER_WEEK)
            .spacing(vec2(4.0, 2.0))
            .min_col_width(cell_size.x)
            .show(ui, |ui| {
                for name in WEEKDAY_NAMES {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(name).small().strong());
                    });
                }
                ui.end_row();

                for week in cells.chunks(DAYS_PER_WEEK) {
                    for cell in week {
                        if cell.is_padding {
                            ui.allocate_space(cell_size);
                        } else if let Some(date) = self.day_button(ui, *cell, cell_size) {
                            picked = Some(date);
                        }
                    }
                    ui.end_row();
                }
            });

        picked
    }

    fn day_button(&mut self, ui: &mut Ui, cell: DayCell, size: Vec2) -> Option<CalendarDate> {
        let button = Button::new(cell.day.to_string())
            .selected(cell.is_selected)
            .min_size(size);
        let response = ui.add_enabled(cell.is_selectable, button);

        if cell.is_today {
            // Encircle today's date
            let stroke = ui.visuals().widgets.inactive.fg_stroke;
            ui.painter().circle_stroke(response.rect.center(), 9.0, stroke);
        }

        if !response.clicked() {
            return None;
        }
        match self.nav.select_day(cell.day) {
            Ok(SelectOutcome::Selected(date)) => Some(date),
            Ok(SelectOutcome::Rejected(_)) => None,
            Err(err) => {
                log::warn!("Date picker offered a day that does not exist: {err}");
                None
            }
        }
    }

    fn today_shortcut(&mut self, ui: &mut Ui) -> Option<CalendarDate> {
        let text = format!(
            "Today: {}",
            DateFormat::DayMonthYear.format(self.nav.today())
        );
        let response = ui.add_enabled(self.nav.can_select_today(), egui::Link::new(text));
        if response.clicked() {
            self.nav.select_today().selected()
        } else {
            None
        }
    }
}

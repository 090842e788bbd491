use std::{hash::Hash, ops::RangeInclusive};

use ecalendar::{CalendarDate, DateFormat, DateRange, FieldBinding, FormField, NavigationState};
use egui::{
    Area, Button, Frame, Id, InnerResponse, Key, Order, Response, RichText, Stroke, Ui, Widget,
};

use crate::popup::DatePickerPopup;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DatePickerButtonState {
    pub picker_visible: bool,
}

/// Shows a date, and will open a date picker popup when clicked.
///
/// The value lives behind a [`FieldBinding`]: a plain `Option<CalendarDate>`, a
/// [`FormField`], or anything else the host wants to plug in.
pub struct DatePickerButton<'a> {
    binding: &'a mut dyn FieldBinding,
    id_salt: Option<Id>,
    format: DateFormat,
    placeholder: String,
    label: Option<String>,
    required: bool,
    clearable: bool,
    enabled: bool,
    error: Option<String>,
    range: DateRange,
    start_end_years: Option<RangeInclusive<i32>>,
    today: Option<CalendarDate>,
    show_icon: bool,
}

impl<'a> DatePickerButton<'a> {
    pub fn new(binding: &'a mut dyn FieldBinding) -> Self {
        Self {
            binding,
            id_salt: None,
            format: DateFormat::default(),
            placeholder: "Select a date".to_owned(),
            label: None,
            required: false,
            clearable: true,
            enabled: true,
            error: None,
            range: DateRange::UNBOUNDED,
            start_end_years: None,
            today: None,
            show_icon: true,
        }
    }

    /// A picker for a form field, taking its label, "required" marker and id from the field.
    ///
    /// The field's validation error is shown under the button.
    pub fn for_field(field: &'a mut FormField) -> Self {
        let id_salt = Id::new(field.name());
        let label = field.label_text().map(ToOwned::to_owned);
        let required = field.is_required();

        let mut button = Self::new(field);
        button.id_salt = Some(id_salt);
        button.label = label;
        button.required = required;
        button
    }

    /// Add id source.
    /// Must be set if multiple date picker buttons are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: impl Hash) -> Self {
        self.id_salt = Some(Id::new(id_salt));
        self
    }

    /// How the date is shown on the button. (Default: `dd/mm/yyyy`)
    #[inline]
    pub fn format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    /// Shown when no date is selected. (Default: "Select a date")
    #[inline]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Shown above the button.
    #[inline]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the label with a red `*`. (Default: false)
    ///
    /// This is only the marker: validation is done by [`FormField`].
    #[inline]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Show a button that clears the date. (Default: true)
    #[inline]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// A disabled picker shows its value but can't be opened or cleared. (Default: true)
    #[inline]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show an error message under the button, and outline the button in red.
    ///
    /// (Default: whatever [`FieldBinding::validation_error`] reports)
    #[inline]
    pub fn error(mut self, error: impl Into<Option<String>>) -> Self {
        self.error = error.into();
        self
    }

    /// Earliest selectable date. `None` means no lower bound.
    #[inline]
    pub fn min_date(mut self, min: impl Into<Option<CalendarDate>>) -> Self {
        self.range.min = min.into();
        self
    }

    /// Latest selectable date. `None` means no upper bound.
    #[inline]
    pub fn max_date(mut self, max: impl Into<Option<CalendarDate>>) -> Self {
        self.range.max = max.into();
        self
    }

    /// Both bounds at once.
    #[inline]
    pub fn range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Set the start and end years for the year dropdown.
    /// (Default: the years of the min/max dates, or today's year - 100 to today's year + 10)
    ///
    /// For example, if you want to provide the range of years from 2000 to 2035, you can use:
    /// `start_end_years(2000..=2035)`.
    #[inline]
    pub fn start_end_years(mut self, start_end_years: RangeInclusive<i32>) -> Self {
        self.start_end_years = Some(start_end_years);
        self
    }

    /// Use this as today's date instead of reading the local clock.
    #[inline]
    pub fn today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Show the calendar icon on the button. (Default: true)
    #[inline]
    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }
}

impl Widget for DatePickerButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| self.show(ui)).inner
    }
}

impl DatePickerButton<'_> {
    fn show(self, ui: &mut Ui) -> Response {
        let Self {
            binding,
            id_salt,
            format,
            placeholder,
            label,
            required,
            clearable,
            enabled,
            error,
            range,
            start_end_years,
            today,
            show_icon,
        } = self;

        let id = ui.make_persistent_id(id_salt);
        let nav_id = id.with("navigation");
        let mut button_state = ui
            .data_mut(|data| data.get_temp::<DatePickerButtonState>(id))
            .unwrap_or_default();

        if let Some(label) = &label {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).strong());
                if required {
                    ui.colored_label(ui.visuals().error_fg_color, "*");
                }
            });
        }

        let value = binding.current_value();
        let shown = value.map_or(placeholder, |date| format.format(date));
        let mut text = if show_icon {
            RichText::new(format!("{shown} 📆"))
        } else {
            RichText::new(shown)
        };
        if value.is_none() {
            text = text.color(ui.visuals().weak_text_color());
        }
        let visuals = ui.visuals().widgets.open;
        if button_state.picker_visible {
            text = text.color(visuals.text_color());
        }
        let mut button = Button::new(text);
        if button_state.picker_visible {
            button = button.fill(visuals.weak_bg_fill).stroke(visuals.bg_stroke);
        } else if error.is_some() || binding.validation_error().is_some() {
            button = button.stroke(Stroke::new(1.0, ui.visuals().error_fg_color));
        }

        let (mut button_response, clear_clicked) = ui
            .horizontal(|ui| {
                let response = ui.add_enabled(enabled, button);
                let clear_clicked = value.is_some()
                    && enabled
                    && clearable
                    && ui.small_button("✖").on_hover_text("Clear date").clicked();
                (response, clear_clicked)
            })
            .inner;

        if clear_clicked {
            log::debug!("Clearing date picker {id:?}");
            binding.commit(None);
            button_response.mark_changed();
        }

        let today = today.unwrap_or_else(crate::local_today);

        if button_response.clicked() {
            button_state.picker_visible = !button_state.picker_visible;
            if button_state.picker_visible {
                // Start from whatever the host holds right now.
                let mut nav = NavigationState::open(binding.current_value(), today, range);
                if let Some(years) = start_end_years.clone() {
                    nav = nav.with_year_bounds(years);
                }
                ui.data_mut(|data| data.insert_temp(nav_id, nav));
            }
        }

        if button_state.picker_visible {
            let mut nav = ui
                .data_mut(|data| data.get_temp::<NavigationState>(nav_id))
                .unwrap_or_else(|| NavigationState::open(binding.current_value(), today, range));
            // The host may move the bounds or the value while we are open, e.g. linked
            // start/end pickers.
            nav.set_range(range);
            nav.set_today(today);
            nav.set_selected(binding.current_value());

            let width = 260.0;
            let mut pos = button_response.rect.left_bottom();
            let width_with_padding = width
                + ui.style().spacing.item_spacing.x
                + ui.style().spacing.window_margin.leftf()
                + ui.style().spacing.window_margin.rightf();
            if pos.x + width_with_padding > ui.clip_rect().right() {
                pos.x = button_response.rect.right() - width_with_padding;
            }

            // Check to make sure the calendar never is displayed out of window
            pos.x = pos.x.max(ui.style().spacing.window_margin.leftf());

            let InnerResponse {
                inner: picked,
                response: area_response,
            } = Area::new(id.with("popup"))
                .kind(egui::UiKind::Picker)
                .order(Order::Foreground)
                .fixed_pos(pos)
                .show(ui.ctx(), |ui| {
                    let frame = Frame::popup(ui.style());
                    frame
                        .show(ui, |ui| {
                            ui.set_min_width(width);
                            ui.set_max_width(width);

                            DatePickerPopup { nav: &mut nav }.draw(ui)
                        })
                        .inner
                });

            if let Some(date) = picked {
                binding.commit(Some(date));
                button_response.mark_changed();
                button_state.picker_visible = false;
            }

            // We don't want to close our popup if any other popup is open, since other popups would
            // most likely be the combo boxes in the date picker.
            let any_popup_open = ui.any_popup_open();
            if !button_response.clicked()
                && !any_popup_open
                && (ui.input(|i| i.key_pressed(Key::Escape)) || area_response.clicked_elsewhere())
            {
                button_state.picker_visible = false;
            }

            if button_state.picker_visible {
                ui.data_mut(|data| data.insert_temp(nav_id, nav));
            }
        }

        if !button_state.picker_visible {
            ui.data_mut(|data| data.remove::<NavigationState>(nav_id));
        }
        ui.data_mut(|data| data.insert_temp(id, button_state));

        // Read after any commit above, so a fixed error disappears in the same frame.
        if let Some(error) = error.as_deref().or_else(|| binding.validation_error()) {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        button_response
    }
}

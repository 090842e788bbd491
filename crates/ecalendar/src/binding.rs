//! Connecting a date picker to whatever holds the value: plain local state or a form.

use crate::CalendarDate;

/// Where a date picker reads its value from and writes its selection to.
///
/// The picker calls [`Self::commit`] with `Some(date)` after a successful selection and with
/// `None` when the user clears the field.
pub trait FieldBinding {
    fn current_value(&self) -> Option<CalendarDate>;

    fn commit(&mut self, value: Option<CalendarDate>);

    /// The message to show under the picker, read after every commit.
    fn validation_error(&self) -> Option<&str> {
        None
    }
}

/// Plain local state.
impl FieldBinding for Option<CalendarDate> {
    #[inline]
    fn current_value(&self) -> Option<CalendarDate> {
        *self
    }

    #[inline]
    fn commit(&mut self, value: Option<CalendarDate>) {
        *self = value;
    }
}

/// A field failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field has no value.
    #[error("{message}")]
    Required {
        /// Name of the field, as given to [`FormField::new`].
        field: String,

        /// Human readable, e.g. `"Birth date is required"`.
        message: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Required { message, .. } => message,
        }
    }
}

/// A named date field of a form, with optional "required" validation.
///
/// Validation runs on [`Self::validate`], typically when the form is submitted.
/// Once a field has failed validation, every commit re-validates it, so the error
/// goes away as soon as the user picks a date.
///
/// ```
/// # use ecalendar::{CalendarDate, FieldBinding as _, FormField};
/// let mut field = FormField::new("birth_date").label("Birth date").required(true);
/// assert!(field.validate().is_err());
/// assert_eq!(field.error(), Some("Birth date is required"));
///
/// field.commit(Some(CalendarDate::new(1990, 6, 14).unwrap()));
/// assert_eq!(field.error(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    name: String,
    label: Option<String>,
    required: bool,
    value: Option<CalendarDate>,
    error: Option<ValidationError>,
    validated: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            required: false,
            value: None,
            error: None,
            validated: false,
        }
    }

    /// Shown above the picker and used in the "required" message.
    #[inline]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Must the field have a value? (Default: false)
    #[inline]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Starting value.
    #[inline]
    pub fn default_value(mut self, value: Option<CalendarDate>) -> Self {
        self.value = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn value(&self) -> Option<CalendarDate> {
        self.value
    }

    /// The message of the last failed validation, if it still applies.
    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(ValidationError::message)
    }

    fn required_message(&self) -> String {
        format!("{} is required", self.label.as_deref().unwrap_or("This field"))
    }

    /// Check the field, remembering the outcome for [`Self::error`].
    ///
    /// # Errors
    /// [`ValidationError::Required`] if the field is required and empty.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.validated = true;
        self.error = (self.required && self.value.is_none()).then(|| ValidationError::Required {
            field: self.name.clone(),
            message: self.required_message(),
        });
        match &self.error {
            Some(err) => {
                log::debug!("Field {:?} failed validation: {err}", self.name);
                Err(err.clone())
            }
            None => Ok(()),
        }
    }

    /// Forget any validation outcome and go back to the given value.
    pub fn reset(&mut self, value: Option<CalendarDate>) {
        self.value = value;
        self.error = None;
        self.validated = false;
    }
}

impl FieldBinding for FormField {
    #[inline]
    fn current_value(&self) -> Option<CalendarDate> {
        self.value
    }

    fn commit(&mut self, value: Option<CalendarDate>) {
        self.value = value;
        if self.validated {
            self.validate().ok();
        }
    }

    #[inline]
    fn validation_error(&self) -> Option<&str> {
        self.error()
    }
}

/// Validate every field, without stopping at the first failure.
///
/// # Errors
/// All the failures, in field order.
pub fn validate_all<'a>(
    fields: impl IntoIterator<Item = &'a mut FormField>,
) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = fields
        .into_iter()
        .filter_map(|field| field.validate().err())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn local_state_binding() {
        let mut value: Option<CalendarDate> = None;
        value.commit(Some(date(2024, 0, 5)));
        assert_eq!(value.current_value(), Some(date(2024, 0, 5)));
        value.commit(None);
        assert_eq!(value, None);
        assert_eq!(value.validation_error(), None);
    }

    #[test]
    fn required_message_uses_label() {
        let mut field = FormField::new("start").required(true);
        assert_eq!(
            field.validate(),
            Err(ValidationError::Required {
                field: "start".to_owned(),
                message: "This field is required".to_owned(),
            })
        );

        let mut field = FormField::new("start").label("Start Date").required(true);
        let err = field.validate().unwrap_err();
        assert_eq!(err.to_string(), "Start Date is required");
        assert_eq!(err.field(), "start");
    }

    #[test]
    fn optional_field_is_always_valid() {
        let mut field = FormField::new("appointment");
        assert_eq!(field.validate(), Ok(()));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn errors_only_appear_after_validation() {
        let mut field = FormField::new("birth").required(true);
        field.commit(None);
        assert_eq!(field.error(), None);

        field.validate().ok();
        assert!(field.error().is_some());

        field.commit(Some(date(1990, 0, 1)));
        assert_eq!(field.error(), None);
        assert_eq!(field.validation_error(), None);

        // Clearing a validated field brings the error back right away.
        field.commit(None);
        assert_eq!(field.error(), Some("This field is required"));
        assert_eq!(field.validation_error(), Some("This field is required"));

        field.reset(None);
        assert_eq!(field.error(), None);
    }

    #[test]
    fn validates_every_field() {
        let mut fields = [
            FormField::new("birth").required(true),
            FormField::new("appointment").default_value(Some(date(2024, 5, 1))),
            FormField::new("start").label("Start Date").required(true),
            FormField::new("end")
                .required(true)
                .default_value(Some(date(2024, 5, 2))),
        ];
        let errors = validate_all(&mut fields).unwrap_err();
        let names: Vec<&str> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(names, ["birth", "start"]);
        assert!(fields[0].error().is_some());
        assert!(fields[1].error().is_none());

        fields[0].commit(Some(date(1990, 0, 1)));
        fields[2].commit(Some(date(2024, 5, 1)));
        assert_eq!(validate_all(&mut fields), Ok(()));
    }
}

use tracing::debug;

use crate::{
    AvailabilityWindow, Bounds, DateConstraints, Feedback, Messages, Property,
    bounds::compute_bounds,
    config::{render, title_context},
    decision::validate_stay_request,
    types::format_date,
    window::{describe_availability, parse_availability},
};

/// State of the booking dialog for one property, alive while the dialog is open.
///
/// Selecting another property opens a new context; nothing is shared between them.
#[derive(Debug, Clone)]
pub struct BookingContext {
    property: Property,
    windows:  Vec<AvailabilityWindow>,
    bounds:   Bounds,
    title:    String,
    summary:  String,
    messages: Messages,
}

impl BookingContext {
    /// Opens the dialog for `property` from its raw availability attribute.
    pub fn open(property: Property, raw_availability: Option<&str>, messages: &Messages) -> Self {
        let windows = parse_availability(raw_availability);
        Self::with_windows(property, windows, messages)
    }

    /// Opens the dialog for `property` with windows that are already parsed.
    pub fn with_windows(property: Property, windows: Vec<AvailabilityWindow>, messages: &Messages) -> Self {
        let bounds = compute_bounds(&windows);
        let title = render(&messages.title, &title_context(&property.name));
        let summary = describe_availability(&windows, messages);

        debug!(property = %property.id, windows = windows.len(), "opened booking context");
        Self {
            property,
            windows,
            bounds,
            title,
            summary,
            messages: messages.clone(),
        }
    }

    pub const fn property(&self) -> &Property {
        &self.property
    }

    pub fn windows(&self) -> &[AvailabilityWindow] {
        &self.windows
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Availability summary shown above the form
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// `min`/`max` for both the check-in and check-out inputs when the dialog opens
    pub fn date_constraints(&self) -> DateConstraints {
        self.bounds.input_range()
    }

    /// Lowest selectable check-out once `checkin_raw` has been picked.
    /// Falls back to the earliest available date while check-in is empty.
    pub fn checkout_min(&self, checkin_raw: &str) -> String {
        if checkin_raw.is_empty() {
            format_date(self.bounds.min())
        } else {
            checkin_raw.to_owned()
        }
    }

    /// Evaluates the submitted dates and renders the result.
    pub fn submit(&self, checkin_raw: &str, checkout_raw: &str) -> Feedback {
        validate_stay_request(checkin_raw, checkout_raw, &self.windows).feedback(&self.messages, &self.property)
    }
}

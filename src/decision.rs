use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::{
    AvailabilityWindow, Messages, Property,
    config::{confirmation_context, render},
    consts::{STATUS_ERROR, STATUS_NEUTRAL, STATUS_SUCCESS, STATUS_WARNING},
    prelude::*,
    types::{end_of_day, format_date, parse_date, start_of_day},
};

/// A candidate stay: check-in at the start of its day, check-out at the end of its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}/{}", "format_date(*checkin)", "format_date(*checkout)")]
pub struct StayRequest {
    checkin:  NaiveDateTime,
    checkout: NaiveDateTime,
}

impl StayRequest {
    pub fn from_dates(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self {
            checkin:  start_of_day(checkin),
            checkout: end_of_day(checkout),
        }
    }

    pub const fn checkin(&self) -> NaiveDateTime {
        self.checkin
    }

    pub const fn checkout(&self) -> NaiveDateTime {
        self.checkout
    }

    /// Whether check-out falls before check-in
    pub fn is_inverted(&self) -> bool {
        self.checkout < self.checkin
    }
}

/// Verdict on a stay request. Variants are listed in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Decision {
    /// One or both dates were left empty.
    #[display(fmt = "missing dates")]
    MissingDates,
    /// Check-out is before check-in.
    #[display(fmt = "inverted range")]
    InvertedRange,
    /// No single window holds the whole stay.
    #[display(fmt = "outside availability")]
    OutsideAvailability,
    #[display(fmt = "accepted {_0}")]
    Accepted(StayRequest),
}

/// Severity attached to user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Neutral,
    Warning,
    Error,
    Success,
}

impl Status {
    /// Status class the UI appends to the feedback element
    pub const fn class(self) -> &'static str {
        match self {
            Self::Neutral => STATUS_NEUTRAL,
            Self::Warning => STATUS_WARNING,
            Self::Error => STATUS_ERROR,
            Self::Success => STATUS_SUCCESS,
        }
    }
}

/// Message and status to show for a decision.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Feedback {
    pub status:  Status,
    pub message: String,
}

impl Feedback {
    /// Cleared feedback, shown while the form is untouched
    pub fn neutral() -> Self {
        Self::default()
    }
}

impl Decision {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub const fn status(&self) -> Status {
        match self {
            Self::MissingDates => Status::Warning,
            Self::InvertedRange | Self::OutsideAvailability => Status::Error,
            Self::Accepted(_) => Status::Success,
        }
    }

    /// Renders the decision for `property` with the configured texts.
    pub fn feedback(&self, messages: &Messages, property: &Property) -> Feedback {
        let message = match self {
            Self::MissingDates => messages.missing_dates.clone(),
            Self::InvertedRange => messages.inverted_range.clone(),
            Self::OutsideAvailability => messages.outside_availability.clone(),
            Self::Accepted(stay) => {
                let context = confirmation_context(
                    &property.name,
                    &property.location,
                    &format_date(stay.checkin),
                    &format_date(stay.checkout),
                );
                render(&messages.confirmation, &context)
            },
        };

        Feedback {
            status: self.status(),
            message,
        }
    }
}

/// Checks if the stay fits entirely inside at least one window.
/// Adjacent windows are not merged, so a stay crossing from one into the next is not contained.
pub fn is_stay_contained(checkin: NaiveDateTime, checkout: NaiveDateTime, windows: &[AvailabilityWindow]) -> bool {
    windows.iter().any(|window| window.contains_stay(checkin, checkout))
}

/// Decides on a stay from the raw form values and the property's windows.
///
/// A value that is present but not a zero-padded `YYYY-MM-DD` date can never fall inside a
/// window and is reported as [`Decision::OutsideAvailability`]. An accepted stay therefore
/// formats back to exactly the values that were entered.
pub fn validate_stay_request(checkin_raw: &str, checkout_raw: &str, windows: &[AvailabilityWindow]) -> Decision {
    if checkin_raw.is_empty() || checkout_raw.is_empty() {
        return Decision::MissingDates;
    }

    let (Ok(checkin), Ok(checkout)) = (parse_date(checkin_raw), parse_date(checkout_raw)) else {
        debug!(checkin_raw, checkout_raw, "stay dates are not calendar dates");
        return Decision::OutsideAvailability;
    };

    let stay = StayRequest::from_dates(checkin, checkout);
    let decision = if stay.is_inverted() {
        Decision::InvertedRange
    } else if is_stay_contained(stay.checkin, stay.checkout, windows) {
        Decision::Accepted(stay)
    } else {
        Decision::OutsideAvailability
    };

    debug!(%decision, "validated stay request");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, init_tracing, property, window};

    fn june() -> Vec<AvailabilityWindow> {
        vec![window("2024-06-01", "2024-06-10")]
    }

    #[test]
    fn test_validate_stay_request_scenarios() {
        init_tracing();

        struct TestCase {
            checkin:     &'static str,
            checkout:    &'static str,
            windows:     Vec<AvailabilityWindow>,
            expected:    Decision,
            description: &'static str,
        }

        let cases = [
            TestCase {
                checkin:     "2024-06-03",
                checkout:    "2024-06-05",
                windows:     june(),
                expected:    Decision::Accepted(StayRequest::from_dates(date("2024-06-03"), date("2024-06-05"))),
                description: "stay inside the window",
            },
            TestCase {
                checkin:     "2024-06-09",
                checkout:    "2024-06-12",
                windows:     june(),
                expected:    Decision::OutsideAvailability,
                description: "checkout past the window end",
            },
            TestCase {
                checkin:     "2024-06-05",
                checkout:    "2024-06-03",
                windows:     june(),
                expected:    Decision::InvertedRange,
                description: "checkout before checkin",
            },
            TestCase {
                checkin:     "",
                checkout:    "2024-06-05",
                windows:     june(),
                expected:    Decision::MissingDates,
                description: "missing checkin",
            },
            TestCase {
                checkin:     "2024-06-03",
                checkout:    "",
                windows:     june(),
                expected:    Decision::MissingDates,
                description: "missing checkout",
            },
            TestCase {
                checkin:     "2024-06-04",
                checkout:    "2024-06-07",
                windows:     vec![window("2024-06-01", "2024-06-05"), window("2024-06-06", "2024-06-10")],
                expected:    Decision::OutsideAvailability,
                description: "stay spanning two adjacent windows",
            },
            TestCase {
                checkin:     "2024-06-07",
                checkout:    "2024-06-08",
                windows:     vec![window("2024-06-01", "2024-06-05"), window("2024-06-06", "2024-06-10")],
                expected:    Decision::Accepted(StayRequest::from_dates(date("2024-06-07"), date("2024-06-08"))),
                description: "stay inside the second window",
            },
            TestCase {
                checkin:     "2024-06-03",
                checkout:    "2024-06-05",
                windows:     Vec::new(),
                expected:    Decision::OutsideAvailability,
                description: "no windows at all",
            },
            TestCase {
                checkin:     "2024-06-05",
                checkout:    "2024-06-03",
                windows:     Vec::new(),
                expected:    Decision::InvertedRange,
                description: "inverted range wins over missing availability",
            },
            TestCase {
                checkin:     "2024-6-3",
                checkout:    "2024-06-05",
                windows:     june(),
                expected:    Decision::OutsideAvailability,
                description: "checkin without zero padding",
            },
            TestCase {
                checkin:     "soon",
                checkout:    "2024-06-05",
                windows:     june(),
                expected:    Decision::OutsideAvailability,
                description: "checkin is not a date",
            },
        ];

        for case in &cases {
            let decision = validate_stay_request(case.checkin, case.checkout, &case.windows);
            assert_eq!(decision, case.expected, "unexpected decision for: {}", case.description);
        }
    }

    #[test]
    fn test_same_day_stay_is_contained() {
        let windows = june();
        let day = date("2024-06-10");

        assert!(is_stay_contained(start_of_day(day), end_of_day(day), &windows));
        assert!(is_stay_contained(start_of_day(day), start_of_day(day), &windows));
        assert!(validate_stay_request("2024-06-10", "2024-06-10", &windows).is_accepted());
    }

    #[test]
    fn test_is_stay_contained_without_windows() {
        let day = date("2024-06-03");
        assert!(!is_stay_contained(start_of_day(day), end_of_day(day), &[]));
    }

    #[test]
    fn test_inverted_window_contains_nothing() {
        let windows = [window("2024-06-10", "2024-06-01")];
        assert_eq!(
            validate_stay_request("2024-06-03", "2024-06-05", &windows),
            Decision::OutsideAvailability
        );
    }

    #[test]
    fn test_feedback() {
        let messages = Messages::default();
        let property = property();

        let missing = Decision::MissingDates.feedback(&messages, &property);
        assert_eq!(missing.status, Status::Warning);
        assert_eq!(missing.status.class(), "warn");
        assert_eq!(missing.message, "Select both dates.");

        let inverted = Decision::InvertedRange.feedback(&messages, &property);
        assert_eq!(inverted.status.class(), "err");

        let outside = Decision::OutsideAvailability.feedback(&messages, &property);
        assert_eq!(outside.status, Status::Error);
        assert_eq!(outside.message, messages.outside_availability);

        let accepted = validate_stay_request("2024-06-03", "2024-06-05", &june()).feedback(&messages, &property);
        assert_eq!(accepted.status.class(), "ok");
        assert_eq!(
            accepted.message,
            "Request sent for Casa Azul (Paraty, RJ) from 2024-06-03 to 2024-06-05."
        );
    }

    #[test]
    fn test_neutral_feedback() {
        let feedback = Feedback::neutral();
        assert_eq!(feedback.status, Status::Neutral);
        assert_eq!(feedback.status.class(), "");
        assert!(feedback.message.is_empty());
    }

    #[test]
    fn test_decision_display() {
        let stay = StayRequest::from_dates(date("2024-06-03"), date("2024-06-05"));
        assert_eq!(Decision::Accepted(stay).to_string(), "accepted 2024-06-03/2024-06-05");
        assert_eq!(Decision::MissingDates.to_string(), "missing dates");
    }
}

use crate::consts::{DATE_FORMAT, END_OF_DAY, START_OF_DAY};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A rental property that availability and feedback are reported for.
/// Carries no booking logic; it only labels output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub id:       String,
    pub name:     String,
    pub location: String,
}

impl Property {
    /// Creates a property reference from its identifier, display name and location
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id:       id.into(),
            name:     name.into(),
            location: location.into(),
        }
    }
}

/// Instant at which `date` starts (00:00:00)
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(START_OF_DAY)
}

/// Last instant of `date` (23:59:59), inclusive
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(END_OF_DAY)
}

/// Error type for form date values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date {value:?}: {source}")]
    Invalid { value: String, source: chrono::ParseError },

    /// A real date written without zero padding, e.g. `2024-6-3`.
    #[error("Date {0:?} is not zero-padded YYYY-MM-DD")]
    NotPadded(String),
}

/// Parses a date-only `YYYY-MM-DD` value as entered in a form field.
/// Only the zero-padded form is accepted, so a parsed date formats back to `raw`.
///
/// # Errors
/// Returns `DateError::Invalid` if the value is not a real calendar date in that format,
/// or `DateError::NotPadded` if a component lacks its leading zeros.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| DateError::Invalid {
        value: raw.to_owned(),
        source,
    })?;

    if date.format(DATE_FORMAT).to_string() != raw {
        return Err(DateError::NotPadded(raw.to_owned()));
    }
    Ok(date)
}

/// Formats the calendar date of an instant as zero-padded `YYYY-MM-DD`
pub fn format_date(instant: NaiveDateTime) -> String {
    instant.format(DATE_FORMAT).to_string()
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    Messages,
    consts::WINDOW_SEPARATOR,
    prelude::*,
    types::{end_of_day, format_date, start_of_day},
};

/// A contiguous span (inclusive) during which a property can be booked.
/// `start` is the first instant of its first day and `end` the last second of its last day,
/// so a window whose dates are equal still covers one full day.
///
/// Construction does not reject `start > end`; such a window is reported by
/// [`AvailabilityWindow::is_well_formed`] and can never contain a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}/{}", "format_date(*start)", "format_date(*end)")]
#[serde(from = "WindowRecord", into = "WindowRecord")]
pub struct AvailabilityWindow {
    start: NaiveDateTime,
    end:   NaiveDateTime,
}

/// Wire form of a window: `{ "start": "YYYY-MM-DD", "end": "YYYY-MM-DD" }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WindowRecord {
    start: NaiveDate,
    end:   NaiveDate,
}

impl From<WindowRecord> for AvailabilityWindow {
    fn from(record: WindowRecord) -> Self {
        Self::from_dates(record.start, record.end)
    }
}

impl From<AvailabilityWindow> for WindowRecord {
    fn from(window: AvailabilityWindow) -> Self {
        Self {
            start: window.start_date(),
            end:   window.end_date(),
        }
    }
}

/// Error type for availability data that cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// The payload is not a JSON list.
    #[error("Invalid availability data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of reading a property's raw availability attribute.
///
/// Keeps "nothing was supplied", "the property has no windows" and
/// "the payload is unreadable" apart; [`parse_availability`] collapses them into a list.
#[derive(Debug)]
pub enum ParsedAvailability {
    /// No payload, or a blank one.
    Absent,
    /// The payload parsed; the list may be empty.
    Windows(Vec<AvailabilityWindow>),
    /// The payload could not be deserialized.
    Malformed(AvailabilityError),
}

impl ParsedAvailability {
    /// The parsed windows, or an empty list for absent and malformed payloads
    pub fn into_windows(self) -> Vec<AvailabilityWindow> {
        match self {
            Self::Windows(windows) => windows,
            Self::Absent | Self::Malformed(_) => Vec::new(),
        }
    }

    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl AvailabilityWindow {
    /// Creates a window from already normalized instants.
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Creates a window covering `start` through `end`, both days included.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(start_of_day(start), end_of_day(end))
    }

    /// Returns the first instant of the window
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the last instant of the window (inclusive)
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Whether the window starts no later than it ends
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Checks if the whole stay from `checkin` to `checkout` lies inside this window.
    /// An inverted stay is never contained.
    pub fn contains_stay(&self, checkin: NaiveDateTime, checkout: NaiveDateTime) -> bool {
        checkin >= self.start && checkout <= self.end && checkin <= checkout
    }
}

/// Reads a serialized list of availability windows, keeping the reason when it cannot.
///
/// A missing or blank payload is [`ParsedAvailability::Absent`]; a payload that is not a JSON
/// list is [`ParsedAvailability::Malformed`]. Inside a list, each entry stands alone: one
/// without two valid dates is logged and skipped. Windows that end before they start are kept
/// as given and logged.
pub fn parse_availability_tagged(raw: Option<&str>) -> ParsedAvailability {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return ParsedAvailability::Absent;
    };

    let entries = match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(entries) => entries,
        Err(err) => return ParsedAvailability::Malformed(err.into()),
    };

    let windows = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<AvailabilityWindow>(entry) {
            Ok(window) => Some(window),
            Err(err) => {
                warn!(index, error = %err, "skipping unreadable availability window");
                None
            },
        })
        .collect::<Vec<_>>();

    for window in windows.iter().filter(|window| !window.is_well_formed()) {
        warn!(%window, "availability window ends before it starts");
    }
    debug!(count = windows.len(), "parsed availability windows");
    ParsedAvailability::Windows(windows)
}

/// Reads a serialized list of availability windows.
///
/// Never fails: absent, blank or malformed input all yield an empty list, and unreadable
/// entries are dropped while the rest are kept.
/// Use [`parse_availability_tagged`] to tell those cases apart.
pub fn parse_availability(raw: Option<&str>) -> Vec<AvailabilityWindow> {
    match parse_availability_tagged(raw) {
        ParsedAvailability::Malformed(err) => {
            warn!(error = %err, "discarding malformed availability data");
            Vec::new()
        },
        parsed => parsed.into_windows(),
    }
}

/// Human-readable summary of the windows, in the order given.
pub fn describe_availability(windows: &[AvailabilityWindow], messages: &Messages) -> String {
    if windows.is_empty() {
        return messages.no_availability.clone();
    }

    let periods = windows
        .iter()
        .map(|window| {
            format!(
                "{} {} {}",
                format_date(window.start),
                messages.period_joiner,
                format_date(window.end)
            )
        })
        .collect::<Vec<_>>()
        .join(WINDOW_SEPARATOR);

    format!("{}{periods}", messages.availability_prefix)
}

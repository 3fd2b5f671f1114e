use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::{AvailabilityWindow, types::format_date};

/// Earliest start and latest end across a property's windows.
/// Used to constrain the date inputs of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: NaiveDateTime,
    max: NaiveDateTime,
}

/// `min`/`max` attributes for a date input, as `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateConstraints {
    pub min: String,
    pub max: String,
}

impl Bounds {
    pub const fn min(&self) -> NaiveDateTime {
        self.min
    }

    pub const fn max(&self) -> NaiveDateTime {
        self.max
    }

    /// Both bounds formatted for a date input
    pub fn input_range(&self) -> DateConstraints {
        DateConstraints {
            min: format_date(self.min),
            max: format_date(self.max),
        }
    }
}

/// Computes the selectable bounds for `windows`, falling back to the current local time.
pub fn compute_bounds(windows: &[AvailabilityWindow]) -> Bounds {
    compute_bounds_at(windows, Local::now().naive_local())
}

/// Computes the selectable bounds for `windows`; `now` is used for both ends when there are none.
///
/// Ties keep the first window encountered.
pub fn compute_bounds_at(windows: &[AvailabilityWindow], now: NaiveDateTime) -> Bounds {
    let Some((first, rest)) = windows.split_first() else {
        debug!(%now, "no availability windows, bounding to now");
        return Bounds { min: now, max: now };
    };

    let earliest = rest
        .iter()
        .fold(first, |a, b| if b.start() < a.start() { b } else { a });
    let latest = rest
        .iter()
        .fold(first, |a, b| if b.end() > a.end() { b } else { a });

    Bounds {
        min: earliest.start(),
        max: latest.end(),
    }
}

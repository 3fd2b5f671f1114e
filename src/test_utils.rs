//! Builders shared by the unit tests.

use crate::{AvailabilityWindow, Property, types::parse_date};
use chrono::NaiveDate;

pub fn date(raw: &str) -> NaiveDate {
    parse_date(raw).unwrap_or_else(|err| panic!("test date {raw:?} should parse: {err}"))
}

pub fn window(start: &str, end: &str) -> AvailabilityWindow {
    AvailabilityWindow::from_dates(date(start), date(end))
}

pub fn property() -> Property {
    Property::new("42", "Casa Azul", "Paraty, RJ")
}

/// Installs a subscriber writing to the test harness output; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! Availability windows and stay validation for a rental booking widget.
//!
//! A property's availability arrives as a JSON list of date-only windows,
//! `[{"start": "YYYY-MM-DD", "end": "YYYY-MM-DD"}, ...]`. Each window covers its
//! start day from 00:00:00 through its end day at 23:59:59. A stay is accepted only
//! when it fits entirely inside a single window.
//!
//! ```
//! use stay_window::{Decision, parse_availability, validate_stay_request};
//!
//! let windows = parse_availability(Some(r#"[{"start":"2024-06-01","end":"2024-06-10"}]"#));
//!
//! assert!(validate_stay_request("2024-06-03", "2024-06-05", &windows).is_accepted());
//! assert_eq!(
//!     validate_stay_request("2024-06-09", "2024-06-12", &windows),
//!     Decision::OutsideAvailability
//! );
//! ```

mod booking;
mod bounds;
mod config;
mod consts;
mod decision;
mod prelude;
mod session;
mod types;
mod window;

#[cfg(test)]
mod test_utils;

pub use booking::BookingContext;
pub use bounds::{Bounds, DateConstraints, compute_bounds, compute_bounds_at};
pub use config::{ConfigError, Messages};
pub use consts::*;
pub use decision::{Decision, Feedback, Status, StayRequest, is_stay_contained, validate_stay_request};
pub use session::{Session, SessionError, requires_sign_in};
pub use types::{DateError, Property, end_of_day, format_date, parse_date, start_of_day};
pub use window::{
    AvailabilityError, AvailabilityWindow, ParsedAvailability, describe_availability, parse_availability,
    parse_availability_tagged,
};

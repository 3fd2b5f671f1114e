use chrono::NaiveTime;

/// Date-only wire and display format (`YYYY-MM-DD`, zero-padded)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time of day a window or check-in starts at
pub const START_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(0, 0, 0) {
    Some(time) => time,
    None => panic!("midnight is a valid time of day"),
};

/// Last second of the day a window or check-out ends at (inclusive)
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => panic!("23:59:59 is a valid time of day"),
};

/// Joins the formatted windows in an availability summary
pub const WINDOW_SEPARATOR: &str = " • ";

/// Status class for feedback that carries no verdict
pub const STATUS_NEUTRAL: &str = "";
/// Status class for a request the user can fix by completing the form
pub const STATUS_WARNING: &str = "warn";
/// Status class for a rejected request
pub const STATUS_ERROR: &str = "err";
/// Status class for an accepted request
pub const STATUS_SUCCESS: &str = "ok";

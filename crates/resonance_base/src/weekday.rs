//! Weekday → day ruler.
//!
//! Each weekday is ruled by the planet of its first daytime hour.

use chrono::{DateTime, FixedOffset, TimeZone, Utc, Weekday};

use crate::planet::Planet;

/// Planet ruling the first daytime hour of a weekday.
pub const fn day_ruler(weekday: Weekday) -> Planet {
    match weekday {
        Weekday::Sun => Planet::Sun,
        Weekday::Mon => Planet::Moon,
        Weekday::Tue => Planet::Mars,
        Weekday::Wed => Planet::Mercury,
        Weekday::Thu => Planet::Jupiter,
        Weekday::Fri => Planet::Venus,
        Weekday::Sat => Planet::Saturn,
    }
}

/// Weekday of an instant in a fixed local offset.
///
/// The solar day belongs to the local weekday on which its sunrise falls.
pub fn local_weekday(instant: DateTime<Utc>, offset: FixedOffset) -> Weekday {
    use chrono::Datelike;
    offset.from_utc_datetime(&instant.naive_utc()).weekday()
}

use jiff::{Timestamp, Zoned, tz};

/// Show a timestamp in the browser's timezone.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(tz::TimeZone::system())
}

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Converts a modified Julian date and a duration past midnight into a UTC timestamp.
pub(crate) fn get_datetime(modified_julian_date: u16, past_midnight: Duration) -> Option<DateTime<Utc>> {
    let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).single()?;
    epoch
        .checked_add_signed(Duration::days(modified_julian_date as i64 - 1))?
        .checked_add_signed(past_midnight)
}

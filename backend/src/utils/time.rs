use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Today's date in the configured timezone; leaves record it as their applied date.
pub fn today_local(tz: &Tz) -> NaiveDate {
    local_date(Utc::now(), tz)
}

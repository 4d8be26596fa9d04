//! Business-day arithmetic over inclusive leave intervals.

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusinessDayError {
    /// The caller passed an interval whose start lies after its end.
    #[error("invalid range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
}

/// Returns `true` for Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the weekdays in `[from, to]`, both ends included.
///
/// The interval must be ordered; `from > to` is a caller bug and is reported as
/// [`BusinessDayError::InvalidRange`] instead of an empty count.
pub fn count_business_days(from: NaiveDate, to: NaiveDate) -> Result<u32, BusinessDayError> {
    if from > to {
        return Err(BusinessDayError::InvalidRange { from, to });
    }

    let count = from
        .iter_days()
        .take_while(|day| *day <= to)
        .filter(|day| is_business_day(*day))
        .count();

    Ok(count as u32)
}

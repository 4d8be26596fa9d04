//! `MM/DD/YYYY` date format exchanged with API clients.
//!
//! Formatting is done digit by digit rather than through chrono's strftime so
//! the output never depends on locale settings.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireDateError {
    #[error("expected MM/DD/YYYY, got {0:?}")]
    Malformed(String),
    #[error("{0:?} is not a calendar date")]
    OutOfRange(String),
}

/// Formats a date as zero-padded `MM/DD/YYYY`.
///
/// The wire format covers years 0000 through 9999; every date accepted by
/// [`from_wire_format`] lies in that range.
pub fn to_wire_format(date: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.month(),
        date.day(),
        date.year()
    )
}

/// Parses the exact output of [`to_wire_format`].
pub fn from_wire_format(raw: &str) -> Result<NaiveDate, WireDateError> {
    let malformed = || WireDateError::Malformed(raw.to_string());

    let mut parts = raw.split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    if month.len() != 2 || day.len() != 2 || year.len() != 4 {
        return Err(malformed());
    }
    if ![month, day, year]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(malformed());
    }

    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| WireDateError::OutOfRange(raw.to_string()))
}

/// Serde adapter for `NaiveDate` fields carried in wire format.
pub mod serde_wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_wire_format(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::from_wire_format(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(to_wire_format(date(2025, 4, 1)), "04/01/2025");
        assert_eq!(to_wire_format(date(2025, 12, 31)), "12/31/2025");
        assert_eq!(to_wire_format(date(987, 1, 9)), "01/09/0987");
    }

    #[test]
    fn parse_inverts_format() {
        let start = date(2023, 12, 25);
        for offset in 0..800 {
            let d = start + chrono::Duration::days(offset);
            assert_eq!(from_wire_format(&to_wire_format(d)).unwrap(), d);
        }
        for edge in [date(0, 1, 1), date(9999, 12, 31)] {
            assert_eq!(from_wire_format(&to_wire_format(edge)).unwrap(), edge);
        }
    }

    #[test]
    fn parse_rejects_other_layouts() {
        for raw in [
            "",
            "2025-04-01",
            "4/1/2025",
            "04/01/25",
            "04-01-2025",
            "04/01/2025/",
            " 04/01/2025",
            "+4/01/2025",
        ] {
            assert!(
                matches!(from_wire_format(raw), Err(WireDateError::Malformed(_))),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_rejects_years_beyond_four_digits() {
        for raw in ["01/01/10000", "12/31/262142", "01/01/099"] {
            assert_eq!(
                from_wire_format(raw),
                Err(WireDateError::Malformed(raw.into())),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert_eq!(
            from_wire_format("02/30/2025"),
            Err(WireDateError::OutOfRange("02/30/2025".into()))
        );
        assert!(from_wire_format("02/29/2024").is_ok());
        assert!(from_wire_format("13/01/2025").is_err());
    }

    #[test]
    fn serde_adapter_uses_wire_format() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Holder {
            #[serde(with = "serde_wire_date")]
            day: NaiveDate,
        }

        let json = serde_json::to_value(Holder { day: date(2025, 4, 1) }).unwrap();
        assert_eq!(json, serde_json::json!({ "day": "04/01/2025" }));

        let back: Holder = serde_json::from_value(json).unwrap();
        assert_eq!(back.day, date(2025, 4, 1));
        assert!(serde_json::from_value::<Holder>(serde_json::json!({ "day": "2025-04-01" })).is_err());
    }
}

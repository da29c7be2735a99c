use std::{fmt::Display, str::FromStr};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The calendar date of a trading session.
///
/// Dates are always rendered and parsed as ISO 8601 calendar dates
/// (`YYYY-MM-DD`), both on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TradingDate(pub Date);

/// The error returned when a value is not an ISO 8601 calendar date
#[derive(Debug, thiserror::Error)]
#[error("invalid date {value:?}, expected YYYY-MM-DD")]
pub struct DateError {
    value: String,
}

impl TradingDate {
    /// Number of whole days from `self` to `later` (negative if `later` is earlier)
    pub fn days_until(&self, later: TradingDate) -> i64 {
        (later.0 - self.0).whole_days()
    }
}

impl From<Date> for TradingDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl From<TradingDate> for Date {
    fn from(value: TradingDate) -> Self {
        value.0
    }
}

impl FromStr for TradingDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s, ISO_DATE).map(Self).map_err(|_| DateError {
            value: s.to_owned(),
        })
    }
}

impl Display for TradingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.0.format(ISO_DATE).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TradingDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TradingDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for TradingDate {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        "TradingDate".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "format": "date",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_and_display() {
        let parsed: TradingDate = "2025-07-17".parse().unwrap();
        assert_eq!(parsed, TradingDate(date!(2025 - 07 - 17)));
        assert_eq!(parsed.to_string(), "2025-07-17");
    }

    #[test]
    fn test_rejects_other_formats() {
        assert!("17/07/2025".parse::<TradingDate>().is_err());
        assert!("2025-13-01".parse::<TradingDate>().is_err());
        assert!("".parse::<TradingDate>().is_err());
    }

    #[test]
    fn test_days_until() {
        let start = TradingDate(date!(2025 - 07 - 17));
        let end = TradingDate(date!(2025 - 07 - 24));
        assert_eq!(start.days_until(end), 7);
        assert_eq!(end.days_until(start), -7);
        assert_eq!(start.days_until(start), 0);
    }

    #[test]
    fn test_serde() {
        let value: TradingDate = serde_json::from_str(r#""2025-07-18""#).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""2025-07-18""#);
        assert!(serde_json::from_str::<TradingDate>(r#""18.07.2025""#).is_err());
    }
}

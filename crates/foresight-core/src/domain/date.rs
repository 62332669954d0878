use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, Weekday};

use crate::ValidationError;

/// Calendar date of a daily close, serialized as ISO `YYYY-MM-DD`.
///
/// Business-day arithmetic uses a weekday-only calendar; exchange holidays
/// are not excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDate(Date);

impl TradingDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(input.trim(), format)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    /// Today's date in UTC, used to anchor history fetch ranges.
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn is_business_day(self) -> bool {
        !matches!(self.0.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// First weekday strictly after `self`; a weekend successor rolls
    /// forward to Monday.
    pub fn next_business_day(self) -> Self {
        let mut next = self.0 + Duration::days(1);
        while matches!(next.weekday(), Weekday::Saturday | Weekday::Sunday) {
            next += Duration::days(1);
        }
        Self(next)
    }

    /// Calendar days elapsed from `earlier` to `self` (negative when
    /// `earlier` is later).
    pub fn days_since(self, earlier: Self) -> i64 {
        i64::from(self.0.to_julian_day() - earlier.0.to_julian_day())
    }

    pub fn minus_days(self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    pub fn format_iso(self) -> String {
        let format = format_description!("[year]-[month]-[day]");
        self.0
            .format(format)
            .expect("calendar date must be ISO formattable")
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }
}

impl From<Date> for TradingDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Display for TradingDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradingDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradingDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

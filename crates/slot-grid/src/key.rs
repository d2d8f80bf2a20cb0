//! Dataset lookup keys and their canonical string grammar.
//!
//! The temperature table names its columns 'X%Y.%m.%d.%H.%M.%S' (UTC,
//! zero padded, literal 'X' prefix); the daily aggregate tables use the
//! local-date spelling 'X%Y.%m.%d'. [`UtcKey`] and [`DateKey`] render and
//! parse exactly those forms; a lookup only succeeds when the rendered
//! key matches a published column byte for byte.
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Canonical key for one 3-hourly reading in the temperature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcKey(DateTime<Utc>);

/// Canonical key for one local calendar day in the daily aggregate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

macro_rules! ensure_2_digits {
    ($w:expr, $buf:expr, $field:expr) => {{
        let s = $buf.format($field);
        if s.len() == 1 {
            $w.write_str("0")?;
        }
        $w.write_str(s)?;
    }};
}

fn write_date_components<W: fmt::Write>(
    w: &mut W,
    buf: &mut itoa::Buffer,
    date: NaiveDate,
) -> fmt::Result {
    w.write_str("X")?;

    let year = buf.format(date.year());
    let prepended_zeros = 4_usize.saturating_sub(year.len());

    for _ in 0..prepended_zeros {
        w.write_str("0")?;
    }
    w.write_str(year)?;

    w.write_str(".")?;
    ensure_2_digits!(w, buf, date.month());
    w.write_str(".")?;
    ensure_2_digits!(w, buf, date.day());
    Ok(())
}

impl UtcKey {
    /// Wraps an already-derived UTC instant.
    #[inline]
    pub const fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// The UTC instant this key names.
    #[inline]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// Writes the key into an existing [`fmt::Write`] type.
    pub fn format_into<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let mut buf = itoa::Buffer::new();

        write_date_components(w, &mut buf, self.0.date_naive())?;

        w.write_str(".")?;
        ensure_2_digits!(w, buf, self.0.hour());
        w.write_str(".")?;
        ensure_2_digits!(w, buf, self.0.minute());
        w.write_str(".")?;
        ensure_2_digits!(w, buf, self.0.second());
        Ok(())
    }
}

impl DateKey {
    /// Wraps a local calendar date.
    #[inline]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The local calendar date this key names.
    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Writes the key into an existing [`fmt::Write`] type.
    pub fn format_into<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        write_date_components(w, &mut buf, self.0)
    }
}

impl fmt::Display for UtcKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_into(formatter)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_into(formatter)
    }
}

/// Information about a string that isn't a valid lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKey {
    field: KeyField,
    reason: InvalidKeyReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyField {
    Prefix,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Trailer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InvalidKeyReason {
    Missing,
    Invalid,
    OutOfRange,
    Unexpected,
}

impl fmt::Display for InvalidKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            KeyField::Prefix => "prefix",
            KeyField::Year => "year",
            KeyField::Month => "month",
            KeyField::Day => "day",
            KeyField::Hour => "hour",
            KeyField::Minute => "minute",
            KeyField::Second => "second",
            KeyField::Trailer => "trailing component",
        };

        let reason = match self.reason {
            InvalidKeyReason::Missing => "missing",
            InvalidKeyReason::Invalid => "invalid",
            InvalidKeyReason::OutOfRange => "out of range",
            InvalidKeyReason::Unexpected => "unexpected",
        };

        write!(formatter, "invalid lookup key: '{field}' is {reason}")
    }
}

impl std::error::Error for InvalidKey {}

impl InvalidKey {
    const fn missing(field: KeyField) -> Self {
        Self {
            field,
            reason: InvalidKeyReason::Missing,
        }
    }

    const fn out_of_range(field: KeyField) -> Self {
        Self {
            field,
            reason: InvalidKeyReason::OutOfRange,
        }
    }

    const TRAILER: Self = Self {
        field: KeyField::Trailer,
        reason: InvalidKeyReason::Unexpected,
    };
}

/// Both key grammars are exact; anything after the last expected
/// component makes the name a different column's.
fn expect_exhausted<'a, I>(components: &mut I) -> Result<(), InvalidKey>
where
    I: Iterator<Item = &'a str>,
{
    match components.next() {
        Some(_) => Err(InvalidKey::TRAILER),
        None => Ok(()),
    }
}

macro_rules! parse_component {
    ($iter:expr; $t:ty; $var:ident) => {{
        $iter
            .next()
            .ok_or_else(|| InvalidKey::missing(KeyField::$var))?
            .parse::<$t>()
            .map_err(|_| InvalidKey {
                field: KeyField::$var,
                reason: InvalidKeyReason::Invalid,
            })?
    }};
}

fn parse_date_components<'a, I>(components: &mut I) -> Result<NaiveDate, InvalidKey>
where
    I: Iterator<Item = &'a str>,
{
    let year = parse_component!(components; i32; Year);
    let month = parse_component!(components; u32; Month);
    let day = parse_component!(components; u32; Day);

    if !(1..=12).contains(&month) {
        return Err(InvalidKey::out_of_range(KeyField::Month));
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| InvalidKey::out_of_range(KeyField::Day))
}

impl FromStr for UtcKey {
    type Err = InvalidKey;

    /// Parses a temperature-table column name of the form
    /// 'X2020.01.01.00.00.00'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .trim()
            .strip_prefix('X')
            .ok_or_else(|| InvalidKey::missing(KeyField::Prefix))?;

        let mut components = rest.split('.');

        let date = parse_date_components(&mut components)?;

        let hour = parse_component!(components; u32; Hour);
        let minute = parse_component!(components; u32; Minute);
        let second = parse_component!(components; u32; Second);

        if hour > 23 {
            return Err(InvalidKey::out_of_range(KeyField::Hour));
        }
        if minute > 59 {
            return Err(InvalidKey::out_of_range(KeyField::Minute));
        }
        if second > 59 {
            return Err(InvalidKey::out_of_range(KeyField::Second));
        }

        expect_exhausted(&mut components)?;

        let naive = date
            .and_hms_opt(hour, minute, second)
            .expect("components are range checked above");

        Ok(Self(Utc.from_utc_datetime(&naive)))
    }
}

impl FromStr for DateKey {
    type Err = InvalidKey;

    /// Parses a daily-aggregate column name of the form 'X2020.01.01'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .trim()
            .strip_prefix('X')
            .ok_or_else(|| InvalidKey::missing(KeyField::Prefix))?;

        let mut components = rest.split('.');

        let date = parse_date_components(&mut components)?;
        expect_exhausted(&mut components)?;

        Ok(Self(date))
    }
}

impl Serialize for UtcKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UtcKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_key_display() {
        let key = UtcKey::from_instant(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(key.to_string(), "X2020.01.01.00.00.00");

        let key = UtcKey::from_instant(Utc.with_ymd_and_hms(2023, 11, 5, 6, 0, 0).unwrap());
        assert_eq!(key.to_string(), "X2023.11.05.06.00.00");
    }

    #[test]
    fn test_utc_key_round_trip() {
        let key: UtcKey = "X2021.07.15.18.00.00".parse().unwrap();

        assert_eq!(
            key.instant(),
            Utc.with_ymd_and_hms(2021, 7, 15, 18, 0, 0).unwrap()
        );
        assert_eq!(key.to_string(), "X2021.07.15.18.00.00");
    }

    #[test]
    fn test_invalid_keys() {
        // no prefix
        assert!("2020.01.01.00.00.00".parse::<UtcKey>().is_err());
        // missing time components
        assert!("X2020.01.01".parse::<UtcKey>().is_err());
        // component ranges
        assert!("X2020.13.01.00.00.00".parse::<UtcKey>().is_err());
        assert!("X2020.02.30.00.00.00".parse::<UtcKey>().is_err());
        assert!("X2020.01.01.24.00.00".parse::<UtcKey>().is_err());
        // trailing components belong to some other column
        assert!("X2020.01.01.00.00.00.00".parse::<UtcKey>().is_err());
        // not a key at all (the zone-name column)
        assert!("zone".parse::<UtcKey>().is_err());
    }

    #[test]
    fn test_date_key() {
        let key = DateKey::from_date(NaiveDate::from_ymd_opt(2020, 11, 1).unwrap());

        assert_eq!(key.to_string(), "X2020.11.01");
        assert_eq!("X2020.11.01".parse::<DateKey>().unwrap(), key);

        assert!("X2020.02.30".parse::<DateKey>().is_err());

        // a full temperature-table key is not a daily column
        assert!("X2020.11.01.06.00.00".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let key: UtcKey = "X2020.11.01.06.00.00".parse().unwrap();

        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"X2020.11.01.06.00.00\"");
        assert_eq!(serde_json::from_str::<UtcKey>(&json).unwrap(), key);
    }
}

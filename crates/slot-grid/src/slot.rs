//! [`Slot`] definition + impls.
use std::fmt;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Serialize};

/// A selectable hour of the day in local civil time, within '0..=23'.
///
/// Which slots are actually offered on a given date is decided by the
/// grid for that date (see [`DayKind::slots`]); a [`Slot`] on its own only
/// guarantees a valid hour.
///
/// [`DayKind::slots`]: [`crate::DayKind::slots`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u8);

impl Slot {
    /// Builds a [`Slot`], checking that the hour is within '0..=23'.
    #[inline]
    pub const fn new(hour: u8) -> Option<Self> {
        if hour < 24 { Some(Self(hour)) } else { None }
    }

    /// Builds a [`Slot`] from an hour known to be in range.
    ///
    /// Panics if the hour is 24 or greater. See [`Slot::new`] for a
    /// checked, non-panicking variant.
    #[inline]
    pub const fn from_hour(hour: u8) -> Self {
        match Self::new(hour) {
            Some(slot) => slot,
            None => panic!("slot hour out of range, must be within '0..=23'"),
        }
    }

    /// The hour of the day this [`Slot`] names.
    #[inline]
    pub const fn hour(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Information about an hour that can't be a [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlot(pub u8);

impl fmt::Display for InvalidSlot {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} is not a valid slot hour, expected a value 0..=23",
            self.0
        )
    }
}

impl std::error::Error for InvalidSlot {}

impl TryFrom<u8> for Slot {
    type Error = InvalidSlot;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::new(value) {
            Some(slot) => Ok(slot),
            None => Err(InvalidSlot(value)),
        }
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hour = u8::deserialize(deserializer)?;

        Slot::new(hour).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Unsigned(hour as u64), &"an hour within 0..=23")
        })
    }
}

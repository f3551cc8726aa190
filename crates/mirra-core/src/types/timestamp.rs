use crate::types::Date;
use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{num::ParseIntError, str::FromStr};

const SECS_PER_DAY: u64 = 86_400;

///
/// Timestamp
/// (seconds since the Unix epoch)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Sub,
    SubAssign,
)]
#[display("{_0}")]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms / 1_000)
    }

    /// Construct from microseconds (truncate to seconds).
    #[must_use]
    pub const fn from_micros(us: u64) -> Self {
        Self(us / 1_000_000)
    }

    /// Construct from nanoseconds (truncate to seconds).
    #[must_use]
    pub const fn from_nanos(ns: u64) -> Self {
        Self(ns / 1_000_000_000)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Calendar day this instant falls on.
    #[must_use]
    pub fn to_date(self) -> Date {
        Date::from_days(i32::try_from(self.0 / SECS_PER_DAY).unwrap_or(i32::MAX))
    }
}

impl FromStr for Timestamp {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str(s).map(Self)
    }
}

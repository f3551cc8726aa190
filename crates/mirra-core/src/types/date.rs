use derive_more::{Add, AddAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error as ThisError;
use time::{Date as TimeDate, Month};

/// Julian day number of 1970-01-01.
const EPOCH_JULIAN_DAY: i32 = 2_440_588;

///
/// Date
///
/// Day-precision calendar date stored as days since the Unix epoch.
/// Out-of-range day counts degrade to the epoch rather than panic.
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);

    fn epoch_time_date() -> TimeDate {
        match TimeDate::from_calendar_date(1970, Month::January, 1) {
            Ok(d) => d,
            Err(_) => unreachable!(),
        }
    }

    /// Build a date, clamping the month into `1..=12` and the day onto the
    /// last valid day of that month.
    #[must_use]
    pub fn new(y: i32, m: u8, d: u8) -> Self {
        let m = m.clamp(1, 12);

        let Ok(month) = Month::try_from(m) else {
            return Self::EPOCH;
        };

        let last_valid_day = (28..=31)
            .rev()
            .find(|&day| TimeDate::from_calendar_date(y, month, day).is_ok());

        let Some(last_valid_day) = last_valid_day else {
            return Self::EPOCH;
        };

        match TimeDate::from_calendar_date(y, month, d.clamp(1, last_valid_day)) {
            Ok(date) => Self::from_time_date(date),
            Err(_) => Self::EPOCH,
        }
    }

    /// Build a date, rejecting invalid components.
    #[must_use]
    pub fn new_checked(y: i32, m: u8, d: u8) -> Option<Self> {
        let month = Month::try_from(m).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;

        Some(Self::from_time_date(date))
    }

    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    /// Days since the Unix epoch.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the year component (e.g. 2025).
    #[must_use]
    pub fn year(self) -> i32 {
        self.to_time_date().year()
    }

    /// Returns the month component (1–12).
    #[must_use]
    pub fn month(self) -> u8 {
        self.to_time_date().month().into()
    }

    /// Returns the day-of-month component (1–31).
    #[must_use]
    pub fn day(self) -> u8 {
        self.to_time_date().day()
    }

    fn from_time_date(date: TimeDate) -> Self {
        Self(date.to_julian_day() - EPOCH_JULIAN_DAY)
    }

    fn to_time_date(self) -> TimeDate {
        let day = self.0.saturating_add(EPOCH_JULIAN_DAY);

        match TimeDate::from_julian_day(day) {
            Ok(date) => date,
            Err(_) => Self::epoch_time_date(),
        }
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.to_time_date();

        write!(f, "{:04}-{:02}-{:02}", d.year(), u8::from(d.month()), d.day())
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');

        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DateError::Format);
        };

        let y: i32 = y.parse().map_err(|_| DateError::Format)?;
        let m: u8 = m.parse().map_err(|_| DateError::Format)?;
        let d: u8 = d.parse().map_err(|_| DateError::Format)?;

        Self::new_checked(y, m, d).ok_or(DateError::OutOfRange)
    }
}

///
/// DateError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum DateError {
    #[error("expected a `YYYY-MM-DD` date")]
    Format,

    #[error("date components are out of range")]
    OutOfRange,
}

///
/// TESTS
///

//! Time-of-day selection and composition.
//!
//! The time panel is three independent wheels with fixed cardinalities:
//! 24 hours, 60 minutes, 60 seconds. The counts are a UI/engine contract
//! and never depend on data. Values outside a unit's domain are a usage
//! error and fail fast; nothing is clamped.

use alloc::format;
use alloc::string::String;

use time::macros::time;
use time::{Date, PrimitiveDateTime, Time};

/// Entries in the hour wheel.
pub const HOUR_WHEEL_LEN: usize = 24;

/// Entries in the minute wheel.
pub const MINUTE_WHEEL_LEN: usize = 60;

/// Entries in the second wheel.
pub const SECOND_WHEEL_LEN: usize = 60;

/// A validated hour/minute/second triple.
///
/// Defaults to noon, the picker's initial time when time selection is
/// enabled and the user has not chosen one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay(Time);

/// A time component outside its legal domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimeOfDayError {
    /// Hour outside `0..=23`.
    #[error("hour {0} is outside 0..=23")]
    Hour(u8),
    /// Minute outside `0..=59`.
    #[error("minute {0} is outside 0..=59")]
    Minute(u8),
    /// Second outside `0..=59`.
    #[error("second {0} is outside 0..=59")]
    Second(u8),
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::NOON
    }
}

impl From<Time> for TimeOfDay {
    fn from(time: Time) -> Self {
        Self(time)
    }
}

impl TimeOfDay {
    /// The default time: 12:00:00.
    pub const NOON: Self = Self(time!(12:00:00));

    /// Creates a time of day, validating every component.
    ///
    /// # Errors
    /// Returns the first out-of-domain component as a [`TimeOfDayError`].
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeOfDayError> {
        Self::NOON
            .with_hour(hour)?
            .with_minute(minute)?
            .with_second(second)
    }

    /// Replaces the hour.
    ///
    /// # Errors
    /// Returns [`TimeOfDayError::Hour`] when `hour > 23`.
    pub fn with_hour(self, hour: u8) -> Result<Self, TimeOfDayError> {
        Time::from_hms(hour, self.0.minute(), self.0.second())
            .map(Self)
            .map_err(|_| TimeOfDayError::Hour(hour))
    }

    /// Replaces the minute.
    ///
    /// # Errors
    /// Returns [`TimeOfDayError::Minute`] when `minute > 59`.
    pub fn with_minute(self, minute: u8) -> Result<Self, TimeOfDayError> {
        Time::from_hms(self.0.hour(), minute, self.0.second())
            .map(Self)
            .map_err(|_| TimeOfDayError::Minute(minute))
    }

    /// Replaces the second.
    ///
    /// # Errors
    /// Returns [`TimeOfDayError::Second`] when `second > 59`.
    pub fn with_second(self, second: u8) -> Result<Self, TimeOfDayError> {
        Time::from_hms(self.0.hour(), self.0.minute(), second)
            .map(Self)
            .map_err(|_| TimeOfDayError::Second(second))
    }

    /// The hour, `0..=23`.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.0.hour()
    }

    /// The minute, `0..=59`.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.0.minute()
    }

    /// The second, `0..=59`.
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.0.second()
    }

    /// Merges a calendar date and this time into one instant.
    #[must_use]
    pub const fn compose(&self, date: Date) -> PrimitiveDateTime {
        PrimitiveDateTime::new(date, self.0)
    }
}

/// Zero-padded labels for the hour wheel. Always 24 entries.
#[must_use]
pub fn hour_wheel() -> [String; HOUR_WHEEL_LEN] {
    core::array::from_fn(|index| format!("{index:02}"))
}

/// Zero-padded labels for the minute wheel. Always 60 entries.
#[must_use]
pub fn minute_wheel() -> [String; MINUTE_WHEEL_LEN] {
    core::array::from_fn(|index| format!("{index:02}"))
}

/// Zero-padded labels for the second wheel. Always 60 entries.
#[must_use]
pub fn second_wheel() -> [String; SECOND_WHEEL_LEN] {
    core::array::from_fn(|index| format!("{index:02}"))
}

//! Wall-clock time of day for log labels
//!
//! A [`Timestamp`] is computed fresh for every log call from a
//! [`TimeSource`]. Loggers use [`LocalClock`] unless told otherwise; tests and
//! golden-output tooling can pin the time with [`FixedClock`].

use chrono::{Local, Timelike};
use std::fmt;

/// Hours, minutes and seconds of the local time of day
///
/// Fields are always in range (`0..=23`, `0..=59`, `0..=59`) and render as
/// `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Timestamp {
    /// Returns `None` if any field is out of range
    #[must_use]
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return None;
        }
        Some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Take the time of day from any chrono time value
    ///
    /// chrono reports a leap second as second 59 with an oversized
    /// nanosecond field, so the result is always in range.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hours: time.hour().min(23) as u8,
            minutes: time.minute().min(59) as u8,
            seconds: time.second().min(59) as u8,
        }
    }

    #[inline]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Source of the time stamped onto each log line
pub trait TimeSource: Send {
    fn now(&self) -> Timestamp;
}

/// The process's local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_time(&Local::now())
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl TimeSource for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

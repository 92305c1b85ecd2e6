//! Where "today" and "now" come from.
//!
//! Nothing in this crate reads the system time directly. Code that needs the
//! current date or time takes a [`Clock`], so tests can pin it with a
//! [`FixedClock`].

use chrono::{DateTime, TimeZone, Utc};

use crate::prelude::*;
use crate::{Date, RangeError, TimeOfDay};

/// A source of the current instant.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_utc(&self) -> DateTime<Utc> {
        (**self).now_utc()
    }
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        let now = Utc::now();
        _debug!(now = %now, "read system clock");
        now
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Date {
    /// The current date in UTC.
    ///
    /// # Errors
    /// Returns a `RangeError` if the clock reads a year after 9999.
    pub fn today_utc(clock: &impl Clock) -> Result<Self, RangeError> {
        Self::from_naive_date(clock.now_utc().date_naive())
    }

    /// The current date in the given time zone. Pass `chrono::Local` for the
    /// machine's own zone.
    ///
    /// # Errors
    /// Returns a `RangeError` if the local date falls outside
    /// 0001-01-01..=9999-12-31.
    pub fn today_in<Tz: TimeZone>(clock: &impl Clock, tz: &Tz) -> Result<Self, RangeError> {
        let local = clock.now_utc().with_timezone(tz).naive_local();
        _debug!(local = %local, "resolved local date");
        Self::from_native_timestamp(local)
    }
}

impl TimeOfDay {
    /// The current time of day in UTC.
    pub fn now_utc(clock: &impl Clock) -> Self {
        Self::from_naive_time(clock.now_utc().time())
    }

    /// The current time of day in the given time zone.
    pub fn now_in<Tz: TimeZone>(clock: &impl Clock, tz: &Tz) -> Self {
        Self::from_native_timestamp(clock.now_utc().with_timezone(tz).naive_local())
    }
}

//! Time of day on a 24-hour clock, counted in 100-nanosecond ticks.
//!
//! Equality and ordering are linear within a single day, so 23:00 sorts
//! after 01:00. Addition, subtraction, [`TimeOfDay::is_between`] and
//! [`TimeOfDay::duration_between`] are circular instead: they wrap through
//! midnight.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::consts::{
    FRACTION_SEPARATOR, NANOS_PER_TICK, SECONDS_PER_DAY, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND,
    TICKS_PER_MINUTE, TICKS_PER_SECOND, TIME_SEPARATOR,
};
use crate::format::{self, Target};
use crate::prelude::*;
use crate::{Date, Error, FormatError, RangeError};

/// Digits in a fraction of a second at tick precision
const FRACTION_DIGITS: usize = 7;

/// Ante or post meridiem, for 12-hour clock values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    #[serde(rename = "AM")]
    Am,
    #[display(fmt = "PM")]
    #[serde(rename = "PM")]
    Pm,
}

/// Converts an hour on a 12-hour clock (1-12) into an hour on a 24-hour
/// clock (0-23). 12 AM is midnight and 12 PM is noon.
///
/// # Errors
/// Returns a `RangeError` naming `hour` if `hour12` is outside `1..=12`.
pub fn hours12_to_24(hour12: u32, meridiem: Meridiem) -> Result<u32, RangeError> {
    if !(1..=12).contains(&hour12) {
        return Err(RangeError::new("hour", i64::from(hour12)));
    }
    Ok(match (meridiem, hour12) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, hour) | (Meridiem::Pm, hour @ 12) => hour,
        (Meridiem::Pm, hour) => hour + 12,
    })
}

fn check_field(param: &'static str, value: u32, limit: u32) -> Result<i64, RangeError> {
    if value < limit {
        Ok(i64::from(value))
    } else {
        Err(RangeError::new(param, i64::from(value)))
    }
}

/// Reduces `count` units to less than a day's worth and converts to ticks.
const fn wrap_units(count: i64, ticks_per_unit: i64) -> i64 {
    count % (TICKS_PER_DAY / ticks_per_unit) * ticks_per_unit
}

/// A `TimeDelta` reduced modulo one day, in ticks. Sub-tick nanoseconds
/// are truncated.
fn wrap_delta(delta: TimeDelta) -> i64 {
    delta.num_seconds() % SECONDS_PER_DAY * TICKS_PER_SECOND + i64::from(delta.subsec_nanos()) / NANOS_PER_TICK
}

/// A time of day as read from a clock, from 00:00:00 through
/// 23:59:59.9999999, with no date attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct TimeOfDay {
    ticks: i64,
}

impl TimeOfDay {
    /// 00:00:00
    pub const MIN: Self = Self { ticks: 0 };

    /// 23:59:59.9999999
    pub const MAX: Self = Self {
        ticks: TICKS_PER_DAY - 1,
    };

    /// 00:00:00, the same as [`TimeOfDay::MIN`]
    pub const MIDNIGHT: Self = Self::MIN;

    /// 12:00:00
    pub const NOON: Self = Self {
        ticks: TICKS_PER_HOUR * 12,
    };

    /// Creates a time from the number of ticks since midnight.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `ticks` outside `0..=863999999999`.
    pub const fn from_ticks(ticks: i64) -> Result<Self, RangeError> {
        if ticks < 0 || ticks >= TICKS_PER_DAY {
            return Err(RangeError::new("ticks", ticks));
        }
        Ok(Self { ticks })
    }

    /// Creates a time from a 24-hour clock hour and a minute.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `hour` or `minute`.
    pub fn hm(hour: u32, minute: u32) -> Result<Self, RangeError> {
        Self::hms_milli(hour, minute, 0, 0)
    }

    /// Creates a time from a 24-hour clock hour, a minute and a second.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `hour`, `minute` or `second`.
    pub fn hms(hour: u32, minute: u32, second: u32) -> Result<Self, RangeError> {
        Self::hms_milli(hour, minute, second, 0)
    }

    /// Creates a time from 24-hour clock fields down to the millisecond.
    ///
    /// # Errors
    /// Returns a `RangeError` naming the first field that is out of range.
    pub fn hms_milli(hour: u32, minute: u32, second: u32, millisecond: u32) -> Result<Self, RangeError> {
        let ticks = check_field("hour", hour, 24)? * TICKS_PER_HOUR
            + check_field("minute", minute, 60)? * TICKS_PER_MINUTE
            + check_field("second", second, 60)? * TICKS_PER_SECOND
            + check_field("millisecond", millisecond, 1000)? * TICKS_PER_MILLISECOND;
        Ok(Self { ticks })
    }

    /// Creates a time from a 12-hour clock hour (1-12), a minute and a
    /// meridiem.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `hour` or `minute`.
    pub fn hm12(hour: u32, minute: u32, meridiem: Meridiem) -> Result<Self, RangeError> {
        Self::hm(hours12_to_24(hour, meridiem)?, minute)
    }

    /// 12-hour clock counterpart of [`TimeOfDay::hms`].
    ///
    /// # Errors
    /// Returns a `RangeError` naming `hour`, `minute` or `second`.
    pub fn hms12(hour: u32, minute: u32, second: u32, meridiem: Meridiem) -> Result<Self, RangeError> {
        Self::hms(hours12_to_24(hour, meridiem)?, minute, second)
    }

    /// 12-hour clock counterpart of [`TimeOfDay::hms_milli`].
    ///
    /// # Errors
    /// Returns a `RangeError` naming the first field that is out of range.
    pub fn hms_milli12(
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        meridiem: Meridiem,
    ) -> Result<Self, RangeError> {
        Self::hms_milli(hours12_to_24(hour, meridiem)?, minute, second, millisecond)
    }

    /// Ticks since midnight
    #[inline]
    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    /// Hour on a 24-hour clock, 0-23
    pub const fn hour24(self) -> u32 {
        (self.ticks / TICKS_PER_HOUR) as u32
    }

    /// Hour on a 12-hour clock, 1-12
    pub const fn hour12(self) -> u32 {
        match self.hour24() % 12 {
            0 => 12,
            hour => hour,
        }
    }

    /// AM before noon, PM from noon on
    pub const fn meridiem(self) -> Meridiem {
        if self.hour24() < 12 { Meridiem::Am } else { Meridiem::Pm }
    }

    /// Minute of the hour, 0-59
    pub const fn minute(self) -> u32 {
        (self.ticks / TICKS_PER_MINUTE % 60) as u32
    }

    /// Second of the minute, 0-59
    pub const fn second(self) -> u32 {
        (self.ticks / TICKS_PER_SECOND % 60) as u32
    }

    /// Millisecond of the second, 0-999
    pub const fn millisecond(self) -> u32 {
        (self.ticks / TICKS_PER_MILLISECOND % 1000) as u32
    }

    /// Ticks past the last whole second, 0-9999999
    pub const fn tick_of_second(self) -> u32 {
        (self.ticks % TICKS_PER_SECOND) as u32
    }

    /// Adds ticks on a circular clock: 23:00 plus two hours is 01:00.
    pub const fn add_ticks(self, ticks: i64) -> Self {
        Self {
            ticks: (self.ticks + TICKS_PER_DAY + ticks % TICKS_PER_DAY) % TICKS_PER_DAY,
        }
    }

    /// Adds whole hours, wrapping past midnight. For a fractional amount
    /// such as an hour and a half, use [`TimeOfDay::add_duration`].
    pub const fn add_hours(self, hours: i64) -> Self {
        self.add_ticks(wrap_units(hours, TICKS_PER_HOUR))
    }

    /// Adds whole minutes, wrapping past midnight.
    pub const fn add_minutes(self, minutes: i64) -> Self {
        self.add_ticks(wrap_units(minutes, TICKS_PER_MINUTE))
    }

    /// Adds whole seconds, wrapping past midnight.
    pub const fn add_seconds(self, seconds: i64) -> Self {
        self.add_ticks(wrap_units(seconds, TICKS_PER_SECOND))
    }

    /// Adds whole milliseconds, wrapping past midnight.
    pub const fn add_milliseconds(self, milliseconds: i64) -> Self {
        self.add_ticks(wrap_units(milliseconds, TICKS_PER_MILLISECOND))
    }

    /// Adds a duration of any length or sign, wrapping past midnight.
    /// Nanoseconds below one tick are dropped.
    pub fn add_duration(self, duration: TimeDelta) -> Self {
        self.add_ticks(wrap_delta(duration))
    }

    /// Subtracts ticks, wrapping back past midnight.
    pub const fn sub_ticks(self, ticks: i64) -> Self {
        self.add_ticks(-(ticks % TICKS_PER_DAY))
    }

    /// Subtracts whole hours. See [`TimeOfDay::sub_duration`] for
    /// fractional amounts.
    pub const fn sub_hours(self, hours: i64) -> Self {
        self.add_ticks(-wrap_units(hours, TICKS_PER_HOUR))
    }

    /// Subtracts whole minutes.
    pub const fn sub_minutes(self, minutes: i64) -> Self {
        self.add_ticks(-wrap_units(minutes, TICKS_PER_MINUTE))
    }

    /// Subtracts whole seconds.
    pub const fn sub_seconds(self, seconds: i64) -> Self {
        self.add_ticks(-wrap_units(seconds, TICKS_PER_SECOND))
    }

    /// Subtracts whole milliseconds.
    pub const fn sub_milliseconds(self, milliseconds: i64) -> Self {
        self.add_ticks(-wrap_units(milliseconds, TICKS_PER_MILLISECOND))
    }

    /// Subtracts a duration, wrapping back past midnight.
    pub fn sub_duration(self, duration: TimeDelta) -> Self {
        self.add_ticks(-wrap_delta(duration))
    }

    /// Whether this time falls in the range from `start` (inclusive) to
    /// `end` (exclusive).
    ///
    /// When `end` is earlier than `start` the range crosses midnight, so
    /// 00:30 is between 23:00 and 01:00. When `start == end` the range is
    /// empty.
    pub fn is_between(self, start: Self, end: Self) -> bool {
        if start <= end {
            start <= self && self < end
        } else {
            self >= start || self < end
        }
    }

    /// Time elapsed going forward from `start` to `end`, through midnight
    /// if needed. Never negative; zero when both are equal.
    pub const fn duration_between(start: Self, end: Self) -> TimeDelta {
        let ticks = (end.ticks - start.ticks + TICKS_PER_DAY) % TICKS_PER_DAY;
        TimeDelta::nanoseconds(ticks * NANOS_PER_TICK)
    }

    /// Combines this time with a date.
    pub fn on(self, date: Date) -> NaiveDateTime {
        date.at(self)
    }

    /// Sub-tick nanoseconds are truncated; a leap second reads as the last
    /// tick of the preceding second.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        let nanos = i64::from(time.nanosecond().min(999_999_999));
        Self {
            ticks: i64::from(time.num_seconds_from_midnight()) * TICKS_PER_SECOND + nanos / NANOS_PER_TICK,
        }
    }

    /// Converts to chrono's `NaiveTime`, which has nanosecond precision.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::MIN + TimeDelta::nanoseconds(self.ticks * NANOS_PER_TICK)
    }

    /// The time-of-day part of a timestamp; the date is dropped.
    pub fn from_native_timestamp(timestamp: NaiveDateTime) -> Self {
        Self::from_naive_time(timestamp.time())
    }

    /// Interprets a duration as the time elapsed since midnight.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `duration`, with the value in
    /// milliseconds, if it is negative or at least one day long.
    pub fn from_time_delta(duration: TimeDelta) -> Result<Self, RangeError> {
        if duration < TimeDelta::zero() || duration >= TimeDelta::days(1) {
            return Err(RangeError::new("duration", duration.num_milliseconds()));
        }
        Ok(Self {
            ticks: wrap_delta(duration),
        })
    }

    /// Time elapsed since midnight.
    pub const fn to_time_delta(self) -> TimeDelta {
        TimeDelta::nanoseconds(self.ticks * NANOS_PER_TICK)
    }

    /// `HH:MM:SS`, ignoring any fraction of a second.
    pub fn to_iso_string(self) -> String {
        format!(
            "{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}",
            self.hour24(),
            self.minute(),
            self.second()
        )
    }

    /// `HH:MM:SS.fffffff`, always with seven fraction digits.
    pub fn to_extended_iso_string(self) -> String {
        format!(
            "{}{FRACTION_SEPARATOR}{:0width$}",
            self.to_iso_string(),
            self.tick_of_second(),
            width = FRACTION_DIGITS
        )
    }

    /// US short form, e.g. `10:49 PM`.
    pub fn to_short_string(self) -> String {
        format!("{}:{:02} {}", self.hour12(), self.minute(), self.meridiem())
    }

    /// US long form, e.g. `10:49:12 PM`.
    pub fn to_long_string(self) -> String {
        format!(
            "{}:{:02}:{:02} {}",
            self.hour12(),
            self.minute(),
            self.second(),
            self.meridiem()
        )
    }

    /// Renders this time with a `%`-pattern.
    ///
    /// # Errors
    /// Returns a `FormatError` if the pattern asks for a date or time-zone
    /// component, or is not a valid pattern.
    pub fn format(self, pattern: &str) -> Result<String, FormatError> {
        format::check_pattern(pattern, Target::TimeOfDay)?;
        format::render(self.to_naive_time().format(pattern), pattern)
    }

    /// Parses a time with a `%`-pattern.
    ///
    /// # Errors
    /// Returns an `Error::Format` if the pattern is not usable for times or
    /// the input does not match.
    pub fn parse_exact(input: &str, pattern: &str) -> Result<Self, Error> {
        format::check_pattern(pattern, Target::TimeOfDay)?;
        let time =
            NaiveTime::parse_from_str(input, pattern).map_err(|e| format::mismatch(input, pattern, &e))?;
        Ok(Self::from_naive_time(time))
    }
}

impl fmt::Display for TimeOfDay {
    /// `HH:MM:SS`, followed by seven fraction digits when the time is not a
    /// whole second.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tick_of_second() == 0 {
            f.write_str(&self.to_iso_string())
        } else {
            f.write_str(&self.to_extended_iso_string())
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parses `HH:MM`, `HH:MM:SS` or `HH:MM:SS.f` with one to seven
    /// fraction digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || FormatError::InvalidFormat(format!("expected HH:MM[:SS[.fffffff]], found {trimmed:?}"));

        let (clock, fraction) = match trimmed.split_once(FRACTION_SEPARATOR) {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (trimmed, None),
        };

        let fields: Vec<&str> = clock.split(TIME_SEPARATOR).collect();
        let (hour, minute, second) = match fields.as_slice() {
            [hour, minute] if fraction.is_none() => (*hour, *minute, None),
            [hour, minute, second] => (*hour, *minute, Some(*second)),
            _ => return Err(invalid().into()),
        };
        if [Some(hour), Some(minute), second].into_iter().flatten().any(|field| field.len() != 2) {
            return Err(invalid().into());
        }

        let fraction_ticks = match fraction {
            Some(digits) if (1..=FRACTION_DIGITS).contains(&digits.len()) => {
                let scale = 10_i64.pow((FRACTION_DIGITS - digits.len()) as u32);
                i64::from(format::parse_digits(digits)?) * scale
            },
            Some(_) => return Err(invalid().into()),
            None => 0,
        };

        let hour = format::parse_digits(hour)?;
        let minute = format::parse_digits(minute)?;
        let second = second.map(format::parse_digits).transpose()?.unwrap_or(0);

        let whole = Self::hms(hour, minute, second)?;
        Ok(whole.add_ticks(fraction_ticks))
    }
}

impl TryFrom<i64> for TimeOfDay {
    type Error = RangeError;

    fn try_from(ticks: i64) -> Result<Self, Self::Error> {
        Self::from_ticks(ticks)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive_time(time)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        time.to_naive_time()
    }
}

impl Add<TimeDelta> for TimeOfDay {
    type Output = Self;

    fn add(self, duration: TimeDelta) -> Self {
        self.add_duration(duration)
    }
}

impl Sub<TimeDelta> for TimeOfDay {
    type Output = Self;

    fn sub(self, duration: TimeDelta) -> Self {
        self.sub_duration(duration)
    }
}

/// `end - start` is the forward duration from `start` to `end`.
impl Sub for TimeOfDay {
    type Output = TimeDelta;

    fn sub(self, start: Self) -> TimeDelta {
        Self::duration_between(start, self)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
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
    use crate::test_utils::{date, time, time_hms};
    use proptest::prelude::*;

    #[test]
    fn test_default_is_midnight() {
        assert_eq!(TimeOfDay::default().ticks(), 0);
        assert_eq!(TimeOfDay::default(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_from_ticks_bounds() {
        assert_eq!(TimeOfDay::from_ticks(863_999_999_999).unwrap(), TimeOfDay::MAX);
        assert_eq!(
            TimeOfDay::from_ticks(864_000_000_000),
            Err(RangeError::new("ticks", 864_000_000_000))
        );
        assert_eq!(TimeOfDay::from_ticks(-1), Err(RangeError::new("ticks", -1)));
    }

    #[test]
    fn test_construction_ticks() {
        assert_eq!(time(23, 59).ticks(), 23 * TICKS_PER_HOUR + 59 * TICKS_PER_MINUTE);
        assert_eq!(
            time_hms(23, 59, 59).ticks(),
            23 * TICKS_PER_HOUR + 59 * TICKS_PER_MINUTE + 59 * TICKS_PER_SECOND
        );
        assert_eq!(
            TimeOfDay::hms_milli(23, 59, 59, 59).unwrap().ticks(),
            23 * TICKS_PER_HOUR + 59 * TICKS_PER_MINUTE + 59 * TICKS_PER_SECOND + 59 * TICKS_PER_MILLISECOND
        );
    }

    #[test]
    fn test_twelve_hour_construction_matches_24_hour() {
        assert_eq!(TimeOfDay::hm12(11, 59, Meridiem::Pm).unwrap(), time(23, 59));
        assert_eq!(TimeOfDay::hms12(11, 59, 59, Meridiem::Pm).unwrap(), time_hms(23, 59, 59));
        assert_eq!(
            TimeOfDay::hms_milli12(11, 59, 59, 59, Meridiem::Pm).unwrap(),
            TimeOfDay::hms_milli(23, 59, 59, 59).unwrap()
        );
        assert_eq!(TimeOfDay::hm12(12, 0, Meridiem::Am).unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::hm12(12, 0, Meridiem::Pm).unwrap(), TimeOfDay::NOON);
    }

    #[test]
    fn test_hours12_to_24() {
        assert_eq!(hours12_to_24(12, Meridiem::Am).unwrap(), 0);
        assert_eq!(hours12_to_24(1, Meridiem::Am).unwrap(), 1);
        assert_eq!(hours12_to_24(11, Meridiem::Am).unwrap(), 11);
        assert_eq!(hours12_to_24(12, Meridiem::Pm).unwrap(), 12);
        assert_eq!(hours12_to_24(1, Meridiem::Pm).unwrap(), 13);
        assert_eq!(hours12_to_24(11, Meridiem::Pm).unwrap(), 23);
        assert_eq!(hours12_to_24(0, Meridiem::Am), Err(RangeError::new("hour", 0)));
        assert_eq!(hours12_to_24(13, Meridiem::Pm), Err(RangeError::new("hour", 13)));
    }

    #[test]
    fn test_construction_rejects_each_field() {
        assert_eq!(TimeOfDay::hm(24, 0), Err(RangeError::new("hour", 24)));
        assert_eq!(TimeOfDay::hm(0, 60), Err(RangeError::new("minute", 60)));
        assert_eq!(TimeOfDay::hms(0, 0, 60), Err(RangeError::new("second", 60)));
        assert_eq!(
            TimeOfDay::hms_milli(0, 0, 0, 1000),
            Err(RangeError::new("millisecond", 1000))
        );
        assert_eq!(
            TimeOfDay::hm12(13, 0, Meridiem::Am),
            Err(RangeError::new("hour", 13))
        );
        assert_eq!(
            TimeOfDay::hm12(0, 0, Meridiem::Pm),
            Err(RangeError::new("hour", 0))
        );
    }

    #[test]
    fn test_hour12_and_meridiem() {
        let cases = [
            (0, 12, Meridiem::Am),
            (1, 1, Meridiem::Am),
            (11, 11, Meridiem::Am),
            (12, 12, Meridiem::Pm),
            (13, 1, Meridiem::Pm),
            (23, 11, Meridiem::Pm),
        ];
        for (hour24, hour12, meridiem) in cases {
            let t = time(hour24, 0);
            assert_eq!(t.hour24(), hour24);
            assert_eq!(t.hour12(), hour12, "hour12 of {hour24}:00");
            assert_eq!(t.meridiem(), meridiem, "meridiem of {hour24}:00");
        }
    }

    #[test]
    fn test_accessors() {
        let t = TimeOfDay::hms_milli(13, 14, 15, 16).unwrap().add_ticks(7);
        assert_eq!(t.hour24(), 13);
        assert_eq!(t.minute(), 14);
        assert_eq!(t.second(), 15);
        assert_eq!(t.millisecond(), 16);
        assert_eq!(t.tick_of_second(), 160_007);
    }

    #[test]
    fn test_add_wraps_around_midnight() {
        assert_eq!(time(12, 0).add_hours(13), time(1, 0));
        assert_eq!(time(12, 0).add_hours(-13), time(23, 0));
        assert_eq!(time(23, 0).add_hours(2), time(1, 0));
        assert_eq!(time(12, 0).add_hours(48), time(12, 0));
        assert_eq!(time(0, 0).add_minutes(-1), time(23, 59));
        assert_eq!(time(23, 59).add_seconds(60), time(0, 0));
        assert_eq!(time(0, 0).add_milliseconds(-1), TimeOfDay::hms_milli(23, 59, 59, 999).unwrap());
        assert_eq!(TimeOfDay::MAX.add_ticks(1), TimeOfDay::MIN);
        assert_eq!(TimeOfDay::MIN.add_ticks(-1), TimeOfDay::MAX);
    }

    #[test]
    fn test_add_never_overflows() {
        let t = time(6, 30);
        assert!(t.add_ticks(i64::MIN).ticks() < TICKS_PER_DAY);
        assert!(t.add_ticks(i64::MAX).ticks() < TICKS_PER_DAY);
        assert!(t.add_hours(i64::MAX).ticks() < TICKS_PER_DAY);
        assert!(t.sub_hours(i64::MIN).ticks() < TICKS_PER_DAY);
        assert!(t.sub_ticks(i64::MIN).ticks() >= 0);
        assert!(t.add_duration(TimeDelta::MAX).ticks() < TICKS_PER_DAY);
        assert!(t.sub_duration(TimeDelta::MIN).ticks() >= 0);
    }

    #[test]
    fn test_sub_mirrors_add() {
        assert_eq!(time(1, 0).sub_hours(2), time(23, 0));
        assert_eq!(time(1, 0).sub_minutes(61), time(23, 59));
        assert_eq!(time(0, 0).sub_seconds(1), time_hms(23, 59, 59));
        assert_eq!(time(0, 0).sub_milliseconds(-1000), time_hms(0, 0, 1));
        assert_eq!(time(0, 0).sub_ticks(TICKS_PER_HOUR), time(23, 0));
    }

    #[test]
    fn test_duration_operators() {
        assert_eq!(time(23, 0) + TimeDelta::hours(2), time(1, 0));
        assert_eq!(time(1, 0) - TimeDelta::hours(2), time(23, 0));
        assert_eq!(time(12, 0) + TimeDelta::minutes(-90), time(10, 30));
        assert_eq!(time(0, 0) + TimeDelta::nanoseconds(250), TimeOfDay::MIN.add_ticks(2));
    }

    #[test]
    fn test_fractional_amounts_through_duration() {
        assert_eq!(time(12, 0).add_duration(TimeDelta::minutes(90)), time(13, 30));
        assert_eq!(time(23, 0).add_duration(TimeDelta::milliseconds(5_400_000)), time(0, 30));
        assert_eq!(time(0, 30).sub_duration(TimeDelta::seconds(5400)), time(23, 0));
        assert_eq!(
            time(12, 0).add_duration(TimeDelta::milliseconds(1500)),
            TimeOfDay::hms_milli(12, 0, 1, 500).unwrap()
        );
    }

    #[test]
    fn test_is_between_cases() {
        struct TestCase {
            start:       (u32, u32),
            end:         (u32, u32),
            probe:       (u32, u32),
            expected:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (10, 0),
                end:         (12, 0),
                probe:       (10, 0),
                expected:    true,
                description: "normal range, at start",
            },
            TestCase {
                start:       (10, 0),
                end:         (12, 0),
                probe:       (9, 0),
                expected:    false,
                description: "normal range, before",
            },
            TestCase {
                start:       (10, 0),
                end:         (12, 0),
                probe:       (12, 0),
                expected:    false,
                description: "normal range, at end",
            },
            TestCase {
                start:       (23, 0),
                end:         (1, 0),
                probe:       (23, 0),
                expected:    true,
                description: "over midnight, at start",
            },
            TestCase {
                start:       (23, 0),
                end:         (1, 0),
                probe:       (0, 30),
                expected:    true,
                description: "over midnight, after midnight",
            },
            TestCase {
                start:       (23, 0),
                end:         (1, 0),
                probe:       (1, 0),
                expected:    false,
                description: "over midnight, at end",
            },
            TestCase {
                start:       (23, 0),
                end:         (1, 0),
                probe:       (22, 59),
                expected:    false,
                description: "over midnight, before",
            },
            TestCase {
                start:       (8, 0),
                end:         (8, 0),
                probe:       (8, 0),
                expected:    false,
                description: "empty range",
            },
        ];

        for case in &cases {
            let start = time(case.start.0, case.start.1);
            let end = time(case.end.0, case.end.1);
            let probe = time(case.probe.0, case.probe.1);
            assert_eq!(probe.is_between(start, end), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_duration_between() {
        assert_eq!(TimeOfDay::duration_between(time(10, 0), time(12, 0)), TimeDelta::hours(2));
        assert_eq!(TimeOfDay::duration_between(time(23, 0), time(1, 0)), TimeDelta::hours(2));
        assert_eq!(TimeOfDay::duration_between(time(5, 0), time(5, 0)), TimeDelta::zero());
        assert_eq!(time(12, 0) - time(10, 0), TimeDelta::hours(2));
        assert_eq!(time(1, 0) - time(23, 0), TimeDelta::hours(2));
        assert_eq!(time(10, 0) - time(12, 0), TimeDelta::hours(22));
    }

    #[test]
    fn test_ordering_is_linear() {
        assert!(time(23, 0) > time(1, 0));
        assert!(TimeOfDay::MIN < TimeOfDay::MAX);
    }

    #[test]
    fn test_on_date() {
        let dt = time_hms(23, 59, 59).on(date(2000, 12, 31));
        assert_eq!(dt, date(2000, 12, 31).at(time_hms(23, 59, 59)));
        assert_eq!(dt.to_string(), "2000-12-31 23:59:59");
    }

    #[test]
    fn test_naive_time_conversions() {
        let naive = NaiveTime::from_hms_nano_opt(13, 14, 15, 123_456_789).unwrap();
        let t = TimeOfDay::from_naive_time(naive);
        assert_eq!(t.ticks(), TimeOfDay::hms(13, 14, 15).unwrap().ticks() + 1_234_567);
        assert_eq!(
            t.to_naive_time(),
            NaiveTime::from_hms_nano_opt(13, 14, 15, 123_456_700).unwrap()
        );
        assert_eq!(TimeOfDay::MAX.to_naive_time(), NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_900).unwrap());

        let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert_eq!(TimeOfDay::from(leap), TimeOfDay::MAX);
    }

    #[test]
    fn test_native_timestamp_and_delta_conversions() {
        let timestamp = date(2015, 6, 26).at(time(7, 45));
        assert_eq!(TimeOfDay::from_native_timestamp(timestamp), time(7, 45));

        assert_eq!(TimeOfDay::from_time_delta(TimeDelta::hours(3)).unwrap(), time(3, 0));
        assert_eq!(time(3, 0).to_time_delta(), TimeDelta::hours(3));
        assert_eq!(
            TimeOfDay::from_time_delta(TimeDelta::hours(24)),
            Err(RangeError::new("duration", 86_400_000))
        );
        assert_eq!(
            TimeOfDay::from_time_delta(TimeDelta::milliseconds(-1)),
            Err(RangeError::new("duration", -1))
        );
    }

    #[test]
    fn test_string_forms() {
        let t = time_hms(23, 59, 59);
        assert_eq!(t.to_iso_string(), "23:59:59");
        assert_eq!(t.to_extended_iso_string(), "23:59:59.0000000");
        assert_eq!(t.to_string(), "23:59:59");
        assert_eq!(TimeOfDay::MAX.to_string(), "23:59:59.9999999");

        assert_eq!(TimeOfDay::hms12(10, 49, 12, Meridiem::Pm).unwrap().to_long_string(), "10:49:12 PM");
        assert_eq!(time(22, 49).to_short_string(), "10:49 PM");
        assert_eq!(time(0, 5).to_short_string(), "12:05 AM");
    }

    #[test]
    fn test_format_pattern() {
        let t = TimeOfDay::hms_milli(22, 49, 12, 5).unwrap();
        assert_eq!(t.format("%H.%M.%S%.3f").unwrap(), "22.49.12.005");
        assert_eq!(t.format("%I:%M %p").unwrap(), "10:49 PM");
        assert!(matches!(
            t.format("%d %H:%M"),
            Err(FormatError::DisallowedSpecifier { .. })
        ));
        assert!(matches!(t.format("%H:%M %Z"), Err(FormatError::DisallowedSpecifier { .. })));
    }

    #[test]
    fn test_parse_exact() {
        assert_eq!(TimeOfDay::parse_exact("10:49 PM", "%I:%M %p").unwrap(), time(22, 49));
        assert!(matches!(
            TimeOfDay::parse_exact("22h49", "%H:%M"),
            Err(Error::Format(FormatError::Mismatch { .. }))
        ));
        assert!(matches!(
            TimeOfDay::parse_exact("2000 22:49", "%Y %H:%M"),
            Err(Error::Format(FormatError::DisallowedSpecifier { .. }))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap(), time(23, 59));
        assert_eq!("23:59:59".parse::<TimeOfDay>().unwrap(), time_hms(23, 59, 59));
        assert_eq!("23:59:59.9999999".parse::<TimeOfDay>().unwrap(), TimeOfDay::MAX);
        assert_eq!(
            "00:00:00.5".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::hms_milli(0, 0, 0, 500).unwrap()
        );
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert!(matches!("23".parse::<TimeOfDay>(), Err(Error::Format(_))));
        assert!(matches!("23:59.5".parse::<TimeOfDay>(), Err(Error::Format(_))));
        assert!(matches!("1:00".parse::<TimeOfDay>(), Err(Error::Format(_))));
        assert!(matches!("01:00:00.12345678".parse::<TimeOfDay>(), Err(Error::Format(_))));
        assert!(matches!("01:00:00.".parse::<TimeOfDay>(), Err(Error::Format(_))));
        assert!(matches!("0a:00".parse::<TimeOfDay>(), Err(Error::Format(_))));
        assert_eq!(
            "24:00".parse::<TimeOfDay>(),
            Err(Error::Range(RangeError::new("hour", 24)))
        );
    }

    #[test]
    fn test_serde() {
        let t = TimeOfDay::hms_milli(8, 15, 0, 250).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"08:15:00.2500000\"");

        let parsed: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);

        assert_eq!(serde_json::to_string(&Meridiem::Pm).unwrap(), "\"PM\"");
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }

    fn any_time() -> impl Strategy<Value = TimeOfDay> {
        (0..TICKS_PER_DAY).prop_map(|ticks| TimeOfDay::from_ticks(ticks).unwrap())
    }

    proptest! {
        #[test]
        fn prop_sub_undoes_add(t in any_time(), delta in any::<i64>()) {
            prop_assert_eq!(t.add_ticks(delta).sub_ticks(delta), t);
        }

        #[test]
        fn prop_duration_reaches_end(start in any_time(), end in any_time()) {
            let duration = TimeOfDay::duration_between(start, end);
            prop_assert!(duration >= TimeDelta::zero());
            prop_assert!(duration < TimeDelta::days(1));
            prop_assert_eq!(start + duration, end);
        }

        #[test]
        fn prop_between_agrees_with_duration(t in any_time(), start in any_time(), end in any_time()) {
            let inside = TimeOfDay::duration_between(start, t) < TimeOfDay::duration_between(start, end);
            prop_assert_eq!(t.is_between(start, end), inside);
        }

        #[test]
        fn prop_display_parses_back(t in any_time()) {
            prop_assert_eq!(t.to_string().parse::<TimeOfDay>().unwrap(), t);
        }
    }
}

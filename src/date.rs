use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::{self, DateParts, DayOfWeek};
use crate::consts::{
    DATE_SEPARATOR, MAX_DAY_NUMBER, MAX_MONTHS_DELTA, MAX_YEAR, MAX_YEARS_DELTA, MIN_DAY_NUMBER, MIN_YEAR,
    MONTH_NAMES, MONTHS_PER_YEAR, TICKS_PER_DAY,
};
use crate::format::{self, Target};
use crate::prelude::*;
use crate::{Error, FormatError, RangeError, TimeOfDay};

const CE_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1, 1, 1) {
    Some(date) => date,
    None => panic!("0001-01-01 is representable"),
};

/// A whole calendar date in the proleptic Gregorian calendar, from
/// 0001-01-01 through 9999-12-31.
///
/// Stored as a day number: the count of whole days since 0001-01-01. Two
/// dates compare by their day numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Date {
    day_number: i32,
}

impl Date {
    /// 0001-01-01
    pub const MIN: Self = Self {
        day_number: MIN_DAY_NUMBER,
    };

    /// 9999-12-31
    pub const MAX: Self = Self {
        day_number: MAX_DAY_NUMBER,
    };

    /// Creates a date from its day number.
    ///
    /// # Errors
    /// Returns a `RangeError` if `day_number` is outside `0..=3652058`.
    pub fn from_day_number(day_number: i32) -> Result<Self, RangeError> {
        calendar::check_day_number(day_number)?;
        Ok(Self { day_number })
    }

    /// Creates a date from a year, a month (1-12) and a day of the month.
    ///
    /// # Errors
    /// Returns a `RangeError` naming the field that is out of range, e.g.
    /// `day` for the 29th of February in a common year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, RangeError> {
        let day_number = calendar::ymd_to_day_number(year, month, day)?;
        Ok(Self { day_number })
    }

    /// Creates a date from a year and a 1-based day of the year.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `year` or `day_of_year`.
    pub fn from_ordinal(year: i32, day_of_year: u32) -> Result<Self, RangeError> {
        let day_number = calendar::ordinal_to_day_number(year, day_of_year)?;
        Ok(Self { day_number })
    }

    /// Number of whole days since 0001-01-01
    #[inline]
    pub const fn day_number(self) -> i32 {
        self.day_number
    }

    /// All calendar fields at once.
    pub const fn parts(self) -> DateParts {
        calendar::parts_of(self.day_number)
    }

    /// Year, 1-9999
    pub const fn year(self) -> i32 {
        self.parts().year
    }

    /// Month of the year, 1-12
    pub const fn month(self) -> u32 {
        self.parts().month
    }

    /// Day of the month, 1-31
    pub const fn day(self) -> u32 {
        self.parts().day
    }

    /// Day of the year, 1-366
    pub const fn day_of_year(self) -> u32 {
        self.parts().day_of_year
    }

    /// Weekday of this date; 0001-01-01 was a Monday.
    pub const fn day_of_week(self) -> DayOfWeek {
        calendar::weekday_of(self.day_number)
    }

    /// Whether this date falls in a leap year.
    pub const fn is_in_leap_year(self) -> bool {
        calendar::is_leap(self.year())
    }

    /// Adds a number of calendar years. A 29th of February that lands in a
    /// common year becomes the 28th.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `years` if `|years| > 10000` or the
    /// result falls outside the representable range.
    pub fn add_years(self, years: i32) -> Result<Self, RangeError> {
        if years.unsigned_abs() > MAX_YEARS_DELTA.unsigned_abs() {
            return Err(RangeError::new("years", i64::from(years)));
        }
        self.add_months(years * MONTHS_PER_YEAR)
            .map_err(|_| RangeError::new("years", i64::from(years)))
    }

    /// Adds a number of calendar months, clamping the day to the last day of
    /// the target month.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `months` if `|months| > 120000` or the
    /// result falls outside the representable range.
    pub fn add_months(self, months: i32) -> Result<Self, RangeError> {
        if months.unsigned_abs() > MAX_MONTHS_DELTA.unsigned_abs() {
            return Err(RangeError::new("months", i64::from(months)));
        }

        let DateParts { year, month, day, .. } = self.parts();

        // Floor division, so that negative offsets borrow from the year.
        let index = month.cast_signed() - 1 + months;
        let year = year + index.div_euclid(MONTHS_PER_YEAR);
        let month = index.rem_euclid(MONTHS_PER_YEAR).unsigned_abs() + 1;

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(RangeError::new("months", i64::from(months)));
        }

        let day = day.min(calendar::month_length(year, month));
        Ok(Self {
            day_number: calendar::day_number_of(year, month, day),
        })
    }

    /// Adds a number of days.
    ///
    /// # Errors
    /// Returns a `RangeError` naming `days` if the result falls outside the
    /// representable range.
    pub fn add_days(self, days: i32) -> Result<Self, RangeError> {
        let day_number = i64::from(self.day_number) + i64::from(days);
        i32::try_from(day_number)
            .ok()
            .filter(|n| (MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(n))
            .map(|day_number| Self { day_number })
            .ok_or(RangeError::new("days", i64::from(days)))
    }

    /// Subtracts a number of calendar years.
    ///
    /// # Errors
    /// See [`Date::add_years`].
    pub fn sub_years(self, years: i32) -> Result<Self, RangeError> {
        let negated = years.checked_neg().ok_or(RangeError::new("years", i64::from(years)))?;
        self.add_years(negated)
    }

    /// Subtracts a number of calendar months, clamping like
    /// [`Date::add_months`].
    ///
    /// # Errors
    /// See [`Date::add_months`].
    pub fn sub_months(self, months: i32) -> Result<Self, RangeError> {
        let negated = months.checked_neg().ok_or(RangeError::new("months", i64::from(months)))?;
        self.add_months(negated)
    }

    /// Subtracts a number of days.
    ///
    /// # Errors
    /// See [`Date::add_days`].
    pub fn sub_days(self, days: i32) -> Result<Self, RangeError> {
        let negated = days.checked_neg().ok_or(RangeError::new("days", i64::from(days)))?;
        self.add_days(negated)
    }

    /// Ticks from 0001-01-01T00:00 to the given time on this date.
    pub const fn ticks_at(self, time: TimeOfDay) -> i64 {
        self.day_number as i64 * TICKS_PER_DAY + time.ticks()
    }

    /// Combines this date with a time of day.
    pub fn at(self, time: TimeOfDay) -> NaiveDateTime {
        self.to_naive_date().and_time(time.to_naive_time())
    }

    /// # Errors
    /// Returns a `RangeError` for dates outside 0001-01-01..=9999-12-31.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, RangeError> {
        Self::from_day_number(date.num_days_from_ce() - 1)
    }

    /// Converts to chrono's `NaiveDate`. Every `Date` is representable.
    pub fn to_naive_date(self) -> NaiveDate {
        CE_EPOCH + Days::new(u64::from(self.day_number.unsigned_abs()))
    }

    /// The date part of a timestamp; the time of day is dropped.
    ///
    /// # Errors
    /// Returns a `RangeError` for dates outside 0001-01-01..=9999-12-31.
    pub fn from_native_timestamp(timestamp: NaiveDateTime) -> Result<Self, RangeError> {
        Self::from_naive_date(timestamp.date())
    }

    /// This date at 00:00:00.
    pub fn to_native_timestamp_at_midnight(self) -> NaiveDateTime {
        self.to_naive_date().and_time(NaiveTime::MIN)
    }

    /// `YYYY-MM-DD`
    pub fn to_iso_string(self) -> String {
        self.to_string()
    }

    /// US short form, `M/D/YYYY`.
    pub fn to_short_string(self) -> String {
        let DateParts { year, month, day, .. } = self.parts();
        format!("{month}/{day}/{year:04}")
    }

    /// US long form, e.g. `Sunday, December 31, 2000`.
    pub fn to_long_string(self) -> String {
        let DateParts { year, month, day, .. } = self.parts();
        let month_name = MONTH_NAMES[month as usize - 1];
        format!("{}, {month_name} {day}, {year:04}", self.day_of_week())
    }

    /// Renders this date with a `%`-pattern.
    ///
    /// # Errors
    /// Returns a `FormatError` if the pattern asks for a time-of-day or
    /// time-zone component, or is not a valid pattern.
    pub fn format(self, pattern: &str) -> Result<String, FormatError> {
        format::check_pattern(pattern, Target::Date)?;
        format::render(self.to_naive_date().format(pattern), pattern)
    }

    /// Parses a date with a `%`-pattern.
    ///
    /// # Errors
    /// Returns an `Error::Format` if the pattern is not usable for dates or
    /// the input does not match, and an `Error::Range` for dates outside
    /// 0001-01-01..=9999-12-31.
    pub fn parse_exact(input: &str, pattern: &str) -> Result<Self, Error> {
        format::check_pattern(pattern, Target::Date)?;
        let date =
            NaiveDate::parse_from_str(input, pattern).map_err(|e| format::mismatch(input, pattern, &e))?;
        Ok(Self::from_naive_date(date)?)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DateParts { year, month, day, .. } = self.parts();
        write!(f, "{year:04}{DATE_SEPARATOR}{month:02}{DATE_SEPARATOR}{day:02}")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses the ISO form `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();

        let [year, month, day] = parts.as_slice() else {
            return Err(FormatError::InvalidFormat(format!("expected YYYY-MM-DD, found {trimmed:?}")).into());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(FormatError::InvalidFormat(format!("expected YYYY-MM-DD, found {trimmed:?}")).into());
        }

        let year = format::parse_digits(year)?;
        let month = format::parse_digits(month)?;
        let day = format::parse_digits(day)?;

        Ok(Self::new(year.cast_signed(), month, day)?)
    }
}

impl TryFrom<i32> for Date {
    type Error = RangeError;

    fn try_from(day_number: i32) -> Result<Self, Self::Error> {
        Self::from_day_number(day_number)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = RangeError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive_date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.to_naive_date()
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

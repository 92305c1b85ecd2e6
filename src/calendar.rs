//! Proleptic Gregorian calendar arithmetic over day numbers.
//!
//! A day number counts whole days since 0001-01-01, which is day 0. All of
//! the conversions here are constant time: a day number is split into
//! 400-year, 100-year, 4-year and 1-year blocks rather than walked.

use crate::consts::{
    CENTURY_CYCLE, CUMULATIVE_DAYS, CUMULATIVE_DAYS_LEAP, DAYS_PER_4_YEARS, DAYS_PER_100_YEARS,
    DAYS_PER_400_YEARS, DAYS_PER_LEAP_YEAR, DAYS_PER_WEEK, DAYS_PER_YEAR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY_NUMBER, MAX_MONTH, MAX_YEAR, MIN_DAY_NUMBER, MIN_YEAR,
};
use crate::prelude::*;
use crate::RangeError;
use serde::{Deserialize, Serialize};

/// A named day of the week, with Sunday as day 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Returns the weekday for an index where Sunday is 0 and Saturday is 6.
    pub const fn from_index(index: u32) -> Option<Self> {
        Some(match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return None,
        })
    }

    /// Index of this weekday, Sunday being 0.
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// The calendar fields of a day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub year:        i32,
    pub month:       u32,
    pub day:         u32,
    pub day_of_year: u32,
}

pub(crate) const fn is_leap(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

const fn cumulative_days(leap: bool) -> &'static [i32; 13] {
    if leap { &CUMULATIVE_DAYS_LEAP } else { &CUMULATIVE_DAYS }
}

pub(crate) fn check_year(year: i32) -> Result<(), RangeError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(RangeError::new("year", i64::from(year)))
    }
}

fn check_month(month: u32) -> Result<(), RangeError> {
    if (1..=MAX_MONTH).contains(&month) {
        Ok(())
    } else {
        Err(RangeError::new("month", i64::from(month)))
    }
}

pub(crate) fn check_day_number(day_number: i32) -> Result<(), RangeError> {
    if (MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&day_number) {
        Ok(())
    } else {
        Err(RangeError::new("day_number", i64::from(day_number)))
    }
}

/// Returns whether `year` is a leap year.
///
/// # Errors
/// Returns a `RangeError` for `year` outside `1..=9999`.
pub fn is_leap_year(year: i32) -> Result<bool, RangeError> {
    check_year(year)?;
    Ok(is_leap(year))
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
/// Returns a `RangeError` naming `year` or `month` when either is out of range.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, RangeError> {
    check_year(year)?;
    check_month(month)?;
    Ok(month_length(year, month))
}

/// Returns 365 or 366.
///
/// # Errors
/// Returns a `RangeError` for `year` outside `1..=9999`.
pub fn days_in_year(year: i32) -> Result<u32, RangeError> {
    check_year(year)?;
    let days = if is_leap(year) { DAYS_PER_LEAP_YEAR } else { DAYS_PER_YEAR };
    Ok(days.unsigned_abs())
}

/// Length of a month whose year and month are already known to be valid.
pub(crate) const fn month_length(year: i32, month: u32) -> u32 {
    let table = cumulative_days(is_leap(year));
    let index = month as usize;
    (table[index] - table[index - 1]).unsigned_abs()
}

/// Converts a year, month and day into a day number.
///
/// # Errors
/// Returns a `RangeError` naming the first of `year`, `month` or `day` that
/// is out of range.
pub fn ymd_to_day_number(year: i32, month: u32, day: u32) -> Result<i32, RangeError> {
    check_year(year)?;
    check_month(month)?;
    if day < 1 || day > month_length(year, month) {
        return Err(RangeError::new("day", i64::from(day)));
    }
    Ok(day_number_of(year, month, day))
}

/// Converts a year and a 1-based day of the year into a day number.
///
/// # Errors
/// Returns a `RangeError` naming `year` or `day_of_year`.
pub fn ordinal_to_day_number(year: i32, day_of_year: u32) -> Result<i32, RangeError> {
    let length = days_in_year(year)?;
    if day_of_year < 1 || day_of_year > length {
        return Err(RangeError::new("day_of_year", i64::from(day_of_year)));
    }
    Ok(days_before_year(year) + day_of_year.cast_signed() - 1)
}

/// Days from 0001-01-01 to the first day of `year`.
const fn days_before_year(year: i32) -> i32 {
    let y = year - 1;
    y * DAYS_PER_YEAR + y / LEAP_YEAR_CYCLE - y / CENTURY_CYCLE + y / GREGORIAN_CYCLE
}

/// Day number of fields that are already known to form a valid date.
pub(crate) const fn day_number_of(year: i32, month: u32, day: u32) -> i32 {
    let table = cumulative_days(is_leap(year));
    days_before_year(year) + table[month as usize - 1] + day.cast_signed() - 1
}

/// Splits a day number into its calendar fields.
///
/// # Errors
/// Returns a `RangeError` for a day number outside `0..=3652058`.
pub fn day_number_to_parts(day_number: i32) -> Result<DateParts, RangeError> {
    check_day_number(day_number)?;
    Ok(parts_of(day_number))
}

/// Calendar fields of a day number that is already known to be valid.
pub(crate) const fn parts_of(day_number: i32) -> DateParts {
    let mut n = day_number;

    let y400 = n / DAYS_PER_400_YEARS;
    n -= y400 * DAYS_PER_400_YEARS;

    // The last day of a 400-year block would make a fifth century; it
    // belongs to the fourth.
    let mut y100 = n / DAYS_PER_100_YEARS;
    if y100 == 4 {
        y100 = 3;
    }
    n -= y100 * DAYS_PER_100_YEARS;

    let y4 = n / DAYS_PER_4_YEARS;
    n -= y4 * DAYS_PER_4_YEARS;

    // Same for the leap day closing a 4-year block.
    let mut y1 = n / DAYS_PER_YEAR;
    if y1 == 4 {
        y1 = 3;
    }
    n -= y1 * DAYS_PER_YEAR;

    let year = y400 * GREGORIAN_CYCLE + y100 * CENTURY_CYCLE + y4 * LEAP_YEAR_CYCLE + y1 + 1;

    // Blocks count from year 1, so the fourth year of a 4-year block is
    // the one divisible by 4. It is a century year only when it closes the
    // 25th 4-year block, and such a century is leap only in the 4th century
    // of a 400-year block.
    let leap = y1 == 3 && (y4 != 24 || y100 == 3);
    let table = cumulative_days(leap);

    // No month is longer than 32 days, so this never overshoots.
    let mut month = (n >> 5) as usize + 1;
    while n >= table[month] {
        month += 1;
    }

    DateParts {
        year,
        month: month as u32,
        day: (n - table[month - 1] + 1).unsigned_abs(),
        day_of_year: (n + 1).unsigned_abs(),
    }
}

/// Returns the weekday of a day number.
///
/// # Errors
/// Returns a `RangeError` for a day number outside `0..=3652058`.
pub fn day_of_week(day_number: i32) -> Result<DayOfWeek, RangeError> {
    check_day_number(day_number)?;
    Ok(weekday_of(day_number))
}

/// Day 0 was a Monday.
pub(crate) const fn weekday_of(day_number: i32) -> DayOfWeek {
    match DayOfWeek::from_index(((day_number + 1) % DAYS_PER_WEEK).unsigned_abs()) {
        Some(weekday) => weekday,
        None => DayOfWeek::Sunday,
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{MONTHS_PER_YEAR, RANGE_SEPARATOR};
use crate::{Date, Error, FormatError, prelude::*};

const fn ordered(a: Date, b: Date) -> (Date, Date) {
    if a.day_number() <= b.day_number() { (a, b) } else { (b, a) }
}

/// Number of days from one date to another, counting both ends.
///
/// The order of the arguments does not matter. The same date counts as one
/// day.
pub fn days_in_range(a: Date, b: Date) -> u32 {
    (b.day_number() - a.day_number()).unsigned_abs() + 1
}

/// Number of whole months between two dates, in either order.
///
/// A month is complete once the later date reaches the same day of the
/// month as the earlier one: 15 January to 14 March is one month. Stepping
/// back clamps to the end of a shorter month, so 31 January to 28 February
/// is none.
pub fn months_in_range(a: Date, b: Date) -> u32 {
    let (min, max) = ordered(a, b);
    let naive = (max.year() - min.year()) * MONTHS_PER_YEAR + max.month().cast_signed() - min.month().cast_signed();
    let whole = match max.add_months(-naive) {
        Ok(back) if min > back => naive - 1,
        _ => naive,
    };
    whole.unsigned_abs()
}

/// Number of whole years between two dates, in either order.
///
/// Counted the same way as [`months_in_range`], so 29 February 2000 to
/// 28 February 2001 is not yet a year.
pub fn years_in_range(a: Date, b: Date) -> u32 {
    let (min, max) = ordered(a, b);
    let naive = max.year() - min.year();
    let whole = match max.add_years(-naive) {
        Ok(back) if min > back => naive - 1,
        _ => naive,
    };
    whole.unsigned_abs()
}

/// An inclusive range of dates.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date, ends included
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Days in the range, counting both ends
    pub fn days(&self) -> u32 {
        days_in_range(self.start, self.end)
    }

    /// Whole months from start to end, see [`months_in_range`]
    pub fn whole_months(&self) -> u32 {
        months_in_range(self.start, self.end)
    }

    /// Whole years from start to end, see [`years_in_range`]
    pub fn whole_years(&self) -> u32 {
        years_in_range(self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = Error;

    /// Parses `YYYY-MM-DD/YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        if separator_count != 1 {
            return Err(FormatError::InvalidFormat(format!(
                "expected exactly one '{RANGE_SEPARATOR}' separator, found {separator_count}: {s}"
            ))
            .into());
        }

        let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
            FormatError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
        })?;

        Self::new(start.trim().parse()?, end.trim().parse()?)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

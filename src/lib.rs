//! Whole calendar dates and times of day as small, immutable value types.
//!
//! [`Date`] is a day in the proleptic Gregorian calendar between 0001-01-01
//! and 9999-12-31, stored as a day number. [`TimeOfDay`] is a reading of a
//! 24-hour clock in 100-nanosecond ticks, whose arithmetic wraps around
//! midnight. Neither type carries a time zone; [`Date::at`] joins the two
//! into a `chrono::NaiveDateTime` when an instant is needed.
//!
//! ```
//! use civil::{Date, TimeOfDay};
//!
//! let date = Date::new(2000, 2, 29)?.add_years(1)?;
//! assert_eq!(date.to_string(), "2001-02-28");
//!
//! let late = TimeOfDay::hm(23, 0)?;
//! assert_eq!(late.add_hours(2), TimeOfDay::hm(1, 0)?);
//! assert!(TimeOfDay::hm(0, 30)?.is_between(late, TimeOfDay::hm(1, 0)?));
//! # Ok::<(), civil::Error>(())
//! ```

macro_rules! _debug {
    ($($tt:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($tt)+);
    };
}

mod calendar;
mod clock;
mod consts;
mod date;
mod error;
mod format;
mod prelude;
mod range;
mod time;

#[cfg(test)]
mod test_utils;

pub use calendar::{
    DateParts, DayOfWeek, day_number_to_parts, day_of_week, days_in_month, days_in_year, is_leap_year,
    ordinal_to_day_number, ymd_to_day_number,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use date::Date;
pub use error::{Error, FormatError, RangeError};
pub use range::{DateRange, days_in_range, months_in_range, years_in_range};
pub use time::{Meridiem, TimeOfDay, hours12_to_24};

/// Minimum valid year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// Day number of 0001-01-01
pub const MIN_DAY_NUMBER: i32 = 0;

/// Day number of 9999-12-31
pub const MAX_DAY_NUMBER: i32 = 3_652_058;

/// Largest magnitude accepted by `Date::add_years`
pub const MAX_YEARS_DELTA: i32 = 10_000;

/// Largest magnitude accepted by `Date::add_months`
pub const MAX_MONTHS_DELTA: i32 = 120_000;

pub const MONTHS_PER_YEAR: i32 = 12;
pub const DAYS_PER_WEEK: i32 = 7;

/// Days in a common year
pub const DAYS_PER_YEAR: i32 = 365;
/// Days in a leap year
pub const DAYS_PER_LEAP_YEAR: i32 = 366;
/// Days in four years, one of them leap
pub const DAYS_PER_4_YEARS: i32 = DAYS_PER_YEAR * 4 + 1;
/// Days in a century that does not start on a multiple of 400
pub const DAYS_PER_100_YEARS: i32 = DAYS_PER_4_YEARS * 25 - 1;
/// Days in a full Gregorian cycle
pub const DAYS_PER_400_YEARS: i32 = DAYS_PER_100_YEARS * 4 + 1;

/// Days elapsed before the first of each month in a common year.
/// Index 12 is the length of the year.
pub(crate) const CUMULATIVE_DAYS: [i32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Days elapsed before the first of each month in a leap year.
pub(crate) const CUMULATIVE_DAYS_LEAP: [i32; 13] = [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// One tick is 100 nanoseconds
pub const NANOS_PER_TICK: i64 = 100;
pub const TICKS_PER_MILLISECOND: i64 = 10_000;
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1_000;
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator (ISO 8601 format)
pub const TIME_SEPARATOR: char = ':';
/// Fraction separator for seconds
pub const FRACTION_SEPARATOR: char = '.';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

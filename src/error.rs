use crate::Date;
use crate::prelude::*;

/// An argument fell outside the domain of the operation it was passed to.
///
/// Carries the name of the offending parameter (`"year"`, `"ticks"`,
/// `"months"`, ...) and the value that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{param} is out of range: {value}")]
pub struct RangeError {
    param: &'static str,
    value: i64,
}

impl RangeError {
    pub(crate) const fn new(param: &'static str, value: i64) -> Self {
        Self { param, value }
    }

    /// Name of the parameter that was out of range
    pub const fn param(&self) -> &'static str {
        self.param
    }

    /// The rejected value
    pub const fn value(&self) -> i64 {
        self.value
    }
}

/// A format pattern or an input string that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FormatError {
    #[display(fmt = "Format specifier {specifier} requests a component that {target} values do not have")]
    DisallowedSpecifier { specifier: String, target: &'static str },
    #[display(fmt = "Unknown format specifier: {_0}")]
    UnknownSpecifier(String),
    #[display(fmt = "Incomplete format specifier at end of pattern: {_0}")]
    Incomplete(String),
    #[display(fmt = "Input {input:?} does not match pattern {pattern:?}: {reason}")]
    Mismatch { input: String, pattern: String, reason: String },
    #[display(fmt = "Invalid format: {_0}")]
    InvalidFormat(String),
}

impl std::error::Error for FormatError {}

/// Any failure reported by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },
}

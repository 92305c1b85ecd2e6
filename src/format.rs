//! Guards `%`-patterns before they reach chrono.
//!
//! chrono renders a `NaiveDate` or `NaiveTime` by looking up whatever
//! fields a pattern names, and fails in the middle of rendering when a field
//! is missing. Every pattern is checked up front instead: a date may only
//! name date components and a time of day may only name clock components.
//! Whole-timestamp (`%s`, `%c`, `%+`) and time-zone (`%Z`, `%z`, ...)
//! specifiers are refused for both, since neither value carries an instant
//! or an offset.

use std::fmt::{self, Write as _};

use crate::FormatError;

/// The kind of value a pattern is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Date,
    TimeOfDay,
}

impl Target {
    const fn name(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::TimeOfDay => "TimeOfDay",
        }
    }

    const fn allows(self, class: Class) -> bool {
        matches!(
            (self, class),
            (_, Class::Literal) | (Self::Date, Class::Date) | (Self::TimeOfDay, Class::Time)
        )
    }
}

/// What a single specifier reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Date,
    Time,
    /// `%%`, `%n`, `%t`
    Literal,
    Timestamp,
    Zone,
}

const fn classify(letter: u8) -> Option<Class> {
    Some(match letter {
        b'Y' | b'C' | b'y' | b'q' | b'm' | b'b' | b'B' | b'h' | b'd' | b'e' | b'a' | b'A' | b'w' | b'u' | b'U'
        | b'W' | b'G' | b'g' | b'V' | b'j' | b'D' | b'x' | b'F' | b'v' => Class::Date,
        b'H' | b'k' | b'I' | b'l' | b'P' | b'p' | b'M' | b'S' | b'f' | b'R' | b'T' | b'X' | b'r' => Class::Time,
        b'%' | b'n' | b't' => Class::Literal,
        b's' | b'c' | b'+' => Class::Timestamp,
        b'Z' | b'z' => Class::Zone,
        _ => return None,
    })
}

fn unknown(spec: &str, at: usize) -> FormatError {
    let end = spec[at..].chars().next().map_or(at, |c| at + c.len_utf8());
    FormatError::UnknownSpecifier(spec[..end].to_owned())
}

/// Requires `expected` at byte `at` of `spec`, returning the index after it.
fn expect(spec: &str, at: usize, expected: u8) -> Result<usize, FormatError> {
    match spec.as_bytes().get(at) {
        Some(&b) if b == expected => Ok(at + 1),
        Some(_) => Err(unknown(spec, at)),
        None => Err(FormatError::Incomplete(spec.to_owned())),
    }
}

/// Splits the specifier off the front of `spec`, which starts with `%`.
fn split_specifier(spec: &str) -> Result<(&str, Class), FormatError> {
    let bytes = spec.as_bytes();
    let mut at = 1;
    if matches!(bytes.get(at), Some(b'-' | b'_' | b'0')) {
        at += 1;
    }

    let (end, class) = match bytes.get(at) {
        None => return Err(FormatError::Incomplete(spec.to_owned())),
        // %.f %.3f %.6f %.9f
        Some(b'.') => {
            at += 1;
            if matches!(bytes.get(at), Some(b'3' | b'6' | b'9')) {
                at += 1;
            }
            (expect(spec, at, b'f')?, Class::Time)
        },
        // %3f %6f %9f
        Some(b'3' | b'6' | b'9') => (expect(spec, at + 1, b'f')?, Class::Time),
        // %:z %::z %:::z
        Some(b':') => {
            let colons = bytes[at..].iter().take_while(|&&b| b == b':').count();
            if colons > 3 {
                return Err(unknown(spec, at + 3));
            }
            (expect(spec, at + colons, b'z')?, Class::Zone)
        },
        Some(b'#') => (expect(spec, at + 1, b'z')?, Class::Zone),
        Some(&letter) => match classify(letter) {
            Some(class) => (at + 1, class),
            None => return Err(unknown(spec, at)),
        },
    };

    Ok((&spec[..end], class))
}

/// Checks that every specifier in `pattern` is known and names only
/// components that `target` values have.
pub(crate) fn check_pattern(pattern: &str, target: Target) -> Result<(), FormatError> {
    let mut rest = pattern;
    while let Some(start) = rest.find('%') {
        let (specifier, class) = split_specifier(&rest[start..])?;
        if !target.allows(class) {
            return Err(FormatError::DisallowedSpecifier {
                specifier: specifier.to_owned(),
                target:    target.name(),
            });
        }
        rest = &rest[start + specifier.len()..];
    }
    Ok(())
}

/// Collects a chrono formatter into a string without panicking on a
/// rendering failure.
pub(crate) fn render(formatted: impl fmt::Display, pattern: &str) -> Result<String, FormatError> {
    let mut out = String::new();
    write!(out, "{formatted}").map_err(|_| FormatError::InvalidFormat(format!("cannot render {pattern:?}")))?;
    Ok(out)
}

pub(crate) fn mismatch(input: &str, pattern: &str, reason: &chrono::ParseError) -> FormatError {
    FormatError::Mismatch {
        input:   input.to_owned(),
        pattern: pattern.to_owned(),
        reason:  reason.to_string(),
    }
}

/// Parses a field made only of ASCII digits. Unlike `str::parse`, a sign
/// is rejected.
pub(crate) fn parse_digits(field: &str) -> Result<u32, FormatError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidFormat(format!("expected digits, found {field:?}")));
    }
    field
        .parse()
        .map_err(|_| FormatError::InvalidFormat(format!("number too large: {field:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disallowed(specifier: &str, target: Target) -> FormatError {
        FormatError::DisallowedSpecifier {
            specifier: specifier.to_owned(),
            target:    target.name(),
        }
    }

    #[test]
    fn test_date_patterns() {
        for pattern in ["%Y-%m-%d", "%A, %B %-d, %Y", "%F", "%j", "%a %e %b", "%G-W%V-%u", "100%% on %D", "no specifiers"] {
            assert_eq!(check_pattern(pattern, Target::Date), Ok(()), "{pattern}");
        }
    }

    #[test]
    fn test_time_patterns() {
        for pattern in ["%H:%M:%S", "%I:%M %p", "%T%.f", "%H%M%S%.3f", "%R", "%_H:%M", "%k %l %P", "%S%6f", "%r"] {
            assert_eq!(check_pattern(pattern, Target::TimeOfDay), Ok(()), "{pattern}");
        }
    }

    #[test]
    fn test_cross_components_are_disallowed() {
        assert_eq!(check_pattern("%Y %H", Target::Date), Err(disallowed("%H", Target::Date)));
        assert_eq!(check_pattern("%T%.3f", Target::Date), Err(disallowed("%T", Target::Date)));
        assert_eq!(
            check_pattern("%H:%M %-d", Target::TimeOfDay),
            Err(disallowed("%-d", Target::TimeOfDay))
        );
        assert_eq!(check_pattern("%Y%.f", Target::Date), Err(disallowed("%.f", Target::Date)));
    }

    #[test]
    fn test_timestamp_and_zone_are_disallowed_for_both() {
        for target in [Target::Date, Target::TimeOfDay] {
            for specifier in ["%s", "%c", "%+", "%Z", "%z", "%:z", "%::z", "%:::z", "%#z"] {
                assert_eq!(
                    check_pattern(specifier, target),
                    Err(disallowed(specifier, target)),
                    "{specifier}"
                );
            }
        }
    }

    #[test]
    fn test_malformed_specifiers() {
        assert_eq!(
            check_pattern("%Y-%Q", Target::Date),
            Err(FormatError::UnknownSpecifier("%Q".to_owned()))
        );
        assert_eq!(
            check_pattern("%Y-%", Target::Date),
            Err(FormatError::Incomplete("%".to_owned()))
        );
        assert_eq!(
            check_pattern("%H%.", Target::TimeOfDay),
            Err(FormatError::Incomplete("%.".to_owned()))
        );
        assert_eq!(
            check_pattern("%.4f", Target::TimeOfDay),
            Err(FormatError::UnknownSpecifier("%.4".to_owned()))
        );
        assert_eq!(
            check_pattern("%::::z", Target::TimeOfDay),
            Err(FormatError::UnknownSpecifier("%::::".to_owned()))
        );
        assert_eq!(
            check_pattern("%é", Target::Date),
            Err(FormatError::UnknownSpecifier("%é".to_owned()))
        );
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("0042"), Ok(42));
        assert!(parse_digits("").is_err());
        assert!(parse_digits("+1").is_err());
        assert!(parse_digits("-1").is_err());
        assert!(parse_digits("1a").is_err());
        assert!(parse_digits("99999999999").is_err());
    }

    #[test]
    fn test_render_collects() {
        assert_eq!(render(format_args!("{}-{}", 1, 2), "%x"), Ok("1-2".to_owned()));
    }
}

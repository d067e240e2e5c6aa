// crates/rollups-core/src/core/duration.rs
// ============================================================================
// Module: Parameter Durations
// Description: Signed nanosecond durations with a unit-suffix text grammar.
// Purpose: Render and parse deadlines as `1h20m0.5s` while storing nanoseconds.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Deadlines are stored as signed nanosecond counts so the validator can
//! reject negative values instead of losing them at parse time. The text form
//! is a sequence of `<number><unit>` components (`ns`, `us`/`µs`, `ms`, `s`,
//! `m`, `h`) with optional fractions and an optional leading sign, e.g.
//! `300ms`, `-1.5h`, `2h45m`. Rendering produces the canonical form
//! (`1h2m3s`, `1.5ms`, `0s`) which always parses back to the same value.
//!
//! ## Invariants
//! - Parsing never overflows silently; values beyond the `i64` nanosecond
//!   range are rejected.
//! - `parse(render(d)) == d` for every representable duration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Nanoseconds per microsecond.
const NANOS_PER_MICRO: u64 = 1_000;
/// Nanoseconds per millisecond.
const NANOS_PER_MILLI: u64 = 1_000_000;
/// Nanoseconds per second.
const NANOS_PER_SECOND: u64 = 1_000_000_000;
/// Nanoseconds per minute.
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
/// Nanoseconds per hour.
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;
/// Fraction digits beyond this count cannot change a nanosecond total.
const MAX_FRACTION_DIGITS: usize = 19;
/// Largest magnitude accepted while accumulating (covers `i64::MIN`).
const MAX_MAGNITUDE: u128 = 1 << 63;

// ============================================================================
// SECTION: Duration Type
// ============================================================================

/// Signed duration with nanosecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamDuration(i64);

impl ParamDuration {
    /// Zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from a signed nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Creates a duration from whole seconds.
    ///
    /// Saturates at the representable range.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000_000_000))
    }

    /// Creates a duration from whole hours.
    #[must_use]
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_secs(hours.saturating_mul(3_600))
    }

    /// Returns the signed nanosecond count.
    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Returns true when the duration is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Parses the unit-suffix text grammar.
    ///
    /// # Errors
    ///
    /// Returns [`DurationParseError`] when the text is malformed or out of range.
    pub fn parse(input: &str) -> Result<Self, DurationParseError> {
        parse_duration(input)
    }
}

impl fmt::Display for ParamDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_duration(self.0))
    }
}

impl FromStr for ParamDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing duration text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    /// Input was empty or only a sign.
    #[error("invalid duration \"{input}\": empty value")]
    Empty {
        /// Original input.
        input: String,
    },
    /// A component had no digits before its unit.
    #[error("invalid duration \"{input}\": expected a number")]
    MissingNumber {
        /// Original input.
        input: String,
    },
    /// A number was not followed by a unit.
    #[error("invalid duration \"{input}\": missing unit")]
    MissingUnit {
        /// Original input.
        input: String,
    },
    /// A unit suffix was not recognized.
    #[error("invalid duration \"{input}\": unknown unit \"{unit}\"")]
    UnknownUnit {
        /// Original input.
        input: String,
        /// Unrecognized unit text.
        unit: String,
    },
    /// Value exceeds the nanosecond range.
    #[error("invalid duration \"{input}\": out of range")]
    Overflow {
        /// Original input.
        input: String,
    },
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses duration text into signed nanoseconds.
fn parse_duration(input: &str) -> Result<ParamDuration, DurationParseError> {
    let mut rest = input;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }
    if rest == "0" {
        return Ok(ParamDuration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationParseError::Empty {
            input: input.to_string(),
        });
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after_int) = rest.split_at(int_len);
        rest = after_int;

        let mut frac_digits = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            let (digits, after_frac) = after_dot.split_at(frac_len);
            frac_digits = digits;
            rest = after_frac;
        }
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationParseError::MissingNumber {
                input: input.to_string(),
            });
        }

        let unit_len = rest.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;
        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit {
                input: input.to_string(),
            });
        }
        let scale = unit_scale(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            input: input.to_string(),
            unit: unit.to_string(),
        })?;

        let component = component_nanos(int_digits, frac_digits, scale).ok_or_else(|| {
            DurationParseError::Overflow {
                input: input.to_string(),
            }
        })?;
        total = total
            .checked_add(component)
            .filter(|value| *value <= MAX_MAGNITUDE)
            .ok_or_else(|| DurationParseError::Overflow {
                input: input.to_string(),
            })?;
    }

    let overflow = || DurationParseError::Overflow {
        input: input.to_string(),
    };
    let magnitude = i128::try_from(total).map_err(|_| overflow())?;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).map(ParamDuration).map_err(|_| overflow())
}

/// Returns nanoseconds per unit for a recognized unit suffix.
fn unit_scale(unit: &str) -> Option<u128> {
    let scale = match unit {
        "ns" => 1,
        "us" | "\u{00b5}s" | "\u{03bc}s" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => NANOS_PER_MINUTE,
        "h" => NANOS_PER_HOUR,
        _ => return None,
    };
    Some(u128::from(scale))
}

/// Computes the nanoseconds of one `<int>.<frac><unit>` component.
fn component_nanos(int_digits: &str, frac_digits: &str, scale: u128) -> Option<u128> {
    let mut whole: u128 = 0;
    for digit in int_digits.bytes() {
        whole = whole.checked_mul(10)?.checked_add(u128::from(digit - b'0'))?;
        if whole > MAX_MAGNITUDE {
            return None;
        }
    }
    let mut nanos = whole.checked_mul(scale)?;

    let significant = &frac_digits[.. frac_digits.len().min(MAX_FRACTION_DIGITS)];
    if !significant.is_empty() {
        let mut fraction: u128 = 0;
        let mut divisor: u128 = 1;
        for digit in significant.bytes() {
            fraction = fraction * 10 + u128::from(digit - b'0');
            divisor *= 10;
        }
        nanos = nanos.checked_add(fraction * scale / divisor)?;
    }
    Some(nanos)
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders signed nanoseconds in canonical unit-suffix form.
fn render_duration(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }
    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }
    let magnitude = nanos.unsigned_abs();
    if magnitude < NANOS_PER_SECOND {
        let (unit, scale, width) = if magnitude < NANOS_PER_MICRO {
            ("ns", 1, 0)
        } else if magnitude < NANOS_PER_MILLI {
            ("\u{00b5}s", NANOS_PER_MICRO, 3)
        } else {
            ("ms", NANOS_PER_MILLI, 6)
        };
        push_scaled(&mut out, magnitude, scale, width);
        out.push_str(unit);
        return out;
    }

    let hours = magnitude / NANOS_PER_HOUR;
    let minutes = (magnitude % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    let seconds = magnitude % NANOS_PER_MINUTE;
    if hours > 0 {
        let _ = write!(out, "{hours}h{minutes}m");
    } else if minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    push_scaled(&mut out, seconds, NANOS_PER_SECOND, 9);
    out.push('s');
    out
}

/// Writes `value / scale` with a trimmed decimal fraction of `width` digits.
fn push_scaled(out: &mut String, value: u64, scale: u64, width: usize) {
    let whole = value / scale;
    let fraction = value % scale;
    let _ = write!(out, "{whole}");
    if fraction > 0 {
        let digits = format!("{fraction:0width$}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

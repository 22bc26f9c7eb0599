/*
    The magnitude interface
*/

mod binary;
mod decimal;

pub use binary::*;
pub use decimal::*;

use crate::error::LiteralError;

/// An exact, arbitrary-precision, signed value with a radix point.
///
/// A `Magnitude` is the working representation of a literal during
/// conversion: a sequence of radix digits (least significant first) and a
/// point index separating the integer part from the fraction. The rounding
/// engine owns exactly one `Magnitude` per conversion and mutates it
/// destructively, so only the handful of primitives it consumes are
/// exposed here. Two implementations exist, one per literal radix; no
/// third radix is ever added.
pub trait Magnitude {
    /// Returns true if the literal carried a leading minus sign.
    /// The sign is fixed at construction.
    fn is_negative(&self) -> bool;

    /// Multiplies the value by 2 in place.
    fn double(&mut self);

    /// Divides the value by 2 in place. The division is exact; the digit
    /// sequence grows at the fractional end when a remainder survives.
    fn halve(&mut self);

    /// Returns true if the integer part is the single digit zero,
    /// i.e. the value lies in [0, 1).
    fn is_less_than_one(&self) -> bool;

    /// Returns true if the value is at least 2: either the integer part
    /// spans more than one digit, or its single digit exceeds 1.
    fn is_at_least_two(&self) -> bool;

    /// Drops the integer part, leaving only the fractional remainder.
    fn discard_integer_part(&mut self);

    /// Returns true if the value is exactly zero.
    fn is_zero(&self) -> bool;

    /// Returns conservative `(lo, hi)` bounds on `floor(log2(value))` for
    /// a nonzero value. The true binary exponent always lies within the
    /// bounds; they need not be tight. The result is meaningless for zero.
    fn binary_exponent_range(&self) -> (i64, i64);
}

// The exponent accumulator saturates here. Anything larger is already far
// outside the exponent range of every supported format, so the exact count
// no longer matters; the rounding engine clamps to infinity or zero on its
// own.
pub(crate) const MAX_EXPONENT: i64 = 100_000;

// Splits an optional leading sign off a literal.
pub(crate) fn strip_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

// Parses the signed decimal integer after an exponent marker.
// `at` is the index of the first character of `s` within the literal,
// used for error positions. Underscores are skipped like everywhere else.
pub(crate) fn parse_exponent(s: &str, at: usize) -> Result<i64, LiteralError> {
    let (esign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let skipped = s.len() - body.len();

    let mut exp: i64 = 0;
    let mut seen_digit = false;
    for (i, ch) in body.char_indices() {
        if ch == '_' {
            continue;
        }
        match ch.to_digit(10) {
            Some(d) => {
                seen_digit = true;
                if exp < MAX_EXPONENT {
                    exp = 10 * exp + d as i64;
                }
            }
            None => {
                return Err(LiteralError::UnexpectedChar {
                    at: at + skipped + i,
                    ch,
                })
            }
        }
    }
    if !seen_digit {
        return Err(LiteralError::EmptyExponent { at });
    }
    Ok(esign * exp)
}

/*
    Literal syntax errors
*/

use thiserror::Error;

/// Rejection of a malformed numeric literal.
///
/// Raised only while scanning literal text. Every syntactically valid
/// literal converts without error: overflow becomes a signed infinity and
/// underflow becomes a signed zero or a subnormal, never an `Err`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("cannot parse an empty string")]
    Empty,

    #[error("unexpected char [{ch}] at index {at}")]
    UnexpectedChar { at: usize, ch: char },

    #[error("more than one radix point, second at index {at}")]
    DuplicatePoint { at: usize },

    #[error("literal contains no digits")]
    NoDigits,

    #[error("hexadecimal literal must start with 0x")]
    MissingHexPrefix,

    #[error("hexadecimal literal requires a p exponent")]
    MissingExponent,

    #[error("exponent starting at index {at} has no digits")]
    EmptyExponent { at: usize },
}

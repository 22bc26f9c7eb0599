/*
    Base-2 magnitude for hexadecimal literals
*/

use std::fmt;

use crate::error::LiteralError;
use crate::magnitude::{parse_exponent, strip_sign, Magnitude};
use crate::util::BitVec;

/// An exact binary value built from a hexadecimal literal.
///
/// Each hex digit of the literal expands into exactly 4 bits, stored least
/// significant first; `point` counts the fractional bits. Doubling and
/// halving are point shifts, so both run in constant time before
/// normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMagnitude {
    negative: bool,
    bits: BitVec,
    point: i64,
}

impl BinaryMagnitude {
    /// Builds a magnitude from literal text:
    /// `[sign] '0x' hexdigits* ['.' hexdigits*] ('p'|'P') [sign] digits+`,
    /// with underscores skipped. The prefix and the binary exponent are
    /// both mandatory; the exponent denotes a power of 2 and is folded
    /// into the point position before returning.
    pub fn from_literal(text: &str) -> Result<Self, LiteralError> {
        if text.is_empty() {
            return Err(LiteralError::Empty);
        }
        let (negative, body) = strip_sign(text);
        let body = body
            .strip_prefix("0x")
            .ok_or(LiteralError::MissingHexPrefix)?;
        let offset = text.len() - body.len();

        let mut bits = BitVec::new();
        let mut marker: Option<usize> = None; // bits seen before the point
        let mut exp: Option<i64> = None;
        for (i, ch) in body.char_indices() {
            match ch {
                '_' => {}
                '.' => {
                    if marker.is_some() {
                        return Err(LiteralError::DuplicatePoint { at: offset + i });
                    }
                    marker = Some(bits.len());
                }
                'p' | 'P' => {
                    exp = Some(parse_exponent(&body[i + 1..], offset + i + 1)?);
                    break;
                }
                _ => match ch.to_digit(16) {
                    Some(d) => {
                        // four bits per hex digit, most significant first
                        for shift in (0..4).rev() {
                            bits.push((d >> shift) & 1 == 1);
                        }
                    }
                    None => return Err(LiteralError::UnexpectedChar { at: offset + i, ch }),
                },
            }
        }
        let exp = exp.ok_or(LiteralError::MissingExponent)?;

        let marker = marker.unwrap_or(bits.len());
        let point = bits.len() as i64 - marker as i64 - exp;
        bits.reverse();

        let mut num = Self {
            negative,
            bits,
            point,
        };
        num.normalize();
        Ok(num)
    }

    /// Builds a magnitude from a machine integer.
    pub fn from_int(n: i64) -> Self {
        let negative = n < 0;
        let mut n = n.unsigned_abs();
        let mut bits = BitVec::new();
        while n > 0 {
            bits.push(n % 2 == 1);
            n /= 2;
        }
        let mut num = Self {
            negative,
            bits,
            point: 0,
        };
        num.normalize();
        num
    }

    // Same invariants as the decimal form: the point stays inside the bit
    // sequence and superfluous zero bits are trimmed from both ends.
    // Padding and trimming run as bulk shifts; a saturated exponent can
    // demand hundreds of thousands of bits, and per-bit inserts would make
    // that quadratic.
    fn normalize(&mut self) {
        if self.point >= self.bits.len() as i64 {
            self.bits.resize(self.point as usize + 1, false);
        }
        if self.point < 0 {
            let pad = self.point.unsigned_abs() as usize;
            let len = self.bits.len();
            self.bits.resize(len + pad, false);
            if len > 0 {
                // move the payload up, leaving the pad at the fractional end
                self.bits.shift_right(pad);
            }
            self.point = 0;
        }
        let trim = match self.bits.first_one() {
            Some(i) => i.min(self.point as usize),
            None => self.point as usize,
        };
        if trim > 0 {
            self.bits.shift_left(trim);
            self.bits.truncate(self.bits.len() - trim);
            self.point -= trim as i64;
        }
        while self.point < self.bits.len() as i64 - 1 && !self.bits[self.bits.len() - 1] {
            self.bits.pop();
        }
    }

    #[inline]
    fn top(&self) -> bool {
        self.bits[self.bits.len() - 1]
    }
}

impl Magnitude for BinaryMagnitude {
    fn is_negative(&self) -> bool {
        self.negative
    }

    fn double(&mut self) {
        self.point -= 1;
        self.normalize();
    }

    fn halve(&mut self) {
        self.point += 1;
        self.normalize();
    }

    fn is_less_than_one(&self) -> bool {
        self.point == self.bits.len() as i64 - 1 && !self.top()
    }

    fn is_at_least_two(&self) -> bool {
        // a single binary digit never exceeds 1, so any value >= 2 has an
        // integer part spanning more than one bit
        self.point != self.bits.len() as i64 - 1
    }

    fn discard_integer_part(&mut self) {
        self.bits.truncate(self.point as usize + 1);
        let last = self.bits.len() - 1;
        self.bits.set(last, false);
        self.normalize();
    }

    fn is_zero(&self) -> bool {
        self.bits.len() == 1 && !self.bits[0]
    }

    fn binary_exponent_range(&self) -> (i64, i64) {
        // exact: the value lies in [2^h, 2^(h+1))
        match self.bits.last_one() {
            Some(i) => {
                let h = i as i64 - self.point;
                (h, h)
            }
            None => (0, 0),
        }
    }
}

impl fmt::Display for BinaryMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.bits.len()).rev() {
            write!(f, "{}", self.bits[i] as u8)?;
            if i as i64 == self.point {
                write!(f, ".")?;
            }
        }
        Ok(())
    }
}

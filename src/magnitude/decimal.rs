/*
    Base-10 magnitude for decimal literals
*/

use std::collections::VecDeque;
use std::fmt;

use crate::error::LiteralError;
use crate::magnitude::{parse_exponent, strip_sign, Magnitude};

/// An exact decimal value built from a decimal literal.
///
/// Digits are stored least significant first; `point` is the number of
/// fractional digits, e.g. `point == 4` for `3.1415`. Normalization keeps
/// the point inside the digit sequence and strips superfluous zeros at
/// both ends, so zero is always exactly the digit sequence `[0]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalMagnitude {
    negative: bool,
    digits: VecDeque<u8>,
    point: i64,
}

impl DecimalMagnitude {
    /// Builds a magnitude from literal text:
    /// `[sign] digits* ['.' digits*] [('e'|'E') [sign] digits+]`,
    /// with underscores skipped anywhere between digits. At least one
    /// digit must appear in the integer or fractional part. The exponent
    /// is folded into the point position before returning.
    pub fn from_literal(text: &str) -> Result<Self, LiteralError> {
        if text.is_empty() {
            return Err(LiteralError::Empty);
        }
        let (negative, body) = strip_sign(text);
        let offset = text.len() - body.len();

        let mut digits: VecDeque<u8> = VecDeque::new();
        let mut marker: Option<usize> = None; // digits seen before the point
        let mut exp: i64 = 0;
        for (i, ch) in body.char_indices() {
            match ch {
                '_' => {}
                '.' => {
                    if marker.is_some() {
                        return Err(LiteralError::DuplicatePoint { at: offset + i });
                    }
                    marker = Some(digits.len());
                }
                'e' | 'E' => {
                    exp = parse_exponent(&body[i + 1..], offset + i + 1)?;
                    break;
                }
                _ => match ch.to_digit(10) {
                    Some(d) => digits.push_back(d as u8),
                    None => return Err(LiteralError::UnexpectedChar { at: offset + i, ch }),
                },
            }
        }
        if digits.is_empty() {
            return Err(LiteralError::NoDigits);
        }

        let marker = marker.unwrap_or(digits.len());
        let point = digits.len() as i64 - marker as i64 - exp;
        digits.make_contiguous().reverse();

        let mut num = Self {
            negative,
            digits,
            point,
        };
        num.normalize();
        Ok(num)
    }

    /// Builds a magnitude from a machine integer.
    pub fn from_int(n: i64) -> Self {
        let negative = n < 0;
        let mut n = n.unsigned_abs();
        let mut digits = VecDeque::new();
        loop {
            digits.push_back((n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut num = Self {
            negative,
            digits,
            point: 0,
        };
        num.normalize();
        num
    }

    // Restores the representation invariants: the point stays inside the
    // digit sequence (padding the short end with zeros), and superfluous
    // zeros are trimmed from both ends.
    fn normalize(&mut self) {
        while self.point >= self.digits.len() as i64 {
            self.digits.push_back(0);
        }
        while self.point < 0 {
            self.digits.push_front(0);
            self.point += 1;
        }
        while self.point > 0 && self.digits.front() == Some(&0) {
            self.digits.pop_front();
            self.point -= 1;
        }
        while self.point < self.digits.len() as i64 - 1 && self.digits.back() == Some(&0) {
            self.digits.pop_back();
        }
    }

    #[inline]
    fn top(&self) -> u8 {
        self.digits[self.digits.len() - 1]
    }
}

impl Magnitude for DecimalMagnitude {
    fn is_negative(&self) -> bool {
        self.negative
    }

    fn double(&mut self) {
        let mut carry = 0;
        for d in self.digits.iter_mut() {
            let n = *d * 2 + carry;
            *d = n % 10;
            carry = n / 10;
        }
        if carry > 0 {
            self.digits.push_back(carry);
        }
        self.normalize();
    }

    fn halve(&mut self) {
        // long division by 2, most significant digit first
        let mut carry = 0;
        for d in self.digits.iter_mut().rev() {
            let n = *d + carry;
            *d = n / 2;
            carry = n % 2 * 10;
        }
        if carry > 0 {
            self.digits.push_front(carry / 2);
            self.point += 1;
        }
        self.normalize();
    }

    fn is_less_than_one(&self) -> bool {
        self.point == self.digits.len() as i64 - 1 && self.top() == 0
    }

    fn is_at_least_two(&self) -> bool {
        if self.point != self.digits.len() as i64 - 1 {
            // the integer part spans more than one digit
            return true;
        }
        self.top() > 1
    }

    fn discard_integer_part(&mut self) {
        self.digits.truncate(self.point as usize + 1);
        let last = self.digits.len() - 1;
        self.digits[last] = 0;
        self.normalize();
    }

    fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    fn binary_exponent_range(&self) -> (i64, i64) {
        // h is the decimal exponent of the most significant nonzero digit,
        // so the value lies in [10^h, 10^(h+1)). Since 2^3 < 10 < 2^4 the
        // bounds below bracket floor(log2) on both sides of zero.
        let h = match self.digits.iter().rposition(|&d| d != 0) {
            Some(i) => i as i64 - self.point,
            None => return (0, 0),
        };
        let lo = i64::min(3 * h, 4 * h) - 1;
        let hi = i64::max(3 * (h + 1), 4 * (h + 1)) + 1;
        (lo, hi)
    }
}

impl fmt::Display for DecimalMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.digits.len()).rev() {
            write!(f, "{}", self.digits[i])?;
            if i as i64 == self.point {
                write!(f, ".")?;
            }
        }
        Ok(())
    }
}

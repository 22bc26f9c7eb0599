/*
    Rounding engine and public entry points
*/

use bitvec::prelude::Lsb0;
use num_traits::cast::ToPrimitive;

use crate::error::LiteralError;
use crate::magnitude::{strip_sign, BinaryMagnitude, DecimalMagnitude, Magnitude};
use crate::util::{bitvec_to_biguint, biguint_to_bitvec, BitVec};

macro_rules! bitvec {
    [ $($t:tt)* ] => {
        {
            bitvec::bitvec![u32, Lsb0; $($t)*]
        }
    };
}

macro_rules! assert_valid_format {
    ($E:expr, $N:expr) => {
        assert!(
            (2 <= $E) && ($E <= 60),
            "invalid exponent width, must be 2 <= E <= 60: {}",
            $E
        );
        assert!(
            (2 <= ($N - $E)),
            "invalid total width, must be 2 + E <= N: {}",
            $N
        );
        assert!(
            $N <= 64,
            "invalid total width, bit patterns are returned as u64: {}",
            $N
        );
    };
}

/** An IEEE 754 binary interchange format.
 *
 * The generics `E` and `N` specify the number of bits in the
 * exponent field and in the entire float overall. The format only
 * describes the encoding; `encode` produces the packed bit pattern
 * of the correctly rounded value of a `Magnitude`.
 *
 */
pub struct Format<const E: usize, const N: usize>;

// Format parameters
impl<const E: usize, const N: usize> Format<E, N> {
    /// Bitwidth of the representation.
    pub const N: usize = N;

    /// Bitwidth of the exponent field.
    pub const E: usize = E;

    /// Bitwidth of the mantissa field.
    pub const M: usize = N - E - 1;

    /// Exponent of the largest finite value in this representation when
    /// it is in the form `(-1)^s 2^e m` where `m` is a fraction
    /// between 1 and 2.
    pub const EMAX: i64 = i64::pow(2, (E - 1) as u32) - 1;

    /// Exponent of the smallest normal value in this representation.
    /// This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    pub const BIAS: i64 = Self::EMAX;
}

// The rounding engine
impl<const E: usize, const N: usize> Format<E, N> {
    /// Consumes a `Magnitude` and produces the bit pattern of the nearest
    /// representable value in this format, breaking ties to even.
    ///
    /// This function never fails: a magnitude beyond the finite range
    /// encodes as a signed infinity, and one below half the smallest
    /// subnormal encodes as a signed zero.
    pub fn encode<Num: Magnitude>(mut num: Num) -> u64 {
        assert_valid_format!(E, N);
        let sign = num.is_negative();

        if num.is_zero() {
            return Self::pack(sign, 0, &bitvec![0; Self::M]);
        }

        // A literal like `1e100000` would walk the scaling loops below once
        // per unit of exponent. The magnitude's own exponent bounds settle
        // such inputs up front; values anywhere near the representable
        // boundary fall through to the exact path.
        let (lo, hi) = num.binary_exponent_range();
        if lo > Self::EMAX {
            return Self::infinity(sign);
        }
        if hi < Self::EMIN - Self::M as i64 - 1 {
            // strictly below half the smallest subnormal
            return Self::pack(sign, 0, &bitvec![0; Self::M]);
        }

        // scale into [1, 2), tracking the unbiased exponent
        let mut exp: i64 = 0;
        while num.is_at_least_two() {
            num.halve();
            exp += 1;
        }
        while num.is_less_than_one() {
            num.double();
            exp -= 1;
        }

        if exp > Self::EMAX {
            return Self::infinity(sign);
        }

        let mut exp_field: i64;
        if exp >= Self::EMIN {
            exp_field = exp + Self::BIAS;
        } else {
            // subnormal range: shift down to the minimum exponent and
            // encode with a zero exponent field
            while exp < Self::EMIN {
                num.halve();
                exp += 1;
            }
            exp_field = 0;
        }

        // drop the leading digit; for a normal number this is the implicit
        // 1 bit, for a subnormal it is 0
        num.discard_integer_part();

        // extract the mantissa, most significant bit first
        let mut mantissa = bitvec![0; Self::M];
        for i in (0..Self::M).rev() {
            num.double();
            if !num.is_less_than_one() {
                mantissa.set(i, true);
                num.discard_integer_part();
            }
        }

        // round to nearest, ties to even, using the leftover fraction
        if !num.is_zero() {
            num.double();
            if !num.is_less_than_one() {
                num.discard_integer_part();
                // an empty remainder means the input sat exactly halfway
                let increment = if num.is_zero() { mantissa[0] } else { true };
                if increment {
                    let mut i = bitvec_to_biguint(&mantissa);
                    i += 1u8;
                    let wide = biguint_to_bitvec(&i, Self::M + 1);
                    mantissa = wide[..Self::M].into();
                    if wide[Self::M] {
                        // carried out of the mantissa
                        exp_field += 1;
                        if exp_field > Self::EMAX + Self::BIAS {
                            return Self::infinity(sign);
                        }
                    }
                }
            }
        }

        Self::pack(sign, exp_field, &mantissa)
    }

    // Packs sign, exponent field, and mantissa into the N-bit pattern.
    fn pack(sign: bool, mut exp_field: i64, mantissa: &BitVec) -> u64 {
        let mut bv = bitvec![0; N];
        for (i, b) in mantissa.iter().enumerate() {
            bv.set(i, *b);
        }
        for i in 0..E {
            bv.set(Self::M + i, exp_field % 2 != 0);
            exp_field >>= 1;
        }
        bv.set(N - 1, sign);
        bitvec_to_biguint(&bv).to_u64().unwrap()
    }

    // The bit pattern of an infinity: all-ones exponent, zero mantissa.
    fn infinity(sign: bool) -> u64 {
        Self::pack(sign, (1 << E) - 1, &bitvec![0; Self::M])
    }
}

/// Alias for `Format<8, 32>` (single-precision encoding)
pub type Binary32 = Format<8, 32>;
/// Alias for `Format<11, 64>` (double-precision encoding)
pub type Binary64 = Format<11, 64>;

// A literal is hexadecimal when `0x` follows the optional sign.
fn is_hex_literal(text: &str) -> bool {
    let (_, body) = strip_sign(text);
    body.starts_with("0x")
}

/// Converts a decimal or hexadecimal literal to IEEE 754 binary32 bits.
pub fn parse_f32_bits(text: &str) -> Result<u32, LiteralError> {
    if is_hex_literal(text) {
        Ok(Binary32::encode(BinaryMagnitude::from_literal(text)?) as u32)
    } else {
        Ok(Binary32::encode(DecimalMagnitude::from_literal(text)?) as u32)
    }
}

/// Converts a decimal or hexadecimal literal to IEEE 754 binary64 bits.
pub fn parse_f64_bits(text: &str) -> Result<u64, LiteralError> {
    if is_hex_literal(text) {
        Ok(Binary64::encode(BinaryMagnitude::from_literal(text)?))
    } else {
        Ok(Binary64::encode(DecimalMagnitude::from_literal(text)?))
    }
}

/// Converts a decimal or hexadecimal literal to an `f32`.
pub fn parse_f32(text: &str) -> Result<f32, LiteralError> {
    Ok(f32::from_bits(parse_f32_bits(text)?))
}

/// Converts a decimal or hexadecimal literal to an `f64`.
pub fn parse_f64(text: &str) -> Result<f64, LiteralError> {
    Ok(f64::from_bits(parse_f64_bits(text)?))
}

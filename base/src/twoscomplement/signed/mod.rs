//! The arbitrary-precision signed integer type and everything a
//! caller can do with one: parse it from decimal text, combine values
//! with the arithmetic operators, take a factorial, compare, and
//! render back to decimal or to the raw two's-complement bit string.
//!
//! Operations never mutate an operand: each one reads its operands
//! and allocates a fresh result, so values never alias.

use std::cmp::Ordering;
use std::fmt::{self, Binary, Debug, Display, Formatter, Write};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::Serialize;

use super::bits::BitSeq;
use super::decimal;
use super::error::FormatError;
use super::Sign;

#[cfg(test)]
mod tests;

/// An arbitrary-precision signed integer stored as a minimal
/// two's-complement bit sequence.  `0` is the one-bit sequence `[0]`,
/// `-1` is `[1]`, `2` is `[0,1,0]` and so on.
///
/// Because the minimal encoding of a value is unique, the derived
/// (representational) `PartialEq` and `Hash` agree with value
/// equality.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BigInt {
    bits: BitSeq,
}

impl BigInt {
    pub fn zero() -> BigInt {
        BigInt {
            bits: BitSeq::zero(),
        }
    }

    pub fn one() -> BigInt {
        BigInt::from(1_u8)
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.bits.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        !self.bits.is_negative() && !self.bits.is_zero()
    }

    pub fn signum(&self) -> Sign {
        if self.is_zero() {
            Sign::Zero
        } else if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// The number of digits in the minimal encoding, including the
    /// sign bit.  Always at least 1.
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// The factorial of this value.  For zero and negative values the
    /// result is defined to be 1; this is a domain convention of the
    /// calculator, not an error.
    ///
    /// The accumulation runs iteratively from `self` down to 1 so
    /// that stack use stays constant however large the operand is.
    pub fn factorial(&self) -> BigInt {
        let zero = BigInt::zero();
        let one = BigInt::one();
        if *self <= zero {
            return one;
        }
        let mut product = one.clone();
        let mut counter = self.clone();
        while counter > zero {
            product = &product * &counter;
            counter = &counter - &one;
        }
        product
    }
}

/// Parses an optionally signed decimal numeral.  The sign may be
/// attached ("+123") or stand alone as a separate token ("+ 123");
/// surrounding whitespace is ignored.  The magnitude is converted by
/// repeated string-level halving, the reserved sign bit is appended,
/// and negative inputs are then negated into two's complement.
impl FromStr for BigInt {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<BigInt, FormatError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (negative, digits): (bool, &str) = match tokens.as_slice() {
            [] => {
                return Err(FormatError::Empty);
            }
            [tok] => {
                if let Some(rest) = tok.strip_prefix('-') {
                    (true, rest)
                } else if let Some(rest) = tok.strip_prefix('+') {
                    (false, rest)
                } else {
                    (false, *tok)
                }
            }
            [sign, digits] => match *sign {
                "+" => (false, *digits),
                "-" => (true, *digits),
                _ => {
                    return Err(FormatError::MalformedSign);
                }
            },
            _ => {
                return Err(FormatError::TooManyTokens);
            }
        };

        if digits.is_empty() {
            return Err(FormatError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::InvalidCharacter);
        }

        let mut bits = Vec::new();
        let mut number = String::from(digits);
        while number != "0" {
            bits.push(decimal::low_bit(&number));
            number = decimal::halve(&number);
        }
        bits.push(0); // the reserved sign position
        let magnitude = BitSeq::from_bits(bits);
        Ok(BigInt {
            bits: if negative {
                magnitude.negated()
            } else {
                magnitude
            },
        })
    }
}

/// Renders the value as a decimal numeral.  This is Horner's rule
/// evaluated over the bits from the sign end downwards, doubling a
/// decimal-digit-string accumulator by adding it to itself, because
/// no fixed-width arithmetic type is assumed to be wide enough.
impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let negative = self.is_negative();
        let working = if negative {
            self.bits.negated()
        } else {
            self.bits.clone()
        };
        let mut result = String::new();
        for bit in working.bits_msb_first() {
            if !result.is_empty() {
                result = decimal::add(&result, &result);
            }
            if bit == 1 {
                result = decimal::add(&result, "1");
            }
        }
        if result.is_empty() {
            result.push('0');
        }
        if negative {
            f.write_char('-')?;
        }
        f.write_str(&result)
    }
}

/// Renders the raw two's-complement digits, sign bit first, using the
/// minimum number of digits: `0` is "0", `-1` is "1", `2` is "010",
/// `-2` is "10".
impl Binary for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.bits.bits_msb_first() {
            f.write_char(char::from(bit + b'0'))?;
        }
        Ok(())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt{{bits: {:b}}}", self)
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        // Minimal encodings are unique, so the equality fast path is
        // exact; otherwise the sign of the difference decides.
        if self.bits == other.bits {
            Ordering::Equal
        } else if (self - other).is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt {
            bits: self.bits.negated(),
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt {
            bits: self.bits.add(&rhs.bits),
        }
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt {
            bits: self.bits.add(&rhs.bits.negated()),
        }
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self - rhs;
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt {
            bits: self.bits.mul(&rhs.bits),
        }
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

// This macro implements conversions from unsigned native types to
// BigInt, which are always possible.
macro_rules! from_unsigned_native_to_self {
    ($($from:ty)*) => {
        $(
            impl From<$from> for BigInt {
                fn from(n: $from) -> Self {
                    BigInt {
                        bits: BitSeq::from_magnitude(n as u64),
                    }
                }
            }
        )*
    }
}

// This macro implements conversions from signed native types to
// BigInt, which are always possible; negative inputs go through the
// same negation primitive as parsed text.
macro_rules! from_signed_native_to_self {
    ($($from:ty)*) => {
        $(
            impl From<$from> for BigInt {
                fn from(n: $from) -> Self {
                    let magnitude = BitSeq::from_magnitude(n.unsigned_abs() as u64);
                    BigInt {
                        bits: if n < 0 { magnitude.negated() } else { magnitude },
                    }
                }
            }
        )*
    }
}

from_unsigned_native_to_self!(u8 u16 u32 u64 usize);
from_signed_native_to_self!(i8 i16 i32 i64 isize);

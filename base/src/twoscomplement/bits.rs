//! Bit-level storage for the integer engine.  A [`BitSeq`] holds the
//! digits of a two's-complement binary number, least-significant bit
//! first; the final digit is always the sign bit.  Every constructor
//! and operation here returns a sequence in minimal form: no bit can
//! be removed from the most-significant end without changing the
//! value, and zero is exactly the one-bit sequence `[0]`.
//!
//! Because the minimal form is unique, representational equality of
//! two sequences is value equality, which is why the comparison
//! traits can simply be derived.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub(crate) struct BitSeq {
    bits: Vec<u8>,
}

impl BitSeq {
    pub(crate) fn zero() -> BitSeq {
        BitSeq { bits: vec![0] }
    }

    /// Construct from digits given least-significant first.  The last
    /// digit is taken to be the sign bit.
    pub(crate) fn from_bits(bits: Vec<u8>) -> BitSeq {
        debug_assert!(!bits.is_empty());
        debug_assert!(bits.iter().all(|b| *b < 2));
        BitSeq { bits }.normalized()
    }

    /// Construct a non-negative sequence from a native magnitude.
    pub(crate) fn from_magnitude(mut n: u64) -> BitSeq {
        if n == 0 {
            return BitSeq::zero();
        }
        let mut bits = Vec::with_capacity(u64::BITS as usize + 1);
        while n != 0 {
            bits.push((n & 1) as u8);
            n >>= 1;
        }
        bits.push(0); // the sign position
        BitSeq { bits }.normalized()
    }

    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }

    fn sign_bit(&self) -> u8 {
        self.bits[self.bits.len() - 1]
    }

    /// Read the digit at position `i` as if the sequence were
    /// sign-extended to infinite length.
    fn bit(&self, i: usize) -> u8 {
        if i < self.bits.len() {
            self.bits[i]
        } else {
            self.sign_bit()
        }
    }

    pub(crate) fn is_negative(&self) -> bool {
        self.sign_bit() == 1
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.bits == [0]
    }

    /// The digits from the sign bit down to the least-significant
    /// bit, used by the renderers.
    pub(crate) fn bits_msb_first(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().rev().copied()
    }

    /// Strip duplicate most-significant digits until exactly one copy
    /// of the sign bit remains.  Never reduces the size below 1.
    fn normalized(mut self) -> BitSeq {
        while self.bits.len() >= 2 && self.bits[self.bits.len() - 1] == self.bits[self.bits.len() - 2]
        {
            self.bits.pop();
        }
        self
    }

    /// Replicate the sign bit until the size reaches `target`; a
    /// no-op if the sequence is already at least that long.  The
    /// result is deliberately not minimal, which is why the
    /// multiplication loop below indexes raw digits instead of
    /// calling the normalizing constructors.
    fn sign_extended(&self, target: usize) -> BitSeq {
        let mut bits = self.bits.clone();
        while bits.len() < target {
            bits.push(self.sign_bit());
        }
        BitSeq { bits }
    }

    /// The lowest `n` digits as a fresh sequence (all of them if the
    /// sequence is shorter than `n`), re-normalized.  Used to recover
    /// a product from the padded accumulator.
    fn truncated_low(&self, n: usize) -> BitSeq {
        let keep = n.min(self.bits.len());
        BitSeq {
            bits: self.bits[..keep].to_vec(),
        }
        .normalized()
    }

    /// Insert a 0 at the least-significant position and drop the
    /// most-significant digit, holding the size constant.  Inside the
    /// multiplication loop this advances the place value of the
    /// addend; it is not an arithmetic shift.
    fn shifted_one_place(&self) -> BitSeq {
        let mut bits = Vec::with_capacity(self.bits.len());
        bits.push(0);
        bits.extend_from_slice(&self.bits[..self.bits.len() - 1]);
        BitSeq { bits }
    }

    /// Two's-complement negation: complement every digit, then add
    /// one with the carry propagated from the least-significant end.
    /// A carry falling off the most-significant end is discarded.
    /// Negating a negative value can need one more digit than the
    /// operand had (the magnitude of the most negative n-bit value
    /// does not fit in n-1 value bits), so in that case a fresh 0
    /// sign bit is appended before normalizing.
    pub(crate) fn negated(&self) -> BitSeq {
        let was_negative = self.is_negative();
        let mut bits: Vec<u8> = self.bits.iter().map(|b| 1 - b).collect();
        let mut carry = 1;
        for b in bits.iter_mut() {
            let sum = *b + carry;
            *b = sum % 2;
            carry = sum / 2;
        }
        if was_negative {
            bits.push(0);
        }
        BitSeq { bits }.normalized()
    }

    /// Full-adder walk over both operands.  The walk runs two digits
    /// past the longer operand: naive sign-extended addition of two
    /// n-digit values can need up to n+2 digits before the result is
    /// unambiguous in two's complement.  Positions beyond an
    /// operand's stored length read as its sign bit.
    pub(crate) fn add(&self, other: &BitSeq) -> BitSeq {
        let length = self.len().max(other.len()) + 2;
        let mut bits = Vec::with_capacity(length);
        let mut carry = 0;
        for i in 0..length {
            let sum = carry + self.bit(i) + other.bit(i);
            bits.push(sum % 2);
            carry = sum / 2;
        }
        BitSeq { bits }.normalized()
    }

    /// Binary long multiplication.  Both operands are sign-extended
    /// to `L = 2 * max(size)` digits, a bound generous enough that
    /// the shift-and-add accumulation cannot overflow it; the
    /// overflow region is then discarded by truncating the
    /// accumulator back to its low `L` digits.
    pub(crate) fn mul(&self, other: &BitSeq) -> BitSeq {
        let length = self.len().max(other.len()) * 2;
        let multiplier = self.sign_extended(length);
        let mut addend = other.sign_extended(length);
        let mut acc = BitSeq::zero();
        for i in 0..length {
            if multiplier.bits[i] == 1 {
                acc = acc.add(&addend);
            }
            addend = addend.shifted_one_place();
        }
        acc.truncated_low(length)
    }
}

//! This module implements an arbitrary-precision signed integer type
//! represented in two's complement, plus the decimal codec and the
//! bit-level arithmetic it is built from.

pub(crate) mod bits;
pub(crate) mod decimal;
pub mod error;
pub mod signed;

/// The sign of a number.  In two's complement every value carries a
/// sign bit, but we treat zero specially in order to simplify working
/// with native types and big integers together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Negative = -1, // <= -1
    Zero = 0,      // the single encoding [0]
    Positive = 1,  // >= +1
}

//! The `base` crate implements the arbitrary-precision signed
//! integer engine: a two's-complement bit-sequence representation, a
//! decimal codec built on digit-string arithmetic, and the negate,
//! add, subtract, multiply and factorial operations.  The idea is
//! that a calculator front-end (or anything else wanting exact
//! integer arithmetic) depends on the base crate without needing to
//! know anything about the representation.

mod twoscomplement;

pub mod prelude;

pub use crate::twoscomplement::error::FormatError;
pub use crate::twoscomplement::signed::BigInt;
pub use crate::twoscomplement::Sign;

#[test]
fn test_native_and_text_construction_agree() {
    let m: BigInt = BigInt::from(40_u32);
    let n: BigInt = "40".parse().expect("test data should be valid");
    assert_eq!(m, n);

    let p: BigInt = BigInt::from(-40_i32);
    let q: BigInt = "- 40".parse().expect("test data should be valid");
    assert_eq!(p, q);
}

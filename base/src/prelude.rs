//! The prelude exports the handful of types a consumer of the engine
//! needs.  Providing this prelude is the main purpose of the base
//! crate.
pub use super::twoscomplement::error::FormatError;
pub use super::twoscomplement::signed::BigInt;
pub use super::twoscomplement::Sign;

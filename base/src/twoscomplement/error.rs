//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// Represents a failure to parse a piece of text as an optionally
/// signed decimal numeral.  Each variant identifies which validation
/// step rejected the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The input contained no numeral at all (blank, or a sign with
    /// no digits after it).
    Empty,
    /// The input split into more than a sign token and a digit token.
    TooManyTokens,
    /// The input split into two tokens but the first was not exactly
    /// "+" or "-".
    MalformedSign,
    /// The numeral contained a character which is not an ASCII
    /// decimal digit.
    InvalidCharacter,
}

impl Error for FormatError {}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            FormatError::Empty => f.write_str("the input contains no numeral"),
            FormatError::TooManyTokens => f.write_str("the input contains too many tokens"),
            FormatError::MalformedSign => {
                f.write_str("the token before the numeral is not '+' or '-'")
            }
            FormatError::InvalidCharacter => {
                f.write_str("the numeral contains a character which is not a decimal digit")
            }
        }
    }
}

//! Tokenizer and evaluator for calculator command lines.
//!
//! A command line contains at most three terms.  A term is either an
//! optionally signed decimal numeral or a lone operation character
//! (`+`, `-`, `*` or postfix `!`).  Because `+` and `-` double as
//! sign characters, the tokenizer keeps terms as plain strings and
//! leaves it to the evaluator to decide from position whether a lone
//! sign is an operation: in "1 + 2" the middle term is an addition,
//! while in "1 +2" the sign sticks to the numeral and the two terms
//! are added implicitly.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use base::prelude::*;

const SIGNS: &str = "+-";
const OPERATIONS: &str = "+-*!";

/// Represents a command line the calculator cannot execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The line contains a character which is neither a digit, an
    /// operation nor whitespace.
    InvalidCharacter(char),
    /// The line split into more than three terms.
    TooManyTerms(usize),
    /// An operation appeared where a numeral was required (or vice
    /// versa).
    MisplacedOperation,
    /// A binary operation was given only one operand.
    MissingTerm,
    /// The factorial operation was followed by a spare term.
    TrailingTerm,
    /// A term could not be parsed as a big integer.
    BadNumber(FormatError),
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CommandError::BadNumber(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            CommandError::InvalidCharacter(c) => {
                write!(f, "command contains an invalid character: {c:?}")
            }
            CommandError::TooManyTerms(n) => {
                write!(f, "there are too many terms in the command: {n}")
            }
            CommandError::MisplacedOperation => {
                f.write_str("invalid order of command: expected a term, not an operation")
            }
            CommandError::MissingTerm => {
                f.write_str("invalid number of terms: this operation takes another term")
            }
            CommandError::TrailingTerm => {
                f.write_str("invalid number of terms: factorial takes a single term before '!'")
            }
            CommandError::BadNumber(e) => {
                write!(f, "cannot initialize a big integer from the given term: {e}")
            }
        }
    }
}

fn is_operation(term: &str) -> bool {
    term.len() == 1 && term.chars().all(|c| OPERATIONS.contains(c))
}

/// Split a command line into terms.  Digits accumulate into the
/// current term; a sign character opens a new term; any other
/// operation character stands alone; whitespace only separates.
pub fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut terms: Vec<String> = Vec::new();
    let mut term = String::new();
    for c in line.chars() {
        if c.is_ascii_digit() {
            term.push(c);
            continue;
        }
        // Any non-digit ends the term in progress; the character is
        // then considered afresh as the start of something new.
        if !term.is_empty() {
            terms.push(std::mem::take(&mut term));
        }
        if SIGNS.contains(c) {
            term.push(c);
        } else if OPERATIONS.contains(c) {
            terms.push(c.to_string());
        } else if !c.is_whitespace() {
            return Err(CommandError::InvalidCharacter(c));
        }
    }
    if !term.is_empty() {
        terms.push(term);
    }
    if terms.len() > 3 {
        return Err(CommandError::TooManyTerms(terms.len()));
    }
    Ok(terms)
}

fn parse_term(term: &str) -> Result<BigInt, CommandError> {
    term.parse().map_err(CommandError::BadNumber)
}

/// Execute a tokenized command.  One term evaluates to itself, two
/// bare terms are added, and `a OP b` / `a !` apply the operation.
pub fn evaluate(terms: &[String]) -> Result<BigInt, CommandError> {
    let first = match terms.first() {
        None => {
            return Err(CommandError::MissingTerm);
        }
        Some(t) if is_operation(t) => {
            return Err(CommandError::MisplacedOperation);
        }
        Some(t) => t,
    };
    let lhs = parse_term(first)?;
    match terms {
        [_] => Ok(lhs),
        [_, op] if op == "!" => Ok(lhs.factorial()),
        [_, op] if is_operation(op) => Err(CommandError::MissingTerm),
        [_, rhs_term] => {
            // Two terms with no operation between them are added.
            let rhs = parse_term(rhs_term)?;
            Ok(&lhs + &rhs)
        }
        [_, op, rhs_term] => match op.as_str() {
            "!" => Err(CommandError::TrailingTerm),
            "+" => Ok(&lhs + &parse_term(rhs_term)?),
            "-" => Ok(&lhs - &parse_term(rhs_term)?),
            "*" => Ok(&lhs * &parse_term(rhs_term)?),
            _ => Err(CommandError::MisplacedOperation),
        },
        _ => Err(CommandError::TooManyTerms(terms.len())),
    }
}

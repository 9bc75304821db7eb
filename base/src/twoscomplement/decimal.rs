//! Digit-string arithmetic for the decimal codec.  The engine never
//! assumes a native integer type wide enough for its values, so the
//! conversions between decimal text and the binary representation are
//! done with schoolbook arithmetic directly on strings of ASCII
//! digits.
//!
//! All functions here require their inputs to consist solely of ASCII
//! decimal digits; the parser validates this before calling in.

/// Divide a digit string by two, collapsing any leading zeros of the
/// quotient to a single "0".
pub(crate) fn halve(digits: &str) -> String {
    let mut quotient = String::with_capacity(digits.len());
    let mut carry = 0;
    for b in digits.bytes() {
        let d = b - b'0';
        quotient.push(char::from((d + 10 * carry) / 2 + b'0'));
        carry = d % 2;
    }
    let trimmed = quotient.trim_start_matches('0');
    if trimmed.is_empty() {
        String::from("0")
    } else {
        String::from(trimmed)
    }
}

/// The remainder of a digit string divided by two.
pub(crate) fn low_bit(digits: &str) -> u8 {
    let last = digits.as_bytes()[digits.len() - 1];
    (last - b'0') % 2
}

/// Schoolbook addition of two digit strings, right-aligned, with
/// carry.  The result carries no superfluous leading zero.
pub(crate) fn add(a: &str, b: &str) -> String {
    let x = a.as_bytes();
    let y = b.as_bytes();
    let mut digits = Vec::with_capacity(x.len().max(y.len()) + 1);
    let mut carry = 0;
    let mut i = 0;
    while i < x.len() || i < y.len() || carry != 0 {
        let dx = if i < x.len() { x[x.len() - 1 - i] - b'0' } else { 0 };
        let dy = if i < y.len() { y[y.len() - 1 - i] - b'0' } else { 0 };
        let sum = dx + dy + carry;
        digits.push(sum % 10 + b'0');
        carry = sum / 10;
        i += 1;
    }
    if digits.is_empty() {
        digits.push(b'0');
    }
    digits.reverse();
    String::from_utf8(digits).expect("sums of ASCII digits are ASCII digits")
}

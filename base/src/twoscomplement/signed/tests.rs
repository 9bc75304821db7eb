use std::cmp::Ordering;

use super::super::error::FormatError;
use super::super::Sign;
use super::BigInt;

fn parsed(s: &str) -> BigInt {
    s.parse().expect("test data should be a valid numeral")
}

#[test]
fn test_parse_plain_numerals() {
    assert_eq!(parsed("0").to_string(), "0");
    assert_eq!(parsed("123").to_string(), "123");
    assert_eq!(parsed("+123").to_string(), "123");
    assert_eq!(parsed("-123").to_string(), "-123");
    assert_eq!(parsed("  42  ").to_string(), "42");
}

#[test]
fn test_parse_detached_sign_token() {
    assert_eq!(parsed("+ 3").to_string(), "3");
    assert_eq!(parsed("- 3").to_string(), "-3");
    assert_eq!(parsed(" -   987654321987654321 ").to_string(), "-987654321987654321");
}

#[test]
fn test_parse_leading_zeros() {
    assert_eq!(parsed("007").to_string(), "7");
    assert_eq!(parsed("000").to_string(), "0");
    assert_eq!(parsed("-007").to_string(), "-7");
}

#[test]
fn test_minus_zero_normalizes_to_zero() {
    assert_eq!(parsed("-0"), BigInt::zero());
    assert_eq!(parsed("-0").to_string(), "0");
}

#[test]
fn test_parse_rejects_blank_input() {
    assert_eq!("".parse::<BigInt>(), Err(FormatError::Empty));
    assert_eq!("   ".parse::<BigInt>(), Err(FormatError::Empty));
    // A sign with nothing after it denotes no integer.
    assert_eq!("+".parse::<BigInt>(), Err(FormatError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(FormatError::Empty));
}

#[test]
fn test_parse_rejects_too_many_tokens() {
    assert_eq!("1 2 3".parse::<BigInt>(), Err(FormatError::TooManyTokens));
    assert_eq!("+ 1 2".parse::<BigInt>(), Err(FormatError::TooManyTokens));
}

#[test]
fn test_parse_rejects_malformed_sign() {
    // Two tokens are only acceptable when the first is the sign.
    assert_eq!("1 2".parse::<BigInt>(), Err(FormatError::MalformedSign));
    assert_eq!("++ 2".parse::<BigInt>(), Err(FormatError::MalformedSign));
    assert_eq!("x 2".parse::<BigInt>(), Err(FormatError::MalformedSign));
}

#[test]
fn test_parse_rejects_invalid_characters() {
    assert_eq!("12a".parse::<BigInt>(), Err(FormatError::InvalidCharacter));
    assert_eq!("--5".parse::<BigInt>(), Err(FormatError::InvalidCharacter));
    assert_eq!("1.5".parse::<BigInt>(), Err(FormatError::InvalidCharacter));
    assert_eq!("- 1x2".parse::<BigInt>(), Err(FormatError::InvalidCharacter));
    // Non-ASCII digits are rejected too.
    assert_eq!("١٢٣".parse::<BigInt>(), Err(FormatError::InvalidCharacter));
}

#[test]
fn test_twos_complement_rendering_is_minimal() {
    assert_eq!(format!("{:b}", parsed("0")), "0");
    assert_eq!(format!("{:b}", parsed("-1")), "1");
    assert_eq!(format!("{:b}", parsed("1")), "01");
    assert_eq!(format!("{:b}", parsed("2")), "010");
    assert_eq!(format!("{:b}", parsed("-2")), "10");
    assert_eq!(format!("{:b}", parsed("7")), "0111");
    assert_eq!(format!("{:b}", parsed("-8")), "1000");
    assert_eq!(format!("{:b}", parsed("8")), "01000");
}

#[test]
fn test_bit_count() {
    assert_eq!(parsed("0").bit_count(), 1);
    assert_eq!(parsed("-1").bit_count(), 1);
    assert_eq!(parsed("1").bit_count(), 2);
    assert_eq!(parsed("-8").bit_count(), 4);
    assert_eq!(parsed("8").bit_count(), 5);
}

#[test]
fn test_add() {
    assert_eq!((parsed("999") + parsed("1")).to_string(), "1000");
    assert_eq!((parsed("2") + parsed("2")).to_string(), "4");
    assert_eq!((parsed("-2") + parsed("5")).to_string(), "3");
    assert_eq!((parsed("-2") + parsed("-5")).to_string(), "-7");
    assert_eq!(
        (parsed("99999999999999999999") + parsed("1")).to_string(),
        "100000000000000000000"
    );
}

#[test]
fn test_subtract() {
    assert_eq!((parsed("0") - parsed("5")).to_string(), "-5");
    assert_eq!((parsed("5") - parsed("5")).to_string(), "0");
    assert_eq!((parsed("1000") - parsed("1")).to_string(), "999");
    assert_eq!((parsed("-3") - parsed("-10")).to_string(), "7");
}

#[test]
fn test_multiply() {
    assert_eq!((parsed("-12") * parsed("12")).to_string(), "-144");
    assert_eq!((parsed("12") * parsed("-12")).to_string(), "-144");
    assert_eq!((parsed("-12") * parsed("-12")).to_string(), "144");
    assert_eq!((parsed("0") * parsed("7712")).to_string(), "0");
    assert_eq!(
        (parsed("10000000000000") * parsed("900000000000")).to_string(),
        "9000000000000000000000000"
    );
}

#[test]
fn test_negate() {
    assert_eq!((-parsed("5")).to_string(), "-5");
    assert_eq!((-parsed("-5")).to_string(), "5");
    assert_eq!(-parsed("0"), BigInt::zero());
    assert_eq!(-(-parsed("12345678901234567890")), parsed("12345678901234567890"));
}

#[test]
fn test_assign_operators() {
    let mut v = parsed("10");
    v += &parsed("5");
    assert_eq!(v.to_string(), "15");
    v -= &parsed("20");
    assert_eq!(v.to_string(), "-5");
    v *= &parsed("-6");
    assert_eq!(v.to_string(), "30");
}

#[test]
fn test_factorial_convention_for_zero_and_negatives() {
    assert_eq!(parsed("0").factorial().to_string(), "1");
    assert_eq!(parsed("-7").factorial().to_string(), "1");
    assert_eq!(parsed("-99999999999").factorial().to_string(), "1");
}

#[test]
fn test_factorial() {
    assert_eq!(parsed("1").factorial().to_string(), "1");
    assert_eq!(parsed("5").factorial().to_string(), "120");
    assert_eq!(parsed("10").factorial().to_string(), "3628800");
    assert_eq!(parsed("20").factorial().to_string(), "2432902008176640000");
}

#[test]
fn test_ordering() {
    let minus_two = parsed("-2");
    let zero = parsed("0");
    let one = parsed("1");
    assert!(minus_two < zero);
    assert!(zero < one);
    assert!(minus_two < one);
    assert!(one > minus_two);
    assert!(zero <= zero);
    assert_eq!(zero.cmp(&zero), Ordering::Equal);
    assert_eq!(parsed("100").cmp(&parsed("99")), Ordering::Greater);
    assert_eq!(parsed("-100").cmp(&parsed("-99")), Ordering::Less);
}

#[test]
fn test_equality_is_value_equality() {
    assert_eq!(parsed("123"), parsed("+ 123"));
    assert_eq!(parsed("0"), parsed("-0"));
    assert_ne!(parsed("123"), parsed("-123"));
    let another = parsed("123");
    assert_eq!(
        parsed("123"),
        another,
        "ensure we don't confuse identity with equality"
    );
}

#[test]
fn test_signum() {
    assert_eq!(parsed("0").signum(), Sign::Zero);
    assert_eq!(parsed("17").signum(), Sign::Positive);
    assert_eq!(parsed("-17").signum(), Sign::Negative);
    assert!(parsed("17").is_positive());
    assert!(!parsed("17").is_negative());
    assert!(parsed("-17").is_negative());
    assert!(parsed("0").is_zero());
    assert!(!parsed("0").is_positive());
}

#[test]
fn test_from_native_extremes() {
    assert_eq!(BigInt::from(i64::MAX).to_string(), i64::MAX.to_string());
    assert_eq!(BigInt::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigInt::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigInt::from(0_u8), BigInt::zero());
    assert_eq!(BigInt::from(-1_i8).to_string(), "-1");
}

#[cfg(test)]
mod codec_proptests {
    use super::super::BigInt;
    use test_strategy::proptest;

    #[proptest]
    fn decimal_round_trip(n: i64) {
        let v = BigInt::from(n);
        assert_eq!(v.to_string(), n.to_string());
        let reparsed: BigInt = v.to_string().parse().unwrap();
        assert_eq!(reparsed, v);
    }

    #[proptest]
    fn parse_agrees_with_native_conversion(n: i64) {
        let from_text: BigInt = n.to_string().parse().unwrap();
        assert_eq!(from_text, BigInt::from(n));
    }
}

#[cfg(test)]
mod addition_proptests {
    use super::super::BigInt;
    use test_strategy::proptest;

    #[proptest]
    fn addition_matches_native(a: i32, b: i32) {
        let sum = BigInt::from(a) + BigInt::from(b);
        assert_eq!(sum, BigInt::from(a as i64 + b as i64));
    }

    #[proptest]
    fn addition_commutes(a: i32, b: i32) {
        let x = BigInt::from(a);
        let y = BigInt::from(b);
        assert_eq!(&x + &y, &y + &x);
    }

    #[proptest]
    fn addition_associates(a: i32, b: i32, c: i32) {
        let x = BigInt::from(a);
        let y = BigInt::from(b);
        let z = BigInt::from(c);
        assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
    }

    #[proptest]
    fn zero_is_the_additive_identity(a: i64) {
        let v = BigInt::from(a);
        assert_eq!(&v + &BigInt::zero(), v);
    }

    #[proptest]
    fn negation_is_the_additive_inverse(a: i64) {
        let v = BigInt::from(a);
        assert_eq!(&v + &(-&v), BigInt::zero());
    }
}

#[cfg(test)]
mod multiplication_proptests {
    use super::super::BigInt;
    use test_strategy::proptest;

    #[proptest]
    fn multiplication_matches_native(a: i32, b: i32) {
        let product = BigInt::from(a) * BigInt::from(b);
        assert_eq!(product, BigInt::from(a as i64 * b as i64));
    }

    #[proptest]
    fn one_is_the_multiplicative_identity(a: i64) {
        let v = BigInt::from(a);
        assert_eq!(&v * &BigInt::one(), v);
    }

    #[proptest]
    fn zero_annihilates(a: i64) {
        let v = BigInt::from(a);
        assert_eq!(&v * &BigInt::zero(), BigInt::zero());
    }
}

#[cfg(test)]
mod comparison_proptests {
    use std::cmp::Ordering;

    use super::super::BigInt;
    use test_strategy::proptest;

    #[proptest]
    fn subtraction_is_addition_of_the_negation(a: i32, b: i32) {
        let x = BigInt::from(a);
        let y = BigInt::from(b);
        assert_eq!(&x - &y, &x + &(-&y));
    }

    #[proptest]
    fn comparison_agrees_with_subtraction_sign(a: i64, b: i64) {
        let x = BigInt::from(a);
        let y = BigInt::from(b);
        let difference = &x - &y;
        let expected = if difference.is_zero() {
            Ordering::Equal
        } else if difference.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        assert_eq!(x.cmp(&y), expected);
        assert_eq!(x.cmp(&y), a.cmp(&b));
    }
}

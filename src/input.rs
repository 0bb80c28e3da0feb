//! Input utility functions

use crate::error::{Error, Result};
use std::str::FromStr;

/// Result of scanning a decimal integer off the front of a string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scanned<'a> {
    /// The value read, or zero if no digits were found.
    pub value: i64,

    /// Whether at least one digit was consumed.
    pub matched: bool,

    /// Everything after the last digit consumed.
    pub rest: &'a str,
}

/// Scan a decimal integer prefix from user input.
///
/// Leading ASCII whitespace is skipped, then an optional `+` or `-`, then as
/// many decimal digits as are present. Whatever follows the digits is handed
/// back in `rest` and otherwise ignored, so `309abc` reads as `309`. Input
/// with no digits at all reads as zero. Digit runs too large for an `i64`
/// saturate at `i64::MIN` or `i64::MAX`.
pub fn scan_value(text: &str) -> Scanned<'_> {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Scanned {
            value: 0,
            matched: false,
            rest: text,
        };
    }

    let mut value: i64 = 0;
    for digit in unsigned[..digit_count].bytes() {
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    Scanned {
        value,
        matched: true,
        rest: &unsigned[digit_count..],
    }
}

/// Parse user input as a complete decimal 64-bit integer.
pub fn parse_value_strict(text: &str) -> Result<i64> {
    i64::from_str(text).map_err(|_| Error::UnparsableValue(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_value_strict, scan_value};
    use crate::error::Error;

    #[test]
    fn scan_plain() {
        let s = scan_value("309");
        assert_eq!(s.value, 309);
        assert!(s.matched);
        assert_eq!(s.rest, "");
    }

    #[test]
    fn scan_accepts_prefix() {
        let s = scan_value("309abc");
        assert_eq!(s.value, 309);
        assert_eq!(s.rest, "abc");

        assert_eq!(scan_value("12x").value, 12);
        assert_eq!(scan_value("7.5").value, 7);
    }

    #[test]
    fn scan_signs_and_whitespace() {
        assert_eq!(scan_value("-42").value, -42);
        assert_eq!(scan_value("+42").value, 42);
        assert_eq!(scan_value("  \t17").value, 17);
    }

    #[test]
    fn scan_without_digits_is_zero() {
        for text in &["", "abc", "-", "+", "- 5", "x12"] {
            let s = scan_value(text);
            assert_eq!(s.value, 0, "input {:?}", text);
            assert!(!s.matched, "input {:?}", text);
        }
    }

    #[test]
    fn scan_extremes() {
        assert_eq!(scan_value("9223372036854775807").value, i64::MAX);
        assert_eq!(scan_value("-9223372036854775808").value, i64::MIN);
        assert_eq!(scan_value("99999999999999999999").value, i64::MAX);
        assert_eq!(scan_value("-99999999999999999999").value, i64::MIN);
    }

    #[test]
    fn strict_rejects_trailing_garbage() {
        assert_eq!(parse_value_strict("-309").unwrap(), -309);

        match parse_value_strict("309abc") {
            Err(Error::UnparsableValue(text)) => assert_eq!(text, "309abc"),
            other => panic!("expected UnparsableValue, got {:?}", other),
        }
        assert!(parse_value_strict("").is_err());
    }
}

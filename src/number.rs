//! Numeric conversion of free-form field text.
//!
//! The form accepts whatever a browser number conversion accepts: decimal
//! literals with an optional sign, fraction and exponent, `Infinity`, and
//! unsigned `0x`/`0o`/`0b` integer literals. Everything else is "not a
//! number". Rust's own `f64::from_str` is more permissive (`nan`, `inf`) and
//! stricter in places (`5.` and `.5` are fine, but `0x1f` is not), so the
//! grammar is checked here before delegating.
//!
//! # Example
//!
//! ```
//! use sampling_task::number::{is_valid_number, parse_number};
//!
//! assert_eq!(parse_number("-3.5"), Some(-3.5));
//! assert_eq!(parse_number("0x10"), Some(16.0));
//! assert!(is_valid_number("0"));
//! assert!(!is_valid_number(""));
//! assert!(!is_valid_number("NaN"));
//! ```

/// Convert text to a number, ignoring surrounding whitespace.
///
/// Returns `None` where a browser would produce `NaN`. Blank text converts
/// to `0.0`; use [`is_valid_number`] to reject it.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(text) {
        return Some(value);
    }

    let (sign, unsigned) = split_sign(text);
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }
    unsigned.parse::<f64>().ok().map(|v| sign * v)
}

/// Returns `true` iff `text` is non-empty after trimming and converts to a
/// number.
///
/// `"0"` is valid; `""` is not.
#[must_use]
pub fn is_valid_number(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && parse_number(text).is_some()
}

fn split_sign(text: &str) -> (f64, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, text)
    }
}

/// `0x1F`, `0o17`, `0b101`; no sign, no fraction.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Fold into f64 so literals wider than u128 still convert.
    Some(digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + c.to_digit(radix).map_or(0.0, f64::from)
    }))
}

/// `digits [. digits?] [exp]` or `. digits [exp]`, where
/// `exp = (e|E) [+|-] digits`.
fn is_decimal_literal(text: &str) -> bool {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let (_, digits) = split_sign(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

//! # Shared Utility Functions
//!
//! Lenient number parsing for values typed into HTML-style forms.
//!
//! ## Parsing Rules
//!
//! Form fields carry free text. The backend wants numbers, and it is more
//! useful to accept `"9.99 CNY"` as `9.99` than to reject the whole product.
//! Both parsers therefore read the longest numeric prefix after leading
//! whitespace and ignore whatever follows:
//!
//! - [`parse_float_prefix`] - optional sign, digits, optional fraction, optional exponent
//! - [`parse_int_prefix`] - optional sign and decimal digits
//!
//! Input with no numeric prefix yields `None`, which serializes as JSON `null`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{parse_float_prefix, parse_int_prefix};
//!
//! assert_eq!(parse_float_prefix("9.99 CNY"), Some(9.99));
//! assert_eq!(parse_int_prefix("3 boxes"), Some(3));
//! assert_eq!(parse_int_prefix("none"), None);
//! ```

/// Parse the leading floating point number of `input`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::parse_float_prefix;
///
/// assert_eq!(parse_float_prefix("  12.5"), Some(12.5));
/// assert_eq!(parse_float_prefix(".5"), Some(0.5));
/// assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
/// assert_eq!(parse_float_prefix("abc"), None);
/// ```
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        // A lone "." with no digits on either side is not a number
        if digits > 0 || frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse the leading base-10 integer of `input`.
///
/// Fractions are truncated at the decimal point: `"3.7"` parses as `3`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("42"), Some(42));
/// assert_eq!(parse_int_prefix("-7 units"), Some(-7));
/// assert_eq!(parse_int_prefix("3.7"), Some(3));
/// assert_eq!(parse_int_prefix(""), None);
/// ```
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let end = skip_digits(bytes, sign_len);
    if end == sign_len {
        return None;
    }

    s[..end].parse::<i64>().ok()
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

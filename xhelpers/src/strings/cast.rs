//! Lenient conversions between numbers and text.
//!
//! The parsers read the longest numeric prefix after leading whitespace
//! and fall back to zero when there is none, so `"42 apples"` is `42` and
//! `"apples"` is `0`. Out-of-range values saturate.

/// Splits an optional sign off `text` after leading whitespace.
fn signed(text: &str) -> (bool, &str) {
    let text = text.trim_start();
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn digit_prefix(text: &str, radix: u32) -> i64 {
    text.chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(digit))
        })
}

fn decimal(text: &str) -> i64 {
    let (negative, digits) = signed(text);
    let value = digit_prefix(digits, 10);
    if negative {
        -value
    } else {
        value
    }
}

fn digit_count(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Parses a decimal integer, or a hexadecimal one written `0x...`.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::int_cast;
///
/// assert_eq!(int_cast("  -17 items"), -17);
/// assert_eq!(int_cast("0x1f"), 31);
/// assert_eq!(int_cast("none"), 0);
/// ```
#[must_use]
pub fn int_cast(text: &str) -> i32 {
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => digit_prefix(hex, 16),
        None => decimal(text),
    };
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Parses a decimal unsigned integer. Negative input gives zero.
#[must_use]
pub fn uint_cast(text: &str) -> u32 {
    let value = decimal(text);
    u32::try_from(value).unwrap_or(if value < 0 { 0 } else { u32::MAX })
}

/// Parses a decimal floating-point number with an optional exponent.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::double_cast;
///
/// assert_eq!(double_cast("2.5e3ms"), 2500.0);
/// assert_eq!(double_cast("-.25"), -0.25);
/// assert_eq!(double_cast("e5"), 0.0);
/// ```
#[must_use]
pub fn double_cast(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digit_count(bytes, end);
    end += int_digits;
    let frac_digits = if bytes.get(end) == Some(&b'.') {
        digit_count(bytes, end + 1)
    } else {
        0
    };
    if int_digits + frac_digits == 0 {
        return 0.0;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1 + frac_digits;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digit_count(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    text[..end].parse().unwrap_or(0.0)
}

/// Renders `num` in `radix` (2 to 36) with lowercase digits and a leading
/// `-` for negative values. Returns `None` for any other radix.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::string_cast;
///
/// assert_eq!(string_cast(255, 16).as_deref(), Some("ff"));
/// assert_eq!(string_cast(-8, 8).as_deref(), Some("-10"));
/// assert_eq!(string_cast(35, 36).as_deref(), Some("z"));
/// assert_eq!(string_cast(1, 1), None);
/// ```
#[must_use]
pub fn string_cast(num: i64, radix: u32) -> Option<String> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    let base = u64::from(radix);
    let mut magnitude = num.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        let digit = u32::try_from(magnitude % base).ok()?;
        digits.push(char::from_digit(digit, radix)?);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if num < 0 {
        digits.push('-');
    }
    Some(digits.iter().rev().collect())
}

/// Shortest text that parses back to `num`, without a trailing `.0`.
#[must_use]
pub fn float_string_cast(num: f64) -> String {
    num.to_string()
}

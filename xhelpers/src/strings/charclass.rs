//! Character classes and case conversion over the fixed Latin/Cyrillic tables.
//!
//! Only the characters listed in the tables below are recognized as letters
//! or converted between cases. Anything else passes through untouched.

/// Upper-case Latin letters.
pub const UPPER_LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lower-case Latin letters, index-aligned with [`UPPER_LATIN`].
pub const LOWER_LATIN: &str = "abcdefghijklmnopqrstuvwxyz";
/// Upper-case Cyrillic letters.
pub const UPPER_CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
/// Lower-case Cyrillic letters, index-aligned with [`UPPER_CYRILLIC`].
pub const LOWER_CYRILLIC: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// Cyrillic consonants in both cases.
pub const CYRILLIC_CONSONANTS: &str = "бвгджзклмнпрстфхцчшщБВГДЖЗКЛМНПРСТФХЦЧШЩ";
/// Latin consonants in both cases.
pub const LATIN_CONSONANTS: &str = "bcdfghjklmnpqrstvwxzBCDFGHJKLMNPQRSTVWXZ";
/// Word separators.
pub const SEPARATORS: &str = " .,;:-'\"";

/// Returns `true` if `c` is one of `0`-`9`.
#[must_use]
pub fn is_digit(c: char) -> bool {
    DIGITS.contains(c)
}

/// Returns `true` if `c` is a word separator (space, punctuation, quotes).
#[must_use]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(c)
}

/// Returns `true` if `c` is a Latin or Cyrillic letter in either case.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::is_letter;
///
/// assert!(is_letter('q'));
/// assert!(is_letter('Ж'));
/// assert!(!is_letter('7'));
/// ```
#[must_use]
pub fn is_letter(c: char) -> bool {
    UPPER_LATIN.contains(c)
        || LOWER_LATIN.contains(c)
        || UPPER_CYRILLIC.contains(c)
        || LOWER_CYRILLIC.contains(c)
}

/// Returns `true` if `c` is a Latin or Cyrillic consonant.
#[must_use]
pub fn is_consonant(c: char) -> bool {
    CYRILLIC_CONSONANTS.contains(c) || LATIN_CONSONANTS.contains(c)
}

fn translate(c: char, from: &str, to: &str) -> Option<char> {
    from.chars()
        .position(|f| f == c)
        .and_then(|idx| to.chars().nth(idx))
}

/// Converts a single character to upper case using the fixed tables.
#[must_use]
pub fn to_upper_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    translate(c, LOWER_CYRILLIC, UPPER_CYRILLIC).unwrap_or(c)
}

/// Converts a single character to lower case using the fixed tables.
#[must_use]
pub fn to_lower_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    translate(c, UPPER_CYRILLIC, LOWER_CYRILLIC).unwrap_or(c)
}

/// Upper-cases every Latin and Cyrillic letter of `s`.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::upper;
///
/// assert_eq!(upper("Path ёж 42"), "PATH ЁЖ 42");
/// ```
#[must_use]
pub fn upper(s: &str) -> String {
    s.chars().map(to_upper_char).collect()
}

/// Lower-cases every Latin and Cyrillic letter of `s`.
#[must_use]
pub fn lower(s: &str) -> String {
    s.chars().map(to_lower_char).collect()
}

/// Case-insensitive character comparison over the fixed tables.
#[must_use]
pub fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || to_upper_char(a) == to_upper_char(b)
}

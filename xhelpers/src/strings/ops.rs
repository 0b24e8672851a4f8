//! Split, join, trim-by-symbol-set and replacement helpers.
//!
//! "Symbol set" arguments are plain strings interpreted as a set of
//! characters, so `"\\/"` means "either kind of slash".

use std::ops::Range;

use super::charclass::{is_digit, is_letter};

/// Removes every character of `symbols` from the right end of `s`.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::erase_sym_right;
///
/// assert_eq!(erase_sym_right("a/b//\\", "\\/"), "a/b");
/// ```
#[must_use]
pub fn erase_sym_right<'a>(s: &'a str, symbols: &str) -> &'a str {
    s.trim_end_matches(|c| symbols.contains(c))
}

/// Removes every character of `symbols` from the left end of `s`.
#[must_use]
pub fn erase_sym_left<'a>(s: &'a str, symbols: &str) -> &'a str {
    s.trim_start_matches(|c| symbols.contains(c))
}

/// Removes every occurrence of any character of `symbols` from `s`.
#[must_use]
pub fn erase_sym(s: &str, symbols: &str) -> String {
    s.chars().filter(|&c| !symbols.contains(c)).collect()
}

fn change_char(c: char, from: &str, to: &str) -> char {
    from.chars()
        .position(|f| f == c)
        .and_then(|idx| to.chars().nth(idx))
        .unwrap_or(c)
}

/// Maps each character found in `from` to the character at the same index
/// in `to`.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::change_sym;
///
/// assert_eq!(change_sym("a\\b\\c", "\\", "/"), "a/b/c");
/// ```
#[must_use]
pub fn change_sym(s: &str, from: &str, to: &str) -> String {
    s.chars().map(|c| change_char(c, from, to)).collect()
}

/// Like [`change_sym`], but only for the trailing run of characters found
/// in `from`.
#[must_use]
pub fn change_sym_right(s: &str, from: &str, to: &str) -> String {
    let kept = erase_sym_right(s, from);
    let tail = &s[kept.len()..];
    let mut out = String::with_capacity(s.len());
    out.push_str(kept);
    out.extend(tail.chars().map(|c| change_char(c, from, to)));
    out
}

/// Returns `true` if any character of `symbols` occurs in `s`.
#[must_use]
pub fn symbol_exist(s: &str, symbols: &str) -> bool {
    s.chars().any(|c| symbols.contains(c))
}

/// Returns `true` if every character of `s` belongs to `symbols`.
///
/// An empty string consists of any set.
#[must_use]
pub fn consist_of(s: &str, symbols: &str) -> bool {
    s.chars().all(|c| symbols.contains(c))
}

/// Returns `true` if `s` starts with `prefix`.
#[must_use]
pub fn begins_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Returns `true` if `s` ends with `suffix`.
#[must_use]
pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

/// Splits `s` on runs of separator characters, recording the byte range of
/// every token.
///
/// A leading separator produces one empty first token; trailing separators
/// produce nothing.
#[must_use]
pub fn split_with_positions(s: &str, separators: &str) -> Vec<(String, Range<usize>)> {
    let is_sep = |c: char| separators.contains(c);
    let mut tokens = Vec::new();
    let mut begin = 0;

    while begin < s.len() {
        let rest = &s[begin..];
        let end = rest.find(is_sep).map_or(s.len(), |off| begin + off);
        tokens.push((s[begin..end].to_string(), begin..end));

        begin = end;
        if let Some(sep) = s[begin..].chars().next() {
            begin += sep.len_utf8();
            let skipped = s[begin..].len() - s[begin..].trim_start_matches(is_sep).len();
            begin += skipped;
        }
    }

    tokens
}

/// Splits `s` on runs of separator characters.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::split;
///
/// assert_eq!(split("a, b,,c", ", "), vec!["a", "b", "c"]);
/// assert_eq!(split("/usr/lib", "/"), vec!["", "usr", "lib"]);
/// ```
#[must_use]
pub fn split(s: &str, separators: &str) -> Vec<String> {
    split_with_positions(s, separators)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Joins `parts` with `separator` between neighbours.
#[must_use]
pub fn join<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            out.push_str(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}

/// Replaces the first occurrence of `from` with `to`.
#[must_use]
pub fn replace_first(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    s.replacen(from, to, 1)
}

/// Replaces every non-overlapping occurrence of `from` with `to`.
#[must_use]
pub fn replace_all(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    s.replace(from, to)
}

/// Replaces `from` with `to` only when `s` ends with it.
#[must_use]
pub fn replace_from_end(s: &str, from: &str, to: &str) -> String {
    match s.strip_suffix(from) {
        Some(head) if !from.is_empty() => format!("{head}{to}"),
        _ => s.to_string(),
    }
}

/// Collapses every run of delimiter characters into `replace_by`.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::replace_delimiters;
///
/// assert_eq!(replace_delimiters("rabbit", "bijk", "--"), "ra--t");
/// ```
#[must_use]
pub fn replace_delimiters(s: &str, delimiters: &str, replace_by: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if delimiters.contains(c) {
            if !in_run {
                out.push_str(replace_by);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Matches `s` against a same-length template where `#` stands for a digit,
/// `$` for a letter and `*` for any character; other template characters
/// must match literally.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::match_template;
///
/// assert!(match_template("AB-1234", "$$-####"));
/// assert!(!match_template("AB-12x4", "$$-####"));
/// ```
#[must_use]
pub fn match_template(s: &str, template: &str) -> bool {
    if s.chars().count() != template.chars().count() {
        return false;
    }
    s.chars().zip(template.chars()).all(|(c, t)| {
        c == t
            || match t {
                '#' => is_digit(c),
                '$' => is_letter(c),
                '*' => true,
                _ => false,
            }
    })
}

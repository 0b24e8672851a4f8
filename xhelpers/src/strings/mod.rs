//! Text helpers shared by the path and filesystem layers.
//!
//! Most of this is pure functions over `&str`. Character classes and case
//! conversion are limited to the fixed Latin and Cyrillic tables in
//! [`charclass`]; [`cast`] converts numbers and text, and [`delim`] reads
//! and writes delimited rows over byte streams.

pub mod cast;
pub mod charclass;
pub mod delim;
pub mod ops;

pub use cast::{double_cast, float_string_cast, int_cast, string_cast, uint_cast};
pub use charclass::{
    eq_ignore_case, is_consonant, is_digit, is_letter, is_separator, lower, to_lower_char,
    to_upper_char, upper,
};
pub use delim::{split_fields, DelimReader, DelimWriter, DEFAULT_DELIMITERS};
pub use ops::{
    begins_with, change_sym, change_sym_right, consist_of, ends_with, erase_sym, erase_sym_left,
    erase_sym_right, join, match_template, replace_all, replace_delimiters, replace_first,
    replace_from_end, split, split_with_positions, symbol_exist,
};

//! Digit glyph mapping between Latin and Persian numerals.

use crate::consts::{ARABIC_DIGITS, LATIN_DIGITS, PERSIAN_DIGITS};

/// Replaces Persian (and Arabic-Indic) digits with Latin ones.
/// Every other character is passed through in order.
pub fn to_latin_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            PERSIAN_DIGITS
                .iter()
                .chain(ARABIC_DIGITS.iter())
                .position(|&d| d == c)
                .map_or(c, |i| LATIN_DIGITS[i % 10])
        })
        .collect()
}

/// Replaces Latin digits with Persian ones.
/// Every other character is passed through in order.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| c.to_digit(10).map_or(c, |d| PERSIAN_DIGITS[d as usize]))
        .collect()
}

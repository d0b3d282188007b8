// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::num::IntErrorKind;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumberParseError {
    /// The text isn't a numeral in the requested base, or has something other
    /// than digits after the numeral.
    NotAnInteger,
    /// The numeral is well-formed but doesn't fit in an `i32`.
    OutOfRange,
}

impl Eq for NumberParseError {}

impl Display for NumberParseError {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), FmtError> {
        match self {
            NumberParseError::NotAnInteger => write!(fmt, "not an integer"),
            NumberParseError::OutOfRange => write!(fmt, "out of range"),
        }
    }
}

impl Error for NumberParseError {}

/// Parse the whole of `text` as an integer in base `radix`.
///
/// Unlike C-style parsers, which stop at the first character that isn't a
/// digit, the entire string has to be the numeral.  A leading `+` isn't part
/// of a numeral:
///
/// ```
/// use dice::util::{parse_int, NumberParseError};
///
/// assert_eq!(parse_int("42", 10), Ok(42));
/// assert_eq!(parse_int("42x", 10), Err(NumberParseError::NotAnInteger));
/// assert_eq!(parse_int("+42", 10), Err(NumberParseError::NotAnInteger));
/// assert_eq!(parse_int("ff", 16), Ok(255));
/// ```
pub fn parse_int(text: &str, radix: u32) -> Result<i32, NumberParseError> {
    if text.starts_with('+') {
        return Err(NumberParseError::NotAnInteger);
    }
    i32::from_str_radix(text, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumberParseError::OutOfRange,
        _ => NumberParseError::NotAnInteger,
    })
}

/// Split `text` on runs of whitespace.  Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// The number of base-10 digits in `x`, ignoring its sign.  Zero has no
/// digits.
pub fn digit_count(x: i64) -> usize {
    let mut x = x;
    let mut n = 0;
    while x != 0 {
        x /= 10;
        n += 1;
    }
    n
}

/// Prefix `text` with `fill` until it is at least `min_width` characters long.
pub fn pad_left(text: &str, fill: char, min_width: usize) -> String {
    let len = text.chars().count();
    if len >= min_width {
        return text.to_string();
    }
    let mut padded: String = std::iter::repeat(fill).take(min_width - len).collect();
    padded.push_str(text);
    padded
}

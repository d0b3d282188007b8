// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::str::FromStr;

use rand::Rng;

use crate::util::{parse_int, NumberParseError};

#[derive(Clone, Debug, PartialEq)]
pub enum DieParseError {
    /// A die was requested with zero or fewer sides.
    InvalidSides(i32),
    /// The requested number of sides wasn't an integer.
    NotAnInteger(String),
    /// The requested number of sides was too big to store.
    OutOfRange(String),
}

impl Eq for DieParseError {}

impl Display for DieParseError {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), FmtError> {
        match self {
            DieParseError::InvalidSides(n) => write!(fmt, "a die with {} sides cannot be created", n),
            DieParseError::NotAnInteger(s) => write!(fmt, "the string '{}' is not an integer", s),
            DieParseError::OutOfRange(s) => write!(fmt, "the number '{}' is too big to store", s),
        }
    }
}

impl Error for DieParseError {}

/// A single die with a fixed number of sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Die {
    sides: i32,
}

impl Die {
    /// Create an `n`-sided die.  A die needs at least one side.
    ///
    /// ```
    /// use dice::{Die, DieParseError};
    ///
    /// let d6 = Die::new(6).unwrap();
    /// assert_eq!(d6.sides(), 6);
    /// assert_eq!(Die::new(0), Err(DieParseError::InvalidSides(0)));
    /// ```
    pub fn new(sides: i32) -> Result<Self, DieParseError> {
        if sides <= 0 {
            return Err(DieParseError::InvalidSides(sides));
        }
        Ok(Die { sides })
    }

    /// The number of sides on the die, which is also its highest roll.
    pub fn sides(&self) -> i32 { self.sides }

    /// Roll the die, drawing a value between 1 and [Die::sides] inclusive
    /// from `rng`.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(1 ..= self.sides)
    }
}

impl Default for Die {
    /// A six-sided die.
    fn default() -> Self {
        Die { sides: 6 }
    }
}

impl Display for Die {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), FmtError> {
        write!(fmt, "d{}", self.sides)
    }
}

impl FromStr for Die {
    type Err = DieParseError;

    /// Dice are written as a bare number of sides (`6`, not `d6`).
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        let sides = parse_int(word, 10).map_err(|e| match e {
            NumberParseError::NotAnInteger => DieParseError::NotAnInteger(word.to_string()),
            NumberParseError::OutOfRange => DieParseError::OutOfRange(word.to_string()),
        })?;
        Die::new(sides)
    }
}

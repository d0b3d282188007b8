// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::fmt::{Display, Error as FmtError, Formatter};

use rand::Rng;

use crate::util::{digit_count, pad_left};
use crate::{Die, DieParseError};

/// An ordered collection of [Die]s.  The order is kept for display and for
/// summing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Self {
        DiceSet { dice }
    }

    /// Parse every word as a die.  Either all of them are valid dice, or
    /// every error is returned (in the order the words were given) and no
    /// set is built.
    ///
    /// ```
    /// use dice::{DiceSet, DieParseError};
    ///
    /// let set = DiceSet::parse_words(&["6", "20"]).unwrap();
    /// assert_eq!(set.to_string(), "d6 d20");
    ///
    /// let errs = DiceSet::parse_words(&["6", "0", "x"]).unwrap_err();
    /// assert_eq!(errs, vec![
    ///     DieParseError::InvalidSides(0),
    ///     DieParseError::NotAnInteger("x".to_string()),
    /// ]);
    /// ```
    pub fn parse_words<S: AsRef<str>>(words: &[S]) -> Result<Self, Vec<DieParseError>> {
        let mut dice = Vec::with_capacity(words.len());
        let mut errors = Vec::new();
        for word in words {
            match word.as_ref().parse::<Die>() {
                Ok(d) => dice.push(d),
                Err(e) => errors.push(e),
            }
        }
        if errors.is_empty() {
            Ok(DiceSet { dice })
        } else {
            Err(errors)
        }
    }

    pub fn dice(&self) -> &[Die] { &self.dice }

    pub fn len(&self) -> usize { self.dice.len() }

    pub fn is_empty(&self) -> bool { self.dice.is_empty() }

    /// The highest total these dice can roll.
    pub fn max_total(&self) -> i64 {
        max_total(&self.dice)
    }

    /// Roll every die once, in order.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Roll {
        let values = self.dice.iter().map(|d| d.roll(rng)).collect();
        Roll { dice: self.dice.clone(), values }
    }
}

impl Display for DiceSet {
    /// Dice are separated by single spaces.  An empty set prints nothing;
    /// callers choose their own placeholder.
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), FmtError> {
        write!(fmt, "{}", self.dice.iter().map(|d| d.to_string()).collect::<Vec<String>>().join(" "))
    }
}

/// The result of rolling a [DiceSet]: one value per die, in the same order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roll {
    dice: Vec<Die>,
    values: Vec<i32>,
}

impl Roll {
    /// Pair already-known values with `dice`.  Returns `None` unless there is
    /// exactly one value per die and each value is a possible roll of its die.
    pub fn from_values(dice: &DiceSet, values: Vec<i32>) -> Option<Self> {
        if dice.len() != values.len() {
            return None;
        }
        if dice.dice.iter().zip(&values).any(|(d, &v)| v < 1 || v > d.sides()) {
            return None;
        }
        Some(Roll { dice: dice.dice.clone(), values })
    }

    pub fn values(&self) -> &[i32] { &self.values }

    pub fn total(&self) -> i64 {
        self.values.iter().map(|&v| v as i64).sum()
    }

    /// Each value right-aligned to the width of its die's highest roll,
    /// joined with ` + `, then ` = ` and the total aligned to the width of the
    /// highest possible total.  A single die prints just its value and no
    /// dice print `0`.
    ///
    /// ```
    /// use dice::{DiceSet, Roll};
    ///
    /// let set = DiceSet::parse_words(&["6", "20"]).unwrap();
    /// let roll = Roll::from_values(&set, vec![3, 5]).unwrap();
    /// assert_eq!(roll.verbose(), "3 +  5 =  8");
    /// ```
    pub fn verbose(&self) -> String {
        match self.values.len() {
            0 => "0".to_string(),
            1 => Self::aligned(self.values[0] as i64, self.dice[0].sides() as i64),
            _ => {
                let addends = self.dice.iter().zip(&self.values)
                    .map(|(d, &v)| Self::aligned(v as i64, d.sides() as i64))
                    .collect::<Vec<String>>()
                    .join(" + ");
                format!("{} = {}", addends, Self::aligned(self.total(), max_total(&self.dice)))
            },
        }
    }

    /// The bare values separated by spaces, or `None` if there are no dice
    /// (so that nothing at all gets printed).
    pub fn quiet(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.iter().map(|v| v.to_string()).collect::<Vec<String>>().join(" "))
        }
    }

    fn aligned(value: i64, max: i64) -> String {
        pad_left(&value.to_string(), ' ', digit_count(max))
    }
}

impl Display for Roll {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), FmtError> {
        write!(fmt, "{}", self.verbose())
    }
}

fn max_total(dice: &[Die]) -> i64 {
    dice.iter().map(|d| d.sides() as i64).sum()
}

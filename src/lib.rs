// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! An interactive dice roller.
//!
//! The program starts with a set of dice chosen on the command line (or a
//! single d6), then either rolls them a fixed number of times or reads
//! commands from standard input.
//!
//! # Examples
//!
//! ## Dice
//!
//! A [Die] has one or more sides and is written `dN`:
//!
//! ```
//! use dice::Die;
//!
//! let d20 = Die::new(20).unwrap();
//! assert_eq!(d20.to_string(), "d20");
//! assert!(Die::new(0).is_err());
//! ```
//!
//! Sizes typed by a user can be parsed directly.  Only whole numbers are
//! accepted, and the whole word has to be the number:
//!
//! ```
//! use dice::{Die, DieParseError};
//!
//! assert_eq!("8".parse::<Die>(), Die::new(8));
//! assert_eq!("8x".parse::<Die>(), Err(DieParseError::NotAnInteger("8x".to_string())));
//! ```
//!
//! ## Rolling
//!
//! Rolls draw from a random source owned by the caller, so a run is seeded
//! exactly once:
//!
//! ```
//! use dice::DiceSet;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(99);
//! let set = DiceSet::parse_words(&["6", "6", "20"]).unwrap();
//! let roll = set.roll(&mut rng);
//! assert_eq!(roll.values().len(), 3);
//! println!("{}", roll); // something like ` 4 + 1 + 17 = 22`
//! ```
//!
//! ## Output
//!
//! Verbose rolls line the numbers up in columns, padding each value to the
//! width of the die's highest face and the total to the width of the highest
//! possible total.  Quiet rolls are just the numbers.
//!
//! ```
//! use dice::{DiceSet, Roll};
//!
//! let set = DiceSet::parse_words(&["6", "20"]).unwrap();
//! let roll = Roll::from_values(&set, vec![3, 15]).unwrap();
//! assert_eq!(roll.verbose(), "3 + 15 = 18");
//! assert_eq!(roll.quiet().unwrap(), "3 15");
//! ```
//!
//! # Commands
//!
//! In interactive mode each line is one [repl::Command]:
//!
//! - blank, `r` or `roll`: roll the dice
//! - `c n1 n2 ...` or `choose n1 n2 ...`: replace the dice, then roll once
//!   (if any size is bad, every problem is reported and nothing changes)
//! - `l` or `list`: show the dice
//! - `h`, `help` or `?`: show help
//! - `q`, `quit` or `exit`: stop

mod app;
mod die;
mod diceset;
pub mod messages;
pub mod options;
pub mod repl;
pub mod util;

pub use app::{run as run, EXIT_BAD_DIE, EXIT_BAD_OPTION, EXIT_SUCCESS};
pub use die::{Die as Die, DieParseError as DieParseError};
pub use diceset::{DiceSet as DiceSet, Roll as Roll};

// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::io::{BufRead, Result as IoResult, Write};

use rand::Rng;

use crate::messages;
use crate::options::{parse_options, Invocation};
use crate::repl::Session;
use crate::{DiceSet, Die};

/// Normal exit, including `--help`, `--version` and quitting.
pub const EXIT_SUCCESS: i32 = 0;
/// A command-line option was unknown or had a bad value.
pub const EXIT_BAD_OPTION: i32 = 1;
/// One of the starting dice couldn't be created.
pub const EXIT_BAD_DIE: i32 = 2;

/// Run the whole program and return its exit status.
///
/// `args` is the full command line, program name first.  Commands are read
/// from `input` (only if `--rolls` wasn't given), results are written to
/// `out`, and problems to `err`.  Every roll draws from `rng`.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let status = dice::run(&["dice", "--rolls=2", "1", "1"], &b""[..], &mut out, &mut err,
///     StdRng::seed_from_u64(0)).unwrap();
/// assert_eq!(status, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "1 + 1 = 2\n1 + 1 = 2\n");
/// ```
pub fn run<S, I, W, E, R>(args: &[S], input: I, out: &mut W, err: &mut E, rng: R) -> IoResult<i32>
where
    S: AsRef<str>,
    I: BufRead,
    W: Write,
    E: Write,
    R: Rng,
{
    let basename = args.first().map_or("dice", |a| a.as_ref());

    let (config, words) = match parse_options(args) {
        Ok(Invocation::Help) => {
            messages::write_usage(out, basename)?;
            return Ok(EXIT_SUCCESS);
        },
        Ok(Invocation::Version) => {
            messages::write_version(out)?;
            return Ok(EXIT_SUCCESS);
        },
        Ok(Invocation::Run { config, dice }) => (config, dice),
        Err(e) => {
            messages::write_option_error(err, &e, basename)?;
            return Ok(EXIT_BAD_OPTION);
        },
    };

    let dice = if words.is_empty() {
        let dice = DiceSet::new(vec![Die::default()]);
        if config.verbose {
            messages::write_default_dice(out, &dice)?;
        }
        dice
    } else {
        match DiceSet::parse_words(words.as_slice()) {
            Ok(dice) => dice,
            Err(errors) => {
                for e in &errors {
                    messages::write_die_error(err, e)?;
                }
                messages::write_help_hint(err, basename)?;
                return Ok(EXIT_BAD_DIE);
            },
        }
    };

    let mut session = Session::new(dice, config, rng);
    match config.num_rolls {
        Some(n) => {
            for _ in 0 .. n {
                session.roll_and_print(out)?;
            }
        },
        None => {
            session.roll_and_print(out)?;
            session.interact(input, out, err)?;
        },
    }
    Ok(EXIT_SUCCESS)
}

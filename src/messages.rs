// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Fixed text shown to the user.  Normal output goes to the `out` writer and
//! anything describing a problem goes to `err`.

use std::io::{Result as IoResult, Write};

use crate::options::OptionParseError;
use crate::{DiceSet, DieParseError};

pub const PROMPT: &str = ">>> ";

pub fn write_usage<W: Write>(out: &mut W, basename: &str) -> IoResult<()> {
    write!(out, "\
Usage:
  {0}: start with a d6
  {0} 3 4 5: start with a d3, a d4, and a d5
  {0} n1 n2 ...: start with a dn1, a dn2, ...

Options:
  [-? | --help]
  [-# | --version]
  [--rolls=N]: roll the dice N times, then quit
  [-q | --quiet]: suppress basic output to just the rolls
  [-v | --verbose]: make output more user-friendly (default)
", basename)
}

pub fn write_program_help<W: Write>(out: &mut W) -> IoResult<()> {
    write!(out, "\
Press ENTER with a blank input to roll the dice.
Enter 'c n1 n2 ...' to choose a new set of dice to roll,
  where n1, n2, ... are the number of sides on the dice.
Enter 'l' to list the chosen dice.
Enter 'h' to display this help message.
Enter 'q' to quit the program.
")
}

pub fn write_version<W: Write>(out: &mut W) -> IoResult<()> {
    writeln!(out, "dice v{}", env!("CARGO_PKG_VERSION"))
}

pub fn write_chosen_dice<W: Write>(out: &mut W, dice: &DiceSet) -> IoResult<()> {
    if dice.is_empty() {
        writeln!(out, "(no dice chosen)")
    } else {
        writeln!(out, "{}", dice)
    }
}

pub fn write_default_dice<W: Write>(out: &mut W, dice: &DiceSet) -> IoResult<()> {
    if dice.is_empty() {
        writeln!(out, "(default choice: no dice)")
    } else {
        writeln!(out, "(default choice: {})", dice)
    }
}

pub fn write_die_error<W: Write>(err: &mut W, e: &DieParseError) -> IoResult<()> {
    writeln!(err, "Error: {}!", e)
}

/// Describe a failed option, then point at `--help`.
pub fn write_option_error<W: Write>(err: &mut W, e: &OptionParseError, basename: &str) -> IoResult<()> {
    match e {
        OptionParseError::UnrecognizedOption(arg) => {
            writeln!(err, "The command-line option '{}' could not be recognised.", arg)?;
            writeln!(err, "(try '{} --help' if you're stuck)", basename)
        },
        OptionParseError::InvalidRollCount { arg, .. }
        | OptionParseError::NegativeRollCount { arg, .. } => {
            writeln!(err, "{}", e)?;
            writeln!(err)?;
            writeln!(err, "This error was caused by {}.", arg)?;
            writeln!(err, "Use \"{} --help\" for a description of the options.", basename)
        },
    }
}

pub fn write_help_hint<W: Write>(err: &mut W, basename: &str) -> IoResult<()> {
    writeln!(err, "Try \"{} --help\" for some example uses.", basename)
}

pub fn write_invalid_input<W: Write>(err: &mut W) -> IoResult<()> {
    writeln!(err, "Your input could not be recognised.")?;
    writeln!(err, "(enter 'h' for help)")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::NumberParseError;

    fn text<F: FnOnce(&mut Vec<u8>) -> IoResult<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn usage_names_every_option() {
        let usage = text(|w| write_usage(w, "dice"));
        for opt in &["--help", "-?", "--version", "-#", "--rolls=N", "--quiet", "-q", "--verbose", "-v"] {
            assert!(usage.contains(opt), "usage is missing {}", opt);
        }
        assert!(usage.contains("dice 3 4 5"));
    }

    #[test]
    fn program_help_names_every_command() {
        let help = text(|w| write_program_help(w));
        for cmd in &["'c n1 n2 ...'", "'l'", "'h'", "'q'", "ENTER"] {
            assert!(help.contains(cmd), "help is missing {}", cmd);
        }
    }

    #[test]
    fn version() {
        assert_eq!(text(|w| write_version(w)), format!("dice v{}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn placeholders() {
        let empty = DiceSet::default();
        assert_eq!(text(|w| write_chosen_dice(w, &empty)), "(no dice chosen)\n");
        assert_eq!(text(|w| write_default_dice(w, &empty)), "(default choice: no dice)\n");

        let d6 = DiceSet::parse_words(&["6"]).unwrap();
        assert_eq!(text(|w| write_chosen_dice(w, &d6)), "d6\n");
        assert_eq!(text(|w| write_default_dice(w, &d6)), "(default choice: d6)\n");
    }

    #[test]
    fn die_error() {
        let e = DieParseError::InvalidSides(0);
        assert_eq!(text(|w| write_die_error(w, &e)), "Error: a die with 0 sides cannot be created!\n");
    }

    #[test]
    fn unrecognized_option() {
        let e = OptionParseError::UnrecognizedOption("-x".to_string());
        assert_eq!(text(|w| write_option_error(w, &e, "dice")),
            "The command-line option '-x' could not be recognised.\n(try 'dice --help' if you're stuck)\n");
    }

    #[test]
    fn bad_roll_count() {
        let e = OptionParseError::InvalidRollCount {
            arg: "--rolls=x".to_string(),
            value: "x".to_string(),
            source: NumberParseError::NotAnInteger,
        };
        assert_eq!(text(|w| write_option_error(w, &e, "dice")), "\
'x' is not an integer.

This error was caused by --rolls=x.
Use \"dice --help\" for a description of the options.
");
    }
}

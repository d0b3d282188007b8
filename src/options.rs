// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::error::Error;
use std::ffi::OsString;
use std::fmt::{Display, Error as FmtError, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

use crate::util::{parse_int, NumberParseError};

lazy_static! {
    static ref ROLLS_RE: Regex = Regex::new(r"^--rolls=(?P<count>.*)$").expect("Couldn't compile ROLLS_RE");
}

#[derive(Clone, Debug, PartialEq)]
pub enum OptionParseError {
    /// Something starting with `-` that isn't an option.
    UnrecognizedOption(String),
    /// The value of `--rolls=` isn't a usable integer.
    InvalidRollCount { arg: String, value: String, source: NumberParseError },
    /// The value of `--rolls=` is below zero.
    NegativeRollCount { arg: String, count: i32 },
}

impl Eq for OptionParseError {}

impl Display for OptionParseError {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), FmtError> {
        match self {
            OptionParseError::UnrecognizedOption(arg) => write!(fmt, "unrecognized option '{}'", arg),
            OptionParseError::InvalidRollCount { value, source: NumberParseError::NotAnInteger, .. } =>
                write!(fmt, "'{}' is not an integer.", value),
            OptionParseError::InvalidRollCount { source: NumberParseError::OutOfRange, .. } =>
                write!(fmt, "Maximum number of rolls is {}.", i32::MAX),
            OptionParseError::NegativeRollCount { count, .. } =>
                write!(fmt, "Expected zero or more rolls, got {}.", count),
        }
    }
}

impl Error for OptionParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OptionParseError::InvalidRollCount { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Settings fixed for the whole run once the options have been read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Show padded rolls and their sum instead of just the rolls.
    pub verbose: bool,
    /// Roll this many times and quit instead of reading commands.
    pub num_rolls: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig { verbose: true, num_rolls: None }
    }
}

/// What the command line asks the program to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    /// Run with `config`, starting with the dice in `dice` (not yet parsed).
    Run { config: RunConfig, dice: Vec<String> },
}

/// Turn raw process arguments into strings.  Bytes that aren't UTF-8 are
/// replaced rather than rejected, so a mangled argument is reported like any
/// other bad option or die.
pub fn collect_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<String> {
    args.into_iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

/// Command-line options are anything starting with `-`.
pub fn is_option(arg: &str) -> bool {
    arg.starts_with('-')
}

/// Read the options in `args`, left to right.  `args[0]` is the program name
/// and is skipped.  Anything that isn't an option is collected as a die for
/// later, so options and dice may be mixed freely.  `--help` and `--version`
/// stop processing; nothing after them is looked at.
///
/// ```
/// use dice::options::{parse_options, Invocation, RunConfig};
///
/// let inv = parse_options(&["dice", "6", "-q", "20"]).unwrap();
/// assert_eq!(inv, Invocation::Run {
///     config: RunConfig { verbose: false, ..RunConfig::default() },
///     dice: vec!["6".to_string(), "20".to_string()],
/// });
/// ```
pub fn parse_options<S: AsRef<str>>(args: &[S]) -> Result<Invocation, OptionParseError> {
    let mut config = RunConfig::default();
    let mut dice = Vec::new();

    for arg in args.iter().skip(1).map(|a| a.as_ref()) {
        match arg {
            "-?" | "--help" => return Ok(Invocation::Help),
            "-#" | "--version" => return Ok(Invocation::Version),
            "-q" | "--quiet" => config.verbose = false,
            "-v" | "--verbose" => config.verbose = true,
            _ => {
                if let Some(caps) = ROLLS_RE.captures(arg) {
                    let value = caps.name("count").map_or("", |m| m.as_str());
                    config.num_rolls = Some(parse_roll_count(arg, value)?);
                } else if is_option(arg) {
                    return Err(OptionParseError::UnrecognizedOption(arg.to_string()));
                } else {
                    dice.push(arg.to_string());
                }
            },
        }
    }

    Ok(Invocation::Run { config, dice })
}

fn parse_roll_count(arg: &str, value: &str) -> Result<u32, OptionParseError> {
    let count = parse_int(value, 10).map_err(|source| OptionParseError::InvalidRollCount {
        arg: arg.to_string(),
        value: value.to_string(),
        source,
    })?;
    if count < 0 {
        return Err(OptionParseError::NegativeRollCount { arg: arg.to_string(), count });
    }
    Ok(count as u32)
}

#[cfg(test)]
mod test {
    use std::error::Error;

    use std::ffi::OsString;

    use super::{collect_args, is_option, parse_options, Invocation, OptionParseError, RunConfig};
    use crate::util::NumberParseError;

    macro_rules! run {
        ($config: expr, [$($die: literal),*]) => {
            Ok(Invocation::Run { config: $config, dice: vec![$($die.to_string()),*] })
        };
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse_options(&["dice"]), run!(RunConfig::default(), []));
    }

    #[test]
    fn options_mixed_with_dice() {
        let quiet = RunConfig { verbose: false, ..RunConfig::default() };
        assert_eq!(parse_options(&["dice", "4", "--quiet", "8"]), run!(quiet, ["4", "8"]));
        assert_eq!(parse_options(&["dice", "-q", "-v", "12"]), run!(RunConfig::default(), ["12"]));
        assert_eq!(parse_options(&["dice", "-v", "-q"]), run!(quiet, []));
    }

    #[test]
    fn rolls() {
        let three = RunConfig { num_rolls: Some(3), ..RunConfig::default() };
        assert_eq!(parse_options(&["dice", "--rolls=3", "6"]), run!(three, ["6"]));
        let zero = RunConfig { num_rolls: Some(0), ..RunConfig::default() };
        assert_eq!(parse_options(&["dice", "--rolls=0"]), run!(zero, []));
    }

    #[test]
    fn no_json_output() {
        assert_eq!(parse_options(&["dice", "--json", "6"]),
            Err(OptionParseError::UnrecognizedOption("--json".to_string())));
    }

    #[test]
    fn help_and_version_stop_early() {
        assert_eq!(parse_options(&["dice", "-?"]), Ok(Invocation::Help));
        assert_eq!(parse_options(&["dice", "6", "--help", "--bogus", "0"]), Ok(Invocation::Help));
        assert_eq!(parse_options(&["dice", "-#"]), Ok(Invocation::Version));
        assert_eq!(parse_options(&["dice", "--version", "--rolls=x"]), Ok(Invocation::Version));
    }

    #[test]
    fn errors_before_help_win() {
        assert_eq!(parse_options(&["dice", "--bogus", "--help"]),
            Err(OptionParseError::UnrecognizedOption("--bogus".to_string())));
    }

    #[test]
    fn unrecognized() {
        assert_eq!(parse_options(&["dice", "-x"]), Err(OptionParseError::UnrecognizedOption("-x".to_string())));
        assert_eq!(parse_options(&["dice", "--rolls"]), Err(OptionParseError::UnrecognizedOption("--rolls".to_string())));
        // negative sides look like options
        assert_eq!(parse_options(&["dice", "-6"]), Err(OptionParseError::UnrecognizedOption("-6".to_string())));
    }

    #[test]
    fn bad_roll_counts() {
        assert_eq!(parse_options(&["dice", "--rolls=x"]), Err(OptionParseError::InvalidRollCount {
            arg: "--rolls=x".to_string(),
            value: "x".to_string(),
            source: NumberParseError::NotAnInteger,
        }));
        assert_eq!(parse_options(&["dice", "--rolls="]), Err(OptionParseError::InvalidRollCount {
            arg: "--rolls=".to_string(),
            value: "".to_string(),
            source: NumberParseError::NotAnInteger,
        }));
        assert_eq!(parse_options(&["dice", "--rolls=99999999999"]), Err(OptionParseError::InvalidRollCount {
            arg: "--rolls=99999999999".to_string(),
            value: "99999999999".to_string(),
            source: NumberParseError::OutOfRange,
        }));
        assert_eq!(parse_options(&["dice", "--rolls=-2"]), Err(OptionParseError::NegativeRollCount {
            arg: "--rolls=-2".to_string(),
            count: -2,
        }));
    }

    #[test]
    fn error_text() {
        let e = parse_options(&["dice", "--rolls=-2"]).unwrap_err();
        assert_eq!(e.to_string(), "Expected zero or more rolls, got -2.");
        assert!(e.source().is_none());

        let e = parse_options(&["dice", "--rolls=99999999999"]).unwrap_err();
        assert_eq!(e.to_string(), format!("Maximum number of rolls is {}.", i32::MAX));
        assert!(e.source().is_some());
    }

    #[test]
    fn plus_roll_count() {
        assert_eq!(parse_options(&["dice", "--rolls=+3"]), Err(OptionParseError::InvalidRollCount {
            arg: "--rolls=+3".to_string(),
            value: "+3".to_string(),
            source: NumberParseError::NotAnInteger,
        }));
    }

    #[test]
    fn args_to_strings() {
        let args = collect_args(vec![OsString::from("dice"), OsString::from("-q"), OsString::from("6")]);
        assert_eq!(args, vec!["dice", "-q", "6"]);
    }

    #[cfg(unix)]
    #[test]
    fn args_not_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let args = collect_args(vec![OsString::from("dice"), OsString::from_vec(vec![b'6', 0xff])]);
        assert_eq!(args, vec!["dice".to_string(), "6\u{fffd}".to_string()]);
        assert_eq!(parse_options(args.as_slice()), run!(RunConfig::default(), ["6\u{fffd}"]));
    }

    #[test]
    fn option_detection() {
        assert!(is_option("-q"));
        assert!(is_option("--anything"));
        assert!(is_option("-"));
        assert!(!is_option("6"));
        assert!(!is_option(""));
    }
}

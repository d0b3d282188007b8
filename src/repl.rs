// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use core::convert::Infallible;

use std::io::{BufRead, Result as IoResult, Write};
use std::str::FromStr;

use rand::Rng;

use crate::messages;
use crate::options::RunConfig;
use crate::util::tokenize;
use crate::DiceSet;

/// One line of interactive input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// blank, `r` or `roll`
    Roll,
    /// `q`, `quit` or `exit`
    Quit,
    /// `h`, `help` or `?`
    Help,
    /// `l` or `list`
    List,
    /// `c` or `choose`, followed by the sizes of the new dice
    Choose(Vec<String>),
    /// Anything else; holds the first word.
    Invalid(String),
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = tokenize(line);
        let command = match words.first().copied() {
            None | Some("r") | Some("roll") => Command::Roll,
            Some("q") | Some("quit") | Some("exit") => Command::Quit,
            Some("h") | Some("help") | Some("?") => Command::Help,
            Some("l") | Some("list") => Command::List,
            Some("c") | Some("choose") => Command::Choose(words[1..].iter().map(|w| w.to_string()).collect()),
            Some(other) => Command::Invalid(other.to_string()),
        };
        Ok(command)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The state of a running program: the current dice, the fixed settings, and
/// the random source every roll draws from.
pub struct Session<R: Rng> {
    dice: DiceSet,
    config: RunConfig,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(dice: DiceSet, config: RunConfig, rng: R) -> Self {
        Session { dice, config, rng }
    }

    pub fn dice(&self) -> &DiceSet { &self.dice }

    /// Roll the current dice and print the result in the configured style.
    /// Quiet rolls of no dice print nothing at all.
    pub fn roll_and_print<W: Write>(&mut self, out: &mut W) -> IoResult<()> {
        let roll = self.dice.roll(&mut self.rng);
        if self.config.verbose {
            writeln!(out, "{}", roll.verbose())
        } else if let Some(line) = roll.quiet() {
            writeln!(out, "{}", line)
        } else {
            Ok(())
        }
    }

    pub fn execute<W: Write, E: Write>(&mut self, command: &Command, out: &mut W, err: &mut E) -> IoResult<Flow> {
        match command {
            Command::Roll => self.roll_and_print(out)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => messages::write_program_help(out)?,
            Command::List => messages::write_chosen_dice(out, &self.dice)?,
            Command::Choose(words) => match DiceSet::parse_words(words.as_slice()) {
                Ok(dice) => {
                    self.dice = dice;
                    self.roll_and_print(out)?;
                },
                Err(errors) => {
                    for e in &errors {
                        messages::write_die_error(err, e)?;
                    }
                },
            },
            Command::Invalid(_) => messages::write_invalid_input(err)?,
        }
        Ok(Flow::Continue)
    }

    pub fn handle_line<W: Write, E: Write>(&mut self, line: &str, out: &mut W, err: &mut E) -> IoResult<Flow> {
        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(never) => match never {},
        };
        self.execute(&command, out, err)
    }

    /// Prompt for and run commands until told to quit or `input` runs dry.
    /// Running out of input ends the prompt line with a newline.  Bytes that
    /// aren't UTF-8 are replaced, so such a line is just an unknown command.
    pub fn interact<I: BufRead, W: Write, E: Write>(&mut self, mut input: I, out: &mut W, err: &mut E) -> IoResult<()> {
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", messages::PROMPT)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line, out, err)? == Flow::Quit {
                return Ok(());
            }
        }
    }
}

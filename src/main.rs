// Copyright (C) 2021 Ben Stern
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::env;
use std::error::Error;
use std::io;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn Error>> {
    let args = dice::options::collect_args(env::args_os());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let status = dice::run(&args, stdin.lock(), &mut stdout.lock(), &mut stderr.lock(), StdRng::from_entropy())?;
    if status != dice::EXIT_SUCCESS {
        process::exit(status);
    }
    Ok(())
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use std::io::{BufRead, Write};

use solitaire_keystream::Keystream;

/// What to print for each output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The round value, 0 for rounds with no output.
    Values,
    /// A letter, rounds with no output are skipped.
    Letters,
}

fn produce(keystream: &mut Keystream, mode: Mode) -> String {
    match mode {
        Mode::Values => keystream.advance_and_emit().to_string(),
        Mode::Letters => keystream.next_letter().to_string(),
    }
}

/// Prints `count` outputs, values one per line and letters on a single line.
pub fn print_outputs(
    w: &mut impl Write,
    keystream: &mut Keystream,
    count: usize,
    mode: Mode,
) -> Result<()> {
    match mode {
        Mode::Values => {
            for _ in 0..count {
                writeln!(w, "{}", produce(keystream, mode))?;
            }
        }
        Mode::Letters => {
            let letters = (0..count).map(|_| keystream.next_letter()).collect::<String>();
            writeln!(w, "{letters}")?;
        }
    }

    w.flush()?;

    Ok(())
}

/// Runs the terminal loop, prints an output and waits for a new line until the
/// input is closed.
pub fn run(
    r: &mut impl BufRead,
    w: &mut impl Write,
    keystream: &mut Keystream,
    mode: Mode,
) -> Result<()> {
    let mut line = String::new();
    loop {
        writeln!(w, "Produced character: {}", produce(keystream, mode))?;
        writeln!(w, "Press enter for next character!")?;
        w.flush()?;

        line.clear();
        if r.read_line(&mut line)? == 0 {
            break;
        }
    }

    Ok(())
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Solitaire keystream CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;

use solitaire_keystream::{Deck, Keystream};

pub mod terminal;
use terminal::Mode;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of outputs to print, without it runs interactively.
    #[clap(long, short)]
    count: Option<usize>,
    /// Print letters instead of values, skipping rounds with no output.
    #[clap(long, short)]
    letters: bool,
    /// The starting deck, 54 card values separated by commas or spaces.
    #[clap(long, short, conflicts_with = "shuffled")]
    deck: Option<Deck>,
    /// Start from a shuffled deck.
    #[clap(long, short)]
    shuffled: bool,
    /// Log the deck at every step.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let deck = if cli.shuffled {
        // Log the deck so that the same stream can be generated again.
        let deck = Deck::new_and_shuffled(&mut rand::rng());
        info!("Shuffled deck: {deck}");
        deck
    } else {
        cli.deck.unwrap_or_default()
    };

    let mut keystream = Keystream::with_deck(deck);
    let mode = if cli.letters {
        Mode::Letters
    } else {
        Mode::Values
    };

    let mut stdout = io::stdout().lock();
    match cli.count {
        Some(count) => terminal::print_outputs(&mut stdout, &mut keystream, count, mode),
        None => terminal::run(&mut io::stdin().lock(), &mut stdout, &mut keystream, mode),
    }
}

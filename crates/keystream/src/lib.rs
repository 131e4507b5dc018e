// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Solitaire keystream generator.
//!
//! An implementation of Bruce Schneier's Solitaire keystream generator. The
//! generator state is a deck of 52 cards and two jokers, each round permutes
//! the deck and emits a value between 1 and 52 or no value:
//!
//! ```
//! # use solitaire_keystream::{Keystream, Output};
//! let mut keystream = Keystream::new();
//! let outputs = (0..4).map(|_| keystream.advance_and_emit()).collect::<Vec<_>>();
//! assert_eq!(
//!     outputs,
//!     [Output::Value(4), Output::Value(49), Output::Value(10), Output::None]
//! );
//! ```
//!
//! Rounds that don't produce a value can be skipped with [Keystream::next_value]
//! or [Keystream::next_letter] that map values to letters:
//!
//! ```
//! # use solitaire_keystream::Keystream;
//! let letters = Keystream::new().take(5).map(solitaire_keystream::letter).collect::<String>();
//! assert_eq!(letters, "DWJXH");
//! ```
//!
//! A [SharedKeystream] can be cloned and used from multiple threads, each
//! round runs while holding the keystream lock.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod keystream;
pub use keystream::{Keystream, Output, letter};

mod shared;
pub use shared::SharedKeystream;

// Reexport cards types.
pub use solitaire_cards::{Card, Deck, DeckError, Rank, Suit};

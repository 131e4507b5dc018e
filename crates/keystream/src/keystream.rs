// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The keystream generator rounds.
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use solitaire_cards::{Card, Deck};

/// The output of a keystream round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    /// A keystream value between 1 and 52.
    Value(u8),
    /// The output card was a joker, no value for this round.
    None,
}

impl Output {
    /// The output as an integer, 0 for no output.
    pub fn value(&self) -> u8 {
        match self {
            Output::Value(v) => *v,
            Output::None => 0,
        }
    }

    /// Checks if this round didn't produce a value.
    pub fn is_none(&self) -> bool {
        matches!(self, Output::None)
    }

    /// The output value as a letter.
    pub fn letter(&self) -> Option<char> {
        match self {
            Output::Value(v) => Some(letter(*v)),
            Output::None => None,
        }
    }
}

impl From<Output> for u8 {
    fn from(output: Output) -> Self {
        output.value()
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Maps a keystream value to a letter, 1 is A and 26 is Z, values from 27
/// wrap around so that 27 is A again.
///
/// Panics if the value is not between 1 and 52.
pub fn letter(value: u8) -> char {
    assert!((1..=52).contains(&value), "value={value} must be 1 <= value <= 52");
    char::from(b'A' + (value - 1) % 26)
}

/// A Solitaire keystream generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keystream {
    deck: Deck,
}

impl Keystream {
    /// Creates a keystream with the deck in order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a keystream starting from the given deck.
    pub fn with_deck(deck: Deck) -> Self {
        Self { deck }
    }

    /// The keystream deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Permutes the deck and returns the round output.
    pub fn advance_and_emit(&mut self) -> Output {
        let deck = &mut self.deck;
        trace!("Deck state: {deck}");

        deck.move_down(Card::JOKER_A, 1);
        trace!("Moved {}: {deck}", Card::JOKER_A);

        deck.move_down(Card::JOKER_B, 2);
        trace!("Moved {}: {deck}", Card::JOKER_B);

        deck.triple_cut();
        trace!("Triple cut: {deck}");

        deck.count_cut();
        trace!("Count cut: {deck}");

        debug_assert!(deck.is_complete(), "Invalid deck {deck}");

        let card = deck.output_card();
        let output = if card.is_joker() {
            Output::None
        } else {
            Output::Value(card.value())
        };

        debug!("Output card {card} value {output}");
        output
    }

    /// Runs rounds until one produces a value and returns it.
    pub fn next_value(&mut self) -> u8 {
        loop {
            if let Output::Value(v) = self.advance_and_emit() {
                return v;
            }
        }
    }

    /// Runs rounds until one produces a value and returns its letter.
    pub fn next_letter(&mut self) -> char {
        letter(self.next_value())
    }
}

/// An endless stream of keystream values, skipping rounds with no output.
impl Iterator for Keystream {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Solitaire cards types.
//!
//! This crate defines the cards used by the Solitaire keystream generator, 52
//! standard cards in bridge order plus two jokers:
//!
//! ```
//! # use solitaire_cards::{Card, Rank, Suit};
//! let ac = Card::new(Rank::Ace, Suit::Clubs);
//! assert_eq!(ac.value(), 1);
//! assert!(Card::JOKER_B.is_joker());
//! ```
//!
//! and a [Deck] type with the permutations used by the generator. A new deck
//! starts in order with the two jokers at the bottom:
//!
//! ```
//! # use solitaire_cards::{Card, Deck};
//! let mut deck = Deck::default();
//! assert_eq!(deck.bottom(), Card::JOKER_B);
//!
//! // A joker at the bottom wraps just below the top card.
//! deck.move_down(Card::JOKER_B, 1);
//! assert_eq!(deck.position(Card::JOKER_B), 1);
//!
//! deck.triple_cut();
//! deck.count_cut();
//! assert!(deck.is_complete());
//! ```
//!
//! A deck can also be parsed from a list of card values, the list must have
//! each card exactly once:
//!
//! ```
//! # use solitaire_cards::{Deck, DeckError};
//! assert_eq!("1 2 3".parse::<Deck>(), Err(DeckError::WrongSize(3)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::DeckError;

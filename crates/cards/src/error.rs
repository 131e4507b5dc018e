// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck construction errors.
use thiserror::Error;

use crate::{Card, Deck};

/// Errors returned when building a deck from an arrangement of cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The arrangement doesn't have exactly 54 cards.
    #[error("A deck must have {size} cards, got {0}", size = Deck::SIZE)]
    WrongSize(usize),
    /// A card value outside 1..=54.
    #[error("Invalid card value {0}, must be between 1 and 54")]
    InvalidCard(u8),
    /// A card appears more than once.
    #[error("Duplicate card {}", .0.value())]
    Duplicate(Card),
    /// A card that is not a number.
    #[error("Invalid card {0:?}, expected a number")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            DeckError::WrongSize(3).to_string(),
            "A deck must have 54 cards, got 3"
        );
        assert_eq!(
            DeckError::InvalidCard(60).to_string(),
            "Invalid card value 60, must be between 1 and 54"
        );
        assert_eq!(
            DeckError::Duplicate(Card::JOKER_A).to_string(),
            "Duplicate card 53"
        );
        assert_eq!(
            DeckError::Parse("x".to_string()).to_string(),
            "Invalid card \"x\", expected a number"
        );
    }
}

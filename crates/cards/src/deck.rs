// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Solitaire cards and deck definitions.
use ahash::AHashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::DeckError;

/// Number of cards in a deck, 52 cards plus two jokers.
const DECK_SIZE: usize = 54;

/// A Solitaire card.
///
/// A card is identified by its value in bridge order, the 52 standard cards
/// are numbered from the Ace of Clubs to the King of Spades and the two
/// jokers follow:
///
/// ```text
///   1..=13   AC..KC
///   14..=26  AD..KD
///   27..=39  AH..KH
///   40..=52  AS..KS
///   53       Joker A
///   54       Joker B
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// The A joker.
    pub const JOKER_A: Card = Card(53);

    /// The B joker.
    pub const JOKER_B: Card = Card(54);

    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * 13 + rank as u8 + 1)
    }

    /// This card value, 1..=52 for standard cards, 53 and 54 for the jokers.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Checks if this card is one of the two jokers.
    #[inline]
    pub fn is_joker(&self) -> bool {
        self.0 > 52
    }

    /// The number of cards this card counts for in a cut, both jokers count 53.
    #[inline]
    pub fn count(&self) -> usize {
        self.0.min(53) as usize
    }

    /// Returns the card suit or None for a joker.
    pub fn suit(&self) -> Option<Suit> {
        if self.is_joker() {
            return None;
        }

        match (self.0 - 1) / 13 {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => panic!("Invalid card value {}", self.0),
        }
    }

    /// Returns the card rank or None for a joker.
    pub fn rank(&self) -> Option<Rank> {
        if self.is_joker() {
            return None;
        }

        Rank::ranks().nth(((self.0 - 1) % 13) as usize)
    }
}

impl TryFrom<u8> for Card {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=Deck::SIZE as u8).contains(&value) {
            Ok(Card(value))
        } else {
            Err(DeckError::InvalidCard(value))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl FromStr for Card {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| DeckError::Parse(s.to_string()))?;
        Card::try_from(value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank(), self.suit()) {
            (Some(rank), Some(suit)) => write!(f, "{rank}{suit}"),
            _ if *self == Card::JOKER_A => write!(f, "JA"),
            _ => write!(f, "JB"),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    /// Ace
    Ace = 0,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };

        write!(f, "{rank}")
    }
}

/// Card suit in bridge order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A Solitaire deck with 52 cards and two jokers.
///
/// The deck always holds every card exactly once, all the operations are
/// permutations of a fixed size array, index 0 is the top of the deck.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = DECK_SIZE;

    /// Index of the bottom card.
    const LAST: usize = Self::SIZE - 1;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// The card at the top of the deck.
    pub fn top(&self) -> Card {
        self.cards[0]
    }

    /// The card at the bottom of the deck.
    pub fn bottom(&self) -> Card {
        self.cards[Self::LAST]
    }

    /// The cards from top to bottom.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Returns the index of a card.
    ///
    /// Panics if the card is not in the deck, that can only happen if the
    /// deck has been corrupted.
    pub fn position(&self, card: Card) -> usize {
        self.cards
            .iter()
            .position(|c| *c == card)
            .unwrap_or_else(|| panic!("Card {card} not found in deck {self}"))
    }

    /// Checks that the deck contains every card exactly once.
    pub fn is_complete(&self) -> bool {
        let mask = self
            .cards
            .iter()
            .fold(0u64, |mask, c| mask | (1 << c.value()));
        // Bits 1..=54 set.
        mask == ((1u64 << (Self::SIZE + 1)) - 2)
    }

    /// Moves a card down `n` positions one step at a time.
    ///
    /// A card at the bottom wraps to just below the top card, so a moved card
    /// never becomes the new top card.
    pub fn move_down(&mut self, card: Card, n: usize) {
        for _ in 0..n {
            let idx = self.position(card);
            if idx < Self::LAST {
                self.cards.swap(idx, idx + 1);
            } else {
                self.cards[1..].rotate_right(1);
            }
        }
    }

    /// Swaps the cards above the first joker with the cards below the second
    /// joker, the jokers and the cards between them don't move.
    pub fn triple_cut(&mut self) {
        let (a, b) = (self.position(Card::JOKER_A), self.position(Card::JOKER_B));
        let (lo, hi) = (a.min(b), a.max(b));

        // [top | middle | bottom] -> [bottom | top | middle]
        self.cards.rotate_left(hi + 1);

        // [bottom | top | middle] -> [bottom | middle | top]
        let bottom_len = Self::LAST - hi;
        self.cards[bottom_len..].rotate_left(lo);
    }

    /// Moves as many cards as the bottom card count from the top of the deck
    /// to just above the bottom card.
    pub fn count_cut(&mut self) {
        let n = self.bottom().count();
        self.cards[..Self::LAST].rotate_left(n);
    }

    /// Returns the card below the top card count, a joker on top counts 53
    /// and selects the bottom card.
    pub fn output_card(&self) -> Card {
        self.cards[self.top().count()]
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = std::array::from_fn(|idx| Card(idx as u8 + 1));
        Self { cards }
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let mut seen = AHashSet::with_capacity(Self::SIZE);
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(DeckError::Duplicate(*card));
        }

        let cards = <[Card; Self::SIZE]>::try_from(cards)
            .map_err(|cards| DeckError::WrongSize(cards.len()))?;

        Ok(Self { cards })
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards.to_vec()
    }
}

impl FromStr for Deck {
    type Err = DeckError;

    /// Parses a deck from card values separated by commas or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|v| !v.is_empty())
            .map(Card::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Deck::try_from(cards)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card.value())?;
        }

        Ok(())
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({self})")
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::array::IntoIter<Card, DECK_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

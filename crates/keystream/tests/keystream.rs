// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use ahash::HashSet;
use solitaire_keystream::{Card, Deck, Keystream, Output};

/// Outputs for the first 30 rounds of an ordered deck, 0 is a joker round.
const ORDERED_DECK_OUTPUTS: [u8; 30] = [
    4, 49, 10, 0, 24, 8, 51, 44, 6, 4, 33, 20, 39, 19, 34, 42, 21, 21, 18, 24, 36, 52, 51, 49,
    25, 8, 3, 41, 22, 18,
];

fn assert_complete(deck: &Deck) {
    let cards = deck.iter().map(|c| c.value()).collect::<HashSet<_>>();
    assert_eq!(cards.len(), Deck::SIZE);
    assert!(cards.iter().all(|v| (1..=54).contains(v)));
    assert!(deck.is_complete());
}

#[test]
fn ordered_deck_outputs() {
    let mut keystream = Keystream::new();
    let outputs = (0..ORDERED_DECK_OUTPUTS.len())
        .map(|_| keystream.advance_and_emit().value())
        .collect::<Vec<_>>();
    assert_eq!(outputs, ORDERED_DECK_OUTPUTS);
}

#[test]
fn schneier_test_vector() {
    // Plaintext AAAAAAAAAAAAAAA with an unkeyed deck, A is 1 and each letter
    // is shifted by the keystream value.
    let mut keystream = Keystream::new();
    let ciphertext = (0..15)
        .map(|_| char::from(b'A' + keystream.next_value() % 26))
        .collect::<String>();
    assert_eq!(ciphertext, "EXKYIZSGEHUNTIQ");
}

#[test]
fn joker_on_top_counts_53() {
    // The seventh round of an ordered deck has the B joker on top and
    // outputs the bottom card.
    let mut keystream = Keystream::new();
    for _ in 0..6 {
        keystream.advance_and_emit();
    }

    let output = keystream.advance_and_emit();
    assert_eq!(keystream.deck().top(), Card::JOKER_B);
    assert_eq!(output, Output::Value(keystream.deck().bottom().value()));
    assert_eq!(output, Output::Value(51));
}

#[test]
fn deck_stays_complete() {
    let mut keystream = Keystream::new();
    for _ in 0..1_000 {
        keystream.advance_and_emit();
        assert_complete(keystream.deck());
    }

    let mut rng = rand::rng();
    for _ in 0..100 {
        let mut keystream = Keystream::with_deck(Deck::new_and_shuffled(&mut rng));
        for _ in 0..100 {
            keystream.advance_and_emit();
            assert_complete(keystream.deck());
        }
    }
}

#[test]
fn output_domain() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let mut keystream = Keystream::with_deck(Deck::new_and_shuffled(&mut rng));
        for _ in 0..100 {
            let output = keystream.advance_and_emit();
            assert!(output.value() <= 52);

            // A joker at the output position is always a no output round.
            let card = keystream.deck().output_card();
            assert_eq!(card.is_joker(), output.is_none());
            if !card.is_joker() {
                assert_eq!(output.value(), card.value());
            }
        }
    }
}

#[test]
fn deterministic() {
    let deck = Deck::new_and_shuffled(&mut rand::rng());
    let mut k1 = Keystream::with_deck(deck.clone());
    let mut k2 = Keystream::with_deck(deck);

    for _ in 0..500 {
        assert_eq!(k1.advance_and_emit(), k2.advance_and_emit());
    }
    assert_eq!(k1, k2);

    // Independent keystreams don't affect each other.
    let mut k3 = Keystream::new();
    let mut k4 = Keystream::new();
    k3.advance_and_emit();
    k3.advance_and_emit();
    assert_eq!(k4.advance_and_emit(), Output::Value(4));
}

#[test]
fn values_skip_jokers() {
    let values = Keystream::new().take(10).collect::<Vec<_>>();
    assert_eq!(values, [4, 49, 10, 24, 8, 51, 44, 6, 4, 33]);

    let mut keystream = Keystream::new();
    let letters = (0..10).map(|_| keystream.next_letter()).collect::<String>();
    assert_eq!(letters, "DWJXHYRFDG");
}

#[test]
fn starts_from_parsed_deck() {
    let mut keystream = Keystream::new();
    for _ in 0..5 {
        keystream.advance_and_emit();
    }

    let deck = keystream.deck().to_string().parse::<Deck>().unwrap();
    let mut restored = Keystream::with_deck(deck);
    for _ in 0..50 {
        assert_eq!(restored.advance_and_emit(), keystream.advance_and_emit());
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A keystream shared between threads.
use parking_lot::Mutex;
use std::sync::Arc;

use solitaire_cards::Deck;

use crate::{Keystream, Output};

/// A keystream that can be cloned and shared between threads.
///
/// Clones share the same deck, each call runs a whole round while holding
/// the lock so that rounds from different threads never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedKeystream(Arc<Mutex<Keystream>>);

impl SharedKeystream {
    /// Creates a shared keystream from a keystream.
    pub fn new(keystream: Keystream) -> Self {
        Self(Arc::new(Mutex::new(keystream)))
    }

    /// See [Keystream::advance_and_emit].
    pub fn advance_and_emit(&self) -> Output {
        self.0.lock().advance_and_emit()
    }

    /// See [Keystream::next_value].
    pub fn next_value(&self) -> u8 {
        self.0.lock().next_value()
    }

    /// See [Keystream::next_letter].
    pub fn next_letter(&self) -> char {
        self.0.lock().next_letter()
    }

    /// Returns a copy of the current deck.
    pub fn snapshot(&self) -> Deck {
        self.0.lock().deck().clone()
    }
}

impl From<Keystream> for SharedKeystream {
    fn from(keystream: Keystream) -> Self {
        Self::new(keystream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_deck() {
        let shared = SharedKeystream::default();
        let other = shared.clone();

        assert_eq!(shared.advance_and_emit(), Output::Value(4));
        assert_eq!(other.advance_and_emit(), Output::Value(49));
        assert_eq!(shared.snapshot(), other.snapshot());
    }

    #[test]
    fn parallel_rounds() {
        const THREADS: usize = 4;
        const ROUNDS: usize = 250;

        let shared = SharedKeystream::from(Keystream::new());
        let mut outputs = thread::scope(|s| {
            let handles = (0..THREADS)
                .map(|_| {
                    let shared = shared.clone();
                    s.spawn(move || {
                        (0..ROUNDS)
                            .map(|_| shared.advance_and_emit().value())
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        // Same outputs and final deck as running all the rounds sequentially.
        let mut keystream = Keystream::new();
        let mut expected = (0..THREADS * ROUNDS)
            .map(|_| keystream.advance_and_emit().value())
            .collect::<Vec<_>>();

        outputs.sort_unstable();
        expected.sort_unstable();
        assert_eq!(outputs, expected);
        assert_eq!(&shared.snapshot(), keystream.deck());
    }
}

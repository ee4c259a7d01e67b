// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card sources for a game session.
use rand::{prelude::*, rngs::StdRng};

use videopoker_eval::{Card, Deck};

use crate::GameError;

/// A source of cards for a session.
///
/// A dealer must never deal the same card twice between two shuffles, the
/// session relies on it to build hands of distinct cards.
pub trait Dealer {
    /// Puts back all the dealt cards and shuffles them.
    fn shuffle(&mut self);

    /// Deals the next card.
    fn deal(&mut self) -> Result<Card, GameError>;
}

/// A dealer that deals from a shuffled 52 cards deck.
#[derive(Debug)]
pub struct DeckDealer<R> {
    deck: Deck,
    rng: R,
}

impl<R: Rng> DeckDealer<R> {
    /// Creates a dealer that uses the given random generator for shuffling.
    pub fn new(mut rng: R) -> Self {
        let deck = Deck::new_and_shuffled(&mut rng);
        Self { deck, rng }
    }

    /// Number of cards left in the deck.
    pub fn cards_left(&self) -> usize {
        self.deck.count()
    }
}

impl DeckDealer<StdRng> {
    /// Creates a dealer with a seeded generator for repeatable deals.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for DeckDealer<StdRng> {
    fn default() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Dealer for DeckDealer<R> {
    fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    fn deal(&mut self) -> Result<Card, GameError> {
        Ok(self.deck.deal()?)
    }
}

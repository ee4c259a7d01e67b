// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards hand.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, slice, str::FromStr};

use crate::{Card, EvalError};

/// Five cards in the order they were dealt.
///
/// A hand only checks its size, cards uniqueness is up to the dealer and
/// it is verified when the hand is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from a slice of five cards.
    pub fn new(cards: &[Card]) -> Result<Self, EvalError> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards)
            .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;
        Ok(Self { cards })
    }

    /// The hand cards in dealing order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards in dealing order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Replaces the card at the given position, returns the old card.
    ///
    /// Panics if the position is not less than [Hand::SIZE].
    pub fn replace(&mut self, pos: usize, card: Card) -> Card {
        std::mem::replace(&mut self.cards[pos], card)
    }

    /// Returns a copy of the cards sorted by value and suit.
    pub fn sorted(&self) -> [Card; Hand::SIZE] {
        let mut cards = self.cards;
        cards.sort_unstable();
        cards
    }
}

impl From<[Card; Hand::SIZE]> for Hand {
    fn from(cards: [Card; Hand::SIZE]) -> Self {
        Self { cards }
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = EvalError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(&cards)
    }
}

impl FromStr for Hand {
    type Err = EvalError;

    /// Parses whitespace separated cards like `"AS KD 7H 7C 2D"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::try_from(cards)
    }
}

impl ops::Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

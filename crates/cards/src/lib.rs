// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use videopoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let qd: Card = "QD".parse().unwrap();
//! assert_eq!(ah.value(), 14);
//! assert_eq!(qd.value(), 12);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use videopoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};

mod deck;
pub use deck::Deck;

/// Errors for cards construction and dealing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardsError {
    /// A card value outside 2..=14.
    #[error("invalid card value {0}, expected 2..=14")]
    InvalidValue(u8),
    /// An unknown rank character.
    #[error("invalid card rank '{0}'")]
    InvalidRank(char),
    /// An unknown suit character.
    #[error("invalid card suit '{0}'")]
    InvalidSuit(char),
    /// Text that doesn't look like a card.
    #[error("invalid card \"{0}\"")]
    InvalidCard(String),
    /// No cards are left in the deck.
    #[error("no cards are left in the deck")]
    EmptyDeck,
}

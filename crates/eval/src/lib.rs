// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker hand evaluator.
//!
//! Classifies a five cards hand into one of the ten Jacks or Better payout
//! categories. A pair only counts when it is a pair of Jacks or better, lower
//! pairs are reported as [HandCategory::Nothing].
//!
//! To use the evaluator create a [Hand] and call [evaluate]:
//!
//! ```
//! # use videopoker_eval::*;
//! let hand: Hand = "QS QD 7C 4H 2S".parse().unwrap();
//! let result = evaluate(&hand).unwrap();
//! assert_eq!(result.category(), HandCategory::Pair);
//! assert_eq!(result.qualifying_value(), 12);
//!
//! let hand: Hand = "5S 5D 7C 4H 2S".parse().unwrap();
//! let result = evaluate(&hand).unwrap();
//! assert_eq!(result.category(), HandCategory::Nothing);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, RankResult, evaluate};

pub mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use videopoker_cards::{Card, CardsError, Deck, Rank, Suit};

/// Hand construction and evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A hand built from a number of cards other than five.
    #[error("a hand must have 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
    /// A card in the hand could not be parsed.
    #[error(transparent)]
    Card(#[from] CardsError),
}

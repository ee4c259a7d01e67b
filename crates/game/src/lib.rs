// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker game session.
//!
//! A [Session] owns the player bankroll and a [Dealer], it deals five cards
//! for a bet, lets the player choose the cards to hold, draws replacements,
//! and pays the final hand using a [Paytable]:
//!
//! ```
//! # use videopoker_game::*;
//! let mut session = Session::new(Config::default(), DeckDealer::from_seed(7));
//! session.deal(Chips::new(10)).unwrap();
//! session.toggle_hold(0).unwrap();
//! let outcome = session.draw().unwrap();
//! assert_eq!(outcome.bankroll, Chips::new(90) + outcome.payout);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod chips;
pub use chips::Chips;

pub mod dealer;
pub use dealer::{Dealer, DeckDealer};

pub mod paytable;
pub use paytable::Paytable;

pub mod session;
pub use session::{Outcome, Phase, Session};

use videopoker_eval::{CardsError, EvalError};

/// Session configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The player starting bankroll.
    pub start_amount: Chips,
    /// The bet used when the player doesn't enter one.
    pub default_bet: Chips,
    /// The paytable for the final hands.
    pub paytable: Paytable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_amount: Chips::new(100),
            default_bet: Chips::new(10),
            paytable: Paytable::JACKS_OR_BETTER,
        }
    }
}

/// Game errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A bet input that is not a non negative integer.
    #[error("The bet input \"{0}\" does not contain a legal integer!")]
    InvalidBet(String),
    /// A zero bet.
    #[error("The bet amount must be greater than zero!")]
    ZeroBet,
    /// A bet larger than the bankroll.
    #[error("You don't have that much money, bet {bet} with {bankroll}")]
    InsufficientFunds {
        /// The requested bet.
        bet: Chips,
        /// The available bankroll.
        bankroll: Chips,
    },
    /// A card position outside the hand.
    #[error("Invalid card position {0}")]
    InvalidPosition(usize),
    /// An action that is not allowed in the current phase.
    #[error("Cannot {action} while {phase}")]
    WrongPhase {
        /// The requested action.
        action: &'static str,
        /// The session phase.
        phase: Phase,
    },
    /// A dealer error.
    #[error(transparent)]
    Cards(#[from] CardsError),
    /// A hand error.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A single player video poker session.
//!
//! A session goes through a bet and deal step, where the player gets five
//! cards, and a draw step, where the cards that are not held are replaced and
//! the final hand is paid according to the paytable.
use log::{debug, info};
use std::fmt;

use videopoker_eval::{Hand, HandCategory, RankResult, evaluate};

use crate::{Chips, Config, Dealer, GameError};

/// The session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a bet to deal a new hand.
    Betting,
    /// A hand has been dealt, the player chooses the cards to hold.
    Drawing,
    /// The bankroll is empty, the session is over.
    Broke,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Phase::Betting => "betting",
            Phase::Drawing => "drawing",
            Phase::Broke => "out of money",
        };

        f.write_str(phase)
    }
}

/// The result of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The final hand.
    pub hand: Hand,
    /// The hand evaluation.
    pub result: RankResult,
    /// The bet for this hand.
    pub bet: Chips,
    /// The bet multiplier for the hand category.
    pub multiplier: u32,
    /// The amount paid to the player.
    pub payout: Chips,
    /// The bankroll after the payout.
    pub bankroll: Chips,
}

impl Outcome {
    /// A message that describes the outcome to the player.
    pub fn message(&self) -> String {
        match self.result.category() {
            HandCategory::Nothing => "No hand. You lose your bet.".to_string(),
            HandCategory::Pair => "Pair, Jacks or better: You win even money.".to_string(),
            category => format!(
                "{}: Pays {}-to-1. You win {}",
                category.label(),
                self.multiplier,
                self.payout
            ),
        }
    }
}

/// A game session with its bankroll and dealer.
#[derive(Debug)]
pub struct Session<D> {
    config: Config,
    dealer: D,
    bankroll: Chips,
    bet: Chips,
    phase: Phase,
    hand: Option<Hand>,
    held: [bool; Hand::SIZE],
}

impl<D: Dealer> Session<D> {
    /// Creates a new session with the configured starting amount.
    pub fn new(config: Config, dealer: D) -> Self {
        let bankroll = config.start_amount;
        let phase = if bankroll == Chips::ZERO {
            Phase::Broke
        } else {
            Phase::Betting
        };

        Self {
            config,
            dealer,
            bankroll,
            bet: Chips::ZERO,
            phase,
            hand: None,
            held: [true; Hand::SIZE],
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The player money, not including the current bet.
    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The last dealt hand.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// The held flag for each card position.
    pub fn held(&self) -> &[bool; Hand::SIZE] {
        &self.held
    }

    /// Places a bet and deals a new hand.
    pub fn deal(&mut self, bet: Chips) -> Result<&Hand, GameError> {
        self.check_phase(Phase::Betting, "deal")?;

        if bet == Chips::ZERO {
            return Err(GameError::ZeroBet);
        }

        if bet > self.bankroll {
            return Err(GameError::InsufficientFunds {
                bet,
                bankroll: self.bankroll,
            });
        }

        self.dealer.shuffle();
        let mut cards = Vec::with_capacity(Hand::SIZE);
        for _ in 0..Hand::SIZE {
            cards.push(self.dealer.deal()?);
        }
        let hand = Hand::new(&cards)?;

        self.bankroll -= bet;
        self.bet = bet;
        self.held = [true; Hand::SIZE];
        self.phase = Phase::Drawing;

        debug!("Dealt {hand} for {bet}, bankroll {}", self.bankroll);

        Ok(self.hand.insert(hand))
    }

    /// Toggles the held flag of the card at the given position, returns the
    /// new flag.
    pub fn toggle_hold(&mut self, pos: usize) -> Result<bool, GameError> {
        self.check_phase(Phase::Drawing, "hold cards")?;

        let held = self
            .held
            .get_mut(pos)
            .ok_or(GameError::InvalidPosition(pos))?;
        *held = !*held;

        Ok(*held)
    }

    /// Replaces the cards that are not held and pays the final hand.
    pub fn draw(&mut self) -> Result<Outcome, GameError> {
        self.check_phase(Phase::Drawing, "draw")?;

        let Some(mut hand) = self.hand else {
            return Err(GameError::WrongPhase {
                action: "draw",
                phase: self.phase,
            });
        };

        for (pos, held) in self.held.iter().enumerate() {
            if !held {
                let card = self.dealer.deal()?;
                let old = hand.replace(pos, card);
                debug!("Replaced {old} with {card}");
            }
        }

        let result = evaluate(&hand)?;
        let multiplier = self.config.paytable.multiplier(result.category());
        let payout = self.config.paytable.payout(result.category(), self.bet);

        self.bankroll += payout;
        self.hand = Some(hand);
        self.held = [true; Hand::SIZE];
        self.phase = if self.bankroll == Chips::ZERO {
            Phase::Broke
        } else {
            Phase::Betting
        };

        info!(
            "Hand {hand} is {result}, bet {} paid {payout}, bankroll {}",
            self.bet, self.bankroll
        );

        Ok(Outcome {
            hand,
            result,
            bet: self.bet,
            multiplier,
            payout,
            bankroll: self.bankroll,
        })
    }

    fn check_phase(&self, expected: Phase, action: &'static str) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }
}

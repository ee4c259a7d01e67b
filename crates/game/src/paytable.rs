// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Payout multipliers for each hand category.
use videopoker_eval::HandCategory;

use crate::Chips;

/// Bet multipliers for the paying categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paytable {
    /// Jacks or better pair.
    pub pair: u32,
    /// Two pair.
    pub two_pair: u32,
    /// Three of a kind.
    pub triple: u32,
    /// Straight.
    pub straight: u32,
    /// Flush.
    pub flush: u32,
    /// Full house.
    pub full_house: u32,
    /// Four of a kind.
    pub four_of_a_kind: u32,
    /// Straight flush.
    pub straight_flush: u32,
    /// Royal flush.
    pub royal_flush: u32,
}

impl Paytable {
    /// The full pay 9/6 Jacks or Better table.
    pub const JACKS_OR_BETTER: Paytable = Paytable {
        pair: 1,
        two_pair: 2,
        triple: 3,
        straight: 4,
        flush: 6,
        full_house: 9,
        four_of_a_kind: 25,
        straight_flush: 50,
        royal_flush: 800,
    };

    /// The bet multiplier for a category.
    pub fn multiplier(&self, category: HandCategory) -> u32 {
        match category {
            HandCategory::Nothing => 0,
            HandCategory::Pair => self.pair,
            HandCategory::TwoPair => self.two_pair,
            HandCategory::Triple => self.triple,
            HandCategory::Straight => self.straight,
            HandCategory::Flush => self.flush,
            HandCategory::FullHouse => self.full_house,
            HandCategory::FourOfAKind => self.four_of_a_kind,
            HandCategory::StraightFlush => self.straight_flush,
            HandCategory::RoyalFlush => self.royal_flush,
        }
    }

    /// The amount paid for a category given a bet.
    pub fn payout(&self, category: HandCategory, bet: Chips) -> Chips {
        bet * self.multiplier(category)
    }

    /// Iterates categories and multipliers from the best hand down.
    pub fn rows(&self) -> impl Iterator<Item = (HandCategory, u32)> + '_ {
        HandCategory::categories()
            .rev()
            .map(|category| (category, self.multiplier(category)))
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::JACKS_OR_BETTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jacks_or_better_multipliers() {
        let table = Paytable::default();
        let multipliers = HandCategory::categories()
            .map(|c| table.multiplier(c))
            .collect::<Vec<_>>();
        assert_eq!(multipliers, vec![0, 1, 2, 3, 4, 6, 9, 25, 50, 800]);
    }

    #[test]
    fn payouts() {
        let table = Paytable::JACKS_OR_BETTER;
        assert_eq!(table.payout(HandCategory::Nothing, Chips::new(10)), Chips::ZERO);
        assert_eq!(table.payout(HandCategory::Pair, Chips::new(10)), Chips::new(10));
        assert_eq!(
            table.payout(HandCategory::FullHouse, Chips::new(5)),
            Chips::new(45)
        );
        assert_eq!(
            table.payout(HandCategory::RoyalFlush, Chips::new(5)),
            Chips::new(4_000)
        );
    }

    #[test]
    fn rows_best_first() {
        let rows = Paytable::default().rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], (HandCategory::RoyalFlush, 800));
        assert_eq!(rows[9], (HandCategory::Nothing, 0));
    }
}

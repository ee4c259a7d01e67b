// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better hand classification.
//!
//! The classifier builds value and suit histograms for the five cards, finds
//! flushes and straights, and then checks the categories from the best to the
//! worst so that a better hand is never reported as a weaker one. An ace can
//! play low in the A-2-3-4-5 straight (the wheel).
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{EvalError, Hand, Rank};

/// Value bits for the A-2-3-4-5 straight.
const WHEEL: u16 = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);

/// Five consecutive value bits.
const STRAIGHT: u16 = 0b11111;

/// Hand category, the discriminant is the paytable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No paying hand, including pairs lower than Jacks.
    Nothing = 0,
    /// A pair of Jacks or better.
    Pair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    Triple,
    /// Five consecutive values.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// Ten to Ace of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the worst to the best.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            Nothing,
            Pair,
            TwoPair,
            Triple,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category position in 0..10.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// A label for displaying this category.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::Nothing => "Nothing",
            HandCategory::Pair => "Jacks or Better",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Triple => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of a hand evaluation.
///
/// The qualifying rank is the value that defines the category: the paired
/// value for a pair, the higher pair for two pair, the repeated value for
/// three and four of a kind and for the three cards of a full house, the
/// highest card for straights and flushes (a Five for the wheel), and the
/// highest card for nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankResult {
    category: HandCategory,
    qualifying: Rank,
}

impl RankResult {
    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The value that qualifies the category.
    pub fn qualifying_value(&self) -> u8 {
        self.qualifying.value()
    }

    /// The rank that qualifies the category.
    pub fn qualifying_rank(&self) -> Rank {
        self.qualifying
    }

    /// Checks if this hand pays something.
    pub fn is_winner(&self) -> bool {
        self.category != HandCategory::Nothing
    }
}

impl fmt::Display for RankResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.qualifying;
        match self.category {
            HandCategory::Nothing => write!(f, "Nothing, {} high", rank.name()),
            HandCategory::Pair => write!(f, "Pair of {}", rank.plural()),
            HandCategory::TwoPair => write!(f, "Two Pair, {} up", rank.plural()),
            HandCategory::Triple => write!(f, "Three {}", rank.plural()),
            HandCategory::Straight => write!(f, "Straight, {} high", rank.name()),
            HandCategory::Flush => write!(f, "Flush, {} high", rank.name()),
            HandCategory::FullHouse => write!(f, "Full House, {} full", rank.plural()),
            HandCategory::FourOfAKind => write!(f, "Four {}", rank.plural()),
            HandCategory::StraightFlush => write!(f, "Straight Flush, {} high", rank.name()),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

/// Evaluates a five cards hand.
///
/// Returns [EvalError::DuplicateCard] if the same card appears twice, this is
/// a dealer error and no category is computed for such a hand.
pub fn evaluate(hand: &Hand) -> Result<RankResult, EvalError> {
    let mut seen = AHashSet::with_capacity(Hand::SIZE);
    if let Some(card) = hand.iter().find(|&&c| !seen.insert(c)) {
        return Err(EvalError::DuplicateCard(*card));
    }

    // Histograms indexed by card value and suit.
    let mut values = [0u8; 15];
    let mut suits = [0u8; 4];
    let mut value_bits = 0u16;
    for card in hand {
        values[card.value() as usize] += 1;
        suits[card.suit() as usize] += 1;
        value_bits |= 1u16 << card.value();
    }

    let is_flush = suits.contains(&5);
    let straight = straight_high(value_bits);
    let high = Rank::ranks()
        .rev()
        .find(|r| values[r.value() as usize] > 0)
        .unwrap_or(Rank::Ace);

    // Groups of equal values by descending count and then descending value.
    let mut groups = Rank::ranks()
        .filter_map(|r| {
            let count = values[r.value() as usize];
            (count > 0).then_some((count, r))
        })
        .collect::<Vec<_>>();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let counts = groups.iter().map(|(count, _)| *count).collect::<Vec<_>>();
    let top = groups[0].1;

    let (category, qualifying) = match (counts.as_slice(), is_flush, straight) {
        ([4, 1], _, _) => (HandCategory::FourOfAKind, top),
        ([3, 2], _, _) => (HandCategory::FullHouse, top),
        (_, true, None) => (HandCategory::Flush, high),
        (_, false, Some(high)) => (HandCategory::Straight, high),
        (_, true, Some(Rank::Ace)) => (HandCategory::RoyalFlush, Rank::Ace),
        (_, true, Some(high)) => (HandCategory::StraightFlush, high),
        ([3, 1, 1], _, _) => (HandCategory::Triple, top),
        ([2, 2, 1], _, _) => (HandCategory::TwoPair, top),
        ([2, 1, 1, 1], _, _) if top >= Rank::Jack => (HandCategory::Pair, top),
        _ => (HandCategory::Nothing, high),
    };

    Ok(RankResult {
        category,
        qualifying,
    })
}

/// Returns the straight high rank if the value bits are five consecutive
/// values or the wheel.
fn straight_high(value_bits: u16) -> Option<Rank> {
    if value_bits == WHEEL {
        return Some(Rank::Five);
    }

    let low = value_bits.trailing_zeros();
    if value_bits.count_ones() == 5 && value_bits >> low == STRAIGHT {
        Rank::try_from((low + 4) as u8).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Deck, Suit};

    fn eval(s: &str) -> RankResult {
        evaluate(&s.parse().unwrap()).unwrap()
    }

    fn check(s: &str, category: HandCategory, value: u8) {
        let res = eval(s);
        assert_eq!(res.category(), category, "hand {s}");
        assert_eq!(res.qualifying_value(), value, "hand {s}");
    }

    #[test]
    fn royal_flush() {
        check("TS JS QS KS AS", HandCategory::RoyalFlush, 14);
        check("AH KH QH JH TH", HandCategory::RoyalFlush, 14);
    }

    #[test]
    fn straight_flush() {
        check("5H 6H 7H 8H 9H", HandCategory::StraightFlush, 9);
        check("9D KD JD QD TD", HandCategory::StraightFlush, 13);
        check("AC 2C 3C 4C 5C", HandCategory::StraightFlush, 5);
    }

    #[test]
    fn four_of_a_kind() {
        check("AS AH AD AC 3S", HandCategory::FourOfAKind, 14);
        check("2S 2H KD 2D 2C", HandCategory::FourOfAKind, 2);
    }

    #[test]
    fn full_house() {
        check("KS KH KD 4C 4S", HandCategory::FullHouse, 13);
        check("4S 4H 4D KC KS", HandCategory::FullHouse, 4);
    }

    #[test]
    fn flush() {
        check("2H 7H 9H JH KH", HandCategory::Flush, 13);
        check("AD 2D 3D 4D 6D", HandCategory::Flush, 14);
    }

    #[test]
    fn straight() {
        check("5S 6H 7D 8C 9S", HandCategory::Straight, 9);
        check("TS JH QD KC AS", HandCategory::Straight, 14);
        check("AS 2H 3D 4C 5S", HandCategory::Straight, 5);
        check("5S 3H AD 4C 2S", HandCategory::Straight, 5);
    }

    #[test]
    fn no_wraparound_straight() {
        check("QS KH AD 2C 3S", HandCategory::Nothing, 14);
        check("KS AH 2D 3C 4S", HandCategory::Nothing, 14);
        check("AS KH QD JC 9S", HandCategory::Nothing, 14);
    }

    #[test]
    fn triple() {
        check("7S 7H 7D KC 2S", HandCategory::Triple, 7);
        check("AS 2H 2D 2C KS", HandCategory::Triple, 2);
    }

    #[test]
    fn two_pair() {
        check("7S 7H KD KC 2S", HandCategory::TwoPair, 13);
        check("3S 3H 2D 2C AS", HandCategory::TwoPair, 3);
    }

    #[test]
    fn jacks_or_better() {
        check("QS QH 2D 7C 9S", HandCategory::Pair, 12);
        check("JS JH 2D 7C 9S", HandCategory::Pair, 11);
        check("AS 3H 2D 7C AD", HandCategory::Pair, 14);
    }

    #[test]
    fn low_pairs_pay_nothing() {
        check("5S 5H 2D 7C 9S", HandCategory::Nothing, 9);
        check("TS TH 2D 7C 9S", HandCategory::Nothing, 10);
        check("2S 2H KD 7C 9S", HandCategory::Nothing, 13);
    }

    #[test]
    fn high_card() {
        check("2S 4H 6D 8C TS", HandCategory::Nothing, 10);
        check("AS 4H 6D 8C TS", HandCategory::Nothing, 14);
    }

    #[test]
    fn duplicate_card() {
        let hand = "QS QS 2D 7C 9S".parse::<Hand>().unwrap();
        assert_eq!(
            evaluate(&hand),
            Err(EvalError::DuplicateCard(Card::new(Rank::Queen, Suit::Spades)))
        );

        let hand = "AH KH QH JH AH".parse::<Hand>().unwrap();
        assert!(matches!(evaluate(&hand), Err(EvalError::DuplicateCard(_))));
    }

    /// Calls f with every permutation of the cards (Heap's algorithm).
    fn permutations(cards: &mut [Card], k: usize, f: &mut impl FnMut(&[Card])) {
        if k <= 1 {
            f(cards);
            return;
        }

        permutations(cards, k - 1, f);
        for i in 0..(k - 1) {
            if k % 2 == 0 {
                cards.swap(i, k - 1);
            } else {
                cards.swap(0, k - 1);
            }
            permutations(cards, k - 1, f);
        }
    }

    #[test]
    fn order_independence() {
        let hands = [
            "TS JS QS KS AS",
            "AS 2H 3D 4C 5S",
            "KS KH KD 4C 4S",
            "7S 7H KD KC 2S",
            "QS QH 2D 7C 9S",
            "5S 5H 2D 7C 9S",
            "2H 7H 9H JH KH",
        ];

        for s in hands {
            let hand = s.parse::<Hand>().unwrap();
            let expected = evaluate(&hand).unwrap();

            let mut cards = hand.sorted();
            let mut seen = ahash::HashSet::default();
            permutations(&mut cards, Hand::SIZE, &mut |cards| {
                let res = evaluate(&Hand::new(cards).unwrap()).unwrap();
                assert_eq!(res, expected, "{s} permuted to {cards:?}");
                seen.insert(cards.to_vec());
            });
            assert_eq!(seen.len(), 120);
        }
    }

    #[test]
    fn repeated_evaluation() {
        let hand = "9D KD JD QD TD".parse::<Hand>().unwrap();
        let first = evaluate(&hand).unwrap();
        for _ in 0..10 {
            assert_eq!(evaluate(&hand).unwrap(), first);
        }
        assert_eq!(hand.to_string(), "9D KD JD QD TD");
    }

    #[test]
    fn winning_hands() {
        let res = eval("QS QH 2D 7C 9S");
        assert!(res.is_winner());
        assert_eq!(res.qualifying_rank(), Rank::Queen);

        let res = eval("TS TH 2D 7C 9S");
        assert!(!res.is_winner());
        assert_eq!(res.qualifying_rank(), Rank::Ten);

        let res = eval("AS 2H 3D 4C 5S");
        assert!(res.is_winner());
        assert_eq!(res.qualifying_rank(), Rank::Five);
    }

    #[test]
    fn concurrent_evaluation() {
        let hands = ["TS JS QS KS AS", "KS KH KD 4C 4S", "5S 5H 2D 7C 9S"]
            .map(|s| s.parse::<Hand>().unwrap());
        let expected = hands.map(|h| evaluate(&h).unwrap());

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        for (hand, res) in hands.iter().zip(&expected) {
                            assert_eq!(evaluate(hand).unwrap(), *res);
                        }
                    }
                });
            }
        });
    }

    #[test]
    fn result_to_string() {
        assert_eq!(eval("QS QH 2D 7C 9S").to_string(), "Pair of Queens");
        assert_eq!(eval("KS KH KD 4C 4S").to_string(), "Full House, Kings full");
        assert_eq!(eval("AS 2H 3D 4C 5S").to_string(), "Straight, Five high");
        assert_eq!(eval("6S 6H 2D 6C 9S").to_string(), "Three Sixes");
        assert_eq!(eval("TS JS QS KS AS").to_string(), "Royal Flush");
        assert_eq!(eval("5S 5H 2D 7C 9S").to_string(), "Nothing, Nine high");
    }

    #[test]
    fn category_ordinals() {
        let ordinals = HandCategory::categories()
            .map(|c| c.ordinal())
            .collect::<Vec<_>>();
        assert_eq!(ordinals, (0..10).collect::<Vec<_>>());
        assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
        assert!(HandCategory::FullHouse > HandCategory::Flush);
        assert_eq!(HandCategory::Pair.label(), "Jacks or Better");
    }

    #[test]
    fn all_hands() {
        let mut counts = [0usize; 10];
        Deck::default().for_each(5, |cards| {
            let res = evaluate(&Hand::new(cards).unwrap()).unwrap();
            counts[res.category().ordinal()] += 1;
        });

        assert_eq!(counts[HandCategory::Nothing as usize], 2_062_860);
        assert_eq!(counts[HandCategory::Pair as usize], 337_920);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::Triple as usize], 54_912);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 36);
        assert_eq!(counts[HandCategory::RoyalFlush as usize], 4);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}

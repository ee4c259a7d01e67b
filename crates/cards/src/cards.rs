// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing card definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardsError;

/// A playing card.
///
/// A card is packed in a single byte with the card value in the high bits and
/// the suit in the two low bits:
///
/// ```text
///   +----------+
///   |0vvvvss   |
///   +----------+
///   v = card value (deuce=2,trey=3,...,king=13,ace=14)
///   s = suit (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// so that comparing two cards compares their values first and their suits
/// after. A card serializes as its packed byte, deserializing checks the value
/// bits like [Card::from_value].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Card(u8);

impl Card {
    /// Creates a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// Creates a card from a numeric value in the range 2..=14.
    pub fn from_value(value: u8, suit: Suit) -> Result<Card, CardsError> {
        let rank = Rank::try_from(value)?;
        Ok(Card::new(rank, suit))
    }

    /// The card value, 11 for a Jack up to 14 for an Ace.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0 >> 2
    }

    /// The card rank.
    pub fn rank(&self) -> Rank {
        // The value bits are always set from a valid rank.
        Rank::ALL[(self.value() - Rank::Deuce as u8) as usize]
    }

    /// The card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 & 0x3) as usize]
    }

    /// A dense index in 0..52, unique for each card.
    pub fn id(&self) -> usize {
        (self.value() - Rank::Deuce as u8) as usize * 4 + (self.0 & 0x3) as usize
    }
}

impl TryFrom<u8> for Card {
    type Error = CardsError;

    fn try_from(packed: u8) -> Result<Self, Self::Error> {
        let rank = Rank::try_from(packed >> 2)?;
        Ok(Card::new(rank, Suit::ALL[(packed & 0x3) as usize]))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardsError;

    /// Parses cards like `AS`, `td`, or `10H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank, suit) = match s.char_indices().last() {
            Some((idx, suit)) if idx > 0 => (&s[..idx], suit),
            _ => return Err(CardsError::InvalidCard(s.to_string())),
        };

        let rank = match rank {
            "10" => Rank::Ten,
            r => {
                let mut chars = r.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Rank::from_char(c)?,
                    _ => return Err(CardsError::InvalidCard(s.to_string())),
                }
            }
        };

        Ok(Card::new(rank, Suit::from_char(suit)?))
    }
}

/// Card rank, the discriminant is the card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The numeric card value.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The rank name, e.g. "Queen".
    pub fn name(self) -> &'static str {
        match self {
            Rank::Deuce => "Deuce",
            Rank::Trey => "Trey",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The plural rank name, e.g. "Queens" or "Sixes".
    pub fn plural(self) -> &'static str {
        match self {
            Rank::Deuce => "Deuces",
            Rank::Trey => "Treys",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }

    fn from_char(c: char) -> Result<Rank, CardsError> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(CardsError::InvalidRank(c)),
        };

        Ok(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Rank::ALL[(value - 2) as usize]),
            _ => Err(CardsError::InvalidValue(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit pip symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Checks if this is a red suit.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    fn from_char(c: char) -> Result<Suit, CardsError> {
        match c.to_ascii_uppercase() {
            'C' | '♣' => Ok(Suit::Clubs),
            'D' | '♦' => Ok(Suit::Diamonds),
            'H' | '♥' => Ok(Suit::Hearts),
            'S' | '♠' => Ok(Suit::Spades),
            _ => Err(CardsError::InvalidSuit(c)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

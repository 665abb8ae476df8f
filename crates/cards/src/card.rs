// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use std::{fmt, str::FromStr};

/// Errors returned when building or parsing cards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The rank value is not in the 0..=12 range.
    #[error("invalid rank value {0}, must be 0 <= rank <= 12")]
    InvalidRank(u8),
    /// The suit value is not in the 0..=3 range.
    #[error("invalid suit value {0}, must be 0 <= suit <= 3")]
    InvalidSuit(u8),
    /// The rank symbol is not one of 2-9, T, J, Q, K, A.
    #[error("cannot parse rank from '{0}'")]
    InvalidRankSymbol(char),
    /// The suit symbol is not one of C, D, H, S.
    #[error("cannot parse suit from '{0}'")]
    InvalidSuitSymbol(char),
    /// A card string must have exactly two characters.
    #[error("cannot parse card from '{0}', length must be 2")]
    InvalidCardLength(String),
    /// A sequence of cards must have an even number of characters.
    #[error("cannot parse cards from '{0}', length is not even")]
    InvalidCardsLength(String),
}

/// A Poker card.
///
/// Cards are compared by value: two cards are equal if they have the same rank
/// and suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Create a card from raw rank and suit values.
    ///
    /// Ranks go from 0 (deuce) to 12 (ace), suits from 0 (clubs) to 3 (spades).
    pub fn try_new(rank: u8, suit: u8) -> Result<Card, CardError> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// This card unique id in the 0..52 range.
    pub fn id(&self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_symbol(rank)?, Suit::from_symbol(suit)?))
            }
            _ => Err(CardError::InvalidCardLength(s.to_string())),
        }
    }
}

/// Parses a sequence of cards written back to back, for example `"AsKd"`.
///
/// An empty string parses to no cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    let chars = s.trim().chars().collect::<Vec<_>>();
    if chars.len() % 2 != 0 {
        return Err(CardError::InvalidCardsLength(s.to_string()));
    }

    chars
        .chunks(2)
        .map(|c| Ok(Card::new(Rank::from_symbol(c[0])?, Suit::from_symbol(c[1])?)))
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
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
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Parses a rank symbol, case insensitive.
    pub fn from_symbol(symbol: char) -> Result<Rank, CardError> {
        let rank = match symbol.to_ascii_uppercase() {
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
            _ => return Err(CardError::InvalidRankSymbol(symbol)),
        };

        Ok(rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .nth(value as usize)
            .ok_or(CardError::InvalidRank(value))
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

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_symbol(c),
            _ => Err(CardError::InvalidRankSymbol(s.chars().next().unwrap_or(' '))),
        }
    }
}

/// Card suit.
///
/// Suits have no strength, they are only compared for equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit symbol, case insensitive.
    pub fn from_symbol(symbol: char) -> Result<Suit, CardError> {
        let suit = match symbol.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(CardError::InvalidSuitSymbol(symbol)),
        };

        Ok(suit)
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::suits()
            .nth(value as usize)
            .ok_or(CardError::InvalidSuit(value))
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

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_symbol(c),
            _ => Err(CardError::InvalidSuitSymbol(s.chars().next().unwrap_or(' '))),
        }
    }
}

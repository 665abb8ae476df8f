// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use ahash::AHashSet;
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// Errors returned by deck operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// There are no cards left to draw.
    #[error("deck is empty, {drawn} drawn cards and {left} left cards")]
    Empty {
        /// Number of removed cards.
        drawn: usize,
        /// Number of remaining cards.
        left: usize,
    },
    /// The card has already been removed from the deck.
    #[error("card {0} is already drawn")]
    AlreadyRemoved(Card),
    /// The card is not part of this deck.
    #[error("card {0} is not present in the deck")]
    NotPresent(Card),
    /// A deck must have 52 or 36 cards.
    #[error("invalid deck size {0}, must be 52 or 36")]
    InvalidSize(usize),
    /// A card appears more than once.
    #[error("duplicate card {0} in deck")]
    Duplicate(Card),
    /// A card is not part of a deck of this size.
    #[error("card {card} is not part of a {size} cards deck")]
    NotInShape {
        /// The card.
        card: Card,
        /// The deck size.
        size: usize,
    },
}

/// The cards a deck is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeckShape {
    /// The standard 52 cards deck.
    #[default]
    Full,
    /// The 36 cards deck without deuces, treys, fours, and fives.
    Short,
}

impl DeckShape {
    /// The number of cards in a deck with this shape.
    pub fn size(&self) -> usize {
        match self {
            DeckShape::Full => Deck::SIZE,
            DeckShape::Short => Deck::SHORT_SIZE,
        }
    }

    /// Returns the ranks of the cards in a deck with this shape.
    pub fn ranks(&self) -> impl DoubleEndedIterator<Item = Rank> {
        let lowest = match self {
            DeckShape::Full => Rank::Deuce,
            DeckShape::Short => Rank::Six,
        };

        Rank::ranks().filter(move |&r| r >= lowest)
    }

    /// Checks if a card belongs to a deck with this shape.
    pub fn contains(&self, card: Card) -> bool {
        self.ranks().any(|r| r == card.rank())
    }
}

/// A cards Deck.
///
/// The deck partitions its cards into the remaining cards, in drawing order, and
/// the removed cards. A card is always in exactly one of the two partitions.
#[derive(Debug, Clone)]
pub struct Deck {
    remaining: Vec<Card>,
    removed: Vec<Card>,
}

impl Deck {
    /// The number of cards in the standard deck.
    pub const SIZE: usize = 52;

    /// The number of cards in the short deck.
    pub const SHORT_SIZE: usize = 36;

    /// Creates a new deck with all the cards for the given shape.
    pub fn new(shape: DeckShape) -> Self {
        let remaining = shape
            .ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();

        Self {
            remaining,
            removed: Vec::new(),
        }
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(shape: DeckShape, rng: &mut R) -> Self {
        let mut deck = Self::new(shape);
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from the given cards.
    ///
    /// The cards must be unique and there must be either 52 cards or the 36
    /// cards of the short deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let shape = match cards.len() {
            Self::SIZE => DeckShape::Full,
            Self::SHORT_SIZE => DeckShape::Short,
            size => return Err(DeckError::InvalidSize(size)),
        };

        let mut seen = AHashSet::with_capacity(cards.len());
        for &card in &cards {
            if !shape.contains(card) {
                return Err(DeckError::NotInShape {
                    card,
                    size: shape.size(),
                });
            }

            if !seen.insert(card) {
                return Err(DeckError::Duplicate(card));
            }
        }

        Ok(Self {
            remaining: cards,
            removed: Vec::new(),
        })
    }

    /// Draws the first remaining card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.remaining.is_empty() {
            return Err(DeckError::Empty {
                drawn: self.removed.len(),
                left: self.remaining.len(),
            });
        }

        let card = self.remaining.remove(0);
        self.removed.push(card);
        Ok(card)
    }

    /// Moves a card from the remaining cards to the removed cards.
    pub fn exclude(&mut self, card: Card) -> Result<(), DeckError> {
        if self.is_removed(card) {
            return Err(DeckError::AlreadyRemoved(card));
        }

        let pos = self
            .remaining
            .iter()
            .position(|c| c == &card)
            .ok_or(DeckError::NotPresent(card))?;

        self.remaining.remove(pos);
        self.removed.push(card);
        Ok(())
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.remaining.shuffle(rng);
    }

    /// Puts the removed cards back at the end of the remaining cards.
    pub fn collect(&mut self) {
        self.remaining.append(&mut self.removed);
    }

    /// Puts back all the removed cards and shuffles the deck.
    pub fn collect_and_shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.collect();
        self.shuffle(rng);
    }

    /// Checks if a card has been removed.
    pub fn is_removed(&self, card: Card) -> bool {
        self.removed.contains(&card)
    }

    /// Checks if a card is still in the remaining cards.
    pub fn is_left(&self, card: Card) -> bool {
        self.remaining.contains(&card)
    }

    /// Checks if a card is part of this deck.
    pub fn contains(&self, card: Card) -> bool {
        self.is_left(card) || self.is_removed(card)
    }

    /// The remaining cards in drawing order.
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    /// The removed cards.
    pub fn removed(&self) -> &[Card] {
        &self.removed
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of remaining cards in the deck.
    pub fn count(&self) -> usize {
        self.remaining.len()
    }

    /// Total number of cards, remaining and removed.
    pub fn size(&self) -> usize {
        self.remaining.len() + self.removed.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(DeckShape::Full)
    }
}

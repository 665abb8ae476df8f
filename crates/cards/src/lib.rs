// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerodds cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerodds_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd.to_string(), "KD");
//! ```
//!
//! and a [Deck] type that splits its cards into remaining and removed cards, for
//! shuffling, drawing, and excluding cards that are already known:
//!
//! ```
//! # use pokerodds_cards::{Card, Deck, DeckShape, Rank, Suit};
//! let mut deck = Deck::new_and_shuffled(DeckShape::Short, &mut rand::rng());
//! deck.exclude(Card::new(Rank::Ace, Suit::Hearts)).unwrap();
//!
//! let card = deck.draw().unwrap();
//! assert_ne!(card, Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(deck.count(), 34);
//! assert_eq!(deck.size(), Deck::SHORT_SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, CardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::{Deck, DeckError, DeckShape};

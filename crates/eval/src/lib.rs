// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerodds hand ranking and odds simulator.
//!
//! A [Combination] is a five cards hand classified into a [Category], hands are
//! compared using a [Ranking] that orders the categories, the short deck ranking
//! puts flushes above full houses:
//!
//! ```
//! # use pokerodds_eval::*;
//! let flush = Combination::new(&parse_cards("AhJh9h7h6h").unwrap(), Ranking::STANDARD).unwrap();
//! let full = Combination::new(&parse_cards("KsKdKc6s6d").unwrap(), Ranking::STANDARD).unwrap();
//! assert_eq!(flush.category(), Category::Flush);
//! assert!(flush.less(&full));
//!
//! let flush = Combination::new(flush.cards(), Ranking::SHORT_DECK).unwrap();
//! let full = Combination::new(full.cards(), Ranking::SHORT_DECK).unwrap();
//! assert!(flush.more(&full));
//! ```
//!
//! The best hand of a player can be searched from any number of cards:
//!
//! ```
//! # use pokerodds_eval::*;
//! let cards = parse_cards("AhAdAcThKsTs8h").unwrap();
//! let best = strongest_combination_of(&cards, Ranking::STANDARD).unwrap();
//! assert_eq!(best.category(), Category::FullHouse);
//! assert_eq!(best.main_rank(), Rank::Ace);
//! assert_eq!(best.secondary_rank(), Some(Rank::Ten));
//! ```
//!
//! The [hand_odds] simulator estimates each player winning odds by completing
//! the board with random cards:
//!
//! ```
//! # use pokerodds_eval::*;
//! let hands = vec![parse_cards("KsTs").unwrap(), parse_cards("AhKh").unwrap()];
//! let board = parse_cards("7h8hKd").unwrap();
//! let config = HandOddsConfig::new(hands, board, 1_000, GameConfig::texas());
//!
//! let result = hand_odds(config).unwrap();
//! assert_eq!(result.iterations().len(), 1_000);
//! assert_eq!(result.winning_player(), 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combination;
pub use combination::{COMBINATION_SIZE, Category, Combination, CombinationError, Ranking};

mod game;
pub use game::{ConfigError, Game, GameConfig, Selection};

mod odds;
pub use odds::{
    HandOddsConfig, HandOddsIteration, HandOddsResult, InvariantError, OddsError, hand_odds,
    hand_odds_with_rng,
};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::hand_odds_par;

mod search;
pub use search::{combinations_of, strongest_combination_of, strongest_split_combination};

pub mod subsets;

// Reexport cards types.
pub use pokerodds_cards::{
    Card, CardError, Deck, DeckError, DeckShape, Rank, Suit, parse_cards,
};

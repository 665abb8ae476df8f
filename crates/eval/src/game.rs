// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game variants configuration.
use pokerodds_cards::DeckShape;
use std::fmt;

use crate::combination::{COMBINATION_SIZE, Ranking};

/// Errors returned by invalid game configurations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Custom games have no preset configuration.
    #[error("could not construct config for game {0}")]
    NoPreset(Game),
    /// A player cannot use more cards than a pool holds.
    #[error("cannot use {to_use} of {count} {pool} cards")]
    TooManyToUse {
        /// The pool name.
        pool: &'static str,
        /// The number of cards to use.
        to_use: usize,
        /// The number of cards in the pool.
        count: usize,
    },
    /// A split game must pick exactly five cards.
    #[error("must use 5 cards, got {hole} hole cards and {community} community cards")]
    InvalidSplit {
        /// Hole cards to use.
        hole: usize,
        /// Community cards to use.
        community: usize,
    },
    /// Pooled cards must make at least a five cards hand.
    #[error("{hole} hole cards and {community} community cards cannot make a 5 cards hand")]
    NotEnoughCards {
        /// Hole cards count.
        hole: usize,
        /// Community cards count.
        community: usize,
    },
    /// There must be room for at least one player.
    #[error("max players must be at least 1")]
    NoPlayers,
    /// The deck must have enough cards to deal all players and the board.
    #[error("{needed} cards are needed for {players} players, the deck has {size} cards")]
    DeckTooSmall {
        /// Max players.
        players: usize,
        /// Cards needed to deal all players and the board.
        needed: usize,
        /// Deck size.
        size: usize,
    },
}

/// A game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    /// Texas Hold'em.
    Texas,
    /// Short Deck Hold'em.
    ShortDeck,
    /// Omaha.
    Omaha,
    /// A user defined game.
    Custom,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Game::Texas => "Texas Hold'em",
            Game::ShortDeck => "Short Deck",
            Game::Omaha => "Omaha",
            Game::Custom => "Custom",
        };

        write!(f, "{name}")
    }
}

/// How a player best hand is selected from the hole and community cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Any five cards out of the hole and community cards.
    Pooled,
    /// Exactly `hole` hole cards and `community` community cards.
    Split {
        /// Hole cards to use.
        hole: usize,
        /// Community cards to use.
        community: usize,
    },
}

/// A game variant configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The game variant.
    pub game: Game,
    /// The deck used by this game.
    pub deck: DeckShape,
    /// Hole cards dealt to each player.
    pub hole_cards: usize,
    /// Community cards on a complete board.
    pub community_cards: usize,
    /// Hole cards a player can use for the best hand.
    pub hole_cards_to_use: usize,
    /// Community cards a player can use for the best hand.
    pub community_cards_to_use: usize,
    /// Max number of players.
    pub max_players: usize,
}

impl GameConfig {
    /// Texas Hold'em configuration.
    pub const fn texas() -> Self {
        Self {
            game: Game::Texas,
            deck: DeckShape::Full,
            hole_cards: 2,
            community_cards: 5,
            hole_cards_to_use: 2,
            community_cards_to_use: 5,
            max_players: 10,
        }
    }

    /// Short Deck Hold'em configuration.
    pub const fn short_deck() -> Self {
        Self {
            game: Game::ShortDeck,
            deck: DeckShape::Short,
            hole_cards: 2,
            community_cards: 5,
            hole_cards_to_use: 2,
            community_cards_to_use: 5,
            max_players: 10,
        }
    }

    /// Omaha configuration, a player must use two hole cards and three
    /// community cards.
    pub const fn omaha() -> Self {
        Self {
            game: Game::Omaha,
            deck: DeckShape::Full,
            hole_cards: 4,
            community_cards: 5,
            hole_cards_to_use: 2,
            community_cards_to_use: 3,
            max_players: 10,
        }
    }

    /// Returns the preset configuration for a game.
    pub fn for_game(game: Game) -> Result<Self, ConfigError> {
        match game {
            Game::Texas => Ok(Self::texas()),
            Game::ShortDeck => Ok(Self::short_deck()),
            Game::Omaha => Ok(Self::omaha()),
            Game::Custom => Err(ConfigError::NoPreset(game)),
        }
    }

    /// Creates a custom game configuration.
    ///
    /// If a player can use all the hole and community cards the best hand is
    /// selected from the pooled cards, otherwise it must use exactly the given
    /// number of cards from each pool.
    pub fn custom(
        deck: DeckShape,
        hole_cards: usize,
        community_cards: usize,
        hole_cards_to_use: usize,
        community_cards_to_use: usize,
        max_players: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            game: Game::Custom,
            deck,
            hole_cards,
            community_cards,
            hole_cards_to_use,
            community_cards_to_use,
            max_players,
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks this configuration can deal and rank hands.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players == 0 {
            return Err(ConfigError::NoPlayers);
        }

        let pools = [
            ("hole", self.hole_cards_to_use, self.hole_cards),
            ("community", self.community_cards_to_use, self.community_cards),
        ];

        for (pool, to_use, count) in pools {
            if to_use > count {
                return Err(ConfigError::TooManyToUse {
                    pool,
                    to_use,
                    count,
                });
            }
        }

        match self.selection() {
            Selection::Pooled
                if self.hole_cards.saturating_add(self.community_cards) < COMBINATION_SIZE =>
            {
                return Err(ConfigError::NotEnoughCards {
                    hole: self.hole_cards,
                    community: self.community_cards,
                });
            }
            Selection::Split { hole, community }
                if hole.saturating_add(community) != COMBINATION_SIZE =>
            {
                return Err(ConfigError::InvalidSplit { hole, community });
            }
            _ => {}
        }

        let needed = self
            .max_players
            .checked_mul(self.hole_cards)
            .and_then(|n| n.checked_add(self.community_cards))
            .unwrap_or(usize::MAX);

        if needed > self.deck.size() {
            return Err(ConfigError::DeckTooSmall {
                players: self.max_players,
                needed,
                size: self.deck.size(),
            });
        }

        Ok(())
    }

    /// The categories ranking for this game.
    pub fn ranking(&self) -> Ranking {
        match self.deck {
            DeckShape::Full => Ranking::STANDARD,
            DeckShape::Short => Ranking::SHORT_DECK,
        }
    }

    /// How the best hand is selected for this game.
    pub fn selection(&self) -> Selection {
        let split = Selection::Split {
            hole: self.hole_cards_to_use,
            community: self.community_cards_to_use,
        };

        match self.game {
            Game::Texas | Game::ShortDeck => Selection::Pooled,
            Game::Omaha => split,
            Game::Custom => {
                if self.hole_cards_to_use == self.hole_cards
                    && self.community_cards_to_use == self.community_cards
                {
                    Selection::Pooled
                } else {
                    split
                }
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::texas()
    }
}

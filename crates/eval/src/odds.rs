// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo hand odds simulator.
//!
//! Each trial shuffles a new deck, removes the known hole and board cards,
//! completes the board with random cards, and selects each player best hand.
//! Win and tie statistics are computed from the recorded trials.
use ahash::AHashSet;
use log::{debug, trace};
use pokerodds_cards::{Card, Deck, DeckError};
use rand::prelude::*;

use crate::{
    combination::{COMBINATION_SIZE, Combination, CombinationError},
    game::{ConfigError, GameConfig, Selection},
    search::{strongest_combination_of, strongest_split_combination},
};

/// Errors returned by the odds simulator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    /// A run needs at least one iteration.
    #[error("cannot simulate hand odds for zero iterations")]
    InvalidIterations,
    /// The game configuration is not valid.
    #[error("invalid game config: {0}")]
    Game(#[from] ConfigError),
    /// A run needs at least one player.
    #[error("cannot simulate hand odds without players")]
    NoPlayers,
    /// More players than the game allows.
    #[error("too many players {players}, should be at most {max}")]
    TooManyPlayers {
        /// Number of players.
        players: usize,
        /// Max players for the game.
        max: usize,
    },
    /// A player holds more cards than the game deals.
    #[error("player {player} hand has {size} cards, should be at most {max}")]
    HandTooLarge {
        /// The player index.
        player: usize,
        /// The hand size.
        size: usize,
        /// Hole cards for the game.
        max: usize,
    },
    /// A player holds fewer cards than needed to make a hand.
    #[error("player {player} hand has {size} cards, should be at least {min}")]
    HandTooSmall {
        /// The player index.
        player: usize,
        /// The hand size.
        size: usize,
        /// Min cards needed for a hand.
        min: usize,
    },
    /// The board has more cards than the game deals.
    #[error("board has {size} cards, should be at most {max}")]
    BoardTooLarge {
        /// The board size.
        size: usize,
        /// Community cards for the game.
        max: usize,
    },
    /// A known card is given more than once.
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
    /// A known card is not part of the game deck.
    #[error("card {card} is not in a {size} cards deck")]
    CardNotInDeck {
        /// The card.
        card: Card,
        /// The deck size.
        size: usize,
    },
    /// A player index is out of range.
    #[error("player {player} is out of range, number of players: {players}")]
    PlayerOutOfRange {
        /// The player index.
        player: usize,
        /// Number of players.
        players: usize,
    },
    /// A validated run failed, this is a bug.
    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl OddsError {
    /// Checks if this error is caused by an invalid run configuration.
    pub fn is_config_error(&self) -> bool {
        !matches!(
            self,
            OddsError::PlayerOutOfRange { .. } | OddsError::Invariant(_)
        )
    }

    /// Checks if this error is an internal invariant violation.
    pub fn is_invariant(&self) -> bool {
        matches!(self, OddsError::Invariant(_))
    }
}

impl From<DeckError> for OddsError {
    fn from(e: DeckError) -> Self {
        OddsError::Invariant(e.into())
    }
}

impl From<CombinationError> for OddsError {
    fn from(e: CombinationError) -> Self {
        OddsError::Invariant(e.into())
    }
}

/// Errors that a validated configuration should never produce.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A deck operation failed.
    #[error("deck: {0}")]
    Deck(#[from] DeckError),
    /// A combination could not be built.
    #[error("combination: {0}")]
    Combination(#[from] CombinationError),
}

/// The input of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOddsConfig {
    /// Each player hole cards.
    pub hands: Vec<Vec<Card>>,
    /// The known board cards, may be empty.
    pub board: Vec<Card>,
    /// Number of trials.
    pub iterations: usize,
    /// The game configuration.
    pub game: GameConfig,
}

impl HandOddsConfig {
    /// Creates a new run configuration.
    pub fn new(
        hands: Vec<Vec<Card>>,
        board: Vec<Card>,
        iterations: usize,
        game: GameConfig,
    ) -> Self {
        Self {
            hands,
            board,
            iterations,
            game,
        }
    }

    /// Checks that a run with this configuration can deal all its trials.
    pub fn validate(&self) -> Result<(), OddsError> {
        if self.iterations == 0 {
            return Err(OddsError::InvalidIterations);
        }

        let game = &self.game;
        game.validate()?;

        if self.hands.is_empty() {
            return Err(OddsError::NoPlayers);
        }

        if self.hands.len() > game.max_players {
            return Err(OddsError::TooManyPlayers {
                players: self.hands.len(),
                max: game.max_players,
            });
        }

        let min_hand = match game.selection() {
            Selection::Pooled => COMBINATION_SIZE.saturating_sub(game.community_cards),
            Selection::Split { hole, .. } => hole,
        };

        for (player, hand) in self.hands.iter().enumerate() {
            if hand.len() > game.hole_cards {
                return Err(OddsError::HandTooLarge {
                    player,
                    size: hand.len(),
                    max: game.hole_cards,
                });
            }

            if hand.len() < min_hand {
                return Err(OddsError::HandTooSmall {
                    player,
                    size: hand.len(),
                    min: min_hand,
                });
            }
        }

        if self.board.len() > game.community_cards {
            return Err(OddsError::BoardTooLarge {
                size: self.board.len(),
                max: game.community_cards,
            });
        }

        let mut known = AHashSet::default();
        for &card in self.hands.iter().flatten().chain(&self.board) {
            if !game.deck.contains(card) {
                return Err(OddsError::CardNotInDeck {
                    card,
                    size: game.deck.size(),
                });
            }

            if !known.insert(card) {
                return Err(OddsError::DuplicateCard(card));
            }
        }

        Ok(())
    }
}

/// The outcome of a single trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOddsIteration {
    combinations: Vec<Combination>,
    board: Vec<Card>,
}

impl HandOddsIteration {
    /// Creates an iteration from each player best combination and the board.
    pub fn new(combinations: Vec<Combination>, board: Vec<Card>) -> Self {
        Self {
            combinations,
            board,
        }
    }

    /// Creates an iteration selecting each player best hand on a complete board.
    pub fn evaluate(
        hands: &[Vec<Card>],
        board: Vec<Card>,
        game: &GameConfig,
    ) -> Result<Self, CombinationError> {
        let ranking = game.ranking();
        let selection = game.selection();

        let combinations = hands
            .iter()
            .map(|hand| match selection {
                Selection::Pooled => {
                    let cards = [hand.as_slice(), &board].concat();
                    strongest_combination_of(&cards, ranking)
                }
                Selection::Split { hole, community } => {
                    strongest_split_combination(hand, &board, hole, community, ranking)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(combinations, board))
    }

    /// Each player best combination.
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// The complete board.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Returns the strongest combination, the first one on ties.
    pub fn strongest_combination(&self) -> Option<&Combination> {
        let (first, rest) = self.combinations.split_first()?;
        Some(rest.iter().fold(first, |best, c| if c.more(best) { c } else { best }))
    }

    /// Returns all the players that hold the strongest combination.
    pub fn winners(&self) -> Vec<usize> {
        let Some(best) = self.strongest_combination() else {
            return Vec::new();
        };

        self.combinations
            .iter()
            .enumerate()
            .filter(|(_, c)| c.tie(best))
            .map(|(player, _)| player)
            .collect()
    }

    /// Returns the winner if a single player holds the strongest combination.
    pub fn winner(&self) -> Option<usize> {
        match self.winners().as_slice() {
            &[player] => Some(player),
            _ => None,
        }
    }

    /// Checks if all players tie for the strongest combination.
    ///
    /// When only some of the players tie the trial has no winner but it is not
    /// a tie.
    pub fn is_tie(&self) -> bool {
        let winners = self.winners();
        winners.len() > 1 && winners.len() == self.combinations.len()
    }
}

/// The outcome of a simulation run.
#[derive(Debug, Clone)]
pub struct HandOddsResult {
    config: HandOddsConfig,
    iterations: Vec<HandOddsIteration>,
}

impl HandOddsResult {
    pub(crate) fn new(config: HandOddsConfig, iterations: Vec<HandOddsIteration>) -> Self {
        Self { config, iterations }
    }

    /// The run configuration.
    pub fn config(&self) -> &HandOddsConfig {
        &self.config
    }

    /// The run trials.
    pub fn iterations(&self) -> &[HandOddsIteration] {
        &self.iterations
    }

    /// Number of players.
    pub fn number_of_players(&self) -> usize {
        self.config.hands.len()
    }

    /// The given player hole cards.
    pub fn player_hand(&self, player: usize) -> Result<&[Card], OddsError> {
        self.check_player(player)?;
        Ok(&self.config.hands[player])
    }

    /// The given player best combination for each trial.
    pub fn player_combinations(&self, player: usize) -> Result<Vec<&Combination>, OddsError> {
        self.check_player(player)?;
        Ok(self
            .iterations
            .iter()
            .map(|it| &it.combinations[player])
            .collect())
    }

    /// Number of trials won by the given player, zero for an unknown player.
    pub fn player_wins(&self, player: usize) -> usize {
        self.iterations
            .iter()
            .filter(|it| it.winner() == Some(player))
            .count()
    }

    /// Number of trials won by each player.
    pub fn all_player_wins(&self) -> Vec<usize> {
        let mut wins = vec![0; self.number_of_players()];
        for player in self.iterations.iter().filter_map(HandOddsIteration::winner) {
            wins[player] += 1;
        }

        wins
    }

    /// Fraction of trials won by each player.
    pub fn win_rates(&self) -> Vec<f64> {
        self.all_player_wins()
            .into_iter()
            .map(|wins| self.rate(wins))
            .collect()
    }

    /// Number of trials where all players tie.
    pub fn ties(&self) -> usize {
        self.iterations.iter().filter(|it| it.is_tie()).count()
    }

    /// Fraction of trials where all players tie.
    pub fn tie_percentage(&self) -> f64 {
        self.rate(self.ties())
    }

    /// The player with most wins, the first one if more players have the same
    /// number of wins.
    pub fn winning_player(&self) -> usize {
        let wins = self.all_player_wins();
        let max = wins.iter().copied().max().unwrap_or_default();
        wins.iter().position(|&w| w == max).unwrap_or_default()
    }

    fn rate(&self, count: usize) -> f64 {
        if self.iterations.is_empty() {
            0.0
        } else {
            count as f64 / self.iterations.len() as f64
        }
    }

    fn check_player(&self, player: usize) -> Result<(), OddsError> {
        if player < self.number_of_players() {
            Ok(())
        } else {
            Err(OddsError::PlayerOutOfRange {
                player,
                players: self.number_of_players(),
            })
        }
    }
}

/// Runs a simulation using the thread local random generator.
pub fn hand_odds(config: HandOddsConfig) -> Result<HandOddsResult, OddsError> {
    hand_odds_with_rng(config, &mut rand::rng())
}

/// Runs a simulation using the given random generator.
///
/// ```
/// # use pokerodds_eval::{GameConfig, HandOddsConfig, hand_odds_with_rng, parse_cards};
/// # use rand::{SeedableRng, rngs::StdRng};
/// let hands = vec![parse_cards("AsAd").unwrap(), parse_cards("7c2h").unwrap()];
/// let config = HandOddsConfig::new(hands, vec![], 100, GameConfig::texas());
///
/// let mut rng = StdRng::seed_from_u64(11);
/// let result = hand_odds_with_rng(config, &mut rng).unwrap();
/// assert_eq!(result.iterations().len(), 100);
/// assert_eq!(result.winning_player(), 0);
/// ```
pub fn hand_odds_with_rng<R: Rng>(
    config: HandOddsConfig,
    rng: &mut R,
) -> Result<HandOddsResult, OddsError> {
    config.validate()?;

    debug!(
        "Simulating {} players {} iterations game {}",
        config.hands.len(),
        config.iterations,
        config.game.game
    );

    let iterations = run_trials(&config, config.iterations, rng)?;
    let result = HandOddsResult::new(config, iterations);

    debug!(
        "Simulated {} iterations with {} ties",
        result.iterations.len(),
        result.ties()
    );

    Ok(result)
}

/// Runs the given number of trials for a validated configuration.
pub(crate) fn run_trials<R: Rng>(
    config: &HandOddsConfig,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<HandOddsIteration>, OddsError> {
    let mut iterations = Vec::with_capacity(trials);
    for trial in 0..trials {
        let iteration = deal(config, rng)?;
        trace!("Trial {trial} winner {:?}", iteration.winner());
        iterations.push(iteration);
    }

    Ok(iterations)
}

fn deal<R: Rng>(config: &HandOddsConfig, rng: &mut R) -> Result<HandOddsIteration, OddsError> {
    let game = &config.game;
    let mut deck = Deck::new_and_shuffled(game.deck, rng);

    for &card in config.hands.iter().flatten().chain(&config.board) {
        deck.exclude(card)?;
    }

    let mut board = Vec::with_capacity(game.community_cards);
    board.extend_from_slice(&config.board);
    while board.len() < game.community_cards {
        board.push(deck.draw()?);
    }

    Ok(HandOddsIteration::evaluate(&config.hands, board, game)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Ranking};
    use pokerodds_cards::{DeckShape, Rank, Suit, parse_cards};
    use rand::rngs::StdRng;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn combination(s: &str) -> Combination {
        Combination::new(&cards(s), Ranking::STANDARD).unwrap()
    }

    fn run(config: HandOddsConfig, seed: u64) -> Result<HandOddsResult, OddsError> {
        hand_odds_with_rng(config, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn full_house_on_board() {
        let hands = vec![cards("AhAd")];
        let board = cards("AcThKsTs8h");
        let iteration = HandOddsIteration::evaluate(&hands, board, &GameConfig::texas()).unwrap();

        let best = &iteration.combinations()[0];
        assert_eq!(best.category(), Category::FullHouse);
        assert_eq!(best.main_rank(), Rank::Ace);
        assert_eq!(best.secondary_rank(), Some(Rank::Ten));
        assert_eq!(iteration.winner(), Some(0));
        assert!(!iteration.is_tie());
    }

    #[test]
    fn fixed_boards() {
        let hands = vec![cards("KsTs"), cards("AhKh")];
        let iterations = vec![
            HandOddsIteration::new(
                vec![combination("KsTs7h8hKd"), combination("AhKh7h8hKd")],
                cards("7h8hKd2c3c"),
            ),
            HandOddsIteration::new(
                vec![combination("KsTs2s6s7s"), combination("AhKh7s6sAd")],
                cards("2s6s7sAd3c"),
            ),
            HandOddsIteration::new(
                vec![combination("KsTsThTdAd"), combination("AhKhThTdAd")],
                cards("ThTdAd2c3c"),
            ),
        ];

        let config = HandOddsConfig::new(hands, vec![], 3, GameConfig::texas());
        let result = HandOddsResult::new(config, iterations);

        assert_eq!(result.number_of_players(), 2);
        assert_eq!(result.player_wins(0), 2);
        assert_eq!(result.player_wins(1), 1);
        assert_eq!(result.all_player_wins(), vec![2, 1]);
        assert_eq!(result.ties(), 0);
        assert_eq!(result.winning_player(), 0);

        let rates = result.win_rates();
        assert!((rates[0] - 2.0 / 3.0).abs() < 1e-9);
        assert!((rates[1] - 1.0 / 3.0).abs() < 1e-9);

        assert_eq!(result.player_hand(1).unwrap(), cards("AhKh").as_slice());
        assert_eq!(result.player_combinations(0).unwrap().len(), 3);
        assert_eq!(
            result.player_hand(2),
            Err(OddsError::PlayerOutOfRange {
                player: 2,
                players: 2
            })
        );
        assert!(result.player_combinations(5).is_err());
        assert_eq!(result.player_wins(5), 0);
    }

    #[test]
    fn partial_ties() {
        // Two players split the pot, the third one loses.
        let iteration = HandOddsIteration::new(
            vec![
                combination("AsAdKc7h2s"),
                combination("AhAcKd7s2d"),
                combination("QsQdKh7c2c"),
            ],
            vec![],
        );

        assert_eq!(iteration.winners(), vec![0, 1]);
        assert_eq!(iteration.winner(), None);
        assert!(!iteration.is_tie());
        assert_eq!(iteration.strongest_combination().unwrap().main_rank(), Rank::Ace);

        let iteration = HandOddsIteration::new(
            vec![combination("AsAdKc7h2s"), combination("AhAcKd7s2d")],
            vec![],
        );

        assert!(iteration.is_tie());
        assert_eq!(iteration.winner(), None);

        let empty = HandOddsIteration::new(vec![], vec![]);
        assert!(empty.strongest_combination().is_none());
        assert!(empty.winners().is_empty());
        assert!(!empty.is_tie());
    }

    #[test]
    fn random_boards() {
        let hands = vec![cards("AsAd"), cards("7c2h")];
        let config = HandOddsConfig::new(hands, vec![], 500, GameConfig::texas());
        let result = run(config.clone(), 7).unwrap();

        assert_eq!(result.iterations().len(), 500);
        let wins = result.all_player_wins();
        assert!(wins.iter().sum::<usize>() + result.ties() <= 500);
        assert_eq!(result.winning_player(), 0);
        assert!(result.win_rates()[0] > 0.7);

        for iteration in result.iterations() {
            assert_eq!(iteration.board().len(), 5);
            assert_eq!(iteration.combinations().len(), 2);
            assert!(
                iteration
                    .board()
                    .iter()
                    .all(|c| !config.hands.iter().flatten().any(|h| h == c))
            );
        }

        // Same seed same outcome.
        let other = run(config, 7).unwrap();
        assert_eq!(other.all_player_wins(), wins);
        assert_eq!(other.ties(), result.ties());
    }

    #[test]
    fn complete_board() {
        let hands = vec![cards("AsAd"), cards("KsKd")];
        let board = cards("2c7h9dJcQh");
        let config = HandOddsConfig::new(hands, board.clone(), 20, GameConfig::texas());
        let result = run(config, 1).unwrap();

        assert_eq!(result.all_player_wins(), vec![20, 0]);
        assert_eq!(result.win_rates(), vec![1.0, 0.0]);
        assert!(result.iterations().iter().all(|it| it.board() == board));
    }

    #[test]
    fn board_plays() {
        let hands = vec![cards("2c3d"), cards("4c5d"), cards("6c7d")];
        let board = cards("AhKhQhJhTh");
        let config = HandOddsConfig::new(hands, board, 10, GameConfig::texas());
        let result = run(config, 1).unwrap();

        assert_eq!(result.ties(), 10);
        assert_eq!(result.tie_percentage(), 1.0);
        assert_eq!(result.all_player_wins(), vec![0, 0, 0]);
        assert_eq!(result.winning_player(), 0);
    }

    #[test]
    fn partial_board() {
        let hands = vec![cards("JhJd"), cards("AsKs")];
        let board = cards("Js7s2h");
        let config = HandOddsConfig::new(hands, board.clone(), 100, GameConfig::texas());
        let result = run(config, 3).unwrap();

        for iteration in result.iterations() {
            assert_eq!(&iteration.board()[..3], board.as_slice());
            let category = iteration.combinations()[0].category();
            let strength = Ranking::STANDARD.strength(category);
            assert!(strength >= Ranking::STANDARD.strength(Category::ThreeOfAKind));
        }
    }

    #[test]
    fn omaha_uses_two_hole_cards() {
        let hands = vec![cards("AsAdKsKd"), cards("QhJhTh9h")];
        let config = HandOddsConfig::new(hands.clone(), vec![], 100, GameConfig::omaha());
        let result = run(config, 5).unwrap();

        for (player, hand) in hands.iter().enumerate() {
            for combination in result.player_combinations(player).unwrap() {
                let used = combination
                    .cards()
                    .iter()
                    .filter(|c| hand.contains(c))
                    .count();
                assert_eq!(used, 2);
            }
        }
    }

    #[test]
    fn short_deck_boards() {
        let hands = vec![cards("AsKs"), cards("6h6d")];
        let config = HandOddsConfig::new(hands, vec![], 100, GameConfig::short_deck());
        let result = run(config, 9).unwrap();

        for iteration in result.iterations() {
            assert!(iteration.board().iter().all(|c| c.rank() >= Rank::Six));
            assert!(iteration.combinations()[0].ranking().is_short_deck());
        }
    }

    #[test]
    fn invalid_iterations() {
        let hands = vec![cards("AsAd"), cards("KsKd")];
        let err = run(HandOddsConfig::new(hands, vec![], 0, GameConfig::texas()), 0).unwrap_err();
        assert_eq!(err, OddsError::InvalidIterations);
        assert!(err.is_config_error());
        assert!(!err.is_invariant());
    }

    #[test]
    fn invariant_errors() {
        let err = OddsError::from(DeckError::Empty { drawn: 52, left: 0 });
        assert!(err.is_invariant());
        assert!(!err.is_config_error());
        assert!(matches!(
            err,
            OddsError::Invariant(InvariantError::Deck(DeckError::Empty { .. }))
        ));

        let mut deck = Deck::new(DeckShape::Short);
        let card = Card::new(Rank::Deuce, Suit::Clubs);
        let err = OddsError::from(deck.exclude(card).unwrap_err());
        assert_eq!(
            err,
            OddsError::Invariant(InvariantError::Deck(DeckError::NotPresent(card)))
        );
        assert!(err.is_invariant());

        let err = OddsError::from(CombinationError::WrongSize(4));
        assert!(err.is_invariant());
        assert!(!err.is_config_error());

        let err = OddsError::PlayerOutOfRange {
            player: 3,
            players: 2,
        };
        assert!(!err.is_invariant());
        assert!(!err.is_config_error());
    }

    #[test]
    fn too_many_players() {
        let deck = Deck::new(DeckShape::Full);
        let hands = deck
            .remaining()
            .chunks(2)
            .take(23)
            .map(|h| h.to_vec())
            .collect::<Vec<_>>();

        let err = run(HandOddsConfig::new(hands, vec![], 10, GameConfig::texas()), 0).unwrap_err();
        assert_eq!(
            err,
            OddsError::TooManyPlayers {
                players: 23,
                max: 10
            }
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn invalid_cards() {
        let texas = GameConfig::texas();
        let check = |hands: Vec<Vec<Card>>, board: Vec<Card>, game: GameConfig| {
            HandOddsConfig::new(hands, board, 10, game)
                .validate()
                .unwrap_err()
        };

        assert_eq!(check(vec![], vec![], texas), OddsError::NoPlayers);

        assert_eq!(
            check(vec![cards("AsAd"), cards("KsKdQs")], vec![], texas),
            OddsError::HandTooLarge {
                player: 1,
                size: 3,
                max: 2
            }
        );

        assert_eq!(
            check(vec![cards("AsAd")], cards("2c3c4c5c6c7c"), texas),
            OddsError::BoardTooLarge { size: 6, max: 5 }
        );

        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(
            check(vec![cards("AsAd"), cards("AsKd")], vec![], texas),
            OddsError::DuplicateCard(card)
        );

        assert_eq!(
            check(vec![cards("AsAd")], cards("Ad"), texas),
            OddsError::DuplicateCard(Card::new(Rank::Ace, Suit::Diamonds))
        );

        assert_eq!(
            check(vec![cards("As2d")], vec![], GameConfig::short_deck()),
            OddsError::CardNotInDeck {
                card: Card::new(Rank::Deuce, Suit::Diamonds),
                size: 36
            }
        );

        assert_eq!(
            check(vec![cards("AsAdKsKd"), cards("Qh")], vec![], GameConfig::omaha()),
            OddsError::HandTooSmall {
                player: 1,
                size: 1,
                min: 2
            }
        );
    }
}

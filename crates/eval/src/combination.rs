// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hands ranking.
//!
//! A [Combination] is a five cards hand that classifies itself into a
//! [Category] and compares with other hands using the category strength, the
//! main rank, the secondary rank, and the kickers, in this order.
//!
//! The strength of the categories is given by a [Ranking], the standard ranking
//! orders the categories from high card to straight flush, the short deck ranking
//! swaps flush and full house and accepts A-6-7-8-9 as the lowest straight.
use pokerodds_cards::{Card, Rank};
use std::{cmp::Ordering, fmt};

/// The number of cards in a combination.
pub const COMBINATION_SIZE: usize = 5;

/// Errors returned when building combinations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinationError {
    /// A combination must have exactly five cards.
    #[error("cannot construct a combination with {0} cards, must be 5")]
    WrongSize(usize),
    /// A combination cannot contain the same card twice.
    #[error("cannot construct a combination with duplicate card {0}")]
    Duplicate(Card),
    /// There are not enough cards to select a five cards combination.
    #[error("not enough cards {count}, need at least {required}")]
    NotEnoughCards {
        /// The number of cards given.
        count: usize,
        /// The minimum number of cards.
        required: usize,
    },
    /// A strength ordering must list each category exactly once.
    #[error("invalid categories ordering, each category must appear once")]
    InvalidOrdering,
    /// The hole and board picks must add up to five cards.
    #[error("invalid picks {hole} hole cards and {board} board cards, must add up to 5")]
    InvalidPicks {
        /// Number of hole cards to pick.
        hole: usize,
        /// Number of board cards to pick.
        board: usize,
    },
}

/// A hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// No other category applies.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl Category {
    /// All categories from the weakest to the strongest in the standard ranking.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// Checks if hands in this category are compared by a secondary rank.
    pub fn has_secondary(&self) -> bool {
        matches!(self, Category::TwoPair | Category::FullHouse)
    }

    /// Checks if hands in this category are compared by kickers.
    pub fn has_kickers(&self) -> bool {
        matches!(
            self,
            Category::HighCard
                | Category::Pair
                | Category::TwoPair
                | Category::ThreeOfAKind
                | Category::FourOfAKind
                | Category::Flush
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The categories strength ordering and straight rules used to compare hands.
///
/// Only the comparison between categories changes with the ordering, the
/// classification of a hand always checks for straight flush, four of a kind,
/// full house, flush, straight, three of a kind, two pair, and pair in this
/// order. This is correct for the built-in rankings as a flush and a full house
/// can never overlap, custom orderings that rely on a different precedence
/// between overlapping categories are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ranking {
    /// Strength of each category indexed by category.
    strength: [u8; 9],
    /// Accepts A-6-7-8-9 as a nine high straight.
    short_deck: bool,
}

impl Ranking {
    /// The standard ranking.
    pub const STANDARD: Ranking = Ranking {
        strength: [0, 1, 2, 3, 4, 5, 6, 7, 8],
        short_deck: false,
    };

    /// The short deck ranking, flush beats full house.
    pub const SHORT_DECK: Ranking = Ranking {
        strength: [0, 1, 2, 3, 4, 6, 5, 7, 8],
        short_deck: true,
    };

    /// Creates a ranking from categories ordered from the weakest to the strongest.
    pub fn new(order: [Category; 9], short_deck: bool) -> Result<Ranking, CombinationError> {
        let mut strength = [u8::MAX; 9];
        for (pos, category) in order.into_iter().enumerate() {
            let slot = &mut strength[category as usize];
            if *slot != u8::MAX {
                return Err(CombinationError::InvalidOrdering);
            }

            *slot = pos as u8;
        }

        Ok(Ranking {
            strength,
            short_deck,
        })
    }

    /// The strength of a category, higher is stronger.
    #[inline]
    pub fn strength(&self, category: Category) -> u8 {
        self.strength[category as usize]
    }

    /// Checks if this ranking uses the short deck straight rules.
    pub fn is_short_deck(&self) -> bool {
        self.short_deck
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Ranking::STANDARD
    }
}

/// A five cards poker hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    /// The cards sorted by rank.
    cards: [Card; COMBINATION_SIZE],
    ranking: Ranking,
}

impl Combination {
    /// Creates a combination from exactly five unique cards.
    pub fn new(cards: &[Card], ranking: Ranking) -> Result<Self, CombinationError> {
        let mut cards: [Card; COMBINATION_SIZE] = cards
            .try_into()
            .map_err(|_| CombinationError::WrongSize(cards.len()))?;

        cards.sort_by_key(|c| (c.rank(), c.id()));
        if let Some(w) = cards.windows(2).find(|w| w[0] == w[1]) {
            return Err(CombinationError::Duplicate(w[0]));
        }

        Ok(Self { cards, ranking })
    }

    /// The cards in this combination sorted by rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The ranking used to compare this combination.
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    /// Classifies this combination.
    pub fn category(&self) -> Category {
        let counts = self.rank_counts();
        let count_of = |n: usize| counts.iter().filter(|&&c| c == n).count();

        let flush = self.is_flush();
        let straight = self.straight_high().is_some();

        if flush && straight {
            Category::StraightFlush
        } else if counts.contains(&4) {
            Category::FourOfAKind
        } else if count_of(3) == 3 && count_of(2) == 2 {
            Category::FullHouse
        } else if flush {
            Category::Flush
        } else if straight {
            Category::Straight
        } else if counts.contains(&3) {
            Category::ThreeOfAKind
        } else if count_of(2) == 4 {
            Category::TwoPair
        } else if count_of(2) == 2 {
            Category::Pair
        } else {
            Category::HighCard
        }
    }

    /// The highest rank in this combination.
    pub fn highest_rank(&self) -> Rank {
        self.cards[COMBINATION_SIZE - 1].rank()
    }

    /// The rank that defines this combination strength within its category.
    ///
    /// This is the rank of the largest group of cards for multiples, the highest
    /// card for straights, flushes, and high cards. The wheel A-2-3-4-5 straight
    /// main rank is five, the short deck A-6-7-8-9 straight main rank is nine.
    pub fn main_rank(&self) -> Rank {
        match self.category() {
            Category::Straight | Category::StraightFlush => {
                self.straight_high().unwrap_or_else(|| self.highest_rank())
            }
            Category::HighCard | Category::Flush => self.highest_rank(),
            _ => self.groups()[0].1,
        }
    }

    /// The rank of the lower pair for two pair, the rank of the pair for a
    /// full house, none for other categories.
    pub fn secondary_rank(&self) -> Option<Rank> {
        if self.category().has_secondary() {
            Some(self.groups()[1].1)
        } else {
            None
        }
    }

    /// The cards used to break ties sorted by rank from the highest.
    ///
    /// For high card and flush these are the four cards below the highest card,
    /// for pairs, trips, and quads these are the cards that are not part of a
    /// group, other categories have no kickers.
    pub fn kickers(&self) -> Vec<Card> {
        let category = self.category();
        if !category.has_kickers() {
            return Vec::new();
        }

        if matches!(category, Category::HighCard | Category::Flush) {
            return self.cards[..COMBINATION_SIZE - 1]
                .iter()
                .rev()
                .copied()
                .collect();
        }

        let counts = self.rank_counts();
        self.cards
            .iter()
            .zip(counts)
            .rev()
            .filter_map(|(card, count)| (count == 1).then_some(*card))
            .collect()
    }

    /// Compares this combination with another.
    ///
    /// Combinations with different rankings are both classified and compared
    /// with the lowest of the two rankings, so that the order is the same from
    /// either side.
    pub fn compare(&self, other: &Combination) -> Ordering {
        if self.ranking != other.ranking {
            let ranking = self.ranking.min(other.ranking);
            return self
                .with_ranking(ranking)
                .compare(&other.with_ranking(ranking));
        }

        let (this_cat, other_cat) = (self.category(), other.category());

        self.ranking
            .strength(this_cat)
            .cmp(&self.ranking.strength(other_cat))
            .then_with(|| self.main_rank().cmp(&other.main_rank()))
            .then_with(|| {
                if this_cat.has_secondary() {
                    self.secondary_rank().cmp(&other.secondary_rank())
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| {
                if this_cat.has_kickers() {
                    let this_kickers = self.kickers().into_iter().map(|c| c.rank());
                    let other_kickers = other.kickers().into_iter().map(|c| c.rank());
                    this_kickers.cmp(other_kickers)
                } else {
                    Ordering::Equal
                }
            })
    }

    /// Checks if this combination is weaker than the other.
    pub fn less(&self, other: &Combination) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Checks if this combination is stronger than the other.
    pub fn more(&self, other: &Combination) -> bool {
        other.less(self)
    }

    /// Checks if this combination has the same strength of the other.
    pub fn tie(&self, other: &Combination) -> bool {
        !self.less(other) && !other.less(self)
    }

    fn with_ranking(&self, ranking: Ranking) -> Combination {
        Combination {
            cards: self.cards,
            ranking,
        }
    }

    fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// Returns the straight highest rank if the cards form a straight.
    fn straight_high(&self) -> Option<Rank> {
        let has = |rank: Rank| self.cards.iter().any(|c| c.rank() == rank);

        if has(Rank::Ace) {
            let run = |ranks: [Rank; 3]| ranks.into_iter().all(has);

            if has(Rank::King) {
                run([Rank::Queen, Rank::Jack, Rank::Ten]).then_some(Rank::Ace)
            } else if has(Rank::Deuce) {
                run([Rank::Trey, Rank::Four, Rank::Five]).then_some(Rank::Five)
            } else if self.ranking.short_deck && has(Rank::Six) {
                run([Rank::Seven, Rank::Eight, Rank::Nine]).then_some(Rank::Nine)
            } else {
                None
            }
        } else {
            // Consecutive ranks have distinct offsets from the lowest rank that
            // add up to 0 + 1 + 2 + 3 + 4.
            let lowest = self.cards[0].rank() as usize;
            let offsets = self.cards.map(|c| c.rank() as usize - lowest);
            let distinct = offsets.windows(2).all(|w| w[0] != w[1]);
            let sum = offsets.iter().sum::<usize>();

            (distinct && sum == 10).then(|| self.highest_rank())
        }
    }

    /// For each card the number of cards with the same rank.
    fn rank_counts(&self) -> [usize; COMBINATION_SIZE] {
        self.cards.map(|c| self.cards.iter().filter(|o| o.rank() == c.rank()).count())
    }

    /// Ranks groups as (count, rank) sorted by count and rank from the highest.
    fn groups(&self) -> Vec<(usize, Rank)> {
        let mut groups = Vec::with_capacity(COMBINATION_SIZE);
        for (card, count) in self.cards.iter().zip(self.rank_counts()) {
            if !groups.contains(&(count, card.rank())) {
                groups.push((count, card.rank()));
            }
        }

        groups.sort_by(|a, b| b.cmp(a));
        groups
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category())?;
        for (pos, card) in self.cards.iter().rev().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerodds_cards::{Deck, DeckShape, Suit, parse_cards};
    use rand::{SeedableRng, prelude::*, rngs::StdRng};

    fn combination(s: &str) -> Combination {
        Combination::new(&parse_cards(s).unwrap(), Ranking::STANDARD).unwrap()
    }

    fn short_combination(s: &str) -> Combination {
        Combination::new(&parse_cards(s).unwrap(), Ranking::SHORT_DECK).unwrap()
    }

    fn ranks(cards: &[Card]) -> Vec<Rank> {
        cards.iter().map(|c| c.rank()).collect()
    }

    #[test]
    fn new_combination() {
        let cards = parse_cards("2s2d3cKcTs").unwrap();
        let c = Combination::new(&cards, Ranking::STANDARD).unwrap();
        assert_eq!(
            ranks(c.cards()),
            vec![Rank::Deuce, Rank::Deuce, Rank::Trey, Rank::Ten, Rank::King]
        );

        let err = Combination::new(&cards[..4], Ranking::STANDARD).unwrap_err();
        assert_eq!(err, CombinationError::WrongSize(4));

        let cards = parse_cards("2s2d3cKcTs9h").unwrap();
        let err = Combination::new(&cards, Ranking::STANDARD).unwrap_err();
        assert_eq!(err, CombinationError::WrongSize(6));

        let cards = parse_cards("2s2s3cKcTs").unwrap();
        let err = Combination::new(&cards, Ranking::STANDARD).unwrap_err();
        assert_eq!(err, CombinationError::Duplicate("2s".parse().unwrap()));
    }

    #[test]
    fn categories() {
        assert_eq!(combination("2s7d3cKcTs").category(), Category::HighCard);
        assert_eq!(combination("2s7d3cKcKs").category(), Category::Pair);
        assert_eq!(combination("2s2d3cKcKs").category(), Category::TwoPair);
        assert_eq!(combination("2s2d2cQcKs").category(), Category::ThreeOfAKind);
        assert_eq!(combination("3s4d5c6c7s").category(), Category::Straight);
        assert_eq!(combination("2s3sQs7sKs").category(), Category::Flush);
        assert_eq!(combination("2s2d2cKcKs").category(), Category::FullHouse);
        assert_eq!(combination("2s2d2c2hKs").category(), Category::FourOfAKind);
        assert_eq!(combination("3s4s5s6s7s").category(), Category::StraightFlush);
        assert_eq!(combination("As2s3s4s5s").category(), Category::StraightFlush);
        assert_eq!(combination("AhKhQhJhTh").category(), Category::StraightFlush);
    }

    #[test]
    fn straights() {
        let wheel = combination("As2d3c4h5s");
        assert_eq!(wheel.category(), Category::Straight);
        assert_eq!(wheel.main_rank(), Rank::Five);

        let broadway = combination("AsKdQcJhTs");
        assert_eq!(broadway.category(), Category::Straight);
        assert_eq!(broadway.main_rank(), Rank::Ace);

        let nine_high = combination("5s6d7c8h9s");
        assert_eq!(nine_high.category(), Category::Straight);
        assert_eq!(nine_high.main_rank(), Rank::Nine);

        assert_eq!(combination("2s4d5c6h7s").category(), Category::HighCard);
        assert_eq!(combination("QsKdAc2h3s").category(), Category::HighCard);
        assert_eq!(combination("As6d7c8h9s").category(), Category::HighCard);

        // The wheel is the lowest straight.
        assert!(wheel.less(&combination("2s3d4c5h6s")));
        assert!(broadway.more(&nine_high));
    }

    #[test]
    fn short_deck_straights() {
        let low = short_combination("As6d7c8h9s");
        assert_eq!(low.category(), Category::Straight);
        assert_eq!(low.main_rank(), Rank::Nine);
        assert!(low.less(&short_combination("6s7d8c9hTs")));

        let low_flush = short_combination("As6s7s8s9s");
        assert_eq!(low_flush.category(), Category::StraightFlush);
        assert_eq!(low_flush.main_rank(), Rank::Nine);
    }

    #[test]
    fn short_deck_ranking() {
        let flush = short_combination("6s8sQs7sKs");
        let full_house = short_combination("AsAdAcKcKs");
        assert!(flush.more(&full_house));
        assert!(full_house.less(&flush));

        let flush = combination("6s8sQs7sKs");
        let full_house = combination("AsAdAcKcKs");
        assert!(flush.less(&full_house));
    }

    #[test]
    fn custom_ranking() {
        let mut order = Category::ALL;
        order.swap(0, 8);
        let ranking = Ranking::new(order, false).unwrap();
        assert_eq!(ranking.strength(Category::HighCard), 8);
        assert_eq!(ranking.strength(Category::StraightFlush), 0);
        assert!(!ranking.is_short_deck());

        let mut order = Category::ALL;
        order[1] = Category::HighCard;
        assert_eq!(
            Ranking::new(order, false),
            Err(CombinationError::InvalidOrdering)
        );

        assert_eq!(Ranking::new(Category::ALL, false), Ok(Ranking::STANDARD));
    }

    #[test]
    fn main_ranks() {
        assert_eq!(combination("2s7d3cKcTs").main_rank(), Rank::King);
        assert_eq!(combination("2s7d3cKcKs").main_rank(), Rank::King);
        assert_eq!(combination("2s2d3cKcKs").main_rank(), Rank::King);
        assert_eq!(combination("2s2d2cQcKs").main_rank(), Rank::Deuce);
        assert_eq!(combination("3s4d5c6c7s").main_rank(), Rank::Seven);
        assert_eq!(combination("2s3sQs7sKs").main_rank(), Rank::King);
        assert_eq!(combination("2s2d2cKcKs").main_rank(), Rank::Deuce);
        assert_eq!(combination("KsKdKc2c2s").main_rank(), Rank::King);
        assert_eq!(combination("2s2d2c2hKs").main_rank(), Rank::Deuce);
        assert_eq!(combination("3s4s5s6s7s").main_rank(), Rank::Seven);
    }

    #[test]
    fn secondary_ranks() {
        assert_eq!(combination("2s7d3cKcTs").secondary_rank(), None);
        assert_eq!(combination("2s3sQs7sKs").secondary_rank(), None);
        assert_eq!(combination("2s2d2cKcKs").secondary_rank(), Some(Rank::King));
        assert_eq!(combination("KsKdKc2c2s").secondary_rank(), Some(Rank::Deuce));
        assert_eq!(combination("2s2d3cKcKs").secondary_rank(), Some(Rank::Deuce));
    }

    #[test]
    fn kickers() {
        use Rank::*;
        assert_eq!(
            ranks(&combination("2s7d3cKcTs").kickers()),
            vec![Ten, Seven, Trey, Deuce]
        );
        assert_eq!(
            ranks(&combination("2s2d3cKcTs").kickers()),
            vec![King, Ten, Trey]
        );
        assert_eq!(ranks(&combination("2s2d3cKcKs").kickers()), vec![Trey]);
        assert_eq!(
            ranks(&combination("2s2d2cQcKs").kickers()),
            vec![King, Queen]
        );
        assert_eq!(ranks(&combination("2s2d2c2hKs").kickers()), vec![King]);
        assert_eq!(
            ranks(&combination("2s3sQs7sKs").kickers()),
            vec![Queen, Seven, Trey, Deuce]
        );
        assert!(combination("2s2d2cKcKs").kickers().is_empty());
        assert!(combination("3s4d5c6c7s").kickers().is_empty());
    }

    #[test]
    fn categories_order() {
        let hands = [
            "2s7d3cKcTs",
            "2s7d3cKcKs",
            "2s2d3cKcKs",
            "2s2d2cQcKs",
            "3s4d5c6c7s",
            "2s3sQs7sKs",
            "2s2d2cKcKs",
            "2s2d2c2hKs",
            "3s4s5s6s7s",
        ]
        .map(combination);

        for (i, a) in hands.iter().enumerate() {
            assert_eq!(a.category(), Category::ALL[i]);
            for (j, b) in hands.iter().enumerate() {
                assert_eq!(a.compare(b), i.cmp(&j), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn compare_within_category() {
        // Main rank.
        assert!(combination("AsAd3c4c9s").more(&combination("KsKdQcJcTh")));
        // Secondary rank.
        assert!(combination("AsAdTcTh2s").more(&combination("AcAh9c9h2d")));
        assert!(combination("KsKdKcTcTh").more(&combination("KhKcKd9c9h")));
        // Kickers stop at the first difference.
        assert!(combination("AsKd9c4c2s").more(&combination("AhQdJcTc9s")));
        assert!(combination("AsKd9c4c3s").more(&combination("AhKh9d4d2d")));
        assert!(combination("7s7d9c4c3s").less(&combination("7h7c9d5d2d")));
        // Flush kickers.
        assert!(combination("As9s7s5s3s").more(&combination("Ah9h7h5h2h")));
        // Straights only compare the high card.
        assert!(combination("6s7d8c9hTs").tie(&combination("6h7c8d9cTd")));
        // Same hand different suits.
        assert!(combination("AsAdTcTh2s").tie(&combination("AcAhTsTd2d")));
        assert!(combination("2s7d3cKcTs").tie(&combination("2h7c3dKdTh")));
    }

    #[test]
    fn kt_vs_ak() {
        assert!(combination("KsTs7h8hKd").less(&combination("AhKh7h8hKd")));
        assert!(combination("KsTs2s6s7s").more(&combination("AhKh7s6sAd")));
        assert!(combination("KsTsThTdAd").more(&combination("AhKhThTdAd")));
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let deck = Deck::new_and_shuffled(Default::default(), &mut rng);
            let mut cards = deck.remaining()[..5].to_vec();
            let sorted = Combination::new(&cards, Ranking::STANDARD).unwrap();

            cards.shuffle(&mut rng);
            let shuffled = Combination::new(&cards, Ranking::STANDARD).unwrap();

            assert_eq!(sorted.category(), shuffled.category());
            assert!(sorted.tie(&shuffled));
            assert_eq!(sorted, shuffled);
        }
    }

    #[test]
    fn weak_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let hands = (0..200)
            .map(|_| {
                let deck = Deck::new_and_shuffled(Default::default(), &mut rng);
                Combination::new(&deck.remaining()[..5], Ranking::STANDARD).unwrap()
            })
            .collect::<Vec<_>>();

        for a in &hands {
            assert!(a.tie(a));
            for b in &hands {
                let outcomes = [a.less(b), b.less(a), a.tie(b)];
                assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1, "{a} vs {b}");
                assert_eq!(a.tie(b), b.tie(a));
            }
        }
    }

    #[test]
    fn mixed_rankings() {
        let flush = combination("6s8sQs7sKs");
        let full = short_combination("AsAdAcKcKh");

        let outcomes = [flush.less(&full), full.less(&flush), flush.tie(&full)];
        assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
        assert_eq!(flush.compare(&full), full.compare(&flush).reverse());

        // The standard ranking sorts first so the full house wins.
        assert!(Ranking::STANDARD < Ranking::SHORT_DECK);
        assert!(flush.less(&full));
        assert!(full.more(&flush));

        // A-6-7-8-9 is ace high with the standard rules, below a pair.
        let short_straight = short_combination("As6d7c8h9s");
        let pair = combination("2c2dKs8s9h");
        assert!(short_straight.less(&pair));
        assert!(pair.more(&short_straight));
        assert!(!pair.less(&short_straight));
    }

    #[test]
    fn display() {
        let c = Combination::new(
            &[
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Spades),
                Card::new(Rank::Ace, Suit::Clubs),
            ],
            Ranking::STANDARD,
        )
        .unwrap();
        assert_eq!(c.to_string(), "Full House [AS AH AC TS TH]");
    }

    fn count_categories(shape: DeckShape, ranking: Ranking) -> [usize; 9] {
        let deck = Deck::new(shape);
        let cards = deck.remaining();
        let mut counts = [0usize; 9];
        let mut hand = [cards[0]; COMBINATION_SIZE];

        crate::subsets::for_each_ksubset(cards.len(), COMBINATION_SIZE, |idx| {
            for (pos, &i) in idx.iter().enumerate() {
                hand[pos] = cards[i];
            }

            let c = Combination::new(&hand, ranking).unwrap();
            counts[c.category() as usize] += 1;
        });

        counts
    }

    #[test]
    #[ignore]
    fn all_hands_categories() {
        let counts = count_categories(DeckShape::Full, Ranking::STANDARD);
        assert_eq!(
            counts,
            [1302540, 1098240, 123552, 54912, 10200, 5108, 3744, 624, 40]
        );

        let counts = count_categories(DeckShape::Short, Ranking::SHORT_DECK);
        assert_eq!(
            counts,
            [122400, 193536, 36288, 16128, 6120, 480, 1728, 288, 24]
        );
        assert_eq!(counts.iter().sum::<usize>(), 376992);
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand search.
//!
//! A player best hand is the strongest five cards combination that can be
//! selected from their cards. Games that pool the hole cards with the board
//! search all the five cards subsets of the pool, games that require a fixed
//! number of cards from each pool search the product of the hole subsets and the
//! board subsets.
use pokerodds_cards::{Card, Deck};

use crate::{
    combination::{COMBINATION_SIZE, Combination, CombinationError, Ranking},
    subsets::{for_each_ksubset, ksubsets, nck},
};

/// Returns all the five cards combinations of the given cards sorted from the
/// strongest to the weakest.
pub fn combinations_of(
    cards: &[Card],
    ranking: Ranking,
) -> Result<Vec<Combination>, CombinationError> {
    if cards.len() < COMBINATION_SIZE {
        return Err(CombinationError::NotEnoughCards {
            count: cards.len(),
            required: COMBINATION_SIZE,
        });
    }

    let capacity = if cards.len() <= Deck::SIZE {
        nck(cards.len(), COMBINATION_SIZE)
    } else {
        0
    };

    let mut combinations = Vec::with_capacity(capacity);
    let mut hand = [cards[0]; COMBINATION_SIZE];
    let mut result = Ok(());

    for_each_ksubset(cards.len(), COMBINATION_SIZE, |idx| {
        if result.is_err() {
            return;
        }

        for (pos, &i) in idx.iter().enumerate() {
            hand[pos] = cards[i];
        }

        match Combination::new(&hand, ranking) {
            Ok(c) => combinations.push(c),
            Err(e) => result = Err(e),
        }
    });

    result?;

    combinations.sort_by(|a, b| b.compare(a));
    Ok(combinations)
}

/// Returns the strongest five cards combination of the given cards.
pub fn strongest_combination_of(
    cards: &[Card],
    ranking: Ranking,
) -> Result<Combination, CombinationError> {
    let mut combinations = combinations_of(cards, ranking)?;
    Ok(combinations.swap_remove(0))
}

/// Returns the strongest combination that uses exactly `hole_picks` of the hole
/// cards and `board_picks` of the board cards.
pub fn strongest_split_combination(
    hole: &[Card],
    board: &[Card],
    hole_picks: usize,
    board_picks: usize,
    ranking: Ranking,
) -> Result<Combination, CombinationError> {
    if hole_picks.saturating_add(board_picks) != COMBINATION_SIZE {
        return Err(CombinationError::InvalidPicks {
            hole: hole_picks,
            board: board_picks,
        });
    }

    for (cards, picks) in [(hole, hole_picks), (board, board_picks)] {
        if cards.len() < picks {
            return Err(CombinationError::NotEnoughCards {
                count: cards.len(),
                required: picks,
            });
        }
    }

    let board_subsets = ksubsets(board, board_picks);
    let mut best: Option<Combination> = None;

    for hole_cards in ksubsets(hole, hole_picks) {
        for board_cards in &board_subsets {
            let mut hand = hole_cards.clone();
            hand.extend_from_slice(board_cards);

            let combination = Combination::new(&hand, ranking)?;
            if best.as_ref().is_none_or(|b| combination.more(b)) {
                best = Some(combination);
            }
        }
    }

    // Both pools are large enough so there is at least one combination.
    best.ok_or(CombinationError::NotEnoughCards {
        count: hole.len() + board.len(),
        required: COMBINATION_SIZE,
    })
}

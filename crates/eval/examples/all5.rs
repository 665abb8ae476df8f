// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all5
// ...
// Full deck hands  2598960
//
// High Card:       1302540
// Pair:            1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use pokerodds_eval::{subsets::for_each_ksubset, *};

fn count_categories(shape: DeckShape, ranking: Ranking) -> [usize; 9] {
    let deck = Deck::new(shape);
    let cards = deck.remaining();
    let mut counts = [0usize; 9];
    let mut hand = [cards[0]; COMBINATION_SIZE];

    for_each_ksubset(cards.len(), COMBINATION_SIZE, |idx| {
        for (pos, &i) in idx.iter().enumerate() {
            hand[pos] = cards[i];
        }

        if let Ok(c) = Combination::new(&hand, ranking) {
            counts[c.category() as usize] += 1;
        }
    });

    counts
}

fn main() {
    for (name, shape, ranking) in [
        ("Full", DeckShape::Full, Ranking::STANDARD),
        ("Short", DeckShape::Short, Ranking::SHORT_DECK),
    ] {
        let now = Instant::now();
        let counts = count_categories(shape, ranking);
        let elapsed = now.elapsed().as_secs_f64();

        let total = counts.iter().sum::<usize>();
        println!("{name} deck hands  {total}");
        println!("Elapsed:         {:.3}s", elapsed);
        println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

        for category in Category::ALL {
            let label = format!("{category}:");
            println!("{label:<17}{}", counts[category as usize]);
        }

        println!();
    }
}

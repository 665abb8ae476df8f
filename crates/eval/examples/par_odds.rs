// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_odds
// ```

use std::time::Instant;

use pokerodds_eval::*;

fn main() {
    const ITERATIONS: usize = 200_000;
    const NUM_TASKS: usize = 4;

    let hands = ["AsAd", "KhQh", "7c6c"]
        .into_iter()
        .map(|h| parse_cards(h).unwrap())
        .collect::<Vec<_>>();
    let config = HandOddsConfig::new(hands, vec![], ITERATIONS, GameConfig::texas());

    let now = Instant::now();
    let result = hand_odds(config.clone()).unwrap();
    let elapsed = now.elapsed().as_secs_f64();
    println!("Sequential:      {:.3}s {:?}", elapsed, result.win_rates());

    let now = Instant::now();
    let result = hand_odds_par(config, NUM_TASKS).unwrap();
    let elapsed = now.elapsed().as_secs_f64();
    println!("Parallel:        {:.3}s {:?}", elapsed, result.win_rates());
    println!("Ties:            {:.4}", result.tie_percentage());
}

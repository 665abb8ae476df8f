// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel odds simulation.
use log::debug;
use rand::prelude::*;
use std::{panic, thread};

use crate::odds::{HandOddsConfig, HandOddsResult, OddsError, run_trials};

/// Runs a simulation splitting the trials across `num_tasks` parallel tasks.
///
/// Each task uses its own random generator and decks, trials are collected in
/// task order so the result aggregates as a sequential run.
pub fn hand_odds_par(
    config: HandOddsConfig,
    num_tasks: usize,
) -> Result<HandOddsResult, OddsError> {
    config.validate()?;

    let num_tasks = num_tasks.clamp(1, config.iterations);
    let trials_per_task = config.iterations.div_ceil(num_tasks);

    debug!(
        "Simulating {} players {} iterations game {} with {num_tasks} tasks",
        config.hands.len(),
        config.iterations,
        config.game.game
    );

    let tasks = thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let start = task_id * trials_per_task;
                let trials = trials_per_task.min(config.iterations.saturating_sub(start));
                let config = &config;
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();
                    run_trials(config, trials, &mut rng)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let mut iterations = Vec::with_capacity(config.iterations);
    for task in tasks {
        iterations.extend(task?);
    }

    let result = HandOddsResult::new(config, iterations);

    debug!(
        "Simulated {} iterations with {} ties",
        result.iterations().len(),
        result.ties()
    );

    Ok(result)
}

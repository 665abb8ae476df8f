// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation results output.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::{io, time::Duration};

use pokerodds_eval::HandOddsResult;

/// Prints each player win rate, the winner in green, followed by the ties rate
/// and the simulation time.
pub fn print_result(
    w: &mut impl io::Write,
    result: &HandOddsResult,
    elapsed: Duration,
) -> Result<()> {
    let winner = result.winning_player();

    for (player, rate) in result.win_rates().into_iter().enumerate() {
        let hand = result
            .player_hand(player)?
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let text = format!("[{hand}]: {:.1}%\n", rate * 100.0);
        let text = if player == winner {
            text.green()
        } else {
            text.red()
        };

        queue!(w, style::PrintStyledContent(text))?;
    }

    let ties = format!("Ties: {:.1}%\n", result.tie_percentage() * 100.0);
    let time = format!("{} ms\n", elapsed.as_millis());
    queue!(
        w,
        style::PrintStyledContent(ties.yellow()),
        style::PrintStyledContent(time.white())
    )?;

    w.flush()?;

    Ok(())
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerodds CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::error;
use std::{io, process, time::Instant};

use pokerodds_eval::{
    Card, Game, GameConfig, HandOddsConfig, hand_odds, hand_odds_par, parse_cards,
};

pub mod output;

#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare hand odds with an optional board.
    HandOdds(HandOddsArgs),
}

#[derive(Debug, clap::Args)]
struct HandOddsArgs {
    /// Each player hole cards (e.g. AsKd).
    #[clap(long, num_args = 1.., required = true)]
    hands: Vec<String>,
    /// The known board cards (e.g. 7h8hKd).
    #[clap(long, short)]
    board: Option<String>,
    /// Number of simulated boards.
    #[clap(long, short, default_value_t = 1000)]
    iterations: usize,
    /// The game variant.
    #[clap(long, short, value_enum, default_value_t = GameArg::Texas)]
    game: GameArg,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameArg {
    Texas,
    ShortDeck,
    Omaha,
}

impl From<GameArg> for Game {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::Texas => Game::Texas,
            GameArg::ShortDeck => Game::ShortDeck,
            GameArg::Omaha => Game::Omaha,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let res = match cli.command {
        Command::HandOdds(args) => run_hand_odds(args),
    };

    if let Err(e) = res {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run_hand_odds(args: HandOddsArgs) -> Result<()> {
    let game = GameConfig::for_game(args.game.into())?;

    let hands = args
        .hands
        .iter()
        .map(|h| parse_hand(h))
        .collect::<Result<Vec<_>>>()?;

    let board = match &args.board {
        Some(b) => parse_hand(b)?,
        None => Vec::new(),
    };

    let config = HandOddsConfig::new(hands, board, args.iterations, game);

    let now = Instant::now();
    let result = if args.tasks > 1 {
        hand_odds_par(config, args.tasks as usize)?
    } else {
        hand_odds(config)?
    };

    output::print_result(&mut io::stdout(), &result, now.elapsed())?;

    Ok(())
}

fn parse_hand(s: &str) -> Result<Vec<Card>> {
    parse_cards(s).with_context(|| format!("cannot parse cards {s}"))
}

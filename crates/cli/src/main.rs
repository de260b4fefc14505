// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

use drawpoker_eval::Card;

mod game;
mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals a five cards draw hand to each player and shows the winner.
    Play {
        /// The number of players.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        players: u8,
        /// The seed used to shuffle the deck.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Evaluates a five cards hand and recommends the cards to discard.
    Eval {
        /// The hand cards, for example: AS KD 10h 2c "9 hearts".
        #[clap(num_args = 5, required = true)]
        cards: Vec<Card>,
        /// Prints the report as JSON.
        #[clap(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Play { players, seed } => {
            let config = game::Config {
                players: players as usize,
                seed,
            };

            game::run(config)
        }
        Command::Eval { cards, json } => {
            let report = report::Report::new(cards);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{report}");
            }

            Ok(())
        }
    }
}

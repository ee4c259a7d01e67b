// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::io;

use videopoker_game::{Chips, Config, DeckDealer, Paytable, Session};

pub mod report;
pub mod terminal;

#[derive(Debug, Parser)]
#[command(about = "Jacks or Better video poker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a video poker session.
    Play {
        /// The starting bankroll.
        #[clap(long, short, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
        amount: u32,
        /// The bet used when pressing enter at the bet prompt.
        #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
        bet: u32,
        /// Seed the deck shuffling for repeatable games.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Evaluate a five cards hand, e.g. `eval AS KS QS JS TS`.
    Eval {
        /// The hand cards.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Evaluate all five cards hands and show the categories frequencies.
    Stats,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paytable = Paytable::default();
    let stdout = io::stdout();

    match cli.command {
        Command::Play { amount, bet, seed } => {
            let config = Config {
                start_amount: Chips::new(amount),
                default_bet: Chips::new(bet),
                paytable,
            };

            let dealer = match seed {
                Some(seed) => DeckDealer::from_seed(seed),
                None => DeckDealer::default(),
            };

            let mut session = Session::new(config, dealer);
            terminal::run(&mut session, io::stdin().lock(), stdout.lock())
        }
        Command::Eval { cards } => report::eval(&cards, &paytable, stdout.lock()),
        Command::Stats => report::stats(&paytable, stdout.lock()),
    }
}

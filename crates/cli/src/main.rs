// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Headsup CLI, compares two five cards poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::{io, process::ExitCode};

use report::{Command, Options};

pub mod report;

#[derive(Debug, Parser)]
#[clap(about = "Compares a player hand against an opponent hand")]
struct Cli {
    /// The player hand, 5 space separated cards like "AS KD TC 9H 2S".
    #[clap(required_unless_present = "matrix")]
    player: Option<String>,
    /// The opponent hand.
    #[clap(required_unless_present = "matrix")]
    opponent: Option<String>,
    /// Cross check the reference hands instead of comparing two hands.
    #[clap(long, conflicts_with_all = ["player", "opponent"])]
    matrix: bool,
    /// Write the report as JSON.
    #[clap(long)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn options(self) -> Options {
        let command = match (self.player, self.opponent) {
            (Some(player), Some(opponent)) if !self.matrix => Command::Compare { player, opponent },
            _ => Command::Matrix,
        };

        Options {
            command,
            json: self.json,
        }
    }
}

fn main() -> ExitCode {
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
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let options = cli.options();
    report::run(&options, &mut io::stdout().lock())
}

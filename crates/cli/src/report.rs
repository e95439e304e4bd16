// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Comparison reports.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Serialize;
use std::{fmt, io::Write};

use headsup_eval::{Hand, HandValue, Outcome, compare};

/// The reference hands sorted from strongest to weakest.
pub const REFERENCE_HANDS: [&str; 9] = [
    "KS AS TS QS JS",
    "AS AD AC AH JD",
    "2S AH 2H AS AC",
    "2H 3H 5H 6H 7H",
    "3D 4C 5H 6H 2S",
    "AH AC 5H 6H AS",
    "2S 2H 4H 5S 4C",
    "AH AC 5H 6H 7S",
    "4S 5H 6H TS AC",
];

/// What the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compare a player hand against an opponent hand.
    Compare {
        /// The player hand string.
        player: String,
        /// The opponent hand string.
        opponent: String,
    },
    /// Cross check the reference hands.
    Matrix,
}

/// The command options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The command to run.
    pub command: Command,
    /// Write reports as JSON.
    pub json: bool,
}

/// A hand with its classification.
#[derive(Debug, Serialize)]
pub struct HandReport {
    /// The hand cards sorted by rank.
    pub hand: String,
    /// The hand classification.
    pub value: HandValue,
}

impl HandReport {
    fn new(hand: &Hand) -> Self {
        Self {
            hand: hand.to_string(),
            value: HandValue::eval(hand),
        }
    }
}

/// The report for a player against opponent comparison.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The player hand.
    pub player: HandReport,
    /// The opponent hand.
    pub opponent: HandReport,
    /// The outcome for the player.
    pub outcome: Outcome,
}

impl Report {
    /// Parses and compares two hands.
    pub fn new(player: &str, opponent: &str) -> Result<Self> {
        let p = Hand::new(player).with_context(|| format!("Invalid player hand '{player}'"))?;
        let o =
            Hand::new(opponent).with_context(|| format!("Invalid opponent hand '{opponent}'"))?;

        let outcome = compare(&p, &o)?;
        debug!("{p} vs {o}: {outcome}");

        Ok(Self {
            player: HandReport::new(&p),
            opponent: HandReport::new(&o),
            outcome,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player:   {}   {}", self.player.hand, self.player.value)?;
        writeln!(f, "Opponent: {}   {}", self.opponent.hand, self.opponent.value)?;
        write!(f, "Outcome:  {}", self.outcome)
    }
}

/// A cross check comparison that did not give the expected outcome.
#[derive(Debug, Serialize)]
pub struct Mismatch {
    /// The player hand.
    pub player: String,
    /// The opponent hand.
    pub opponent: String,
    /// The expected outcome.
    pub expected: Outcome,
    /// The comparison outcome.
    pub outcome: Outcome,
}

/// The result of a cross check over a list of hands.
#[derive(Debug, Serialize)]
pub struct MatrixReport {
    /// Number of comparisons.
    pub comparisons: usize,
    /// Comparisons with unexpected outcome.
    pub mismatches: Vec<Mismatch>,
}

impl MatrixReport {
    /// Compares every pair of a list of hands sorted from strongest to weakest.
    pub fn new(hands: &[&str]) -> Result<Self> {
        let hands = hands
            .iter()
            .map(|h| Hand::new(h).with_context(|| format!("Invalid hand '{h}'")))
            .collect::<Result<Vec<_>>>()?;

        let mut comparisons = 0;
        let mut mismatches = Vec::new();
        for (i, h1) in hands.iter().enumerate() {
            for (j, h2) in hands.iter().enumerate() {
                let expected = Outcome::from(j.cmp(&i));
                let outcome = compare(h1, h2)?;
                comparisons += 1;

                if outcome != expected {
                    warn!("{h1} vs {h2}: expected {expected} got {outcome}");
                    mismatches.push(Mismatch {
                        player: h1.to_string(),
                        opponent: h2.to_string(),
                        expected,
                        outcome,
                    });
                }
            }
        }

        info!(
            "Cross checked {} hands with {} mismatches",
            hands.len(),
            mismatches.len()
        );

        Ok(Self {
            comparisons,
            mismatches,
        })
    }

    /// Checks if all comparisons had the expected outcome.
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl fmt::Display for MatrixReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.mismatches {
            writeln!(
                f,
                "{} vs {}: expected {} got {}",
                m.player, m.opponent, m.expected, m.outcome
            )?;
        }

        write!(
            f,
            "{} comparisons, {} mismatches",
            self.comparisons,
            self.mismatches.len()
        )
    }
}

/// Runs a command writing its report to `out`.
///
/// Returns false if a cross check has mismatches.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<bool> {
    match &options.command {
        Command::Compare { player, opponent } => {
            let report = Report::new(player, opponent)?;
            write_report(out, &report, options.json)?;
            Ok(true)
        }
        Command::Matrix => {
            let report = MatrixReport::new(&REFERENCE_HANDS)?;
            write_report(out, &report, options.json)?;
            Ok(report.is_ok())
        }
    }
}

fn write_report<W, R>(out: &mut W, report: &R, json: bool) -> Result<()>
where
    W: Write,
    R: Serialize + fmt::Display,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{report}")?;
    }

    Ok(())
}

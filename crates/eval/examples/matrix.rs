// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Cross checks a list of hands sorted from strongest to weakest, each hand
// must win against the hands after it, lose against the hands before it and
// tie with itself.
//
// ```bash
// $ cargo r --example matrix
// KS AS TS QS JS   Straight Flush
// AS AD AC AH JD   Four of a Kind (A)
// ...
// 81 comparisons, 0 mismatches
//
// $ cargo r --example matrix -- "KS AS TS QS JS" "2S AH 2H AS AC" "4S 5H 6H TS AC"
// ```
use clap::Parser;
use std::process::ExitCode;

use headsup_eval::*;

/// The default list of hands, one for each category.
const HANDS: [&str; 9] = [
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

#[derive(Debug, Parser)]
struct Cli {
    /// Hands sorted from strongest to weakest.
    hands: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let hands = if cli.hands.is_empty() {
        HANDS.iter().map(|h| Hand::new(h)).collect::<Result<Vec<_>>>()?
    } else {
        cli.hands
            .iter()
            .map(|h| Hand::new(h))
            .collect::<Result<Vec<_>>>()?
    };

    for hand in &hands {
        println!("{hand}   {}", HandValue::eval(hand));
    }

    let mut mismatches = 0;
    for (i, h1) in hands.iter().enumerate() {
        for (j, h2) in hands.iter().enumerate() {
            // Earlier hands are stronger.
            let expected = Outcome::from(j.cmp(&i));
            let outcome = compare(h1, h2)?;
            if outcome != expected {
                println!("{h1} vs {h2}: expected {expected} got {outcome}");
                mismatches += 1;
            }
        }
    }

    println!(
        "\n{} comparisons, {mismatches} mismatches",
        hands.len() * hands.len()
    );

    Ok(if mismatches == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

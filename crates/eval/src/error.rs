// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use headsup_cards::ParseCardError;
use thiserror::Error;

/// Errors returned when building or comparing hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card token could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
    /// A hand was not made of exactly 5 cards.
    #[error("a hand must have 5 cards, found {0}")]
    CardCount(usize),
    /// A high card comparison was given sequences that are not 5 cards each.
    #[error("cannot compare {player} player cards with {opponent} opponent cards")]
    Structural {
        /// Number of player cards.
        player: usize,
        /// Number of opponent cards.
        opponent: usize,
    },
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, Error>;

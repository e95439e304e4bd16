// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker hand evaluator.
//!
//! Classifies five cards poker hands and compares two hands heads up to find
//! if the first hand wins, loses or ties against the second.
//!
//! To use the evaluator create the hands from their cards tokens and use
//! [compare] to get the outcome for the first hand:
//!
//! ```
//! # use headsup_eval::*;
//! let full_house = Hand::new("2S AH 2H AS AC")?;
//! let flush = Hand::new("2H 3H 5H 6H 7H")?;
//! assert_eq!(compare(&full_house, &flush)?, Outcome::Win);
//!
//! // The wheel is the lowest straight.
//! let wheel = Hand::new("2H 3D 4C 5S AH")?;
//! assert_eq!(HandValue::eval(&wheel).rank(), HandRank::Straight);
//! assert_eq!(wheel.compare(&Hand::new("6H 7D 8C 9S TH")?)?, Outcome::Loss);
//! # Ok::<(), Error>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod compare;
pub use compare::{Outcome, compare, compare_high_cards};

pub mod error;
pub use error::{Error, Result};

pub mod eval;
pub use eval::{HandRank, HandValue};

pub mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use headsup_cards::{Card, ParseCardError, Rank, Suit};

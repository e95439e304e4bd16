// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Headsup Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use headsup_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! or to parse them from their two characters token:
//!
//! ```
//! # use headsup_cards::{Card, ParseCardError, Rank, Suit};
//! let ah = "AH".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//!
//! assert_eq!("1H".parse::<Card>(), Err(ParseCardError::InvalidRank('1')));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};

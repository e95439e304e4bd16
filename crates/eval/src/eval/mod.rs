// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification.
//!
//! A hand is classified in two steps, the [HandValue::from_groups] pattern
//! detector looks at same rank cards (pairs, trips, quads) and
//! [HandValue::eval] combines the groups with the flush and straight checks
//! to get the hand best category.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Hand, Rank};

mod groups;

/// The hand category, from weakest to strongest.
///
/// Categories are ordered by their discriminant, the derived [Ord] follows
/// that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, no straight, no flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair = 1,
    /// Two pairs of different ranks.
    TwoPair = 2,
    /// Three cards of the same rank.
    ThreeOfAKind = 3,
    /// Five cards in sequence.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three of a kind and a pair.
    FullHouse = 6,
    /// Four cards of the same rank.
    FourOfAKind = 7,
    /// Five cards in sequence of the same suit.
    StraightFlush = 8,
}

impl HandRank {
    /// Returns all categories from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// A hand classification.
///
/// The category and the ranks used to break ties between hands with the same
/// category, for example the pair rank for [HandRank::OnePair] or the high
/// and low pairs for [HandRank::TwoPair]. Categories that are compared by
/// high card only use [HandValue::NO_RANK] for both ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    primary: Rank,
    secondary: Rank,
}

impl HandValue {
    /// The tie break rank for categories compared by high card.
    pub const NO_RANK: Rank = Rank::LOWEST;

    /// Creates a classification.
    pub const fn new(rank: HandRank, primary: Rank, secondary: Rank) -> Self {
        Self {
            rank,
            primary,
            secondary,
        }
    }

    /// Creates a classification that has no tie break ranks.
    pub const fn high_cards(rank: HandRank) -> Self {
        Self::new(rank, Self::NO_RANK, Self::NO_RANK)
    }

    /// Evaluates a hand and returns its best classification.
    ///
    /// ```
    /// # use headsup_eval::*;
    /// let hand = Hand::new("2S AH 2H AS AC").unwrap();
    /// let value = HandValue::eval(&hand);
    /// assert_eq!(value.rank(), HandRank::FullHouse);
    /// assert_eq!(value.primary(), Rank::Ace);
    /// assert_eq!(value.secondary(), Rank::Deuce);
    /// ```
    pub fn eval(hand: &Hand) -> Self {
        let same_suit = hand.same_suit();
        let sequenced = hand.is_sequenced();
        let groups = Self::from_groups(hand.rank_counts());

        let value = if same_suit && sequenced {
            Self::high_cards(HandRank::StraightFlush)
        } else if matches!(groups.rank, HandRank::FourOfAKind | HandRank::FullHouse) {
            groups
        } else if same_suit {
            Self::high_cards(HandRank::Flush)
        } else if sequenced {
            Self::high_cards(HandRank::Straight)
        } else {
            // Three of a kind, pairs, or high card.
            groups
        };

        trace!("{hand} evaluates to {value}");
        value
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The first tie break rank.
    pub fn primary(&self) -> Rank {
        self.primary
    }

    /// The second tie break rank.
    pub fn secondary(&self) -> Rank {
        self.secondary
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            HandRank::FullHouse | HandRank::TwoPair => {
                write!(f, "{} ({}, {})", self.rank, self.primary, self.secondary)
            }
            HandRank::FourOfAKind | HandRank::ThreeOfAKind | HandRank::OnePair => {
                write!(f, "{} ({})", self.rank, self.primary)
            }
            _ => write!(f, "{}", self.rank),
        }
    }
}

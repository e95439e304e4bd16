// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hand.
use ahash::AHashMap;
use std::{fmt, str::FromStr};

use crate::{Card, Error, Rank, Result};

/// A five cards poker hand.
///
/// The cards are sorted by ascending rank when the hand is created and the
/// number of cards for each rank is computed once, a hand is never changed
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; Hand::SIZE],
    counts: AHashMap<Rank, u8>,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from a string of 5 whitespace separated card tokens.
    ///
    /// ```
    /// # use headsup_eval::{Error, Hand, ParseCardError};
    /// let hand = Hand::new("KS AS TS QS JS").unwrap();
    /// assert_eq!(hand.to_string(), "TS JS QS KS AS");
    ///
    /// assert_eq!(
    ///     Hand::new("1S AH 2H AS AC"),
    ///     Err(Error::Parse(ParseCardError::InvalidRank('1')))
    /// );
    /// assert_eq!(Hand::new("AS AH 2H AS"), Err(Error::CardCount(4)));
    /// ```
    pub fn new(s: &str) -> Result<Self> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<std::result::Result<Vec<Card>, _>>()?;
        Self::from_cards(&cards)
    }

    /// Creates a hand from a slice of 5 cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self> {
        let mut cards =
            <[Card; Hand::SIZE]>::try_from(cards).map_err(|_| Error::CardCount(cards.len()))?;
        cards.sort_by_key(|c| c.rank());

        let mut counts = AHashMap::with_capacity(Hand::SIZE);
        for card in &cards {
            *counts.entry(card.rank()).or_insert(0) += 1;
        }

        Ok(Self { cards, counts })
    }

    /// The hand cards sorted by ascending rank.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards for each rank in this hand.
    pub fn rank_counts(&self) -> &AHashMap<Rank, u8> {
        &self.counts
    }

    /// Checks if all cards have the same suit.
    pub fn same_suit(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// Checks if the cards ranks form a sequence.
    ///
    /// The ace is also accepted below the deuce for the wheel (A-2-3-4-5), as
    /// cards are sorted this is the gap between the five and the ace at the
    /// end of the hand.
    pub fn is_sequenced(&self) -> bool {
        let ranks = self.cards.map(|c| c.rank());
        (0..Hand::SIZE - 1).all(|i| {
            let (lo, hi) = (ranks[i], ranks[i + 1]);
            if lo.succ() == Some(hi) {
                return true;
            }

            i == Hand::SIZE - 2 && lo == Rank::Five && hi == Rank::Ace && ranks[0] == Rank::Deuce
        })
    }

    /// Checks if this hand is the A-2-3-4-5 straight.
    pub fn is_wheel(&self) -> bool {
        self.cards[0].rank() == Rank::Deuce
            && self.cards[Hand::SIZE - 1].rank() == Rank::Ace
            && self.is_sequenced()
    }

    /// The cards in showdown order, sorted by ascending rank except for the
    /// wheel where the ace plays low and comes first.
    pub fn showdown_order(&self) -> [Card; Hand::SIZE] {
        let mut cards = self.cards;
        if self.is_wheel() {
            cards.rotate_right(1);
        }
        cards
    }
}

impl FromStr for Hand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Hand::new(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Same rank groups detection.
use ahash::AHashMap;

use super::{HandRank, HandValue};
use crate::Rank;

impl HandValue {
    /// Classifies a hand by its same rank groups only.
    ///
    /// The `counts` map has the number of cards for each rank in the hand,
    /// suits and sequences are ignored so the result is one of four of a kind,
    /// full house, three of a kind, two pair, one pair or high card.
    pub fn from_groups(counts: &AHashMap<Rank, u8>) -> Self {
        // Ranks bucketed by their count, a count of 5 cannot happen with a
        // single deck and is ignored.
        let mut buckets: [Vec<Rank>; 5] = Default::default();
        for (&rank, &count) in counts {
            if let Some(bucket) = buckets.get_mut(count as usize) {
                bucket.push(rank);
            }
        }

        if let Some(&quads) = buckets[4].first() {
            return HandValue::new(HandRank::FourOfAKind, quads, quads);
        }

        match (buckets[3].first(), buckets[2].as_slice()) {
            (Some(&trips), [pair, ..]) => HandValue::new(HandRank::FullHouse, trips, *pair),
            (Some(&trips), []) => HandValue::new(HandRank::ThreeOfAKind, trips, trips),
            (None, [p1, p2, ..]) => {
                // The map has no order, normalize high and low pairs.
                HandValue::new(HandRank::TwoPair, *p1.max(p2), *p1.min(p2))
            }
            (None, [pair]) => HandValue::new(HandRank::OnePair, *pair, *pair),
            (None, []) => HandValue::high_cards(HandRank::HighCard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hand;

    fn groups(s: &str) -> HandValue {
        HandValue::from_groups(Hand::new(s).unwrap().rank_counts())
    }

    #[test]
    fn groups_patterns() {
        use HandRank::*;

        assert_eq!(
            groups("JS JD JC JH 3D"),
            HandValue::new(FourOfAKind, Rank::Jack, Rank::Jack)
        );
        assert_eq!(
            groups("KH 9C KD 9S KS"),
            HandValue::new(FullHouse, Rank::King, Rank::Nine)
        );
        assert_eq!(
            groups("7H 7C 2D 9S 7S"),
            HandValue::new(ThreeOfAKind, Rank::Seven, Rank::Seven)
        );
        assert_eq!(
            groups("QH 3C 3D 9S 9C"),
            HandValue::new(TwoPair, Rank::Nine, Rank::Trey)
        );
        assert_eq!(
            groups("QH 3C 5D 9S 9C"),
            HandValue::new(OnePair, Rank::Nine, Rank::Nine)
        );
        assert_eq!(groups("QH 3C 5D 9S TC"), HandValue::high_cards(HighCard));

        // Flushes and straights are not groups.
        assert_eq!(groups("2H 3H 4H 5H 6H"), HandValue::high_cards(HighCard));
    }

    #[test]
    fn groups_two_pair_order() {
        // Same pairs in any order give high and low pair.
        for hand in ["2S 2H KH KS 4C", "KS KH 2H 2S 4C", "4C 2S KH 2H KS"] {
            assert_eq!(
                groups(hand),
                HandValue::new(HandRank::TwoPair, Rank::King, Rank::Deuce)
            );
        }

        let mut counts = AHashMap::default();
        counts.insert(Rank::Deuce, 2);
        counts.insert(Rank::Ace, 2);
        counts.insert(Rank::Five, 1);
        assert_eq!(
            HandValue::from_groups(&counts),
            HandValue::new(HandRank::TwoPair, Rank::Ace, Rank::Deuce)
        );
    }

    #[test]
    fn groups_ignore_five_of_a_kind() {
        let mut counts = AHashMap::default();
        counts.insert(Rank::Ace, 5);
        assert_eq!(
            HandValue::from_groups(&counts),
            HandValue::high_cards(HandRank::HighCard)
        );
    }
}

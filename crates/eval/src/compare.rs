// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads up hands comparison.
use log::trace;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Error, Hand, HandRank, HandValue, Result};

/// The outcome of a comparison for the player hand against the opponent hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player hand wins.
    Win,
    /// The player hand loses.
    Loss,
    /// The hands tie.
    Tie,
}

impl Outcome {
    /// The outcome seen from the opponent side.
    pub fn reverse(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Tie => "Tie",
        };

        write!(f, "{outcome}")
    }
}

impl Hand {
    /// Compares this hand against an opponent hand, see [compare].
    pub fn compare(&self, opponent: &Hand) -> Result<Outcome> {
        compare(self, opponent)
    }
}

/// Compares a player hand against an opponent hand.
///
/// The hand with the higher category wins, hands with the same category are
/// compared with the category tie break ranks first and then by high card.
/// Four of a kind, full house and three of a kind only compare the group
/// rank, kickers are not used.
///
/// ```
/// # use headsup_eval::*;
/// let straight_flush = Hand::new("2H 3H 4H 5H 6H").unwrap();
/// let quads = Hand::new("AS AD AC AH JD").unwrap();
/// assert_eq!(compare(&straight_flush, &quads).unwrap(), Outcome::Win);
/// assert_eq!(compare(&quads, &straight_flush).unwrap(), Outcome::Loss);
/// assert_eq!(compare(&quads, &quads).unwrap(), Outcome::Tie);
/// ```
pub fn compare(player: &Hand, opponent: &Hand) -> Result<Outcome> {
    let pv = HandValue::eval(player);
    let ov = HandValue::eval(opponent);

    let outcome = if pv.rank() != ov.rank() {
        Outcome::from(pv.rank().cmp(&ov.rank()))
    } else {
        match pv.rank() {
            HandRank::StraightFlush | HandRank::Flush | HandRank::Straight | HandRank::HighCard => {
                high_cards(player, opponent)?
            }
            HandRank::FourOfAKind | HandRank::FullHouse | HandRank::ThreeOfAKind => {
                Outcome::from(pv.primary().cmp(&ov.primary()))
            }
            HandRank::TwoPair => match pv
                .primary()
                .cmp(&ov.primary())
                .then(pv.secondary().cmp(&ov.secondary()))
            {
                Ordering::Equal => high_cards(player, opponent)?,
                ord => Outcome::from(ord),
            },
            HandRank::OnePair => match pv.primary().cmp(&ov.primary()) {
                Ordering::Equal => high_cards(player, opponent)?,
                ord => Outcome::from(ord),
            },
        }
    };

    trace!("{player} [{pv}] vs {opponent} [{ov}]: {outcome}");
    Ok(outcome)
}

fn high_cards(player: &Hand, opponent: &Hand) -> Result<Outcome> {
    compare_high_cards(&player.showdown_order(), &opponent.showdown_order())
}

/// Compares two sequences of 5 cards sorted by ascending rank.
///
/// Cards are compared from the highest to the lowest position and the first
/// rank that differs decides the outcome, returns [Outcome::Tie] if all ranks
/// are equal and [Error::Structural] unless both sequences have 5 cards.
pub fn compare_high_cards(player: &[Card], opponent: &[Card]) -> Result<Outcome> {
    if player.len() != Hand::SIZE || opponent.len() != Hand::SIZE {
        return Err(Error::Structural {
            player: player.len(),
            opponent: opponent.len(),
        });
    }

    let ord = player
        .iter()
        .rev()
        .zip(opponent.iter().rev())
        .map(|(p, o)| p.rank().cmp(&o.rank()))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal);

    Ok(Outcome::from(ord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};
    use rand::prelude::*;

    fn cmp(player: &str, opponent: &str) -> Outcome {
        let player = Hand::new(player).unwrap();
        let opponent = Hand::new(opponent).unwrap();
        compare(&player, &opponent).unwrap()
    }

    #[test]
    fn compare_scenarios() {
        // Identical four of a kind.
        assert_eq!(cmp("AS AD AC AH JD", "AS AD AC AH JD"), Outcome::Tie);
        // Straight flush wins of four of a kind.
        assert_eq!(cmp("2H 3H 4H 5H 6H", "AS AD AC AH JD"), Outcome::Win);
        // Full house wins of flush.
        assert_eq!(cmp("2S AH 2H AS AC", "2H 3H 5H 6H 7H"), Outcome::Win);
        // Equal straight is tie.
        assert_eq!(cmp("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S"), Outcome::Tie);
        // Three of a kind wins of two pair.
        assert_eq!(cmp("2S 2H 4H 5S 4C", "AH AC 5H 6H AS"), Outcome::Loss);
        // Highest card wins.
        assert_eq!(cmp("4S 5H 6H TS AC", "3S 5H 6H TS AC"), Outcome::Win);
    }

    #[test]
    fn compare_labelled_pairs() {
        let pairs = [
            ("AS AD AC AH JD", "AS AD AC AH JD", Outcome::Tie),
            ("2H 3H 4H 5H 6H", "KS AS TS QS JS", Outcome::Loss),
            ("2H 3H 4H 5H 6H", "AS AD AC AH JD", Outcome::Win),
            ("AS AH 2H AD AC", "JS JD JC JH 3D", Outcome::Win),
            ("2S AH 2H AS AC", "JS JD JC JH AD", Outcome::Loss),
            ("2S AH 2H AS AC", "2H 3H 5H 6H 7H", Outcome::Win),
            ("AS 3S 4S 8S 2S", "2H 3H 5H 6H 7H", Outcome::Win),
            ("2H 3H 5H 6H 7H", "2S 3H 4H 5S 6C", Outcome::Win),
            ("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S", Outcome::Tie),
            ("2S 3H 4H 5S 6C", "AH AC 5H 6H AS", Outcome::Win),
            ("2S 3H 4H 5S AC", "AH AC 5H 6H AS", Outcome::Win),
            ("2S 2H 4H 5S 4C", "AH AC 5H 6H AS", Outcome::Loss),
            ("2S 2H 4H 5S 4C", "AH AC 5H 6H 7S", Outcome::Win),
            ("6S AD 7H 4S AS", "AH AC 5H 6H 7S", Outcome::Loss),
            ("2S AH 4H 5S KC", "AH AC 5H 6H 7S", Outcome::Loss),
            ("2S 3H 6H 7S 9C", "7H 3C TH 6H 9S", Outcome::Loss),
            ("4S 5H 6H TS AC", "3S 5H 6H TS AC", Outcome::Win),
            ("2S AH 4H 5S 6C", "AD 4C 5H 6H 2C", Outcome::Tie),
        ];

        for (player, opponent, outcome) in pairs {
            assert_eq!(cmp(player, opponent), outcome, "{player} vs {opponent}");
            assert_eq!(
                cmp(opponent, player),
                outcome.reverse(),
                "{opponent} vs {player}"
            );
        }
    }

    #[test]
    fn compare_categories_order() {
        // One hand for each category from weakest to strongest.
        let hands = [
            "4S 5H 6H TS AC",
            "AH AC 5H 6H 7S",
            "2S 2H 4H 5S 4C",
            "2C 2D 2H 3S 4C",
            "2H 3D 4C 5S AH",
            "2H 3H 5H 6H 7H",
            "2S 2H 2D 3S 3C",
            "2S 2H 2D 2C 3C",
            "2H 3H 4H 5H AH",
        ];

        for (i, h1) in hands.iter().enumerate() {
            let value = HandValue::eval(&Hand::new(h1).unwrap());
            assert_eq!(value.rank() as usize, i, "{h1}");

            for (j, h2) in hands.iter().enumerate() {
                let expected = Outcome::from(i.cmp(&j));
                assert_eq!(cmp(h1, h2), expected, "{h1} vs {h2}");
            }
        }
    }

    #[test]
    fn compare_wheel() {
        let wheel = "2H 3D 4C 5S AH";
        assert_eq!(
            HandValue::eval(&Hand::new(wheel).unwrap()).rank(),
            HandRank::Straight
        );

        assert_eq!(cmp(wheel, "6H 7D 8C 9S TH"), Outcome::Loss);
        assert_eq!(cmp(wheel, "2S 3H 4H 5S 6C"), Outcome::Loss);
        assert_eq!(cmp(wheel, "TS JD QC KS AS"), Outcome::Loss);
        assert_eq!(cmp(wheel, "AD 2C 3S 4H 5D"), Outcome::Tie);

        // Steel wheel loses to a six high straight flush.
        assert_eq!(cmp("AH 2H 3H 4H 5H", "2D 3D 4D 5D 6D"), Outcome::Loss);
    }

    #[test]
    fn compare_group_ranks() {
        // Equal group ranks tie, kickers are not compared.
        assert_eq!(cmp("AS AD AC AH JD", "AS AD AC AH 2D"), Outcome::Tie);
        assert_eq!(cmp("KS KD KC 2H 2D", "KH KD KC 9H 9D"), Outcome::Tie);
        assert_eq!(cmp("7S 7D 7C AH 2D", "7H 7D 7C 3H 4D"), Outcome::Tie);
        assert_eq!(cmp("KS KD KC 2H 2D", "QH QD QC AH AD"), Outcome::Win);

        // Two pair compares high pair, low pair and then the kicker.
        assert_eq!(cmp("KS KD 2C 2H 5D", "QS QD JC JH AD"), Outcome::Win);
        assert_eq!(cmp("KS KD 3C 3H 5D", "KH KC 2C 2D AD"), Outcome::Win);
        assert_eq!(cmp("KS KD 3C 3H 5D", "KH KC 3S 3D AD"), Outcome::Loss);
        assert_eq!(cmp("KS KD 3C 3H 5D", "KH KC 3S 3D 5H"), Outcome::Tie);

        // One pair compares the pair and then the kickers.
        assert_eq!(cmp("9S 9D 2C 3H 4D", "8S 8D AC KH QD"), Outcome::Win);
        assert_eq!(cmp("9S 9D 2C 3H 5D", "9H 9C 2D 3S 4C"), Outcome::Win);
    }

    #[test]
    fn compare_high_cards_structure() {
        let hand = Hand::new("4S 5H 6H TS AC").unwrap();
        let short = &hand.cards()[..4];

        assert_eq!(
            compare_high_cards(hand.cards(), short),
            Err(Error::Structural {
                player: 5,
                opponent: 4
            })
        );
        assert_eq!(
            compare_high_cards(&[], hand.cards()),
            Err(Error::Structural {
                player: 0,
                opponent: 5
            })
        );
        assert_eq!(
            compare_high_cards(hand.cards(), hand.cards()),
            Ok(Outcome::Tie)
        );
    }

    #[test]
    fn compare_sampled_hands() {
        let mut rng = rand::rng();
        let mut deck = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();

        for _ in 0..10_000 {
            deck.shuffle(&mut rng);
            let h1 = Hand::from_cards(&deck[0..5]).unwrap();
            let h2 = Hand::from_cards(&deck[5..10]).unwrap();

            let outcome = compare(&h1, &h2).unwrap();
            assert_eq!(compare(&h2, &h1).unwrap(), outcome.reverse(), "{h1} vs {h2}");
            assert_eq!(compare(&h1, &h1).unwrap(), Outcome::Tie, "{h1}");

            let (v1, v2) = (HandValue::eval(&h1), HandValue::eval(&h2));
            if v1.rank() != v2.rank() {
                assert_eq!(outcome, Outcome::from(v1.rank().cmp(&v2.rank())));
            }
        }
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::{Card, Rank};

use super::HandStrength;

/// A poker hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No pair.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Trips,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    Quads,
    /// Straight with all cards of the same suit.
    StraightFlush,
}

impl Category {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            Pair,
            TwoPair,
            Trips,
            Straight,
            Flush,
            FullHouse,
            Quads,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::Trips => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::Quads => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        };

        write!(f, "{name}")
    }
}

/// Classifies a five distinct cards hand.
///
/// Ranks are grouped by number of occurrences and sorted by count and then by
/// rank, both descending: for example a full house 7-7-7-2-2 gives the groups
/// `[(3, 7), (2, 2)]`, and a two pair J-J-4-4-9 gives `[(2, J), (2, 4), (1, 9)]`.
/// With this order the group ranks are the tiebreakers for all categories
/// except straights that only use the high card.
pub(crate) fn classify(cards: &[Card; 5]) -> HandStrength {
    let mut counts = [0u8; 15];
    let mut mask = 0u16;
    let suit = cards[0].suit();
    let mut is_flush = true;

    for card in cards {
        counts[card.rank_value() as usize] += 1;
        mask |= 1 << card.rank_value();
        is_flush &= card.suit() == suit;
    }

    let mut groups = [(0u8, Rank::Deuce); 5];
    let mut num_groups = 0;
    for rank in Rank::ranks().rev() {
        let count = counts[rank.value() as usize];
        if count > 0 {
            groups[num_groups] = (count, rank);
            num_groups += 1;
        }
    }

    let groups = &mut groups[..num_groups];
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let mut ranks = [Rank::Deuce; 5];
    for (r, g) in ranks.iter_mut().zip(groups.iter()) {
        *r = g.1;
    }
    let ranks = &ranks[..num_groups];

    let straight = straight_high(mask);
    if let (Some(high), true) = (straight, is_flush) {
        return HandStrength::new(Category::StraightFlush, &[high]);
    }

    let top = groups[0].0;
    let second = groups.get(1).map_or(0, |g| g.0);

    match (top, second, straight) {
        (4, _, _) => HandStrength::new(Category::Quads, ranks),
        (3, 2, _) => HandStrength::new(Category::FullHouse, ranks),
        _ if is_flush => HandStrength::new(Category::Flush, ranks),
        (_, _, Some(high)) => HandStrength::new(Category::Straight, &[high]),
        (3, _, _) => HandStrength::new(Category::Trips, ranks),
        (2, 2, _) => HandStrength::new(Category::TwoPair, ranks),
        (2, _, _) => HandStrength::new(Category::Pair, ranks),
        _ => HandStrength::new(Category::HighCard, ranks),
    }
}

/// Returns the straight high card given a mask with bit `r` set for each rank
/// value `r` in the hand.
///
/// The ace also plays low so the wheel A-2-3-4-5 is a five high straight.
fn straight_high(mask: u16) -> Option<Rank> {
    let ace = 1 << Rank::Ace.value();
    let mask = if mask & ace != 0 { mask | 0b10 } else { mask };

    Rank::ranks()
        .rev()
        .take_while(|&r| r >= Rank::Five)
        .find(|&r| {
            let window = 0x1f << (r.value() - 4);
            mask & window == window
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::parse_cards;

    fn hand(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    fn mask(ranks: &[u8]) -> u16 {
        ranks.iter().fold(0, |m, r| m | (1 << r))
    }

    #[test]
    fn straight_detection() {
        assert_eq!(straight_high(mask(&[10, 11, 12, 13, 14])), Some(Rank::Ace));
        assert_eq!(straight_high(mask(&[2, 3, 4, 5, 6])), Some(Rank::Six));
        assert_eq!(straight_high(mask(&[14, 2, 3, 4, 5])), Some(Rank::Five));

        // No wrap around through the ace.
        assert_eq!(straight_high(mask(&[12, 13, 14, 2, 3])), None);
        assert_eq!(straight_high(mask(&[13, 14, 2, 3, 4])), None);

        // Gaps and short runs.
        assert_eq!(straight_high(mask(&[2, 3, 4, 5, 7])), None);
        assert_eq!(straight_high(mask(&[9, 10, 11, 12])), None);
    }

    #[test]
    fn classify_categories() {
        let cases = [
            ("9S TS JS QS KS", Category::StraightFlush),
            ("AH 2H 3H 4H 5H", Category::StraightFlush),
            ("2S 2D 2C 2H 7D", Category::Quads),
            ("7S 7D 7C 2H 2D", Category::FullHouse),
            ("AS 9S 7S 4S 2S", Category::Flush),
            ("2S 3D 4C 5H 6D", Category::Straight),
            ("AS 2D 3C 4H 5D", Category::Straight),
            ("TS JD QC KH AD", Category::Straight),
            ("7S 7D 7C 4H 2D", Category::Trips),
            ("JS JD 4C 4H 9D", Category::TwoPair),
            ("KS KD 9C 4H 2D", Category::Pair),
            ("AS JD 9C 4H 2D", Category::HighCard),
            ("QS KD AC 2H 3D", Category::HighCard),
        ];

        for (cards, category) in cases {
            assert_eq!(classify(&hand(cards)).category(), category, "{cards}");
        }
    }

    #[test]
    fn classify_tiebreakers() {
        use Rank::*;

        let cases = [
            ("9S TS JS QS KS", vec![King]),
            ("AH 2H 3H 4H 5H", vec![Five]),
            ("2S 2D 2C 2H 7D", vec![Deuce, Seven]),
            ("7S 7D 7C 2H 2D", vec![Seven, Deuce]),
            ("2H 2D 7S 7D 7C", vec![Seven, Deuce]),
            ("2S 9S 7S 4S AS", vec![Ace, Nine, Seven, Four, Deuce]),
            ("AS 2D 3C 4H 5D", vec![Five]),
            ("4H 7S 2D 7D 7C", vec![Seven, Four, Deuce]),
            ("4C JS 9D JD 4H", vec![Jack, Four, Nine]),
            ("2D KS 9C KD 4H", vec![King, Nine, Four, Deuce]),
            ("4H AS 2D 9C JD", vec![Ace, Jack, Nine, Four, Deuce]),
        ];

        for (cards, tiebreakers) in cases {
            let strength = classify(&hand(cards));
            assert_eq!(strength.tiebreakers(), tiebreakers.as_slice(), "{cards}");
        }
    }
}

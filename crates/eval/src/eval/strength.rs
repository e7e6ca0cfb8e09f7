// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand strength type.
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use holdem_cards::Rank;

use super::Category;

/// The strength of a five cards poker hand.
///
/// A strength is made of a [Category] and a sequence of up to five tiebreaker
/// ranks used to compare hands with the same category:
///
/// | Category                 | Tiebreakers                              |
/// |--------------------------|------------------------------------------|
/// | Straight flush, Straight | high card (five for the wheel)           |
/// | Four of a kind           | quads rank, kicker                       |
/// | Full house               | trips rank, pair rank                    |
/// | Flush, High card         | all five ranks descending                |
/// | Three of a kind          | trips rank, two kickers descending       |
/// | Two pair                 | high pair, low pair, kicker              |
/// | Pair                     | pair rank, three kickers descending      |
///
/// Strengths compare by category first and then by tiebreakers, two strengths
/// are equal only if category and all tiebreakers are equal.
#[derive(Clone, Copy)]
pub struct HandStrength {
    category: Category,
    ranks: [Rank; 5],
    len: u8,
}

impl HandStrength {
    /// Creates a strength with the given tiebreakers.
    ///
    /// Panics if there are more than five tiebreakers.
    pub(crate) fn new(category: Category, tiebreakers: &[Rank]) -> Self {
        assert!(tiebreakers.len() <= 5, "At most 5 tiebreakers");

        let mut ranks = [Rank::Deuce; 5];
        ranks[..tiebreakers.len()].copy_from_slice(tiebreakers);

        Self {
            category,
            ranks,
            len: tiebreakers.len() as u8,
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The ranks used to break ties between hands with the same category.
    pub fn tiebreakers(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl PartialEq for HandStrength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandStrength {}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreakers().cmp(other.tiebreakers()))
    }
}

impl Hash for HandStrength {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.tiebreakers().hash(state);
    }
}

impl fmt::Debug for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandStrength")
            .field("category", &self.category)
            .field("tiebreakers", &self.tiebreakers())
            .finish()
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tb = self.tiebreakers();
        match self.category {
            Category::StraightFlush if tb[0] == Rank::Ace => write!(f, "Royal flush"),
            Category::StraightFlush | Category::Straight | Category::Flush => {
                write!(f, "{}, {} high", self.category, tb[0].name())
            }
            Category::Quads | Category::Trips => {
                write!(f, "{}, {}", self.category, tb[0].plural())
            }
            Category::FullHouse => write!(
                f,
                "{}, {} full of {}",
                self.category,
                tb[0].plural(),
                tb[1].plural()
            ),
            Category::TwoPair => write!(
                f,
                "{}, {} and {}",
                self.category,
                tb[0].plural(),
                tb[1].plural()
            ),
            Category::Pair => write!(f, "Pair of {}", tb[0].plural()),
            Category::HighCard => write!(f, "{}, {}", self.category, tb[0].name()),
        }
    }
}

impl Serialize for HandStrength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("HandStrength", 2)?;
        s.serialize_field("category", &self.category)?;
        s.serialize_field("tiebreakers", self.tiebreakers())?;
        s.end()
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator takes 5, 6, or 7 distinct cards and goes through all their
//! five cards subsets (1, 6, or 21 subsets) to find the strongest hand. Each
//! subset is classified into a [Category] with its tiebreaker ranks, the
//! resulting [HandStrength] values are totally ordered so the strongest subset
//! is just the maximum.
//!
//! It provides a [HandStrength::eval] method that computes the hand strength,
//! and a [HandStrength::eval_with_best_hand] that also returns the five best
//! cards, useful for UIs to shows a winning hand.
use holdem_cards::{Card, KSubsets, parse_cards};

use crate::error::{EvalError, Result};

mod category;
pub use category::Category;

mod strength;
pub use strength::HandStrength;

/// Evaluates a 5 to 7 cards hand and returns the strength of its best five
/// cards.
///
/// Fails with [EvalError::InvalidHandSize] if there are less than 5 or more
/// than 7 cards, and with [EvalError::DuplicateCard] if a card appears twice.
pub fn evaluate(cards: &[Card]) -> Result<HandStrength> {
    HandStrength::eval(cards)
}

/// Parses a whitespace separated list of cards, e.g. `"AS AD AC KH KD"`, and
/// evaluates them.
pub fn evaluate_str(cards: &str) -> Result<HandStrength> {
    let cards = parse_cards(cards)?;
    HandStrength::eval(&cards)
}

impl HandStrength {
    /// Evaluates a 5 to 7 cards hand, see [evaluate].
    pub fn eval(cards: &[Card]) -> Result<Self> {
        Self::eval_with_best_hand(cards).map(|(strength, _)| strength)
    }

    /// Evaluates a 5 to 7 cards hand and returns its strength and the five
    /// cards that make the best hand.
    ///
    /// If more subsets have the same strength the first one in the input
    /// order is returned.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(Self, [Card; 5])> {
        check_hand(cards)?;

        let mut best: Option<(Self, [Card; 5])> = None;
        let mut subsets = KSubsets::new(cards.len(), 5);
        while let Some(idx) = subsets.next() {
            let hand = [
                cards[idx[0]],
                cards[idx[1]],
                cards[idx[2]],
                cards[idx[3]],
                cards[idx[4]],
            ];

            let strength = category::classify(&hand);
            if best.is_none_or(|(b, _)| strength > b) {
                best = Some((strength, hand));
            }
        }

        // There is always at least one subset for a valid hand.
        best.ok_or(EvalError::InvalidHandSize(cards.len()))
    }
}

/// Checks hand size and that there are no duplicate cards.
fn check_hand(cards: &[Card]) -> Result<()> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    check_distinct(cards)
}

/// Checks that all cards are distinct.
pub(crate) fn check_distinct<'a, I>(cards: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.id();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }

        seen |= bit;
    }

    Ok(())
}

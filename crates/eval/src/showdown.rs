// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown between players sharing a board.
use log::debug;

use holdem_cards::Card;

use crate::{
    error::{EvalError, Result},
    eval::{HandStrength, check_distinct},
};

/// A player hand at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatHand {
    /// The player hole cards.
    pub hole: [Card; 2],
    /// The strength of the player best hand.
    pub strength: HandStrength,
    /// The five cards that make the player best hand.
    pub best: [Card; 5],
}

/// The result of a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    hands: Vec<SeatHand>,
    winners: Vec<usize>,
}

impl Showdown {
    /// The hand for each seat in the order passed to [showdown].
    pub fn hands(&self) -> &[SeatHand] {
        &self.hands
    }

    /// The seats with the strongest hand, more than one for a split pot.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// Checks if more players share the strongest hand.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    /// The strongest hand strength, `None` if there are no players.
    pub fn best_strength(&self) -> Option<HandStrength> {
        self.winners.first().map(|&seat| self.hands[seat].strength)
    }
}

/// Evaluates each player hole cards with the board cards and finds the winners.
///
/// The board must have 3 to 5 cards and all cards, board and hole cards of
/// all players, must be distinct.
pub fn showdown(board: &[Card], holes: &[[Card; 2]]) -> Result<Showdown> {
    if !(3..=5).contains(&board.len()) {
        return Err(EvalError::InvalidHandSize(board.len() + 2));
    }

    check_distinct(board.iter().chain(holes.iter().flatten()))?;

    let mut cards = [board[0]; 7];
    cards[2..2 + board.len()].copy_from_slice(board);
    let cards_len = board.len() + 2;

    let mut hands = Vec::with_capacity(holes.len());
    for (seat, hole) in holes.iter().enumerate() {
        cards[..2].copy_from_slice(hole);
        let (strength, best) = HandStrength::eval_with_best_hand(&cards[..cards_len])?;
        debug!("Seat {seat} {}{} has {strength}", hole[0], hole[1]);

        hands.push(SeatHand {
            hole: *hole,
            strength,
            best,
        });
    }

    let winners = match hands.iter().map(|h| h.strength).max() {
        Some(max) => hands
            .iter()
            .enumerate()
            .filter(|(_, h)| h.strength == max)
            .map(|(seat, _)| seat)
            .collect(),
        None => Vec::new(),
    };

    Ok(Showdown { hands, winners })
}

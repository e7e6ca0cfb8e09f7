// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator checks all
//! five cards subsets of a hand and returns the strength of the best one as a
//! [HandStrength] made of a [Category] and the tiebreaker ranks, strengths are
//! totally ordered so they can be compared directly at showdown.
//!
//! To use the evaluator create a hand and call [evaluate]:
//!
//! ```
//! # use holdem_eval::*;
//! let hole = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Diamonds)];
//! let board = parse_cards("AC KH KD 2C 3D").unwrap();
//!
//! let cards = [&hole[..], &board[..]].concat();
//! let strength = evaluate(&cards).unwrap();
//! assert_eq!(strength.category(), Category::FullHouse);
//! assert_eq!(strength.tiebreakers(), &[Rank::Ace, Rank::King]);
//! assert_eq!(strength.to_string(), "Full house, Aces full of Kings");
//!
//! // Anything but 5 to 7 distinct cards is rejected.
//! assert_eq!(evaluate(&cards[..4]), Err(EvalError::InvalidHandSize(4)));
//! ```
//!
//! Use [showdown] to compare the hands of more players sharing a board:
//!
//! ```
//! # use holdem_eval::*;
//! let board = parse_cards("TS JD QC KH AD").unwrap();
//! let holes = [
//!     [Card::new(Rank::Deuce, Suit::Spades), Card::new(Rank::Trey, Suit::Diamonds)],
//!     [Card::new(Rank::Four, Suit::Spades), Card::new(Rank::Five, Suit::Diamonds)],
//! ];
//!
//! // The board plays and the pot is split.
//! let res = showdown(&board, &holes).unwrap();
//! assert_eq!(res.winners(), &[0, 1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, HandStrength, evaluate, evaluate_str};

mod error;
pub use error::EvalError;

pub mod showdown;
pub use showdown::{SeatHand, Showdown, showdown};

// Reexport cards types.
pub use holdem_cards::{Card, CardError, Deck, Rank, Suit, parse_cards};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::try_new(13, 'D').unwrap();
//! let ts = "T♠".parse::<Card>().unwrap();
//! assert!(ah > kd && kd > ts);
//! ```
//!
//! invalid ranks or suits are rejected with a [CardError]:
//!
//! ```
//! # use holdem_cards::{Card, CardError};
//! assert_eq!(Card::try_new(15, 'S'), Err(CardError::InvalidRank(15)));
//! assert_eq!(Card::try_new(9, 'X'), Err(CardError::InvalidSuit('X')));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use holdem_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::Deck;

mod subsets;
pub use subsets::{KSubsets, nck};

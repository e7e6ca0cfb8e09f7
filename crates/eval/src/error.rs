// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use holdem_cards::{Card, CardError};

/// Errors returned when the cards passed to the evaluator are not a valid hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have 5 to 7 cards.
    #[error("invalid hand size {0}, expected 5 to 7 cards")]
    InvalidHandSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card couldn't be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, EvalError>;

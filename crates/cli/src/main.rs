// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em showdown CLI.
//!
//! Deals hands from a shuffled deck and shows each player best hand and the
//! winners at showdown.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{SeedableRng, prelude::*, rngs::StdRng};

use holdem_eval::{Card, Deck, Showdown, showdown};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,
    /// Number of hands to deal.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    hands: u32,
    /// Seed used to shuffle the deck, a random seed is used if not set.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Enables debug logs.
    #[clap(long, short)]
    verbose: bool,
}

/// The cards dealt for a hand.
#[derive(Debug)]
struct Deal {
    holes: Vec<[Card; 2]>,
    board: Vec<Card>,
}

impl Deal {
    /// Deals hole cards to each player and the board burning a card before
    /// the flop, the turn, and the river.
    fn new<R: Rng + ?Sized>(rng: &mut R, players: usize) -> Result<Self> {
        let mut deck = Deck::new_and_shuffled(rng);
        let mut deal = || deck.deal().context("Not enough cards in the deck");

        let holes = (0..players)
            .map(|_| -> Result<[Card; 2]> { Ok([deal()?, deal()?]) })
            .collect::<Result<Vec<_>>>()?;

        let mut board = Vec::with_capacity(5);
        for street in [3, 1, 1] {
            deal()?;
            for _ in 0..street {
                board.push(deal()?);
            }
        }

        Ok(Self { holes, board })
    }
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_showdown(hand: u32, deal: &Deal, res: &Showdown) {
    println!("Hand {hand}");
    println!("Board: {}", cards_to_string(&deal.board));

    for (seat, h) in res.hands().iter().enumerate() {
        let strength = h.strength.to_string();
        println!(
            "Seat {seat}: {}  {strength:<32} [{}]",
            cards_to_string(&h.hole),
            cards_to_string(&h.best)
        );
    }

    if let Some(best) = res.best_strength() {
        let seats = res
            .winners()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        if res.is_split() {
            println!("Split pot between seats {seats} with {best}\n");
        } else {
            println!("Seat {seats} wins with {best}\n");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("Dealing {} hands to {} players with seed {seed}", cli.hands, cli.players);

    let mut rng = StdRng::seed_from_u64(seed);
    for hand in 1..=cli.hands {
        let deal = Deal::new(&mut rng, cli.players as usize)?;
        let res = showdown(&deal.board, &deal.holes)?;
        print_showdown(hand, &deal, &res);
    }

    Ok(())
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High card:       23294460
// Pair:            58627800
// Two pair:        31433400
// Three of a kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full house:      3473184
// Four of a kind:  224848
// Straight flush:  41584
// ```

use std::time::Instant;

use holdem_eval::{Category, Deck, evaluate};

fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(7, |hand| {
        if let Ok(strength) = evaluate(hand) {
            counts[strength.category() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories() {
        let name = format!("{category}:");
        println!("{name:<16} {}", counts[category as usize]);
    }
}

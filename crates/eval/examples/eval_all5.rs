// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
//
// High Card:       1302540   stand pat: 0
// One Pair:        1098240   stand pat: 0
// ...
// ```
use std::time::Instant;

use drawpoker_eval::*;

fn main() {
    // Evaluate and advise all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut pats = [0usize; 9];
    let mut discards = [0usize; 5];

    Deck::default().for_each_hand(5, |hand| {
        let category = EvaluatedHand::eval(hand).category();
        counts[category.strength() as usize] += 1;

        let positions = recommend_discards(hand, max_discards(hand));
        discards[positions.len()] += 1;
        if positions.is_empty() {
            pats[category.strength() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::ALL {
        let idx = category.strength() as usize;
        let name = format!("{category}:");
        println!("{name:<17}{:<10}stand pat: {}", counts[idx], pats[idx]);
    }

    println!();
    for (n, count) in discards.iter().enumerate() {
        println!("Discard {n}:       {count}");
    }
}

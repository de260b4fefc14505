// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation report.
use anyhow::Result;
use log::warn;
use serde::Serialize;
use std::fmt;

use drawpoker_eval::{Card, EvaluatedHand, max_discards, recommend_discards};

/// The evaluation of a hand with the recommended discards.
#[derive(Debug, Serialize)]
pub struct Report {
    cards: Vec<Card>,
    hand: EvaluatedHand,
    category: String,
    max_discards: usize,
    discards: Vec<usize>,
    discarded: Vec<Card>,
}

impl Report {
    /// Evaluates the given cards.
    pub fn new(cards: Vec<Card>) -> Self {
        let has_duplicates = cards
            .iter()
            .enumerate()
            .any(|(idx, c)| cards[idx + 1..].contains(c));
        if has_duplicates {
            warn!("Hand contains duplicated cards");
        }

        let hand = EvaluatedHand::eval(&cards);
        let max_discards = max_discards(&cards);
        let discards = recommend_discards(&cards, max_discards);
        let discarded = discards.iter().map(|&idx| cards[idx]).collect();

        Self {
            category: hand.category().to_string(),
            cards,
            hand,
            max_discards,
            discards,
            discarded,
        }
    }

    /// Serializes the report to pretty printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hand: {}", join(&self.cards))?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Tie-break ranks: {}", join(self.hand.ranks()))?;
        writeln!(f, "Max discards: {}", self.max_discards)?;

        if self.discards.is_empty() {
            writeln!(f, "Recommended discards: none")
        } else {
            writeln!(
                f,
                "Recommended discards: {} (positions {})",
                join(&self.discarded),
                join(&self.discards)
            )
        }
    }
}

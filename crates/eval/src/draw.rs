// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Replacing discarded cards from a deck.
use drawpoker_cards::{Card, Deck, DeckError};

use crate::discard::{max_discards, recommend_discards};

/// The cards exchanged during a draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draw {
    /// The discarded cards in position order.
    pub discarded: Vec<Card>,
    /// The replacement cards in position order.
    pub drawn: Vec<Card>,
}

impl Draw {
    /// Checks if no card was exchanged.
    pub fn is_pat(&self) -> bool {
        self.discarded.is_empty()
    }
}

/// Replaces the cards at the given positions with cards dealt from the deck.
///
/// Replacements are assigned in ascending position order, positions out of
/// the hand or repeated are ignored. If the deck can't deal all the
/// replacements the hand and the deck are left unchanged.
pub fn draw(deck: &mut Deck, hand: &mut [Card], positions: &[usize]) -> Result<Draw, DeckError> {
    let mut positions = positions
        .iter()
        .copied()
        .filter(|&idx| idx < hand.len())
        .collect::<Vec<_>>();
    positions.sort_unstable();
    positions.dedup();

    if positions.is_empty() {
        return Ok(Draw::default());
    }

    let drawn = deck.deal(positions.len())?;
    let discarded = positions.iter().map(|&idx| hand[idx]).collect::<Vec<_>>();

    for (&idx, &card) in positions.iter().zip(&drawn) {
        hand[idx] = card;
    }

    Ok(Draw { discarded, drawn })
}

/// Draws the recommended discards using the maximum number of discards the
/// hand allows.
pub fn draw_recommended(deck: &mut Deck, hand: &mut [Card]) -> Result<Draw, DeckError> {
    let positions = recommend_discards(hand, max_discards(hand));
    draw(deck, hand, &positions)
}

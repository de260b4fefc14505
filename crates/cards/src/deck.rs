// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::prelude::*;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Deck errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Requested more cards than the deck holds.
    #[error("not enough cards to deal: requested {requested}, remaining {remaining}")]
    InsufficientCards {
        /// The number of requested cards.
        requested: usize,
        /// The number of cards left in the deck.
        remaining: usize,
    },
}

/// A cards Deck
///
/// Cards are dealt from the top of the deck in order, a new deck is ordered
/// by suit and then by rank from Deuce to Ace.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the top of the deck.
    ///
    /// Either all `n` cards are dealt or the deck is left untouched.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck, returns true if the card was in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        let count = self.cards.len();
        self.cards.retain(|c| c != &card);
        self.cards.len() != count
    }

    /// Removes the given cards from the deck keeping the order of the
    /// remaining cards, returns the number of removed cards.
    pub fn remove_cards(&mut self, cards: &[Card]) -> usize {
        let count = self.cards.len();
        self.cards.retain(|c| !cards.contains(c));
        count - self.cards.len()
    }

    /// Calls the `f` closure for each k-cards combination of the cards in
    /// the deck.
    ///
    /// Cards in a combination keep the deck order. Nothing is called if k is
    /// zero or greater than the number of cards in the deck.
    pub fn for_each_hand<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if k == 0 || k > n {
            return;
        }

        // Indices of the current combination in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            hand[pos] = self.cards[idx[pos]];

            for i in (pos + 1)..k {
                idx[i] = idx[i - 1] + 1;
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker hand evaluator and discard advisor.
//!
//! To evaluate a five cards hand use [EvaluatedHand::eval], evaluated hands
//! are ordered by category first and then by their tie-break ranks:
//!
//! ```
//! # use drawpoker_eval::*;
//! let cards = "KC KD KH KS AC"
//!     .split_whitespace()
//!     .map(|c| c.parse().unwrap())
//!     .collect::<Vec<Card>>();
//! let quads = EvaluatedHand::eval(&cards);
//! assert_eq!(quads.category(), Category::FourOfAKind);
//! assert_eq!(quads.ranks(), &[Rank::King, Rank::Ace]);
//!
//! // 2C, 3C, .., 6C
//! let deck_cards = Deck::default().into_iter().take(5).collect::<Vec<_>>();
//! let straight_flush = EvaluatedHand::eval(&deck_cards);
//! assert!(straight_flush > quads);
//! assert_eq!(compare(&quads, &straight_flush), -1);
//! ```
//!
//! During the draw [recommend_discards] returns the positions of the cards
//! to replace, the [draw] function replaces them with cards from a deck:
//!
//! ```
//! # use drawpoker_eval::*;
//! let mut hand = "3S 7H 2H KH 5H"
//!     .split_whitespace()
//!     .map(|c| c.parse().unwrap())
//!     .collect::<Vec<Card>>();
//! assert_eq!(max_discards(&hand), 3);
//!
//! let positions = recommend_discards(&hand, max_discards(&hand));
//! assert_eq!(positions, vec![0]);
//!
//! let mut deck = Deck::default();
//! deck.remove_cards(&hand);
//! let draw = draw(&mut deck, &mut hand, &positions).unwrap();
//! assert_eq!(draw.discarded, vec![Card::new(Rank::Trey, Suit::Spades)]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod counts;

pub mod discard;
pub use discard::{DrawPlan, max_discards, recommend_discards};

pub mod draw;
pub use draw::{Draw, draw, draw_recommended};

pub mod hand;
pub use hand::{Category, EvaluatedHand, compare, winners};

// Reexport cards types.
pub use drawpoker_cards::{Card, Deck, DeckError, ParseCardError, Rank, Suit};

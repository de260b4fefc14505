// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluation and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::counts::HandCounts;
use drawpoker_cards::{Card, Rank};

/// A hand category.
///
/// The category strength is its discriminant, a stronger category has a
/// greater strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair = 1,
    /// Two pairs.
    TwoPair = 2,
    /// Three of a kind.
    ThreeOfAKind = 3,
    /// Straight.
    Straight = 4,
    /// Flush.
    Flush = 5,
    /// Full house.
    FullHouse = 6,
    /// Four of a kind.
    FourOfAKind = 7,
    /// Straight flush.
    StraightFlush = 8,
}

impl Category {
    /// All categories from the weakest to the strongest.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// The category strength from 0 for a high card to 8 for a straight flush.
    #[inline]
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// Returns the category with the given strength, if any.
    pub fn from_strength(strength: u8) -> Option<Category> {
        Category::ALL.get(strength as usize).copied()
    }

    /// The category human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }

    /// The name of the category with the given strength, or `Category(n)`
    /// for a strength out of range.
    pub fn display_name(strength: u8) -> String {
        match Category::from_strength(strength) {
            Some(category) => category.name().to_string(),
            None => format!("Category({strength})"),
        }
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An evaluated hand: its category and the ranks that break ties between
/// hands of the same category, most significant first.
///
/// | Category       | Tie-break ranks                    |
/// |----------------|------------------------------------|
/// | Straight flush | top rank (Five for the wheel)      |
/// | Four of a kind | quads, kicker                      |
/// | Full house     | trips, pair                        |
/// | Flush          | all ranks, descending              |
/// | Straight       | top rank (Five for the wheel)      |
/// | Three of kind  | trips, kickers descending          |
/// | Two pair       | high pair, low pair, kicker        |
/// | One pair       | pair, kickers descending           |
/// | High card      | all ranks, descending              |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: Category,
    ranks: Vec<Rank>,
}

impl EvaluatedHand {
    /// Creates an evaluated hand from its parts.
    pub fn new(category: Category, ranks: Vec<Rank>) -> Self {
        Self { category, ranks }
    }

    /// Evaluates a five cards hand.
    ///
    /// The result depends only on the cards, not their order, and any input
    /// including duplicated cards gets a category.
    pub fn eval(cards: &[Card]) -> Self {
        let counts = HandCounts::new(cards);
        let is_flush = counts.distinct_suits() == 1;
        let straight = counts.straight_top();

        if let (Some(top), true) = (straight, is_flush) {
            return Self::new(Category::StraightFlush, vec![top]);
        }

        let quads = counts.ranks_with(4).collect::<Vec<_>>();
        let trips = counts.ranks_with(3).collect::<Vec<_>>();
        let pairs = counts.ranks_with(2).collect::<Vec<_>>();

        // Ranks of all cards but the ones with the given ranks, highest first.
        let kickers = |skip: &[Rank]| {
            counts
                .ranks_desc()
                .filter(|r| !skip.contains(r))
                .collect::<Vec<_>>()
        };

        let buckets = (quads.as_slice(), trips.as_slice(), pairs.as_slice());
        let (category, ranks): (Category, Vec<Rank>) = match buckets {
            ([quad], _, _) => {
                let kicker = counts.distinct_ranks().find(|r| r != quad);
                let ranks = std::iter::once(*quad).chain(kicker).collect();
                (Category::FourOfAKind, ranks)
            }
            (_, [trip], [pair]) => (Category::FullHouse, vec![*trip, *pair]),
            _ if is_flush => (Category::Flush, counts.ranks_desc().collect()),
            _ if straight.is_some() => (Category::Straight, straight.into_iter().collect()),
            (_, [trip], _) => {
                let ranks = std::iter::once(*trip).chain(kickers(trips.as_slice())).collect();
                (Category::ThreeOfAKind, ranks)
            }
            (_, _, [high, low]) => {
                let kicker = kickers(pairs.as_slice()).into_iter().next();
                let ranks = [*high, *low].into_iter().chain(kicker).collect();
                (Category::TwoPair, ranks)
            }
            (_, _, [pair]) => {
                let ranks = std::iter::once(*pair).chain(kickers(pairs.as_slice())).collect();
                (Category::OnePair, ranks)
            }
            _ => (Category::HighCard, counts.ranks_desc().collect()),
        };

        Self::new(category, ranks)
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The tie-break ranks, most significant first.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
}

/// Hands are ordered by category first and then by tie-break ranks compared
/// element by element, when one ranks list is a prefix of the other the
/// longer list is greater.
impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks.as_slice().cmp(other.ranks.as_slice()))
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;

        for (idx, rank) in self.ranks.iter().enumerate() {
            let sep = if idx == 0 { " [" } else { " " };
            write!(f, "{sep}{rank}")?;
        }

        if !self.ranks.is_empty() {
            write!(f, "]")?;
        }

        Ok(())
    }
}

/// Compares two evaluated hands, returns 1 if `a` is stronger, -1 if `b` is
/// stronger and 0 if they tie.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Returns the indices of all the hands that tie for the best hand.
pub fn winners(hands: &[EvaluatedHand]) -> Vec<usize> {
    let Some(best) = hands.iter().max() else {
        return Vec::new();
    };

    hands
        .iter()
        .enumerate()
        .filter(|(_, hand)| *hand == best)
        .map(|(idx, _)| idx)
        .collect()
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit counters for a hand.
use drawpoker_cards::{Card, Rank, Suit};

/// Array backed rank and suit counts.
///
/// Rank counts are indexed by rank value (2..=14), suit counts by suit index.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct HandCounts {
    ranks: [u8; 15],
    suits: [u8; 4],
}

impl HandCounts {
    /// Counts the ranks and suits of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = Self::default();

        for card in cards {
            let r = &mut counts.ranks[card.rank().value() as usize];
            *r = r.saturating_add(1);

            let s = &mut counts.suits[card.suit().index()];
            *s = s.saturating_add(1);
        }

        counts
    }

    /// The number of cards with the given rank.
    #[inline]
    pub fn rank_count(&self, rank: Rank) -> u8 {
        self.ranks[rank.value() as usize]
    }

    /// Checks if a card with the given rank value is in the hand, a value of
    /// 1 stands for a low Ace.
    fn has_value(&self, value: u8) -> bool {
        match value {
            1 => self.rank_count(Rank::Ace) > 0,
            v => Rank::from_value(v).is_some_and(|r| self.rank_count(r) > 0),
        }
    }

    /// The number of distinct suits.
    pub fn distinct_suits(&self) -> usize {
        self.suits.iter().filter(|&&n| n > 0).count()
    }

    /// The distinct ranks, highest first.
    pub fn distinct_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |&r| self.rank_count(r) > 0)
    }

    /// The ranks held by exactly `n` cards, highest first.
    pub fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |&r| self.rank_count(r) == n)
    }

    /// The rank of every card, highest first.
    pub fn ranks_desc(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .flat_map(move |r| std::iter::repeat_n(r, self.rank_count(r) as usize))
    }

    /// The suit held by exactly `n` cards, if any.
    pub fn suit_with(&self, n: u8) -> Option<Suit> {
        Suit::suits().find(|s| self.suits[s.index()] == n)
    }

    /// The top rank of a five cards straight, a Five for the wheel.
    pub fn straight_top(&self) -> Option<Rank> {
        if self.distinct_ranks().count() != 5 {
            return None;
        }

        let max = self.distinct_ranks().next()?;
        let min = self.distinct_ranks().last()?;

        if max.value() - min.value() == 4 {
            Some(max)
        } else if (1..=5).all(|v| self.has_value(v)) {
            Some(Rank::Five)
        } else {
            None
        }
    }

    /// The top rank of the highest run of four consecutive ranks, the run
    /// may start with a low Ace (A-2-3-4 has top rank Four).
    pub fn run_of_four_top(&self) -> Option<Rank> {
        Rank::ranks()
            .rev()
            .filter(|top| top.value() >= Rank::Four.value())
            .find(|top| (top.value() - 3..=top.value()).all(|v| self.has_value(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(s: &str) -> HandCounts {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<Card>>();
        HandCounts::new(&cards)
    }

    #[test]
    fn rank_and_suit_counts() {
        let c = counts("KC KD 7H 7S KS");
        assert_eq!(c.rank_count(Rank::King), 3);
        assert_eq!(c.rank_count(Rank::Seven), 2);
        assert_eq!(c.rank_count(Rank::Ace), 0);
        assert_eq!(c.distinct_suits(), 4);
        assert_eq!(c.suit_with(2), Some(Suit::Spades));
        assert_eq!(c.ranks_with(3).collect::<Vec<_>>(), vec![Rank::King]);
        assert_eq!(c.ranks_with(2).collect::<Vec<_>>(), vec![Rank::Seven]);
        assert_eq!(
            c.ranks_desc().collect::<Vec<_>>(),
            vec![Rank::King, Rank::King, Rank::King, Rank::Seven, Rank::Seven]
        );
        assert_eq!(
            c.distinct_ranks().collect::<Vec<_>>(),
            vec![Rank::King, Rank::Seven]
        );
    }

    #[test]
    fn straight_top() {
        assert_eq!(counts("6C 7D 8H 9S TC").straight_top(), Some(Rank::Ten));
        assert_eq!(counts("TS JS QS KS AS").straight_top(), Some(Rank::Ace));
        assert_eq!(counts("AC 2D 3H 4S 5C").straight_top(), Some(Rank::Five));
        assert_eq!(counts("AC 2D 3H 4S 6C").straight_top(), None);
        assert_eq!(counts("QC KD AH 2S 3C").straight_top(), None);
        assert_eq!(counts("6C 7D 8H 9S 9C").straight_top(), None);
        assert_eq!(counts("").straight_top(), None);
    }

    #[test]
    fn run_of_four() {
        assert_eq!(counts("2C 7H 5C 6D 8S").run_of_four_top(), Some(Rank::Eight));
        assert_eq!(counts("9C AS 2C 3D 4H").run_of_four_top(), Some(Rank::Four));
        assert_eq!(counts("JC QS KC AD 2H").run_of_four_top(), Some(Rank::Ace));
        assert_eq!(counts("5C 6S 7C 8D 8H").run_of_four_top(), Some(Rank::Eight));
        assert_eq!(counts("2C 4S 6C 8D TH").run_of_four_top(), None);
        assert_eq!(counts("KC AS 2C 3D 9H").run_of_four_top(), None);
    }

    #[test]
    fn duplicate_cards() {
        let c = counts("AS AS AS AS AS");
        assert_eq!(c.rank_count(Rank::Ace), 5);
        assert_eq!(c.suit_with(5), Some(Suit::Spades));
        assert_eq!(c.distinct_suits(), 1);
        assert_eq!(c.straight_top(), None);
        assert_eq!(c.ranks_desc().count(), 5);
    }
}

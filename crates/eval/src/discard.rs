// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Discard advice for the draw.
//!
//! A [DrawPlan] is chosen with the first matching rule from this list:
//!
//! 1. A straight or better is kept as it is.
//! 2. Four cards of the same suit are kept to draw to a flush.
//! 3. Four cards in sequence are kept to draw to a straight, a low Ace can
//!    start the sequence (A-2-3-4).
//! 4. Three of a kind are kept.
//! 5. Two pairs are kept.
//! 6. A pair is kept.
//! 7. Only the highest card is kept.
//!
//! When the plan discards more cards than allowed the lowest ranked cards
//! are discarded first.
use drawpoker_cards::{Card, Rank, Suit};

use crate::{Category, EvaluatedHand, counts::HandCounts};

/// Returns the maximum number of cards a player may replace, four when
/// the highest card is an Ace and three otherwise.
pub fn max_discards(cards: &[Card]) -> usize {
    match cards.iter().map(Card::rank).max() {
        Some(Rank::Ace) => 4,
        _ => 3,
    }
}

/// Recommends the positions of the cards to discard, at most `max_discards`.
///
/// The positions are unique and in ascending order.
pub fn recommend_discards(cards: &[Card], max_discards: usize) -> Vec<usize> {
    if max_discards == 0 || cards.is_empty() {
        return Vec::new();
    }

    DrawPlan::new(cards).discards(cards, max_discards)
}

/// What a player keeps for the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPlan {
    /// Keep all cards.
    StandPat,
    /// Keep four cards of this suit.
    FlushDraw(Suit),
    /// Keep four cards in sequence up to this rank.
    StraightDraw(Rank),
    /// Keep the three cards of this rank.
    Trips(Rank),
    /// Keep both pairs.
    TwoPair(Rank, Rank),
    /// Keep the pair.
    Pair(Rank),
    /// Keep the highest card.
    HighCard,
}

impl DrawPlan {
    /// Chooses the plan for the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let category = EvaluatedHand::eval(cards).category();
        let counts = HandCounts::new(cards);

        if is_made_hand(category) {
            return DrawPlan::StandPat;
        }

        if let Some(suit) = counts.suit_with(4) {
            return DrawPlan::FlushDraw(suit);
        }

        if let Some(top) = counts.run_of_four_top() {
            return DrawPlan::StraightDraw(top);
        }

        let trips = counts.ranks_with(3).collect::<Vec<_>>();
        let pairs = counts.ranks_with(2).collect::<Vec<_>>();

        match (trips.as_slice(), pairs.as_slice()) {
            ([trip], _) => DrawPlan::Trips(*trip),
            (_, [high, low]) => DrawPlan::TwoPair(*high, *low),
            (_, [pair]) => DrawPlan::Pair(*pair),
            _ => DrawPlan::HighCard,
        }
    }

    /// Returns for each card if it is kept by this plan.
    pub fn keeps(&self, cards: &[Card]) -> Vec<bool> {
        match *self {
            DrawPlan::StandPat => vec![true; cards.len()],
            DrawPlan::FlushDraw(suit) => cards.iter().map(|c| c.suit() == suit).collect(),
            DrawPlan::StraightDraw(top) => {
                // Keep one card per rank of the run.
                let mut seen = [false; 15];
                cards
                    .iter()
                    .map(|c| {
                        let value = c.rank().value() as usize;
                        let keep = in_run(c.rank(), top) && !seen[value];
                        seen[value] |= keep;
                        keep
                    })
                    .collect()
            }
            DrawPlan::Trips(rank) | DrawPlan::Pair(rank) => {
                cards.iter().map(|c| c.rank() == rank).collect()
            }
            DrawPlan::TwoPair(high, low) => cards
                .iter()
                .map(|c| c.rank() == high || c.rank() == low)
                .collect(),
            DrawPlan::HighCard => {
                // The first of the highest ranked cards.
                let best = cards
                    .iter()
                    .enumerate()
                    .rev()
                    .max_by_key(|(_, c)| c.rank())
                    .map(|(idx, _)| idx);
                (0..cards.len()).map(|idx| Some(idx) == best).collect()
            }
        }
    }

    /// Returns the positions of the cards this plan discards, ascending and
    /// at most `max_discards`, dropping the lowest ranked cards first.
    pub fn discards(&self, cards: &[Card], max_discards: usize) -> Vec<usize> {
        let keeps = self.keeps(cards);

        let mut candidates = cards
            .iter()
            .zip(keeps)
            .enumerate()
            .filter(|(_, (_, keep))| !keep)
            .map(|(idx, (c, _))| (c.rank(), idx))
            .collect::<Vec<_>>();
        candidates.sort_unstable();

        let mut positions = candidates
            .into_iter()
            .take(max_discards)
            .map(|(_, idx)| idx)
            .collect::<Vec<_>>();
        positions.sort_unstable();
        positions
    }
}

fn is_made_hand(category: Category) -> bool {
    matches!(
        category,
        Category::StraightFlush
            | Category::FourOfAKind
            | Category::FullHouse
            | Category::Flush
            | Category::Straight
    )
}

/// Checks if a rank belongs to the four cards run ending with `top`, an
/// Ace is in the run A-2-3-4.
fn in_run(rank: Rank, top: Rank) -> bool {
    let low = top.value().saturating_sub(3);
    (low..=top.value()).contains(&rank.value()) || (low == 1 && rank == Rank::Ace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use drawpoker_cards::Deck;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn discarded(s: &str, max_discards: usize) -> Vec<String> {
        let hand = cards(s);
        recommend_discards(&hand, max_discards)
            .into_iter()
            .map(|idx| hand[idx].to_string())
            .collect()
    }

    #[test]
    fn max_discards_rule() {
        assert_eq!(max_discards(&cards("KD 5S AC 2C 9H")), 4);
        assert_eq!(max_discards(&cards("9H KC 2C QD 5S")), 3);
        assert_eq!(max_discards(&cards("AH AC 2C QD 5S")), 4);
        assert_eq!(max_discards(&[]), 3);
    }

    #[test]
    fn plan_rules() {
        let plan = |s: &str| DrawPlan::new(&cards(s));

        assert_eq!(plan("2S 3C 3D 2C 3H"), DrawPlan::StandPat);
        assert_eq!(plan("KC KD KH KS 2C"), DrawPlan::StandPat);
        assert_eq!(plan("AH KH 9H 5H 2H"), DrawPlan::StandPat);
        assert_eq!(plan("AC 2D 3H 4S 5C"), DrawPlan::StandPat);
        assert_eq!(plan("3S 7H 2H KH 5H"), DrawPlan::FlushDraw(Suit::Hearts));
        assert_eq!(plan("2C 7H 5C 6D 8S"), DrawPlan::StraightDraw(Rank::Eight));
        assert_eq!(plan("9C AS 2C 3D 4H"), DrawPlan::StraightDraw(Rank::Four));
        assert_eq!(plan("KS 7C QC 7D 7H"), DrawPlan::Trips(Rank::Seven));
        assert_eq!(plan("5C KD 9H KC 9S"), DrawPlan::TwoPair(Rank::King, Rank::Nine));
        assert_eq!(plan("AH JC 2C JD KS"), DrawPlan::Pair(Rank::Jack));
        assert_eq!(plan("KD 5S AC 2C 9H"), DrawPlan::HighCard);
    }

    #[test]
    fn plan_priority() {
        let plan = |s: &str| DrawPlan::new(&cards(s));

        // A flush draw comes before a pair.
        assert_eq!(plan("3H 7H 2H KH 7S"), DrawPlan::FlushDraw(Suit::Hearts));

        // A flush draw comes before a straight draw.
        assert_eq!(plan("5H 6H 7H 8H KS"), DrawPlan::FlushDraw(Suit::Hearts));

        // A straight draw comes before a pair.
        assert_eq!(plan("5C 6S 7C 8D 8H"), DrawPlan::StraightDraw(Rank::Eight));
    }

    #[test]
    fn stand_pat() {
        assert!(discarded("2S 3C 3D 2C 3H", 3).is_empty());
        assert!(discarded("2S 3C 3D 2C 3H", 5).is_empty());
        assert!(discarded("KC KD KH KS 2C", 4).is_empty());
        assert!(discarded("TS JS QS KS AS", 4).is_empty());
        assert!(discarded("6C 7D 8H 9S TC", 3).is_empty());
        assert!(discarded("AH KH 9H 5H 2H", 4).is_empty());
    }

    #[test]
    fn draw_to_flush() {
        let hand = cards("3S 7H 2H KH 5H");
        assert_eq!(recommend_discards(&hand, 3), vec![0]);
        assert_eq!(recommend_discards(&hand, 1), vec![0]);
    }

    #[test]
    fn draw_to_straight() {
        assert_eq!(recommend_discards(&cards("2C 7H 5C 6D 8S"), 3), vec![0]);
        assert_eq!(recommend_discards(&cards("9C AS 2C 3D 4H"), 3), vec![0]);
        assert_eq!(recommend_discards(&cards("JC QS 2C KD AH"), 4), vec![2]);

        // Breaks the pair keeping one card per rank.
        assert_eq!(recommend_discards(&cards("5C 8S 6C 7D 8H"), 3), vec![4]);
    }

    #[test]
    fn keep_trips() {
        assert_eq!(discarded("KS 7C QC 7D 7H", 3), vec!["KS", "QC"]);
        assert_eq!(discarded("7C 7D 7H KS QC", 1), vec!["QC"]);
    }

    #[test]
    fn keep_two_pair() {
        assert_eq!(discarded("5C KD 9H KC 9S", 3), vec!["5C"]);
    }

    #[test]
    fn keep_pair() {
        assert_eq!(discarded("AH JC 2C JD KS", 3), vec!["AH", "2C", "KS"]);
        assert_eq!(discarded("AH JC 2C JD KS", 2), vec!["2C", "KS"]);
        assert_eq!(discarded("AH JC 2C JD KS", 1), vec!["2C"]);
    }

    #[test]
    fn keep_high_card() {
        let hand = cards("KD 5S AC 2C 9H");
        assert_eq!(recommend_discards(&hand, max_discards(&hand)), vec![0, 1, 3, 4]);

        let hand = cards("9H KC 2C QD 5S");
        assert_eq!(recommend_discards(&hand, max_discards(&hand)), vec![0, 2, 4]);
        assert_eq!(discarded("9H KC 2C QD 5S", 3), vec!["9H", "2C", "5S"]);
    }

    #[test]
    fn no_discards() {
        assert!(recommend_discards(&cards("2C 3D 4H 5S 6C"), 0).is_empty());
        assert!(recommend_discards(&cards("AH JC 2C JD KS"), 0).is_empty());
        assert!(recommend_discards(&[], 3).is_empty());
    }

    #[test]
    fn degenerate_hands() {
        // Duplicated cards never panic and keep the limits.
        assert!(recommend_discards(&cards("AS AS AS AS AS"), 4).is_empty());
        assert_eq!(recommend_discards(&cards("AS AS AD AD AH"), 4), vec![1, 2, 3, 4]);
        assert_eq!(recommend_discards(&cards("2H 2C 2H 2C 2D"), 3), vec![1, 2, 3]);
        assert_eq!(recommend_discards(&cards("KS KS 7D 7D 3C"), 3), vec![4]);
        assert!(recommend_discards(&cards("9S 9S 9S 9S 3D"), 3).is_empty());
        assert_eq!(recommend_discards(&cards("QH"), 3), Vec::<usize>::new());
    }

    #[test]
    fn discards_all_hands() {
        let mut count = 0usize;

        Deck::default().for_each_hand(5, |hand| {
            let max = count % 6;
            count += 1;

            let positions = recommend_discards(hand, max);
            assert!(positions.len() <= max);
            assert!(positions.iter().all(|&idx| idx < 5));
            assert!(positions.windows(2).all(|w| w[0] < w[1]));

            let category = EvaluatedHand::eval(hand).category();
            if is_made_hand(category) {
                assert!(positions.is_empty());
            }

            let limit = max_discards(hand);
            assert!(limit == 3 || limit == 4);
        });

        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn discards_keep_structure() {
        // Pairs and trips are never discarded with the default limit.
        let mut unique = HashSet::default();

        Deck::default().for_each_hand(5, |hand| {
            let positions = recommend_discards(hand, max_discards(hand));
            let plan = DrawPlan::new(hand);

            match plan {
                DrawPlan::Trips(rank) | DrawPlan::Pair(rank) => {
                    assert!(positions.iter().all(|&idx| hand[idx].rank() != rank));
                }
                DrawPlan::TwoPair(high, low) => {
                    assert_eq!(positions.len(), 1);
                    let rank = hand[positions[0]].rank();
                    assert!(rank != high && rank != low);
                }
                DrawPlan::FlushDraw(_) | DrawPlan::StraightDraw(_) => {
                    assert_eq!(positions.len(), 1);
                }
                _ => {}
            }

            unique.insert(positions.len());
        });

        let mut lengths = unique.into_iter().collect::<Vec<_>>();
        lengths.sort_unstable();
        assert_eq!(lengths, vec![0, 1, 2, 3, 4]);
    }
}

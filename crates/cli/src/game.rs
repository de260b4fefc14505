// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards draw game with recommended discards.
use anyhow::{Context, Result};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;

use drawpoker_eval::{
    Card, Deck, DrawPlan, EvaluatedHand, draw_recommended, max_discards, winners,
};

/// The number of cards dealt to each player.
const HAND_SIZE: usize = 5;

/// Game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of players.
    pub players: usize,
    /// Optional seed for the deck shuffle.
    pub seed: Option<u64>,
}

/// Plays a game with a shuffled deck and prints it to stdout.
pub fn run(config: Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    info!("Starting game with {} players", config.players);

    let deck = Deck::new_and_shuffled(&mut rng);
    let mut stdout = std::io::stdout().lock();
    play(deck, config.players, &mut stdout)?;

    Ok(())
}

/// Deals, draws and shows down a game, returns the winners indices.
pub fn play<W: Write>(mut deck: Deck, players: usize, out: &mut W) -> Result<Vec<usize>> {
    let mut hands = Vec::with_capacity(players);
    for _ in 0..players {
        let cards = deck.deal(HAND_SIZE).context("deal error")?;
        hands.push(cards);
    }

    writeln!(out, "Initial hands:")?;
    for (idx, cards) in hands.iter().enumerate() {
        writeln!(out, "Player {}: {}", idx + 1, format_cards(cards))?;
    }

    writeln!(out)?;
    for (idx, cards) in hands.iter_mut().enumerate() {
        debug!(
            "Player {} plan {:?} max discards {}",
            idx + 1,
            DrawPlan::new(cards),
            max_discards(cards)
        );

        let draw = draw_recommended(&mut deck, cards)
            .with_context(|| format!("draw error for player {}", idx + 1))?;

        if draw.is_pat() {
            writeln!(out, "Player {} stood pat.", idx + 1)?;
        } else {
            writeln!(
                out,
                "Player {} discarded: {} and drew: {}",
                idx + 1,
                format_cards(&draw.discarded),
                format_cards(&draw.drawn)
            )?;
        }
    }

    let evaluated = hands
        .iter()
        .map(|cards| EvaluatedHand::eval(cards))
        .collect::<Vec<_>>();

    writeln!(out)?;
    writeln!(out, "Final hands:")?;
    for (idx, (cards, hand)) in hands.iter().zip(&evaluated).enumerate() {
        writeln!(
            out,
            "Player {}: {} ({})",
            idx + 1,
            format_cards(cards),
            hand.category()
        )?;
    }

    let winners = winners(&evaluated);
    debug!("Showdown winners {winners:?}");

    writeln!(out)?;
    writeln!(out, "{}", result_line(&winners))?;

    Ok(winners)
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn result_line(winners: &[usize]) -> String {
    match winners {
        [winner] => format!("Winner: Player {}", winner + 1),
        _ => {
            let players = winners
                .iter()
                .map(|idx| (idx + 1).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("Result: Tie among players {players}")
        }
    }
}

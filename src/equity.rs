use std::cmp::Ordering;

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, standard_deck};
use crate::error::{AdvisorError, Result};
use crate::evaluator::HandEvaluator;

pub const DEFAULT_TRIALS: u32 = 1000;
pub const BOARD_SIZE: usize = 5;

/// Win/tie/loss tally of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    pub equity: f64,
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
    pub trials: u32,
}

impl EquityResult {
    fn from_counts(wins: u32, ties: u32, trials: u32) -> Self {
        Self {
            equity: (wins as f64 + 0.5 * ties as f64) / trials as f64,
            wins,
            ties,
            losses: trials - wins - ties,
            trials,
        }
    }
}

/// One sampled completion: the opponent's hole cards plus the cards that
/// finish the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub opponent: [Card; 2],
    pub runout: Vec<Card>,
}

/// Undealt cards for a fixed hero hand and board.
///
/// Each draw moves the picked cards to the front of the array by swapping, so
/// the array is always a permutation of the same card set and nothing has to
/// be put back between trials.
#[derive(Debug, Clone)]
pub struct CardPool {
    cards: Vec<Card>,
    runout_len: usize,
}

impl CardPool {
    pub fn new(hero: &[Card], board: &[Card]) -> Result<Self> {
        validate_hand(hero, board)?;
        let cards: Vec<Card> = standard_deck()
            .into_iter()
            .filter(|card| !hero.contains(card) && !board.contains(card))
            .collect();
        Ok(Self {
            cards,
            runout_len: BOARD_SIZE - board.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Deal {
        let drawn = self.draw(rng, 2 + self.runout_len);
        Deal {
            opponent: [drawn[0], drawn[1]],
            runout: drawn[2..].to_vec(),
        }
    }

    fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) -> &[Card] {
        let len = self.cards.len();
        for i in 0..count {
            let pick = rng.gen_range(i..len);
            self.cards.swap(i, pick);
        }
        &self.cards[..count]
    }
}

fn validate_hand(hero: &[Card], board: &[Card]) -> Result<()> {
    if hero.len() != 2 {
        return Err(AdvisorError::InvalidHand(format!(
            "hero needs exactly 2 cards, got {}",
            hero.len()
        )));
    }
    if board.len() > BOARD_SIZE {
        return Err(AdvisorError::InvalidHand(format!(
            "board holds at most {BOARD_SIZE} cards, got {}",
            board.len()
        )));
    }
    if let Some(card) = hero.iter().chain(board).duplicates().next() {
        return Err(AdvisorError::InvalidHand(format!(
            "card {card} appears more than once"
        )));
    }
    Ok(())
}

/// Estimates hero's share of the pot against one random hand.
///
/// Each trial deals the opponent two cards from the undealt pool, runs the
/// board out to five cards and compares evaluator scores.
pub fn estimate_equity<E, R>(
    hero: &[Card],
    board: &[Card],
    trials: u32,
    evaluator: &E,
    rng: &mut R,
) -> Result<EquityResult>
where
    E: HandEvaluator + ?Sized,
    R: Rng + ?Sized,
{
    let mut pool = CardPool::new(hero, board)?;
    if trials == 0 {
        return Err(AdvisorError::InvalidTrialCount(trials));
    }

    let mut full_board = Vec::with_capacity(BOARD_SIZE);
    let mut wins = 0u32;
    let mut ties = 0u32;

    for _ in 0..trials {
        let deal = pool.deal(rng);
        full_board.clear();
        full_board.extend_from_slice(board);
        full_board.extend_from_slice(&deal.runout);

        let hero_score = evaluator.evaluate(&full_board, hero);
        let opponent_score = evaluator.evaluate(&full_board, &deal.opponent);

        match hero_score.cmp(&opponent_score) {
            Ordering::Less => wins += 1,
            Ordering::Equal => ties += 1,
            Ordering::Greater => {}
        }
    }

    let result = EquityResult::from_counts(wins, ties, trials);
    debug!(
        trials,
        wins,
        ties,
        equity = result.equity,
        "equity estimate complete"
    );
    Ok(result)
}

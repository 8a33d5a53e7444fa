use itertools::Itertools;

use crate::cards::{Card, Rank};

pub const TEXTURE_LIMIT: f64 = 0.20;

const DRY_RAINBOW_LOW: f64 = 0.15;
const DISCONNECTED: f64 = 0.10;
const TWO_TONE: f64 = -0.15;
const MONOTONE: f64 = -0.20;
const TWO_TO_STRAIGHT: f64 = -0.10;
const HIGH_PAIR: f64 = -0.10;

fn is_high(rank: Rank) -> bool {
    matches!(rank, Rank::Ace | Rank::King | Rank::Queen)
}

/// Shift applied to fold chance for the given community cards.
///
/// Dry, disconnected boards push it up; suited, connected and high-paired
/// boards pull it down. Every matching term is summed before clamping to
/// `±TEXTURE_LIMIT`. An empty board scores zero.
pub fn board_texture_score(board: &[Card]) -> f64 {
    if board.is_empty() {
        return 0.0;
    }

    let unique_suits = board.iter().map(|card| card.suit).unique().count();
    let rank_counts = board.iter().map(|card| card.rank).counts();
    let paired = rank_counts.values().any(|&count| count >= 2);
    let high_pair = rank_counts
        .iter()
        .any(|(&rank, &count)| count >= 2 && is_high(rank));
    let high_present = board.iter().any(|card| is_high(card.rank));

    let gaps: Vec<u8> = board
        .iter()
        .map(|card| card.rank.index())
        .sorted()
        .tuple_windows()
        .map(|(low, high)| high - low)
        .collect();
    let disconnected = gaps.iter().all(|&gap| gap >= 3);
    let two_to_straight = gaps.iter().any(|&gap| gap <= 2);

    let mut score = 0.0;
    if unique_suits == 3 && !paired && !high_present {
        score += DRY_RAINBOW_LOW;
    }
    if disconnected {
        score += DISCONNECTED;
    }
    match unique_suits {
        2 => score += TWO_TONE,
        1 => score += MONOTONE,
        _ => {}
    }
    if two_to_straight {
        score += TWO_TO_STRAIGHT;
    }
    if high_pair {
        score += HIGH_PAIR;
    }

    score.clamp(-TEXTURE_LIMIT, TEXTURE_LIMIT)
}

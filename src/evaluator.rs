use std::cmp::Ordering;

use itertools::Itertools;

use crate::cards::{Card, Rank};

/// Maps a 5–7 card holding to a comparable strength.
///
/// Scores follow the usual lookup-table convention: a lower score is a
/// stronger hand and equal scores split the pot.
pub trait HandEvaluator {
    type Score: Ord + Copy;

    fn evaluate(&self, board: &[Card], hand: &[Card]) -> Self::Score;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandStrength {
    pub category: HandCategory,
    pub ranks: [u8; 5],
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

const SCORE_CEILING: u32 = 9 << 20;

/// Lower is stronger. Produced by [`HandStrength::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub u32);

impl HandStrength {
    /// Packs category and kickers into four-bit lanes and flips the order so
    /// the royal flush lands on the smallest value.
    pub fn score(&self) -> Score {
        let packed = self
            .ranks
            .iter()
            .fold(self.category as u32, |acc, &rank| (acc << 4) | rank as u32);
        Score(SCORE_CEILING - packed)
    }
}

fn fill(mut values: Vec<u8>) -> [u8; 5] {
    values.resize(5, 0);
    [values[0], values[1], values[2], values[3], values[4]]
}

fn kickers_below(groups: &[(u8, u8)], lead: u8) -> Vec<u8> {
    let mut kickers: Vec<u8> = groups
        .iter()
        .filter(|(c, _)| *c == 1)
        .map(|(_, r)| *r)
        .collect();
    kickers.sort_unstable_by(|a, b| b.cmp(a));
    let mut values = vec![lead];
    values.extend(kickers);
    values
}

fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut counts = [0u8; 15];
    let mut suits = [0u8; 4];
    let mut sorted_cards: Vec<u8> = cards.iter().map(|c| c.rank_value()).collect();
    sorted_cards.sort_unstable_by(|a, b| b.cmp(a));

    for card in cards {
        counts[card.rank_value() as usize] += 1;
        suits[card.suit.index()] += 1;
    }

    let is_flush = suits.contains(&5);

    let mut mask: u32 = 0;
    for rank_value in 2u8..=14 {
        if counts[rank_value as usize] > 0 {
            mask |= 1 << rank_value as u32;
            if rank_value == Rank::Ace.value() {
                mask |= 1 << 1; // wheel
            }
        }
    }

    let straight_high = (5u8..=14).rev().find(|&high| {
        let needed = (0..5u8).fold(0u32, |acc, i| acc | 1 << (high - i) as u32);
        mask & needed == needed
    });

    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&rank| counts[rank as usize] > 0)
        .map(|rank| (counts[rank as usize], rank))
        .collect();
    groups.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    if is_flush && let Some(high) = straight_high {
        return HandStrength {
            category: HandCategory::StraightFlush,
            ranks: fill(vec![high, high - 1, high - 2, high - 3, high - 4]),
        };
    }

    if let Some(&(count, rank)) = groups.first() {
        match count {
            4 => {
                let kicker = groups
                    .iter()
                    .find(|(c, _)| *c == 1)
                    .map(|(_, r)| *r)
                    .unwrap_or(0);
                return HandStrength {
                    category: HandCategory::FourOfAKind,
                    ranks: fill(vec![rank, kicker]),
                };
            }
            3 if groups.get(1).is_some_and(|(c, _)| *c == 2) => {
                return HandStrength {
                    category: HandCategory::FullHouse,
                    ranks: fill(vec![rank, groups[1].1]),
                };
            }
            _ => {}
        }
    }

    if is_flush {
        return HandStrength {
            category: HandCategory::Flush,
            ranks: fill(sorted_cards),
        };
    }

    if let Some(high) = straight_high {
        return HandStrength {
            category: HandCategory::Straight,
            ranks: fill(vec![high, high - 1, high - 2, high - 3, high - 4]),
        };
    }

    if let Some(&(count, rank)) = groups.first() {
        match count {
            3 => {
                return HandStrength {
                    category: HandCategory::ThreeOfAKind,
                    ranks: fill(kickers_below(&groups, rank)),
                };
            }
            2 if groups.get(1).is_some_and(|(c, _)| *c == 2) => {
                let kicker = groups
                    .iter()
                    .find(|(c, _)| *c == 1)
                    .map(|(_, r)| *r)
                    .unwrap_or(0);
                return HandStrength {
                    category: HandCategory::TwoPair,
                    ranks: fill(vec![rank, groups[1].1, kicker]),
                };
            }
            2 => {
                return HandStrength {
                    category: HandCategory::OnePair,
                    ranks: fill(kickers_below(&groups, rank)),
                };
            }
            _ => {}
        }
    }

    HandStrength {
        category: HandCategory::HighCard,
        ranks: fill(sorted_cards),
    }
}

pub fn best_five_card_hand(cards: &[Card]) -> HandStrength {
    assert!(cards.len() >= 5, "at least 5 cards required");
    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|combo| evaluate_five(&[combo[0], combo[1], combo[2], combo[3], combo[4]]))
        .max()
        .expect("combinations non-empty")
}

/// Scores every 5-card subset and keeps the best one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceEvaluator;

impl HandEvaluator for BruteForceEvaluator {
    type Score = Score;

    fn evaluate(&self, board: &[Card], hand: &[Card]) -> Score {
        let cards: Vec<Card> = hand.iter().chain(board).copied().collect();
        best_five_card_hand(&cards).score()
    }
}

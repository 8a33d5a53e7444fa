use serde::{Deserialize, Serialize};

pub const DEFAULT_MULTIPLIERS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingEv {
    pub multiplier: f64,
    pub ev: f64,
}

/// Best bet size plus the EV of every candidate, in the order they were tried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetPlan {
    pub best_multiplier: f64,
    pub evaluations: Vec<SizingEv>,
}

impl BetPlan {
    pub fn best(&self) -> Option<&SizingEv> {
        self.evaluations
            .iter()
            .find(|entry| entry.multiplier == self.best_multiplier)
    }
}

/// EV of betting `pot * multiplier` when the opponent folds with probability
/// `fold_chance` and otherwise calls and goes to showdown.
pub fn bet_ev(equity: f64, pot: f64, fold_chance: f64, multiplier: f64) -> f64 {
    let bet = pot * multiplier;
    fold_chance * pot + (1.0 - fold_chance) * (equity * (pot + bet) - (1.0 - equity) * bet)
}

/// Sweeps `multipliers` in order and keeps the first strict maximum.
///
/// An empty list produces an empty plan with a best multiplier of zero.
pub fn suggest_bet_sizing(equity: f64, pot: f64, fold_chance: f64, multipliers: &[f64]) -> BetPlan {
    let evaluations: Vec<SizingEv> = multipliers
        .iter()
        .map(|&multiplier| SizingEv {
            multiplier,
            ev: bet_ev(equity, pot, fold_chance, multiplier),
        })
        .collect();

    let mut best: Option<&SizingEv> = None;
    for entry in &evaluations {
        if best.is_none_or(|current| entry.ev > current.ev) {
            best = Some(entry);
        }
    }
    let best_multiplier = best.map(|entry| entry.multiplier).unwrap_or(0.0);

    BetPlan {
        best_multiplier,
        evaluations,
    }
}

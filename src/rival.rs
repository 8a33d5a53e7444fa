use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::error::{AdvisorError, Result};
use crate::game::Street;
use crate::texture::board_texture_score;

pub const MIN_FOLD_CHANCE: f64 = 0.02;
pub const MAX_FOLD_CHANCE: f64 = 0.98;
const MIN_RATIO: f64 = 0.01;
const MAX_RATIO: f64 = 3.0;
const POSITION_SHIFT: f64 = 0.05;

/// Coarse read on how the opponent responds to bets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum RivalStyle {
    Tight,
    Tag,
    #[default]
    Neutral,
    Lag,
    Station,
}

impl RivalStyle {
    pub const ALL: [RivalStyle; 5] = [
        RivalStyle::Tight,
        RivalStyle::Tag,
        RivalStyle::Neutral,
        RivalStyle::Lag,
        RivalStyle::Station,
    ];

    /// Reads a profile tag. Unrecognised tags carry no adjustment, which is
    /// exactly what `Neutral` does.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "tight" => RivalStyle::Tight,
            "tag" => RivalStyle::Tag,
            "neutral" => RivalStyle::Neutral,
            "lag" => RivalStyle::Lag,
            "station" => RivalStyle::Station,
            other => {
                debug!(tag = other, "unknown rival style, using neutral");
                RivalStyle::Neutral
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RivalStyle::Tight => "tight",
            RivalStyle::Tag => "tag",
            RivalStyle::Neutral => "neutral",
            RivalStyle::Lag => "lag",
            RivalStyle::Station => "station",
        }
    }

    pub fn fold_adjustment(self) -> f64 {
        match self {
            RivalStyle::Tight => 0.15,
            RivalStyle::Tag => 0.05,
            RivalStyle::Neutral => 0.0,
            RivalStyle::Lag => -0.05,
            RivalStyle::Station => -0.15,
        }
    }
}

impl From<String> for RivalStyle {
    fn from(tag: String) -> Self {
        RivalStyle::from_tag(&tag)
    }
}

impl Display for RivalStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Logistic response of folds to bet/pot ratio on one street.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldCurve {
    pub alpha: f64,
    pub beta: f64,
}

impl FoldCurve {
    pub fn resolve(street: Street) -> Self {
        let (alpha, beta) = match street {
            Street::Preflop => (-1.5, 1.8),
            Street::Flop => (-1.0, 2.0),
            Street::Turn => (-0.5, 2.2),
            Street::River => (0.0, 2.5),
        };
        Self { alpha, beta }
    }

    pub fn base(&self, ratio: f64) -> f64 {
        logistic(self.alpha + self.beta * ratio)
    }
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Probability that the opponent folds to a bet of `bet` into `pot`.
///
/// The bet/pot ratio is saturated to `[0.01, 3.0]` before the street curve is
/// applied; position, style and board texture shifts are added afterwards and
/// the sum is clamped to `[MIN_FOLD_CHANCE, MAX_FOLD_CHANCE]`.
pub fn fold_chance(
    bet: f64,
    pot: f64,
    street: Street,
    in_position: bool,
    style: RivalStyle,
    board: &[Card],
) -> Result<f64> {
    if !(pot > 0.0 && pot.is_finite()) {
        return Err(AdvisorError::InvalidPot(pot));
    }

    // f64::min turns a NaN ratio into the ceiling
    let ratio = (bet / pot).min(MAX_RATIO).max(MIN_RATIO);
    let base = FoldCurve::resolve(street).base(ratio);
    let position = if in_position {
        -POSITION_SHIFT
    } else {
        POSITION_SHIFT
    };
    let texture = board_texture_score(board);

    let raw = base + position + style.fold_adjustment() + texture;
    Ok(raw.clamp(MIN_FOLD_CHANCE, MAX_FOLD_CHANCE))
}

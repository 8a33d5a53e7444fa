pub mod advisor;
pub mod cards;
pub mod equity;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod rival;
pub mod sizing;
pub mod texture;
pub mod web;

pub use advisor::{Advice, AdviceRequest, Advisor, AdvisorConfig};
pub use equity::{EquityResult, estimate_equity};
pub use error::AdvisorError;
pub use rival::{RivalStyle, fold_chance};
pub use sizing::{BetPlan, suggest_bet_sizing};
pub use texture::board_texture_score;

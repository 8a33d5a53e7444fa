use std::fs;
use std::path::Path;

use anyhow::Context;
use owo_colors::OwoColorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, parse_cards};
use crate::equity::{DEFAULT_TRIALS, EquityResult, estimate_equity};
use crate::error::Result;
use crate::evaluator::{BruteForceEvaluator, HandEvaluator};
use crate::game::Street;
use crate::rival::{RivalStyle, fold_chance};
use crate::sizing::{BetPlan, DEFAULT_MULTIPLIERS, suggest_bet_sizing};
use crate::texture::board_texture_score;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub trials: u32,
    pub multipliers: Vec<f64>,
    pub seed: Option<u64>,
    pub no_color: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
            seed: None,
            no_color: false,
        }
    }
}

impl AdvisorConfig {
    /// Loads a JSON config file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

/// What the player sees at the table: their cards, the board and the bet
/// they are considering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub hand: String,
    #[serde(default)]
    pub board: String,
    pub pot: f64,
    pub bet: f64,
    /// Inferred from the board size when absent.
    #[serde(default)]
    pub street: Option<Street>,
    #[serde(default)]
    pub in_position: bool,
    #[serde(default)]
    pub profile: RivalStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub hero: Vec<String>,
    pub board: Vec<String>,
    pub street: Street,
    pub profile: RivalStyle,
    pub in_position: bool,
    pub equity: EquityResult,
    pub fold_chance: f64,
    pub texture: f64,
    pub plan: BetPlan,
    pub best_bet: f64,
}

pub struct Advisor<E = BruteForceEvaluator> {
    config: AdvisorConfig,
    evaluator: E,
    rng: StdRng,
}

impl Advisor<BruteForceEvaluator> {
    pub fn new(config: AdvisorConfig) -> Self {
        Self::with_evaluator(config, BruteForceEvaluator)
    }
}

impl<E: HandEvaluator> Advisor<E> {
    pub fn with_evaluator(config: AdvisorConfig, evaluator: E) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(seed, trials = config.trials, "advisor ready");
        Self {
            config,
            evaluator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn advise(&mut self, request: &AdviceRequest) -> Result<Advice> {
        let hero = parse_cards(&request.hand)?;
        let board = parse_cards(&request.board)?;
        let street = request
            .street
            .or_else(|| Street::from_board_len(board.len()))
            .unwrap_or_default();

        // pot is validated before any simulation runs
        let fold = fold_chance(
            request.bet,
            request.pot,
            street,
            request.in_position,
            request.profile,
            &board,
        )?;
        let equity = estimate_equity(
            &hero,
            &board,
            self.config.trials,
            &self.evaluator,
            &mut self.rng,
        )?;
        let plan = suggest_bet_sizing(equity.equity, request.pot, fold, &self.config.multipliers);

        Ok(Advice {
            hero: hero.iter().map(Card::to_string).collect(),
            board: board.iter().map(Card::to_string).collect(),
            street,
            profile: request.profile,
            in_position: request.in_position,
            equity,
            fold_chance: fold,
            texture: board_texture_score(&board),
            best_bet: request.pot * plan.best_multiplier,
            plan,
        })
    }

    pub fn print_advice(&self, advice: &Advice) {
        let board = if advice.board.is_empty() {
            "--".to_string()
        } else {
            advice.board.join(" ")
        };
        let seat = if advice.in_position { "IP" } else { "OOP" };
        let sizes = advice
            .plan
            .evaluations
            .iter()
            .map(|entry| format!("{:.0}% pot EV {:.2}", entry.multiplier * 100.0, entry.ev))
            .collect::<Vec<_>>()
            .join(", ");

        if self.config.no_color {
            println!(
                "Hero {} | Board {} | Street {} | Profile {} | {}",
                advice.hero.join(" "),
                board,
                advice.street,
                advice.profile,
                seat
            );
            println!(
                "Equity {:.1}% ({} trials) | Fold chance {:.1}% | Texture {:+.2}",
                advice.equity.equity * 100.0,
                advice.equity.trials,
                advice.fold_chance * 100.0,
                advice.texture
            );
            println!("Sizes: {sizes}");
            println!(
                "Best size {:.0}% pot ({:.2})",
                advice.plan.best_multiplier * 100.0,
                advice.best_bet
            );
        } else {
            println!(
                "{} {} {} {} {} {} {} {} {}",
                "Hero".bold().white(),
                advice.hero.join(" ").bold().yellow(),
                "Board".bold().white(),
                board.bold().blue(),
                "Street".bold().white(),
                advice.street,
                "Profile".bold().white(),
                advice.profile,
                seat.cyan()
            );
            println!(
                "{} {:.1}% {} {:.1}% {} {:+.2}",
                "Equity".bold().cyan(),
                advice.equity.equity * 100.0,
                "Fold chance".bold().cyan(),
                advice.fold_chance * 100.0,
                "Texture".bold().cyan(),
                advice.texture
            );
            println!("{} {}", "Sizes".bold().white(), sizes);
            println!(
                "{} {} ({:.2})",
                "Best size".bold().magenta(),
                format!("{:.0}% pot", advice.plan.best_multiplier * 100.0)
                    .bold()
                    .green(),
                advice.best_bet
            );
        }
    }
}

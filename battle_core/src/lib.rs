//! battle_core - combat resolution engine for the squad battle game
//!
//! This library provides:
//! - Stat derivation: tier -> level -> base stats
//! - TypeMatchup: the cyclic job-advantage triangle
//! - Unit / Squad: combat state and the attack/defend/block operations
//! - Turn strategies: interactive (prompted) and fixed (computer)
//! - Battle: the turn state machine and win conditions
//!
//! All randomness is injected as `&mut impl Rng`, so battles replay
//! deterministically under a seeded generator.

pub mod battle;
pub mod config;
pub mod matchup;
pub mod squad;
pub mod stats;
pub mod strategy;
pub mod types;
pub mod unit;
pub mod view;

// Re-export core types for convenience
pub use battle::{Battle, TURN_CAP};
pub use config::{ConfigError, StatScaling};
pub use matchup::relative_strength;
pub use squad::{Squad, TargetError, COMPUTER_ROSTER, HUMAN_ROSTER, SQUAD_SIZE};
pub use stats::{derive_level, derive_stats, BaseStats};
pub use strategy::{
    FixedStrategy, InputSource, InteractiveStrategy, Move, MoveError, ScriptedInput, TurnAction,
    TurnStrategy,
};
pub use types::{Job, LevelTier, Outcome, Side, Strength};
pub use unit::{DamageOutcome, Unit, BLOCK_BONUS};
pub use view::{BattleEvent, RecordingRenderer, Renderer, SquadSnapshot, UnitSnapshot};

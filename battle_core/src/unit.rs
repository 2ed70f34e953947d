//! Unit - a single combatant and its combat state
//!
//! Damage formulas:
//! - attack: round((attack / 30) * 50 * strength_multiplier)
//! - incoming: round(damage / ((temporary_defense + defense) / 10)),
//!   preceded by an evasion check when the unit has any evasion
//!
//! Examples (level 10, attack 20, defense 20):
//! - Same matchup: round(33.3) = 33 damage dealt
//! - Strong matchup: round(33.3 * 1.2) = 40 dealt, 20 applied after the
//!   defender's 2.0 adjustment

use crate::config::StatScaling;
use crate::stats::{derive_level, derive_stats, BaseStats};
use crate::types::{Job, LevelTier, Strength};
use crate::view::UnitSnapshot;
use rand::Rng;

/// A 30-attack unit deals this much raw damage
pub const ATTACK_MAX: f64 = 50.0;
/// Attack stat divisor in the raw damage formula
pub const ATTACK_DIVISOR: f64 = 30.0;
/// Damage multiplier for a Strong matchup
pub const STRONG_MULTIPLIER: f64 = 1.2;
/// Damage multiplier for a Weak matchup
pub const WEAK_MULTIPLIER: f64 = 0.5;
/// Upper bound of the evasion draw, inclusive from 0
pub const EVASION_DIE: i32 = 20;
/// Temporary defense granted per block
pub const BLOCK_BONUS: i32 = 2;
/// Divisor turning summed defense into a damage adjustment
pub const DEFENSE_SCALE: f64 = 10.0;

/// What happened when damage was applied to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The evasion check passed; no HP change
    Dodged,
    /// Damage landed after the defense adjustment
    Hit {
        applied: i32,
        remaining_hp: i32,
        knocked_out: bool,
    },
}

/// One combatant: immutable identity and derived stats, mutable HP and
/// temporary defense
#[derive(Debug, Clone)]
pub struct Unit {
    name: String,
    job: Job,
    level: u32,
    stats: BaseStats,
    current_hp: i32,
    temporary_defense: i32,
}

impl Unit {
    /// Recruit a unit, rolling its level within the given tier
    pub fn recruit(
        name: impl Into<String>,
        tier: LevelTier,
        job: Job,
        rng: &mut impl Rng,
        scaling: &StatScaling,
    ) -> Self {
        let level = derive_level(tier, rng);
        Unit::from_parts(name, job, level, derive_stats(level, scaling))
    }

    /// Build a unit with exact stats (scripted battles and tests)
    pub fn from_parts(name: impl Into<String>, job: Job, level: u32, stats: BaseStats) -> Self {
        Unit {
            name: name.into(),
            job,
            level,
            stats,
            current_hp: stats.max_hp,
            temporary_defense: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job(&self) -> Job {
        self.job
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn stats(&self) -> BaseStats {
        self.stats
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn temporary_defense(&self) -> i32 {
        self.temporary_defense
    }

    /// A unit at 0 HP can neither act nor be targeted
    pub fn is_knocked_out(&self) -> bool {
        self.current_hp <= 0
    }

    /// Damage this unit deals at the given relative strength
    pub fn attack_damage(&self, strength: Strength) -> i32 {
        let multiplier = match strength {
            Strength::Strong => STRONG_MULTIPLIER,
            Strength::Weak => WEAK_MULTIPLIER,
            Strength::Same => 1.0,
        };

        let raw = (self.stats.attack as f64 / ATTACK_DIVISOR) * ATTACK_MAX;
        (raw * multiplier).round() as i32
    }

    /// Apply incoming damage, after an evasion check and the defense
    /// adjustment
    ///
    /// The evasion draw happens only when the unit has any evasion: a
    /// uniform draw in [0, 20] at or below the evasion stat dodges the
    /// attack outright. HP is clamped at 0.
    pub fn receive_damage(&mut self, damage: i32, rng: &mut impl Rng) -> DamageOutcome {
        if self.stats.evasion > 0 {
            let draw = rng.gen_range(0..=EVASION_DIE);
            if draw <= self.stats.evasion {
                return DamageOutcome::Dodged;
            }
        }

        let adjustment = (self.temporary_defense + self.stats.defense) as f64 / DEFENSE_SCALE;
        let applied = (damage as f64 / adjustment).round() as i32;

        self.current_hp = (self.current_hp - applied).max(0);

        DamageOutcome::Hit {
            applied,
            remaining_hp: self.current_hp,
            knocked_out: self.is_knocked_out(),
        }
    }

    /// Raise temporary defense for the current enemy turn cycle
    pub fn block(&mut self) {
        self.temporary_defense += BLOCK_BONUS;
    }

    /// Clear the block buff; called once per full enemy turn cycle
    pub fn reset_temporary_defense(&mut self) {
        self.temporary_defense = 0;
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            name: self.name.clone(),
            job: self.job,
            level: self.level,
            current_hp: self.current_hp,
            max_hp: self.stats.max_hp,
            knocked_out: self.is_knocked_out(),
        }
    }
}

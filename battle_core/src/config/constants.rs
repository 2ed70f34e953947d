//! Stat scaling constants

use serde::{Deserialize, Serialize};

/// Base values for level-scaled unit stats
///
/// Each derived stat is round(base * level / 10).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatScaling {
    /// Base hit points at the level cap
    #[serde(default = "default_hp_base")]
    pub hp_base: f64,
    /// Base attack at the level cap
    #[serde(default = "default_attack_base")]
    pub attack_base: f64,
    /// Base defense at the level cap
    #[serde(default = "default_defense_base")]
    pub defense_base: f64,
    /// Base evasion at the level cap
    #[serde(default = "default_evasion_base")]
    pub evasion_base: f64,
}

impl Default for StatScaling {
    fn default() -> Self {
        StatScaling {
            hp_base: 100.0,
            attack_base: 20.0,
            defense_base: 20.0,
            evasion_base: 5.0,
        }
    }
}

fn default_hp_base() -> f64 {
    100.0
}
fn default_attack_base() -> f64 {
    20.0
}
fn default_defense_base() -> f64 {
    20.0
}
fn default_evasion_base() -> f64 {
    5.0
}

//! Core types for the squad battle game

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// A unit's job, which places it in the advantage triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    Mage,
    Knight,
    Archer,
}

impl Job {
    /// Get all jobs
    pub fn all() -> &'static [Job] {
        &[Job::Mage, Job::Knight, Job::Archer]
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Job::Mage => "mage",
            Job::Knight => "knight",
            Job::Archer => "archer",
        };
        f.write_str(name)
    }
}

/// Coarse level bucket determining a unit's random level range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTier {
    Low,
    Medium,
    High,
}

impl LevelTier {
    /// Get all tiers
    pub fn all() -> &'static [LevelTier] {
        &[LevelTier::Low, LevelTier::Medium, LevelTier::High]
    }

    /// Inclusive level range for this tier
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            LevelTier::Low => 1..=3,
            LevelTier::Medium => 4..=6,
            LevelTier::High => 7..=10,
        }
    }
}

/// Strength of an attacker relative to its target under the job triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Same,
    Strong,
    Weak,
}

/// The two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Human,
    Computer,
}

/// Terminal result of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Victory(Side),
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ranges() {
        assert_eq!(LevelTier::Low.range(), 1..=3);
        assert_eq!(LevelTier::Medium.range(), 4..=6);
        assert_eq!(LevelTier::High.range(), 7..=10);
    }

    #[test]
    fn test_tier_ranges_cover_levels_without_overlap() {
        let mut covered: Vec<u32> = LevelTier::all()
            .iter()
            .flat_map(|tier| tier.range())
            .collect();
        covered.sort();
        assert_eq!(covered, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_job_display_is_lowercase() {
        assert_eq!(Job::Mage.to_string(), "mage");
        assert_eq!(Job::Knight.to_string(), "knight");
        assert_eq!(Job::Archer.to_string(), "archer");
    }

}

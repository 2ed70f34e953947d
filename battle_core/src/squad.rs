//! Squad - a side's three-unit roster

use crate::config::StatScaling;
use crate::types::{Job, LevelTier};
use crate::unit::Unit;
use crate::view::SquadSnapshot;
use rand::Rng;
use thiserror::Error;

/// Units fielded per side
pub const SQUAD_SIZE: usize = 3;

/// Roster names for the human side
pub const HUMAN_ROSTER: [&str; SQUAD_SIZE] = ["Falia", "Erom", "Ama"];
/// Roster names for the computer side
pub const COMPUTER_ROSTER: [&str; SQUAD_SIZE] = ["Criati", "Ledde", "Tyllion"];

/// Why a typed target name was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("no unit with that name")]
    UnknownName,
    #[error("{0} is already knocked out")]
    KnockedOut(String),
}

/// Three units fighting on one side
#[derive(Debug, Clone)]
pub struct Squad {
    units: [Unit; SQUAD_SIZE],
}

impl Squad {
    /// Recruit a squad, rolling a uniform tier and job for each name
    pub fn recruit(names: [&str; SQUAD_SIZE], rng: &mut impl Rng, scaling: &StatScaling) -> Self {
        let units = names.map(|name| {
            let tier = LevelTier::all()[rng.gen_range(0..LevelTier::all().len())];
            let job = Job::all()[rng.gen_range(0..Job::all().len())];
            Unit::recruit(name, tier, job, rng, scaling)
        });
        Squad { units }
    }

    /// Build a squad from exact units (scripted battles and tests)
    pub fn from_units(units: [Unit; SQUAD_SIZE]) -> Self {
        Squad { units }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> &Unit {
        &self.units[index]
    }

    pub fn unit_mut(&mut self, index: usize) -> &mut Unit {
        &mut self.units[index]
    }

    /// Roster names in fixed order
    pub fn names(&self) -> [&str; SQUAD_SIZE] {
        [
            self.units[0].name(),
            self.units[1].name(),
            self.units[2].name(),
        ]
    }

    /// Resolve a typed name to a live unit's index, case-insensitively
    pub fn target_by_name(&self, name: &str) -> Result<usize, TargetError> {
        let index = self
            .units
            .iter()
            .position(|unit| unit.name().eq_ignore_ascii_case(name))
            .ok_or(TargetError::UnknownName)?;

        if self.units[index].is_knocked_out() {
            return Err(TargetError::KnockedOut(self.units[index].name().to_string()));
        }

        Ok(index)
    }

    /// Indices of units still standing, in roster order
    pub fn live_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.units
            .iter()
            .enumerate()
            .filter(|(_, unit)| !unit.is_knocked_out())
            .map(|(index, _)| index)
    }

    /// A squad with all three units down has lost
    pub fn is_knocked_out(&self) -> bool {
        self.units.iter().all(Unit::is_knocked_out)
    }

    /// Summed remaining HP, used by the turn-cap tie-break
    pub fn total_hp(&self) -> i32 {
        self.units.iter().map(Unit::current_hp).sum()
    }

    /// Clear block buffs on every unit; called once per full enemy turn cycle
    pub fn reset_temporary_defense(&mut self) {
        for unit in &mut self.units {
            unit.reset_temporary_defense();
        }
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> SquadSnapshot {
        self.units.iter().map(Unit::snapshot).collect()
    }
}

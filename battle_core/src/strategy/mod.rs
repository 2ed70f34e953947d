//! Turn-taking strategies
//!
//! A strategy only chooses what a unit does; the battle controller executes
//! the choice. This keeps the controller free of concrete I/O and lets tests
//! substitute scripted variants for either side.

mod fixed;
mod interactive;

pub use fixed::FixedStrategy;
pub use interactive::{parse_move, InputSource, InteractiveStrategy, Move, MoveError, ScriptedInput};

use crate::squad::Squad;
use crate::unit::Unit;
use crate::view::Renderer;

/// A unit's chosen action for one sub-turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Attack the enemy unit at this index
    Attack { target: usize },
    Block,
}

/// Chooses an action for each live unit on one side
///
/// Contract: an `Attack` target must index a live unit in `enemies`.
pub trait TurnStrategy {
    fn choose(&mut self, actor: &Unit, enemies: &Squad, renderer: &mut dyn Renderer) -> TurnAction;
}

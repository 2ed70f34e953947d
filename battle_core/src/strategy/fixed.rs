//! Fixed strategy - the computer's built-in policy
//!
//! Always attacks. Prefers the live target the actor is strong against,
//! breaking ties toward the lowest current HP, and otherwise takes the
//! lowest-HP live target.

use super::{TurnAction, TurnStrategy};
use crate::matchup::relative_strength;
use crate::squad::Squad;
use crate::types::Strength;
use crate::unit::Unit;
use crate::view::Renderer;

/// Deterministic computer policy
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStrategy;

impl FixedStrategy {
    fn pick_target(actor: &Unit, enemies: &Squad) -> Option<usize> {
        let strong = enemies
            .live_indices()
            .filter(|&index| {
                relative_strength(actor.job(), enemies.unit(index).job()) == Strength::Strong
            })
            .min_by_key(|&index| enemies.unit(index).current_hp());

        strong.or_else(|| {
            enemies
                .live_indices()
                .min_by_key(|&index| enemies.unit(index).current_hp())
        })
    }
}

impl TurnStrategy for FixedStrategy {
    fn choose(&mut self, actor: &Unit, enemies: &Squad, _renderer: &mut dyn Renderer) -> TurnAction {
        match Self::pick_target(actor, enemies) {
            Some(target) => TurnAction::Attack { target },
            // No live target means the battle is already decided.
            None => TurnAction::Block,
        }
    }
}

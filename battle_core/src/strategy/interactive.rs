//! Interactive strategy - prompts a person for moves and targets
//!
//! Invalid input is a recoverable validation failure, never a fault: the
//! strategy reports the rejection through the renderer and prompts again
//! until a move token and (for attacks) a live target resolve.

use super::{TurnAction, TurnStrategy};
use crate::squad::Squad;
use crate::unit::Unit;
use crate::view::{BattleEvent, Renderer};
use std::collections::VecDeque;
use thiserror::Error;

/// Supplies one line of text per prompt, synchronously
pub trait InputSource {
    fn read_line(&mut self) -> String;
}

/// Why a move token was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("empty move")]
    Empty,
    #[error("unrecognized move")]
    Unrecognized,
}

/// The two moves a person can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Attack,
    Block,
}

/// Parse a move token: the first character decides, case-insensitively
pub fn parse_move(input: &str) -> Result<Move, MoveError> {
    let first = input.chars().next().ok_or(MoveError::Empty)?;

    match first.to_ascii_lowercase() {
        'a' => Ok(Move::Attack),
        'b' => Ok(Move::Block),
        _ => Err(MoveError::Unrecognized),
    }
}

/// Interactive turn strategy over a line-oriented input source
pub struct InteractiveStrategy<I: InputSource> {
    input: I,
}

impl<I: InputSource> InteractiveStrategy<I> {
    pub fn new(input: I) -> Self {
        InteractiveStrategy { input }
    }

    fn prompt_move(&mut self, actor: &Unit, renderer: &mut dyn Renderer) -> Move {
        let mut retry = false;
        loop {
            renderer.render(&BattleEvent::MovePrompt {
                name: actor.name().to_string(),
                retry,
            });

            match parse_move(&self.input.read_line()) {
                Ok(mv) => return mv,
                Err(err) => renderer.render(&BattleEvent::MoveRejected(err)),
            }
            retry = true;
        }
    }

    fn prompt_target(&mut self, enemies: &Squad, renderer: &mut dyn Renderer) -> usize {
        let mut retry = false;
        loop {
            renderer.render(&BattleEvent::TargetPrompt {
                names: enemies.names().map(String::from).to_vec(),
                retry,
            });

            match enemies.target_by_name(&self.input.read_line()) {
                Ok(index) => return index,
                Err(err) => renderer.render(&BattleEvent::TargetRejected(err)),
            }
            retry = true;
        }
    }
}

impl<I: InputSource> TurnStrategy for InteractiveStrategy<I> {
    fn choose(&mut self, actor: &Unit, enemies: &Squad, renderer: &mut dyn Renderer) -> TurnAction {
        match self.prompt_move(actor, renderer) {
            Move::Block => TurnAction::Block,
            Move::Attack => TurnAction::Attack {
                target: self.prompt_target(enemies, renderer),
            },
        }
    }
}

/// Input source fed from a fixed list of lines (tests and replays)
///
/// Returns an empty line once exhausted, which the prompting loops reject.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> String {
        self.lines.pop_front().unwrap_or_default()
    }
}

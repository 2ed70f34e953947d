//! Battle events and the renderer seam
//!
//! The core never prints. Everything a front-end might show is emitted as a
//! `BattleEvent` carrying read-only snapshots; return values from the
//! renderer never affect core logic.

use crate::squad::TargetError;
use crate::strategy::MoveError;
use crate::types::{Job, Outcome, Side};
use serde::{Deserialize, Serialize};

/// Read-only view of a unit for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub name: String,
    pub job: Job,
    pub level: u32,
    pub current_hp: i32,
    pub max_hp: i32,
    pub knocked_out: bool,
}

/// Read-only view of a squad, in roster order
pub type SquadSnapshot = Vec<UnitSnapshot>;

/// Everything the core reports to a front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// Both squads, rendered at each turn start and between half-turns
    Status {
        human: SquadSnapshot,
        computer: SquadSnapshot,
    },
    TurnBanner {
        side: Side,
        turn: u32,
    },
    /// A live unit is about to act
    UnitActs(UnitSnapshot),
    /// A knocked-out unit's sub-turn was skipped
    UnitDown {
        name: String,
    },
    Blocked {
        name: String,
        bonus: i32,
    },
    Dodged {
        name: String,
    },
    DamageTaken {
        name: String,
        applied: i32,
        remaining_hp: i32,
    },
    /// Ask for a move token; `retry` distinguishes re-prompts
    MovePrompt {
        name: String,
        retry: bool,
    },
    MoveRejected(MoveError),
    /// Ask for a target name among the live opposing roster
    TargetPrompt {
        names: Vec<String>,
        retry: bool,
    },
    TargetRejected(TargetError),
    Finished(Outcome),
}

/// Receives battle events from the core
pub trait Renderer {
    fn render(&mut self, event: &BattleEvent);
}

/// Renderer that records events for inspection (tests, headless runs)
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<BattleEvent>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        RecordingRenderer::default()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, event: &BattleEvent) {
        self.events.push(event.clone());
    }
}

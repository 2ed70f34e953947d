//! Battle controller - the turn state machine
//!
//! One turn is a human half-turn followed by a computer half-turn. The win
//! check runs after every unit sub-turn, so a finished battle skips whatever
//! sub-turns remain. Temporary defense resets once per full enemy turn
//! cycle, after the opposing side's half-turn completes, never per action.

use crate::matchup::relative_strength;
use crate::squad::Squad;
use crate::strategy::{TurnAction, TurnStrategy};
use crate::types::{Outcome, Side};
use crate::unit::{DamageOutcome, BLOCK_BONUS};
use crate::view::{BattleEvent, Renderer};
use rand::Rng;
use std::cmp::Ordering;

/// Battles run for at most this many turns before the HP tie-break
pub const TURN_CAP: u32 = 10;

/// Orchestrates two squads from turn 1 to a terminal outcome
#[derive(Debug)]
pub struct Battle {
    human: Squad,
    computer: Squad,
    turn: u32,
}

impl Battle {
    pub fn new(human: Squad, computer: Squad) -> Self {
        Battle {
            human,
            computer,
            turn: 1,
        }
    }

    pub fn human(&self) -> &Squad {
        &self.human
    }

    pub fn computer(&self) -> &Squad {
        &self.computer
    }

    /// Current turn, 1-based
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Play the battle to a terminal outcome
    pub fn run(
        &mut self,
        human_strategy: &mut dyn TurnStrategy,
        computer_strategy: &mut dyn TurnStrategy,
        renderer: &mut dyn Renderer,
        rng: &mut impl Rng,
    ) -> Outcome {
        let outcome = loop {
            self.render_status(renderer);
            if let Some(outcome) = self.half_turn(Side::Human, human_strategy, renderer, rng) {
                break outcome;
            }

            self.render_status(renderer);
            if let Some(outcome) = self.half_turn(Side::Computer, computer_strategy, renderer, rng)
            {
                break outcome;
            }

            if self.turn == TURN_CAP {
                break self.tie_break();
            }
            self.turn += 1;
        };

        renderer.render(&BattleEvent::Finished(outcome));
        outcome
    }

    fn render_status(&self, renderer: &mut dyn Renderer) {
        renderer.render(&BattleEvent::Status {
            human: self.human.snapshot(),
            computer: self.computer.snapshot(),
        });
    }

    /// One side's three sub-turns; Some(outcome) once the battle is decided
    fn half_turn(
        &mut self,
        side: Side,
        strategy: &mut dyn TurnStrategy,
        renderer: &mut dyn Renderer,
        rng: &mut impl Rng,
    ) -> Option<Outcome> {
        renderer.render(&BattleEvent::TurnBanner {
            side,
            turn: self.turn,
        });

        let (allies, enemies) = match side {
            Side::Human => (&mut self.human, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.human),
        };

        let mut outcome = None;
        for index in 0..allies.units().len() {
            let actor = allies.unit(index);
            if actor.is_knocked_out() {
                renderer.render(&BattleEvent::UnitDown {
                    name: actor.name().to_string(),
                });
                continue;
            }
            renderer.render(&BattleEvent::UnitActs(actor.snapshot()));

            match strategy.choose(actor, enemies, renderer) {
                TurnAction::Block => {
                    allies.unit_mut(index).block();
                    renderer.render(&BattleEvent::Blocked {
                        name: allies.unit(index).name().to_string(),
                        bonus: BLOCK_BONUS,
                    });
                }
                TurnAction::Attack { target } => {
                    let actor = allies.unit(index);
                    let strength = relative_strength(actor.job(), enemies.unit(target).job());
                    let damage = actor.attack_damage(strength);

                    let defender = enemies.unit_mut(target);
                    match defender.receive_damage(damage, rng) {
                        DamageOutcome::Dodged => renderer.render(&BattleEvent::Dodged {
                            name: defender.name().to_string(),
                        }),
                        DamageOutcome::Hit {
                            applied,
                            remaining_hp,
                            ..
                        } => renderer.render(&BattleEvent::DamageTaken {
                            name: defender.name().to_string(),
                            applied,
                            remaining_hp,
                        }),
                    }
                }
            }

            // Win check between sub-turns: a fully downed opponent ends the
            // battle immediately, remaining actions included.
            if enemies.is_knocked_out() {
                outcome = Some(Outcome::Victory(side));
                break;
            }
        }

        // The defending side's block buffs last exactly one enemy turn cycle.
        enemies.reset_temporary_defense();
        outcome
    }

    /// Summed-HP comparison once the turn cap is reached with both sides up
    fn tie_break(&self) -> Outcome {
        match self.human.total_hp().cmp(&self.computer.total_hp()) {
            Ordering::Greater => Outcome::Victory(Side::Human),
            Ordering::Less => Outcome::Victory(Side::Computer),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BaseStats;
    use crate::types::Job;
    use crate::unit::Unit;
    use crate::view::RecordingRenderer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct AlwaysBlock;

    impl TurnStrategy for AlwaysBlock {
        fn choose(&mut self, _: &Unit, _: &Squad, _: &mut dyn Renderer) -> TurnAction {
            TurnAction::Block
        }
    }

    struct AttackFirstLive;

    impl TurnStrategy for AttackFirstLive {
        fn choose(&mut self, _: &Unit, enemies: &Squad, _: &mut dyn Renderer) -> TurnAction {
            match enemies.live_indices().next() {
                Some(target) => TurnAction::Attack { target },
                None => TurnAction::Block,
            }
        }
    }

    struct MustNotAct;

    impl TurnStrategy for MustNotAct {
        fn choose(&mut self, _: &Unit, _: &Squad, _: &mut dyn Renderer) -> TurnAction {
            panic!("strategy called after the battle was decided");
        }
    }

    fn unit(name: &str, job: Job, max_hp: i32, defense: i32) -> Unit {
        Unit::from_parts(
            name,
            job,
            10,
            BaseStats {
                max_hp,
                attack: 20,
                defense,
                evasion: 0,
            },
        )
    }

    fn worn_down(name: &str, job: Job, hp: i32) -> Unit {
        let mut u = unit(name, job, 100, 20);
        if hp < 100 {
            let mut rng = StdRng::seed_from_u64(0);
            u.receive_damage((100 - hp) * 2, &mut rng);
        }
        u
    }

    fn human_squad() -> Squad {
        Squad::from_units([
            unit("Falia", Job::Mage, 100, 20),
            unit("Erom", Job::Mage, 100, 20),
            unit("Ama", Job::Mage, 100, 20),
        ])
    }

    #[test]
    fn test_knockout_ends_battle_mid_turn() {
        // Only one computer unit still stands, at 10 HP; the first human
        // attack downs it. Units two and three must not act, and the
        // computer never gets a turn.
        let computer = Squad::from_units([
            worn_down("Criati", Job::Mage, 10),
            worn_down("Ledde", Job::Mage, 0),
            worn_down("Tyllion", Job::Mage, 0),
        ]);
        let mut battle = Battle::new(human_squad(), computer);
        let mut renderer = RecordingRenderer::new();
        let mut rng = StdRng::seed_from_u64(1);

        let outcome = battle.run(
            &mut AttackFirstLive,
            &mut MustNotAct,
            &mut renderer,
            &mut rng,
        );

        assert_eq!(outcome, Outcome::Victory(Side::Human));
        let human_actions = renderer
            .events
            .iter()
            .filter(|event| matches!(event, BattleEvent::UnitActs(_)))
            .count();
        assert_eq!(human_actions, 1);
    }

    #[test]
    fn test_computer_victory_when_human_falls() {
        let human = Squad::from_units([
            worn_down("Falia", Job::Mage, 5),
            worn_down("Erom", Job::Mage, 0),
            worn_down("Ama", Job::Mage, 0),
        ]);
        let computer = Squad::from_units([
            unit("Criati", Job::Mage, 100, 20),
            unit("Ledde", Job::Mage, 100, 20),
            unit("Tyllion", Job::Mage, 100, 20),
        ]);
        let mut battle = Battle::new(human, computer);
        let mut renderer = RecordingRenderer::new();
        let mut rng = StdRng::seed_from_u64(2);

        // The lone human unit blocks; the first computer attack finishes it.
        let outcome = battle.run(&mut AlwaysBlock, &mut AttackFirstLive, &mut renderer, &mut rng);

        assert_eq!(outcome, Outcome::Victory(Side::Computer));
    }

    #[test]
    fn test_turn_cap_tie_on_equal_hp() {
        let computer = Squad::from_units([
            unit("Criati", Job::Mage, 100, 20),
            unit("Ledde", Job::Mage, 100, 20),
            unit("Tyllion", Job::Mage, 100, 20),
        ]);
        let mut battle = Battle::new(human_squad(), computer);
        let mut renderer = RecordingRenderer::new();
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = battle.run(&mut AlwaysBlock, &mut AlwaysBlock, &mut renderer, &mut rng);

        assert_eq!(outcome, Outcome::Tie);
        assert_eq!(battle.turn(), TURN_CAP);
    }

    #[test]
    fn test_turn_cap_higher_hp_sum_wins() {
        let computer = Squad::from_units([
            unit("Criati", Job::Mage, 90, 20),
            unit("Ledde", Job::Mage, 100, 20),
            unit("Tyllion", Job::Mage, 100, 20),
        ]);
        let mut battle = Battle::new(human_squad(), computer);
        let mut renderer = RecordingRenderer::new();
        let mut rng = StdRng::seed_from_u64(4);

        let outcome = battle.run(&mut AlwaysBlock, &mut AlwaysBlock, &mut renderer, &mut rng);

        assert_eq!(outcome, Outcome::Victory(Side::Human));
    }

    #[test]
    fn test_temporary_defense_lasts_one_enemy_cycle() {
        // Human blocks (defense 18 + 2 = adjustment 2.0), so each Same-job
        // hit for 33 applies as 17 rather than round(33 / 1.8) = 18. The
        // buff then resets when the computer's half-turn ends.
        let human = Squad::from_units([
            unit("Falia", Job::Mage, 100, 18),
            unit("Erom", Job::Mage, 100, 18),
            unit("Ama", Job::Mage, 100, 18),
        ]);
        let computer = Squad::from_units([
            unit("Criati", Job::Mage, 100, 20),
            unit("Ledde", Job::Mage, 100, 20),
            unit("Tyllion", Job::Mage, 100, 20),
        ]);
        let mut battle = Battle::new(human, computer);
        let mut renderer = RecordingRenderer::new();
        let mut rng = StdRng::seed_from_u64(5);

        let first = battle.half_turn(Side::Human, &mut AlwaysBlock, &mut renderer, &mut rng);
        assert_eq!(first, None);
        for unit in battle.human().units() {
            assert_eq!(unit.temporary_defense(), BLOCK_BONUS);
        }

        let second = battle.half_turn(
            Side::Computer,
            &mut AttackFirstLive,
            &mut renderer,
            &mut rng,
        );
        assert_eq!(second, None);

        let applied: Vec<i32> = renderer
            .events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::DamageTaken { applied, .. } => Some(*applied),
                _ => None,
            })
            .collect();
        assert_eq!(applied, vec![17, 17, 17]);

        // Reset happened exactly once, at the end of the enemy cycle.
        for unit in battle.human().units() {
            assert_eq!(unit.temporary_defense(), 0);
        }
    }

    #[test]
    fn test_downed_units_are_skipped_without_prompting() {
        let human = Squad::from_units([
            worn_down("Falia", Job::Mage, 0),
            worn_down("Erom", Job::Mage, 50),
            worn_down("Ama", Job::Mage, 0),
        ]);
        let computer = Squad::from_units([
            unit("Criati", Job::Mage, 100, 20),
            unit("Ledde", Job::Mage, 100, 20),
            unit("Tyllion", Job::Mage, 100, 20),
        ]);
        let mut battle = Battle::new(human, computer);
        let mut renderer = RecordingRenderer::new();
        let mut rng = StdRng::seed_from_u64(6);

        battle.half_turn(Side::Human, &mut AlwaysBlock, &mut renderer, &mut rng);

        let downed: Vec<&str> = renderer
            .events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::UnitDown { name } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(downed, vec!["Falia", "Ama"]);

        let acted = renderer
            .events
            .iter()
            .filter(|event| matches!(event, BattleEvent::UnitActs(_)))
            .count();
        assert_eq!(acted, 1);
    }

    #[test]
    fn test_status_rendered_each_half_turn() {
        let computer = Squad::from_units([
            unit("Criati", Job::Mage, 100, 20),
            unit("Ledde", Job::Mage, 100, 20),
            unit("Tyllion", Job::Mage, 100, 20),
        ]);
        let mut battle = Battle::new(human_squad(), computer);
        let mut renderer = RecordingRenderer::new();
        let mut rng = StdRng::seed_from_u64(7);

        battle.run(&mut AlwaysBlock, &mut AlwaysBlock, &mut renderer, &mut rng);

        let statuses = renderer
            .events
            .iter()
            .filter(|event| matches!(event, BattleEvent::Status { .. }))
            .count();
        assert_eq!(statuses, 2 * TURN_CAP as usize);
    }
}

//! Console front-end for the squad battle game
//!
//! Thin glue around `battle_core`: prints instructions and battle events,
//! reads one line per prompt from stdin, and seeds the battle from entropy.

use battle_core::{
    Battle, BattleEvent, FixedStrategy, InputSource, InteractiveStrategy, MoveError, Outcome,
    Renderer, Side, Squad, StatScaling, TargetError, UnitSnapshot, COMPUTER_ROSTER, HUMAN_ROSTER,
    TURN_CAP,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};

/// Reads one line per prompt from stdin, stripping the line terminator
struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> String {
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        line
    }
}

/// Prints battle events in the game's message style
struct ConsoleRenderer;

impl ConsoleRenderer {
    fn unit_line(unit: &UnitSnapshot) {
        if unit.knocked_out {
            println!(
                "{} ({}, Level {}) is knocked out and cannot move.",
                unit.name, unit.job, unit.level
            );
        } else {
            println!(
                "{} ({}, Level {}) has {} HP remaining.",
                unit.name, unit.job, unit.level, unit.current_hp
            );
        }
    }

    fn prompt(text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::Status { human, computer } => {
                println!();
                println!("Your units:");
                for unit in human {
                    Self::unit_line(unit);
                }
                println!();
                println!("Computer units:");
                for unit in computer {
                    Self::unit_line(unit);
                }
                println!();
            }
            BattleEvent::TurnBanner { side, turn } => {
                println!();
                match side {
                    Side::Human => println!("=== HUMAN TURN {turn} ==="),
                    Side::Computer => println!("=== COMPUTER TURN ==="),
                }
                println!();
            }
            BattleEvent::UnitActs(unit) => {
                println!("{} ({} - Level {})", unit.name, unit.job, unit.level);
            }
            BattleEvent::UnitDown { name } => {
                println!("{name} is knocked out and cannot move.");
            }
            BattleEvent::Blocked { name, bonus } => {
                println!("{name} is blocking and gains +{bonus} temporary defense!");
            }
            BattleEvent::Dodged { .. } => {
                println!("They dodged!");
            }
            BattleEvent::DamageTaken {
                name,
                applied,
                remaining_hp,
            } => {
                println!("{name} received {applied} damage and has {remaining_hp} HP remaining.");
            }
            BattleEvent::MovePrompt { name, retry } => {
                if *retry {
                    Self::prompt("Enter your move again: ");
                } else {
                    Self::prompt(&format!("\nChoose move for {name} (Attack / Block): "));
                }
            }
            BattleEvent::MoveRejected(err) => match err {
                MoveError::Empty => {
                    println!("Please enter a valid move (Attack or Block).");
                }
                MoveError::Unrecognized => {
                    println!("Invalid input! Please type either 'Attack' or 'Block'.");
                }
            },
            BattleEvent::TargetPrompt { names, retry } => {
                if *retry {
                    Self::prompt("Enter a valid target: ");
                } else {
                    println!("Choose a target to attack ({}):", names.join(", "));
                }
            }
            BattleEvent::TargetRejected(err) => match err {
                TargetError::UnknownName => {
                    println!(
                        "Invalid target name. Please select {}.",
                        roster_list(&COMPUTER_ROSTER)
                    );
                }
                TargetError::KnockedOut(name) => {
                    println!("{name} is already knocked out! Choose another target.");
                }
            },
            BattleEvent::Finished(outcome) => match outcome {
                Outcome::Victory(Side::Human) => println!("You've defeated the enemy!"),
                Outcome::Victory(Side::Computer) => {
                    println!("All your heroes have been defeated, enemy forces have won!")
                }
                Outcome::Tie => println!("Nobody wins!"),
            },
        }
    }
}

/// Join roster names as "A, B, or C"
fn roster_list(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}

fn print_instructions() {
    println!();
    println!("Welcome to the final battle against enemy forces. You will be facing off against the computer.");
    println!("Each of you will have 3 units with randomly generated jobs and levels.");
    println!("The jobs are: mage, knight, and archer. Archers are strong against mages, but weak against knights.");
    println!("Mages are strong against knights, but weak against archers. Knights are strong against archers, but weak against mages.");
    println!("There are two moves: attack (deal damage to one target) and block (temporarily increase defense).");
    println!("Combat is turn based; all your live units will take a turn and then all the computer's live units will take a turn.");
    println!("You have {TURN_CAP} turns to defeat the computer. If both players still have units standing, you only win");
    println!("if the combined HP of your units exceeds the computer's.");
    println!();
}

fn main() {
    print_instructions();

    let scaling = StatScaling::default();
    let mut rng = ChaCha8Rng::from_entropy();
    let human = Squad::recruit(HUMAN_ROSTER, &mut rng, &scaling);
    let computer = Squad::recruit(COMPUTER_ROSTER, &mut rng, &scaling);

    let mut battle = Battle::new(human, computer);
    let mut player = InteractiveStrategy::new(StdinInput);
    let mut enemy = FixedStrategy;
    let mut renderer = ConsoleRenderer;

    battle.run(&mut player, &mut enemy, &mut renderer, &mut rng);
}

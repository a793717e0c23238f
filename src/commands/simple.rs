//! Simple interactive CLI mode
//!
//! Line-based practice game without the TUI

use super::practice::{LoadedGame, persist_session};
use crate::core::Role;
use crate::game::{Game, GameState};
use crate::output::{print_feedback, print_summary, print_trial};
use crate::store::Store;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Put bank tile number `n` (1-based, as listed) into a slot
    Place(Role, usize),
    Remove(Role),
    Hint,
    Check,
    Next,
    Restart,
    Help,
    Quit,
}

/// Parse a command line such as `p 2`, `root 3`, `x suffix`, `check`
///
/// An empty line means "next".
///
/// # Errors
///
/// Returns a message describing the expected forms.
pub fn parse_action(input: &str) -> Result<Action, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next().map(str::to_lowercase) else {
        return Ok(Action::Next);
    };
    let arg = parts.next();

    match (head.as_str(), arg) {
        ("h" | "hint", None) => Ok(Action::Hint),
        ("c" | "check", None) => Ok(Action::Check),
        ("n" | "next", None) => Ok(Action::Next),
        ("r" | "restart", None) => Ok(Action::Restart),
        ("q" | "quit" | "exit", None) => Ok(Action::Quit),
        ("?" | "help", None) => Ok(Action::Help),
        ("x" | "remove", Some(slot)) => slot.parse().map(Action::Remove),
        (slot, Some(number)) => {
            let role: Role = slot.parse()?;
            let n: usize = number
                .parse()
                .map_err(|_| format!("'{number}' is not a tile number"))?;
            if n == 0 {
                return Err("Tile numbers start at 1".to_string());
            }
            Ok(Action::Place(role, n))
        }
        _ => Err(format!("Unknown command '{}'. Type ? for help", input.trim())),
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  p|r|s <n>   place bank tile n into prefix, root or suffix");
    println!("  x <slot>    clear a slot");
    println!("  h           hint (reveals one slot's answer)");
    println!("  c           check your answer");
    println!("  Enter / n   next word after feedback");
    println!("  restart     start over");
    println!("  q           quit (progress is saved)\n");
}

/// Apply an action to the game, returning a message for the player
fn apply<R: rand::Rng>(game: &mut Game, action: Action, rng: &mut R) -> Result<Option<String>, String> {
    match action {
        Action::Place(role, n) => {
            let id = game
                .trial()
                .and_then(|t| t.bank().nth(n - 1))
                .map(|tile| tile.id.clone())
                .ok_or_else(|| format!("No tile #{n} in the bank"))?;
            game.place(role, &id).map_err(|e| e.to_string())?;
            Ok(None)
        }
        Action::Remove(role) => {
            game.remove(role).map_err(|e| e.to_string())?;
            Ok(None)
        }
        Action::Hint => {
            let revealed = game.hint().map_err(|e| e.to_string())?;
            Ok(Some(match revealed {
                Some(f) => match f.meaning() {
                    Some(meaning) => format!("💡 {}: \"{}\" ({meaning})", f.role().label(), f.text()),
                    None => format!("💡 {}: \"{}\"", f.role().label(), f.text()),
                },
                None => "💡 Everything placed is already correct".to_string(),
            }))
        }
        Action::Check => {
            game.check().map_err(|e| e.to_string())?;
            Ok(None)
        }
        Action::Next => {
            game.next(rng).map_err(|e| e.to_string())?;
            Ok(None)
        }
        Action::Restart => {
            game.restart();
            game.start(rng).map_err(|e| e.to_string())?;
            Ok(Some("🔄 Restarted".to_string()))
        }
        Action::Help | Action::Quit => Ok(None),
    }
}

/// Run the simple interactive practice game
///
/// # Errors
///
/// Returns an error on I/O failure reading input, or if there are no words
/// to practice.
pub fn run_simple(loaded: LoadedGame, store: &mut Store, hint_dots: bool) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Morpheme Lab - Practice Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Sort each word's tiles into prefix, root and suffix slots.");
    println!("Some tiles are decoys. Type ? for commands.\n");

    let mut rng = rand::rng();
    let mut game = loaded.game;

    if loaded.resumed {
        println!("↩ Resuming your saved session.\n");
    } else {
        if loaded.fallbacks > 0 {
            println!(
                "⚠ {} word(s) were segmented locally; the analysis service was unavailable.\n",
                loaded.fallbacks
            );
        }
        game.start(&mut rng).map_err(|e| e.to_string())?;
    }

    loop {
        persist_session(store, &game);

        let prompt = match game.state() {
            GameState::InTrial => {
                if let Some(trial) = game.trial() {
                    print_trial(trial, game.index(), game.queue().len(), game.score(), hint_dots);
                }
                "Command"
            }
            GameState::Feedback => {
                if let (Some(event), Some(entry)) = (game.events().last(), game.entry()) {
                    print_feedback(event, entry);
                }
                "Enter for next word"
            }
            GameState::Done => {
                print_summary(&game.summary());
                println!("Use `morpheme_lab export <file.csv>` to save the results.");
                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        game.restart();
                        game.start(&mut rng).map_err(|e| e.to_string())?;
                        continue;
                    }
                    _ => {
                        println!("\n👋 Thanks for practicing!\n");
                        return Ok(());
                    }
                }
            }
            GameState::Ready => {
                game.start(&mut rng).map_err(|e| e.to_string())?;
                continue;
            }
        };

        let input = get_user_input(prompt)?;
        match parse_action(&input) {
            Ok(Action::Quit) => {
                println!("\n👋 Progress saved. See you next time!\n");
                return Ok(());
            }
            Ok(Action::Help) => print_help(),
            Ok(action) => match apply(&mut game, action, &mut rng) {
                Ok(Some(message)) => println!("{message}\n"),
                Ok(None) => {}
                Err(e) => println!("❌ {e}\n"),
            },
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::seed_entries;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_placements() {
        assert_eq!(parse_action("p 2"), Ok(Action::Place(Role::Prefix, 2)));
        assert_eq!(parse_action("Root 1"), Ok(Action::Place(Role::Root, 1)));
        assert_eq!(parse_action("s 3"), Ok(Action::Place(Role::Suffix, 3)));
        assert!(parse_action("p 0").is_err());
        assert!(parse_action("p two").is_err());
        assert!(parse_action("middle 1").is_err());
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_action(""), Ok(Action::Next));
        assert_eq!(parse_action("  c "), Ok(Action::Check));
        assert_eq!(parse_action("hint"), Ok(Action::Hint));
        assert_eq!(parse_action("x suffix"), Ok(Action::Remove(Role::Suffix)));
        assert_eq!(parse_action("Q"), Ok(Action::Quit));
        assert!(parse_action("dance").is_err());
    }

    #[test]
    fn bank_numbers_follow_remaining_tiles() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(seed_entries());
        game.start(&mut rng).unwrap();

        let first = game.trial().unwrap().bank().next().unwrap().id.clone();
        apply(&mut game, Action::Place(Role::Root, 1), &mut rng).unwrap();
        assert_eq!(game.trial().unwrap().placed(Role::Root).unwrap().id, first);
        assert_eq!(game.trial().unwrap().bank().count(), 5);

        assert!(apply(&mut game, Action::Place(Role::Prefix, 6), &mut rng).is_err());
        assert!(apply(&mut game, Action::Check, &mut rng).is_err());
    }

    #[test]
    fn hint_message_names_the_slot() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(seed_entries());
        game.start(&mut rng).unwrap();
        let message = apply(&mut game, Action::Hint, &mut rng).unwrap().unwrap();
        assert!(message.contains("Prefix"), "{message}");
    }
}

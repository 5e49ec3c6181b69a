//! Interactive CLI mode
//!
//! Text-based loop for playing against a real game: prints the suggested
//! guess, reads the feedback row the game showed, and folds it into the
//! session state.

use crate::core::{GuessState, Tile, parse_tiles};
use crate::solver::{Engine, EngineError};
use std::io::{self, Write};

/// Run the interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or the forced first word is
/// not in the lexicon.
pub fn run_simple(engine: &Engine, first_word: Option<&str>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Pilot - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses from letter-frequency ranking.");
    println!("After each guess, enter the feedback row the game showed:\n");
    println!("  - Use G/g for green (correct position)");
    println!("  - Use Y/y for yellow (wrong position)");
    println!("  - Use X/x/- for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let forced_first = first_word
        .map(|raw| super::solve::find_in_lexicon(engine, raw))
        .transpose()?;

    let mut state = GuessState::new();
    let mut turn = 1;

    loop {
        let candidates = engine.candidates(&state);

        if candidates.is_empty() {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'new' to start over, or 'quit' to exit.\n");

            match get_user_input("Command")?.as_str() {
                "quit" | "q" => return Ok(()),
                _ => {
                    state = GuessState::new();
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
            }
        }

        let guess = match (turn, forced_first) {
            (1, Some(forced)) => forced,
            _ => match engine.next_guess(&state) {
                Ok(guess) => guess,
                Err(EngineError::NoCandidatesRemaining) => continue,
                Err(e) => return Err(e.to_string()),
            },
        };

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", candidates.len());
        println!("────────────────────────────────────────────────────────────");
        println!("\n📊 Suggested guess: {}\n", guess.text().to_uppercase());

        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in &candidates {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        let tiles = loop {
            let input = get_user_input("Enter feedback (G/Y/X, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    state = GuessState::new();
                    turn = 0; // Will be incremented to 1
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some([Tile::Correct; 5]);
                }
                _ => {
                    if let Some(tiles) = parse_tiles(&input) {
                        break Some(tiles);
                    }
                    println!("❌ Invalid row! Use five of G/Y/X, e.g. 'gyxxg'\n");
                }
            }
        };

        if let Some(tiles) = tiles {
            if tiles == [Tile::Correct; 5] {
                println!(
                    "\n🎉 Solved in {turn} {}!\n",
                    if turn == 1 { "guess" } else { "guesses" }
                );

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        state = GuessState::new();
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            } else {
                state.record(guess, &tiles);
            }

            turn += 1;
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

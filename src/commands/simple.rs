//! Simple interactive CLI mode
//!
//! Text-based hot-seat game: every player types their words in turn, then the
//! round is resolved and scores are banked.

use crate::dictionary::Dictionary;
use crate::output::{print_board, print_round_results, print_scores};
use crate::round::{PlayerId, Session, SubmitOutcome, split_words};
use rand::Rng;
use std::io::{self, Write};

/// What the players asked for between rounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetweenRounds {
    NextRound,
    Teach(Vec<String>),
    Scores,
    Quit,
    Unknown,
}

/// Parse a between-rounds command
#[must_use]
pub fn parse_command(input: &str) -> BetweenRounds {
    let mut parts = input.split_whitespace();
    match parts.next().map(str::to_lowercase).as_deref() {
        None | Some("next" | "n" | "roll") => BetweenRounds::NextRound,
        Some("teach" | "allow") => BetweenRounds::Teach(parts.map(str::to_string).collect()),
        Some("scores" | "s") => BetweenRounds::Scores,
        Some("quit" | "q" | "exit") => BetweenRounds::Quit,
        Some(_) => BetweenRounds::Unknown,
    }
}

/// Run the simple hot-seat game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if fewer
/// than one player is named.
pub fn run_simple<R: Rng + ?Sized>(
    players: &[String],
    dictionary: Dictionary,
    rng: &mut R,
) -> Result<(), String> {
    if players.is_empty() {
        return Err("At least one player is needed".to_string());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Boggle - Hot-Seat Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Each round, every player types the words they found, separated by spaces.");
    println!("Between rounds: 'next' (or Enter), 'teach WORD...', 'scores', 'quit'.\n");

    let mut session = Session::new(dictionary);
    for player in players {
        session.join(player.as_str());
    }
    let ids: Vec<PlayerId> = session.players().map(|(id, _)| id.clone()).collect();

    loop {
        let grid = session.roll(rng).clone();
        println!("────────────────────────────────────────────────────────────");
        println!("Round {}", session.round_number());
        println!("────────────────────────────────────────────────────────────");
        print_board(&grid, None);

        for id in &ids {
            let input = get_user_input(&format!("\n{id}'s words"))?;
            match session.submit(id, split_words(&input)) {
                SubmitOutcome::RoundComplete(results) => {
                    print_round_results(&results);
                }
                SubmitOutcome::Pending { .. } => {
                    // Scroll the previous player's words off screen
                    println!("{}", "\n".repeat(30));
                }
                other => println!("Submission not recorded: {other:?}"),
            }
        }

        loop {
            match parse_command(&get_user_input("\nNext round? (next/teach/scores/quit)")?) {
                BetweenRounds::NextRound => break,
                BetweenRounds::Teach(words) => {
                    let added = session.teach(&words);
                    println!("✓ Learned {added} new word(s)");
                }
                BetweenRounds::Scores => {
                    session.confirm();
                    print_scores(&session.scores());
                }
                BetweenRounds::Quit => {
                    session.confirm();
                    print_scores(&session.scores());
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                BetweenRounds::Unknown => println!("❌ Unknown command"),
            }
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

    #[test]
    fn parse_next_round() {
        assert_eq!(parse_command(""), BetweenRounds::NextRound);
        assert_eq!(parse_command("  Next "), BetweenRounds::NextRound);
        assert_eq!(parse_command("roll"), BetweenRounds::NextRound);
    }

    #[test]
    fn parse_teach_words() {
        assert_eq!(
            parse_command("teach doge quux"),
            BetweenRounds::Teach(vec!["doge".to_string(), "quux".to_string()])
        );
        assert_eq!(parse_command("allow"), BetweenRounds::Teach(Vec::new()));
    }

    #[test]
    fn parse_other_commands() {
        assert_eq!(parse_command("scores"), BetweenRounds::Scores);
        assert_eq!(parse_command("Q"), BetweenRounds::Quit);
        assert_eq!(parse_command("dance"), BetweenRounds::Unknown);
    }

    #[test]
    fn run_simple_requires_players() {
        let mut rng = rand::rng();
        assert!(run_simple(&[], Dictionary::new(), &mut rng).is_err());
    }
}

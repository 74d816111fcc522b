//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: the board is reprinted after every
//! guess, whole words are typed at a prompt.

use crate::core::Feedback;
use crate::game::{GameStatus, ROWS, Session, SubmitError};
use crate::output::formatters::tags_to_emoji;
use crate::output::{print_board, print_keyboard};
use crate::providers::{DictionaryValidator, WordSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple CLI mode until the player stops
///
/// # Errors
///
/// Returns an error if the word source fails or on an I/O error reading
/// user input.
pub async fn run_simple<S, V>(source: &S, validator: V) -> Result<()>
where
    S: WordSource,
    V: DictionaryValidator + Clone,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in {ROWS} tries.");
    println!("After each guess the tiles show how close you were:\n");
    println!("  {} right letter, right spot", " A ".black().on_green());
    println!("  {} right letter, wrong spot", " B ".black().on_yellow());
    println!(
        "  {} letter not in the word\n",
        " C ".white().on_bright_black()
    );
    println!("Type 'quit' at any prompt to stop.\n");

    loop {
        let mut session = Session::start(source, validator.clone())
            .await
            .context("could not fetch a secret word")?;

        if !play(&mut session).await? {
            break;
        }

        match prompt("Play again? [y/N]")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => break,
        }
    }

    println!("\nThanks for playing!\n");
    Ok(())
}

/// Play one game; returns `false` if the player quit mid-game or at EOF
async fn play<V: DictionaryValidator>(session: &mut Session<V>) -> Result<bool> {
    while session.status() == GameStatus::InProgress {
        print_board(session.board());
        print_keyboard(session.hints());

        let attempt = session.cursor().row() + 1;
        let Some(line) = prompt(&format!("Guess {attempt}/{ROWS}"))? else {
            return Ok(false);
        };
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        if line.chars().count() != 5 {
            println!("{}", "Please enter a 5-letter word.".yellow());
            continue;
        }

        // Retype the current row from scratch
        while session.cursor().col() > 0 {
            session.pop_letter();
        }
        for letter in line.chars() {
            session.push_letter(letter);
        }

        match session.submit_row().await {
            Ok(scored) => {
                if let Some(message) = &scored.message {
                    let message = match scored.status {
                        GameStatus::Won => message.green().bold(),
                        _ => message.red().bold(),
                    };
                    println!("\n{message}");
                }
            }
            Err(err @ SubmitError::IncompleteRow) => {
                println!("{}", err.to_string().yellow());
            }
            Err(err) => {
                println!("{}", err.to_string().red());
            }
        }
    }

    // Final board plus a share-style summary
    print_board(session.board());
    for row in session.board().rows() {
        if row.iter().all(|c| c.feedback().is_some()) {
            let tags: [Feedback; 5] =
                std::array::from_fn(|i| row[i].feedback().unwrap_or(Feedback::Absent));
            println!("  {}", tags_to_emoji(&tags));
        }
    }
    println!();

    Ok(true)
}

/// Prompt for a trimmed line; `None` on EOF
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}> ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

//! Display functions for CLI play

use super::formatters::{colored_row, tags_to_emoji, tile};
use crate::commands::ScoreReport;
use crate::game::{Board, LetterHints};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print the board: scored rows colored, the current row plain, empty cells
/// as placeholders
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        let line = row
            .iter()
            .map(|cell| match cell.letter() {
                Some(letter) => tile(letter, cell.feedback()).to_string(),
                None => " · ".dimmed().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
    println!();
}

/// Print the on-screen keyboard with the best-known tag per letter
pub fn print_keyboard(hints: &LetterHints) {
    for (i, letters) in KEYBOARD_ROWS.iter().enumerate() {
        let line = letters
            .chars()
            .map(|letter| match hints.get(letter) {
                Some(tag) => tile(letter, Some(tag)).to_string(),
                None => format!(" {letter} "),
            })
            .collect::<Vec<_>>()
            .join("");
        println!("  {}{line}", "  ".repeat(i));
    }
    println!();
}

/// Print the outcome of the `score` command
pub fn print_score_report(report: &ScoreReport) {
    println!();
    println!(
        "  {} vs {}",
        report.guess.text().bright_yellow().bold(),
        report.secret.text().bright_yellow().bold()
    );
    println!();
    println!("  {}", colored_row(report.guess.text(), &report.feedback));
    println!("  {}", tags_to_emoji(&report.feedback));
    println!();
}

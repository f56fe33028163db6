//! Output formatting for the CLI

use std::io::{self, Write};

use crate::game::{Board, Player};
use crate::session::{GameOutcome, Mode};

/// Render the framed fixed-width grid, '-' for empty cells.
pub fn render_board(board: &Board) -> String {
    let mut rendered = String::from("-------------\n");
    for row in &board.cells {
        rendered.push('|');
        for cell in row {
            rendered.push(' ');
            rendered.push(cell.to_char());
            rendered.push_str(" |");
        }
        rendered.push('\n');
        rendered.push_str("-------------\n");
    }
    rendered
}

/// Write the framed grid to the given stream
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "{}", render_board(board))
}

/// The end-of-game message. In human-vs-computer mode an O win belongs to
/// the computer.
pub fn outcome_message(outcome: GameOutcome, mode: Mode) -> String {
    match outcome {
        GameOutcome::Win(Player::O) if mode == Mode::HumanVsComputer => {
            "Computer wins!".to_string()
        }
        GameOutcome::Win(player) => format!("Player {player} wins!"),
        GameOutcome::Draw => "It's a draw!".to_string(),
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:18} {}", format!("{key}:"), value);
}

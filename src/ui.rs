#![cfg(feature = "std")]

//! Terminal rendering for the board and game messages.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::string::String;

use crate::{board::Board, config::GameConfig, game::GameEngine};

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const BLUE: &str = "\x1b[94m";
pub const YELLOW: &str = "\x1b[93m";

/// Render the board with row and column labels.
///
/// Hidden cells show `-`, a revealed mine `*`, zero cells are blank and
/// the rest show their adjacent mine count.
pub fn render_board(board: &Board) -> String {
    let n = board.size();
    let w = n.saturating_sub(1).to_string().len();
    let mut out = String::new();
    let _ = write!(out, "{:w$} ", "", w = w);
    for c in 0..n {
        let _ = write!(out, "{:<w$} ", c, w = w);
    }
    out.push('\n');
    for r in 0..n {
        let _ = write!(out, "{:>w$} ", r, w = w);
        for c in 0..n {
            let cell = if !board.is_revealed(r, c) {
                format!("{YELLOW}{:<w$} {RESET}", "-", w = w)
            } else if board.is_mine(r, c) {
                format!("{RED}{:<w$} {RESET}", "*", w = w)
            } else {
                match board.count_adjacent_mines(r, c) {
                    0 => format!("{GREEN}{:<w$} {RESET}", "", w = w),
                    k => format!("{BLUE}{:<w$} {RESET}", k, w = w),
                }
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

pub fn print_board(board: &Board) {
    print!("{}", render_board(board));
}

/// Header shown above the board during play: title, mines and progress.
pub fn render_status(board: &Board) -> String {
    let config = GameConfig::new(board.size(), board.mine_count());
    let mut out = String::new();
    let _ = writeln!(out, "{GREEN}Minesweeper{RESET}");
    let _ = writeln!(out, "Mines: {}", board.mine_count());
    let _ = writeln!(
        out,
        "Revealed: {} / {}",
        board.revealed_count(),
        config.safe_cells()
    );
    out.push('\n');
    out
}

pub fn print_status(board: &Board) {
    print!("{}", render_status(board));
}

/// Clear the screen and draw the status header and board.
pub fn redraw(board: &Board) {
    clear_screen();
    print_status(board);
    print_board(board);
}

pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    let _ = io::stdout().flush();
}

/// Welcome banner with the rules, shown once at start.
pub fn print_banner() {
    println!("{GREEN}Welcome to Minesweeper!{RESET}");
    println!("\nHow to play:");
    println!("1. Enter a row and column number to reveal a cell.");
    println!("2. Numbers show how many mines touch that cell.");
    println!("3. Reveal every cell without a mine to win.");
    println!("\nGood luck!");
}

/// Final board plus the win or loss message.
pub fn print_outcome(engine: &GameEngine) {
    clear_screen();
    print_board(engine.board());
    match engine.status() {
        crate::GameStatus::Won => println!("\n{GREEN}Congratulations! You won!{RESET}"),
        crate::GameStatus::Lost => println!("\n{RED}Game over! You hit a mine.{RESET}"),
        crate::GameStatus::InProgress => {}
    }
}

#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    game::GameStatus,
    player::{Move, Player},
    ui,
};
use rand::rngs::SmallRng;

/// Reasons a line of input is not a valid move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    WrongArity(usize),
    NotANumber(String),
    OutOfRange { row: usize, col: usize, size: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Empty input"),
            InputError::WrongArity(n) => {
                write!(f, "Expected a row and a column, got {} values", n)
            }
            InputError::NotANumber(s) => write!(f, "'{}' is not a number", s),
            InputError::OutOfRange { row, col, size } => write!(
                f,
                "({}, {}) is off the board - both numbers must be between 0 and {}",
                row,
                col,
                size - 1
            ),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a line of the form `row col`, or `q` to quit.
pub fn parse_move(input: &str, size: usize) -> Result<Move, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    if input.eq_ignore_ascii_case("q") {
        return Ok(Move::Quit);
    }
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(InputError::WrongArity(parts.len()));
    }
    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| InputError::NotANumber(s.to_string()))
    };
    let (row, col) = (parse(parts[0])?, parse(parts[1])?);
    if row >= size || col >= size {
        return Err(InputError::OutOfRange { row, col, size });
    }
    Ok(Move::Reveal(row, col))
}

/// Answer to the replay prompt: only `y` (any case) means yes.
pub fn parse_replay(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Human player reading moves line by line.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Player reading from standard input.
    pub fn new() -> Self {
        Self::with_input(io::BufReader::new(io::stdin()))
    }

    /// Player reading from an arbitrary source.
    pub fn with_input<R: BufRead + 'static>(input: R) -> Self {
        Self {
            input: Box::new(input),
        }
    }

    /// Print `prompt` and read one line. Returns `None` on end of input.
    pub fn prompt(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::warn!("failed to read input: {}", e);
                None
            }
        }
    }

    /// Ask whether to start another game.
    pub fn ask_replay(&mut self) -> bool {
        self.prompt("Play again? (y/n): ")
            .is_some_and(|line| parse_replay(&line))
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn next_move(&mut self, _rng: &mut SmallRng, board: &Board) -> Move {
        loop {
            println!("\nEnter 'q' to quit.");
            let Some(line) = self.prompt("Enter row and column (e.g. '3 4'): ") else {
                return Move::Quit;
            };
            match parse_move(&line, board.size()) {
                Ok(mv) => return mv,
                Err(e) => {
                    log::debug!("rejected input {:?}: {}", line.trim(), e);
                    println!("{}Invalid input: {}{}", ui::RED, e, ui::RESET);
                    if self.prompt("Press Enter to continue...").is_none() {
                        return Move::Quit;
                    }
                    ui::redraw(board);
                }
            }
        }
    }

    fn handle_result(&mut self, coord: (usize, usize), status: GameStatus) {
        log::debug!("revealed {:?} -> {:?}", coord, status);
    }
}

use crate::{board::Board, game::GameStatus};
use rand::rngs::SmallRng;

/// A command issued by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Reveal the cell at (row, col).
    Reveal(usize, usize),
    /// Abandon the game.
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next move given the visible board.
    fn next_move(&mut self, rng: &mut SmallRng, board: &Board) -> Move;

    /// Inform the player of the game status after its last reveal.
    fn handle_result(&mut self, _coord: (usize, usize), _status: GameStatus) {}
}

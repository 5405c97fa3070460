use alloc::vec::Vec;

use crate::{
    board::Board,
    player::{Move, Player},
};
use rand::{rngs::SmallRng, Rng};

/// Automatic player that reveals a uniformly random hidden cell each turn.
pub struct AutoPlayer;

impl AutoPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AutoPlayer {
    fn next_move(&mut self, rng: &mut SmallRng, board: &Board) -> Move {
        let n = board.size();
        let hidden: Vec<(usize, usize)> = (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .filter(|&(r, c)| !board.is_revealed(r, c))
            .collect();
        if hidden.is_empty() {
            return Move::Quit;
        }
        let (r, c) = hidden[rng.random_range(0..hidden.len())];
        Move::Reveal(r, c)
    }
}

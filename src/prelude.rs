//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutoPlayer, Board, BoardError, GameConfig, GameEngine, GameStatus, Move, Player, RevealResult,
};

#[cfg(feature = "std")]
pub use crate::{parse_move, CliPlayer};

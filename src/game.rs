use crate::{
    board::Board,
    common::{BoardError, RevealResult},
    config::GameConfig,
    player::{Move, Player},
};
use rand::{rngs::SmallRng, Rng};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` accept no further reveals.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Game session: one board plus the win/loss state machine.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    status: GameStatus,
    moves: usize,
}

impl GameEngine {
    /// Start a session on a freshly mined board.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let board = Board::with_rng(config.size, config.mines, rng)?;
        Ok(Self::from_board(board))
    }

    /// Start a session on an existing board.
    pub fn from_board(board: Board) -> Self {
        Self {
            config: GameConfig::new(board.size(), board.mine_count()),
            board,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Number of reveals accepted so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Reveal a cell and advance the game state.
    pub fn reveal(&mut self, row: usize, col: usize) -> Result<GameStatus, BoardError> {
        if self.status.is_over() {
            return Err(BoardError::GameOver);
        }
        let result = self.board.reveal(row, col)?;
        self.moves += 1;
        self.status = match result {
            RevealResult::Mine => GameStatus::Lost,
            RevealResult::Safe if self.board.is_cleared() => GameStatus::Won,
            RevealResult::Safe => GameStatus::InProgress,
        };
        if self.status.is_over() {
            log::info!("game over after {} moves: {:?}", self.moves, self.status);
        }
        Ok(self.status)
    }

    /// Drive the game with `player` until it ends or the player quits.
    ///
    /// `on_turn` runs before each move so a front end can redraw. Returns the
    /// final status, which is `InProgress` if the player quit.
    pub fn play<P, F>(
        &mut self,
        player: &mut P,
        rng: &mut SmallRng,
        mut on_turn: F,
    ) -> Result<GameStatus, BoardError>
    where
        P: Player + ?Sized,
        F: FnMut(&GameEngine),
    {
        while !self.status.is_over() {
            on_turn(&*self);
            match player.next_move(rng, &self.board) {
                Move::Quit => {
                    log::info!("player quit after {} moves", self.moves);
                    break;
                }
                Move::Reveal(r, c) => {
                    let status = self.reveal(r, c)?;
                    player.handle_result((r, c), status);
                }
            }
        }
        Ok(self.status)
    }
}

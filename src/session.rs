//! Game session management: mode, turn dispatch, move history, and outcome

use serde::{Deserialize, Serialize};

use crate::game::{Board, Player, Square};
use crate::search;

/// Who occupies the second seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    HumanVsHuman,
    HumanVsComputer,
}

impl Mode {
    /// The computer always plays O; every other seat is human.
    pub fn controller(self, player: Player) -> Controller {
        match (self, player) {
            (Mode::HumanVsComputer, Player::O) => Controller::Computer,
            _ => Controller::Human,
        }
    }
}

/// The source of the next move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub square: Square,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress: the board, the mode, and the moves played so far
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    mode: Mode,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Session {
    /// Start a fresh game in the given mode
    pub fn new(mode: Mode) -> Self {
        Session {
            board: Board::new(),
            mode,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The controller of the side to move
    pub fn to_act(&self) -> Controller {
        self.mode.controller(self.board.to_move())
    }

    /// Apply a move for the side to move, recording it and settling the
    /// outcome on terminal states.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] after the game has ended, or the
    /// board's rejection of an out-of-range or occupied square. Nothing
    /// changes on failure.
    pub fn apply(&mut self, row: i64, col: i64) -> crate::Result<Square> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.to_move();
        let square = self.board.make_move(row, col)?;
        self.moves.push(Move { square, player });

        if self.board.is_terminal() {
            self.outcome = Some(match self.board.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(square)
    }

    /// Let the search pick and play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] after the game has ended and
    /// [`crate::Error::NoValidMoves`] on a full board.
    pub fn computer_move(&mut self) -> crate::Result<Square> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let square =
            search::find_best_move(&mut self.board).ok_or(crate::Error::NoValidMoves)?;
        self.apply(square.row() as i64, square.col() as i64)
    }
}

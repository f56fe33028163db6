//! Tic-Tac-Toe with an exhaustive minimax computer opponent
//!
//! This crate provides:
//! - Complete board implementation with move validation and win detection
//! - Exhaustive minimax search for the computer player
//! - Game sessions for human-vs-human and human-vs-computer play
//! - A command-line interface with interactive play and position analysis

pub mod cli;
pub mod error;
pub mod game;
pub mod search;
pub mod session;

pub use error::{Error, Result};
pub use game::{Board, Cell, Player, Square};
pub use search::{evaluate, find_best_move, minimax, score_moves};
pub use session::{Controller, GameOutcome, Mode, Move, Session};

//! Board state validation logic

use super::board::{Board, Player};
use super::lines::WINNING_LINES;

impl Board {
    /// Check whether the state is reachable through legal alternating play
    /// starting from an empty board with X to move.
    pub fn is_valid(&self) -> bool {
        let (x_count, o_count) = self.count_pieces();

        // X moves first, so X has the same number of marks as O or one more
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        // The recorded turn must match the piece counts
        let expected = if x_count == o_count {
            Player::X
        } else {
            Player::O
        };
        if self.to_move != expected {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // A winner must have placed the last mark
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && o_count != x_count {
            return false;
        }

        // Multiple winning lines can only be completed by a single move, so
        // they must share a cell
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let mark = player.mark();
        let lines: Vec<&[(usize, usize); 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&(row, col)| self.cells[row][col] == mark))
            .collect();

        if lines.len() < 2 {
            return true;
        }

        lines[0]
            .iter()
            .any(|cell| lines.iter().all(|line| line.contains(cell)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_legal_play_stays_valid() {
        let mut board = Board::new();
        assert!(board.is_valid());

        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0)] {
            board.make_move(row, col).unwrap();
            assert!(board.is_valid(), "state {} should be valid", board.encode());
        }
    }

    #[test]
    fn test_won_states_are_valid() {
        // X just won on the top row
        let board = Board::from_string("XXX-OO---").unwrap();
        assert!(board.is_valid());

        // O just won on the middle row
        let board = Board::from_string("X-XOOO-X-").unwrap();
        assert!(board.is_valid());
    }

    #[test]
    fn test_both_winners_invalid() {
        let board = Board::from_string("XXXOOO---").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_winner_parity_invalid() {
        // O has a line but also the extra mark, so O cannot have moved last
        let board = Board::from_string("OOOXX-XX-").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_turn_inconsistent_with_counts_invalid() {
        let mut board = Board::from_string("X--------").unwrap();
        board.to_move = Player::X;
        assert!(!board.is_valid());
    }

    #[test]
    fn test_impossible_piece_counts_invalid() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        cells[0][2] = Cell::X;

        let board = Board {
            cells,
            to_move: Player::O,
        };
        assert!(!board.is_valid());
    }

    #[test]
    fn test_double_line_must_share_cell() {
        // Top row and left column share (0, 0): a single move can complete
        // both
        let mut cells = [[Cell::Empty; 3]; 3];
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] {
            cells[row][col] = Cell::X;
        }
        let shared = Board {
            cells,
            to_move: Player::O,
        };
        assert!(shared.winning_lines_share_cell(Player::X));

        // Top and bottom rows are disjoint: no single move completes both
        let mut cells = [[Cell::Empty; 3]; 3];
        for (row, col) in [(0, 0), (0, 1), (0, 2), (2, 0), (2, 1), (2, 2)] {
            cells[row][col] = Cell::X;
        }
        let disjoint = Board {
            cells,
            to_move: Player::O,
        };
        assert!(!disjoint.winning_lines_share_cell(Player::X));
        assert!(!disjoint.is_valid());
    }

    #[test]
    fn test_shared_double_line_state_is_valid() {
        // X completes the top row and left column with one move at (0, 0)
        let board = Board::from_string("XXX XOO XOO").unwrap();
        assert!(board.has_won(Player::X));
        assert!(board.winning_lines_share_cell(Player::X));
        assert!(board.is_valid());
    }
}

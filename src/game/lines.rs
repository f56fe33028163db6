//! Winning line analysis

use std::collections::HashSet;

use super::board::{Cell, Player};

/// The eight winning lines as (row, col) triples
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
        let target = player.mark();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| cells[row][col] == target))
    }

    /// Find all cells that would immediately complete a line for the player
    pub fn winning_squares(cells: &[[Cell; 3]; 3], player: Player) -> HashSet<(usize, usize)> {
        let mut squares = HashSet::new();
        for line in &WINNING_LINES {
            if let Some(pos) = Self::winning_square_in_line(cells, player, line) {
                squares.insert(pos);
            }
        }
        squares
    }

    /// The cell completing a specific line for the player, if the line has
    /// two of the player's marks and one empty cell
    fn winning_square_in_line(
        cells: &[[Cell; 3]; 3],
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<(usize, usize)> {
        let target = player.mark();
        let mut count = 0;
        let mut empty_pos = None;

        for &(row, col) in line {
            match cells[row][col] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some((row, col));
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        cells[0][2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::O;
        cells[1][0] = Cell::O;
        cells[2][0] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][2] = Cell::X;
        cells[1][1] = Cell::X;
        cells[2][0] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_winning_squares() {
        // X . X on the top row
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][2] = Cell::X;

        let squares = LineAnalyzer::winning_squares(&cells, Player::X);
        assert_eq!(squares.len(), 1);
        assert!(squares.contains(&(0, 1)));
    }

    #[test]
    fn test_winning_squares_multiple() {
        // X X .
        // X . .
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        cells[1][0] = Cell::X;

        let squares = LineAnalyzer::winning_squares(&cells, Player::X);
        assert_eq!(squares.len(), 2);
        assert!(squares.contains(&(0, 2))); // completes the top row
        assert!(squares.contains(&(2, 0))); // completes the left column
    }

    #[test]
    fn test_blocked_line_has_no_winning_square() {
        let mut cells = [[Cell::Empty; 3]; 3];
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        cells[0][2] = Cell::O;

        assert!(!LineAnalyzer::winning_squares(&cells, Player::X).contains(&(0, 2)));
    }
}

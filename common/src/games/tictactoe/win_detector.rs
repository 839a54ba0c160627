use super::game_state::{Board, BOARD_SIZE};
use super::types::Mark;

/// The 8 winnable lines of the 3x3 grid: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the mark holding a completed line, if any. An `Empty` cell
/// never matches, so an untouched line is not a win for anyone.
pub fn check_win(board: &Board) -> Option<Mark> {
    for line in &LINES {
        let first = board[line[0].0][line[0].1];
        if first == Mark::Empty {
            continue;
        }
        if line.iter().all(|&(row, col)| board[row][col] == first) {
            return Some(first);
        }
    }
    None
}

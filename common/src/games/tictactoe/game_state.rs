use super::types::{GameStatus, Mark};
use super::win_detector::check_win;
use crate::protocol::GameSnapshot;

pub const BOARD_SIZE: usize = 3;

pub type Board = [[Mark; BOARD_SIZE]; BOARD_SIZE];

/// The single authoritative game. Lives for the process lifetime and is
/// only ever mutated through `place_mark`.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Validates and applies a single move. Any rejection leaves the
    /// state untouched.
    pub fn place_mark(&mut self, player: Mark, row: usize, col: usize) -> Result<(), String> {
        if self.status.is_terminal() {
            return Err("Game is already over".to_string());
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }

        if self.board[row][col] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        if player != self.current_mark {
            return Err("Not your turn".to_string());
        }

        self.board[row][col] = player;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        // current_mark is always X or O here, opponent() cannot miss.
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.is_board_full() {
            self.status = GameStatus::Draw;
        }
    }

    fn is_board_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            winner: self.status,
            current_player: self.current_mark,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(state: &mut GameState, moves: &[(Mark, usize, usize)]) {
        for &(player, row, col) in moves {
            state
                .place_mark(player, row, col)
                .unwrap_or_else(|e| panic!("move {:?} at ({},{}) rejected: {}", player, row, col, e));
        }
    }

    #[test]
    fn test_new_game_is_empty_and_x_starts() {
        let state = GameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert!(state.board.iter().flatten().all(|&c| c == Mark::Empty));
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut state = GameState::new();
        assert!(state.place_mark(Mark::X, 0, 0).is_ok());
        assert_eq!(state.current_mark, Mark::O);
        assert!(state.place_mark(Mark::O, 1, 1).is_ok());
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_wrong_turn_is_rejected_without_mutation() {
        let mut state = GameState::new();
        let result = state.place_mark(Mark::O, 0, 0);
        assert!(result.is_err());
        assert_eq!(state.board[0][0], Mark::Empty);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
    }

    #[test]
    fn test_empty_mark_is_never_allowed_to_move() {
        let mut state = GameState::new();
        assert!(state.place_mark(Mark::Empty, 0, 0).is_err());
        assert_eq!(state.board[0][0], Mark::Empty);
    }

    #[test]
    fn test_occupied_cell_is_rejected_for_either_player() {
        let mut state = GameState::new();
        play_all(&mut state, &[(Mark::X, 1, 1)]);
        assert!(state.place_mark(Mark::O, 1, 1).is_err());
        assert!(state.place_mark(Mark::X, 1, 1).is_err());
        assert_eq!(state.board[1][1], Mark::X);
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut state = GameState::new();
        assert!(state.place_mark(Mark::X, 3, 0).is_err());
        assert!(state.place_mark(Mark::X, 0, 3).is_err());
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_row_win_ends_game_on_completing_move() {
        let mut state = GameState::new();
        play_all(
            &mut state,
            &[
                (Mark::X, 0, 0),
                (Mark::O, 1, 0),
                (Mark::X, 0, 1),
                (Mark::O, 1, 1),
            ],
        );
        assert_eq!(state.status, GameStatus::InProgress);

        play_all(&mut state, &[(Mark::X, 0, 2)]);
        assert_eq!(state.status, GameStatus::XWon);
        // Turn does not advance past the winning move.
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_column_win() {
        let mut state = GameState::new();
        play_all(
            &mut state,
            &[
                (Mark::X, 0, 0),
                (Mark::O, 0, 1),
                (Mark::X, 1, 0),
                (Mark::O, 0, 2),
                (Mark::X, 2, 0),
            ],
        );
        assert_eq!(state.status, GameStatus::XWon);
    }

    #[test]
    fn test_diagonal_win_for_o() {
        let mut state = GameState::new();
        play_all(
            &mut state,
            &[
                (Mark::X, 0, 1),
                (Mark::O, 0, 0),
                (Mark::X, 0, 2),
                (Mark::O, 1, 1),
                (Mark::X, 2, 1),
                (Mark::O, 2, 2),
            ],
        );
        assert_eq!(state.status, GameStatus::OWon);
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_terminal_state_rejects_every_further_move() {
        let mut state = GameState::new();
        play_all(
            &mut state,
            &[
                (Mark::X, 0, 0),
                (Mark::O, 1, 0),
                (Mark::X, 0, 1),
                (Mark::O, 1, 1),
                (Mark::X, 0, 2),
            ],
        );
        assert_eq!(state.status, GameStatus::XWon);

        let board_before = state.board;
        assert!(state.place_mark(Mark::O, 2, 2).is_err());
        assert!(state.place_mark(Mark::X, 2, 2).is_err());
        assert_eq!(state.board, board_before);
        assert_eq!(state.status, GameStatus::XWon);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let mut state = GameState::new();
        play_all(
            &mut state,
            &[
                (Mark::X, 0, 0),
                (Mark::O, 0, 1),
                (Mark::X, 0, 2),
                (Mark::O, 1, 1),
                (Mark::X, 1, 0),
                (Mark::O, 1, 2),
                (Mark::X, 2, 1),
                (Mark::O, 2, 0),
                (Mark::X, 2, 2),
            ],
        );
        assert_eq!(state.status, GameStatus::Draw);
    }

    #[test]
    fn test_line_completed_on_last_cell_is_a_win_not_a_draw() {
        // X O X
        // O O X
        // O X X  <- final move at (2,2) completes the right column
        let mut state = GameState::new();
        play_all(
            &mut state,
            &[
                (Mark::X, 0, 0),
                (Mark::O, 0, 1),
                (Mark::X, 0, 2),
                (Mark::O, 1, 0),
                (Mark::X, 1, 2),
                (Mark::O, 1, 1),
                (Mark::X, 2, 1),
                (Mark::O, 2, 0),
                (Mark::X, 2, 2),
            ],
        );
        assert_eq!(state.status, GameStatus::XWon);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_moves() {
        let mut state = GameState::new();
        play_all(&mut state, &[(Mark::X, 0, 0)]);

        let snapshot = state.to_snapshot();
        play_all(&mut state, &[(Mark::O, 1, 1)]);

        assert_eq!(snapshot.board[1][1], Mark::Empty);
        assert_eq!(snapshot.current_player, Mark::O);
        assert_eq!(state.board[1][1], Mark::O);
    }
}

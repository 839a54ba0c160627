use std::sync::{Arc, Mutex};

use common::games::tictactoe::check_win;
use common::{Board, GameSnapshot, GameStatus, Mark};

/// UI-to-network commands. The network task owns the HTTP client; the
/// UI thread only ever pushes commands into the channel.
#[derive(Debug, Clone, Copy)]
pub enum ClientCommand {
    PlaceMark { row: usize, col: usize },
}

/// Latest known game view, shared between the egui thread and the
/// network task.
pub struct SharedState {
    snapshot: Arc<Mutex<GameSnapshot>>,
    notice: Arc<Mutex<Option<String>>>,
    connection_error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(GameSnapshot {
                board: [[Mark::Empty; 3]; 3],
                winner: GameStatus::InProgress,
                current_player: Mark::X,
            })),
            notice: Arc::new(Mutex::new(None)),
            connection_error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_snapshot(&self) -> GameSnapshot {
        *self.snapshot.lock().unwrap()
    }

    /// Stores an authoritative snapshot from a move response.
    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    /// Merges a polled board-only snapshot. The `/state` endpoint
    /// carries no winner or turn information, so both are re-derived
    /// from the grid.
    pub fn apply_board(&self, board: Board) {
        let mut snapshot = self.snapshot.lock().unwrap();
        snapshot.board = board;
        snapshot.winner = derive_status(&board);
        snapshot.current_player = derive_current_player(&board);
    }

    /// Game-level notices, e.g. a rejected move. Stays visible until
    /// the next accepted move clears it.
    pub fn set_notice(&self, notice: String) {
        *self.notice.lock().unwrap() = Some(notice);
    }

    pub fn get_notice(&self) -> Option<String> {
        self.notice.lock().unwrap().clone()
    }

    pub fn clear_notice(&self) {
        *self.notice.lock().unwrap() = None;
    }

    /// Transport-level notices. Cleared as soon as polling succeeds
    /// again, independently of any game-level notice.
    pub fn set_connection_error(&self, error: String) {
        *self.connection_error.lock().unwrap() = Some(error);
    }

    pub fn get_connection_error(&self) -> Option<String> {
        self.connection_error.lock().unwrap().clone()
    }

    pub fn clear_connection_error(&self) {
        *self.connection_error.lock().unwrap() = None;
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            notice: Arc::clone(&self.notice),
            connection_error: Arc::clone(&self.connection_error),
        }
    }
}

fn derive_status(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return match mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    let full = board.iter().flatten().all(|&cell| cell != Mark::Empty);
    if full {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// X moves first and strict alternation holds on the server, so the
/// mark counts determine whose turn it is.
fn derive_current_player(board: &Board) -> Mark {
    let x_count = board.iter().flatten().filter(|&&c| c == Mark::X).count();
    let o_count = board.iter().flatten().filter(|&&c| c == Mark::O).count();
    if x_count > o_count { Mark::O } else { Mark::X }
}

mod game_state;
mod types;
mod win_detector;

pub use game_state::{GameState, Board, BOARD_SIZE};
pub use types::{GameStatus, Mark};
pub use win_detector::check_win;

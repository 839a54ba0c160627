pub mod config;
pub mod games;
pub mod logger;
pub mod protocol;

pub use games::tictactoe::{Board, GameState, GameStatus, Mark, BOARD_SIZE};
pub use protocol::{GameSnapshot, MoveRequest};

use std::sync::Arc;
use tokio::sync::Mutex;

use common::{Board, GameSnapshot, GameState, MoveRequest};

/// Serializes all access to the single authoritative game. Every
/// submission runs its full validate-mutate-evaluate sequence under the
/// lock, so no partial update is ever observable.
#[derive(Clone)]
pub struct GameService {
    game: Arc<Mutex<GameState>>,
}

impl GameService {
    pub fn new() -> Self {
        Self {
            game: Arc::new(Mutex::new(GameState::new())),
        }
    }

    /// Applies one move atomically. Returns the post-move snapshot on
    /// acceptance, the rejection reason otherwise.
    pub async fn submit_move(&self, request: MoveRequest) -> Result<GameSnapshot, String> {
        let mut game = self.game.lock().await;
        game.place_mark(request.player, request.row, request.col)?;
        Ok(game.to_snapshot())
    }

    /// Copies the current grid. The copy is detached from the live
    /// board and unaffected by later moves.
    pub async fn board_snapshot(&self) -> Board {
        self.game.lock().await.board
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

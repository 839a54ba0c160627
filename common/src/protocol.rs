//! JSON payloads exchanged between server and client. Field names are
//! PascalCase on the wire (`Player`, `Row`, `Col`, `Board`, `Winner`,
//! `CurrentPlayer`).

use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{Board, GameStatus, Mark};

/// Body of `POST /game`. Transient: validated against the live game
/// and discarded.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoveRequest {
    pub player: Mark,
    pub row: usize,
    pub col: usize,
}

/// Full game state returned by an accepted `POST /game`. A detached
/// copy, never aliased with the live state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSnapshot {
    pub board: Board,
    pub winner: GameStatus,
    pub current_player: Mark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_request_uses_pascal_case_field_names() {
        let request = MoveRequest {
            player: Mark::X,
            row: 0,
            col: 2,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"Player":"X","Row":0,"Col":2}"#);
    }

    #[test]
    fn test_move_request_round_trips() {
        let parsed: MoveRequest =
            serde_json::from_str(r#"{"Player":"O","Row":2,"Col":1}"#).unwrap();
        assert_eq!(parsed.player, Mark::O);
        assert_eq!(parsed.row, 2);
        assert_eq!(parsed.col, 1);
    }

    #[test]
    fn test_snapshot_encodes_winner_variants_distinguishably() {
        let mut snapshot = GameSnapshot {
            board: [[Mark::Empty; 3]; 3],
            winner: GameStatus::Draw,
            current_player: Mark::O,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""Winner":"Draw""#));
        assert!(json.contains(r#""CurrentPlayer":"O""#));

        snapshot.winner = GameStatus::XWon;
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""Winner":"XWon""#));
    }

    #[test]
    fn test_board_cells_encode_as_strings() {
        let mut board = [[Mark::Empty; 3]; 3];
        board[1][1] = Mark::X;
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[["Empty","Empty","Empty"],["Empty","X","Empty"],["Empty","Empty","Empty"]]"#);
    }
}

use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use common::{Board, GameSnapshot, Mark, MoveRequest, log};

use crate::state::{ClientCommand, SharedState};

/// Runs on a dedicated tokio runtime thread: polls the board on a
/// fixed cadence and pushes moves as the UI requests them. The server
/// is the only authority; nothing is retried here.
pub async fn http_client_task(
    server_address: String,
    player: Mark,
    poll_interval: Duration,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let client = reqwest::Client::new();
    let state_url = format!("{}/state", server_address);
    let game_url = format!("{}/game", server_address);

    let mut poll = interval(poll_interval);

    loop {
        tokio::select! {
            _ = poll.tick() => {
                match fetch_board(&client, &state_url).await {
                    Ok(board) => {
                        shared_state.apply_board(board);
                        shared_state.clear_connection_error();
                    }
                    Err(e) => {
                        log!("Failed to fetch board state: {}", e);
                        shared_state.set_connection_error("Server unreachable".to_string());
                    }
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    log!("Command channel closed, stopping client task");
                    break;
                };

                match command {
                    ClientCommand::PlaceMark { row, col } => {
                        submit_move(&client, &game_url, player, row, col, &shared_state).await;
                    }
                }
            }
        }
    }
}

async fn fetch_board(client: &reqwest::Client, state_url: &str) -> Result<Board, String> {
    let response = client
        .get(state_url)
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?;

    response
        .json::<Board>()
        .await
        .map_err(|e| format!("bad state payload: {}", e))
}

async fn submit_move(
    client: &reqwest::Client,
    game_url: &str,
    player: Mark,
    row: usize,
    col: usize,
    shared_state: &SharedState,
) {
    let request = MoveRequest { player, row, col };

    let response = match client.post(game_url).json(&request).send().await {
        Ok(response) => response,
        Err(e) => {
            log!("Failed to send move: {}", e);
            shared_state.set_connection_error("Server unreachable".to_string());
            return;
        }
    };

    if response.status().is_success() {
        match response.json::<GameSnapshot>().await {
            Ok(snapshot) => {
                shared_state.set_snapshot(snapshot);
                shared_state.clear_notice();
            }
            Err(e) => {
                log!("Bad move response payload: {}", e);
            }
        }
    } else {
        // An illegal move is an expected outcome, not a fault: the
        // next poll re-synchronizes the view.
        log!(
            "Move {:?} at ({},{}) rejected with status {}",
            player,
            row,
            col,
            response.status()
        );
        shared_state.set_notice("Move rejected".to_string());
    }
}

use axum::{
    Json, Router,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use common::{Board, GameSnapshot, MoveRequest};

use crate::game_service::GameService;
use crate::log;

pub fn build_router(service: GameService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/game", post(submit_move_handler))
        .route("/state", get(state_handler))
        .layer(cors)
        .with_state(service)
}

pub async fn run_web_server(
    service: GameService,
    bind_address: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(service);

    // Failing to bind is the only fatal error in the process.
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log!("Game server listening on {}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

/// `POST /game`: accepted moves return the full post-move state,
/// malformed payloads and illegal moves a 400 with no body.
async fn submit_move_handler(
    State(service): State<GameService>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameSnapshot>, StatusCode> {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            log!("Malformed move payload: {}", rejection);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    match service.submit_move(request).await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(reason) => {
            log!(
                "Rejected move {:?} at ({},{}): {}",
                request.player,
                request.row,
                request.col,
                reason
            );
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// `GET /state`: board-only snapshot, no winner indication.
async fn state_handler(State(service): State<GameService>) -> Json<Board> {
    Json(service.board_snapshot().await)
}

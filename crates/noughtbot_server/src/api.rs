//! Routes, request/response types, and handlers.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use noughtbot_engine::{Board, GameSession, GameState, MoveError, Player, Square, TurnOutcome};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument, warn};

/// Shared handle to the single process-wide game session.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Serialized board: 3x3 grid of `""`, `"X"`, or `"O"`.
type BoardCells = [[&'static str; 3]; 3];

/// Body of a `POST /move` request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Target row (0-2).
    pub row: i64,
    /// Target column (0-2).
    pub col: i64,
}

/// Body of a successful `POST /move` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// `"success"`, `"win"`, or `"draw"`.
    pub status: &'static str,
    /// Human-readable summary of the turn.
    pub message: String,
    /// Board after the human's move and the computer's reply.
    pub board: BoardCells,
    /// Player whose action the game is waiting on (the winner after
    /// a win, the last mover after a draw).
    pub current_player: Player,
    /// Winner, if the game is over.
    pub winner: Option<Player>,
    /// Whether the game ended in a draw.
    pub draw: bool,
}

/// Body of a `GET /` or `POST /reset` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    /// Always `"success"`.
    pub status: &'static str,
    /// Human-readable confirmation.
    pub message: String,
    /// The fresh, empty board.
    pub board: BoardCells,
    /// Player to move (always X after a reset).
    pub current_player: Player,
}

/// Body of a rejected request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: &'static str,
    /// What was wrong with the request.
    pub message: String,
}

/// Client error surfaced as HTTP 400 with an explanatory message.
#[derive(Debug, Clone, derive_more::Display)]
#[display("{}", message)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    fn out_of_range(row: i64, col: i64) -> Self {
        Self {
            message: format!("Cell ({row}, {col}) is out of range"),
        }
    }
}

impl From<MoveError> for ApiError {
    fn from(err: MoveError) -> Self {
        let message = match err {
            MoveError::NotPlayersTurn(_) => "Not your turn.".to_string(),
            MoveError::GameAlreadyOver => "Game is over. Please reset.".to_string(),
            MoveError::CellOccupied(..) => "Cell already taken.".to_string(),
            MoveError::InvalidCell(..) => err.to_string(),
        };
        Self { message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(message = %self.message, "rejecting request");
        let body = ErrorResponse {
            status: "error",
            message: self.message,
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

fn board_cells(state: &GameState) -> BoardCells {
    let mut cells = [[""; 3]; 3];
    for (row, cells_row) in cells.iter_mut().enumerate() {
        for (col, cell) in cells_row.iter_mut().enumerate() {
            if let Some(Square::Occupied(player)) = state.board().get(row, col) {
                *cell = player.as_str();
            }
        }
    }
    cells
}

fn parse_coord(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < Board::SIZE)
}

fn fresh_game(session: &SharedSession, message: String) -> ResetResponse {
    let mut game = session.lock().unwrap();
    let state = game.reset();
    ResetResponse {
        status: "success",
        message,
        board: board_cells(state),
        current_player: state.current_player(),
    }
}

/// `GET /` - starts a new game.
#[instrument(skip(session))]
async fn index(State(session): State<SharedSession>) -> Json<ResetResponse> {
    Json(fresh_game(
        &session,
        "New game started. Player X's turn.".to_string(),
    ))
}

/// `POST /reset` - discards the game in progress.
#[instrument(skip(session))]
async fn reset(State(session): State<SharedSession>) -> Json<ResetResponse> {
    Json(fresh_game(
        &session,
        "Game reset. Player X's turn.".to_string(),
    ))
}

/// `POST /move` - submits the human's move.
#[instrument(skip(session), fields(row = req.row, col = req.col))]
async fn submit_move(
    State(session): State<SharedSession>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    // Range-check before the engine sees the coordinates; negative
    // values cannot be cast to board indices.
    let row = parse_coord(req.row).ok_or_else(|| ApiError::out_of_range(req.row, req.col))?;
    let col = parse_coord(req.col).ok_or_else(|| ApiError::out_of_range(req.row, req.col))?;

    let mut game = session.lock().unwrap();
    let outcome = game.submit_human_move(row, col)?;
    let state = game.state();

    let (status, message) = match outcome {
        TurnOutcome::Won(winner) => ("win", format!("Player {winner} wins!")),
        TurnOutcome::Draw => ("draw", "It's a draw!".to_string()),
        TurnOutcome::Continue => ("success", format!("Player {}'s turn", state.current_player())),
    };
    debug!(status, board = %state.board().display(), "move handled");

    Ok(Json(MoveResponse {
        status,
        message,
        board: board_cells(state),
        current_player: state.current_player(),
        winner: state.winner(),
        draw: state.is_draw(),
    }))
}

/// Builds the application router around a shared session.
pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/move", post(submit_move))
        .route("/reset", post(reset))
        .with_state(session)
}

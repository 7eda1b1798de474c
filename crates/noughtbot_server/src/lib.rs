//! HTTP shell over the noughtbot tic-tac-toe engine.
//!
//! Exposes the single process-wide game session as a small JSON API:
//!
//! - `GET /` starts (or restarts) the game
//! - `POST /move` submits the human's move and returns the board
//!   after the computer's reply
//! - `POST /reset` discards the game in progress
//!
//! All game logic lives in [`noughtbot_engine`]; this crate only
//! validates requests, serializes state, and maps engine rejections
//! to `400` responses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod cli;

pub use api::{ApiError, ErrorResponse, MoveRequest, MoveResponse, ResetResponse, SharedSession, router};
pub use cli::Cli;

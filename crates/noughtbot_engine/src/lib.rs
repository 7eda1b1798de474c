//! Noughtbot engine - tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Types**: board, players, and game state (`Board`, `Player`, `GameState`)
//! - **Rules**: move validation and win/draw detection
//! - **Selector**: fixed-priority heuristic for the computer's moves
//! - **Session**: applies the human move and the computer's reply in one step
//!
//! The human always plays X and moves first; the computer always plays O.
//!
//! # Example
//!
//! ```
//! use noughtbot_engine::{GameSession, TurnOutcome};
//!
//! let mut session = GameSession::new();
//! let outcome = session.submit_human_move(1, 1)?;
//! assert_eq!(outcome, TurnOutcome::Continue);
//! # Ok::<(), noughtbot_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod rules;
mod selector;
mod session;
mod types;

pub use rules::{MoveError, apply_move, check_winner, is_draw, wins_at};
pub use selector::select_move;
pub use session::{COMPUTER, GameSession, HUMAN, TurnOutcome};
pub use types::{Board, GameState, GameStatus, Player, Square};

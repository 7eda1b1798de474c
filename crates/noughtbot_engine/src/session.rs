//! Game session: one game against the computer.

use crate::rules::{self, MoveError};
use crate::selector;
use crate::types::{GameState, Player};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument, warn};

/// The human's mark, fixed for the process lifetime.
pub const HUMAN: Player = Player::X;
/// The computer's mark, fixed for the process lifetime.
pub const COMPUTER: Player = Player::O;

/// Outcome of an accepted move submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Game continues, human to move.
    Continue,
    /// The given player completed a line.
    Won(Player),
    /// The board filled up with no winner.
    Draw,
}

/// A single game of tic-tac-toe against the computer.
///
/// Owns the mutable [`GameState`] and the RNG used for the
/// selector's tie-breaks; tests inject a seeded RNG through
/// [`GameSession::with_rng`].
#[derive(Debug)]
pub struct GameSession<R = SmallRng> {
    state: GameState,
    rng: R,
}

impl GameSession<SmallRng> {
    /// Creates a session with an OS-seeded RNG.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }
}

impl Default for GameSession<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session with the given tie-break RNG.
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies the human's move, then the computer's reply.
    ///
    /// Rejected moves leave the state untouched. After a win the
    /// reported current player is the winner; after a draw it is
    /// whoever filled the last square.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<TurnOutcome, MoveError> {
        if self.state.current_player() != HUMAN {
            warn!(row, col, "move submitted out of turn");
            return Err(MoveError::NotPlayersTurn(HUMAN));
        }
        if self.state.is_terminal() {
            warn!(row, col, "move submitted after game end");
            return Err(MoveError::GameAlreadyOver);
        }

        rules::apply_move(self.state.board_mut(), row, col, HUMAN)?;
        self.state.push_history(row, col);

        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_winner(winner);
            info!(%winner, moves = self.state.history().len(), "game won");
            return Ok(TurnOutcome::Won(winner));
        }
        if rules::is_draw(self.state.board(), None) {
            self.state.set_draw();
            info!(moves = self.state.history().len(), "game drawn");
            return Ok(TurnOutcome::Draw);
        }

        self.state.set_current_player(COMPUTER);
        let Some((reply_row, reply_col)) =
            selector::select_move(self.state.board(), COMPUTER, HUMAN, &mut self.rng)
        else {
            // Unreachable after the draw check above; kept as a safety net.
            warn!("selector found no empty square on a non-full board");
            self.state.set_draw();
            return Ok(TurnOutcome::Draw);
        };
        rules::apply_move(self.state.board_mut(), reply_row, reply_col, COMPUTER)
            .expect("selector returned a playable square");
        self.state.push_history(reply_row, reply_col);
        info!(row = reply_row, col = reply_col, "computer replied");

        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_winner(winner);
            info!(%winner, moves = self.state.history().len(), "game won");
            return Ok(TurnOutcome::Won(winner));
        }
        if rules::is_draw(self.state.board(), None) {
            self.state.set_draw();
            info!(moves = self.state.history().len(), "game drawn");
            return Ok(TurnOutcome::Draw);
        }

        self.state.set_current_player(HUMAN);
        Ok(TurnOutcome::Continue)
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &GameState {
        info!(moves = self.state.history().len(), "resetting game");
        self.state = GameState::new();
        &self.state
    }
}

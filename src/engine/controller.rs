//! Game controller implementation.

use std::fmt;

use crate::board::{
    apply_move, find_best_move, legal_moves_for, winner, Color, Move, MoveError, Outcome, Piece,
    SearchParams, SearchReport, Square, SquareList, State, StateError,
};

/// Error type for game actions rejected by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The other side is to move
    NotYourTurn { side: Color },
    /// The game already ended
    GameOver(Outcome),
    /// The move was rejected by the rules
    Move(MoveError),
    /// The engine found nothing to play
    NoMoveAvailable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotYourTurn { side } => write!(f, "It is not {side}'s turn"),
            GameError::GameOver(outcome) => write!(f, "Game is over: {outcome}"),
            GameError::Move(e) => write!(f, "{e}"),
            GameError::NoMoveAvailable => write!(f, "No move available"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

impl From<StateError> for GameError {
    fn from(e: StateError) -> Self {
        GameError::Move(MoveError::InvalidState(e))
    }
}

/// Owns the canonical state and alternates the human and engine turns.
///
/// The state is only ever replaced wholesale by an accepted move.
#[derive(Debug, Clone)]
pub struct GameController {
    state: State,
    to_move: Color,
    params: SearchParams,
    history: Vec<Move>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl GameController {
    /// New game from the initial position, human to move.
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        GameController {
            state: State::initial(),
            to_move: Color::White,
            params,
            history: Vec::new(),
        }
    }

    /// Restart from the initial position, keeping the search settings.
    pub fn reset(&mut self) {
        self.state = State::initial();
        self.to_move = Color::White;
        self.history.clear();
    }

    /// Replace the position. The state must satisfy the board invariants.
    pub fn set_position(&mut self, state: State, to_move: Color) -> Result<(), GameError> {
        state.validate()?;
        self.state = state;
        self.to_move = to_move;
        self.history.clear();
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub const fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub const fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    /// Moves played since the last reset or position change.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Game result, if any: a winner on the board, or the side to move
    /// having nothing to play.
    #[must_use]
    pub fn status(&self) -> Option<Outcome> {
        if let Some(outcome) = winner(&self.state) {
            return Some(outcome);
        }
        if self.state.candidates_for(self.to_move).is_empty() {
            return Some(Outcome::NoMoves(self.to_move));
        }
        None
    }

    /// Legal destinations for `piece` in the current state.
    pub fn legal_moves(&self, piece: Piece) -> Result<SquareList, GameError> {
        Ok(legal_moves_for(piece, &self.state)?)
    }

    fn ensure_playable(&self, side: Color) -> Result<(), GameError> {
        if let Some(outcome) = self.status() {
            return Err(GameError::GameOver(outcome));
        }
        if self.to_move != side {
            return Err(GameError::NotYourTurn { side });
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) -> Result<(), GameError> {
        let next = match apply_move(&self.state, mv.piece, mv.to) {
            Ok(next) => next,
            Err(e) => {
                #[cfg(feature = "logging")]
                log::warn!("rejected {mv}: {e}");
                return Err(e.into());
            }
        };

        #[cfg(feature = "logging")]
        log::info!("{} plays {mv}", self.to_move);

        self.state = next;
        self.history.push(mv);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Move the human's king to `to`.
    pub fn play_human(&mut self, to: Square) -> Result<Move, GameError> {
        self.ensure_playable(Color::White)?;
        let mv = Move::new(Piece::WhiteKing, to);
        self.commit(mv)?;
        Ok(mv)
    }

    /// Let the engine choose and play its move.
    pub fn play_engine(&mut self) -> Result<SearchReport, GameError> {
        let params = self.params.clone();
        self.play_engine_with(&params)
    }

    /// As [`GameController::play_engine`], with one-off search settings.
    pub fn play_engine_with(&mut self, params: &SearchParams) -> Result<SearchReport, GameError> {
        self.ensure_playable(Color::Black)?;
        let report = find_best_move(&self.state, params);
        let mv = report.result.best_move.ok_or(GameError::NoMoveAvailable)?;
        self.commit(mv)?;
        Ok(report)
    }
}

use crate::board::Board;
use crate::location::{Location, Move};
use crate::piece::Color;
use log::{debug, info};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub struct Game {
    board: Board,
    turn: Color,
    state: GameState,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Unfinished,
    RedWon,
    BlueWon,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfinished => "UNFINISHED",
            Self::RedWon => "RED_WON",
            Self::BlueWon => "BLUE_WON",
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("no piece at the origin")]
    NoPieceAtOrigin,
    #[error("it is the other player's turn")]
    WrongTurn,
    #[error("cannot pass while in check")]
    PassInCheck,
    #[error("the destination is outside the piece's range")]
    IllegalGeometry,
    #[error("the move would leave the general in check")]
    SelfCheck,
    #[error("unparsable coordinate")]
    BadCoordinate,
}

impl Game {
    /// A fresh game on the standard opening layout. Blue moves first.
    pub fn new() -> Self {
        Self::with_board(Board::opening(), Color::Blue)
    }

    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            state: GameState::Unfinished,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Attempts one move given textual coordinates (`a1` through `i10`).
    /// Returns `false` for any illegal request, with the game untouched:
    /// unparsable coordinates, a finished game, the wrong player, a pass
    /// while in check, a destination outside the piece's range, or a move
    /// that would leave the mover's own General in check. The origin and
    /// destination being equal is a pass.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        let mv = match (from.parse(), to.parse()) {
            (Ok(from), Ok(to)) => Move { from, to },
            _ => {
                debug!("rejected {from:?} {to:?}: {}", MoveError::BadCoordinate);
                return false;
            }
        };
        match self.try_move(mv) {
            Ok(()) => true,
            Err(error) => {
                debug!("rejected {mv}: {error}");
                false
            }
        }
    }

    /// `make_move` with parsed coordinates and a reason for every
    /// rejection.
    pub fn try_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.state != GameState::Unfinished {
            return Err(MoveError::GameOver);
        }

        let piece = self.board[mv.from].ok_or(MoveError::NoPieceAtOrigin)?;
        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn);
        }

        if mv.from == mv.to {
            if self.board.is_in_check(self.turn) {
                return Err(MoveError::PassInCheck);
            }
            debug!("{} passes", self.turn);
            self.turn = self.turn.opponent();
            return Ok(());
        }

        if !self.board.candidate_moves(mv.from).contains(&mv.to) {
            return Err(MoveError::IllegalGeometry);
        }

        let mut scratch = self.board.clone();
        let capture = scratch.play(mv);
        if scratch.is_in_check(self.turn) {
            return Err(MoveError::SelfCheck);
        }
        self.board = scratch;

        if let Some(capture) = capture {
            debug!("{mv}: {} captures {:?}", self.turn, capture.kind());
        }

        let opponent = self.turn.opponent();
        if self.board.is_in_check(opponent) {
            if self.board.iter_legal_moves(opponent).next().is_none() {
                self.state = match self.turn {
                    Color::Red => GameState::RedWon,
                    Color::Blue => GameState::BlueWon,
                };
                info!("checkmate, {} wins", self.turn);
                return Ok(());
            }
            debug!("{opponent} is in check");
        }

        self.turn = opponent;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match self.state {
            GameState::Unfinished => {
                write!(f, "{} to play", self.turn)?;
                if self.is_in_check(self.turn) {
                    write!(f, ", in check")?;
                }
                writeln!(f)
            }
            state => writeln!(f, "{state}"),
        }
    }
}

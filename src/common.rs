//! Common types for the engine: board and game errors, fire outcomes.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// The cell held a ship segment.
    Hit,
    /// The cell was empty water.
    Miss,
    /// The cell had already been fired at; nothing changed.
    AlreadyFired,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate or ship footprint extends beyond the grid.
    OutOfBounds { row: usize, col: usize },
    /// Footprint covers a cell already occupied by a ship.
    Overlap,
    /// Footprint touches another ship, diagonals included.
    TooClose,
    /// No legal position is left for the requested ship.
    NoRoom,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            // Board dimensions are fixed at compile time and fit in u128.
            BitBoardError::SizeTooLarge { n, .. } => BoardError::OutOfBounds { row: n, col: n },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::Overlap => write!(f, "Ship placement overlaps with another ship"),
            BoardError::TooClose => write!(f, "Ship placement touches another ship"),
            BoardError::NoRoom => write!(f, "No legal position left for ship"),
        }
    }
}

/// Errors returned by `GameEngine` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement or targeting rejected by the board.
    Board(BoardError),
    /// Operation is not valid in the current phase.
    WrongPhase,
    /// A winner has already been recorded.
    GameAlreadyOver,
    /// A player name was empty.
    InvalidName,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            GameError::GameAlreadyOver => write!(f, "Game is already over"),
            GameError::InvalidName => write!(f, "Player name must not be empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}

use alloc::string::{String, ToString};
use core::fmt;

use crate::board::Board;
use crate::common::GameError;

/// Seat of a player in a game. Player one always fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Zero-based seat index.
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index() + 1)
    }
}

/// A named player and the board holding their fleet.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
}

impl Player {
    /// Create a player with an empty board. Surrounding whitespace is
    /// dropped; a blank name is rejected.
    pub fn new(name: &str) -> Result<Self, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidName);
        }
        Ok(Player {
            name: name.to_string(),
            board: Board::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Every ship of this player's fleet has been destroyed.
    pub fn fleet_destroyed(&self) -> bool {
        self.board.all_ships_destroyed()
    }
}

//! Read-only board snapshots handed to the presentation layer.

use alloc::string::{String, ToString};

use crate::board::Board;
use crate::config::BOARD_SIZE;

/// Whose eyes a snapshot is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// The board's owner, or anyone once the game is over: ships are shown.
    Owner,
    /// The opponent: only fired-at cells are revealed.
    Opponent,
}

/// What a single cell looks like from one side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Not fired at, contents concealed.
    Unknown,
    /// Not fired at, known to be water.
    Empty,
    /// Not fired at, holds a ship segment.
    Ship,
    /// Fired at, ship segment of a ship still afloat.
    Hit,
    /// Fired at, ship segment of a destroyed ship.
    Sunk,
    /// Fired at, water.
    Miss,
}

/// Snapshot of one board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    pub owner: String,
    pub visibility: Visibility,
    pub cells: [[CellView; BOARD_SIZE]; BOARD_SIZE],
    pub ships_remaining: usize,
}

impl BoardView {
    /// Render `board` for the given visibility. Opponent views never expose an
    /// un-fired ship cell.
    pub fn render(owner: &str, board: &Board, visibility: Visibility) -> Self {
        let mut cells = [[CellView::Unknown; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                let ship = board.ship_at(r, c).ok().flatten();
                let hit = board.cell(r, c).map(|cell| cell.is_hit()).unwrap_or(false);
                *slot = match (hit, ship, visibility) {
                    (true, Some(s), _) if s.is_destroyed() => CellView::Sunk,
                    (true, Some(_), _) => CellView::Hit,
                    (true, None, _) => CellView::Miss,
                    (false, _, Visibility::Opponent) => CellView::Unknown,
                    (false, Some(_), Visibility::Owner) => CellView::Ship,
                    (false, None, Visibility::Owner) => CellView::Empty,
                };
            }
        }
        BoardView {
            owner: owner.to_string(),
            visibility,
            cells,
            ships_remaining: board.ships_remaining(),
        }
    }

    /// Cell at (row, col); `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellView> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }
}

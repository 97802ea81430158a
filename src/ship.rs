//! Ship kinds, orientation and the placed-ship record.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::{BitBoard, BitBoardError};
use crate::config::{ship_size, BOARD_SIZE};

/// Footprint mask type for a single board.
pub type Footprint = BitBoard<u128, BOARD_SIZE>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Cell `i` steps from `origin` along this orientation.
    pub fn step(self, (row, col): (usize, usize), i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// The closed set of ship types. Sizes live in `config::SHIP_SIZES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Battleship,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Ship's display name.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }

    /// Number of segments, from the configured size table.
    pub fn size(self) -> usize {
        ship_size(self)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a ship in its owning board's ship list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship placed on the board. Kind, orientation and origin are fixed at
/// construction; only the per-segment hit record changes.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    row: usize,
    col: usize,
    hits: Vec<bool>,
}

impl Ship {
    /// Build a ship at (`row`, `col`). Bounds are the board's concern; see
    /// `Board::place_ship`.
    pub fn new(kind: ShipKind, orientation: Orientation, row: usize, col: usize) -> Self {
        Ship {
            kind,
            orientation,
            row,
            col,
            hits: vec![false; kind.size()],
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.hits.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Footprint cells in segment order, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let origin = self.origin();
        (0..self.size()).map(move |i| self.orientation.step(origin, i))
    }

    /// Segment index covering (`row`, `col`), if any.
    pub fn segment_of(&self, row: usize, col: usize) -> Option<usize> {
        self.cells().position(|cell| cell == (row, col))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.segment_of(row, col).is_some()
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> Result<Footprint, BitBoardError> {
        Footprint::from_iter(self.cells())
    }

    /// Per-segment hit record, origin first.
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    /// Record a hit at (`row`, `col`). Returns `false` if the cell is not part
    /// of this ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        match self.segment_of(row, col) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hits.iter().all(|h| *h)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.kind,
            self.row,
            self.col,
            self.orientation,
            self.hits.iter().filter(|h| **h).count(),
            self.size(),
        )
    }
}

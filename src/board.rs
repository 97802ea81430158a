//! A player's 9×9 board: cell grid, placed ships and fire resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, FireOutcome};
use crate::config::{BOARD_CELLS, BOARD_SIZE};
use crate::ship::{Footprint, Orientation, Ship, ShipId, ShipKind};

/// One grid square. `ship` is a back-reference into the board's ship list and
/// is written once, at placement; `hit` only ever goes from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    ship: Option<ShipId>,
    hit: bool,
}

impl Cell {
    /// The ship covering this cell, if any.
    pub fn occupying_ship(&self) -> Option<ShipId> {
        self.ship
    }

    /// Whether this cell has been fired at.
    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

/// Main board state: cells, ships and an occupancy mask used for placement
/// checks.
#[derive(Clone)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
    ships: Vec<Ship>,
    occupied: Footprint,
}

#[inline]
fn index(row: usize, col: usize) -> Result<usize, BoardError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(BoardError::OutOfBounds { row, col });
    }
    Ok(row * BOARD_SIZE + col)
}

impl Board {
    /// Create an empty board (no ships placed, nothing fired).
    pub fn new() -> Self {
        Board {
            cells: [Cell::default(); BOARD_CELLS],
            ships: Vec::new(),
            occupied: Footprint::new(),
        }
    }

    /// Cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        Ok(&self.cells[index(row, col)?])
    }

    /// Ships in placement order; `ShipId` indexes this slice.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// The ship covering (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<&Ship>, BoardError> {
        let cell = self.cell(row, col)?;
        Ok(cell.ship.and_then(|id| self.ship(id)))
    }

    /// Occupancy mask of all ships.
    pub fn occupancy(&self) -> Footprint {
        self.occupied
    }

    /// Number of cells fired at so far.
    pub fn shots_fired(&self) -> usize {
        self.cells.iter().filter(|c| c.hit).count()
    }

    /// Validate a placement without committing it. Returns the footprint.
    pub fn check_placement(
        &self,
        kind: ShipKind,
        (row, col): (usize, usize),
        orientation: Orientation,
    ) -> Result<Footprint, BoardError> {
        let mut mask = Footprint::new();
        for i in 0..kind.size() {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col.saturating_add(i)),
                Orientation::Vertical => (row.saturating_add(i), col),
            };
            mask.set(r, c)?;
        }
        if !(self.occupied & mask).is_empty() {
            return Err(BoardError::Overlap);
        }
        if !(self.occupied & mask.dilate()).is_empty() {
            return Err(BoardError::TooClose);
        }
        Ok(mask)
    }

    /// Place a ship of `kind` at `origin`. Fails without touching the board if
    /// the footprint leaves the grid, overlaps a ship or touches one.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        origin: (usize, usize),
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let mask = self.check_placement(kind, origin, orientation)?;
        let id = ShipId(self.ships.len());
        let ship = Ship::new(kind, orientation, origin.0, origin.1);
        for (r, c) in ship.cells() {
            self.cells[index(r, c)?].ship = Some(id);
        }
        self.occupied = self.occupied | mask;
        self.ships.push(ship);
        Ok(id)
    }

    fn legal_placements(
        &self,
        kind: ShipKind,
    ) -> impl Iterator<Item = ((usize, usize), Orientation)> + '_ {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(|o| (0..BOARD_CELLS).map(move |i| ((i / BOARD_SIZE, i % BOARD_SIZE), o)))
            .filter(move |(origin, o)| self.check_placement(kind, *origin, *o).is_ok())
    }

    /// Pick a legal (origin, orientation) for `kind` uniformly at random.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<((usize, usize), Orientation), BoardError> {
        let count = self.legal_placements(kind).count();
        if count == 0 {
            return Err(BoardError::NoRoom);
        }
        let pick = rng.random_range(0..count);
        self.legal_placements(kind)
            .nth(pick)
            .ok_or(BoardError::NoRoom)
    }

    /// Fire at (row, col). A repeat shot reports `AlreadyFired` and changes
    /// nothing.
    pub fn fire_at(&mut self, row: usize, col: usize) -> Result<FireOutcome, BoardError> {
        let idx = index(row, col)?;
        let cell = &mut self.cells[idx];
        if cell.hit {
            return Ok(FireOutcome::AlreadyFired);
        }
        cell.hit = true;
        match cell.ship {
            Some(id) => {
                if let Some(ship) = self.ships.get_mut(id.0) {
                    ship.register_hit(row, col);
                }
                Ok(FireOutcome::Hit)
            }
            None => Ok(FireOutcome::Miss),
        }
    }

    /// Returns `true` when at least one ship is placed and every ship is
    /// destroyed. An empty board is never destroyed.
    pub fn all_ships_destroyed(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_destroyed)
    }

    /// Number of ships not yet destroyed.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  occupied: {:?},\n  shots: {},\n  ships: {:?}\n}}",
            self.occupied,
            self.shots_fired(),
            self.ships
        )
    }
}

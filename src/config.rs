//! Tunable game constants: grid dimension and fleet composition.

use crate::ship::ShipKind;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 9;

/// Number of cells on a board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Segment count for each ship kind. `ShipKind::size` reads this table, so
/// retuning the fleet never touches ship behavior.
pub const SHIP_SIZES: [(ShipKind, usize); 3] = [
    (ShipKind::Battleship, 3),
    (ShipKind::Destroyer, 2),
    (ShipKind::Submarine, 1),
];

/// Fleet composition as (kind, count), largest ship first.
pub const FLEET: [(ShipKind, usize); 3] = [
    (ShipKind::Battleship, 1),
    (ShipKind::Destroyer, 2),
    (ShipKind::Submarine, 3),
];

/// Number of ships each player places.
pub const FLEET_LEN: usize = 6;

/// The order in which a player places the fleet during setup.
pub const FLEET_ORDER: [ShipKind; FLEET_LEN] = [
    ShipKind::Battleship,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// Total number of ship segments in one fleet.
pub const FLEET_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET_LEN {
        total += ship_size(FLEET_ORDER[i]);
        i += 1;
    }
    total
};

/// Look up the configured size for `kind`.
pub const fn ship_size(kind: ShipKind) -> usize {
    let mut i = 0;
    while i < SHIP_SIZES.len() {
        if SHIP_SIZES[i].0 as u8 == kind as u8 {
            return SHIP_SIZES[i].1;
        }
        i += 1;
    }
    0
}

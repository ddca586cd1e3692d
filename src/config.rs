//! Fixed game parameters: board size, the standard fleet, scoring tables.

use crate::ship::ShipClass;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = 5;

/// The standard fleet, largest first.
pub const FLEET_CLASSES: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total occupied cells of a fully placed fleet.
pub const TOTAL_SHIP_CELLS: usize = 17;

/// Points per ship cell awarded when the player sinks a ship, before the
/// difficulty multiplier.
pub const SINK_POINTS_PER_CELL: u32 = 10;

/// Attempts at a random non-overlapping spot before giving up on a ship.
pub const PLACEMENT_ATTEMPTS: usize = 100;

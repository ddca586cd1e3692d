//! The five-ship fleet owned by one side.

use crate::common::BoardError;
use crate::config::{FLEET_CLASSES, NUM_SHIPS};
use crate::ship::{Ship, ShipId, ShipStatus};

/// One side's full set of ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
}

impl Fleet {
    /// Standard fleet, all ships unplaced and horizontal.
    pub fn new() -> Self {
        let ships =
            core::array::from_fn(|i| Ship::new(ShipId::new(i), FLEET_CLASSES[i]));
        Fleet { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship, BoardError> {
        self.ships.get(id.index()).ok_or(BoardError::UnknownShip)
    }

    pub fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship, BoardError> {
        self.ships
            .get_mut(id.index())
            .ok_or(BoardError::UnknownShip)
    }

    /// True when every ship is on the board.
    pub fn all_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// True when every ship in the fleet is sunk. Ranges over the whole
    /// collection, whatever its size.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// The placed ship covering (row, col), if any.
    pub fn owner_of(&self, row: usize, col: usize) -> Option<ShipId> {
        self.ships
            .iter()
            .find(|s| s.contains(row, col))
            .map(Ship::id)
    }

    /// Per-ship summaries in fleet order.
    pub fn statuses(&self) -> [ShipStatus; NUM_SHIPS] {
        core::array::from_fn(|i| self.ships[i].status())
    }

    /// Return every ship to the pristine setup-phase state.
    pub fn reset(&mut self) {
        for ship in self.ships.iter_mut() {
            ship.reset();
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

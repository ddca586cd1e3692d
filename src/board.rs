//! Board state: ship occupancy, shot resolution, and the two cell views
//! (owner and opponent-facing).
//!
//! The board is the single authority. Both the owner view and the revealed
//! view are derived from it on demand; only `fire` writes reveal state, and
//! a cell moves Empty→Hit or Empty→Miss exactly once.

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS, PLACEMENT_ATTEMPTS};
use crate::fleet::Fleet;
use crate::ship::{Mask, Orientation, ShipId};
use alloc::vec::Vec;
use rand::Rng;

/// What the firing side can see about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealState {
    Empty,
    Hit,
    Miss,
}

/// One grid position as a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub reveal: RevealState,
    /// Owning ship; hidden in the revealed view until the cell is hit.
    pub ship: Option<ShipId>,
    /// True once the owning ship is fully sunk.
    pub sunk: bool,
}

/// Fog-of-war projection of a board: reveal masks only, no occupancy.
///
/// This is all the opponent AI is allowed to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealView {
    hits: Mask,
    misses: Mask,
    sunk: Mask,
}

impl RevealView {
    pub fn reveal(&self, row: usize, col: usize) -> RevealState {
        if self.hits.get(row, col).unwrap_or(false) {
            RevealState::Hit
        } else if self.misses.get(row, col).unwrap_or(false) {
            RevealState::Miss
        } else {
            RevealState::Empty
        }
    }

    /// True when (row, col) has not been fired upon.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.reveal(row, col) == RevealState::Empty
    }

    /// All unfired cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let fired = self.hits | self.misses;
        let mut cells = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !fired.get(row, col).unwrap_or(true) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Hit cells whose ship is not yet sunk.
    pub fn unresolved_hits(&self) -> Vec<(usize, usize)> {
        (self.hits & !self.sunk).iter_set().collect()
    }
}

/// One side's board: fleet, occupancy, and reveal masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    fleet: Fleet,
    ship_map: Mask,
    hits: Mask,
    misses: Mask,
    sunk_map: Mask,
}

impl Board {
    /// Empty board, no ships placed, nothing fired.
    pub fn new() -> Self {
        Board {
            fleet: Fleet::new(),
            ship_map: Mask::new(),
            hits: Mask::new(),
            misses: Mask::new(),
            sunk_map: Mask::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Union occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    pub fn hits(&self) -> Mask {
        self.hits
    }

    pub fn misses(&self) -> Mask {
        self.misses
    }

    /// True when every ship of this board's fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    /// Checks a proposed placement: every one of the `size` consecutive
    /// cells from (row, col) in `orientation` is in bounds and unoccupied.
    pub fn is_valid_placement(
        &self,
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
    ) -> bool {
        match crate::ship::span_mask(row, col, size, orientation) {
            Ok(mask) => !self.ship_map.intersects(&mask),
            Err(_) => false,
        }
    }

    /// Place a ship. Writes occupancy only; reveal state is untouched.
    pub fn place_ship(
        &mut self,
        id: ShipId,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.fleet.ship(id)?;
        if ship.is_placed() {
            return Err(BoardError::AlreadyPlaced);
        }
        let mask = ship.placement_mask(row, col, orientation)?;
        if self.ship_map.intersects(&mask) {
            return Err(BoardError::Overlap);
        }
        self.fleet.ship_mut(id)?.place(row, col, orientation)?;
        self.ship_map |= mask;
        Ok(())
    }

    /// Take a ship off the board, clearing exactly its own cells.
    pub fn remove_ship(&mut self, id: ShipId) -> Result<(), BoardError> {
        let mask = self.fleet.ship(id)?.mask();
        self.fleet.ship_mut(id)?.remove()?;
        self.ship_map = self.ship_map & !mask;
        Ok(())
    }

    /// Toggle a ship's orientation; only allowed while it is off the board.
    pub fn rotate_ship(&mut self, id: ShipId) -> Result<(), BoardError> {
        self.fleet.ship_mut(id)?.rotate()
    }

    /// Pick a random non-overlapping (row, col, orientation) for the ship.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: ShipId,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let ship = self.fleet.ship(id)?;
        let len = ship.size();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_row = match orientation {
                Orientation::Vertical => BOARD_SIZE - len,
                Orientation::Horizontal => BOARD_SIZE - 1,
            };
            let max_col = match orientation {
                Orientation::Horizontal => BOARD_SIZE - len,
                Orientation::Vertical => BOARD_SIZE - 1,
            };
            let row = rng.random_range(0..=max_row);
            let col = rng.random_range(0..=max_col);
            if self.is_valid_placement(row, col, len, orientation) {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::PlacementExhausted)
    }

    /// Clear the board and re-place the whole fleet at random.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.clear();
        for i in 0..NUM_SHIPS {
            let id = ShipId::new(i);
            let (row, col, orientation) = self.random_placement(rng, id)?;
            self.place_ship(id, row, col, orientation)?;
        }
        Ok(())
    }

    /// Return the board to the empty setup-phase state.
    pub fn clear(&mut self) {
        self.fleet.reset();
        self.ship_map = Mask::new();
        self.hits = Mask::new();
        self.misses = Mask::new();
        self.sunk_map = Mask::new();
    }

    /// Resolve a shot at (row, col).
    ///
    /// An already-resolved cell is rejected without any mutation. A hit is
    /// registered against the owning ship; the shot that completes a ship
    /// reports `Sunk` and folds the ship's cells into the sunk mask.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        if self.hits.get(row, col)? || self.misses.get(row, col)? {
            return Err(BoardError::AlreadyResolved);
        }
        if !self.ship_map.get(row, col)? {
            self.misses.set(row, col)?;
            return Ok(ShotOutcome::Miss);
        }
        let id = self
            .fleet
            .owner_of(row, col)
            .ok_or(BoardError::UnknownShip)?;
        self.hits.set(row, col)?;
        let sunk = self.fleet.ship_mut(id)?.register_hit(row, col)?;
        if sunk {
            self.sunk_map |= self.fleet.ship(id)?.mask();
            Ok(ShotOutcome::Sunk(id))
        } else {
            Ok(ShotOutcome::Hit(id))
        }
    }

    /// Reveal state of a cell.
    pub fn reveal(&self, row: usize, col: usize) -> Result<RevealState, BoardError> {
        if self.hits.get(row, col)? {
            Ok(RevealState::Hit)
        } else if self.misses.get(row, col)? {
            Ok(RevealState::Miss)
        } else {
            Ok(RevealState::Empty)
        }
    }

    /// Owner view of a cell: ship id always visible.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(Cell {
            reveal: self.reveal(row, col)?,
            ship: self.fleet.owner_of(row, col),
            sunk: self.sunk_map.get(row, col)?,
        })
    }

    /// Opponent-facing view of a cell: ship id hidden until the cell is hit.
    pub fn revealed_cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let mut cell = self.cell(row, col)?;
        if cell.reveal != RevealState::Hit {
            cell.ship = None;
        }
        Ok(cell)
    }

    /// Full owner grid.
    pub fn owner_grid(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                self.cell(r, c).unwrap_or(Cell {
                    reveal: RevealState::Empty,
                    ship: None,
                    sunk: false,
                })
            })
        })
    }

    /// Full opponent-facing grid.
    pub fn revealed_grid(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                self.revealed_cell(r, c).unwrap_or(Cell {
                    reveal: RevealState::Empty,
                    ship: None,
                    sunk: false,
                })
            })
        })
    }

    /// Fog-of-war projection for the opponent AI.
    pub fn reveal_view(&self) -> RevealView {
        RevealView {
            hits: self.hits,
            misses: self.misses,
            sunk: self.sunk_map,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

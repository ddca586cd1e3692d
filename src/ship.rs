//! Ship identity, placement, and hit tracking.

use crate::bitgrid::BitGrid;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use core::fmt;

/// Occupancy mask over the 10×10 board.
pub type Mask = BitGrid<u128, BOARD_SIZE>;

/// Stable ship identity within a game. Indexes into the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(usize);

impl ShipId {
    pub const fn new(index: usize) -> Self {
        ShipId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Class of ship: display name and segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// A fleet ship: class plus placement and accumulated hits.
///
/// Hits are a bit mask over the ship's own cells, so registering the same
/// hit twice cannot inflate the count and `sunk` can never regress.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    class: ShipClass,
    orientation: Orientation,
    origin: Option<(usize, usize)>,
    mask: Mask,
    hits: Mask,
}

impl Ship {
    /// New unplaced ship, horizontal by default.
    pub fn new(id: ShipId, class: ShipClass) -> Self {
        Self {
            id,
            class,
            orientation: Orientation::Horizontal,
            origin: None,
            mask: Mask::new(),
            hits: Mask::new(),
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Placement origin, `None` while off the board.
    pub fn origin(&self) -> Option<(usize, usize)> {
        self.origin
    }

    pub fn is_placed(&self) -> bool {
        self.origin.is_some()
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits.count()
    }

    pub fn is_sunk(&self) -> bool {
        self.is_placed() && self.hits.count() == self.class.size()
    }

    /// Occupancy mask; empty while the ship is off the board.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// True when the placed ship covers (row, col).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Toggle orientation. Rejected while the ship is on the board; the
    /// caller must remove it first.
    pub fn rotate(&mut self) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::RotateWhilePlaced);
        }
        self.orientation = self.orientation.toggled();
        Ok(())
    }

    /// Compute the occupancy mask of a placement without committing it.
    /// Fails when any segment would fall outside the board.
    pub fn placement_mask(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Mask, BoardError> {
        span_mask(row, col, self.class.size(), orientation)
    }

    /// Commit a placement previously validated by the board.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Mask, BoardError> {
        if self.is_placed() {
            return Err(BoardError::AlreadyPlaced);
        }
        let mask = self.placement_mask(row, col, orientation)?;
        self.orientation = orientation;
        self.origin = Some((row, col));
        self.mask = mask;
        self.hits = Mask::new();
        Ok(mask)
    }

    /// Take the ship off the board, keeping its orientation.
    pub fn remove(&mut self) -> Result<(), BoardError> {
        if !self.is_placed() {
            return Err(BoardError::NotPlaced);
        }
        self.origin = None;
        self.mask = Mask::new();
        self.hits = Mask::new();
        Ok(())
    }

    /// Record a hit on (row, col). Returns `true` when this hit sank the
    /// ship. The cell must belong to the ship.
    pub fn register_hit(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::CellNotOnShip);
        }
        self.hits.set(row, col)?;
        Ok(self.is_sunk())
    }

    /// Reset to the pristine setup-phase state.
    pub fn reset(&mut self) {
        self.orientation = Orientation::Horizontal;
        self.origin = None;
        self.mask = Mask::new();
        self.hits = Mask::new();
    }

    /// Summary view for UI listings and snapshots.
    pub fn status(&self) -> ShipStatus {
        ShipStatus {
            id: self.id,
            name: self.name(),
            size: self.size(),
            orientation: self.orientation,
            placed: self.is_placed(),
            hits: self.hits(),
            sunk: self.is_sunk(),
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, name: \"{}\", origin: {:?}, orientation: {:?}, hits: {}/{} }}",
            self.id.index(),
            self.name(),
            self.origin,
            self.orientation,
            self.hits(),
            self.size(),
        )
    }
}

/// Occupancy mask of `len` consecutive cells from (row, col) along
/// `orientation`. Fails when the span leaves the board; no wraparound.
pub fn span_mask(
    row: usize,
    col: usize,
    len: usize,
    orientation: Orientation,
) -> Result<Mask, BoardError> {
    match orientation {
        Orientation::Horizontal if col + len > BOARD_SIZE => {
            return Err(BoardError::OutOfBounds)
        }
        Orientation::Vertical if row + len > BOARD_SIZE => {
            return Err(BoardError::OutOfBounds)
        }
        _ => {}
    }
    let mut mask = Mask::new();
    for i in 0..len {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        };
        mask.set(r, c)?;
    }
    Ok(mask)
}

/// Per-ship summary for UI listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipStatus {
    pub id: ShipId,
    pub name: &'static str,
    pub size: usize,
    pub orientation: Orientation,
    pub placed: bool,
    pub hits: usize,
    pub sunk: bool,
}

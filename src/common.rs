//! Shared result and error types for board and turn-engine operations.

use crate::bitgrid::GridError;
use crate::ship::ShipId;
use core::fmt;

/// Opponent difficulty, fixed for the length of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot hit open water.
    Miss,
    /// The shot hit a ship segment without sinking it.
    Hit(ShipId),
    /// The shot sank the ship, final segment hit.
    Sunk(ShipId),
}

/// Errors returned by board and fleet operations.
///
/// Every error leaves the board untouched; rejections are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error (index out of range).
    Grid(GridError),
    /// Ship id does not exist in the fleet.
    UnknownShip,
    /// Placement runs off the board.
    OutOfBounds,
    /// Placement overlaps another ship's cells.
    Overlap,
    /// Ship is already on the board.
    AlreadyPlaced,
    /// Operation needs the ship on the board but it is not placed.
    NotPlaced,
    /// The cell does not belong to the ship.
    CellNotOnShip,
    /// Rotation is only allowed while the ship is off the board.
    RotateWhilePlaced,
    /// The targeted cell has already been resolved to hit or miss.
    AlreadyResolved,
    /// Random placement could not find a free spot within the retry budget.
    PlacementExhausted,
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "grid error: {}", e),
            BoardError::UnknownShip => write!(f, "no such ship in the fleet"),
            BoardError::OutOfBounds => write!(f, "placement is out of bounds"),
            BoardError::Overlap => write!(f, "placement overlaps another ship"),
            BoardError::AlreadyPlaced => write!(f, "ship is already placed"),
            BoardError::NotPlaced => write!(f, "ship is not placed"),
            BoardError::CellNotOnShip => {
                write!(f, "cell does not belong to the ship")
            }
            BoardError::RotateWhilePlaced => {
                write!(f, "ship must be removed before rotating")
            }
            BoardError::AlreadyResolved => {
                write!(f, "cell was already fired upon")
            }
            BoardError::PlacementExhausted => {
                write!(f, "unable to find a free spot for the ship")
            }
        }
    }
}

/// Errors returned by the turn engine.
///
/// All of these are silent rejections from the game's point of view: state,
/// score, and turn are left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Command is not accepted in the current game phase.
    WrongPhase,
    /// It is not the calling side's turn to fire.
    OutOfTurn,
    /// The targeted cell was already resolved; re-firing is a no-op.
    CellAlreadyResolved,
    /// `start_game` requires every ship of the fleet to be placed.
    FleetIncomplete,
    /// A board-level rejection.
    Board(BoardError),
}

impl From<BoardError> for CommandError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::AlreadyResolved => CommandError::CellAlreadyResolved,
            other => CommandError::Board(other),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::WrongPhase => {
                write!(f, "command not accepted in the current phase")
            }
            CommandError::OutOfTurn => write!(f, "not this side's turn"),
            CommandError::CellAlreadyResolved => {
                write!(f, "cell was already fired upon")
            }
            CommandError::FleetIncomplete => {
                write!(f, "all ships must be placed before starting")
            }
            CommandError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

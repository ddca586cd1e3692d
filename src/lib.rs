#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitgrid;
mod board;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod score;
mod ship;

pub use ai::select_target;
pub use bitgrid::{BitGrid, GridError};
pub use board::{Board, Cell, RevealState, RevealView};
pub use common::{BoardError, CommandError, Difficulty, ShotOutcome};
pub use config::{
    BOARD_SIZE, FLEET_CLASSES, NUM_SHIPS, SINK_POINTS_PER_CELL, TOTAL_SHIP_CELLS,
};
pub use fleet::Fleet;
pub use game::{Game, GamePhase, Outcome, ShotReport, Side, SoundCue};
#[cfg(feature = "std")]
pub use game::{GameSnapshot, ShipSnapshot};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use score::{
    difficulty_multiplier, resolve_bonus, sink_points, win_bonus, HighScore, HighScores,
    MatchReport, MAX_HIGH_SCORES,
};
#[cfg(feature = "std")]
pub use score::{report_match, ScoreService, StaticScoreService};
pub use ship::{span_mask, Mask, Orientation, Ship, ShipClass, ShipId, ShipStatus};

//! Turn engine: the state machine that owns both boards, resolves shots,
//! keeps the match context, and detects the end of the game.

use crate::ai;
use crate::board::Board;
#[cfg(feature = "std")]
use crate::board::Cell;
use crate::common::{CommandError, Difficulty, ShotOutcome};
#[cfg(feature = "std")]
use crate::config::BOARD_SIZE;
use crate::score::{sink_points, HighScore, MatchReport};
use crate::ship::{Orientation, ShipId, ShipStatus};
use alloc::format;
use alloc::string::String;
#[cfg(feature = "std")]
use alloc::vec::Vec;
use log::debug;
use rand::Rng;

/// Phase of the match. Governs which commands are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Setup,
    Playing,
    GameOver,
}

/// The two sides of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Final result from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Lose,
}

/// Discrete cue for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Hit,
    Miss,
    Sunk,
    Win,
    Lose,
}

/// Everything a caller needs to know about one resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub side: Side,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    /// Name of the ship sunk by this shot, if any.
    pub sunk_ship: Option<&'static str>,
    /// Set when this shot ended the match.
    pub game_outcome: Option<Outcome>,
}

impl ShotReport {
    /// The single cue to play for this shot. A match-ending shot reports
    /// the win/lose cue; a sink takes precedence over a plain hit.
    pub fn sound_cue(&self) -> SoundCue {
        match (self.game_outcome, self.outcome) {
            (Some(Outcome::Win), _) => SoundCue::Win,
            (Some(Outcome::Lose), _) => SoundCue::Lose,
            (None, ShotOutcome::Sunk(_)) => SoundCue::Sunk,
            (None, ShotOutcome::Hit(_)) => SoundCue::Hit,
            (None, ShotOutcome::Miss) => SoundCue::Miss,
        }
    }
}

/// The game engine. Owns both boards and the match context; the
/// presentation layer only issues commands and reads state back.
pub struct Game {
    phase: GamePhase,
    difficulty: Difficulty,
    player_board: Board,
    computer_board: Board,
    turn: Side,
    moves_used: u32,
    score: u32,
    outcome: Option<Outcome>,
    message: String,
}

impl Game {
    /// Fresh match in the setup phase.
    pub fn new(difficulty: Difficulty) -> Self {
        Game {
            phase: GamePhase::Setup,
            difficulty,
            player_board: Board::new(),
            computer_board: Board::new(),
            turn: Side::Player,
            moves_used: 0,
            score: 0,
            outcome: None,
            message: String::from("Place your ships on the grid."),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_used(&self) -> u32 {
        self.moves_used
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Latest user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's board. Full information lives in the engine; the
    /// presentation layer shows [`Board::revealed_grid`] of this.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Player fleet summaries for the ship dock.
    pub fn player_ships(&self) -> [ShipStatus; crate::config::NUM_SHIPS] {
        self.player_board.fleet().statuses()
    }

    fn require_setup(&self) -> Result<(), CommandError> {
        if self.phase == GamePhase::Setup {
            Ok(())
        } else {
            Err(CommandError::WrongPhase)
        }
    }

    /// Place a player ship. Setup phase only.
    pub fn place_ship(
        &mut self,
        id: ShipId,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), CommandError> {
        self.require_setup()?;
        self.player_board.place_ship(id, row, col, orientation)?;
        Ok(())
    }

    /// Remove a player ship from the board. Setup phase only.
    pub fn remove_ship(&mut self, id: ShipId) -> Result<(), CommandError> {
        self.require_setup()?;
        self.player_board.remove_ship(id)?;
        Ok(())
    }

    /// Toggle a player ship's orientation. Setup phase only, and the ship
    /// must not be on the board.
    pub fn rotate_ship(&mut self, id: ShipId) -> Result<(), CommandError> {
        self.require_setup()?;
        self.player_board.rotate_ship(id)?;
        Ok(())
    }

    /// Re-place the whole player fleet at random. Setup phase only.
    pub fn randomize_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), CommandError> {
        self.require_setup()?;
        self.player_board.randomize(rng)?;
        Ok(())
    }

    /// Change difficulty. Setup phase only.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), CommandError> {
        self.require_setup()?;
        self.difficulty = difficulty;
        Ok(())
    }

    /// Start the match: requires the full player fleet on the board,
    /// auto-places the computer fleet, and hands the first turn to the
    /// player.
    pub fn start_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), CommandError> {
        self.require_setup()?;
        if !self.player_board.fleet().all_placed() {
            self.message =
                String::from("You must place all ships before starting the game!");
            return Err(CommandError::FleetIncomplete);
        }
        self.computer_board.randomize(rng)?;
        self.phase = GamePhase::Playing;
        self.turn = Side::Player;
        self.moves_used = 0;
        self.message =
            String::from("Game started! Click on the opponent's grid to fire.");
        debug!("match started at {:?} difficulty", self.difficulty);
        Ok(())
    }

    /// Resolve a shot by `side` at (row, col) on the opposing board.
    ///
    /// Rejected with no state change and no turn switch when the game is
    /// not in progress, it is not `side`'s turn, or the cell was already
    /// resolved. An accepted shot is atomic: reveal state, fleet, score,
    /// win detection, and the turn flag all update before this returns.
    pub fn fire_at(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
    ) -> Result<ShotReport, CommandError> {
        if self.phase != GamePhase::Playing {
            return Err(CommandError::WrongPhase);
        }
        if side != self.turn {
            return Err(CommandError::OutOfTurn);
        }
        let target = match side {
            Side::Player => &mut self.computer_board,
            Side::Computer => &mut self.player_board,
        };
        let outcome = target.fire(row, col)?;
        if side == Side::Player {
            self.moves_used += 1;
        }

        let sunk_ship = match outcome {
            ShotOutcome::Sunk(id) => {
                let name = target.fleet().ship(id)?.name();
                if side == Side::Player {
                    let size = target.fleet().ship(id)?.size();
                    self.score += sink_points(size, self.difficulty);
                }
                Some(name)
            }
            _ => None,
        };

        let fleet_down = target.all_sunk();
        debug!(
            "{:?} fired at ({}, {}): {:?}{}",
            side,
            row,
            col,
            outcome,
            if fleet_down { ", fleet down" } else { "" }
        );

        let game_outcome = if fleet_down {
            let result = match side {
                Side::Player => Outcome::Win,
                Side::Computer => Outcome::Lose,
            };
            self.phase = GamePhase::GameOver;
            self.outcome = Some(result);
            self.message = String::from(match result {
                Outcome::Win => "Congratulations! You won the game!",
                Outcome::Lose => "Game over! The enemy sunk all your ships.",
            });
            Some(result)
        } else {
            self.message = self.shot_message(side, outcome, sunk_ship);
            self.turn = side.opponent();
            None
        };

        Ok(ShotReport {
            side,
            row,
            col,
            outcome,
            sunk_ship,
            game_outcome,
        })
    }

    fn shot_message(
        &self,
        side: Side,
        outcome: ShotOutcome,
        sunk_ship: Option<&'static str>,
    ) -> String {
        match (side, outcome) {
            (Side::Player, ShotOutcome::Sunk(_)) => {
                format!("You sunk the enemy's {}!", sunk_ship.unwrap_or("ship"))
            }
            (Side::Player, ShotOutcome::Hit(_)) => String::from("Hit!"),
            (Side::Player, ShotOutcome::Miss) => {
                String::from("Miss! Computer's turn.")
            }
            (Side::Computer, ShotOutcome::Sunk(_)) => {
                format!("The enemy sunk your {}!", sunk_ship.unwrap_or("ship"))
            }
            (Side::Computer, ShotOutcome::Hit(_)) => {
                String::from("Your ship was hit! Your turn.")
            }
            (Side::Computer, ShotOutcome::Miss) => {
                String::from("The enemy missed! Your turn.")
            }
        }
    }

    /// Run the computer's turn: pick a target from the player's revealed
    /// view under the current difficulty, then resolve it through the same
    /// path as a player shot.
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ShotReport, CommandError> {
        if self.phase != GamePhase::Playing {
            return Err(CommandError::WrongPhase);
        }
        if self.turn != Side::Computer {
            return Err(CommandError::OutOfTurn);
        }
        let view = self.player_board.reveal_view();
        let (row, col) = ai::select_target(rng, &view, self.difficulty);
        self.fire_at(Side::Computer, row, col)
    }

    /// Full reset back to setup: fresh boards and fleet, zeroed match
    /// context. Difficulty selection is kept.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Setup;
        self.player_board = Board::new();
        self.computer_board = Board::new();
        self.turn = Side::Player;
        self.moves_used = 0;
        self.score = 0;
        self.outcome = None;
        self.message = String::from("Place your ships on the grid.");
    }

    /// Report for the score service; available once the match is over.
    pub fn match_report(&self) -> Option<MatchReport> {
        self.outcome.map(|outcome| MatchReport {
            difficulty: self.difficulty,
            won: outcome == Outcome::Win,
            moves_used: self.moves_used,
        })
    }

    /// High-score entry for the persistence collaborator; available once
    /// the match is over.
    pub fn high_score_entry(&self) -> Option<HighScore> {
        self.outcome.map(|_| HighScore {
            difficulty: self.difficulty,
            score: self.score,
        })
    }

    /// Serializable snapshot for the presentation layer. The computer grid
    /// is the revealed projection: ship ids stay hidden until hit.
    #[cfg(feature = "std")]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            turn: self.turn,
            moves_used: self.moves_used,
            score: self.score,
            outcome: self.outcome,
            message: self.message.clone(),
            ships: self
                .player_ships()
                .iter()
                .map(|s| ShipSnapshot {
                    id: s.id,
                    name: String::from(s.name),
                    size: s.size,
                    orientation: s.orientation,
                    placed: s.placed,
                    hits: s.hits,
                    sunk: s.sunk,
                })
                .collect(),
            player_grid: self.player_board.owner_grid(),
            computer_grid: self.computer_board.revealed_grid(),
        }
    }
}

/// Serializable ship summary inside a snapshot.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShipSnapshot {
    pub id: ShipId,
    pub name: String,
    pub size: usize,
    pub orientation: Orientation,
    pub placed: bool,
    pub hits: usize,
    pub sunk: bool,
}

/// Point-in-time state of the whole match for the presentation layer.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub turn: Side,
    pub moves_used: u32,
    pub score: u32,
    pub outcome: Option<Outcome>,
    pub message: String,
    pub ships: Vec<ShipSnapshot>,
    pub player_grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub computer_grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

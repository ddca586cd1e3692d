//! Computer opponent targeting.
//!
//! Policies operate on a [`RevealView`] only, never on occupancy, so the
//! opponent plays under the same fog of war as a human. Randomness comes
//! from an injected `Rng`, which makes every policy replayable from a seed.

use crate::board::RevealView;
use crate::common::Difficulty;
use crate::config::BOARD_SIZE;
use alloc::vec::Vec;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Orthogonal directions probed around a hit.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Choose the next target for the given difficulty.
///
/// - `Easy`: uniform over unfired cells.
/// - `Medium`: with probability 0.7, hunt adjacent to an unresolved hit when
///   one exists; otherwise uniform.
/// - `Hard`: always hunts when an unresolved hit exists; otherwise splits
///   50/50 between the even-parity checkerboard (the minimal cover for a
///   2-cell ship) and uniform.
///
/// Every path falls back to the uniform pick, which cannot come up empty
/// while the game is still in progress.
pub fn select_target<R: Rng + ?Sized>(
    rng: &mut R,
    view: &RevealView,
    difficulty: Difficulty,
) -> (usize, usize) {
    let has_unresolved = !view.unresolved_hits().is_empty();
    match difficulty {
        Difficulty::Easy => uniform_target(rng, view),
        Difficulty::Medium => {
            if has_unresolved && rng.random_bool(0.7) {
                hunt_target(rng, view).unwrap_or_else(|| uniform_target(rng, view))
            } else {
                uniform_target(rng, view)
            }
        }
        Difficulty::Hard => {
            if has_unresolved {
                hunt_target(rng, view).unwrap_or_else(|| uniform_target(rng, view))
            } else if rng.random_bool(0.5) {
                parity_target(rng, view).unwrap_or_else(|| uniform_target(rng, view))
            } else {
                uniform_target(rng, view)
            }
        }
    }
}

/// Uniform pick over all unfired cells.
fn uniform_target<R: Rng + ?Sized>(rng: &mut R, view: &RevealView) -> (usize, usize) {
    // The game transitions to gameover strictly before the board is
    // exhausted, so while play continues this set is non-empty.
    view.empty_cells().choose(rng).copied().unwrap_or((0, 0))
}

/// Pick one unresolved hit at random, then the first unfired in-bounds
/// orthogonal neighbor in shuffled direction order. `None` when the chosen
/// hit has no such neighbor.
fn hunt_target<R: Rng + ?Sized>(rng: &mut R, view: &RevealView) -> Option<(usize, usize)> {
    let hits = view.unresolved_hits();
    let &(row, col) = hits.choose(rng)?;
    let mut directions = DIRECTIONS;
    directions.shuffle(rng);
    for (dr, dc) in directions {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || r >= BOARD_SIZE as isize || c < 0 || c >= BOARD_SIZE as isize {
            continue;
        }
        let (r, c) = (r as usize, c as usize);
        if view.is_empty(r, c) {
            return Some((r, c));
        }
    }
    None
}

/// Uniform pick over unfired cells of the even checkerboard parity.
fn parity_target<R: Rng + ?Sized>(rng: &mut R, view: &RevealView) -> Option<(usize, usize)> {
    let candidates: Vec<(usize, usize)> = view
        .empty_cells()
        .into_iter()
        .filter(|&(r, c)| (r + c) % 2 == 0)
        .collect();
    candidates.choose(rng).copied()
}

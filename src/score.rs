//! Scoring: sink points, the win-bonus fallback table, high-score merging,
//! and the optional remote score-service seam.

use crate::common::Difficulty;
use crate::config::SINK_POINTS_PER_CELL;
use alloc::vec::Vec;

/// High-score entries kept after a merge.
pub const MAX_HIGH_SCORES: usize = 10;

/// Score multiplier by difficulty.
pub fn difficulty_multiplier(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium => 2,
        Difficulty::Hard => 3,
    }
}

/// Points awarded for sinking a ship of the given size.
pub fn sink_points(size: usize, difficulty: Difficulty) -> u32 {
    size as u32 * SINK_POINTS_PER_CELL * difficulty_multiplier(difficulty)
}

/// Fixed end-of-game bonus by difficulty; zero for a loss. This is the
/// fallback when no remote score service answers, and is separate from the
/// running score.
pub fn win_bonus(difficulty: Difficulty, won: bool) -> u32 {
    if !won {
        return 0;
    }
    match difficulty {
        Difficulty::Easy => 100,
        Difficulty::Medium => 150,
        Difficulty::Hard => 200,
    }
}

/// Bonus shown to the player: a server-provided value takes precedence,
/// the fixed table is only the fallback.
pub fn resolve_bonus(server_points: Option<u32>, difficulty: Difficulty, won: bool) -> u32 {
    server_points.unwrap_or_else(|| win_bonus(difficulty, won))
}

/// What gets handed to the score service when a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub difficulty: Difficulty,
    pub won: bool,
    pub moves_used: u32,
}

/// One finished match in the local top-10 list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HighScore {
    pub difficulty: Difficulty,
    pub score: u32,
}

/// Local high-score list, sorted by score descending and capped at ten.
/// The engine only computes the merge; storage belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<HighScore>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from previously stored entries.
    pub fn from_entries(mut entries: Vec<HighScore>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_HIGH_SCORES);
        HighScores { entries }
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    /// Merge one finished match into the list.
    pub fn merge(&mut self, entry: HighScore) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}

/// Remote scoring collaborator. Reporting is fire-and-forget from the
/// engine's point of view: the returned points only affect the displayed
/// bonus, never game state.
#[cfg(feature = "std")]
#[async_trait::async_trait]
pub trait ScoreService {
    /// Report a finished match and receive the points earned.
    async fn report(&self, report: &MatchReport) -> anyhow::Result<u32>;
}

/// Score service that always answers with a fixed value. Useful for tests
/// and offline play.
#[cfg(feature = "std")]
pub struct StaticScoreService {
    pub points: u32,
}

#[cfg(feature = "std")]
#[async_trait::async_trait]
impl ScoreService for StaticScoreService {
    async fn report(&self, _report: &MatchReport) -> anyhow::Result<u32> {
        Ok(self.points)
    }
}

/// Report a match, falling back to the fixed bonus table when the service
/// fails. Failures are logged and never propagate.
#[cfg(feature = "std")]
pub async fn report_match<S: ScoreService + ?Sized>(service: &S, report: &MatchReport) -> u32 {
    match service.report(report).await {
        Ok(points) => resolve_bonus(Some(points), report.difficulty, report.won),
        Err(err) => {
            log::warn!("score service unavailable, using fallback bonus: {}", err);
            win_bonus(report.difficulty, report.won)
        }
    }
}

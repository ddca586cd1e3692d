//! Headless match simulator: auto-places both fleets, plays the player side
//! with the same targeting policy as the computer, and prints a JSON summary.

use clap::{Parser, ValueEnum};
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    init_logging, report_match, resolve_bonus, select_target, Difficulty, Game, HighScores, Side,
    StaticScoreService,
};
use serde_json::json;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(about = "Play one scripted Battleship match and print the result")]
struct Args {
    /// RNG seed; the same seed replays the same match.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Computer opponent difficulty.
    #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
    difficulty: DifficultyArg,

    /// Pretend the remote score service answered with this many points.
    #[arg(long)]
    server_points: Option<u32>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut game = Game::new(difficulty);
    game.randomize_fleet(&mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;
    game.start_game(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    loop {
        let view = game.computer_board().reveal_view();
        let (row, col) = select_target(&mut rng, &view, difficulty);
        let report = game
            .fire_at(Side::Player, row, col)
            .map_err(|e| anyhow::anyhow!(e))?;
        if report.game_outcome.is_some() {
            break;
        }
        let report = game.computer_turn(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        if report.game_outcome.is_some() {
            break;
        }
    }

    let match_report = game
        .match_report()
        .ok_or_else(|| anyhow::anyhow!("match ended without a report"))?;
    let bonus = match args.server_points {
        Some(points) => report_match(&StaticScoreService { points }, &match_report).await,
        None => resolve_bonus(None, match_report.difficulty, match_report.won),
    };

    let mut high_scores = HighScores::new();
    if let Some(entry) = game.high_score_entry() {
        high_scores.merge(entry);
    }

    let summary = json!({
        "outcome": format!("{:?}", game.outcome()),
        "difficulty": match_report.difficulty,
        "moves_used": match_report.moves_used,
        "score": game.score(),
        "bonus": bonus,
        "high_scores": high_scores
            .entries()
            .iter()
            .map(|entry| json!({
                "difficulty": entry.difficulty,
                "score": entry.score,
            }))
            .collect::<Vec<_>>(),
        "message": game.message(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

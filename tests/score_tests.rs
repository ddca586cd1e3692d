use seabattle::{
    difficulty_multiplier, report_match, resolve_bonus, sink_points, win_bonus, Difficulty,
    HighScore, HighScores, MatchReport, ScoreService, StaticScoreService, MAX_HIGH_SCORES,
};

#[test]
fn multiplier_table() {
    assert_eq!(difficulty_multiplier(Difficulty::Easy), 1);
    assert_eq!(difficulty_multiplier(Difficulty::Medium), 2);
    assert_eq!(difficulty_multiplier(Difficulty::Hard), 3);
}

#[test]
fn sink_points_scale_with_size_and_difficulty() {
    assert_eq!(sink_points(5, Difficulty::Medium), 100);
    assert_eq!(sink_points(2, Difficulty::Easy), 20);
    assert_eq!(sink_points(4, Difficulty::Hard), 120);
}

#[test]
fn win_bonus_table_and_loss() {
    assert_eq!(win_bonus(Difficulty::Easy, true), 100);
    assert_eq!(win_bonus(Difficulty::Medium, true), 150);
    assert_eq!(win_bonus(Difficulty::Hard, true), 200);
    assert_eq!(win_bonus(Difficulty::Hard, false), 0);
}

#[test]
fn server_points_take_precedence_over_the_table() {
    assert_eq!(resolve_bonus(Some(37), Difficulty::Hard, true), 37);
    // an explicit zero from the server is still the server's answer
    assert_eq!(resolve_bonus(Some(0), Difficulty::Easy, true), 0);
    assert_eq!(resolve_bonus(None, Difficulty::Medium, true), 150);
    assert_eq!(resolve_bonus(None, Difficulty::Medium, false), 0);
}

#[test]
fn high_scores_sorted_and_capped() {
    let mut scores = HighScores::new();
    for i in 0..15u32 {
        scores.merge(HighScore {
            difficulty: Difficulty::Medium,
            score: i * 10,
        });
    }
    assert_eq!(scores.entries().len(), MAX_HIGH_SCORES);
    assert_eq!(scores.entries()[0].score, 140);
    assert_eq!(scores.entries()[MAX_HIGH_SCORES - 1].score, 50);
    for pair in scores.entries().windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn high_scores_rebuild_from_storage() {
    let stored = vec![
        HighScore { difficulty: Difficulty::Easy, score: 30 },
        HighScore { difficulty: Difficulty::Hard, score: 510 },
        HighScore { difficulty: Difficulty::Medium, score: 100 },
    ];
    let scores = HighScores::from_entries(stored);
    assert_eq!(scores.entries()[0].score, 510);
    assert_eq!(scores.entries()[2].score, 30);
}

struct DownService;

#[async_trait::async_trait]
impl ScoreService for DownService {
    async fn report(&self, _report: &MatchReport) -> anyhow::Result<u32> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

#[tokio::test]
async fn report_match_uses_the_service_answer() {
    let report = MatchReport {
        difficulty: Difficulty::Hard,
        won: true,
        moves_used: 42,
    };
    let points = report_match(&StaticScoreService { points: 777 }, &report).await;
    assert_eq!(points, 777);
}

#[tokio::test]
async fn report_match_falls_back_when_the_service_fails() {
    let won = MatchReport {
        difficulty: Difficulty::Medium,
        won: true,
        moves_used: 60,
    };
    assert_eq!(report_match(&DownService, &won).await, 150);

    let lost = MatchReport {
        difficulty: Difficulty::Medium,
        won: false,
        moves_used: 60,
    };
    assert_eq!(report_match(&DownService, &lost).await, 0);
}

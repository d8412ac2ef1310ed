//! Neon Tower entry point
//!
//! Native: runs autoplay attempts headlessly and records them on the
//! leaderboard. Usage: `neon-tower [attempts] [seed] [skill]`.
//! Web: the game is driven from JavaScript through `neon_tower::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_tower::autoplay::{Autoplayer, run_attempt};
    use neon_tower::geometry::PlayField;
    use neon_tower::sim::{Command, GameState, step};
    use neon_tower::{HighScores, Settings, platform};

    /// Frame budget per attempt (10 minutes at 60 Hz)
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    platform::init_logging();

    let mut args = std::env::args().skip(1);
    let attempts: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| platform::now_ms() as u64);
    let skill: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0.6);

    let settings = Settings::load();
    let mut high_scores = HighScores::load();

    // Same field as a 400x800 phone screen
    let field = PlayField::from_screen(400.0, 800.0);
    let mut state = GameState::new(field.center_x(), settings.rules)
        .with_best(high_scores.top_score().unwrap_or(0));
    let mut bot = Autoplayer::new(seed, skill);

    log::info!(
        "Autoplay: {} attempts, seed {}, skill {:.2}, rules {:?}",
        attempts,
        seed,
        skill,
        settings.rules
    );

    for i in 0..attempts {
        if i > 0 {
            step(&mut state, Command::Restart);
        }
        let summary = run_attempt(&mut state, &field, &mut bot, MAX_FRAMES);

        let outcome = match summary.cause {
            Some(cause) => format!("{:?}", cause),
            None => "time limit".to_string(),
        };
        println!(
            "attempt {:>3}: score {:>4}  height {:>4}  best {:>4}  ({})",
            state.attempt, summary.score, summary.height, summary.best, outcome
        );

        if let Some(rank) =
            high_scores.add_score(summary.score, summary.height as u32, platform::now_ms())
        {
            log::info!("Score {} placed #{} on the leaderboard", summary.score, rank);
        }
    }

    high_scores.save();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

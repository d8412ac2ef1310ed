//! Property tests for the placement engine

use neon_tower::sim::{
    Landing, MISS_THRESHOLD, ScoreState, Tower, attempt_landing, compute_tilt, update_score,
};
use proptest::prelude::*;

/// Tower built from a base and a list of in-range offsets
fn tower_from(base_x: f32, offsets: &[f32]) -> Tower {
    let mut tower = Tower::new(base_x);
    for &dx in offsets {
        tower = tower.with_block(tower.top().x + dx);
    }
    tower
}

proptest! {
    #[test]
    fn drops_within_threshold_land_exactly(
        base_x in 0.0f32..400.0,
        offsets in prop::collection::vec(-40.0f32..40.0, 0..20),
        dx in -MISS_THRESHOLD..=MISS_THRESHOLD,
    ) {
        let tower = tower_from(base_x, &offsets);
        let before = tower.clone();
        let top_x = tower.top().x;
        let drop_x = top_x + dx;
        prop_assume!((drop_x - top_x).abs() <= MISS_THRESHOLD);

        let landing = attempt_landing(&tower, drop_x);
        let next = landing.tower().expect("within threshold must land");
        prop_assert_eq!(next.height(), tower.height() + 1);
        prop_assert_eq!(next.top().level as usize, tower.height());
        prop_assert_eq!(next.top().x, drop_x);
        prop_assert_eq!(&next.blocks()[..tower.height()], tower.blocks());
        prop_assert_eq!(tower, before);
    }

    #[test]
    fn drops_beyond_threshold_miss(
        base_x in 0.0f32..400.0,
        offsets in prop::collection::vec(-40.0f32..40.0, 0..20),
        distance in 0.01f32..10_000.0,
        left in any::<bool>(),
    ) {
        let tower = tower_from(base_x, &offsets);
        let top_x = tower.top().x;
        let dx = MISS_THRESHOLD + distance;
        let drop_x = if left { top_x - dx } else { top_x + dx };
        prop_assume!((drop_x - top_x).abs() > MISS_THRESHOLD);

        let landing = attempt_landing(&tower, drop_x);
        prop_assert!(landing.is_miss());
        prop_assert_eq!(tower.height(), offsets.len() + 1);
    }

    #[test]
    fn landing_is_repeatable(
        base_x in -500.0f32..500.0,
        drop_x in -1000.0f32..1000.0,
    ) {
        let tower = Tower::new(base_x);
        let first = attempt_landing(&tower, drop_x);
        let second = attempt_landing(&tower, drop_x);
        prop_assert_eq!(first, second);
        prop_assert_eq!(tower.height(), 1);
    }

    #[test]
    fn score_counts_and_best_never_drops(
        start_score in 0u32..1000,
        start_best in 0u32..1000,
        hits in 1usize..50,
    ) {
        let mut state = ScoreState { score: start_score, best: start_best };
        for _ in 0..hits {
            let next = update_score(state);
            prop_assert_eq!(next.score, state.score + 1);
            prop_assert_eq!(next.best, state.best.max(state.score + 1));
            prop_assert!(next.best >= state.best);
            state = next;
        }
    }

    #[test]
    fn tilt_stays_in_range(height in 0usize..10_000, dx in -1.0e6f32..1.0e6) {
        let tilt = compute_tilt(height, dx);
        prop_assert!((-1.0..=1.0).contains(&tilt));
    }

    #[test]
    fn centered_drops_never_lean(height in 0usize..10_000) {
        prop_assert_eq!(compute_tilt(height, 0.0), 0.0);
    }

    #[test]
    fn short_towers_never_lean(height in 0usize..=4, dx in -1.0e6f32..1.0e6) {
        prop_assert_eq!(compute_tilt(height, dx), 0.0);
    }

    #[test]
    fn hit_landing_reports_offset(base_x in 0.0f32..400.0, dx in -40.0f32..40.0) {
        let tower = Tower::new(base_x);
        match attempt_landing(&tower, base_x + dx) {
            Landing::Hit { dx: reported, tower: next } => {
                prop_assert_eq!(reported, next.top().x - base_x);
            }
            Landing::Miss { .. } => prop_assert!(false, "should land"),
        }
    }
}

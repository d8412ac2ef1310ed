//! Browser bindings
//!
//! JavaScript owns the animation loop: it calls `update(dt)` every frame,
//! `drop_block()` on tap and `fall_complete()` when its fall tween ends,
//! then reads block positions back for drawing.

use wasm_bindgen::prelude::*;

use crate::geometry::{PlayField, scroll_offset, tilt_degrees};
use crate::sim::{Command, GameEvent, GamePhase, GameState, step};
use crate::swing::SwingOscillator;
use crate::{HighScores, Settings, platform};

#[wasm_bindgen(start)]
pub fn start() {
    platform::init_logging();
    log::info!("Neon Tower starting");
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    field: PlayField,
    swing: SwingOscillator,
    settings: Settings,
    high_scores: HighScores,
}

#[wasm_bindgen]
impl WebGame {
    /// New game sized from the window
    #[wasm_bindgen(constructor)]
    pub fn new(screen_width: f32, screen_height: f32) -> WebGame {
        let field = PlayField::from_screen(screen_width, screen_height);
        let settings = Settings::load();
        let high_scores = HighScores::load();
        let state = GameState::new(field.center_x(), settings.rules)
            .with_best(high_scores.top_score().unwrap_or(0));

        Self {
            swing: SwingOscillator::for_field(&field),
            state,
            field,
            settings,
            high_scores,
        }
    }

    /// Advance the swing by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.state.accepts_drop() {
            self.swing.advance(dt);
        }
    }

    /// Commit a drop at the current swing position.
    /// Returns the frozen X, or NaN if a drop is not allowed right now.
    pub fn drop_block(&mut self) -> f32 {
        let x = self.swing.snapshot();
        let events = step(&mut self.state, Command::Drop { x });
        if events.is_empty() {
            return f32::NAN;
        }
        self.swing.stop();
        x
    }

    /// Resolve the landing once the fall animation is done.
    /// Returns true if the attempt just ended.
    pub fn fall_complete(&mut self) -> bool {
        let events = step(&mut self.state, Command::FallComplete);
        for event in &events {
            if let GameEvent::GameOver { score, height, .. } = *event {
                if self
                    .high_scores
                    .add_score(score, height, platform::now_ms())
                    .is_some()
                {
                    self.high_scores.save();
                }
                return true;
            }
        }
        if self.state.accepts_drop() {
            self.swing.restart();
        }
        false
    }

    pub fn toggle_pause(&mut self) {
        step(&mut self.state, Command::TogglePause);
    }

    pub fn restart(&mut self) {
        if !step(&mut self.state, Command::Restart).is_empty() {
            self.swing.restart();
        }
    }

    pub fn toggle_sound(&mut self) {
        self.settings.toggle_sound();
        self.settings.save();
    }

    pub fn cycle_day_night(&mut self) -> String {
        self.settings.cycle_day_night();
        self.settings.save();
        self.settings.day_night.as_str().to_string()
    }

    /// Switch to the next color theme, returning its id
    pub fn cycle_theme(&mut self) -> String {
        self.settings.cycle_theme();
        self.settings.save();
        self.settings.theme.id().to_string()
    }

    pub fn theme(&self) -> String {
        self.settings.theme.id().to_string()
    }

    pub fn is_night(&self) -> bool {
        self.settings.day_night.is_night()
    }

    pub fn sound_enabled(&self) -> bool {
        self.settings.sound_enabled
    }

    pub fn score(&self) -> u32 {
        self.state.score.score
    }

    pub fn best(&self) -> u32 {
        self.state.score.best
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.state.phase, GamePhase::Falling { .. })
    }

    /// Play-area rotation in degrees
    pub fn tilt_deg(&self) -> f32 {
        tilt_degrees(self.settings.effective_tilt(self.state.tilt))
    }

    /// Top-left X of the swinging block
    pub fn swing_x(&self) -> f32 {
        self.field.swing_origin(self.swing.position()).x
    }

    /// Y the falling block should stop at (top edge)
    pub fn landing_y(&self) -> f32 {
        let next_level = self.state.tower.height() as u32;
        self.field.block_top_y(next_level)
            + scroll_offset(self.state.tower.height())
    }

    pub fn block_count(&self) -> usize {
        self.state.tower.height()
    }

    /// Top-left X of block `i` (base = 0)
    pub fn block_x(&self, i: usize) -> f32 {
        self.block_origin(i).map(|o| o.x).unwrap_or(f32::NAN)
    }

    /// Top-left Y of block `i` (base = 0)
    pub fn block_y(&self, i: usize) -> f32 {
        self.block_origin(i).map(|o| o.y).unwrap_or(f32::NAN)
    }
}

impl WebGame {
    fn block_origin(&self, i: usize) -> Option<glam::Vec2> {
        let tower = &self.state.tower;
        tower
            .blocks()
            .get(i)
            .map(|b| self.field.block_origin(b, tower.height()))
    }
}

//! Game settings and preferences
//!
//! Persisted separately from high scores.

use serde::{Deserialize, Serialize};

use crate::persistence;
use crate::sim::GameRules;

/// Background mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DayNightMode {
    Day,
    #[default]
    Night,
    /// Follows the clock eventually; treated as night for now
    Auto,
}

impl DayNightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayNightMode::Day => "Day",
            DayNightMode::Night => "Night",
            DayNightMode::Auto => "Auto",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(DayNightMode::Day),
            "night" => Some(DayNightMode::Night),
            "auto" => Some(DayNightMode::Auto),
            _ => None,
        }
    }

    /// Day -> Night -> Auto -> Day
    pub fn cycle(&self) -> Self {
        match self {
            DayNightMode::Day => DayNightMode::Night,
            DayNightMode::Night => DayNightMode::Auto,
            DayNightMode::Auto => DayNightMode::Day,
        }
    }

    pub fn is_night(&self) -> bool {
        *self != DayNightMode::Day
    }
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    NeonBlue,
    NeonPink,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::NeonBlue => "Neon Blue",
            Theme::NeonPink => "Neon Pink",
        }
    }

    /// Stable id the presentation layer keys its palette on
    pub fn id(&self) -> &'static str {
        match self {
            Theme::NeonBlue => "neon-blue",
            Theme::NeonPink => "neon-pink",
        }
    }

    /// Accepts either the id or the display name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "neon-blue" | "neon blue" => Some(Theme::NeonBlue),
            "neon-pink" | "neon pink" => Some(Theme::NeonPink),
            _ => None,
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            Theme::NeonBlue => Theme::NeonPink,
            Theme::NeonPink => Theme::NeonBlue,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub sound_enabled: bool,
    pub day_night: DayNightMode,
    #[serde(default)]
    pub theme: Theme,
    /// Skip the tilt and topple animations
    #[serde(default)]
    pub reduced_motion: bool,
    /// Scoring and tilt rules for new games
    #[serde(default)]
    pub rules: GameRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            day_night: DayNightMode::Night,
            theme: Theme::NeonBlue,
            reduced_motion: false,
            rules: GameRules::default(),
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "neon_tower_settings";

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    pub fn cycle_day_night(&mut self) {
        self.day_night = self.day_night.cycle();
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.cycle();
    }

    /// Tilt to show for a lean, respecting reduced motion
    pub fn effective_tilt(&self, tilt: f32) -> f32 {
        if self.reduced_motion { 0.0 } else { tilt }
    }

    /// Load saved settings, or defaults if none are stored
    pub fn load() -> Self {
        match persistence::load::<Settings>(Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> bool {
        let saved = persistence::save(Self::STORAGE_KEY, self);
        if saved {
            log::info!("Settings saved");
        }
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ScoreRule, TiltModel};

    #[test]
    fn test_day_night_cycle() {
        let mut mode = DayNightMode::Day;
        mode = mode.cycle();
        assert_eq!(mode, DayNightMode::Night);
        mode = mode.cycle();
        assert_eq!(mode, DayNightMode::Auto);
        assert!(mode.is_night());
        assert_eq!(mode.cycle(), DayNightMode::Day);
    }

    #[test]
    fn test_day_night_from_str() {
        assert_eq!(DayNightMode::from_str("DAY"), Some(DayNightMode::Day));
        assert_eq!(DayNightMode::from_str("auto"), Some(DayNightMode::Auto));
        assert_eq!(DayNightMode::from_str("dusk"), None);
        assert_eq!(
            DayNightMode::from_str(DayNightMode::Night.as_str()),
            Some(DayNightMode::Night)
        );
    }

    #[test]
    fn test_defaults_match_reference_rules() {
        let settings = Settings::default();
        assert_eq!(settings.rules.score_rule, ScoreRule::PerPlacement);
        assert_eq!(settings.rules.tilt.model, TiltModel::Instantaneous);
        assert!(!settings.rules.tilt.collapse_enabled);
    }

    #[test]
    fn test_older_documents_get_default_rules() {
        let json = r#"{"sound_enabled":false,"day_night":"Day"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(!settings.sound_enabled);
        assert_eq!(settings.rules, GameRules::default());
        assert!(!settings.reduced_motion);
        assert_eq!(settings.theme, Theme::NeonBlue);
    }

    #[test]
    fn test_theme_cycle_and_names() {
        let mut settings = Settings::default();
        assert_eq!(settings.theme.id(), "neon-blue");
        settings.cycle_theme();
        assert_eq!(settings.theme, Theme::NeonPink);
        assert_eq!(settings.theme.as_str(), "Neon Pink");
        settings.cycle_theme();
        assert_eq!(settings.theme, Theme::NeonBlue);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!(Theme::from_str("neon-pink"), Some(Theme::NeonPink));
        assert_eq!(Theme::from_str("Neon Blue"), Some(Theme::NeonBlue));
        assert_eq!(Theme::from_str("NEON-BLUE"), Some(Theme::NeonBlue));
        assert_eq!(Theme::from_str("sepia"), None);
        for theme in [Theme::NeonBlue, Theme::NeonPink] {
            assert_eq!(Theme::from_str(theme.id()), Some(theme));
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_theme_survives_save_format() {
        let settings = Settings {
            theme: Theme::NeonPink,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, Theme::NeonPink);
    }

    #[test]
    fn test_reduced_motion_flattens_tilt() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_tilt(0.4), 0.4);
        settings.reduced_motion = true;
        assert_eq!(settings.effective_tilt(0.4), 0.0);
    }
}

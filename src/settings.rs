//! Simulation settings
//!
//! Geometry, speeds and rewards. Persisted as JSON so training runs can pin
//! their parameters next to their results.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::error::{StorageError, read_json, write_json};

/// Settings that cannot produce a playable episode, or could not be loaded
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Invalid(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground strip; the ground line sits at `screen_height - ground_height`
    pub ground_height: f32,

    // === Avatar ===
    /// Fixed horizontal position of the avatar's left edge
    pub avatar_x: f32,
    pub avatar_width: f32,
    pub avatar_height: f32,
    /// Distance fallen per idle tick
    pub gravity_fall: f32,
    /// Jump distance as a multiple of `gravity_fall`
    pub jump_multiplier: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Leftward motion per tick
    pub obstacle_speed: f32,
    /// Horizontal distance between consecutive obstacles
    pub obstacle_spacing: f32,
    /// Height of the open gap
    pub gap_height: f32,
    /// Inclusive range the gap's top boundary is drawn from
    pub gap_top_min: u32,
    pub gap_top_max: u32,

    // === Rewards ===
    pub jump_reward: f32,
    pub passage_reward: f32,
    pub gap_reward: f32,
    /// Replaces every other reward on a terminating tick
    pub crash_penalty: f32,

    // === Presentation ===
    /// Renderer frame rate (wall-clock pacing only, never affects ticks)
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,

            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            gravity_fall: GRAVITY_FALL,
            jump_multiplier: JUMP_MULTIPLIER,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_spacing: OBSTACLE_SPACING,
            gap_height: GAP_HEIGHT,
            gap_top_min: GAP_TOP_MIN,
            gap_top_max: GAP_TOP_MAX,

            jump_reward: JUMP_REWARD,
            passage_reward: PASSAGE_REWARD,
            gap_reward: GAP_REWARD,
            crash_penalty: CRASH_PENALTY,

            target_fps: TARGET_FPS,
        }
    }
}

impl Settings {
    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Upward distance of one jump
    #[inline]
    pub fn jump_impulse(&self) -> f32 {
        self.gravity_fall * self.jump_multiplier
    }

    /// Avatar top edge at episode start (vertically centred)
    #[inline]
    pub fn start_y(&self) -> f32 {
        self.screen_height / 2.0 - self.avatar_height / 2.0
    }

    /// Bottom-gap height paired with a given top boundary
    #[inline]
    pub fn bottom_gap_for(&self, top_y: f32) -> f32 {
        self.ground_y() - top_y - self.gap_height
    }

    /// Check that the parameters describe a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("gravity_fall", self.gravity_fall),
            ("jump_multiplier", self.jump_multiplier),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_spacing", self.obstacle_spacing),
            ("gap_height", self.gap_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.ground_height >= 0.0 && self.ground_height < self.screen_height) {
            return Err(SettingsError::Invalid(format!(
                "ground_height {} must lie within the screen height {}",
                self.ground_height, self.screen_height
            )));
        }
        if self.gap_top_min > self.gap_top_max {
            return Err(SettingsError::Invalid(format!(
                "gap_top_min {} exceeds gap_top_max {}",
                self.gap_top_min, self.gap_top_max
            )));
        }
        if self.bottom_gap_for(self.gap_top_max as f32) < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "a gap of {} below top {} does not fit above the ground line {}",
                self.gap_height,
                self.gap_top_max,
                self.ground_y()
            )));
        }
        if self.start_y() + self.avatar_height >= self.ground_y() {
            return Err(SettingsError::Invalid(
                "avatar would start on or below the ground line".to_string(),
            ));
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid("target_fps must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let settings: Self = read_json(path)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings: {err}");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        write_json(path, self)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

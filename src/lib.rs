//! Flap Gate - a deterministic side-scrolling gate simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar motion, obstacle queue, scoring, collisions)
//! - `env`: Turn-based control interface (actions, step outcomes, `Environment` trait)
//! - `renderer`: Read-only projection of a state snapshot into vertices
//! - `policy`: Simple controllers that drive the environment
//! - `scoreboard`: Best-episode leaderboard for the demo runner
//! - `settings`: Tunable geometry, speeds and rewards

pub mod env;
pub mod error;
pub mod policy;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use env::{Action, Environment, StepInfo, StepOutcome};
pub use error::{SimError, StorageError};
pub use scoreboard::Scoreboard;
pub use settings::{Settings, SettingsError};
pub use sim::{Observation, ObservationSpace, Phase, Simulation};

/// Reference game constants (the defaults of [`Settings`])
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Avatar box and its fixed horizontal position
    pub const AVATAR_X: f32 = 50.0;
    pub const AVATAR_WIDTH: f32 = 40.0;
    pub const AVATAR_HEIGHT: f32 = 40.0;

    /// Per-tick fall distance when not jumping
    pub const GRAVITY_FALL: f32 = 3.0;
    /// Jump impulse as a multiple of the fall distance
    pub const JUMP_MULTIPLIER: f32 = 25.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_SPEED: f32 = 5.0;
    pub const OBSTACLE_SPACING: f32 = 300.0;
    pub const GAP_HEIGHT: f32 = 175.0;
    /// Lowest allowed top boundary of a gap
    pub const GAP_TOP_MIN: u32 = 100;
    /// Highest allowed top boundary of a gap (half the ground line)
    pub const GAP_TOP_MAX: u32 = 350;

    /// Rewards
    pub const JUMP_REWARD: f32 = 5.0;
    pub const PASSAGE_REWARD: f32 = 20.0;
    pub const GAP_REWARD: f32 = 20.0;
    pub const CRASH_PENALTY: f32 = -100.0;

    /// Renderer target frame rate
    pub const TARGET_FPS: u32 = 60;
}

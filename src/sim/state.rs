//! Simulation state and core types
//!
//! Everything that changes during an episode lives in [`Simulation`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::observation::{Observation, ObservationSpace};
use crate::settings::{Settings, SettingsError};

/// Episode lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, `reset` not yet called
    NotStarted,
    /// Accepting `step` calls
    Running,
    /// A terminal step happened; only `reset` is valid
    Terminated,
}

/// The player's box. Only `y` moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Avatar {
    pub fn new(settings: &Settings) -> Self {
        Self {
            x: settings.avatar_x,
            y: settings.start_y(),
            width: settings.avatar_width,
            height: settings.avatar_height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// One gated barrier: solid above `top_y`, solid in the `bottom_gap` band
/// above the ground line, open in between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Lower edge of the top solid band
    pub top_y: f32,
    /// Height of the bottom solid band
    pub bottom_gap: f32,
}

impl Obstacle {
    /// Build an obstacle whose bands leave exactly `gap_height` open.
    ///
    /// Panics if the geometry is impossible; callers only pass tops drawn
    /// from a validated range.
    pub fn new(x: f32, top_y: f32, settings: &Settings) -> Self {
        let bottom_gap = settings.bottom_gap_for(top_y);
        assert!(
            top_y >= 0.0 && bottom_gap >= 0.0,
            "obstacle top {top_y} leaves no room for a {} gap",
            settings.gap_height
        );
        let obstacle = Self {
            x,
            top_y,
            bottom_gap,
        };
        let ground_y = settings.ground_y();
        let span = obstacle.top_y + obstacle.bottom_gap + settings.gap_height;
        assert!(
            (span - ground_y).abs() <= ground_y.abs() * f32::EPSILON,
            "gap invariant violated: {span} != {ground_y}"
        );
        obstacle
    }

    /// Obstacle at `x` with a top boundary drawn from the configured range
    pub fn random<R: Rng>(x: f32, rng: &mut R, settings: &Settings) -> Self {
        let top_y = rng.random_range(settings.gap_top_min..=settings.gap_top_max) as f32;
        Self::new(x, top_y, settings)
    }

    /// Upper edge of the bottom solid band
    #[inline]
    pub fn gap_bottom(&self, ground_y: f32) -> f32 {
        ground_y - self.bottom_gap
    }

    /// Right edge
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Read-only copy of what a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub avatar: Avatar,
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub phase: Phase,
}

/// The simulation core
///
/// Owns all episode state and the obstacle generator. Drive it with
/// [`Simulation::reset`] and [`Simulation::step`].
#[derive(Debug, Clone)]
pub struct Simulation<R = Pcg32> {
    pub(crate) settings: Settings,
    pub(crate) rng: R,
    pub(crate) phase: Phase,
    pub(crate) avatar: Avatar,
    /// Active obstacles, nearest first
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) score: u64,
    pub(crate) ticks: u64,
}

impl Simulation<Pcg32> {
    /// Create a simulation with a PCG generator seeded from `seed`
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a simulation drawing obstacle geometry from `rng`
    pub fn with_rng(settings: Settings, rng: R) -> Result<Self, SettingsError> {
        settings.validate()?;
        let avatar = Avatar::new(&settings);
        Ok(Self {
            settings,
            rng,
            phase: Phase::NotStarted,
            avatar,
            obstacles: Vec::with_capacity(2),
            score: 0,
            ticks: 0,
        })
    }

    /// Start a new episode
    pub fn reset(&mut self) -> Observation {
        self.avatar = Avatar::new(&self.settings);
        self.obstacles.clear();
        self.score = 0;
        self.ticks = 0;
        self.phase = Phase::Running;
        log::debug!("Episode reset, avatar at y={}", self.avatar.y);
        self.observe()
    }

    /// Current observation vector
    pub fn observe(&self) -> Observation {
        Observation::encode(&self.avatar, &self.obstacles)
    }

    /// Declared observation bounds for these settings
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::for_settings(&self.settings)
    }

    /// Copy of the renderable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            avatar: self.avatar,
            obstacles: self.obstacles.clone(),
            score: self.score,
            phase: self.phase,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn avatar_y(&self) -> f32 {
        self.avatar.y
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

impl<R: Rng + SeedableRng> Simulation<R> {
    /// Reseed the obstacle generator, then start a new episode
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.rng = R::seed_from_u64(seed);
        self.reset()
    }
}

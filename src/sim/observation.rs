//! Observation encoding
//!
//! Layout: `[avatar_y, x0, top0, bottom0, x1, top1, bottom1]` where index 0
//! is the lead obstacle.

use serde::{Deserialize, Serialize};

use super::state::{Avatar, Obstacle};
use crate::settings::Settings;

/// Length of the observation vector
pub const OBSERVATION_LEN: usize = 7;

/// Placeholder obstacle values reported before the first step
const PLACEHOLDER_X: f32 = 0.0;
const PLACEHOLDER_TOP: f32 = 100.0;
const PLACEHOLDER_BOTTOM: f32 = 525.0;

/// Fixed-size numeric view of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f32; OBSERVATION_LEN]);

impl Observation {
    /// Project avatar and obstacles into the vector
    ///
    /// Slots for missing obstacles carry the placeholder geometry.
    pub fn encode(avatar: &Avatar, obstacles: &[Obstacle]) -> Self {
        let slot = |i: usize| {
            obstacles
                .get(i)
                .map(|o| [o.x, o.top_y, o.bottom_gap])
                .unwrap_or([PLACEHOLDER_X, PLACEHOLDER_TOP, PLACEHOLDER_BOTTOM])
        };
        let [x0, top0, bottom0] = slot(0);
        let [x1, top1, bottom1] = slot(1);
        Self([avatar.y, x0, top0, bottom0, x1, top1, bottom1])
    }

    pub fn avatar_y(&self) -> f32 {
        self.0[0]
    }

    /// `(x, top_y, bottom_gap)` of obstacle 0 or 1
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2`; only the two nearest obstacles are encoded.
    pub fn obstacle(&self, index: usize) -> (f32, f32, f32) {
        assert!(index < 2, "only two obstacles are observed");
        let base = 1 + index * 3;
        (self.0[base], self.0[base + 1], self.0[base + 2])
    }

    pub fn as_array(&self) -> &[f32; OBSERVATION_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }
}

/// Documented per-slot bounds of the observation vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub low: [f32; OBSERVATION_LEN],
    pub high: [f32; OBSERVATION_LEN],
}

impl ObservationSpace {
    pub fn for_settings(settings: &Settings) -> Self {
        let ground_y = settings.ground_y();
        let top_min = settings.gap_top_min as f32;
        let top_max = settings.gap_top_max as f32;
        let bottom_min = settings.bottom_gap_for(top_max);
        let bottom_max = settings.bottom_gap_for(top_min);
        let width = settings.screen_width;
        Self {
            low: [0.0, 0.0, top_min, bottom_min, 0.0, top_min, bottom_min],
            high: [ground_y, width, top_max, bottom_max, width, top_max, bottom_max],
        }
    }

    /// Whether every slot lies within its bounds
    pub fn contains(&self, observation: &Observation) -> bool {
        observation
            .0
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }
}

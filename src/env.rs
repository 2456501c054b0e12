//! Turn-based control interface
//!
//! Controllers and training harnesses only ever see the simulation through
//! [`Environment`]: `reset` to start an episode, then `step` until `done`.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::sim::{Crash, Observation, ObservationSpace};

/// The binary per-tick action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    /// Let gravity pull the avatar down
    #[default]
    Idle,
    /// Jump upward by the fixed impulse
    Flap,
}

impl Action {
    /// Number of discrete actions
    pub const COUNT: usize = 2;

    /// Raw action index (0 = idle, 1 = flap)
    pub fn index(self) -> u8 {
        match self {
            Action::Idle => 0,
            Action::Flap => 1,
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Idle),
            1 => Ok(Action::Flap),
            other => Err(SimError::InvalidAction(other)),
        }
    }
}

impl From<bool> for Action {
    fn from(flap: bool) -> Self {
        if flap { Action::Flap } else { Action::Idle }
    }
}

/// Auxiliary per-step data; not part of the observation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepInfo {
    /// Score after this step
    pub score: u64,
    /// Ticks elapsed in the episode, including this one
    pub ticks: u64,
    /// What ended the episode, if this step was terminal
    pub crash: Option<Crash>,
}

/// Result of a single `step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f32,
    pub done: bool,
    pub info: StepInfo,
}

/// A discrete-action episodic environment
pub trait Environment {
    /// Start a fresh episode and return its first observation
    fn reset(&mut self) -> Observation;

    /// Advance one tick
    fn step(&mut self, action: Action) -> Result<StepOutcome, SimError>;

    /// Declared bounds of the observation vector
    fn observation_space(&self) -> ObservationSpace;

    /// Number of discrete actions
    fn action_count(&self) -> usize {
        Action::COUNT
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only, no wall-clock time
//! - Seeded RNG only
//! - Obstacles kept nearest-first
//! - No rendering or platform dependencies

pub mod collision;
pub mod observation;
pub mod state;
pub mod tick;

pub use collision::{Crash, check_crash};
pub use observation::{OBSERVATION_LEN, Observation, ObservationSpace};
pub use state::{Avatar, Obstacle, Phase, Simulation, Snapshot};
pub use tick::ACTIVE_OBSTACLES;

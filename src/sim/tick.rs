//! Discrete simulation tick
//!
//! One `step` = move avatar, keep the obstacle queue at two, scroll, score,
//! collide, observe. Always runs to completion.

use rand::Rng;

use super::collision::{check_crash, is_in_gap, is_passing};
use super::state::{Obstacle, Phase, Simulation};
use crate::env::{Action, Environment, StepInfo, StepOutcome};
use crate::error::SimError;
use crate::settings::Settings;
use crate::sim::{Observation, ObservationSpace};

/// Number of obstacles kept in the queue while an episode runs
pub const ACTIVE_OBSTACLES: usize = 2;

impl<R: Rng> Simulation<R> {
    /// Advance the simulation by one tick
    ///
    /// Fails without touching state when no episode is running.
    pub fn step(&mut self, action: Action) -> Result<StepOutcome, SimError> {
        match self.phase {
            Phase::NotStarted => return Err(SimError::NotStarted),
            Phase::Terminated => return Err(SimError::EpisodeOver),
            Phase::Running => {}
        }

        self.ticks += 1;
        apply_motion(&mut self.avatar.y, action, &self.settings);

        let mut reward = match action {
            Action::Flap => self.settings.jump_reward,
            Action::Idle => 0.0,
        };

        self.fill_queue();
        for obstacle in &mut self.obstacles {
            obstacle.x -= self.settings.obstacle_speed;
        }
        self.evict_and_spawn();

        let ground_y = self.settings.ground_y();
        let lead = self.obstacles[0];
        if is_passing(&self.avatar, &lead) {
            self.score += 1;
            reward += self.settings.passage_reward;
            log::debug!("Passed obstacle at tick {}, score {}", self.ticks, self.score);
        }
        if is_in_gap(&self.avatar, &lead, ground_y) {
            reward += self.settings.gap_reward;
        }

        let crash = check_crash(&self.avatar, Some(&lead), &self.settings);
        if let Some(crash) = crash {
            reward = self.settings.crash_penalty;
            self.phase = Phase::Terminated;
            log::info!(
                "Episode over after {} ticks: {:?}, score {}",
                self.ticks,
                crash,
                self.score
            );
        }

        debug_assert_eq!(self.obstacles.len(), ACTIVE_OBSTACLES);
        debug_assert!(self.obstacles[0].x <= self.obstacles[1].x);

        Ok(StepOutcome {
            observation: self.observe(),
            reward,
            done: crash.is_some(),
            info: StepInfo {
                score: self.score,
                ticks: self.ticks,
                crash,
            },
        })
    }

    /// Create the opening pair on the first tick of an episode
    fn fill_queue(&mut self) {
        if self.obstacles.len() >= ACTIVE_OBSTACLES {
            return;
        }
        let first_x = self.settings.screen_width - self.settings.obstacle_width;
        self.obstacles.clear();
        for i in 0..ACTIVE_OBSTACLES {
            let x = first_x + i as f32 * self.settings.obstacle_spacing;
            self.obstacles
                .push(Obstacle::random(x, &mut self.rng, &self.settings));
        }
        log::debug!("Spawned opening obstacles: {:?}", self.obstacles);
    }

    /// Replace the lead obstacle once it has fully left the screen
    fn evict_and_spawn(&mut self) {
        let lead = self.obstacles[0];
        if lead.right(self.settings.obstacle_width) >= 0.0 {
            return;
        }
        self.obstacles.remove(0);
        let x = self.obstacles[0].x + self.settings.obstacle_spacing;
        let obstacle = Obstacle::random(x, &mut self.rng, &self.settings);
        log::trace!("Evicted obstacle at x={}, spawned {:?}", lead.x, obstacle);
        self.obstacles.push(obstacle);
    }
}

/// Position-delta motion: jump up by the impulse or fall by gravity
fn apply_motion(y: &mut f32, action: Action, settings: &Settings) {
    match action {
        Action::Flap => *y -= settings.jump_impulse(),
        Action::Idle => *y += settings.gravity_fall,
    }
}

impl<R: Rng> Environment for Simulation<R> {
    fn reset(&mut self) -> Observation {
        Simulation::reset(self)
    }

    fn step(&mut self, action: Action) -> Result<StepOutcome, SimError> {
        Simulation::step(self, action)
    }

    fn observation_space(&self) -> ObservationSpace {
        Simulation::observation_space(self)
    }
}

//! Controllers that pick an action from an observation
//!
//! Used by the demo runner; training harnesses bring their own.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::env::Action;
use crate::settings::Settings;
use crate::sim::Observation;

/// Chooses one action per tick
pub trait Policy {
    fn act(&mut self, observation: &Observation) -> Action;

    fn name(&self) -> &'static str;
}

/// Never flaps
#[derive(Debug, Clone, Copy, Default)]
pub struct IdlePolicy;

impl Policy for IdlePolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        Action::Idle
    }

    fn name(&self) -> &'static str {
        "idle"
    }
}

/// Flaps with a fixed probability, from its own seeded generator
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: Pcg32,
    flap_probability: f64,
}

impl RandomPolicy {
    pub fn new(seed: u64, flap_probability: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            flap_probability: flap_probability.clamp(0.0, 1.0),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        Action::from(self.rng.random_bool(self.flap_probability))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Hovers just above the lead obstacle's bottom band
///
/// Flaps whenever falling one more tick would bring the avatar within
/// `margin` of the bottom band, as long as the jump clears the top band.
#[derive(Debug, Clone)]
pub struct Autopilot {
    ground_y: f32,
    avatar_height: f32,
    gravity_fall: f32,
    jump_impulse: f32,
    margin: f32,
}

impl Autopilot {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ground_y: settings.ground_y(),
            avatar_height: settings.avatar_height,
            gravity_fall: settings.gravity_fall,
            jump_impulse: settings.jump_impulse(),
            margin: 2.0,
        }
    }
}

impl Policy for Autopilot {
    fn act(&mut self, observation: &Observation) -> Action {
        let y = observation.avatar_y();
        let (_, top_y, bottom_gap) = observation.obstacle(0);
        let gap_bottom = self.ground_y - bottom_gap;

        let bottom_after_fall = y + self.avatar_height + self.gravity_fall;
        let too_low = bottom_after_fall >= gap_bottom - self.margin;
        let jump_clears_top = y - self.jump_impulse > top_y;
        Action::from(too_low && jump_clears_top)
    }

    fn name(&self) -> &'static str {
        "autopilot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Simulation;

    fn run_episode(policy: &mut dyn Policy, seed: u64, max_ticks: u64) -> (u64, u64) {
        let mut sim = Simulation::new(Settings::default(), seed).unwrap();
        let mut obs = sim.reset();
        for _ in 0..max_ticks {
            let outcome = sim.step(policy.act(&obs)).unwrap();
            obs = outcome.observation;
            if outcome.done {
                break;
            }
        }
        (sim.score(), sim.ticks())
    }

    #[test]
    fn test_idle_never_scores() {
        let (score, ticks) = run_episode(&mut IdlePolicy, 1, 1000);
        assert_eq!(score, 0);
        assert!(ticks <= 94);
    }

    #[test]
    fn test_random_policy_is_reproducible() {
        let obs = Observation([0.0; 7]);
        let mut a = RandomPolicy::new(5, 0.3);
        let mut b = RandomPolicy::new(5, 0.3);
        let xs: Vec<Action> = (0..64).map(|_| a.act(&obs)).collect();
        let ys: Vec<Action> = (0..64).map(|_| b.act(&obs)).collect();
        assert_eq!(xs, ys);
        assert!(xs.contains(&Action::Flap));
        assert!(xs.contains(&Action::Idle));
    }

    #[test]
    fn test_autopilot_clears_first_obstacle() {
        let settings = Settings::default();
        for seed in 0..8 {
            let (score, ticks) = run_episode(&mut Autopilot::new(&settings), seed, 110);
            assert!(score >= 1, "seed {seed} scored {score} in {ticks} ticks");
        }
    }

    #[test]
    fn test_autopilot_flaps_when_low() {
        let mut pilot = Autopilot::new(&Settings::default());
        // gap [200, 375], avatar bottom at 372
        let low = Observation([332.0, 300.0, 200.0, 325.0, 600.0, 200.0, 325.0]);
        assert_eq!(pilot.act(&low), Action::Flap);
        let high = Observation([250.0, 300.0, 200.0, 325.0, 600.0, 200.0, 325.0]);
        assert_eq!(pilot.act(&high), Action::Idle);
    }
}

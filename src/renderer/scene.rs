//! Snapshot to vertex list
//!
//! Background and ground never change, so their vertices are built once in
//! [`SceneRenderer::new`] and copied into every frame.

use glam::Vec2;

use super::shapes::{hline, rect, rect_at};
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{Phase, Snapshot};

/// One rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    /// Score for the HUD overlay
    pub score: u64,
}

/// Stateless projection of simulation snapshots
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    static_layer: Vec<Vertex>,
    obstacle_width: f32,
    ground_y: f32,
}

impl SceneRenderer {
    pub fn new(settings: &Settings) -> Self {
        let width = settings.screen_width;
        let ground_y = settings.ground_y();

        let mut static_layer = rect(Vec2::ZERO, Vec2::new(width, ground_y), colors::SKY);
        static_layer.extend(rect(
            Vec2::new(0.0, ground_y),
            Vec2::new(width, settings.screen_height),
            colors::GROUND,
        ));
        static_layer.extend(hline(ground_y, 0.0, width, 2.0, colors::GROUND_LINE));

        Self {
            static_layer,
            obstacle_width: settings.obstacle_width,
            ground_y,
        }
    }

    /// Vertices shared by every frame
    pub fn static_layer(&self) -> &[Vertex] {
        &self.static_layer
    }

    pub fn render(&self, snapshot: &Snapshot) -> Frame {
        let mut vertices = Vec::with_capacity(self.static_layer.len() + 6 * (1 + 2 * snapshot.obstacles.len()));
        vertices.extend_from_slice(&self.static_layer);

        for obstacle in &snapshot.obstacles {
            vertices.extend(rect_at(
                Vec2::new(obstacle.x, 0.0),
                Vec2::new(self.obstacle_width, obstacle.top_y),
                colors::OBSTACLE,
            ));
            vertices.extend(rect_at(
                Vec2::new(obstacle.x, obstacle.gap_bottom(self.ground_y)),
                Vec2::new(self.obstacle_width, obstacle.bottom_gap),
                colors::OBSTACLE,
            ));
        }

        let avatar = &snapshot.avatar;
        let color = if snapshot.phase == Phase::Terminated {
            colors::CRASHED
        } else {
            colors::AVATAR
        };
        vertices.extend(rect_at(
            Vec2::new(avatar.x, avatar.y),
            Vec2::new(avatar.width, avatar.height),
            color,
        ));

        Frame {
            vertices,
            score: snapshot.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Action;
    use crate::sim::Simulation;

    #[test]
    fn test_frame_before_first_step() {
        let mut sim = Simulation::new(Settings::default(), 1).unwrap();
        sim.reset();
        let renderer = SceneRenderer::new(sim.settings());
        let frame = renderer.render(&sim.snapshot());
        // static layer + avatar only
        assert_eq!(frame.vertices.len(), renderer.static_layer().len() + 6);
        assert_eq!(frame.score, 0);
    }

    #[test]
    fn test_frame_draws_both_bands_per_obstacle() {
        let mut sim = Simulation::new(Settings::default(), 1).unwrap();
        sim.reset();
        sim.step(Action::Idle).unwrap();
        let renderer = SceneRenderer::new(sim.settings());
        let frame = renderer.render(&sim.snapshot());
        assert_eq!(frame.vertices.len(), renderer.static_layer().len() + 6 * 5);

        let lead = sim.obstacles()[0];
        let top_band = &frame.vertices[renderer.static_layer().len()..][..6];
        assert!(top_band.iter().all(|v| v.color == colors::OBSTACLE));
        assert!(top_band.iter().any(|v| v.position == [lead.x, lead.top_y]));
    }

    #[test]
    fn test_rendering_does_not_touch_state() {
        let mut sim = Simulation::new(Settings::default(), 3).unwrap();
        sim.reset();
        sim.step(Action::Flap).unwrap();
        let before = sim.snapshot();
        let renderer = SceneRenderer::new(sim.settings());
        let a = renderer.render(&before);
        let b = renderer.render(&sim.snapshot());
        assert_eq!(a, b);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn test_terminated_avatar_tint() {
        let mut sim = Simulation::new(Settings::default(), 3).unwrap();
        sim.reset();
        while !sim.step(Action::Idle).unwrap().done {}
        let renderer = SceneRenderer::new(sim.settings());
        let frame = renderer.render(&sim.snapshot());
        let avatar = &frame.vertices[frame.vertices.len() - 6..];
        assert!(avatar.iter().all(|v| v.color == colors::CRASHED));
    }
}

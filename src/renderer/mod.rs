//! Rendering module
//!
//! A read-only projection of [`crate::sim::Snapshot`] into colored triangles.
//! Nothing here feeds back into the simulation.

pub mod pacing;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pacing::FramePacer;
pub use scene::{Frame, SceneRenderer};
pub use vertex::Vertex;

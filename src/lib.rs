//! Ball physics and polygon collision for 2D mini-golf.
//!
//! A [`Ball`] is launched by a drag gesture ([`input`]), integrated at a fixed
//! sub-step with gravity and exponential damping, and resolved against static
//! polygon [`shapes`] until it settles. The world is y-down, in pixels and seconds.

pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod integration;
pub mod input;
pub mod level;

/// Re-export common types for easier usage
pub use crate::core::{
    EventQueue, ShapeId, ShapeStorage, SimulationConfig, SimulationEvent, SimulationSession,
    StopReason,
};
pub use crate::bodies::{Ball, ObstacleKind, PhysicalMaterial, SurfaceKind, TerrainKind};
pub use crate::input::{compute_shot, DragController, Shot, ShotConfig};
pub use crate::level::{Level, LevelDescription};
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid shape: {0}")]
        InvalidShape(String),

        #[error("Invalid level: {0}")]
        InvalidLevel(String),

        #[error("Level parse error: {0}")]
        LevelParse(#[from] serde_json::Error),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Level data: the JSON description and the shapes built from it.

mod description;

pub use self::description::{LevelDescription, LevelPoint, ObstacleDescription, ZoneDescription};

use crate::core::ShapeStorage;
use crate::math::Vector2;
use crate::Result;

/// A loaded level, ready to be simulated
#[derive(Debug)]
pub struct Level {
    name: String,
    ball_start: Vector2,
    shapes: ShapeStorage,
}

impl Level {
    /// Creates a level from already built shapes
    pub fn new(name: impl Into<String>, ball_start: Vector2, shapes: ShapeStorage) -> Self {
        Self {
            name: name.into(),
            ball_start,
            shapes,
        }
    }

    /// Parses and builds a level document
    pub fn from_json_str(json: &str) -> Result<Self> {
        LevelDescription::from_json_str(json)?.build()
    }

    /// Returns the level name
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the ball start marker in world space
    pub fn get_ball_start(&self) -> Vector2 {
        self.ball_start
    }

    /// Returns the shapes
    pub fn get_shapes(&self) -> &ShapeStorage {
        &self.shapes
    }

    /// Splits the level into its name, start marker and shapes
    pub fn into_parts(self) -> (String, Vector2, ShapeStorage) {
        (self.name, self.ball_start, self.shapes)
    }
}

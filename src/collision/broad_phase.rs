use crate::core::{ShapeId, ShapeStorage};
use crate::math::Aabb;
use crate::shapes::Collidable;

/// Trait for broad-phase rejection of shapes that cannot touch the ball
pub trait BroadPhase {
    /// Returns the shapes worth a narrow-phase test, in storage order
    fn candidates<'a>(
        &self,
        ball_bounds: &Aabb,
        shapes: &'a ShapeStorage,
    ) -> Vec<(ShapeId, &'a dyn Collidable)>;
}

/// Tests every solid shape's bounding box against the ball's.
///
/// Levels hold tens of shapes, so a linear scan is all that is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceBroadPhase;

impl BruteForceBroadPhase {
    /// Creates a new brute-force broad-phase
    pub fn new() -> Self {
        Self
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn candidates<'a>(
        &self,
        ball_bounds: &Aabb,
        shapes: &'a ShapeStorage,
    ) -> Vec<(ShapeId, &'a dyn Collidable)> {
        shapes
            .iter()
            .filter(|(_, shape)| shape.is_solid())
            .filter(|(_, shape)| shape.get_bounds().intersects(ball_bounds))
            .collect()
    }
}

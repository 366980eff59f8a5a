use crate::core::ShapeId;
use crate::math::Vector2;
use crate::shapes::Collidable;

/// A ball contact found during one sub-step.
///
/// Borrows the shape from the level's storage and lives only until the stepper has
/// resolved it.
#[derive(Debug, Clone, Copy)]
pub struct Contact<'a> {
    /// Id of the shape in its storage
    pub shape_id: ShapeId,

    /// The shape that was hit
    pub shape: &'a dyn Collidable,

    /// Unit normal pointing from the shape boundary toward the ball center
    pub normal: Vector2,

    /// Penetration depth along `normal`, always positive
    pub depth: f32,

    /// Closest point on the shape boundary
    pub point: Vector2,
}

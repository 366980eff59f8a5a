use crate::bodies::Ball;
use crate::core::SimulationConfig;
use crate::math::{geometry, Penetration};
use crate::shapes::Collidable;

/// Trait for exact ball-versus-shape overlap tests
pub trait NarrowPhase {
    /// Returns the penetration of the ball into the shape, if any
    fn penetration(
        &self,
        ball: &Ball,
        shape: &dyn Collidable,
        config: &SimulationConfig,
    ) -> Option<Penetration>;
}

/// Closest-point circle-versus-polygon test.
///
/// Works for concave outlines since only the boundary is examined. Malformed
/// outlines (fewer than 3 vertices, all edges degenerate) never produce a contact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestPointNarrowPhase;

impl ClosestPointNarrowPhase {
    /// Creates a new closest-point narrow-phase
    pub fn new() -> Self {
        Self
    }
}

impl NarrowPhase for ClosestPointNarrowPhase {
    fn penetration(
        &self,
        ball: &Ball,
        shape: &dyn Collidable,
        config: &SimulationConfig,
    ) -> Option<Penetration> {
        let penetration = geometry::circle_polygon_penetration(
            shape.get_outline(),
            ball.get_position(),
            ball.get_radius(),
            config.contact_epsilon,
        )?;

        if penetration.depth <= config.min_penetration_depth {
            return None;
        }

        Some(penetration)
    }
}

use crate::bodies::{ObstacleKind, PhysicalMaterial, SurfaceKind};
use crate::math::{to_radians, Aabb, Vector2};
use crate::shapes::{Collidable, Polygon};
use crate::Result;

/// An obstacle placed on the course.
///
/// The outline is given relative to the obstacle's position and rotated about that
/// position. The world outline is computed once, at construction.
#[derive(Debug, Clone)]
pub struct Obstacle {
    kind: ObstacleKind,
    position: Vector2,
    rotation_degrees: f32,
    polygon: Polygon,
}

impl Obstacle {
    /// Creates an obstacle from a local outline, a world position and a rotation
    pub fn new(
        kind: ObstacleKind,
        local_points: &[Vector2],
        position: Vector2,
        rotation_degrees: f32,
    ) -> Result<Self> {
        let radians = to_radians(rotation_degrees);
        let world_points = local_points
            .iter()
            .map(|p| p.rotated(radians) + position)
            .collect();

        Ok(Self {
            kind,
            position,
            rotation_degrees,
            polygon: Polygon::new(world_points)?,
        })
    }

    /// Returns the obstacle type
    pub fn get_kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Returns the placement position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Returns the placement rotation in degrees
    pub fn get_rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }
}

impl Collidable for Obstacle {
    fn shape_type(&self) -> &'static str {
        "Obstacle"
    }

    fn get_outline(&self) -> &[Vector2] {
        self.polygon.points()
    }

    fn get_bounds(&self) -> Aabb {
        self.polygon.bounds()
    }

    fn get_material(&self) -> PhysicalMaterial {
        self.kind.material()
    }

    fn surface_kind(&self) -> SurfaceKind {
        SurfaceKind::Obstacle(self.kind)
    }
}

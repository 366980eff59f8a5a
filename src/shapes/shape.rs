use crate::bodies::{PhysicalMaterial, SurfaceKind};
use crate::math::{Aabb, Vector2};
use std::fmt::Debug;

/// A static surface the ball can collide with.
///
/// Implementations are inert data holders: the outline is fixed once the level is
/// loaded and the resolver only ever reads it.
pub trait Collidable: Send + Sync + Debug {
    /// Returns the type name of the shape
    fn shape_type(&self) -> &'static str;

    /// Returns the world-space outline (at least 3 vertices, implicitly closed)
    fn get_outline(&self) -> &[Vector2];

    /// Returns the cached world-space bounding box of the outline
    fn get_bounds(&self) -> Aabb;

    /// Returns the response coefficients of the surface
    fn get_material(&self) -> PhysicalMaterial;

    /// Returns the surface kind reported in impact events
    fn surface_kind(&self) -> SurfaceKind {
        SurfaceKind::Custom
    }

    /// Whether the resolver should consider the shape at all
    fn is_solid(&self) -> bool {
        self.get_material().is_solid()
    }

    /// Whether touching the shape ends the shot
    fn is_hazard(&self) -> bool {
        self.get_material().is_hazard()
    }
}

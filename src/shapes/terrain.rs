use crate::bodies::{PhysicalMaterial, SurfaceKind, TerrainKind};
use crate::math::{Aabb, Vector2};
use crate::shapes::{Collidable, Polygon};
use crate::Result;

/// A ground zone of the course
#[derive(Debug, Clone)]
pub struct Terrain {
    kind: TerrainKind,
    polygon: Polygon,
}

impl Terrain {
    /// Creates a terrain zone from world-space vertices
    pub fn new(kind: TerrainKind, points: Vec<Vector2>) -> Result<Self> {
        Ok(Self::from_polygon(kind, Polygon::new(points)?))
    }

    /// Creates a terrain zone from an already validated polygon
    pub fn from_polygon(kind: TerrainKind, polygon: Polygon) -> Self {
        Self { kind, polygon }
    }

    /// Returns the terrain type
    pub fn get_kind(&self) -> TerrainKind {
        self.kind
    }

    /// Returns the outline polygon
    pub fn get_polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Collidable for Terrain {
    fn shape_type(&self) -> &'static str {
        "Terrain"
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
        SurfaceKind::Terrain(self.kind)
    }
}

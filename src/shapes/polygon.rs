use crate::error::PhysicsError;
use crate::math::{geometry, Aabb, Vector2};
use crate::Result;

/// A validated world-space polygon outline with its cached bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Vector2>,
    bounds: Aabb,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// Requires at least 3 finite vertices and at least one edge of non-zero length.
    /// Winding order is free.
    pub fn new(points: Vec<Vector2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(PhysicsError::InvalidShape(format!(
                "a polygon needs at least 3 vertices, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(PhysicsError::InvalidShape(format!("non-finite vertex {bad}")));
        }
        // Any probe point will do: it only fails when every edge is degenerate
        if geometry::closest_point_on_polygon(&points, points[0]).is_none() {
            return Err(PhysicsError::InvalidShape(
                "every edge of the polygon has zero length".to_string(),
            ));
        }

        let bounds = Aabb::from_points(&points)
            .ok_or_else(|| PhysicsError::InvalidShape("empty polygon".to_string()))?;

        Ok(Self { points, bounds })
    }

    /// Creates an axis-aligned rectangle
    pub fn rectangle(min: Vector2, max: Vector2) -> Result<Self> {
        Self::new(vec![
            min,
            Vector2::new(max.x, min.y),
            max,
            Vector2::new(min.x, max.y),
        ])
    }

    /// Returns the vertices
    #[inline]
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Returns the bounding box
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Returns the unsigned area
    pub fn area(&self) -> f32 {
        geometry::signed_area(&self.points).abs()
    }

    /// Whether `point` lies inside the outline
    pub fn contains_point(&self, point: Vector2) -> bool {
        self.bounds.contains_point(point) && geometry::contains_point(&self.points, point)
    }
}

//! Circle-versus-polygon geometry.
//!
//! Everything here works on a plain vertex slice so it can serve any
//! [`Collidable`](crate::shapes::Collidable) implementation. The outline is closed
//! implicitly: the last vertex connects back to the first. Polygons may be concave.

use crate::math::{Vector2, EPSILON};

/// Squared edge length below which an edge is treated as degenerate and skipped
const DEGENERATE_EDGE_LENGTH_SQUARED: f32 = 1.0e-9;

/// Normal used when no better direction can be derived (screen "up")
const FALLBACK_NORMAL: Vector2 = Vector2 { x: 0.0, y: -1.0 };

/// The closest point on a polygon boundary to a query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// The point on the boundary
    pub point: Vector2,

    /// Squared distance from the query point to `point`
    pub distance_squared: f32,

    /// Index of the edge (from vertex `edge_index` to the next one) holding `point`
    pub edge_index: usize,
}

/// Overlap between a circle and a polygon boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit normal pointing from the boundary toward the circle center
    pub normal: Vector2,

    /// Overlap distance along `normal`, always positive
    pub depth: f32,

    /// The closest boundary point
    pub point: Vector2,
}

/// Projects `point` onto the segment `a`-`b`, clamped to the segment.
///
/// Returns `None` for a zero-length segment.
pub fn closest_point_on_segment(point: Vector2, a: Vector2, b: Vector2) -> Option<Vector2> {
    let edge = b - a;
    let edge_length_squared = edge.length_squared();
    if edge_length_squared <= DEGENERATE_EDGE_LENGTH_SQUARED {
        return None;
    }

    let t = ((point - a).dot(&edge) / edge_length_squared).clamp(0.0, 1.0);
    Some(a + edge * t)
}

/// Walks every edge of `outline` (wrapping from the last vertex to the first) and
/// returns the boundary point closest to `point`.
///
/// Outlines with fewer than three vertices, or whose edges are all degenerate,
/// yield `None`.
pub fn closest_point_on_polygon(outline: &[Vector2], point: Vector2) -> Option<ClosestPoint> {
    if outline.len() < 3 {
        return None;
    }

    let mut best: Option<ClosestPoint> = None;
    for (edge_index, (a, b)) in edges(outline).enumerate() {
        let Some(candidate) = closest_point_on_segment(point, a, b) else {
            continue;
        };

        let distance_squared = point.distance_squared(&candidate);
        if best.map_or(true, |current| distance_squared < current.distance_squared) {
            best = Some(ClosestPoint {
                point: candidate,
                distance_squared,
                edge_index,
            });
        }
    }

    best
}

/// Signed area of the outline (shoelace formula).
///
/// Positive for counter-clockwise winding in a y-up frame.
pub fn signed_area(outline: &[Vector2]) -> f32 {
    edges(outline).map(|(a, b)| a.cross(&b)).sum::<f32>() * 0.5
}

/// Unit normal of edge `edge_index` pointing out of the polygon.
///
/// The side is chosen from the sign of the polygon's area, so either winding works.
/// Returns `None` for a degenerate edge, an out-of-range index or a zero-area outline.
pub fn edge_outward_normal(outline: &[Vector2], edge_index: usize) -> Option<Vector2> {
    let (a, b) = edges(outline).nth(edge_index)?;
    let edge = (b - a).try_normalize()?;

    let area = signed_area(outline);
    if area.abs() <= EPSILON {
        return None;
    }

    if area > 0.0 {
        Some(-edge.perpendicular())
    } else {
        Some(edge.perpendicular())
    }
}

/// Tests a circle against a polygon boundary.
///
/// A contact exists when the squared distance from `center` to the closest boundary
/// point is below `radius² + epsilon`. The depth is `radius - distance` and must be
/// positive. When the center lies on the boundary the normal falls back to the
/// closest edge's outward perpendicular.
pub fn circle_polygon_penetration(
    outline: &[Vector2],
    center: Vector2,
    radius: f32,
    epsilon: f32,
) -> Option<Penetration> {
    let closest = closest_point_on_polygon(outline, center)?;
    if closest.distance_squared >= radius * radius + epsilon {
        return None;
    }

    let distance = closest.distance_squared.sqrt();
    let depth = radius - distance;
    if depth <= 0.0 {
        return None;
    }

    let normal = if distance > EPSILON {
        (center - closest.point) / distance
    } else {
        edge_outward_normal(outline, closest.edge_index).unwrap_or(FALLBACK_NORMAL)
    };

    Some(Penetration {
        normal,
        depth,
        point: closest.point,
    })
}

/// Even-odd point-in-polygon test
pub fn contains_point(outline: &[Vector2], point: Vector2) -> bool {
    if outline.len() < 3 {
        return false;
    }

    let mut inside = false;
    for (a, b) in edges(outline) {
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}

/// Iterates the closed edge loop `(v[i], v[i + 1 mod n])`
fn edges(outline: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    outline
        .iter()
        .zip(outline.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

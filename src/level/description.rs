use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::bodies::{ObstacleKind, TerrainKind};
use crate::core::ShapeStorage;
use crate::error::PhysicsError;
use crate::level::Level;
use crate::math::Vector2;
use crate::shapes::{Obstacle, Terrain};
use crate::Result;

/// A point as written in level files
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelPoint {
    pub x: f32,
    pub y: f32,
}

impl From<LevelPoint> for Vector2 {
    fn from(p: LevelPoint) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2> for LevelPoint {
    fn from(v: Vector2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A terrain zone entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDescription {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: TerrainKind,
    pub vertices: Vec<LevelPoint>,
}

/// An obstacle entry. `vertices` are relative to `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDescription {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
    pub position: LevelPoint,
    /// Rotation in degrees about `position`
    #[serde(default)]
    pub rotation: f32,
    pub vertices: Vec<LevelPoint>,
}

/// The serialized form of a level.
///
/// When `height` is set the file uses y-up coordinates, which are flipped into the
/// y-down simulation space as `y' = height - y`. Without it, coordinates are used
/// as they are.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelDescription {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    pub ball_start: LevelPoint,
    #[serde(default)]
    pub zones: Vec<ZoneDescription>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDescription>,
}

impl LevelDescription {
    /// Parses a level document. Unknown zone or obstacle types are rejected here.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the level as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the collidable shapes.
    ///
    /// Zones come first, ordered by id, then obstacles ordered by id. Duplicate ids
    /// within zones or within obstacles and malformed polygons are errors.
    pub fn build(&self) -> Result<Level> {
        let flip = match self.height {
            Some(height) if height.is_finite() && height > 0.0 => Some(height),
            Some(height) => {
                return Err(PhysicsError::InvalidLevel(format!(
                    "level height must be positive, got {height}"
                )))
            }
            None => None,
        };
        let to_world = |p: LevelPoint| match flip {
            Some(height) => Vector2::new(p.x, height - p.y),
            None => Vector2::from(p),
        };

        let ball_start = to_world(self.ball_start);
        if !ball_start.is_finite() {
            return Err(PhysicsError::InvalidLevel("ball start must be finite".to_string()));
        }

        let mut shapes = ShapeStorage::new();

        let mut zones: Vec<&ZoneDescription> = self.zones.iter().collect();
        zones.sort_by_key(|zone| zone.id);
        check_unique_ids("zone", zones.iter().map(|zone| zone.id))?;
        for zone in zones {
            let points = zone.vertices.iter().map(|p| to_world(*p)).collect();
            let terrain = Terrain::new(zone.kind, points).map_err(|e| {
                PhysicsError::InvalidLevel(format!("zone {} ({}): {e}", zone.id, zone.kind.name()))
            })?;
            shapes.add(terrain);
        }

        let mut obstacles: Vec<&ObstacleDescription> = self.obstacles.iter().collect();
        obstacles.sort_by_key(|obstacle| obstacle.id);
        check_unique_ids("obstacle", obstacles.iter().map(|obstacle| obstacle.id))?;
        for obstacle in obstacles {
            // Mirroring the frame mirrors the local outline and reverses the rotation
            let (local, rotation): (Vec<Vector2>, f32) = match flip {
                Some(_) => (
                    obstacle.vertices.iter().map(|p| Vector2::new(p.x, -p.y)).collect(),
                    -obstacle.rotation,
                ),
                None => (
                    obstacle.vertices.iter().map(|p| Vector2::from(*p)).collect(),
                    obstacle.rotation,
                ),
            };

            let placed = Obstacle::new(obstacle.kind, &local, to_world(obstacle.position), rotation)
                .map_err(|e| {
                    PhysicsError::InvalidLevel(format!(
                        "obstacle {} ({}): {e}",
                        obstacle.id,
                        obstacle.kind.name()
                    ))
                })?;
            shapes.add(placed);
        }

        log::info!(
            "built level '{}': {} zones, {} obstacles",
            self.name,
            self.zones.len(),
            self.obstacles.len()
        );

        Ok(Level::new(self.name.clone(), ball_start, shapes))
    }
}

fn check_unique_ids(what: &str, sorted_ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in sorted_ids {
        if !seen.insert(id) {
            return Err(PhysicsError::InvalidLevel(format!("duplicate {what} id {id}")));
        }
    }
    Ok(())
}

mod ball;
mod material;

pub use self::ball::{Ball, DEFAULT_BALL_MASS};
pub use self::material::{ObstacleKind, PhysicalMaterial, SurfaceFlags, SurfaceKind, TerrainKind};

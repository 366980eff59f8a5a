mod shape;
mod polygon;
mod terrain;
mod obstacle;

pub use self::shape::Collidable;
pub use self::polygon::Polygon;
pub use self::terrain::Terrain;
pub use self::obstacle::Obstacle;

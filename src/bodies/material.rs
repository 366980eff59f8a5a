use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::Result;

bitflags! {
    /// Behaviour flags of a surface
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SurfaceFlags: u8 {
        /// The surface takes part in collision resolution
        const SOLID  = 0x01;

        /// Touching the surface ends the shot (water, pits, spikes)
        const HAZARD = 0x02;
    }
}

/// Physical response coefficients of a surface.
///
/// `friction` is in `[0, 1]` and scales the tangential velocity by `1 - friction`
/// on every resolved contact. `restitution` is in `[0, 1]`: 0 absorbs all normal
/// velocity, 1 is perfectly elastic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalMaterial {
    /// Coefficient of friction, 0-1
    pub friction: f32,

    /// Coefficient of restitution (bounciness), 0-1
    pub restitution: f32,

    /// Solid / hazard flags
    pub flags: SurfaceFlags,
}

impl PhysicalMaterial {
    /// Creates a solid material, validating both coefficients
    pub fn new(friction: f32, restitution: f32) -> Result<Self> {
        Self::with_flags(friction, restitution, SurfaceFlags::SOLID)
    }

    /// Creates a material with explicit flags, validating both coefficients
    pub fn with_flags(friction: f32, restitution: f32, flags: SurfaceFlags) -> Result<Self> {
        if !(0.0..=1.0).contains(&friction) {
            return Err(PhysicsError::InvalidParameter(format!(
                "friction must be within [0, 1], got {friction}"
            )));
        }
        if !(0.0..=1.0).contains(&restitution) {
            return Err(PhysicsError::InvalidParameter(format!(
                "restitution must be within [0, 1], got {restitution}"
            )));
        }

        Ok(Self { friction, restitution, flags })
    }

    const fn solid(friction: f32, restitution: f32) -> Self {
        Self { friction, restitution, flags: SurfaceFlags::SOLID }
    }

    /// A solid surface that ends the shot on contact
    pub const fn hazard() -> Self {
        Self {
            friction: 0.0,
            restitution: 0.0,
            flags: SurfaceFlags::SOLID.union(SurfaceFlags::HAZARD),
        }
    }

    /// A decorative surface the resolver never considers
    pub const fn decorative() -> Self {
        Self { friction: 0.0, restitution: 0.0, flags: SurfaceFlags::empty() }
    }

    /// Whether the surface takes part in collision resolution
    #[inline]
    pub fn is_solid(&self) -> bool {
        self.flags.contains(SurfaceFlags::SOLID)
    }

    /// Whether touching the surface ends the shot
    #[inline]
    pub fn is_hazard(&self) -> bool {
        self.flags.contains(SurfaceFlags::HAZARD)
    }
}

impl Default for PhysicalMaterial {
    fn default() -> Self {
        TerrainKind::Fairway.material()
    }
}

/// Ground zone types a level can be built from.
///
/// Grass rolls far, rocks bounce, dirt sits in between and sand stops the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    Green,
    Fairway,
    DarkGreen,
    Rocks,
    DarkRocks,
    Dirt,
    DarkDirt,
    Bunker,
    Lake,
    Void,
    Scenery,
}

impl TerrainKind {
    /// The static material for this terrain type
    pub const fn material(self) -> PhysicalMaterial {
        match self {
            Self::Green => PhysicalMaterial::solid(0.02, 0.35),
            Self::Fairway => PhysicalMaterial::solid(0.03, 0.30),
            Self::DarkGreen => PhysicalMaterial::solid(0.04, 0.30),
            Self::Rocks => PhysicalMaterial::solid(0.01, 0.60),
            Self::DarkRocks => PhysicalMaterial::solid(0.015, 0.55),
            Self::Dirt => PhysicalMaterial::solid(0.06, 0.25),
            Self::DarkDirt => PhysicalMaterial::solid(0.08, 0.20),
            // Sand kills both the roll and the bounce
            Self::Bunker => PhysicalMaterial::solid(0.25, 0.05),
            Self::Lake | Self::Void => PhysicalMaterial::hazard(),
            Self::Scenery => PhysicalMaterial::decorative(),
        }
    }

    /// Name of the type tag as it appears in level files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Fairway => "fairway",
            Self::DarkGreen => "darkgreen",
            Self::Rocks => "rocks",
            Self::DarkRocks => "darkrocks",
            Self::Dirt => "dirt",
            Self::DarkDirt => "darkdirt",
            Self::Bunker => "bunker",
            Self::Lake => "lake",
            Self::Void => "void",
            Self::Scenery => "scenery",
        }
    }
}

/// Placed obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Wall,
    Log,
    Bumper,
    Spikes,
}

impl ObstacleKind {
    /// The static material for this obstacle type
    pub const fn material(self) -> PhysicalMaterial {
        match self {
            Self::Wall => PhysicalMaterial::solid(0.02, 0.50),
            Self::Log => PhysicalMaterial::solid(0.05, 0.35),
            Self::Bumper => PhysicalMaterial::solid(0.0, 0.90),
            Self::Spikes => PhysicalMaterial::hazard(),
        }
    }

    /// Name of the type tag as it appears in level files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Log => "log",
            Self::Bumper => "bumper",
            Self::Spikes => "spikes",
        }
    }
}

/// The kind of surface a contact happened on, reported with impact events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Terrain(TerrainKind),
    Obstacle(ObstacleKind),
    /// A surface from a user-provided collidable
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_are_validated() {
        assert!(PhysicalMaterial::new(0.2, 0.5).is_ok());
        assert!(PhysicalMaterial::new(-0.1, 0.5).is_err());
        assert!(PhysicalMaterial::new(0.2, 1.5).is_err());
        assert!(PhysicalMaterial::new(f32::NAN, 0.5).is_err());
    }

    #[test]
    fn hazard_and_scenery_flags() {
        assert!(TerrainKind::Lake.material().is_hazard());
        assert!(TerrainKind::Lake.material().is_solid());
        assert!(ObstacleKind::Spikes.material().is_hazard());
        assert!(!TerrainKind::Scenery.material().is_solid());
        assert!(!TerrainKind::Green.material().is_hazard());
    }

    #[test]
    fn table_coefficients_are_in_range() {
        let terrains = [
            TerrainKind::Green,
            TerrainKind::Fairway,
            TerrainKind::DarkGreen,
            TerrainKind::Rocks,
            TerrainKind::DarkRocks,
            TerrainKind::Dirt,
            TerrainKind::DarkDirt,
            TerrainKind::Bunker,
            TerrainKind::Lake,
            TerrainKind::Void,
            TerrainKind::Scenery,
        ];
        for kind in terrains {
            let m = kind.material();
            assert!(PhysicalMaterial::with_flags(m.friction, m.restitution, m.flags).is_ok(), "{}", kind.name());
        }
    }

    #[test]
    fn type_tags_round_trip_through_serde() {
        let kind: TerrainKind = serde_json::from_str("\"darkgreen\"").unwrap();
        assert_eq!(kind, TerrainKind::DarkGreen);
        assert_eq!(kind.name(), "darkgreen");
        assert!(serde_json::from_str::<TerrainKind>("\"lava\"").is_err());

        let kind: TerrainKind = serde_json::from_str("\"darkdirt\"").unwrap();
        assert_eq!(kind, TerrainKind::DarkDirt);
        assert_eq!(kind.name(), "darkdirt");
        assert_eq!(serde_json::to_string(&TerrainKind::Dirt).unwrap(), "\"dirt\"");
    }
}

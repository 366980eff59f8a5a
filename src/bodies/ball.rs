use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2};
use crate::Result;

/// Mass of a regulation golf ball in kilograms. Carried for completeness only:
/// no force in the simulation depends on it.
pub const DEFAULT_BALL_MASS: f32 = 0.047;

/// The golf ball.
///
/// Invariants: `radius > 0`, and a ball that is not moving has zero velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    position: Vector2,
    velocity: Vector2,
    radius: f32,
    mass: f32,
    moving: bool,
}

impl Ball {
    /// Creates a ball at rest
    pub fn new(position: Vector2, radius: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "ball radius must be positive, got {radius}"
            )));
        }
        if !position.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "ball position must be finite, got {position}"
            )));
        }

        Ok(Self {
            position,
            velocity: Vector2::zero(),
            radius,
            mass: DEFAULT_BALL_MASS,
            moving: false,
        })
    }

    /// Creates a ball from a sprite diameter and the display scale applied to it.
    ///
    /// The collision radius is the scaled one: `floor(diameter) * scale / 2`.
    pub fn from_diameter(position: Vector2, diameter: f32, display_scale: f32) -> Result<Self> {
        Self::new(position, diameter.floor() * display_scale / 2.0)
    }

    /// Sets the (decorative) mass
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Returns the position of the ball center
    #[inline]
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Returns the current velocity
    #[inline]
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Returns the collision radius
    #[inline]
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the mass
    #[inline]
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Whether a shot is in progress
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Bounding box of the ball at its current position
    #[inline]
    pub fn get_bounds(&self) -> Aabb {
        Aabb::from_circle(self.position, self.radius)
    }

    /// Starts a shot with the given velocity
    pub fn launch(&mut self, velocity: Vector2) {
        self.velocity = velocity;
        self.moving = !velocity.is_zero();
        if !self.moving {
            self.velocity = Vector2::zero();
        }
    }

    /// Moves the ball to `position` and brings it to rest
    pub fn place(&mut self, position: Vector2) {
        self.position = position;
        self.halt();
    }

    /// Brings the ball to rest where it is
    pub fn halt(&mut self) {
        self.velocity = Vector2::zero();
        self.moving = false;
    }

    pub(crate) fn set_motion(&mut self, position: Vector2, velocity: Vector2) {
        self.position = position;
        self.velocity = velocity;
    }

    pub(crate) fn translate(&mut self, offset: Vector2) {
        self.position += offset;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }
}

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::math::{normalize_degrees, to_degrees, to_radians, Vector2};
use crate::Result;

/// Limits applied when turning a drag into a shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    /// Drag length beyond which the force no longer grows
    pub max_drag_distance: f32,

    /// Force produced by a drag of `max_drag_distance`
    pub max_force: f32,

    /// Forces below this are not a shot
    pub min_force: f32,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            max_drag_distance: 500.0,
            max_force: 2500.0,
            min_force: 10.0,
        }
    }
}

impl ShotConfig {
    /// Checks that the limits are usable
    pub fn validate(&self) -> Result<()> {
        if !(self.max_drag_distance.is_finite() && self.max_drag_distance > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "max_drag_distance must be positive, got {}",
                self.max_drag_distance
            )));
        }
        if !(self.max_force.is_finite() && self.max_force > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "max_force must be positive, got {}",
                self.max_force
            )));
        }
        if !(0.0..=self.max_force).contains(&self.min_force) {
            return Err(PhysicsError::InvalidParameter(format!(
                "min_force must be within [0, max_force], got {}",
                self.min_force
            )));
        }
        Ok(())
    }
}

/// A launch request: a force magnitude and a direction.
///
/// The angle is counter-clockwise as seen on screen from the +x axis, in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shot {
    /// Launch speed in pixels per second
    pub force: f32,

    /// Launch direction in degrees
    pub angle_degrees: f32,
}

impl Shot {
    /// The no-op shot
    pub const NONE: Shot = Shot { force: 0.0, angle_degrees: 0.0 };

    /// Whether this shot would move the ball
    #[inline]
    pub fn is_shot(&self) -> bool {
        self.force > 0.0
    }

    /// Launch velocity in y-down world space
    pub fn velocity(&self) -> Vector2 {
        if !self.is_shot() {
            return Vector2::zero();
        }
        let radians = to_radians(self.angle_degrees);
        Vector2::new(radians.cos(), -radians.sin()) * self.force
    }
}

/// Converts a drag gesture into a shot.
///
/// The ball is shot away from the drag: dragging left shoots right (0°), dragging
/// down shoots up (90°). The force grows linearly with the drag length up to
/// `max_drag_distance`, where it reaches `max_force`. Anything below `min_force`,
/// including a zero-length drag, yields [`Shot::NONE`].
pub fn compute_shot(drag_start: Vector2, drag_end: Vector2, config: &ShotConfig) -> Shot {
    let pull = drag_start - drag_end;
    let distance = pull.length();
    if !distance.is_finite() || distance <= 0.0 {
        return Shot::NONE;
    }

    let clamped = distance.min(config.max_drag_distance);
    let force = clamped / config.max_drag_distance * config.max_force;
    // An unusable config (zero or non-finite limits) gives a NaN or infinite force
    if !force.is_finite() || force < config.min_force || force <= 0.0 {
        return Shot::NONE;
    }

    // Screen y grows downward, so flip it to measure the angle counter-clockwise
    let angle_degrees = normalize_degrees(to_degrees((-pull.y).atan2(pull.x)));

    Shot { force, angle_degrees }
}

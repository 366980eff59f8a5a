use std::iter::FusedIterator;

use crate::integration::SymplecticEulerIntegrator;
use crate::math::Vector2;

/// Speed below which a prediction ends when no other limit is given
pub const DEFAULT_MIN_SPEED: f32 = 1.0;

/// A forward simulation of a shot without any collision.
///
/// Yields the position after each step, so at most `steps` points. It ends early
/// once the speed drops below the minimum speed. Collisions are ignored: this is an
/// aim preview and diverges from the real path once the ball touches anything.
#[derive(Debug, Clone)]
pub struct Trajectory {
    integrator: SymplecticEulerIntegrator,
    position: Vector2,
    velocity: Vector2,
    dt: f32,
    remaining: usize,
    min_speed: f32,
}

impl Trajectory {
    /// Creates a trajectory ending after `steps` steps or below [`DEFAULT_MIN_SPEED`]
    pub fn new(
        integrator: SymplecticEulerIntegrator,
        start: Vector2,
        initial_velocity: Vector2,
        dt: f32,
        steps: usize,
    ) -> Self {
        Self {
            integrator,
            position: start,
            velocity: initial_velocity,
            dt,
            remaining: steps,
            min_speed: DEFAULT_MIN_SPEED,
        }
    }

    /// Sets the speed below which the trajectory ends
    pub fn with_min_speed(mut self, min_speed: f32) -> Self {
        self.min_speed = min_speed;
        self
    }

    /// Velocity at the last yielded point
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }
}

impl Iterator for Trajectory {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        if self.remaining == 0 {
            return None;
        }
        if self.velocity.length_squared() < self.min_speed * self.min_speed {
            self.remaining = 0;
            return None;
        }

        let (position, velocity) = self.integrator.step(self.position, self.velocity, self.dt);
        self.position = position;
        self.velocity = velocity;
        self.remaining -= 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for Trajectory {}

/// Predicts the path of a ball launched from `start` with `initial_velocity`.
///
/// Uses the stepper's integration formula with the given constants. Sample the
/// result with `step_by` for a dotted preview.
pub fn predict(
    start: Vector2,
    initial_velocity: Vector2,
    gravity: f32,
    damping_factor: f32,
    dt: f32,
    steps: usize,
) -> Trajectory {
    Trajectory::new(
        SymplecticEulerIntegrator::new(gravity, damping_factor),
        start,
        initial_velocity,
        dt,
        steps,
    )
}

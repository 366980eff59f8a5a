use crate::bodies::Ball;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Integrates the ball over a time step
    fn integrate(&self, ball: &mut Ball, dt: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}

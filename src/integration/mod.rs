mod integrator;
mod symplectic_euler;
mod trajectory;

pub use self::integrator::Integrator;
pub use self::symplectic_euler::{damped_velocity_after, SymplecticEulerIntegrator};
pub use self::trajectory::{predict, Trajectory, DEFAULT_MIN_SPEED};

use crate::bodies::Ball;
use crate::core::SimulationConfig;
use crate::integration::Integrator;
use crate::math::Vector2;

/// Symplectic Euler integrator (semi-implicit Euler) with exponential damping.
///
/// One step is `v += g·dt`, then `v *= damping^dt`, then `p += v·dt`. Raising the
/// per-second damping factor to `dt` makes the damping independent of the step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymplecticEulerIntegrator {
    gravity: f32,
    damping_factor: f32,
}

impl SymplecticEulerIntegrator {
    /// Creates an integrator with downward gravity and a per-second damping factor
    pub fn new(gravity: f32, damping_factor: f32) -> Self {
        Self { gravity, damping_factor }
    }

    /// Creates an integrator from the simulation constants
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.gravity, config.damping_factor)
    }

    /// Returns the gravity
    pub fn get_gravity(&self) -> f32 {
        self.gravity
    }

    /// Returns the per-second damping factor
    pub fn get_damping_factor(&self) -> f32 {
        self.damping_factor
    }

    /// Advances a position and velocity by one step
    #[inline]
    pub fn step(&self, position: Vector2, velocity: Vector2, dt: f32) -> (Vector2, Vector2) {
        let mut velocity = velocity;
        velocity.y += self.gravity * dt;
        velocity *= self.damping_factor.powf(dt);
        (position + velocity * dt, velocity)
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&self, ball: &mut Ball, dt: f32) {
        if !ball.is_moving() {
            return;
        }

        let (position, velocity) = self.step(ball.get_position(), ball.get_velocity(), dt);
        ball.set_motion(position, velocity);
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}

/// Exact velocity of the integrator after `steps` steps without contacts.
///
/// With `d = damping^dt` each step is `v' = d·(v + g·dt)`, which unrolls to
/// `v_n = dⁿ·v0 + g·dt·d·(1 - dⁿ)/(1 - d)` on the vertical axis.
pub fn damped_velocity_after(
    initial_velocity: Vector2,
    gravity: f32,
    damping_factor: f32,
    dt: f32,
    steps: u32,
) -> Vector2 {
    let d = f64::from(damping_factor).powf(f64::from(dt));
    let n = f64::from(steps);
    let dn = d.powf(n);
    let g_dt = f64::from(gravity) * f64::from(dt);

    let gravity_term = if (1.0 - d).abs() < 1.0e-12 {
        g_dt * n
    } else {
        g_dt * d * (1.0 - dn) / (1.0 - d)
    };

    Vector2::new(
        (dn * f64::from(initial_velocity.x)) as f32,
        (dn * f64::from(initial_velocity.y) + gravity_term) as f32,
    )
}

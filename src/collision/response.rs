use crate::bodies::PhysicalMaterial;
use crate::core::SimulationConfig;
use crate::math::Vector2;

/// Velocity after a contact has been resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactResponse {
    /// The new ball velocity
    pub velocity: Vector2,

    /// Speed at which the ball was moving into the surface, 0 when separating
    pub incoming_normal_speed: f32,
}

/// Splits the velocity along the contact normal and applies bounce and friction.
///
/// A ball moving into the surface leaves it with `restitution` of its incoming
/// normal speed. A bounce that would come out slower than `min_bounce_speed`,
/// after an impact faster than half of it, is raised to
/// `min(min_bounce_speed, incoming)`, so the outgoing speed never exceeds the
/// incoming one. Floors are exempt from that clamp: a weak bounce on ground that
/// holds the ball up against gravity dies out so the ball can come to rest. The
/// tangential part is scaled by `1 - friction` on every contact.
pub fn resolve_velocity(
    velocity: Vector2,
    normal: Vector2,
    material: &PhysicalMaterial,
    config: &SimulationConfig,
) -> ContactResponse {
    let normal_speed = velocity.dot(&normal);
    let tangential = velocity - normal * normal_speed;

    let (normal_component, incoming_normal_speed) = if normal_speed < 0.0 {
        let incoming = -normal_speed;
        let mut outgoing = incoming * material.restitution;
        if !is_floor(normal, config)
            && outgoing < config.min_bounce_speed
            && incoming > config.min_bounce_speed * 0.5
        {
            outgoing = config.min_bounce_speed.min(incoming);
        }
        (normal * outgoing, incoming)
    } else {
        (normal * normal_speed, 0.0)
    };

    ContactResponse {
        velocity: normal_component + tangential * (1.0 - material.friction),
        incoming_normal_speed,
    }
}

/// Whether a contact normal is flat ground pushing the ball against gravity
fn is_floor(normal: Vector2, config: &SimulationConfig) -> bool {
    normal.y * config.gravity < 0.0 && normal.y.abs() > config.flat_normal_threshold
}

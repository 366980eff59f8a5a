use crate::bodies::Ball;
use crate::collision::{find_deepest_contact, resolve_velocity};
use crate::core::{
    AntiStuckState, EventQueue, ShapeStorage, SimulationConfig, SimulationEvent, StopReason,
};
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::math::Vector2;

/// Advances the ball by one fixed sub-step. Returns whether it is still moving.
///
/// The ball is integrated, then up to `collision_iterations` deepest contacts are
/// resolved, each one pushing the ball out and applying bounce and friction. A
/// hazard contact halts the ball and queues [`SimulationEvent::HazardTouched`].
/// The ball is forced to rest when the anti-stuck counter trips, and settles when
/// it is slow on flat ground. A slow ball in free flight only settles when gravity
/// is off. A ball at rest is left untouched.
pub fn advance(
    ball: &mut Ball,
    shapes: &ShapeStorage,
    dt: f32,
    anti_stuck: &mut AntiStuckState,
    config: &SimulationConfig,
    events: &mut EventQueue,
) -> bool {
    if !ball.is_moving() {
        return false;
    }

    SymplecticEulerIntegrator::from_config(config).integrate(ball, dt);

    anti_stuck.begin_substep();
    let mut last_normal: Option<Vector2> = None;

    for _ in 0..config.collision_iterations {
        let Some(contact) = find_deepest_contact(ball, shapes, config) else {
            break;
        };

        ball.translate(contact.normal * (contact.depth * config.penetration_push_factor));

        if contact.shape.is_hazard() {
            log::debug!("hazard {:?} touched at {}", contact.shape_id, ball.get_position());
            ball.halt();
            anti_stuck.reset();
            events.push(SimulationEvent::HazardTouched {
                shape: contact.shape_id,
                position: ball.get_position(),
            });
            return false;
        }

        if anti_stuck.register_contact(contact.shape_id, config.toggle_threshold) {
            log::debug!(
                "ball stuck after {} alternating contacts, forcing it to rest",
                anti_stuck.get_toggle_count()
            );
            return stop(ball, anti_stuck, events, StopReason::Stuck);
        }

        let response = resolve_velocity(
            ball.get_velocity(),
            contact.normal,
            &contact.shape.get_material(),
            config,
        );
        if response.incoming_normal_speed > config.min_bounce_speed * 0.5 {
            events.push(SimulationEvent::SurfaceImpact {
                shape: contact.shape_id,
                surface: contact.shape.surface_kind(),
                normal_speed: response.incoming_normal_speed,
            });
        }
        ball.set_velocity(response.velocity);
        last_normal = Some(contact.normal);
    }

    anti_stuck.end_substep();

    // Airborne, only a weightless ball may stop; under gravity it has to land first
    let slow = ball.get_velocity().length_squared() < config.stop_speed * config.stop_speed;
    let supported = match last_normal {
        Some(normal) => normal.y.abs() > config.flat_normal_threshold,
        None => config.gravity == 0.0,
    };
    if slow && supported {
        return stop(ball, anti_stuck, events, StopReason::Settled);
    }

    true
}

fn stop(
    ball: &mut Ball,
    anti_stuck: &mut AntiStuckState,
    events: &mut EventQueue,
    reason: StopReason,
) -> bool {
    ball.halt();
    anti_stuck.reset();
    log::debug!("ball stopped at {} ({reason:?})", ball.get_position());
    events.push(SimulationEvent::BallStopped {
        position: ball.get_position(),
        reason,
    });
    false
}

use minigolf_physics::{
    DragController, Level, SimulationConfig, SimulationEvent, SimulationSession, Vector2,
};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES_PER_SHOT: usize = 60 * 20;
const BALL_RADIUS: f32 = 7.0;

/// Drag offsets from the ball for each stroke, as a player would pull back
const DRAGS: [(f32, f32); 4] = [(-60.0, 20.0), (-90.0, 40.0), (-40.0, 10.0), (-120.0, 60.0)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let level = Level::from_json_str(include_str!("practice_green.json"))?;
    println!("Loaded '{}' with {} shapes", level.get_name(), level.get_shapes().len());

    let mut session = SimulationSession::from_level(SimulationConfig::default(), level, BALL_RADIUS)?;
    let mut drag = DragController::new();

    for (dx, dy) in DRAGS {
        let ball = session.get_ball().get_position();
        let shot_config = session.get_config().shot;

        if !drag.begin(ball, ball, BALL_RADIUS) {
            continue;
        }
        let Some(shot) = drag.release(ball + Vector2::new(dx, dy), &shot_config) else {
            continue;
        };

        let preview = session.preview(&shot);
        println!(
            "\nStroke {}: force {:.0} at {:.1} degrees, preview ends near {}",
            session.get_strokes() + 1,
            shot.force,
            shot.angle_degrees,
            preview.last().copied().unwrap_or(ball)
        );
        if !session.apply_shot(shot) {
            continue;
        }

        let mut frames = 0;
        while session.get_ball().is_moving() && frames < MAX_FRAMES_PER_SHOT {
            session.step_frame(FRAME_DT);
            frames += 1;
        }

        let mut drowned = false;
        for event in session.drain_events() {
            match event {
                SimulationEvent::ShotApplied { .. } => {}
                SimulationEvent::SurfaceImpact { surface, normal_speed, .. } => {
                    println!("  impact on {surface:?} at {normal_speed:.0} px/s");
                }
                SimulationEvent::HazardTouched { shape, position } => {
                    println!("  splash in {shape} at {position}");
                    drowned = true;
                }
                SimulationEvent::BallStopped { position, reason } => {
                    println!("  stopped at {position} ({reason:?}) after {frames} frames");
                }
            }
        }

        if drowned {
            session.return_to_safe_position();
            println!("  ball returned to {}", session.get_ball().get_position());
        }
    }

    println!("\n{} strokes played", session.get_strokes());
    Ok(())
}

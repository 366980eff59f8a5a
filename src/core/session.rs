use crate::bodies::Ball;
use crate::core::{
    advance, AntiStuckState, EventQueue, FrameStep, ShapeStorage, SimulationConfig,
    SimulationEvent, SubStepAccumulator,
};
use crate::input::Shot;
use crate::integration::predict;
use crate::level::Level;
use crate::math::Vector2;
use crate::Result;

/// Everything one hole attempt needs: the ball, the level shapes and the state
/// carried between sub-steps and frames.
///
/// The game loop applies shots, calls [`SimulationSession::step_frame`] once per
/// rendered frame and drains the events afterwards.
#[derive(Debug)]
pub struct SimulationSession {
    config: SimulationConfig,
    ball: Ball,
    shapes: ShapeStorage,
    anti_stuck: AntiStuckState,
    accumulator: SubStepAccumulator,
    events: EventQueue,
    start_position: Vector2,
    safe_position: Vector2,
    strokes: u32,
}

impl SimulationSession {
    /// Creates a session. The ball's current position becomes the start marker.
    pub fn new(config: SimulationConfig, ball: Ball, shapes: ShapeStorage) -> Result<Self> {
        config.validate()?;

        let start_position = ball.get_position();
        log::info!(
            "simulation session created with {} shapes, ball at {}",
            shapes.len(),
            start_position
        );

        Ok(Self {
            config,
            ball,
            shapes,
            anti_stuck: AntiStuckState::new(),
            accumulator: SubStepAccumulator::new(),
            events: EventQueue::new(),
            start_position,
            safe_position: start_position,
            strokes: 0,
        })
    }

    /// Creates a session for a level with a ball of the given radius on its start marker
    pub fn from_level(config: SimulationConfig, level: Level, ball_radius: f32) -> Result<Self> {
        let (_, ball_start, shapes) = level.into_parts();
        let ball = Ball::new(ball_start, ball_radius)?;
        Self::new(config, ball, shapes)
    }

    /// Returns the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the ball
    pub fn get_ball(&self) -> &Ball {
        &self.ball
    }

    /// Returns the level shapes
    pub fn get_shapes(&self) -> &ShapeStorage {
        &self.shapes
    }

    /// Returns the anti-stuck bookkeeping
    pub fn get_anti_stuck(&self) -> &AntiStuckState {
        &self.anti_stuck
    }

    /// Returns the time banked for the next frame
    pub fn get_accumulated_time(&self) -> f32 {
        self.accumulator.get_accumulated()
    }

    /// Number of shots taken since the session started or the level changed
    pub fn get_strokes(&self) -> u32 {
        self.strokes
    }

    /// Returns the start marker
    pub fn get_start_position(&self) -> Vector2 {
        self.start_position
    }

    /// Returns where the ball was when the last shot was taken
    pub fn get_safe_position(&self) -> Vector2 {
        self.safe_position
    }

    /// Launches the ball.
    ///
    /// Ignored while the ball is moving or when the shot has no force. Returns whether
    /// the shot was applied.
    pub fn apply_shot(&mut self, shot: Shot) -> bool {
        if self.ball.is_moving() {
            log::debug!("shot ignored: ball still moving");
            return false;
        }
        if !shot.is_shot() {
            return false;
        }

        self.safe_position = self.ball.get_position();
        self.anti_stuck.reset();
        self.accumulator.reset();
        self.ball.launch(shot.velocity());
        self.strokes += 1;

        log::debug!(
            "stroke {}: force {:.1} at {:.1} degrees",
            self.strokes,
            shot.force,
            shot.angle_degrees
        );
        self.events.push(SimulationEvent::ShotApplied {
            stroke: self.strokes,
            shot,
        });
        true
    }

    /// Advances the simulation by one rendered frame.
    ///
    /// While the ball is at rest no time is banked.
    pub fn step_frame(&mut self, frame_dt: f32) -> FrameStep {
        if !self.ball.is_moving() {
            self.accumulator.reset();
            return FrameStep::default();
        }

        let Self {
            config,
            ball,
            shapes,
            anti_stuck,
            accumulator,
            events,
            ..
        } = self;

        accumulator.step_frame(
            frame_dt,
            config.fixed_time_step,
            config.max_substeps_per_frame,
            |dt| advance(ball, shapes, dt, anti_stuck, config, events),
        )
    }

    /// Runs exactly one fixed sub-step. Returns whether the ball is still moving.
    pub fn advance_substep(&mut self) -> bool {
        advance(
            &mut self.ball,
            &self.shapes,
            self.config.fixed_time_step,
            &mut self.anti_stuck,
            &self.config,
            &mut self.events,
        )
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<SimulationEvent> {
        self.events.next_event()
    }

    /// Removes and returns every queued event in order
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        self.events.drain().collect()
    }

    /// Returns the event queue without draining it
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Puts the ball back on the start marker, at rest
    pub fn reset_ball(&mut self) {
        self.place_ball(self.start_position);
        self.safe_position = self.start_position;
    }

    /// Puts the ball back where the last shot was taken, at rest.
    ///
    /// This is the usual answer to [`SimulationEvent::HazardTouched`].
    pub fn return_to_safe_position(&mut self) {
        self.place_ball(self.safe_position);
    }

    /// Sampled aim preview for `shot` from the ball's current position.
    ///
    /// Collisions are ignored. One point is kept every `preview_sample_interval`
    /// sub-steps.
    pub fn preview(&self, shot: &Shot) -> Vec<Vector2> {
        if !shot.is_shot() {
            return Vec::new();
        }

        let interval = self.config.preview_sample_interval.max(1) as usize;
        predict(
            self.ball.get_position(),
            shot.velocity(),
            self.config.gravity,
            self.config.damping_factor,
            self.config.fixed_time_step,
            self.config.preview_steps(),
        )
        .with_min_speed(self.config.preview_min_speed)
        .skip(interval - 1)
        .step_by(interval)
        .collect()
    }

    /// Swaps the level shapes wholesale. The ball keeps its place but is halted.
    pub fn replace_shapes(&mut self, shapes: ShapeStorage) {
        log::info!("replacing {} shapes with {}", self.shapes.len(), shapes.len());
        self.shapes = shapes;
        self.place_ball(self.ball.get_position());
    }

    /// Loads another level: new shapes, new start marker, stroke count reset
    pub fn load_level(&mut self, level: Level) {
        let (name, ball_start, shapes) = level.into_parts();
        log::info!("loading level '{name}'");
        self.shapes = shapes;
        self.start_position = ball_start;
        self.strokes = 0;
        self.events.clear();
        self.reset_ball();
    }

    fn place_ball(&mut self, position: Vector2) {
        self.ball.place(position);
        self.anti_stuck.reset();
        self.accumulator.reset();
    }
}

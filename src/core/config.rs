use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::input::ShotConfig;
use crate::Result;

/// Configuration parameters for the ball simulation.
///
/// Units are pixels and seconds in a y-down world. Every threshold the stepper,
/// resolver, accumulator and preview use lives here. Deserializing a partial
/// document keeps the defaults for the fields it leaves out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Downward acceleration in pixels per second squared
    pub gravity: f32,

    /// Fraction of velocity retained per second, applied as `damping_factor^dt`
    pub damping_factor: f32,

    /// Duration of one physics sub-step
    pub fixed_time_step: f32,

    /// Maximum number of sub-steps run for one rendered frame
    pub max_substeps_per_frame: u32,

    /// Number of resolve passes per sub-step
    pub collision_iterations: u32,

    /// Multiplier on the penetration depth when pushing the ball out
    pub penetration_push_factor: f32,

    /// Slack added to `radius²` in the overlap test
    pub contact_epsilon: f32,

    /// Contacts shallower than this are ignored
    pub min_penetration_depth: f32,

    /// Below this speed the ball may come to rest
    pub stop_speed: f32,

    /// Minimum outgoing speed of a bounce
    pub min_bounce_speed: f32,

    /// `|normal.y|` above which a contact counts as flat ground
    pub flat_normal_threshold: f32,

    /// Consecutive shape alternations that force the ball to rest
    pub toggle_threshold: u32,

    /// Simulated time covered by the aim preview, in seconds
    pub preview_duration: f32,

    /// Keep one preview point every this many sub-steps
    pub preview_sample_interval: u32,

    /// The preview ends when the speed drops below this
    pub preview_min_speed: f32,

    /// Drag-to-shot limits
    pub shot: ShotConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 980.0,
            damping_factor: 0.90,
            fixed_time_step: 1.0 / 480.0,
            max_substeps_per_frame: 32,
            collision_iterations: 3,
            penetration_push_factor: 1.01,
            contact_epsilon: 1.0e-5,
            min_penetration_depth: 1.0e-4,
            stop_speed: 8.0,
            min_bounce_speed: 15.0,
            flat_normal_threshold: 0.9,
            toggle_threshold: 4,
            preview_duration: 0.75,
            preview_sample_interval: 12,
            preview_min_speed: 1.0,
            shot: ShotConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON document and validates the result
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of sub-steps the aim preview simulates
    pub fn preview_steps(&self) -> usize {
        (self.preview_duration / self.fixed_time_step).round().max(0.0) as usize
    }

    /// Checks every parameter for a usable value
    pub fn validate(&self) -> Result<()> {
        fn invalid(message: String) -> Result<()> {
            Err(PhysicsError::InvalidParameter(message))
        }

        if !self.gravity.is_finite() {
            return invalid(format!("gravity must be finite, got {}", self.gravity));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return invalid(format!(
                "damping_factor must be within (0, 1], got {}",
                self.damping_factor
            ));
        }
        if !(self.fixed_time_step.is_finite() && self.fixed_time_step > 0.0) {
            return invalid(format!(
                "fixed_time_step must be positive, got {}",
                self.fixed_time_step
            ));
        }
        if self.max_substeps_per_frame == 0 {
            return invalid("max_substeps_per_frame must be at least 1".to_string());
        }
        if self.collision_iterations == 0 {
            return invalid("collision_iterations must be at least 1".to_string());
        }
        if !(self.penetration_push_factor >= 1.0 && self.penetration_push_factor.is_finite()) {
            return invalid(format!(
                "penetration_push_factor must be at least 1, got {}",
                self.penetration_push_factor
            ));
        }
        if !(self.contact_epsilon >= 0.0 && self.min_penetration_depth >= 0.0) {
            return invalid("contact tolerances must not be negative".to_string());
        }
        if !(self.stop_speed >= 0.0 && self.min_bounce_speed >= 0.0) {
            return invalid("speed thresholds must not be negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.flat_normal_threshold) {
            return invalid(format!(
                "flat_normal_threshold must be within [0, 1], got {}",
                self.flat_normal_threshold
            ));
        }
        if self.toggle_threshold == 0 {
            return invalid("toggle_threshold must be at least 1".to_string());
        }
        if !(self.preview_duration >= 0.0 && self.preview_min_speed >= 0.0) {
            return invalid("preview parameters must not be negative".to_string());
        }
        if self.preview_sample_interval == 0 {
            return invalid("preview_sample_interval must be at least 1".to_string());
        }

        self.shot.validate()
    }
}

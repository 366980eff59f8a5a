use crate::bodies::SurfaceKind;
use crate::core::ShapeId;
use crate::input::Shot;
use crate::math::Vector2;
use std::collections::VecDeque;

/// Why the ball came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The ball slowed below the stop speed on flat ground, or in weightless free flight
    Settled,

    /// The ball kept alternating between shapes and was forced to rest
    Stuck,
}

/// A notification produced by the simulation for the game layer
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// A shot was applied to the ball
    ShotApplied {
        /// Stroke number of the shot, starting at 1
        stroke: u32,

        /// The applied shot
        shot: Shot,
    },

    /// The ball bounced off a surface hard enough to be heard
    SurfaceImpact {
        /// The shape that was hit
        shape: ShapeId,

        /// Its surface kind
        surface: SurfaceKind,

        /// Incoming speed along the contact normal
        normal_speed: f32,
    },

    /// The ball touched a hazard and was halted
    HazardTouched {
        /// The hazard shape
        shape: ShapeId,

        /// Ball position after being pushed out of the hazard
        position: Vector2,
    },

    /// The ball came to rest
    BallStopped {
        /// Resting position
        position: Vector2,

        /// Why it stopped
        reason: StopReason,
    },
}

/// A queue of simulation events, drained by the caller after stepping
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SimulationEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push_back(event);
    }

    /// Gets the next event from the queue
    pub fn next_event(&mut self) -> Option<SimulationEvent> {
        self.events.pop_front()
    }

    /// Removes and returns every queued event in order
    pub fn drain(&mut self) -> impl Iterator<Item = SimulationEvent> + '_ {
        self.events.drain(..)
    }

    /// Iterates the queued events without removing them
    pub fn iter(&self) -> impl Iterator<Item = &SimulationEvent> {
        self.events.iter()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns whether a hazard was touched since the queue was last drained
    pub fn has_hazard(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimulationEvent::HazardTouched { .. }))
    }
}

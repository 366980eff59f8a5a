pub mod config;
pub mod storage;
pub mod events;
mod anti_stuck;
mod stepper;
mod accumulator;
mod session;

pub use self::config::SimulationConfig;
pub use self::storage::ShapeStorage;
pub use self::events::{EventQueue, SimulationEvent, StopReason};
pub use self::anti_stuck::AntiStuckState;
pub use self::stepper::advance;
pub use self::accumulator::{FrameStep, SubStepAccumulator};
pub use self::session::SimulationSession;

use std::fmt;

/// A unique identifier for a shape in a [`ShapeStorage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u32);

impl ShapeId {
    /// The raw id value
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

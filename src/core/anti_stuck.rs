use crate::core::ShapeId;

/// Counts how often consecutive contacts alternate between shapes.
///
/// A ball wedged between two surfaces gets pushed from one into the other every
/// sub-step. Each switch of contact shape is a toggle; once the toggles reach the
/// configured threshold without a calm sub-step in between, the stepper forces the
/// ball to rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AntiStuckState {
    last_contact: Option<ShapeId>,
    toggle_count: u32,
    touched_this_substep: bool,
    toggled_this_substep: bool,
}

impl AntiStuckState {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape of the most recent resolved contact
    pub fn get_last_contact(&self) -> Option<ShapeId> {
        self.last_contact
    }

    /// Current run of alternating contacts
    pub fn get_toggle_count(&self) -> u32 {
        self.toggle_count
    }

    /// Forgets all contact history. Called for a new shot and when the ball stops.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn begin_substep(&mut self) {
        self.touched_this_substep = false;
        self.toggled_this_substep = false;
    }

    /// Records a resolved contact. Returns true when the ball should be forced to rest.
    pub(crate) fn register_contact(&mut self, shape: ShapeId, threshold: u32) -> bool {
        self.touched_this_substep = true;
        if self.last_contact.is_some_and(|last| last != shape) {
            self.toggle_count += 1;
            self.toggled_this_substep = true;
        }
        self.last_contact = Some(shape);

        self.toggle_count >= threshold
    }

    pub(crate) fn end_substep(&mut self) {
        if !self.touched_this_substep {
            self.last_contact = None;
            self.toggle_count = 0;
        } else if !self.toggled_this_substep {
            self.toggle_count = 0;
        }
    }
}

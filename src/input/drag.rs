use crate::input::{compute_shot, Shot, ShotConfig};
use crate::math::Vector2;

/// Tracks a pointer drag that aims a shot.
///
/// The drag is anchored on the ball: it can only begin with the pointer over the
/// ball, and the ball position is the drag start for the whole gesture.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    anchor: Option<Vector2>,
    current: Option<Vector2>,
}

impl DragController {
    /// Creates an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer pressed. Starts a drag when `pointer` lies on the ball.
    ///
    /// Returns whether a drag started.
    pub fn begin(&mut self, pointer: Vector2, ball_position: Vector2, ball_radius: f32) -> bool {
        if pointer.distance_squared(&ball_position) > ball_radius * ball_radius {
            return false;
        }

        self.anchor = Some(ball_position);
        self.current = Some(pointer);
        log::trace!("drag started at {ball_position}");
        true
    }

    /// Whether a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// The drag start and the latest pointer position
    pub fn get_drag(&self) -> Option<(Vector2, Vector2)> {
        Some((self.anchor?, self.current?))
    }

    /// Pointer moved. Returns the shot the drag would produce now.
    pub fn update(&mut self, pointer: Vector2, config: &ShotConfig) -> Option<Shot> {
        let anchor = self.anchor?;
        self.current = Some(pointer);
        Some(compute_shot(anchor, pointer, config))
    }

    /// Pointer released. Ends the drag and returns the final shot.
    ///
    /// The shot may be [`Shot::NONE`] when the drag was too short.
    pub fn release(&mut self, pointer: Vector2, config: &ShotConfig) -> Option<Shot> {
        let anchor = self.anchor.take()?;
        self.current = None;
        Some(compute_shot(anchor, pointer, config))
    }

    /// Abandons the drag without producing a shot
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.current = None;
    }
}

mod shot;
mod drag;

pub use self::shot::{compute_shot, Shot, ShotConfig};
pub use self::drag::DragController;

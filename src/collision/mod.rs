mod broad_phase;
mod narrow_phase;
mod contact;
mod resolver;
mod response;

pub use self::broad_phase::{BroadPhase, BruteForceBroadPhase};
pub use self::narrow_phase::{ClosestPointNarrowPhase, NarrowPhase};
pub use self::contact::Contact;
pub use self::resolver::{find_deepest_contact, find_deepest_contact_with};
pub use self::response::{resolve_velocity, ContactResponse};

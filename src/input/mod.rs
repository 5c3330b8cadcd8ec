//! Input handling: event types, the pointer tracker, the offset accumulator,
//! and the listener registries surfaces use to reach controllers.

/// Platform-agnostic input events.
pub mod event;
/// Listener registries for surfaces and focus loss.
pub mod hub;
/// Primary-pointer offset tracking.
pub mod offset;
/// Press-ordered pointer set.
pub mod pointers;

pub use event::{InputEvent, PointerId};
pub use hub::{EventHub, FocusChannel, InputSurface, ListenerId, SurfaceId};
pub use offset::{Offset, OffsetAccumulator};
pub use pointers::PointerSet;

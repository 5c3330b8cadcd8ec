/// Platform-agnostic input events.
///
/// Surfaces broadcast these to attached controllers through an
/// [`EventHub`](super::EventHub); the focus channel only ever carries
/// [`InputEvent::FocusLost`].
///
/// # Example
///
/// ```
/// # use touchcam::input::{InputEvent, PointerId};
/// let down = InputEvent::PointerDown {
///     pointer: PointerId(3),
///     x: 100.0,
///     y: 200.0,
/// };
/// assert_eq!(down.pointer(), Some(PointerId(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer made contact with the surface.
    PointerDown {
        /// Which pointer.
        pointer: PointerId,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A pointer lifted off the surface.
    PointerUp {
        /// Which pointer.
        pointer: PointerId,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A held or hovering pointer moved.
    PointerMove {
        /// Which pointer.
        pointer: PointerId,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The platform aborted the contact (palm rejection, gesture takeover).
    PointerCancel {
        /// Which pointer.
        pointer: PointerId,
    },
    /// The pointer left the surface bounds.
    PointerOut {
        /// Which pointer.
        pointer: PointerId,
    },
    /// The application lost input focus.
    FocusLost,
}

impl InputEvent {
    /// Pointer the event refers to, if any.
    #[must_use]
    pub fn pointer(&self) -> Option<PointerId> {
        match *self {
            Self::PointerDown { pointer, .. }
            | Self::PointerUp { pointer, .. }
            | Self::PointerMove { pointer, .. }
            | Self::PointerCancel { pointer }
            | Self::PointerOut { pointer } => Some(pointer),
            Self::FocusLost => None,
        }
    }

    /// Whether the event ends a contact. Cancel and out count as up.
    #[must_use]
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            Self::PointerUp { .. }
                | Self::PointerCancel { .. }
                | Self::PointerOut { .. }
        )
    }
}

/// Identifier of a touch, pen or mouse contact.
///
/// Touch ids come from the platform and are only unique while the contact
/// is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Pointer used to emulate touch with the primary mouse button.
    pub const MOUSE: Self = Self(u64::MAX);
}

#[cfg(feature = "viewer")]
impl From<&winit::event::Touch> for InputEvent {
    fn from(touch: &winit::event::Touch) -> Self {
        use winit::event::TouchPhase;

        let pointer = PointerId(touch.id);
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            TouchPhase::Started => Self::PointerDown { pointer, x, y },
            TouchPhase::Moved => Self::PointerMove { pointer, x, y },
            TouchPhase::Ended => Self::PointerUp { pointer, x, y },
            TouchPhase::Cancelled => Self::PointerCancel { pointer },
        }
    }
}

use glam::Vec2;

/// Screen-space movement of the primary pointer, Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    /// Horizontal movement in pixels (right is positive).
    pub dx: f32,
    /// Vertical movement in pixels (up is positive).
    pub dy: f32,
}

/// Turns primary-pointer positions into a pending screen offset.
///
/// The origin is captured once when the primary pointer is pressed and stays
/// fixed for the whole contact, so each move reports the displacement from
/// the press point rather than from the previous move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetAccumulator {
    origin: Option<Vec2>,
    offset: Option<Offset>,
}

impl OffsetAccumulator {
    /// Create an idle accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the press location of a new primary pointer.
    pub fn begin(&mut self, point: Vec2) {
        self.origin = Some(point);
    }

    /// Update the pending offset from a primary-pointer move.
    ///
    /// Returns `None` without touching state when no origin is set.
    pub fn track(&mut self, point: Vec2) -> Option<Offset> {
        let origin = self.origin?;
        let offset = Offset {
            dx: point.x - origin.x,
            dy: -(point.y - origin.y),
        };
        self.offset = Some(offset);
        Some(offset)
    }

    /// Forget the origin and any pending offset.
    pub fn reset(&mut self) {
        self.origin = None;
        self.offset = None;
    }

    /// Pending offset, if the primary pointer has moved since its press.
    #[must_use]
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// Press location of the current primary pointer.
    #[must_use]
    pub fn origin(&self) -> Option<Vec2> {
        self.origin
    }

    /// Whether an origin is set and moves will be tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}

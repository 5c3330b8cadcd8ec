use super::event::PointerId;

/// Press-ordered set of held pointers.
///
/// The pointer at position 0 is the primary pointer: the first-pressed
/// contact that is still held. Concurrent contacts are bounded by the
/// hardware (usually ten or fewer), so a plain vector with linear removal
/// is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerSet {
    held: Vec<PointerId>,
}

impl PointerSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press. Returns `true` when this press made the set go from
    /// empty to a single pointer, i.e. `id` became primary.
    ///
    /// Pressing an id that is already held is a no-op.
    pub fn press(&mut self, id: PointerId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.held.push(id);
        self.held.len() == 1
    }

    /// Remove a pointer, keeping the relative order of the rest.
    ///
    /// Returns the position the pointer held before removal, or `None` if
    /// it was not in the set.
    pub fn release(&mut self, id: PointerId) -> Option<usize> {
        let index = self.held.iter().position(|&p| p == id)?;
        let _ = self.held.remove(index);
        Some(index)
    }

    /// First-pressed pointer that is still held.
    #[must_use]
    pub fn primary(&self) -> Option<PointerId> {
        self.held.first().copied()
    }

    /// Whether `id` is currently held.
    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.held.contains(&id)
    }

    /// Number of held pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// Whether no pointer is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Two or more pointers held.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.held.len() > 1
    }

    /// Drop every held pointer.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Held pointers in press order.
    pub fn iter(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.held.iter().copied()
    }
}
